use std::fmt;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the sample table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred from the CSV text.
#[derive(Debug, Clone)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
}

// -- Manual PartialEq so a `NaN` cell equals itself --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        use CellValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a.total_cmp(b).is_eq(),
            (Bool(a), Bool(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}

impl CellValue {
    /// Infer the type of a raw CSV field.
    ///
    /// Integer-like text becomes `Integer`, decimal-like text `Float`.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    /// Numeric view of the cell. `Null` reads as `NaN` so it plots as a gap.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Null => Some(f64::NAN),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// SampleTable – the loaded CSV, column-major
// ---------------------------------------------------------------------------

/// In-memory columnar view of the CSV. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    /// Header names, in file order.
    column_names: Vec<String>,
    /// One vector per header entry; all the same length.
    columns: Vec<Vec<CellValue>>,
}

impl SampleTable {
    /// Build a table from a header and row-major records.
    ///
    /// Every row must have exactly `column_names.len()` cells; the loader
    /// guarantees this through the csv reader's field-count check.
    pub fn from_rows(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut columns: Vec<Vec<CellValue>> = column_names
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for row in rows {
            debug_assert_eq!(row.len(), columns.len());
            for (col, cell) in columns.iter_mut().zip(row) {
                col.push(cell);
            }
        }

        SampleTable {
            column_names,
            columns,
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a column by exact (case-sensitive) name.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.column_names
            .iter()
            .position(|c| c == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Like [`column`](Self::column) but fails with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<&[CellValue]> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
            available: self.column_names.clone(),
        })
    }

    /// Column values as `f64`, failing on the first non-numeric cell.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        self.require_column(name)?
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                cell.as_f64().ok_or_else(|| Error::Render {
                    column: name.to_string(),
                    row,
                    value: cell.to_string(),
                })
            })
            .collect()
    }

    /// Whether the column is non-decreasing. Gaps (`NaN`) are skipped.
    pub fn is_sorted_by(&self, name: &str) -> Result<bool> {
        let values = self.numeric_column(name)?;
        let mut finite = values.iter().filter(|v| !v.is_nan());
        let Some(mut prev) = finite.next() else {
            return Ok(true);
        };
        for v in finite {
            if v < prev {
                return Ok(false);
            }
            prev = v;
        }
        Ok(true)
    }
}
