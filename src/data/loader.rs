use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

use super::model::{CellValue, SampleTable};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one sample per line:
///
/// ```text
/// index,voltage
/// 0,1.64825
/// 1,1.65312
/// ```
///
/// Cell types are inferred per field. Required columns are not checked
/// here; asking the table for a missing one fails with `MissingColumn`.
pub fn load_csv(path: &Path) -> Result<SampleTable> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let parse_err = |source: csv::Error| Error::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let rows = reader
        .records()
        .map(|result| {
            result
                .map(|record| record.iter().map(CellValue::infer).collect::<Vec<_>>())
                .map_err(parse_err)
        })
        .collect::<Result<Vec<_>>>()?;

    let table = SampleTable::from_rows(headers, rows);
    log::debug!(
        "Parsed {} rows with columns {:?} from {}",
        table.len(),
        table.column_names(),
        path.display()
    );
    Ok(table)
}
