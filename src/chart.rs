use serde::Serialize;

use crate::color::{series_color, Rgb};
use crate::data::model::SampleTable;
use crate::error::Result;

pub const X_COLUMN: &str = "index";
pub const Y_COLUMN: &str = "voltage";

pub const TITLE: &str = "Recorded Mic Signal via ADS1115";
pub const X_LABEL: &str = "Sample Index";
pub const Y_LABEL: &str = "Voltage (V)";
pub const SERIES_NAME: &str = "Mic Voltage";

/// Figure size in logical pixels: 10 x 4 inches at 100 dpi.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 400.0];

// ---------------------------------------------------------------------------
// Chart specification
// ---------------------------------------------------------------------------

/// Everything the viewer needs to draw the figure. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub window_size: [f32; 2],
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_grid: bool,
    pub show_legend: bool,
    pub series: Vec<Series>,
}

/// One plotted line, points in row order.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    /// `[x, y]` pairs. A `NaN` coordinate marks a gap.
    pub points: Vec<[f64; 2]>,
}

// -- Manual PartialEq so gap points compare equal --

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.color == other.color
            && self.points.len() == other.points.len()
            && self.points.iter().zip(&other.points).all(|(a, b)| {
                a[0].total_cmp(&b[0]).is_eq() && a[1].total_cmp(&b[1]).is_eq()
            })
    }
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Series {
    /// Maximal runs of points whose x and y are both finite.
    pub fn segments(&self) -> impl Iterator<Item = &[[f64; 2]]> {
        self.points
            .split(|p| !p[0].is_finite() || !p[1].is_finite())
            .filter(|run| !run.is_empty())
    }
}

/// Build the mic-voltage chart: `voltage` against `index`.
///
/// Column access happens here, so a table without either column fails with
/// `MissingColumn` before any window exists. Rows are plotted in file order;
/// an unsorted `index` is reported, not reordered.
pub fn build_chart(table: &SampleTable) -> Result<ChartSpec> {
    let xs = table.numeric_column(X_COLUMN)?;
    let ys = table.numeric_column(Y_COLUMN)?;

    if !table.is_sorted_by(X_COLUMN)? {
        log::warn!("'{X_COLUMN}' column is not ascending; the line follows file order");
    }

    let points: Vec<[f64; 2]> = xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect();

    let spec = ChartSpec {
        window_size: WINDOW_SIZE,
        title: TITLE.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        show_grid: true,
        show_legend: true,
        series: vec![Series {
            name: SERIES_NAME.to_string(),
            color: series_color(0),
            points,
        }],
    };

    if log::log_enabled!(log::Level::Trace) {
        if let Ok(json) = spec.to_json() {
            log::trace!("chart spec: {json}");
        }
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::error::Error;

    fn table(header: &[&str], rows: &[&[&str]]) -> SampleTable {
        SampleTable::from_rows(
            header.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| CellValue::infer(c)).collect())
                .collect(),
        )
    }

    fn reference_table() -> SampleTable {
        table(
            &["index", "voltage"],
            &[&["0", "0.1"], &["1", "0.2"], &["2", "0.15"], &["3", "0.3"]],
        )
    }

    #[test]
    fn test_build_chart_single_series_in_order() {
        let spec = build_chart(&reference_table()).unwrap();

        assert_eq!(spec.series.len(), 1);
        let series = &spec.series[0];
        assert_eq!(series.name, "Mic Voltage");
        assert_eq!(
            series.points,
            vec![[0.0, 0.1], [1.0, 0.2], [2.0, 0.15], [3.0, 0.3]]
        );
    }

    #[test]
    fn test_build_chart_fixed_labels() {
        let spec = build_chart(&reference_table()).unwrap();

        assert_eq!(spec.title, "Recorded Mic Signal via ADS1115");
        assert_eq!(spec.x_label, "Sample Index");
        assert_eq!(spec.y_label, "Voltage (V)");
        assert_eq!(spec.window_size, [1000.0, 400.0]);
        assert!(spec.show_grid);
        assert!(spec.show_legend);
    }

    #[test]
    fn test_build_chart_is_idempotent() {
        let t = reference_table();
        let first = build_chart(&t).unwrap();
        let second = build_chart(&t).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_missing_voltage_column() {
        let t = table(&["index", "volts"], &[&["0", "0.1"]]);
        match build_chart(&t) {
            Err(Error::MissingColumn { column, .. }) => assert_eq!(column, "voltage"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_index_column() {
        let t = table(&["voltage"], &[&["0.1"]]);
        assert!(matches!(
            build_chart(&t),
            Err(Error::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_non_numeric_voltage() {
        let t = table(&["index", "voltage"], &[&["0", "0.1"], &["1", "clip"]]);
        assert!(matches!(build_chart(&t), Err(Error::Render { row: 1, .. })));
    }

    #[test]
    fn test_unsorted_index_is_kept_in_file_order() {
        let t = table(
            &["index", "voltage"],
            &[&["2", "0.3"], &["0", "0.1"], &["1", "0.2"]],
        );
        let spec = build_chart(&t).unwrap();
        let xs: Vec<f64> = spec.series[0].points.iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_segments_split_on_gaps() {
        let t = table(
            &["index", "voltage"],
            &[&["0", "0.1"], &["1", ""], &["2", "0.2"], &["3", "0.3"]],
        );
        let spec = build_chart(&t).unwrap();
        let segments: Vec<_> = spec.series[0].segments().collect();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [[0.0, 0.1]]);
        assert_eq!(segments[1], [[2.0, 0.2], [3.0, 0.3]]);
    }

    #[test]
    fn test_build_chart_with_gap_is_idempotent() {
        let t = table(
            &["index", "voltage"],
            &[&["0", "0.1"], &["1", ""], &["2", "0.3"]],
        );
        let first = build_chart(&t).unwrap();
        let second = build_chart(&t).unwrap();

        assert!(first.series[0].points[1][1].is_nan());
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_with_different_points_differ() {
        let a = build_chart(&reference_table()).unwrap();
        let mut b = a.clone();
        b.series[0].points[2][1] = f64::NAN;
        assert_ne!(a, b);
    }

    #[test]
    fn test_segments_split_on_missing_index() {
        let t = table(
            &["index", "voltage"],
            &[&["0", "0.1"], &["", "0.2"], &["2", "0.3"]],
        );
        let spec = build_chart(&t).unwrap();
        let segments: Vec<_> = spec.series[0].segments().collect();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [[0.0, 0.1]]);
        assert_eq!(segments[1], [[2.0, 0.3]]);
    }
}
