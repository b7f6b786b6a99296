use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between opening the log and closing the window.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid comma-separated text.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("failed to parse {}: file is empty", path.display())]
    EmptyFile { path: PathBuf },

    /// A column the chart needs is not in the table.
    #[error("missing column '{column}' (available: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// A cell that must be plotted is not a number.
    #[error("cannot plot column '{column}': row {row} holds non-numeric value '{value}'")]
    Render {
        column: String,
        row: usize,
        value: String,
    },

    /// The viewer window could not be opened.
    #[error("viewer failed: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
