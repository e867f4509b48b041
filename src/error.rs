//! Error types for the plotter.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotter operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading, rendering or displaying polylines.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The input file could not be opened or read
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read an in-memory or piped input
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV field is not a floating-point number
    #[error("Invalid number {value:?} at row {row}, field {field}: {source}")]
    InvalidNumber {
        row: usize,
        field: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// The zoom argument is not a floating-point number
    #[error("Invalid zoom factor {value:?}: {source}")]
    InvalidZoom {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// The window could not be created or updated
    #[error("Window error: {0}")]
    Window(#[from] minifb::Error),
}
