//! Converter error types
//!
//! Only filesystem-level failures surface here; everything row-scoped is
//! logged and skipped inside the batch.

use std::path::PathBuf;
use thiserror::Error;

/// Batch-fatal conversion errors
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Could not open, create or write a file
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be parsed as CSV at all
    #[error("csv error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output artifact could not be serialized
    #[error("json error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
