//! Error types for the conversion pipeline
//!
//! All three variants are row- or batch-local: callers catch them at the
//! external call site, log, and substitute a safe default. None of them
//! aborts a run.

use thiserror::Error;

/// Pipeline error taxonomy
#[derive(Debug, Error)]
pub enum Error {
    /// Language detection against the detector capability failed
    #[error("language detection failed: {0}")]
    Detection(String),

    /// Translation against the translator capability failed
    #[error("translation failed: {0}")]
    Translation(String),

    /// A row is missing one of the configured fields
    #[error("row is missing required field '{field}'")]
    RowRead { field: String },
}

pub type Result<T> = std::result::Result<T, Error>;
