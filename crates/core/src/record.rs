//! Record types flowing through the conversion pipeline

use serde::{Deserialize, Serialize};

/// One raw input row: text as it appears in the export plus its timestamp.
///
/// Discarded after normalization; only the cleaned form is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Raw text, possibly the debug-printed form of a byte buffer
    pub text: String,
    /// Timestamp string, passed through untouched
    pub timestamp: String,
}

impl RawRecord {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// One cleaned output record.
///
/// Invariant: both fields are non-empty. The only way to build one is
/// [`CleanRecord::new`], which rejects records violating the invariant with
/// the matching [`SkipReason`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub text: String,
    pub timestamp: String,
}

impl CleanRecord {
    /// Build a record, enforcing the non-empty invariant.
    pub fn new(text: String, timestamp: String) -> Result<Self, SkipReason> {
        if text.is_empty() {
            return Err(SkipReason::EmptyText);
        }
        if timestamp.is_empty() {
            return Err(SkipReason::EmptyTimestamp);
        }
        Ok(Self { text, timestamp })
    }
}

/// Why a row was dropped instead of emitted.
///
/// Dropping is a filtering policy, not an error condition: skipped rows are
/// counted and logged at debug level, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Cleaned text came out empty
    EmptyText,
    /// Timestamp field was empty
    EmptyTimestamp,
    /// Row did not contain the configured field at all
    MissingField(String),
    /// The worker task processing the row died (e.g. panicked)
    TaskFailed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "cleaned text is empty"),
            Self::EmptyTimestamp => write!(f, "timestamp is empty"),
            Self::MissingField(field) => write!(f, "missing field '{field}'"),
            Self::TaskFailed(message) => write!(f, "worker task failed: {message}"),
        }
    }
}
