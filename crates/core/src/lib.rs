//! Core traits and types for the feed export cleaner
//!
//! This crate provides foundational types used across all other crates:
//! - Core traits for pluggable backends (language detection, translation)
//! - Language definitions with ISO codes and script mapping
//! - Record types flowing through the conversion pipeline
//! - Error types

pub mod error;
pub mod language;
pub mod record;
pub mod traits;

pub use error::{Error, Result};
pub use language::{Language, Script};
pub use record::{CleanRecord, RawRecord, SkipReason};
pub use traits::{LanguageDetector, OfflineTranslator, Translator};
