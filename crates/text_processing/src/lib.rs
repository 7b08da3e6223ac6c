//! Text processing for feed exports
//!
//! This crate provides the pure text side of the conversion pipeline:
//! - **Normalization**: byte-literal unwrapping, retweet/URL removal, word
//!   boundary insertion, ASCII filtering, whitespace collapsing
//! - **Language detection**: offline script-range classifier
//! - **Translation adapters**: pass-through translator and the run-scoped
//!   caching wrapper
//!
//! # Example
//!
//! ```ignore
//! use feedclean_text_processing::Normalizer;
//!
//! let normalizer = Normalizer::new(false);
//! assert_eq!(normalizer.normalize("RT check this http://x.co"), "check this");
//! ```

mod cache;
mod detect;
mod normalizer;
pub mod translation;
mod unescape;

pub use cache::TranslationCache;
pub use detect::ScriptDetector;
pub use normalizer::Normalizer;
pub use translation::{CachedTranslator, NoopTranslator};
pub use unescape::decode_byte_literal;
