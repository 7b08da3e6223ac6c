//! Translation adapters
//!
//! Real translation backends are external capabilities; this module carries
//! the adapters the pipeline itself owns: a pass-through translator for runs
//! with translation disabled, and the caching wrapper that guarantees each
//! distinct cleaned string reaches the backend at most once per run.

mod cached;
mod noop;

pub use cached::CachedTranslator;
pub use noop::NoopTranslator;
