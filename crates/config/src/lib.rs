//! Configuration for the feed export cleaner
//!
//! Settings are layered from `config/default`, an optional environment
//! overlay, and `FEEDCLEAN__`-prefixed environment variables, then validated
//! before use.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    load_settings, ConcurrencyMode, ConversionConfig, ObservabilityConfig, RuntimeEnvironment,
    Settings, TranslationMode,
};
