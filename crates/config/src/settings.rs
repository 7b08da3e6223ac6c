//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Default worker count for bounded-parallel conversion.
///
/// A fixed small constant rather than a multiple of host cores, so test runs
/// behave the same on every machine.
pub const DEFAULT_WORKERS: usize = 4;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Conversion pipeline configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_conversion()?;
        Ok(())
    }

    fn validate_conversion(&self) -> Result<(), ConfigError> {
        let conversion = &self.conversion;

        if conversion.input_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "conversion.input_dir".to_string(),
                message: "Input directory must be set".to_string(),
            });
        }

        if conversion.output_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "conversion.output_dir".to_string(),
                message: "Output directory must be set".to_string(),
            });
        }

        if conversion.text_field.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "conversion.text_field".to_string(),
                message: "Text field name must not be empty".to_string(),
            });
        }

        if conversion.timestamp_field.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "conversion.timestamp_field".to_string(),
                message: "Timestamp field name must not be empty".to_string(),
            });
        }

        if let ConcurrencyMode::BoundedParallel { workers } = conversion.concurrency {
            if workers == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "conversion.concurrency.workers".to_string(),
                    message: "Worker count must be at least 1".to_string(),
                });
            }
        }

        // Missing input dir is fatal in strict environments, a warning in dev
        if !Path::new(&conversion.input_dir).is_dir() {
            if self.environment.is_strict() {
                return Err(ConfigError::InvalidValue {
                    field: "conversion.input_dir".to_string(),
                    message: format!("directory not found: {}", conversion.input_dir),
                });
            }
            tracing::warn!("Input directory not found: {}", conversion.input_dir);
        }

        Ok(())
    }
}

/// Conversion pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Directory holding input CSV exports
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Directory receiving one JSON artifact per input file
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Name of the CSV column holding the free text
    #[serde(default = "default_text_field")]
    pub text_field: String,

    /// Name of the CSV column holding the timestamp
    #[serde(default = "default_timestamp_field")]
    pub timestamp_field: String,

    /// Insert underscores at camel-case / letter-digit boundaries
    #[serde(default)]
    pub insert_word_boundaries: bool,

    /// Translation mode
    #[serde(default)]
    pub translation: TranslationMode,

    /// Execution mode for per-row processing
    #[serde(default)]
    pub concurrency: ConcurrencyMode,
}

fn default_input_dir() -> String {
    "data".to_string()
}

fn default_output_dir() -> String {
    "json".to_string()
}

fn default_text_field() -> String {
    "tweet".to_string()
}

fn default_timestamp_field() -> String {
    "date".to_string()
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            text_field: default_text_field(),
            timestamp_field: default_timestamp_field(),
            insert_word_boundaries: false,
            translation: TranslationMode::default(),
            concurrency: ConcurrencyMode::default(),
        }
    }
}

/// Translation modes
///
/// At most one translation path is active per run; `PerBatchDetected` and
/// `OfflineCached` are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// No translation; records are emitted as cleaned
    #[default]
    None,
    /// Detect the batch language once, translate rows with a source-aware
    /// translator when the batch is not English
    #[serde(alias = "detected")]
    PerBatchDetected,
    /// Translate every row through a source-agnostic translator behind the
    /// run-scoped cache
    #[serde(alias = "offline")]
    OfflineCached,
}

/// Execution mode for per-row processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyMode {
    /// One record at a time, input order preserved trivially
    Sequential,
    /// Fixed-size pool of concurrent record tasks; output is reordered to
    /// match input order before emission
    BoundedParallel { workers: usize },
}

impl Default for ConcurrencyMode {
    fn default() -> Self {
        Self::Sequential
    }
}

impl ConcurrencyMode {
    /// Bounded-parallel mode with the default worker count
    pub fn bounded() -> Self {
        Self::BoundedParallel {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (FEEDCLEAN__ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("FEEDCLEAN")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.conversion.text_field, "tweet");
        assert_eq!(settings.conversion.timestamp_field, "date");
        assert_eq!(settings.conversion.translation, TranslationMode::None);
        assert_eq!(settings.conversion.concurrency, ConcurrencyMode::Sequential);
        assert!(!settings.conversion.insert_word_boundaries);
    }

    #[test]
    fn test_validation_rejects_zero_workers() {
        let mut settings = Settings::default();
        settings.conversion.concurrency = ConcurrencyMode::BoundedParallel { workers: 0 };
        assert!(settings.validate().is_err());

        settings.conversion.concurrency = ConcurrencyMode::bounded();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let mut settings = Settings::default();
        settings.conversion.text_field = String::new();
        assert!(settings.validate().is_err());

        settings.conversion.text_field = "content".to_string();
        settings.conversion.output_dir = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_strict_environment_requires_input_dir() {
        let mut settings = Settings::default();
        settings.conversion.input_dir = "does/not/exist".to_string();

        // Development only warns
        assert!(settings.validate().is_ok());

        settings.environment = RuntimeEnvironment::Production;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_translation_mode_aliases() {
        let mode: TranslationMode = serde_json::from_str("\"detected\"").unwrap();
        assert_eq!(mode, TranslationMode::PerBatchDetected);
        let mode: TranslationMode = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(mode, TranslationMode::OfflineCached);
    }
}
