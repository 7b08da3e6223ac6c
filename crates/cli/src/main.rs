//! Feed export cleaner entry point
//!
//! Loads settings, wires the converter's collaborators for the configured
//! translation mode and runs one conversion pass over the input directory.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use feedclean_config::{load_settings, Settings, TranslationMode};
use feedclean_converter::{convert_directory, BatchConverter};
use feedclean_text_processing::{CachedTranslator, NoopTranslator, ScriptDetector, TranslationCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("FEEDCLEAN_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting feedclean v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        input_dir = %config.conversion.input_dir,
        output_dir = %config.conversion.output_dir,
        translation = ?config.conversion.translation,
        "Configuration loaded"
    );

    let converter = build_converter(&config);
    let summary = convert_directory(&config.conversion, &converter).await?;

    tracing::info!(
        batches = summary.batches,
        failed = summary.failed,
        records = summary.records,
        "Run complete"
    );

    if summary.failed > 0 {
        anyhow::bail!("{} of {} batches failed", summary.failed, summary.batches + summary.failed);
    }
    Ok(())
}

/// Wire the converter's collaborators for the configured translation mode.
fn build_converter(config: &Settings) -> BatchConverter {
    let converter = BatchConverter::new(&config.conversion);

    match config.conversion.translation {
        TranslationMode::None => converter,
        TranslationMode::PerBatchDetected => converter
            .with_detector(Arc::new(ScriptDetector::new()))
            .with_translator(Arc::new(NoopTranslator::new())),
        TranslationMode::OfflineCached => {
            // One cache for the whole run: repeat strings across batches hit
            // the cache instead of the backend.
            let cache = Arc::new(TranslationCache::new());
            converter.with_offline_translator(Arc::new(CachedTranslator::new(
                Arc::new(NoopTranslator::new()),
                cache,
            )))
        }
    }
}

/// Initialize tracing from the observability config.
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("feedclean={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
