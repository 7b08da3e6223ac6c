//! Per-batch conversion
//!
//! One batch is one input file. Rows are independent: each is normalized,
//! optionally translated, then kept or dropped. Output order always equals
//! input order, including in bounded-parallel mode.

use feedclean_config::{ConcurrencyMode, ConversionConfig, TranslationMode};
use feedclean_core::{
    CleanRecord, Language, LanguageDetector, OfflineTranslator, RawRecord, SkipReason, Translator,
};
use feedclean_text_processing::Normalizer;
use futures::StreamExt;
use std::sync::Arc;

/// Number of non-empty rows sampled for per-batch language detection.
const DETECTION_SAMPLE_ROWS: usize = 5;

/// Orchestrates normalization, translation and filtering for one batch at a
/// time.
///
/// Collaborators are optional; a mode that needs a missing collaborator
/// degrades to pass-through rather than failing the batch.
pub struct BatchConverter {
    translation: TranslationMode,
    concurrency: ConcurrencyMode,
    context: RowContext,
    detector: Option<Arc<dyn LanguageDetector>>,
}

impl BatchConverter {
    /// Build a converter from the conversion config.
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            translation: config.translation,
            concurrency: config.concurrency,
            context: RowContext {
                normalizer: Normalizer::new(config.insert_word_boundaries),
                translation: config.translation,
                language: Language::English,
                translator: None,
                offline: None,
            },
            detector: None,
        }
    }

    /// Attach the language detector used in per-batch-detected mode.
    pub fn with_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Attach the source-aware translator used in per-batch-detected mode.
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.context.translator = Some(translator);
        self
    }

    /// Attach the source-agnostic translator used in offline-cached mode.
    ///
    /// Callers normally pass a `CachedTranslator` so repeat strings hit the
    /// run-scoped cache instead of the backend.
    pub fn with_offline_translator(mut self, translator: Arc<dyn OfflineTranslator>) -> Self {
        self.context.offline = Some(translator);
        self
    }

    /// Convert one batch of raw rows into clean records.
    ///
    /// Surviving records keep the relative order of their source rows in
    /// both execution modes.
    pub async fn convert_batch(&self, batch: &str, rows: Vec<RawRecord>) -> Vec<CleanRecord> {
        let total = rows.len();
        let language = self.batch_language(&rows).await;

        let mut context = self.context.clone();
        context.language = language;

        let outcomes = match self.concurrency {
            ConcurrencyMode::Sequential => {
                let mut outcomes = Vec::with_capacity(total);
                for row in rows {
                    outcomes.push(context.process(row).await);
                }
                outcomes
            }
            ConcurrencyMode::BoundedParallel { workers } => {
                // The iterator is lazy, so at most `workers` tasks are in
                // flight; `buffered` yields results in submission order, so
                // no explicit reordering is needed.
                futures::stream::iter(rows.into_iter().map(|row| {
                    let context = context.clone();
                    tokio::spawn(async move { context.process(row).await })
                }))
                .buffered(workers.max(1))
                .map(|joined| match joined {
                    Ok(outcome) => outcome,
                    Err(e) => Err(SkipReason::TaskFailed(e.to_string())),
                })
                .collect::<Vec<_>>()
                .await
            }
        };

        let mut records = Vec::with_capacity(outcomes.len());
        let mut skipped = 0usize;
        for outcome in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(reason) => {
                    skipped += 1;
                    tracing::debug!(batch, %reason, "row dropped");
                }
            }
        }

        tracing::info!(
            batch,
            rows = total,
            kept = records.len(),
            skipped,
            language = language.code(),
            "batch converted"
        );

        records
    }

    /// Determine the batch's source language.
    ///
    /// Only per-batch-detected mode samples the detector; the sample is the
    /// first few non-empty raw texts. Detection failure is never fatal: the
    /// batch falls back to English, which disables translation for it.
    async fn batch_language(&self, rows: &[RawRecord]) -> Language {
        if self.translation != TranslationMode::PerBatchDetected {
            return Language::English;
        }

        let Some(detector) = &self.detector else {
            return Language::English;
        };

        let sample = rows
            .iter()
            .filter(|row| !row.text.is_empty())
            .take(DETECTION_SAMPLE_ROWS)
            .map(|row| row.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        match detector.detect(&sample).await {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!(error = %e, "language detection failed, assuming English");
                Language::English
            }
        }
    }
}

/// Everything one row's transform needs; cloned into worker tasks.
#[derive(Clone)]
struct RowContext {
    normalizer: Normalizer,
    translation: TranslationMode,
    language: Language,
    translator: Option<Arc<dyn Translator>>,
    offline: Option<Arc<dyn OfflineTranslator>>,
}

impl RowContext {
    /// Transform one row into a typed outcome.
    ///
    /// Translation failure falls back to the untranslated cleaned text for
    /// this row only; there are no retries.
    async fn process(&self, row: RawRecord) -> Result<CleanRecord, SkipReason> {
        let cleaned = self.normalizer.normalize(&row.text);
        if cleaned.is_empty() {
            return Err(SkipReason::EmptyText);
        }

        let text = match self.translation {
            TranslationMode::None => cleaned,
            TranslationMode::PerBatchDetected => {
                if self.language == Language::English {
                    cleaned
                } else if let Some(translator) = &self.translator {
                    match translator
                        .translate(&cleaned, self.language, Language::English)
                        .await
                    {
                        Ok(translated) => translated,
                        Err(e) => {
                            tracing::warn!(error = %e, "translation failed, keeping cleaned text");
                            cleaned
                        }
                    }
                } else {
                    cleaned
                }
            }
            TranslationMode::OfflineCached => {
                if let Some(offline) = &self.offline {
                    match offline.translate(&cleaned).await {
                        Ok(translated) => translated,
                        Err(e) => {
                            tracing::warn!(error = %e, "translation failed, keeping cleaned text");
                            cleaned
                        }
                    }
                } else {
                    cleaned
                }
            }
        };

        CleanRecord::new(text, row.timestamp)
    }
}
