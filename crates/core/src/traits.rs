//! Collaborator traits for external capabilities
//!
//! The converter never talks to a translation or detection service directly;
//! it goes through these seams so that backends stay pluggable and tests can
//! substitute stubs.

use crate::{Language, Result};
use async_trait::async_trait;

/// Language detection interface
///
/// Implementations:
/// - `ScriptDetector` - classifies by Unicode script ranges (offline)
///
/// # Example
///
/// ```ignore
/// let detector: Arc<dyn LanguageDetector> = Arc::new(ScriptDetector::new());
/// let lang = detector.detect("Hola a todos").await?;
/// ```
#[async_trait]
pub trait LanguageDetector: Send + Sync + 'static {
    /// Detect the predominant language of a text sample
    ///
    /// # Arguments
    /// * `sample` - Concatenated sample text from the batch
    ///
    /// # Returns
    /// Detected language, or `Error::Detection` if the capability fails
    async fn detect(&self, sample: &str) -> Result<Language>;

    /// Get detector name for logging
    fn name(&self) -> &str;
}

/// Translation interface with an explicit source language
///
/// Used in per-batch-detected mode, where the batch language is known before
/// any row is translated.
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate text between languages
    ///
    /// # Arguments
    /// * `text` - Text to translate
    /// * `from` - Source language
    /// * `to` - Target language
    ///
    /// # Returns
    /// Translated text, or `Error::Translation` on failure
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Get translator name for logging
    fn name(&self) -> &str;
}

/// Source-language-agnostic translation interface
///
/// The backend infers the source language itself; the target is always
/// English. Used in offline-cached mode, typically behind a
/// `CachedTranslator` wrapper so each distinct input is sent at most once
/// per run.
#[async_trait]
pub trait OfflineTranslator: Send + Sync + 'static {
    /// Translate text to English
    async fn translate(&self, text: &str) -> Result<String>;

    /// Get translator name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct MockTranslator;

    #[async_trait]
    impl Translator for MockTranslator {
        async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
            Ok(format!("[translated: {text}]"))
        }

        fn name(&self) -> &str {
            "mock-translator"
        }
    }

    struct FailingDetector;

    #[async_trait]
    impl LanguageDetector for FailingDetector {
        async fn detect(&self, _sample: &str) -> Result<Language> {
            Err(Error::Detection("no signal".to_string()))
        }

        fn name(&self) -> &str {
            "failing-detector"
        }
    }

    #[tokio::test]
    async fn test_mock_translator() {
        let translator = MockTranslator;
        let result = translator
            .translate("hola", Language::Spanish, Language::English)
            .await
            .unwrap();
        assert!(result.contains("translated"));
    }

    #[tokio::test]
    async fn test_failing_detector() {
        let detector = FailingDetector;
        assert!(detector.detect("anything").await.is_err());
    }
}
