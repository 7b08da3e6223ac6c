//! Pass-through translator

use async_trait::async_trait;
use feedclean_core::{Language, OfflineTranslator, Result, Translator};

/// Translator that returns its input unchanged.
///
/// Stands in wherever a translator is required but translation is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "noop-translator"
    }
}

#[async_trait]
impl OfflineTranslator for NoopTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "noop-translator"
    }
}
