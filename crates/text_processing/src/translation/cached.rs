//! Caching wrapper around an offline translator

use crate::TranslationCache;
use async_trait::async_trait;
use feedclean_core::{OfflineTranslator, Result};
use std::sync::Arc;

/// Adds the run-scoped [`TranslationCache`] in front of any
/// [`OfflineTranslator`].
///
/// Lookup, backend call and insert are separate steps so no cache lock is
/// held across the external call. Two workers missing on the same string at
/// the same time may both call the backend; the second insert wins and the
/// results are identical, so the race is benign.
pub struct CachedTranslator {
    inner: Arc<dyn OfflineTranslator>,
    cache: Arc<TranslationCache>,
}

impl CachedTranslator {
    pub fn new(inner: Arc<dyn OfflineTranslator>, cache: Arc<TranslationCache>) -> Self {
        Self { inner, cache }
    }

    /// Handle to the cache shared with the rest of the run.
    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }
}

#[async_trait]
impl OfflineTranslator for CachedTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(text) {
            return Ok(hit);
        }

        let translated = self.inner.translate(text).await?;
        self.cache.insert(text.to_string(), translated.clone());
        Ok(translated)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedclean_core::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts backend calls so cache behavior is observable.
    struct CountingTranslator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingTranslator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl OfflineTranslator for CountingTranslator {
        async fn translate(&self, text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Translation("backend down".to_string()));
            }
            Ok(format!("en:{text}"))
        }

        fn name(&self) -> &str {
            "counting-translator"
        }
    }

    #[tokio::test]
    async fn test_second_call_is_cache_hit() {
        let backend = CountingTranslator::new(false);
        let translator =
            CachedTranslator::new(backend.clone(), Arc::new(TranslationCache::new()));

        let first = translator.translate("hola").await.unwrap();
        let second = translator.translate("hola").await.unwrap();

        assert_eq!(first, "en:hola");
        assert_eq!(second, "en:hola");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_strings_each_call_backend() {
        let backend = CountingTranslator::new(false);
        let translator =
            CachedTranslator::new(backend.clone(), Arc::new(TranslationCache::new()));

        translator.translate("uno").await.unwrap();
        translator.translate("dos").await.unwrap();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let backend = CountingTranslator::new(true);
        let translator =
            CachedTranslator::new(backend.clone(), Arc::new(TranslationCache::new()));

        assert!(translator.translate("hola").await.is_err());
        assert!(translator.translate("hola").await.is_err());
        // No poisoned entry: every attempt reaches the backend
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
        assert!(translator.cache().is_empty());
    }
}
