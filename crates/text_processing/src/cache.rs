//! Run-scoped translation cache

use dashmap::DashMap;

/// Memo of cleaned text -> translated text.
///
/// Owned by one conversion run and handed to worker tasks by reference; it is
/// never a process-wide singleton. Unbounded, never evicted, never persisted.
/// Lookups are the sole mechanism for avoiding duplicate translator calls: a
/// miss that races with another worker may cost one redundant external call,
/// which is acceptable for a performance cache.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: DashMap<String, String>,
}

impl TranslationCache {
    /// Create a fresh, empty cache for one run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previous translation.
    pub fn get(&self, text: &str) -> Option<String> {
        self.entries.get(text).map(|entry| entry.value().clone())
    }

    /// Record a translation result.
    pub fn insert(&self, text: String, translated: String) {
        self.entries.insert(text, translated);
    }

    /// Number of cached translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let cache = TranslationCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get("hola"), None);

        cache.insert("hola".to_string(), "hello".to_string());
        assert_eq!(cache.get("hola"), Some("hello".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_overwrites() {
        let cache = TranslationCache::new();
        cache.insert("x".to_string(), "a".to_string());
        cache.insert("x".to_string(), "b".to_string());
        assert_eq!(cache.get("x"), Some("b".to_string()));
        assert_eq!(cache.len(), 1);
    }
}
