//! Offline language detection by script classification
//!
//! Looks at which Unicode script dominates the sample. Coarse by design:
//! scripts shared by several supported languages resolve to the most common
//! one in our exports, and Latin-script text defaults to English.

use async_trait::async_trait;
use feedclean_core::{Error, Language, LanguageDetector, Result};

/// Script-range language detector.
///
/// Counts alphabetic characters per script over the sample and picks the
/// language of the winning script. Fails with `Error::Detection` when the
/// sample contains no alphabetic characters at all, matching the contract of
/// a network detector handed an empty sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    fn classify(c: char) -> Option<Language> {
        match c as u32 {
            // Cyrillic
            0x0400..=0x04FF => Some(Language::Russian),
            // Arabic + supplement
            0x0600..=0x06FF | 0x0750..=0x077F => Some(Language::Arabic),
            // Devanagari
            0x0900..=0x097F => Some(Language::Hindi),
            // Hangul jamo + syllables
            0x1100..=0x11FF | 0xAC00..=0xD7AF => Some(Language::Korean),
            // Hiragana / Katakana
            0x3040..=0x30FF => Some(Language::Japanese),
            // CJK unified ideographs
            0x4E00..=0x9FFF => Some(Language::Chinese),
            _ if c.is_ascii_alphabetic() => Some(Language::English),
            _ => None,
        }
    }
}

#[async_trait]
impl LanguageDetector for ScriptDetector {
    async fn detect(&self, sample: &str) -> Result<Language> {
        let mut counts: [(Language, usize); 7] = [
            (Language::English, 0),
            (Language::Russian, 0),
            (Language::Arabic, 0),
            (Language::Hindi, 0),
            (Language::Korean, 0),
            (Language::Japanese, 0),
            (Language::Chinese, 0),
        ];

        for c in sample.chars() {
            if let Some(lang) = Self::classify(c) {
                for slot in counts.iter_mut() {
                    if slot.0 == lang {
                        slot.1 += 1;
                        break;
                    }
                }
            }
        }

        let (winner, count) = counts
            .iter()
            .max_by_key(|(_, count)| *count)
            .copied()
            .unwrap_or((Language::English, 0));

        if count == 0 {
            return Err(Error::Detection(
                "sample contains no alphabetic characters".to_string(),
            ));
        }

        tracing::debug!(language = winner.code(), chars = count, "detected batch language");
        Ok(winner)
    }

    fn name(&self) -> &str {
        "script-detector"
    }
}
