//! Language definitions for export sources
//!
//! Covers the languages commonly seen in the feed exports we ingest. The
//! target of every translation is English; everything else is a source
//! language.

use serde::{Deserialize, Serialize};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    Portuguese,
    French,
    German,
    Italian,
    Turkish,
    Russian,
    Arabic,
    Hindi,
    Japanese,
    Korean,
    Chinese,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::Portuguese => "pt",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Turkish => "tr",
            Self::Russian => "ru",
            Self::Arabic => "ar",
            Self::Hindi => "hi",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Chinese => "zh",
        }
    }

    /// Parse an ISO 639-1 code, tolerating region suffixes like "pt-BR"
    pub fn from_code(code: &str) -> Option<Self> {
        let base = code.split('-').next().unwrap_or(code);
        match base {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            "pt" => Some(Self::Portuguese),
            "fr" => Some(Self::French),
            "de" => Some(Self::German),
            "it" => Some(Self::Italian),
            "tr" => Some(Self::Turkish),
            "ru" => Some(Self::Russian),
            "ar" => Some(Self::Arabic),
            "hi" => Some(Self::Hindi),
            "ja" => Some(Self::Japanese),
            "ko" => Some(Self::Korean),
            "zh" => Some(Self::Chinese),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::Portuguese => "Portuguese",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Turkish => "Turkish",
            Self::Russian => "Russian",
            Self::Arabic => "Arabic",
            Self::Hindi => "Hindi",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
        }
    }

    /// Get the script this language is written in
    pub fn script(&self) -> Script {
        match self {
            Self::English
            | Self::Spanish
            | Self::Portuguese
            | Self::French
            | Self::German
            | Self::Italian
            | Self::Turkish => Script::Latin,
            Self::Russian => Script::Cyrillic,
            Self::Arabic => Script::Arabic,
            Self::Hindi => Script::Devanagari,
            Self::Japanese => Script::Japanese,
            Self::Korean => Script::Hangul,
            Self::Chinese => Script::Han,
        }
    }
}

/// Writing scripts used by supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    Japanese,
    Hangul,
    Han,
}
