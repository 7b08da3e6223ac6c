//! Text normalization pipeline
//!
//! A fixed sequence of substitutions turning raw export text into clean
//! ASCII. Order matters: later steps assume the shape produced by earlier
//! ones (e.g. whitespace collapsing runs last so it absorbs the holes left
//! by the removals).

use crate::unescape::{decode_byte_literal, is_byte_literal};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_RETWEET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bRT\b").unwrap());
static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+|https\S+").unwrap());
// Boundary passes; regex has no look-around so each pass captures both sides
// and reinserts them around an underscore. Same insertion points, but each
// pass consumes its match, hence four separate re-scanning passes.
static RE_LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static RE_UPPER_UPPER_LOWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());
static RE_LETTER_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z])([0-9])").unwrap());
static RE_DIGIT_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9])([A-Za-z])").unwrap());
static RE_NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Pure text normalizer.
///
/// `normalize` is a total function: it never fails, and on irregular input
/// it returns best-effort partially cleaned text.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    insert_word_boundaries: bool,
}

impl Normalizer {
    /// Create a normalizer.
    ///
    /// `insert_word_boundaries` enables the camel-case / letter-digit
    /// splitting passes; the profile used ahead of translation leaves them
    /// off.
    pub fn new(insert_word_boundaries: bool) -> Self {
        Self {
            insert_word_boundaries,
        }
    }

    /// Clean one raw text field.
    ///
    /// Steps, in order: byte-literal unwrapping, standalone `RT` removal,
    /// URL removal, optional word-boundary insertion, non-ASCII stripping,
    /// whitespace collapsing and trimming.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = if is_byte_literal(raw) {
            decode_byte_literal(raw)
        } else {
            raw.to_string()
        };

        text = RE_RETWEET.replace_all(&text, "").into_owned();
        text = RE_URL.replace_all(&text, "").into_owned();

        if self.insert_word_boundaries {
            text = RE_LOWER_UPPER.replace_all(&text, "${1}_${2}").into_owned();
            text = RE_UPPER_UPPER_LOWER
                .replace_all(&text, "${1}_${2}")
                .into_owned();
            text = RE_LETTER_DIGIT.replace_all(&text, "${1}_${2}").into_owned();
            text = RE_DIGIT_LETTER.replace_all(&text, "${1}_${2}").into_owned();
        }

        text = RE_NON_ASCII.replace_all(&text, "").into_owned();
        let collapsed = RE_WHITESPACE.replace_all(&text, " ");
        collapsed.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Normalizer {
        Normalizer::new(false)
    }

    fn splitting() -> Normalizer {
        Normalizer::new(true)
    }

    #[test]
    fn test_retweet_and_url_removed() {
        assert_eq!(
            plain().normalize("RT check this out http://x.co"),
            "check this out"
        );
    }

    #[test]
    fn test_rt_only_as_whole_word() {
        assert_eq!(plain().normalize("START apART"), "START apART");
        assert_eq!(plain().normalize("RT RT hello"), "hello");
    }

    #[test]
    fn test_url_variants_removed() {
        assert_eq!(
            plain().normalize("see https://a.example/path?q=1 and www.b.example now"),
            "see and now"
        );
        // URL in the middle of a line break
        assert_eq!(plain().normalize("top http://x.co\nbottom"), "top bottom");
    }

    #[test]
    fn test_word_boundary_insertion() {
        assert_eq!(splitting().normalize("HTTPRequest2Now"), "HTTP_Request_2_Now");
        assert_eq!(splitting().normalize("camelCase"), "camel_Case");
        assert_eq!(splitting().normalize("top10list"), "top_10_list");
    }

    #[test]
    fn test_boundaries_off_by_default_profile() {
        assert_eq!(plain().normalize("HTTPRequest2Now"), "HTTPRequest2Now");
    }

    #[test]
    fn test_non_ascii_stripped_without_substitute() {
        assert_eq!(plain().normalize("caf\u{e9} nai\u{308}ve"), "caf naive");
        assert_eq!(plain().normalize("\u{1f600}\u{1f601}"), "");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(plain().normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_byte_literal_unwrapped() {
        assert_eq!(
            plain().normalize("b'RT @user: caf\\xc3\\xa9 time'"),
            "@user: caf time"
        );
    }

    #[test]
    fn test_output_is_ascii_and_url_free() {
        let inputs = [
            "\u{4f60}\u{597d} hello https://t.co/abc",
            "b'\\xe2\\x9c\\x85 done www.example.org'",
            "mixed \u{41f}\u{440} text",
        ];
        for input in inputs {
            let out = plain().normalize(input);
            assert!(out.is_ascii(), "non-ascii in output for {input:?}");
            assert!(!out.contains("http") && !out.contains("www."));
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "RT check this out http://x.co",
            "HTTPRequest2Now and more",
            "  spaced \t out \u{e9} text  ",
            "b'escaped \\n run'",
        ];
        for normalizer in [plain(), splitting()] {
            for input in inputs {
                let once = normalizer.normalize(input);
                let twice = normalizer.normalize(&once);
                assert_eq!(once, twice, "not idempotent for {input:?}");
            }
        }
    }

    #[test]
    fn test_total_on_garbage() {
        // Never panics, always returns something
        let _ = plain().normalize("b'");
        let _ = plain().normalize("b'\\");
        let _ = splitting().normalize("\\x\\u\\");
    }
}
