//! Tolerant decoding of byte-string literal text
//!
//! Some upstream exports serialize byte buffers as their debug-printed form,
//! so a row's text arrives as `b'RT @user: caf\xc3\xa9'` instead of native
//! text. This module strips the wrapper and decodes the backslash escapes.

/// Check whether text looks like a printed byte-string literal.
pub(crate) fn is_byte_literal(text: &str) -> bool {
    text.starts_with("b'") || text.starts_with("b\"")
}

/// Strip a byte-literal wrapper and decode its backslash escapes.
///
/// Tolerant-failure contract: this function never fails. Recognized escapes
/// (`\n`, `\t`, `\r`, `\\`, `\'`, `\"`, `\0`, `\xHH`, `\uHHHH`) are decoded;
/// a malformed escape sequence is kept verbatim and decoding continues with
/// the rest of the input. Input that is not a byte literal is returned
/// unchanged.
///
/// `\xHH` decodes to the code point U+00HH. For values above 0x7F that is a
/// mojibake of the original multi-byte character, but the normalizer strips
/// non-ASCII output anyway, so the distinction never reaches a record.
pub fn decode_byte_literal(text: &str) -> String {
    if !is_byte_literal(text) {
        return text.to_string();
    }

    // Drop the two-char prefix and the closing quote. The closing quote is
    // assumed present; if it is not, the last interior char is lost, which
    // matches the upstream exporter's own slicing.
    let interior: &str = {
        let body = &text[2..];
        match body.char_indices().next_back() {
            Some((idx, _)) => &body[..idx],
            None => body,
        }
    };

    let mut out = String::with_capacity(interior.len());
    let mut chars = interior.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('r') => {
                chars.next();
                out.push('\r');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            Some('\'') => {
                chars.next();
                out.push('\'');
            }
            Some('"') => {
                chars.next();
                out.push('"');
            }
            Some('0') => {
                chars.next();
                out.push('\0');
            }
            Some('x') => {
                chars.next();
                match take_hex(&mut chars, 2) {
                    Some(value) => {
                        if let Some(decoded) = char::from_u32(value) {
                            out.push(decoded);
                        }
                    }
                    None => {
                        // Malformed \x escape: keep it verbatim
                        out.push('\\');
                        out.push('x');
                    }
                }
            }
            Some('u') => {
                chars.next();
                match take_hex(&mut chars, 4) {
                    Some(value) => {
                        if let Some(decoded) = char::from_u32(value) {
                            out.push(decoded);
                        }
                    }
                    None => {
                        out.push('\\');
                        out.push('u');
                    }
                }
            }
            // Unknown escape or trailing backslash: keep verbatim
            _ => out.push('\\'),
        }
    }

    out
}

/// Consume exactly `digits` hex digits, or nothing on failure.
fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, digits: usize) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut value = 0u32;
    for _ in 0..digits {
        let d = lookahead.next()?.to_digit(16)?;
        value = value * 16 + d;
    }
    // Commit the consumption only once all digits parsed
    for _ in 0..digits {
        chars.next();
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(decode_byte_literal("hello world"), "hello world");
        assert_eq!(decode_byte_literal(""), "");
    }

    #[test]
    fn test_single_and_double_quoted_wrappers() {
        assert_eq!(decode_byte_literal("b'hello'"), "hello");
        assert_eq!(decode_byte_literal("b\"hello\""), "hello");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode_byte_literal(r"b'a\nb\tc'"), "a\nb\tc");
        assert_eq!(decode_byte_literal(r"b'it\'s'"), "it's");
        assert_eq!(decode_byte_literal(r"b'back\\slash'"), "back\\slash");
    }

    #[test]
    fn test_hex_escapes() {
        assert_eq!(decode_byte_literal(r"b'\x41\x42'"), "AB");
        // Above 0x7F decodes to U+00HH (stripped later by the normalizer)
        assert_eq!(decode_byte_literal(r"b'\xe9'"), "\u{e9}");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(decode_byte_literal("b'\\u00e9'"), "\u{e9}");
        assert_eq!(decode_byte_literal(r"b'\u12x'"), r"\u12x");
    }

    #[test]
    fn test_malformed_hex_kept_verbatim() {
        assert_eq!(decode_byte_literal(r"b'\xZZok'"), r"\xZZok");
        assert_eq!(decode_byte_literal(r"b'tail\x'"), r"tail\x");
        assert_eq!(decode_byte_literal(r"b'\x4'"), r"\x4");
    }

    #[test]
    fn test_unknown_escape_kept() {
        assert_eq!(decode_byte_literal(r"b'\q'"), r"\q");
    }

    #[test]
    fn test_trailing_backslash() {
        // Closing-quote slice leaves a lone backslash; it must not panic
        assert_eq!(decode_byte_literal("b'abc\\'"), "abc\\");
    }

    #[test]
    fn test_missing_closing_quote_loses_last_char() {
        assert_eq!(decode_byte_literal("b'abc"), "ab");
    }
}
