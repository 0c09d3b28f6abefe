//! SSML entity decoding and encoding
//!
//! Exactly three markup-significant characters are handled: `&lt;`,
//! `&gt;`, `&amp;`. Any other `&...;`-shaped sequence passes through
//! untouched in both directions.
//!
//! Uses Cow for zero-copy when no escaping work is needed.

use memchr::{memchr, memchr3};
use std::borrow::Cow;

/// Decode markup escapes in captured text content.
///
/// Returns Borrowed if no `&` is present (zero-copy), Owned otherwise.
/// Replacements run in sequence: `&lt;`, then `&gt;`, then `&amp;`.
pub fn decode_text(input: &str) -> Cow<'_, str> {
    // Fast path: no ampersand means nothing to decode
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Encode text for markup output (text content or attribute values).
///
/// Runs in a single pass so the `&amp;` produced for a literal `&` is
/// never itself re-escaped. Total over any string.
pub fn encode_text(input: &str) -> Cow<'_, str> {
    // Fast path: check if any escaping is needed
    if memchr3(b'<', b'>', b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
