//! SSML attribute tokenizing
//!
//! Turns the raw text between a tag name and its terminating '>' into
//! an insertion-ordered name -> value map.

use crate::error::Error;
use indexmap::IndexMap;

/// Parse attributes from raw tag content (after the element name).
///
/// Later duplicates overwrite earlier values without moving the key.
/// Values are recorded exactly as written: a `&...;` span inside a
/// quoted value is passed over, not decoded. Error offsets are byte
/// positions into `input`.
pub fn parse_attributes(input: &str) -> Result<IndexMap<String, String>, Error> {
    let bytes = input.as_bytes();
    let n = bytes.len();
    let mut attrs = IndexMap::new();
    let mut pos = 0;

    while pos < n {
        // Skip whitespace
        while pos < n && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= n {
            break;
        }

        // Attribute name: maximal run of name bytes
        let name_start = pos;
        while pos < n && is_name_char(bytes[pos]) {
            pos += 1;
        }
        if pos == name_start {
            return Err(Error::InvalidAttribute { offset: pos });
        }
        let name = &input[name_start..pos];

        // Whitespace, then a required '='
        while pos < n && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= n || bytes[pos] != b'=' {
            return Err(Error::MissingEquals {
                name: name.to_string(),
                offset: pos,
            });
        }
        pos += 1;

        // Skip whitespace after '='
        while pos < n && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= n {
            return Err(Error::MissingAttributeValue {
                name: name.to_string(),
                offset: pos,
            });
        }

        let quote = bytes[pos];
        let value = if quote == b'"' || quote == b'\'' {
            pos += 1; // opening quote
            let value_start = pos;
            while pos < n && bytes[pos] != quote {
                if bytes[pos] == b'&' {
                    // Pass over the entity span; the quote character is
                    // skipped too if it falls inside
                    pos += 1;
                    while pos < n && bytes[pos] != b';' {
                        pos += 1;
                    }
                    if pos >= n {
                        break;
                    }
                }
                pos += 1;
            }
            if pos >= n || bytes[pos] != quote {
                return Err(Error::UnclosedQuote {
                    name: name.to_string(),
                    offset: pos,
                });
            }
            let value = &input[value_start..pos];
            pos += 1; // closing quote
            value
        } else {
            // Unquoted value (not strict XML, accepted anyway)
            let value_start = pos;
            while pos < n && !is_whitespace(bytes[pos]) && bytes[pos] != b'>' {
                pos += 1;
            }
            &input[value_start..pos]
        };

        attrs.insert(name.to_string(), value.to_string());
    }

    Ok(attrs)
}

/// Check if byte is valid in an attribute name
///
/// ASCII alphanumeric plus '-', '_', '.', ':'. Bytes >= 0x80 pass so
/// multi-byte UTF-8 names survive intact.
#[inline]
fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b':') || b >= 0x80
}

/// Check if byte is whitespace
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_attributes() {
        let attrs = parse_attributes(" voice=\"emma\" rate=\"fast\"").unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("voice").map(String::as_str), Some("emma"));
        assert_eq!(attrs.get("rate").map(String::as_str), Some("fast"));
    }

    #[test]
    fn test_single_quoted() {
        let attrs = parse_attributes(" time='500ms'").unwrap();
        assert_eq!(attrs.get("time").map(String::as_str), Some("500ms"));
    }

    #[test]
    fn test_unquoted_value() {
        let attrs = parse_attributes("volume=loud pitch=high").unwrap();
        assert_eq!(attrs.get("volume").map(String::as_str), Some("loud"));
        assert_eq!(attrs.get("pitch").map(String::as_str), Some("high"));
    }

    #[test]
    fn test_whitespace_around_equals() {
        let attrs = parse_attributes("  time  =  \"1s\"  ").unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("time").map(String::as_str), Some("1s"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let attrs = parse_attributes("version=\"1.0\" lang=\"en\" voice=\"emma\"").unwrap();
        let names: Vec<&str> = attrs.keys().map(String::as_str).collect();
        assert_eq!(names, ["version", "lang", "voice"]);
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let attrs = parse_attributes("a=\"1\" b=\"2\" a=\"3\"").unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a").map(String::as_str), Some("3"));
        let names: Vec<&str> = attrs.keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_entity_span_not_decoded() {
        let attrs = parse_attributes("alt=\"a &lt; b\"").unwrap();
        assert_eq!(attrs.get("alt").map(String::as_str), Some("a &lt; b"));
    }

    #[test]
    fn test_entity_span_passes_over_quote() {
        // The quote character inside the &...; span is part of the value
        let attrs = parse_attributes("v=\"&a\"b;\"").unwrap();
        assert_eq!(attrs.get("v").map(String::as_str), Some("&a\"b;"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_attributes("").unwrap().is_empty());
        assert!(parse_attributes("   ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_attribute_name() {
        assert_eq!(
            parse_attributes("=\"x\""),
            Err(Error::InvalidAttribute { offset: 0 })
        );
    }

    #[test]
    fn test_missing_equals() {
        assert_eq!(
            parse_attributes("time \"500ms\""),
            Err(Error::MissingEquals {
                name: "time".to_string(),
                offset: 5,
            })
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse_attributes("time="),
            Err(Error::MissingAttributeValue {
                name: "time".to_string(),
                offset: 5,
            })
        );
    }

    #[test]
    fn test_unclosed_quote() {
        assert_eq!(
            parse_attributes("time=\"500ms"),
            Err(Error::UnclosedQuote {
                name: "time".to_string(),
                offset: 11,
            })
        );
    }
}
