//! Parse error types
//!
//! Every failure is synchronous and fatal: a parse call either returns
//! the root element or one of these. There is no partial-tree recovery.
//! Errors raised while tokenizing attributes are wrapped with the
//! owning tag's name at the element boundary (`InTag`).

use thiserror::Error;

/// Errors produced while parsing SSML markup.
///
/// Offsets are byte positions into the substring being scanned when the
/// error was detected (the attribute string for attribute errors, the
/// root body for tag errors).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input lacks a recognizable `<speak>` / `</speak>` pair
    #[error("SSML must be wrapped in a <speak> tag")]
    MissingRoot,

    /// A tag has no terminating '>'
    #[error("unclosed tag at offset {offset}")]
    UnclosedTag { offset: usize },

    /// A closing tag's name does not match the innermost open element
    #[error("mismatched tags: expected </{expected}>, got </{found}>")]
    MismatchedTag { expected: String, found: String },

    /// Input ended while an element was still open
    #[error("missing closing tag </{0}>")]
    MissingClosingTag(String),

    /// A tag with no parseable name, e.g. `<>` or `< />`
    #[error("empty tag at offset {offset}")]
    EmptyTagName { offset: usize },

    /// No valid attribute name at the current position
    #[error("invalid attribute at offset {offset}")]
    InvalidAttribute { offset: usize },

    /// Attribute name not followed by '='
    #[error("expected '=' after attribute name '{name}' at offset {offset}")]
    MissingEquals { name: String, offset: usize },

    /// Input ended where an attribute value was required
    #[error("expected attribute value after '=' for attribute '{name}' at offset {offset}")]
    MissingAttributeValue { name: String, offset: usize },

    /// A quoted attribute value was never closed
    #[error("unclosed quote in attribute value for '{name}' at offset {offset}")]
    UnclosedQuote { name: String, offset: usize },

    /// An attribute error wrapped with the tag that owns the attribute
    #[error("invalid attributes in tag <{tag}>: {source}")]
    InTag {
        tag: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an attribute-level error with the tag that owns it.
    pub(crate) fn in_tag(self, tag: &str) -> Self {
        Error::InTag {
            tag: tag.to_string(),
            source: Box::new(self),
        }
    }
}
