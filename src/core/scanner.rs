//! Markup scanning using memchr
//!
//! Thin cursor over the input with SIMD-accelerated delimiter search.
//! All delimiters the parser cares about (`<`, `>`, quotes, whitespace)
//! are ASCII, so byte positions found here are always valid `&str`
//! slice boundaries.

use memchr::memchr;

/// Cursor for markup delimiter detection
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Length of the full input
    #[inline]
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Get a slice from start to end positions
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Find next '<' (tag start) at or after the current position
    #[inline]
    pub fn find_tag_start(&self) -> Option<usize> {
        memchr(b'<', &self.input.as_bytes()[self.pos..]).map(|i| self.pos + i)
    }

    /// Find next '>' (tag end) at or after the current position
    ///
    /// Plain byte search: a '>' inside a quoted attribute value ends the
    /// tag here too, matching the document grammar exactly.
    #[inline]
    pub fn find_tag_end(&self) -> Option<usize> {
        memchr(b'>', &self.input.as_bytes()[self.pos..]).map(|i| self.pos + i)
    }

    /// Check if input starts with a prefix at the current position
    #[inline]
    pub fn starts_with(&self, needle: &str) -> bool {
        self.input[self.pos..].starts_with(needle)
    }
}
