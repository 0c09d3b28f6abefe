//! SSML document parser
//!
//! Hand-written recursive descent over the raw markup. The root
//! `<speak>` pair is located textually first (opening tag at the start
//! of the trimmed input, closing tag by its rightmost occurrence), then
//! the body between them is parsed into the child tree.

use super::attributes::parse_attributes;
use super::entities::decode_text;
use super::scanner::Scanner;
use crate::dom::node::{Element, Node};
use crate::error::Error;
use indexmap::IndexMap;
use memchr::{memchr, memmem};

/// The single mandatory root tag every document is wrapped in
pub const ROOT_TAG: &str = "speak";

/// Parse a complete SSML document into its root element.
pub fn parse_document(input: &str) -> Result<Element, Error> {
    let input = input.trim();
    // Lowercased copy for case-insensitive matching of the root tokens
    let lower = input.to_ascii_lowercase();

    // Cheap textual pre-check, not a structural guarantee yet
    if !(lower.starts_with("<speak") && lower.contains("</speak>")) {
        return Err(Error::MissingRoot);
    }

    // End of the opening root tag
    let open_end = match memchr(b'>', input.as_bytes()) {
        Some(pos) => pos,
        None => return Err(Error::UnclosedTag { offset: 0 }),
    };

    // Attributes sit between the tag name and that '>'
    let attr_str = input["<speak".len()..open_end].trim();
    let attributes = if attr_str.is_empty() {
        IndexMap::new()
    } else {
        parse_attributes(attr_str).map_err(|e| e.in_tag(ROOT_TAG))?
    };

    // The root closing tag is matched by its rightmost occurrence, so
    // body text that merely resembles "</speak>" parses leniently
    // instead of truncating the document at the first occurrence.
    let close_start = match memmem::rfind(lower.as_bytes(), b"</speak>") {
        Some(pos) => pos,
        None => return Err(Error::MissingRoot),
    };

    let body_start = open_end + 1;
    let body = if body_start <= close_start {
        input[body_start..close_start].trim()
    } else {
        // Degenerate input where the only "</speak>" overlaps the
        // opening tag; there is no body to parse
        ""
    };

    let mut parser = Parser::new(body);
    let children = parser.parse_nodes(None)?;

    Ok(Element {
        name: ROOT_TAG.to_string(),
        attributes,
        children,
    })
}

/// Recursive-descent parser over the root body
struct Parser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(input),
        }
    }

    /// Parse a sequence of sibling nodes.
    ///
    /// With `expected_closing` set, the matching closing tag is the
    /// sole return path and running out of input is an error; at the
    /// top level of the body (None) any closing tag ends the sequence
    /// leniently and end of input is the normal exit.
    fn parse_nodes(&mut self, expected_closing: Option<&str>) -> Result<Vec<Node>, Error> {
        let mut nodes = Vec::new();
        let mut text_start = self.scanner.position();

        while let Some(tag_start) = self.scanner.find_tag_start() {
            // Flush pending text ahead of the tag
            flush_text(&mut nodes, self.scanner.slice(text_start, tag_start));
            self.scanner.set_position(tag_start);

            if self.scanner.starts_with("</") {
                // Closing tag
                let end = match self.scanner.find_tag_end() {
                    Some(pos) => pos,
                    None => return Err(Error::UnclosedTag { offset: tag_start }),
                };
                let found = self
                    .scanner
                    .slice(tag_start + 2, end)
                    .trim()
                    .to_ascii_lowercase();
                if let Some(expected) = expected_closing {
                    if found != expected {
                        return Err(Error::MismatchedTag {
                            expected: expected.to_string(),
                            found,
                        });
                    }
                }
                self.scanner.set_position(end + 1);
                return Ok(nodes);
            }

            // Opening tag
            let end = match self.scanner.find_tag_end() {
                Some(pos) => pos,
                None => return Err(Error::UnclosedTag { offset: tag_start }),
            };
            let mut content = self.scanner.slice(tag_start + 1, end).trim();
            let self_closing = content.ends_with('/');
            if self_closing {
                content = content[..content.len() - 1].trim();
            }

            // Split on the first whitespace run: tag name, then the
            // raw attribute remainder
            let (name, attr_str) = match content.split_once(char::is_whitespace) {
                Some((name, rest)) => (name, rest.trim_start()),
                None => (content, ""),
            };
            if name.is_empty() {
                return Err(Error::EmptyTagName { offset: tag_start });
            }
            let name = name.to_ascii_lowercase();

            let attributes = if attr_str.is_empty() {
                IndexMap::new()
            } else {
                parse_attributes(attr_str).map_err(|e| e.in_tag(&name))?
            };

            self.scanner.set_position(end + 1);
            if self_closing {
                nodes.push(Node::Element(Element {
                    name,
                    attributes,
                    children: Vec::new(),
                }));
            } else {
                let children = self.parse_nodes(Some(name.as_str()))?;
                nodes.push(Node::Element(Element {
                    name,
                    attributes,
                    children,
                }));
            }
            text_start = self.scanner.position();
        }

        // Flush any text after the last tag
        flush_text(
            &mut nodes,
            self.scanner.slice(text_start, self.scanner.input_len()),
        );

        // The closing-tag return path never fired
        if let Some(expected) = expected_closing {
            return Err(Error::MissingClosingTag(expected.to_string()));
        }

        Ok(nodes)
    }
}

/// Append a text node if the span bears any non-whitespace; the text is
/// kept untrimmed, with markup escapes decoded.
fn flush_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.trim().is_empty() {
        nodes.push(Node::Text(decode_text(text).into_owned()));
    }
}
