//! SSML parsing and serialization
//!
//! SSML (Speech Synthesis Markup Language) is a subset of XML used to
//! annotate text for speech synthesis. This crate parses that subset
//! with a hand-written recursive-descent parser - no general-purpose
//! XML machinery - and serializes the resulting tree back to markup.
//!
//! Every document is wrapped in a single `<speak>` root element. Tag
//! names are case-insensitive and stored lowercase; attribute names
//! keep their case and their order. Whitespace-only text between tags
//! is dropped. Entity handling covers exactly `&lt;`, `&gt;`, `&amp;`.
//!
//! ```
//! let root = ssml::parse(r#"<speak>Hello, <break time="500ms"/>world!</speak>"#)?;
//! assert_eq!(
//!     ssml::render(&root),
//!     r#"<speak>Hello, <break time="500ms" />world!</speak>"#
//! );
//! # Ok::<(), ssml::Error>(())
//! ```

mod core;
mod dom;
mod error;
mod render;

pub use dom::{Element, Node};
pub use error::Error;

/// Parse an SSML document into its node tree.
///
/// The returned node is always the root `speak` element. Any malformed
/// input fails with a descriptive [`Error`]; there is no partial-tree
/// recovery.
pub fn parse(input: &str) -> Result<Node, Error> {
    crate::core::parser::parse_document(input).map(Node::Element)
}

/// Render a node tree back to markup text. Never fails.
pub fn render(node: &Node) -> String {
    crate::render::render(node)
}
