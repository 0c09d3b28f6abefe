//! SSML node representation
//!
//! A parsed document is a pure owned tree: parent owns children, no
//! backreferences, read-only after construction. Equality is
//! structural; attribute maps compare by key/value regardless of order,
//! child sequences compare in order.

use indexmap::IndexMap;
use std::fmt;

/// A node in a parsed SSML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Decoded text content (markup escapes already resolved)
    Text(String),
    /// An element with attributes and children
    Element(Element),
}

/// An SSML element
///
/// The name is stored lowercase. Attribute names keep their original
/// case and insertion order; children are empty for self-closing or
/// content-less elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get the text content, if this is a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(content) => Some(content),
            Node::Element(_) => None,
        }
    }

    /// Get the element, if this is an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl Element {
    /// Create an element with no attributes or children; the name is
    /// folded to lowercase like parsed names are
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into().to_ascii_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by exact (case-sensitive) name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check if this element has any children
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this element has any attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Renders the node as markup, identical to [`crate::render()`].
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}
