//! SSML serializer
//!
//! Walks a node tree and renders it back to markup text. A pure
//! function of the tree: escaping is total, so rendering never fails.

use crate::core::entities::encode_text;
use crate::dom::node::{Element, Node};

/// Render a node and its subtree to markup text.
pub fn render(node: &Node) -> String {
    let mut buf = String::with_capacity(256);
    write_node(node, &mut buf);
    buf
}

fn write_node(node: &Node, buf: &mut String) {
    match node {
        Node::Text(text) => buf.push_str(&encode_text(text)),
        Node::Element(element) => write_element(element, buf),
    }
}

fn write_element(element: &Element, buf: &mut String) {
    // Children render first: an element whose rendered body comes out
    // empty or whitespace-only falls back to the self-closing form
    let mut body = String::new();
    for child in &element.children {
        write_node(child, &mut body);
    }

    buf.push('<');
    buf.push_str(&element.name);
    for (name, value) in &element.attributes {
        buf.push(' ');
        buf.push_str(name);
        buf.push_str("=\"");
        buf.push_str(&encode_text(value));
        buf.push('"');
    }

    if body.trim().is_empty() {
        buf.push_str(" />");
    } else {
        buf.push('>');
        buf.push_str(&body);
        buf.push_str("</");
        buf.push_str(&element.name);
        buf.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render(&Node::text("a < b & c > d")), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_empty_element_self_closes() {
        let node: Node = Element::new("break").into();
        assert_eq!(render(&node), "<break />");
    }

    #[test]
    fn test_whitespace_only_body_self_closes() {
        let mut elem = Element::new("break");
        elem.children.push(Node::text("   "));
        assert_eq!(render(&Node::Element(elem)), "<break />");
    }

    #[test]
    fn test_attributes_in_stored_order() {
        let mut elem = Element::new("speak");
        elem.attributes
            .insert("version".to_string(), "1.0".to_string());
        elem.attributes.insert("lang".to_string(), "en".to_string());
        elem.children.push(Node::text("hi"));
        assert_eq!(
            render(&Node::Element(elem)),
            r#"<speak version="1.0" lang="en">hi</speak>"#
        );
    }

    #[test]
    fn test_attribute_values_escaped_and_double_quoted() {
        let mut elem = Element::new("voice");
        elem.attributes
            .insert("name".to_string(), "Tom & Jerry".to_string());
        assert_eq!(
            render(&Node::Element(elem)),
            r#"<voice name="Tom &amp; Jerry" />"#
        );
    }

    #[test]
    fn test_nested_rendering() {
        let mut s = Element::new("s");
        s.children.push(Node::text("one"));
        let mut p = Element::new("p");
        p.children.push(Node::Element(s));
        p.children.push(Element::new("break").into());
        assert_eq!(render(&Node::Element(p)), "<p><s>one</s><break /></p>");
    }

    #[test]
    fn test_display_matches_render() {
        let node: Node = Element::new("break").into();
        assert_eq!(node.to_string(), render(&node));
    }
}
