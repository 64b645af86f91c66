//! Declarative markup tree
//!
//! Components render to an [`Element`] tree; the host applies it to the live
//! document. Attribute values are JSON so arbitrary passthrough data survives
//! untouched until the host decides how to stringify it.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::value::display_scalar;

/// Attribute map of an element
pub type Attributes = Map<String, Value>;

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with a reconciliation key, attributes and children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    /// Reconciliation key, unique among siblings; never rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Merge attributes; entries already present are overwritten
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of the direct text children
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text { text } => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Serialize as HTML
    ///
    /// `null` and `false` attributes are omitted, `true` renders as a bare
    /// boolean attribute, arrays and objects render as JSON.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize only the children as HTML
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(child, &mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            match attr_text(value) {
                None => {}
                Some(_) if value == &Value::Bool(true) => {
                    let _ = write!(out, " {name}");
                }
                Some(text) => {
                    let _ = write!(out, " {name}=\"{}\"", escape(&text));
                }
            }
        }
        out.push('>');
        for child in &self.children {
            write_node(child, out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Text an attribute value takes in the document
///
/// `None` for `null` and `false`, which mean the attribute is absent. `true`
/// is the empty string, arrays and objects are JSON.
pub fn attr_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some(String::new()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        scalar => Some(display_scalar(scalar)),
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => el.write_html(out),
        Node::Text { text } => out.push_str(&escape(text)),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let el = Element::new("option")
            .key("option-0")
            .attr("value", "a")
            .child(Node::text("A"));

        assert_eq!(el.key.as_deref(), Some("option-0"));
        assert_eq!(el.get_attr("value"), Some(&json!("a")));
        assert_eq!(el.text_content(), "A");
    }

    #[test]
    fn test_to_html() {
        let el = Element::new("select")
            .attr("multiple", true)
            .attr("disabled", false)
            .attr("name", "pick")
            .child(
                Element::new("option")
                    .attr("value", 1)
                    .child(Node::text("One & <two>")),
            );

        assert_eq!(
            el.to_html(),
            "<select multiple name=\"pick\"><option value=\"1\">One &amp; &lt;two&gt;</option></select>"
        );
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let el = Element::new("option").attr("value", "b").attr("disabled", true);
        assert_eq!(el.to_html(), "<option value=\"b\" disabled></option>");
    }

    #[test]
    fn test_attr_text() {
        assert_eq!(attr_text(&json!(null)), None);
        assert_eq!(attr_text(&json!(false)), None);
        assert_eq!(attr_text(&json!(true)).as_deref(), Some(""));
        assert_eq!(attr_text(&json!(7)).as_deref(), Some("7"));
        assert_eq!(attr_text(&json!({"a": 1})).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_inner_html_skips_root() {
        let el = Element::new("select").child(Element::new("option").child(Node::text("x")));
        assert_eq!(el.inner_html(), "<option>x</option>");
    }

    #[test]
    fn test_serialize_skips_missing_key() {
        let el = Element::new("option").child(Node::text("a"));
        let value = serde_json::to_value(&el).unwrap();

        assert!(value.get("key").is_none());
        assert_eq!(value["children"][0], json!({"type": "text", "text": "a"}));
    }
}
