//! Applying renders to a live element
//!
//! A commit only touches what differs from the previous render. Attributes
//! the new render drops are removed. Children are rewritten only when they
//! changed, and since rewriting the options of a `<select>` resets its
//! selection, the selection read beforehand is put back afterwards without
//! a change event.

use serde_json::Value;
use tracing::trace;

use crate::markup::{attr_text, Element};

/// One attribute update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrChange {
    Set(String, String),
    Remove(String),
}

/// The difference between two renders of the same root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub attrs: Vec<AttrChange>,
    /// New inner HTML, when the children changed
    pub children: Option<String>,
}

impl Patch {
    /// Diff `next` against `prev`; without a previous render everything is written
    pub fn between(prev: Option<&Element>, next: &Element) -> Self {
        let mut attrs = Vec::new();
        for (name, value) in &next.attrs {
            let before = prev.and_then(|p| p.attrs.get(name)).and_then(attr_text);
            match attr_text(value) {
                Some(text) if before.as_deref() != Some(text.as_str()) => {
                    attrs.push(AttrChange::Set(name.clone(), text));
                }
                None if prev.is_none() || before.is_some() => {
                    attrs.push(AttrChange::Remove(name.clone()));
                }
                _ => {}
            }
        }
        if let Some(prev) = prev {
            for (name, value) in &prev.attrs {
                if !next.attrs.contains_key(name) && attr_text(value).is_some() {
                    attrs.push(AttrChange::Remove(name.clone()));
                }
            }
        }

        let children = match prev {
            Some(prev) if prev.children == next.children => None,
            _ => Some(next.inner_html()),
        };
        Self { attrs, children }
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.children.is_none()
    }

    /// Apply to a live element
    pub fn apply<E: LiveElement>(&self, element: &E) {
        let selection = element.selection();
        for change in &self.attrs {
            match change {
                AttrChange::Set(name, text) => element.write_attribute(name, text),
                AttrChange::Remove(name) => element.clear_attribute(name),
            }
        }
        if let Some(html) = &self.children {
            element.replace_children(html);
            if !selection.is_null() {
                trace!(%selection, "Selection restored after children rewrite");
                element.restore_selection(&selection);
            }
        }
    }
}

/// A live `<select>` a [`Patch`] can be applied to
pub trait LiveElement {
    fn write_attribute(&self, name: &str, text: &str);

    fn clear_attribute(&self, name: &str);

    /// Replace every child with parsed `html`
    fn replace_children(&self, html: &str);

    /// The currently selected value; `Value::Null` when nothing is selected
    fn selection(&self) -> Value;

    /// Select `value` without notifying listeners
    fn restore_selection(&self, value: &Value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Node;
    use crate::testing::MockElement;
    use serde_json::json;

    fn select(values: &[&str]) -> Element {
        Element::new("select").children(
            values
                .iter()
                .map(|v| Node::from(Element::new("option").attr("value", *v).child(Node::text(*v)))),
        )
    }

    #[test]
    fn test_first_commit_writes_everything() {
        let next = select(&["a"]).attr("name", "pick").attr("disabled", false);
        let patch = Patch::between(None, &next);

        assert_eq!(
            patch.attrs,
            vec![
                AttrChange::Set("name".into(), "pick".into()),
                AttrChange::Remove("disabled".into()),
            ]
        );
        assert_eq!(patch.children.as_deref(), Some("<option value=\"a\">a</option>"));
    }

    #[test]
    fn test_dropped_attributes_are_removed() {
        let prev = select(&["a"]).attr("multiple", true).attr("title", "t");
        let next = select(&["a"]);
        let patch = Patch::between(Some(&prev), &next);

        assert_eq!(
            patch.attrs,
            vec![
                AttrChange::Remove("multiple".into()),
                AttrChange::Remove("title".into()),
            ]
        );
        assert_eq!(patch.children, None);
    }

    #[test]
    fn test_unchanged_render_is_empty() {
        let prev = select(&["a", "b"]).attr("class", "wide").attr("hidden", false);
        assert!(Patch::between(Some(&prev), &prev.clone()).is_empty());
    }

    #[test]
    fn test_attribute_change_skips_children() {
        let prev = select(&["a", "b", "c"]);
        let next = select(&["a", "b", "c"]).attr("class", "wide");
        let patch = Patch::between(Some(&prev), &next);

        assert_eq!(patch.attrs, vec![AttrChange::Set("class".into(), "wide".into())]);
        assert_eq!(patch.children, None);
    }

    #[test]
    fn test_attribute_change_keeps_selection() {
        let root = MockElement::new("root");
        let prev = select(&["a", "b", "c"]);
        Patch::between(None, &prev).apply(&root);
        root.set_user_value(json!("c"));

        Patch::between(Some(&prev), &prev.clone().attr("class", "wide")).apply(&root);

        assert_eq!(root.value(), json!("c"));
        assert_eq!(root.attribute("class").as_deref(), Some("wide"));
    }

    #[test]
    fn test_children_rewrite_restores_selection() {
        let root = MockElement::new("root");
        let prev = select(&["a", "b"]);
        Patch::between(None, &prev).apply(&root);
        root.set_user_value(json!(["a", "b"]));

        let next = select(&["a", "b", "c"]);
        Patch::between(Some(&prev), &next).apply(&root);

        assert_eq!(root.value(), json!(["a", "b"]));
        assert_eq!(root.inner_html(), next.inner_html());
    }

    #[test]
    fn test_empty_selection_not_restored() {
        let root = MockElement::new("root");
        Patch::between(None, &select(&["a"])).apply(&root);
        assert_eq!(root.value(), Value::Null);
    }
}
