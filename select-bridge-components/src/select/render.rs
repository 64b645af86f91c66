//! Option tree rendering
//!
//! Pure functions from [`SelectProps`] to `<select>` markup. Keys are derived
//! from positions in the data: `option-{k}` and `optgroup-{k}` at the top
//! level, `option-{k}-{k2}` inside a group.

use serde_json::Value;

use select_bridge_core::{display_scalar, Element, FuzzyEq, Node};

use super::data::{DataItem, OptionEntry, OptionGroup, OptionRecord};
use super::props::SelectProps;

/// Render the whole `<select>`
pub fn render_select(props: &SelectProps) -> Element {
    let mut select = Element::new("select").attrs(props.passthrough_attrs());
    if props.multiple {
        select = select.attr("multiple", true);
    }

    let selected = props.default_value.as_ref();
    select.children(
        props
            .data
            .iter()
            .enumerate()
            .map(|(k, item)| render_item(item, k, selected)),
    )
}

fn render_item(item: &DataItem, k: usize, selected: Option<&Value>) -> Node {
    let element = match item {
        DataItem::Primitive(value) => render_primitive(value, &k.to_string(), selected),
        DataItem::Leaf(record) => render_record(record, &k.to_string(), selected),
        DataItem::Group(group) => render_group(group, k, selected),
    };
    element.into()
}

fn render_group(group: &OptionGroup, k: usize, selected: Option<&Value>) -> Element {
    let children = group.children.iter().enumerate().map(|(k2, entry)| {
        let key = format!("{k}-{k2}");
        let option = match entry {
            OptionEntry::Primitive(value) => render_primitive(value, &key, selected),
            OptionEntry::Leaf(record) => render_record(record, &key, selected),
        };
        Node::from(option)
    });

    Element::new("optgroup")
        .key(format!("optgroup-{k}"))
        .attr("label", display_scalar(&group.text))
        .attrs(group.attrs.clone())
        .children(children)
}

fn render_record(record: &OptionRecord, key: &str, selected: Option<&Value>) -> Element {
    let option = Element::new("option")
        .key(format!("option-{key}"))
        .attr("value", record.id.clone())
        .attrs(record.attrs.clone())
        .child(Node::text(display_scalar(&record.text)));
    mark_selected(option, &record.id, selected)
}

fn render_primitive(value: &Value, key: &str, selected: Option<&Value>) -> Element {
    let option = Element::new("option")
        .key(format!("option-{key}"))
        .attr("value", value.clone())
        .child(Node::text(display_scalar(value)));
    mark_selected(option, value, selected)
}

fn mark_selected(option: Element, id: &Value, selected: Option<&Value>) -> Element {
    if selected.is_some_and(|s| is_selected(id, s)) {
        option.attr("selected", true)
    } else {
        option
    }
}

/// Whether an option identity matches a default value
///
/// A sequence default selects every option equal to one of its entries.
fn is_selected(id: &Value, default_value: &Value) -> bool {
    if id.is_null() {
        return false;
    }
    match default_value {
        Value::Array(values) => values.iter().any(|v| id.fuzzy_eq(v)),
        single => id.fuzzy_eq(single),
    }
}
