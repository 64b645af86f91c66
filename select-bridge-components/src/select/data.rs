//! Option data model
//!
//! Raw option data is loose JSON: bare scalars, `{id, text, ...}` records,
//! and `{text, children: [...], ...}` groups. It is normalized once, at
//! ingestion, into [`DataItem`] so rendering never inspects runtime types.
//!
//! Normalization rules:
//! - objects and arrays are "object-like"; everything else is a primitive
//! - an object-like item whose `children` is object-like becomes a group;
//!   array children keep their order, object children contribute their values
//! - any other object-like item becomes a leaf record; an array item is a
//!   record without `id`/`text` whose indices become attributes
//! - `children` is never kept as an attribute
//! - group children follow the leaf rule, so groups do not nest

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use select_bridge_core::{Attributes, FuzzyEq};

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("select data must be a JSON array")]
    NotASequence,
}

/// An `{id, text}` record with passthrough attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionRecord {
    pub id: Value,
    pub text: Value,
    pub attrs: Attributes,
}

impl OptionRecord {
    pub fn new(id: impl Into<Value>, text: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            attrs: Attributes::new(),
        }
    }

    /// Add a passthrough attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        map.shift_remove("children");
        Self {
            id: map.shift_remove("id").unwrap_or(Value::Null),
            text: map.shift_remove("text").unwrap_or(Value::Null),
            attrs: map,
        }
    }

    fn from_array(items: Vec<Value>) -> Self {
        Self {
            id: Value::Null,
            text: Value::Null,
            attrs: items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        }
    }

    fn to_value(&self) -> Value {
        let mut map = self.attrs.clone();
        if !self.id.is_null() {
            map.insert("id".into(), self.id.clone());
        }
        if !self.text.is_null() {
            map.insert("text".into(), self.text.clone());
        }
        Value::Object(map)
    }
}

impl FuzzyEq for OptionRecord {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.id.fuzzy_eq(&other.id)
            && self.text.fuzzy_eq(&other.text)
            && self.attrs.fuzzy_eq(&other.attrs)
    }
}

/// A leaf option: a bare scalar or a record
#[derive(Debug, Clone, PartialEq)]
pub enum OptionEntry {
    Primitive(Value),
    Leaf(OptionRecord),
}

impl OptionEntry {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => OptionEntry::Leaf(OptionRecord::from_map(map)),
            Value::Array(items) => OptionEntry::Leaf(OptionRecord::from_array(items)),
            scalar => OptionEntry::Primitive(scalar),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            OptionEntry::Primitive(v) => v.clone(),
            OptionEntry::Leaf(record) => record.to_value(),
        }
    }
}

impl FuzzyEq for OptionEntry {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionEntry::Primitive(a), OptionEntry::Primitive(b)) => a.fuzzy_eq(b),
            (OptionEntry::Leaf(a), OptionEntry::Leaf(b)) => a.fuzzy_eq(b),
            _ => false,
        }
    }
}

impl From<OptionRecord> for OptionEntry {
    fn from(record: OptionRecord) -> Self {
        OptionEntry::Leaf(record)
    }
}

impl From<&str> for OptionEntry {
    fn from(s: &str) -> Self {
        OptionEntry::Primitive(Value::from(s))
    }
}

impl From<i64> for OptionEntry {
    fn from(n: i64) -> Self {
        OptionEntry::Primitive(Value::from(n))
    }
}

/// A labeled group of leaf options
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionGroup {
    pub text: Value,
    pub attrs: Attributes,
    pub children: Vec<OptionEntry>,
}

impl OptionGroup {
    pub fn new(text: impl Into<Value>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<OptionEntry>) -> Self {
        self.children.push(child.into());
        self
    }

    fn from_parts(mut map: Map<String, Value>, children: Vec<Value>) -> Self {
        Self {
            text: map.shift_remove("text").unwrap_or(Value::Null),
            attrs: map,
            children: children.into_iter().map(OptionEntry::from_value).collect(),
        }
    }
}

impl FuzzyEq for OptionGroup {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.text.fuzzy_eq(&other.text)
            && self.attrs.fuzzy_eq(&other.attrs)
            && self.children.fuzzy_eq(&other.children)
    }
}

/// One entry of the `data` prop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum DataItem {
    Primitive(Value),
    Leaf(OptionRecord),
    Group(OptionGroup),
}

impl DataItem {
    /// A leaf option with identity and label
    pub fn option(id: impl Into<Value>, text: impl Into<Value>) -> Self {
        DataItem::Leaf(OptionRecord::new(id, text))
    }

    /// Normalize one raw JSON entry
    ///
    /// Object-valued `children` contribute their values in source order.
    ///
    /// ```
    /// use select_bridge_components::{DataItem, OptionEntry, OptionRecord};
    /// use serde_json::json;
    ///
    /// let item = DataItem::from_value(json!({"text": "G", "children": [{"id": 1, "text": "One"}]}));
    /// match item {
    ///     DataItem::Group(group) => {
    ///         assert_eq!(group.text, json!("G"));
    ///         assert_eq!(group.children, vec![OptionEntry::Leaf(OptionRecord::new(1, "One"))]);
    ///     }
    ///     other => panic!("expected group, got {other:?}"),
    /// }
    /// ```
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.shift_remove("children") {
                Some(Value::Array(children)) => DataItem::Group(OptionGroup::from_parts(map, children)),
                Some(Value::Object(children)) => DataItem::Group(OptionGroup::from_parts(
                    map,
                    children.into_iter().map(|(_, v)| v).collect(),
                )),
                _ => DataItem::Leaf(OptionRecord::from_map(map)),
            },
            Value::Array(items) => DataItem::Leaf(OptionRecord::from_array(items)),
            scalar => DataItem::Primitive(scalar),
        }
    }

    /// Normalize a whole `data` array
    pub fn parse_all(value: Value) -> Result<Vec<DataItem>, DataError> {
        match value {
            Value::Array(items) => Ok(items.into_iter().map(DataItem::from_value).collect()),
            _ => Err(DataError::NotASequence),
        }
    }

    /// Raw JSON form of this entry
    pub fn to_value(&self) -> Value {
        match self {
            DataItem::Primitive(v) => v.clone(),
            DataItem::Leaf(record) => record.to_value(),
            DataItem::Group(group) => {
                let mut map = group.attrs.clone();
                if !group.text.is_null() {
                    map.insert("text".into(), group.text.clone());
                }
                map.insert(
                    "children".into(),
                    Value::Array(group.children.iter().map(OptionEntry::to_value).collect()),
                );
                Value::Object(map)
            }
        }
    }
}

impl FuzzyEq for DataItem {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataItem::Primitive(a), DataItem::Primitive(b)) => a.fuzzy_eq(b),
            (DataItem::Leaf(a), DataItem::Leaf(b)) => a.fuzzy_eq(b),
            (DataItem::Group(a), DataItem::Group(b)) => a.fuzzy_eq(b),
            _ => false,
        }
    }
}

impl From<Value> for DataItem {
    fn from(value: Value) -> Self {
        DataItem::from_value(value)
    }
}

impl From<DataItem> for Value {
    fn from(item: DataItem) -> Self {
        item.to_value()
    }
}

impl From<&str> for DataItem {
    fn from(s: &str) -> Self {
        DataItem::Primitive(Value::from(s))
    }
}

impl From<String> for DataItem {
    fn from(s: String) -> Self {
        DataItem::Primitive(Value::from(s))
    }
}

impl From<i64> for DataItem {
    fn from(n: i64) -> Self {
        DataItem::Primitive(Value::from(n))
    }
}

impl From<OptionRecord> for DataItem {
    fn from(record: OptionRecord) -> Self {
        DataItem::Leaf(record)
    }
}

impl From<OptionGroup> for DataItem {
    fn from(group: OptionGroup) -> Self {
        DataItem::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert_eq!(DataItem::from_value(json!("a")), DataItem::Primitive(json!("a")));
        assert_eq!(DataItem::from_value(json!(3)), DataItem::Primitive(json!(3)));
        assert_eq!(DataItem::from_value(Value::Null), DataItem::Primitive(Value::Null));
    }

    #[test]
    fn test_record_with_passthrough() {
        let item = DataItem::from_value(json!({"id": 1, "text": "One", "disabled": true}));
        assert_eq!(
            item,
            DataItem::Leaf(OptionRecord::new(1, "One").attr("disabled", true))
        );
    }

    #[test]
    fn test_group_keeps_other_fields_as_attrs() {
        let item = DataItem::from_value(json!({
            "id": "g1",
            "text": "Group",
            "class": "fancy",
            "children": ["a", {"id": 2, "text": "Two"}]
        }));

        let expected = OptionGroup::new("Group")
            .attr("id", "g1")
            .attr("class", "fancy")
            .child("a")
            .child(OptionRecord::new(2, "Two"));
        assert_eq!(item, DataItem::Group(expected));
    }

    #[test]
    fn test_non_object_children_fall_through_to_leaf() {
        let item = DataItem::from_value(json!({"id": 1, "text": "One", "children": "nope"}));
        assert_eq!(item, DataItem::option(1, "One"));
    }

    #[test]
    fn test_object_children_use_values() {
        let item = DataItem::from_value(json!({"text": "G", "children": {"x": "a", "y": "b"}}));
        let DataItem::Group(group) = item else {
            panic!("expected group");
        };
        assert_eq!(group.children, vec![OptionEntry::from("a"), OptionEntry::from("b")]);
    }

    #[test]
    fn test_object_children_keep_source_order() {
        let raw = r#"{"text": "G", "children": {"y": "b", "x": "a", "w": "c"}}"#;
        let item = DataItem::from_value(serde_json::from_str(raw).unwrap());
        let DataItem::Group(group) = item else {
            panic!("expected group");
        };
        assert_eq!(
            group.children,
            vec![OptionEntry::from("b"), OptionEntry::from("a"), OptionEntry::from("c")]
        );
    }

    #[test]
    fn test_record_fields_keep_source_order() {
        let item = DataItem::from_value(json!({"title": "t", "id": 1, "text": "One", "class": "c"}));
        let DataItem::Leaf(record) = item else {
            panic!("expected leaf");
        };
        let keys: Vec<_> = record.attrs.keys().cloned().collect();
        assert_eq!(keys, vec!["title", "class"]);
    }

    #[test]
    fn test_array_item_is_object_like() {
        let item = DataItem::from_value(json!(["x", 2]));
        let DataItem::Leaf(record) = item else {
            panic!("expected leaf");
        };
        assert_eq!(record.id, Value::Null);
        assert_eq!(record.attrs.get("0"), Some(&json!("x")));
        assert_eq!(record.attrs.get("1"), Some(&json!(2)));
    }

    #[test]
    fn test_nested_groups_flatten_to_leaves() {
        let item = DataItem::from_value(json!({
            "text": "Outer",
            "children": [{"id": 1, "text": "Inner", "children": [{"id": 2}]}]
        }));
        let DataItem::Group(group) = item else {
            panic!("expected group");
        };
        assert_eq!(group.children, vec![OptionEntry::Leaf(OptionRecord::new(1, "Inner"))]);
    }

    #[test]
    fn test_parse_all() {
        let items = DataItem::parse_all(json!(["a", "b"])).unwrap();
        assert_eq!(items, vec![DataItem::from("a"), DataItem::from("b")]);
        assert_eq!(
            DataItem::parse_all(json!({"a": 1})),
            Err(DataError::NotASequence)
        );
    }

    #[test]
    fn test_fuzzy_eq_tolerates_coercion() {
        let a = DataItem::parse_all(json!([{"id": 1, "text": "One"}, "2"])).unwrap();
        let b = DataItem::parse_all(json!([{"id": "1", "text": "One"}, 2])).unwrap();
        let c = DataItem::parse_all(json!([{"id": 1, "text": "Uno"}, "2"])).unwrap();

        assert!(a.fuzzy_eq(&b));
        assert!(a.fuzzy_ne(&c));
        assert!(a.fuzzy_ne(&a[..1].to_vec()));
    }

    #[test]
    fn test_serde_round_trip_through_json() {
        let items: Vec<DataItem> =
            serde_json::from_value(json!([{"text": "G", "children": [{"id": 1, "text": "One"}]}]))
                .unwrap();
        assert!(matches!(items[0], DataItem::Group(_)));

        let back = serde_json::to_value(&items).unwrap();
        assert_eq!(back, json!([{"text": "G", "children": [{"id": 1, "text": "One"}]}]));
    }
}
