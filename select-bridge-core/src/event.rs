//! Widget event names and the event table
//!
//! Widget events follow the jQuery convention `kind[.namespace]`. Binding
//! under a namespace lets the bridge remove its own listeners without
//! touching anyone else's on the same element.

use std::fmt;

use serde_json::Value;

/// Namespace for every listener the bridge binds
pub const NAMESPACE: &str = "select-bridge";

/// Conventional callback prop names for the default event table
pub const ON_CHANGE: &str = "onChange";
pub const ON_OPEN: &str = "onOpen";
pub const ON_CLOSE: &str = "onClose";
pub const ON_SELECT: &str = "onSelect";
pub const ON_UNSELECT: &str = "onUnselect";

/// Widget event kinds used by the default event table
pub const CHANGE: &str = "change";
pub const DROPDOWN_OPEN: &str = "select2:open";
pub const DROPDOWN_CLOSE: &str = "select2:close";
pub const ITEM_SELECT: &str = "select2:select";
pub const ITEM_UNSELECT: &str = "select2:unselect";

/// A parsed `kind[.namespace]` event name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName {
    pub kind: String,
    pub namespace: Option<String>,
}

impl EventName {
    /// Parse an event name, splitting at the first `.`
    ///
    /// Event kinds may themselves contain `:` (`select2:open`) but never `.`.
    ///
    /// ```
    /// use select_bridge_core::EventName;
    ///
    /// let name = EventName::parse("select2:open.select-bridge");
    /// assert_eq!(name.kind, "select2:open");
    /// assert_eq!(name.namespace.as_deref(), Some("select-bridge"));
    ///
    /// let name = EventName::parse("change");
    /// assert_eq!(name.namespace, None);
    /// ```
    pub fn parse(name: &str) -> Self {
        match name.split_once('.') {
            Some((kind, namespace)) if !namespace.is_empty() => Self {
                kind: kind.to_string(),
                namespace: Some(namespace.to_string()),
            },
            Some((kind, _)) => Self {
                kind: kind.to_string(),
                namespace: None,
            },
            None => Self {
                kind: name.to_string(),
                namespace: None,
            },
        }
    }

    /// Build a namespaced event name
    pub fn namespaced(kind: &str, namespace: &str) -> Self {
        Self {
            kind: kind.to_string(),
            namespace: Some(namespace.to_string()),
        }
    }

    /// Whether a listener bound as `self` is removed by `off(filter)`
    ///
    /// An empty kind in the filter (`.ns`) matches every kind in that namespace.
    pub fn matched_by(&self, filter: &EventName) -> bool {
        let kind_matches = filter.kind.is_empty() || filter.kind == self.kind;
        let namespace_matches = match &filter.namespace {
            Some(ns) => self.namespace.as_ref() == Some(ns),
            None => true,
        };
        kind_matches && namespace_matches
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{}", self.kind, ns),
            None => f.write_str(&self.kind),
        }
    }
}

/// Payload delivered to callback props
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetEvent {
    /// Event kind, without namespace
    pub name: String,
    /// Widget value at emission time
    pub value: Value,
}

impl WidgetEvent {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One `(widget event name, callback prop name)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    pub event: String,
    pub prop: String,
}

impl EventBinding {
    pub fn new(event: impl Into<String>, prop: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            prop: prop.into(),
        }
    }
}

/// The default subscription table, namespaced under [`NAMESPACE`]
pub fn default_event_table() -> Vec<EventBinding> {
    [
        (CHANGE, ON_CHANGE),
        (DROPDOWN_OPEN, ON_OPEN),
        (DROPDOWN_CLOSE, ON_CLOSE),
        (ITEM_SELECT, ON_SELECT),
        (ITEM_UNSELECT, ON_UNSELECT),
    ]
    .into_iter()
    .map(|(kind, prop)| EventBinding::new(EventName::namespaced(kind, NAMESPACE).to_string(), prop))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_namespaced() {
        assert_eq!(
            EventName::parse("change.select-bridge"),
            EventName::namespaced("change", "select-bridge")
        );
        assert_eq!(EventName::parse("change").namespace, None);
        assert_eq!(EventName::parse("change.").namespace, None);
        assert_eq!(EventName::parse(".ns").kind, "");
    }

    #[test]
    fn test_display_round_trips() {
        let name = EventName::namespaced("select2:close", NAMESPACE);
        assert_eq!(name.to_string(), "select2:close.select-bridge");
        assert_eq!(EventName::parse(&name.to_string()), name);
    }

    #[test]
    fn test_matched_by() {
        let bound = EventName::namespaced("change", "a");

        assert!(bound.matched_by(&EventName::parse("change")));
        assert!(bound.matched_by(&EventName::parse("change.a")));
        assert!(bound.matched_by(&EventName::parse(".a")));
        assert!(!bound.matched_by(&EventName::parse("change.b")));
        assert!(!bound.matched_by(&EventName::parse("select2:open.a")));
        assert!(!EventName::parse("change").matched_by(&EventName::parse("change.a")));
    }

    #[test]
    fn test_default_event_table() {
        let table = default_event_table();
        let pairs: Vec<_> = table
            .iter()
            .map(|b| (b.event.as_str(), b.prop.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("change.select-bridge", "onChange"),
                ("select2:open.select-bridge", "onOpen"),
                ("select2:close.select-bridge", "onClose"),
                ("select2:select.select-bridge", "onSelect"),
                ("select2:unselect.select-bridge", "onUnselect"),
            ]
        );
    }
}
