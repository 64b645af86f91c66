use std::collections::BTreeMap;

use serde_json::Value;

use select_bridge_core::event::{ON_CHANGE, ON_CLOSE, ON_OPEN, ON_SELECT, ON_UNSELECT};
use select_bridge_core::{default_event_table, Attributes, Callback, EnhancerOptions, EventBinding};

use super::data::{DataError, DataItem};

/// Prop names consumed by the component, never forwarded to `<select>`
pub const RESERVED_PROPS: &[&str] = &[
    "data",
    "value",
    "defaultValue",
    "multiple",
    "options",
    "events",
    "forceUpdate",
    ON_CHANGE,
    ON_OPEN,
    ON_CLOSE,
    ON_SELECT,
    ON_UNSELECT,
];

/// Props for the [`Select`](super::Select) component
#[derive(Debug, Clone)]
pub struct SelectProps {
    /// Option tree to render
    pub data: Vec<DataItem>,
    /// Controlled value; `None` leaves the widget alone
    pub value: Option<Value>,
    /// Initial value, expressed as `selected` options
    pub default_value: Option<Value>,
    /// Construction settings for the widget
    pub options: EnhancerOptions,
    pub multiple: bool,
    /// Widget events to forward and the callback prop each one feeds
    pub events: Vec<EventBinding>,
    /// Callback props keyed by prop name (`onChange`, ...)
    pub callbacks: BTreeMap<String, Callback>,
    /// Rebuild the widget on every update
    pub force_update: bool,
    /// Extra attributes forwarded to `<select>`
    pub attrs: Attributes,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            value: None,
            default_value: None,
            options: EnhancerOptions::default(),
            multiple: false,
            events: default_event_table(),
            callbacks: BTreeMap::new(),
            force_update: false,
            attrs: Attributes::new(),
        }
    }
}

impl SelectProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, data: impl IntoIterator<Item = impl Into<DataItem>>) -> Self {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the data with raw JSON, normalizing it
    pub fn data_json(mut self, data: Value) -> Result<Self, DataError> {
        self.data = DataItem::parse_all(data)?;
        Ok(self)
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn options(mut self, options: EnhancerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn events(mut self, events: Vec<EventBinding>) -> Self {
        self.events = events;
        self
    }

    pub fn force_update(mut self, force: bool) -> Self {
        self.force_update = force;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the callback for a prop named in the event table
    pub fn on(mut self, prop: impl Into<String>, callback: impl Into<Callback>) -> Self {
        self.callbacks.insert(prop.into(), callback.into());
        self
    }

    pub fn on_change(self, callback: impl Into<Callback>) -> Self {
        self.on(ON_CHANGE, callback)
    }

    pub fn on_open(self, callback: impl Into<Callback>) -> Self {
        self.on(ON_OPEN, callback)
    }

    pub fn on_close(self, callback: impl Into<Callback>) -> Self {
        self.on(ON_CLOSE, callback)
    }

    pub fn on_select(self, callback: impl Into<Callback>) -> Self {
        self.on(ON_SELECT, callback)
    }

    pub fn on_unselect(self, callback: impl Into<Callback>) -> Self {
        self.on(ON_UNSELECT, callback)
    }

    /// Callback bound to a prop, if any
    pub fn callback(&self, prop: &str) -> Option<&Callback> {
        self.callbacks.get(prop)
    }

    /// Attributes forwarded to `<select>`
    ///
    /// Reserved props and every prop named by the event table are stripped.
    pub fn passthrough_attrs(&self) -> Attributes {
        self.attrs
            .iter()
            .filter(|(name, _)| !RESERVED_PROPS.contains(&name.as_str()))
            .filter(|(name, _)| !self.events.iter().any(|b| &b.prop == *name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
