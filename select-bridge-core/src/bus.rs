//! Listener registry with namespaced subscriptions
//!
//! In-process widgets use this to implement `on`/`off`/trigger with the same
//! semantics as jQuery event namespaces:
//! - `on("change.ns", cb)` binds `cb` to `change` under namespace `ns`
//! - `off("change.ns")` removes only `change` listeners in `ns`
//! - `off(".ns")` removes every listener in `ns`
//! - triggering `change` reaches every `change` listener, whatever its namespace

use tracing::trace;

use crate::callback::Callback;
use crate::event::{EventName, WidgetEvent};

/// Ordered set of bound listeners
#[derive(Debug, Default, Clone)]
pub struct ListenerRegistry {
    listeners: Vec<(EventName, Callback)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a listener
    ///
    /// Binding the same name twice keeps both listeners, in binding order.
    pub fn on(&mut self, name: &str, callback: Callback) {
        let name = EventName::parse(name);
        trace!(event = %name, "Listener bound");
        self.listeners.push((name, callback));
    }

    /// Remove every listener matched by `filter`, returning how many were removed
    pub fn off(&mut self, filter: &str) -> usize {
        let filter = EventName::parse(filter);
        let before = self.listeners.len();
        self.listeners.retain(|(name, _)| !name.matched_by(&filter));
        let removed = before - self.listeners.len();
        trace!(event = %filter, removed, "Listeners removed");
        removed
    }

    /// Callbacks bound to an event kind, in binding order
    ///
    /// Returned as clones so the caller can invoke them after releasing any
    /// borrow on the registry.
    pub fn listeners_for(&self, kind: &str) -> Vec<Callback> {
        self.listeners
            .iter()
            .filter(|(name, _)| name.kind == kind)
            .map(|(_, cb)| cb.clone())
            .collect()
    }

    /// Invoke every listener bound to `event.name`, returning how many ran
    pub fn emit(&self, event: &WidgetEvent) -> usize {
        let callbacks = self.listeners_for(&event.name);
        for cb in &callbacks {
            cb.call(event);
        }
        callbacks.len()
    }

    /// Full names of bound listeners, in binding order
    pub fn bound_names(&self) -> Vec<String> {
        self.listeners
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
