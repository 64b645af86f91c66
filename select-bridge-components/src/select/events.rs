use tracing::{debug, trace};

use select_bridge_core::{Callback, Enhancer, WidgetHandle};

use super::props::SelectProps;
use super::Select;

/// Whether the event bridge must resubscribe between two renders
///
/// True when the event table changed, or when any callback prop the table
/// names changed identity.
pub fn handlers_changed(prev: &SelectProps, next: &SelectProps) -> bool {
    if prev.events != next.events {
        return true;
    }
    next.events
        .iter()
        .any(|binding| !Callback::same(prev.callback(&binding.prop), next.callback(&binding.prop)))
}

impl<W: Enhancer> Select<W> {
    /// Subscribe every defined callback prop to its widget event
    pub fn attach_events(&mut self, props: &SelectProps) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        for binding in &props.events {
            let Some(callback) = props.callback(&binding.prop) else {
                trace!(event = %binding.event, prop = %binding.prop, "No callback, event skipped");
                continue;
            };
            handle.on(&binding.event, callback.clone());
            self.bound.push(binding.event.clone());
            debug!(event = %binding.event, prop = %binding.prop, "Event attached");
        }
    }

    /// Unsubscribe every event in the table, bound or not
    pub fn detach_events(&mut self, props: &SelectProps) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        for binding in &props.events {
            handle.off(&binding.event);
            self.bound.retain(|name| name != &binding.event);
            debug!(event = %binding.event, "Event detached");
        }
    }
}
