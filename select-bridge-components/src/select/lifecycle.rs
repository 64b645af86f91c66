use serde_json::Value;
use tracing::{debug, trace, warn, Level};

use select_bridge_core::debug::DebugState;
use select_bridge_core::{Enhancer, FuzzyEq, Host, WidgetHandle, LOCALE};

use super::props::SelectProps;
use super::Select;

/// Whether an update must rebuild the widget
///
/// True when `data` or `options` differ under fuzzy equality, or when the
/// next props force a rebuild.
pub fn needs_rebuild(prev: &SelectProps, next: &SelectProps) -> bool {
    next.force_update || prev.data.fuzzy_ne(&next.data) || prev.options.fuzzy_ne(&next.options)
}

impl<W: Enhancer> Select<W> {
    /// Construct the widget on the host's root element
    ///
    /// No-op while a widget exists. With `attach_callbacks` the event bridge
    /// binds the callback props. A `value` without a `default_value` is
    /// synchronized once.
    pub fn initialize<H>(&mut self, host: &H, props: &SelectProps, attach_callbacks: bool)
    where
        H: Host<Element = W::Element>,
    {
        if self.handle.is_some() {
            trace!("Widget already constructed");
            return;
        }
        let Some(root) = host.root_element() else {
            warn!("No root element, widget not constructed");
            return;
        };

        if !self.enhancer.load_locale(LOCALE) {
            warn!(locale = LOCALE, "Locale missing, widget uses default strings");
        }
        let options = props.options.resolve(host);
        self.handle = Some(self.enhancer.construct(&root, options));
        self.stats.constructions += 1;
        debug!(locale = LOCALE, attach_callbacks, "Widget constructed");

        if attach_callbacks {
            self.attach_events(props);
        }
        if props.default_value.is_none() {
            if let Some(value) = &props.value {
                self.set_value(props.multiple, value);
            }
        }
    }

    /// Dispose of the widget
    ///
    /// No-op without a widget. With `detach_callbacks` the event bridge
    /// unbinds every event in the props' table first.
    pub fn destroy(&mut self, props: &SelectProps, detach_callbacks: bool) {
        if self.handle.is_none() {
            trace!("No widget to destroy");
            return;
        }
        if detach_callbacks {
            self.detach_events(props);
        }
        if let Some(handle) = self.handle.take() {
            handle.destroy();
            debug!(detach_callbacks, "Widget destroyed");
        }
    }

    /// Bring the widget in line with new props
    ///
    /// Runs rebuild, value sync and resubscription, in that order. A rebuild
    /// leaves event bindings alone; listeners stay on the element.
    pub fn reconcile<H>(&mut self, host: &H, prev: &SelectProps, next: &SelectProps)
    where
        H: Host<Element = W::Element>,
    {
        if needs_rebuild(prev, next) {
            let reason = if next.force_update { "forced" } else { "props" };
            debug!(reason, "Rebuilding widget");
            self.destroy(next, false);
            self.initialize(host, next, false);
            if self.handle.is_some() {
                self.stats.reconstructions += 1;
            }
        }

        if prev.value != next.value {
            let value = next.value.clone().unwrap_or(Value::Null);
            self.set_value(next.multiple, &value);
        }

        if super::handlers_changed(prev, next) {
            self.detach_events(prev);
            self.attach_events(next);
        }

        if tracing::enabled!(Level::TRACE) {
            trace!(state = %self.debug_text("Select", 60), "Reconciled");
        }
    }
}
