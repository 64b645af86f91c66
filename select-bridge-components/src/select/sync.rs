use serde_json::Value;
use tracing::{debug, trace};

use select_bridge_core::{Enhancer, FuzzyEq, WidgetHandle};

use super::Select;

/// The widget's value as compared by value sync
///
/// A multiple select with nothing selected reads as an empty sequence.
fn comparable(current: Value, multiple: bool) -> Value {
    match current {
        Value::Null if multiple => Value::Array(Vec::new()),
        Value::String(s) if multiple && s.is_empty() => Value::Array(Vec::new()),
        other => other,
    }
}

impl<W: Enhancer> Select<W> {
    /// Write `value` into the widget and fire its change event
    ///
    /// Skipped when the widget already holds a fuzzily equal value, so the
    /// change event this fires cannot feed back into another write. Returns
    /// whether a write happened.
    pub fn set_value(&mut self, multiple: bool, value: &Value) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            trace!("No widget, value sync skipped");
            return false;
        };

        let current = comparable(handle.value(), multiple);
        if current.fuzzy_eq(value) {
            trace!(%value, "Widget already holds value");
            return false;
        }

        handle.set_value(value);
        handle.trigger_change();
        self.stats.value_writes += 1;
        debug!(%value, previous = %current, "Widget value written");
        true
    }
}
