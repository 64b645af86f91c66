//! Callback props handed to the widget's event system
//!
//! A [`Callback`] wraps a closure in an `Rc`, so cloning it keeps the same
//! identity. The event bridge re-subscribes only when a callback prop's
//! identity changes between renders, which is why closures must be created
//! once and cloned rather than rebuilt on every render.
//!
//! ```
//! use select_bridge_core::{Callback, WidgetEvent};
//!
//! let on_change = Callback::new(|event: &WidgetEvent| {
//!     println!("{} -> {}", event.name, event.value);
//! });
//! let same = on_change.clone();
//! assert!(on_change.ptr_eq(&same));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::event::WidgetEvent;

/// A cloneable, identity-comparable event handler
pub struct Callback {
    inner: Rc<dyn Fn(&WidgetEvent) + 'static>,
}

impl Callback {
    /// Wrap a closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&WidgetEvent) + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Invoke the handler
    pub fn call(&self, event: &WidgetEvent) {
        (self.inner)(event)
    }

    /// Whether both callbacks wrap the same closure allocation
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Identity comparison for optional callback props
    pub fn same(a: Option<&Callback>, b: Option<&Callback>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Clone for Callback {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("ptr", &Rc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

impl<F> From<F> for Callback
where
    F: Fn(&WidgetEvent) + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_call_invokes_closure() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let cb = Callback::new(move |_| counter.set(counter.get() + 1));

        cb.call(&WidgetEvent::new("change", json!("a")));
        cb.call(&WidgetEvent::new("change", json!("b")));

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_identity() {
        let a = Callback::new(|_| {});
        let b = Callback::new(|_| {});

        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
        assert!(Callback::same(Some(&a), Some(&a.clone())));
        assert!(!Callback::same(Some(&a), Some(&b)));
        assert!(!Callback::same(Some(&a), None));
        assert!(Callback::same(None, None));
    }
}
