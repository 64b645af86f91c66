//! Seams to the widget library and the host UI framework
//!
//! The bridge never talks to the DOM directly. The host resolves elements and
//! applies rendered markup; the enhancer constructs widget instances on those
//! elements. Both are supplied by the caller, which keeps the lifecycle logic
//! testable without a browser.

use serde_json::Value;

use crate::callback::Callback;
use crate::markup::Element;
use crate::options::ResolvedOptions;

/// The UI framework hosting a component
pub trait Host {
    /// Live element handle
    type Element: Clone;

    /// The component's rendered root element, once it exists
    fn root_element(&self) -> Option<Self::Element>;

    /// Resolve a selector to a live element
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Apply a rendered markup tree to the component's root
    fn commit(&mut self, markup: &Element);
}

/// The widget library that enhances a plain select element
pub trait Enhancer {
    type Element;
    type Handle: WidgetHandle;

    /// Make a locale available to the next construction
    ///
    /// Returns false when the locale resource is missing; the widget then
    /// falls back to its built-in strings.
    fn load_locale(&mut self, locale: &str) -> bool;

    /// Construct a widget instance on `element`
    fn construct(
        &mut self,
        element: &Self::Element,
        options: ResolvedOptions<Self::Element>,
    ) -> Self::Handle;
}

/// A live widget instance
///
/// Listeners are bound through the instance but live on the underlying
/// element, so they outlive [`destroy`](WidgetHandle::destroy).
pub trait WidgetHandle {
    /// Current value; `Value::Null` when nothing is selected
    fn value(&self) -> Value;

    /// Write a new value without notifying listeners
    fn set_value(&mut self, value: &Value);

    /// Notify `change` listeners
    fn trigger_change(&mut self);

    /// Bind a callback under a `kind[.namespace]` event name
    fn on(&mut self, event: &str, callback: Callback);

    /// Unbind listeners matching a `kind[.namespace]` event name
    fn off(&mut self, event: &str);

    /// Dispose the widget and restore the plain element
    fn destroy(self);
}
