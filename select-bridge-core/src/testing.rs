//! Test doubles for hosts and widgets
//!
//! - [`MockHost`]: a host whose root is a [`MockElement`] and whose commits are logged
//! - [`MockEnhancer`]: constructs [`MockWidget`]s on mock elements
//! - [`CallLog`]: shared, ordered record of every host and widget call
//! - Assertion macros for verifying recorded calls
//!
//! Listeners and the selected value live on the [`MockElement`], like they
//! do on a real `<select>`, so they survive widget destruction. Commits are
//! applied to the root as [`Patch`]es; rewriting its children clears the
//! selection the way a browser does.
//!
//! # Example
//!
//! ```
//! use select_bridge_core::testing::{CallLog, MockEnhancer, MockHost, WidgetCall};
//! use select_bridge_core::{count_calls, EnhancerOptions, Enhancer, Host, WidgetHandle};
//! use serde_json::json;
//!
//! let log = CallLog::new();
//! let host = MockHost::new(&log);
//! let mut enhancer = MockEnhancer::new(&log);
//!
//! let root = host.root_element().unwrap();
//! let mut widget = enhancer.construct(&root, EnhancerOptions::new().resolve(&host));
//! widget.set_value(&json!("a"));
//! widget.destroy();
//!
//! let calls = log.drain();
//! assert_eq!(count_calls!(calls, WidgetCall::Construct { .. }), 1);
//! assert_eq!(count_calls!(calls, WidgetCall::SetValue(_)), 1);
//! assert_eq!(root.value(), json!("a"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::bus::ListenerRegistry;
use crate::callback::Callback;
use crate::event::{WidgetEvent, CHANGE};
use crate::markup::Element;
use crate::options::ResolvedOptions;
use crate::patch::{LiveElement, Patch};
use crate::widget::{Enhancer, Host, WidgetHandle};

/// A call recorded by the test doubles
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    /// Host applied a render, recorded as HTML
    Commit(String),
    LoadLocale(String),
    Construct {
        element: String,
        language: Option<String>,
        dropdown_parent: Option<String>,
        settings: Map<String, Value>,
    },
    SetValue(Value),
    TriggerChange,
    On(String),
    Off(String),
    Destroy,
}

/// Shared, ordered call record
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<WidgetCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: WidgetCall) {
        self.calls.borrow_mut().push(call);
    }

    /// Snapshot of the recorded calls
    pub fn calls(&self) -> Vec<WidgetCall> {
        self.calls.borrow().clone()
    }

    /// Take every recorded call, leaving the log empty
    pub fn drain(&self) -> Vec<WidgetCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

#[derive(Default)]
struct ElementState {
    value: Value,
    attrs: HashMap<String, String>,
    inner_html: String,
    listeners: ListenerRegistry,
    enhanced: bool,
}

/// A stand-in for a live `<select>` element
///
/// Clones share state, so a clone held by a test observes what the widget
/// does to the element.
#[derive(Clone)]
pub struct MockElement {
    id: String,
    state: Rc<RefCell<ElementState>>,
}

impl MockElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Rc::new(RefCell::new(ElementState::default())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> Value {
        self.state.borrow().value.clone()
    }

    /// Change the value as a user would, without notifying listeners
    pub fn set_user_value(&self, value: Value) {
        self.state.borrow_mut().value = value;
    }

    /// A committed attribute, as text
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attrs.get(name).cloned()
    }

    /// Committed children, as HTML
    pub fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    /// Whether a widget is currently constructed on this element
    pub fn is_enhanced(&self) -> bool {
        self.state.borrow().enhanced
    }

    /// Full names of bound listeners, in binding order
    pub fn listener_names(&self) -> Vec<String> {
        self.state.borrow().listeners.bound_names()
    }

    /// Fire an event as the widget would, returning how many listeners ran
    pub fn emit(&self, kind: &str) -> usize {
        let event = WidgetEvent::new(kind, self.value());
        let callbacks = self.state.borrow().listeners.listeners_for(kind);
        for cb in &callbacks {
            cb.call(&event);
        }
        callbacks.len()
    }

    fn set_enhanced(&self, enhanced: bool) {
        self.state.borrow_mut().enhanced = enhanced;
    }

    fn on(&self, event: &str, callback: Callback) {
        self.state.borrow_mut().listeners.on(event, callback);
    }

    fn off(&self, event: &str) {
        self.state.borrow_mut().listeners.off(event);
    }
}

impl LiveElement for MockElement {
    fn write_attribute(&self, name: &str, text: &str) {
        self.state.borrow_mut().attrs.insert(name.to_string(), text.to_string());
    }

    fn clear_attribute(&self, name: &str) {
        self.state.borrow_mut().attrs.remove(name);
    }

    fn replace_children(&self, html: &str) {
        let mut state = self.state.borrow_mut();
        state.inner_html = html.to_string();
        state.value = Value::Null;
    }

    fn selection(&self) -> Value {
        self.value()
    }

    fn restore_selection(&self, value: &Value) {
        self.set_user_value(value.clone());
    }
}

impl fmt::Debug for MockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockElement")
            .field("id", &self.id)
            .field("value", &self.value())
            .finish()
    }
}

impl PartialEq for MockElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

/// A host with one root element and any number of addressable elements
pub struct MockHost {
    log: CallLog,
    root: MockElement,
    rooted: bool,
    elements: HashMap<String, MockElement>,
    last_commit: Option<Element>,
}

impl MockHost {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            root: MockElement::new("root"),
            rooted: true,
            elements: HashMap::new(),
            last_commit: None,
        }
    }

    /// A host whose root element never becomes available
    pub fn without_root(log: &CallLog) -> Self {
        Self {
            rooted: false,
            ..Self::new(log)
        }
    }

    /// Make an element reachable through `selector`
    pub fn with_element(mut self, selector: impl Into<String>, element: MockElement) -> Self {
        self.elements.insert(selector.into(), element);
        self
    }

    pub fn root(&self) -> &MockElement {
        &self.root
    }

    /// Most recently committed markup
    pub fn last_commit(&self) -> Option<&Element> {
        self.last_commit.as_ref()
    }
}

impl Host for MockHost {
    type Element = MockElement;

    fn root_element(&self) -> Option<MockElement> {
        self.rooted.then(|| self.root.clone())
    }

    fn query_selector(&self, selector: &str) -> Option<MockElement> {
        self.elements.get(selector).cloned()
    }

    fn commit(&mut self, markup: &Element) {
        self.log.record(WidgetCall::Commit(markup.to_html()));
        if self.rooted {
            Patch::between(self.last_commit.as_ref(), markup).apply(&self.root);
        }
        self.last_commit = Some(markup.clone());
    }
}

/// Constructs [`MockWidget`]s, recording every call
pub struct MockEnhancer {
    log: CallLog,
    constructed: usize,
    locales: bool,
}

impl MockEnhancer {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            constructed: 0,
            locales: true,
        }
    }

    /// An enhancer whose locale resources are missing
    pub fn without_locales(log: &CallLog) -> Self {
        Self {
            locales: false,
            ..Self::new(log)
        }
    }

    /// Number of widgets constructed so far
    pub fn constructed(&self) -> usize {
        self.constructed
    }
}

impl Enhancer for MockEnhancer {
    type Element = MockElement;
    type Handle = MockWidget;

    fn load_locale(&mut self, locale: &str) -> bool {
        self.log.record(WidgetCall::LoadLocale(locale.to_string()));
        self.locales
    }

    fn construct(
        &mut self,
        element: &MockElement,
        options: ResolvedOptions<MockElement>,
    ) -> MockWidget {
        self.constructed += 1;
        self.log.record(WidgetCall::Construct {
            element: element.id().to_string(),
            language: options.language().map(str::to_owned),
            dropdown_parent: options.dropdown_parent.as_ref().map(|e| e.id().to_string()),
            settings: options.settings,
        });
        element.set_enhanced(true);
        MockWidget {
            element: element.clone(),
            log: self.log.clone(),
        }
    }
}

/// A live mock widget
#[derive(Debug)]
pub struct MockWidget {
    element: MockElement,
    log: CallLog,
}

impl MockWidget {
    pub fn element(&self) -> &MockElement {
        &self.element
    }
}

impl WidgetHandle for MockWidget {
    fn value(&self) -> Value {
        self.element.value()
    }

    fn set_value(&mut self, value: &Value) {
        self.log.record(WidgetCall::SetValue(value.clone()));
        self.element.set_user_value(value.clone());
    }

    fn trigger_change(&mut self) {
        self.log.record(WidgetCall::TriggerChange);
        self.element.emit(CHANGE);
    }

    fn on(&mut self, event: &str, callback: Callback) {
        self.log.record(WidgetCall::On(event.to_string()));
        self.element.on(event, callback);
    }

    fn off(&mut self, event: &str) {
        self.log.record(WidgetCall::Off(event.to_string()));
        self.element.off(event);
    }

    fn destroy(self) {
        self.log.record(WidgetCall::Destroy);
        self.element.set_enhanced(false);
    }
}

/// Assert that a call matching a pattern was recorded
///
/// ```ignore
/// let calls = log.drain();
/// assert_called!(calls, WidgetCall::Destroy);
/// assert_called!(calls, WidgetCall::SetValue(v) if v == &json!("a"));
/// ```
#[macro_export]
macro_rules! assert_called {
    ($calls:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $calls.iter().any(|c| matches!(c, $pattern $(if $guard)?)),
            "Expected call matching `{}`, but got: {:?}",
            stringify!($pattern),
            $calls
        );
    };
}

/// Assert that no call matching a pattern was recorded
#[macro_export]
macro_rules! assert_not_called {
    ($calls:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$calls.iter().any(|c| matches!(c, $pattern $(if $guard)?)),
            "Expected NO call matching `{}`, but got: {:?}",
            stringify!($pattern),
            $calls
        );
    };
}

/// Count recorded calls matching a pattern
#[macro_export]
macro_rules! count_calls {
    ($calls:expr, $pattern:pat $(if $guard:expr)?) => {
        $calls
            .iter()
            .filter(|c| matches!(c, $pattern $(if $guard)?))
            .count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EnhancerOptions;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_listeners_survive_destroy() {
        let log = CallLog::new();
        let host = MockHost::new(&log);
        let mut enhancer = MockEnhancer::new(&log);
        let root = host.root_element().unwrap();

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut widget = enhancer.construct(&root, EnhancerOptions::new().resolve(&host));
        widget.on("change.t", Callback::new(move |_| counter.set(counter.get() + 1)));
        widget.destroy();
        assert!(!root.is_enhanced());

        let mut widget = enhancer.construct(&root, EnhancerOptions::new().resolve(&host));
        widget.trigger_change();

        assert_eq!(hits.get(), 1);
        assert_eq!(enhancer.constructed(), 2);
    }

    #[test]
    fn test_change_event_carries_value() {
        let log = CallLog::new();
        let host = MockHost::new(&log);
        let mut enhancer = MockEnhancer::new(&log);
        let root = host.root_element().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut widget = enhancer.construct(&root, EnhancerOptions::new().resolve(&host));
        widget.on("change.t", Callback::new(move |e| sink.borrow_mut().push(e.clone())));
        widget.set_value(&json!(["a", "b"]));
        widget.trigger_change();

        assert_eq!(
            *seen.borrow(),
            vec![WidgetEvent::new("change", json!(["a", "b"]))]
        );
    }

    #[test]
    fn test_construct_records_resolved_options() {
        let log = CallLog::new();
        let host = MockHost::new(&log).with_element("#modal", MockElement::new("modal"));
        let mut enhancer = MockEnhancer::new(&log);
        let root = host.root_element().unwrap();

        let options = EnhancerOptions::new().dropdown_parent("#modal");
        let _widget = enhancer.construct(&root, options.resolve(&host));

        let calls = log.drain();
        assert_called!(
            calls,
            WidgetCall::Construct { dropdown_parent: Some(p), language: Some(l), .. }
                if p == "modal" && l == "zh-CN"
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_commit_patches_root() {
        let log = CallLog::new();
        let mut host = MockHost::new(&log);
        host.commit(&Element::new("select").attr("multiple", true).attr("name", "n"));
        host.root().set_user_value(json!(["x"]));

        host.commit(&Element::new("select").attr("name", "n"));

        assert_eq!(host.root().attribute("multiple"), None);
        assert_eq!(host.root().attribute("name").as_deref(), Some("n"));
        assert_eq!(host.root().value(), json!(["x"]));
        assert_eq!(count_calls!(log.calls(), WidgetCall::Commit(_)), 2);
    }

    #[test]
    fn test_without_root_has_no_root_element() {
        let log = CallLog::new();
        let mut host = MockHost::without_root(&log);
        host.commit(&Element::new("select").attr("name", "n"));

        assert!(host.root_element().is_none());
        assert_eq!(host.root().attribute("name"), None);
        assert!(host.last_commit().is_some());
    }

    #[test]
    fn test_assert_macros() {
        let calls = vec![WidgetCall::TriggerChange, WidgetCall::SetValue(json!(1))];

        assert_called!(calls, WidgetCall::TriggerChange);
        assert_called!(calls, WidgetCall::SetValue(v) if v == &json!(1));
        assert_not_called!(calls, WidgetCall::Destroy);
        assert_eq!(count_calls!(calls, WidgetCall::SetValue(_)), 1);
    }
}
