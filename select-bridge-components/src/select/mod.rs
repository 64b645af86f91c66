//! Select component bridging props to an enhancer widget
//!
//! [`Select`] renders a `<select>` from [`SelectProps`] and keeps a widget
//! constructed on it in step with later props:
//!
//! - lifecycle: construct on attach, rebuild when `data` or `options` change,
//!   destroy on detach
//! - value sync: push the controlled `value` into the widget, skipping no-op
//!   writes so the widget's own change event cannot loop back
//! - event bridge: subscribe callback props to widget events and resubscribe
//!   when any callback identity changes
//!
//! Within one update these run in that order, since a rebuild replaces the
//! handle the other two operate on.

mod data;
mod events;
mod lifecycle;
mod props;
mod render;
mod sync;

pub use data::{DataError, DataItem, OptionEntry, OptionGroup, OptionRecord};
pub use events::handlers_changed;
pub use lifecycle::needs_rebuild;
pub use props::{SelectProps, RESERVED_PROPS};
pub use render::render_select;

use select_bridge_core::debug::{DebugSection, DebugState};
use select_bridge_core::{Component, Element, Enhancer, Host, WidgetHandle};

/// Counters for widget work done by a [`Select`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectStats {
    /// Widget constructions, rebuilds included
    pub constructions: usize,
    pub reconstructions: usize,
    /// Values written into the widget by value sync
    pub value_writes: usize,
}

/// A `<select>` enhanced by a widget from `W`
///
/// ```
/// use select_bridge_components::{Select, SelectProps};
/// use select_bridge_core::testing::{CallLog, MockEnhancer, MockHost};
/// use select_bridge_core::{json, Mount};
///
/// let log = CallLog::new();
/// let host = MockHost::new(&log);
/// let root = host.root().clone();
/// let props = SelectProps::new().data(["a", "b"]).value("b");
///
/// let mut mount = Mount::new(host, Select::new(MockEnhancer::new(&log)), props);
/// mount.attach();
/// assert!(root.is_enhanced());
/// assert_eq!(root.value(), json!("b"));
///
/// mount.detach();
/// assert!(!root.is_enhanced());
/// ```
pub struct Select<W: Enhancer> {
    enhancer: W,
    handle: Option<W::Handle>,
    bound: Vec<String>,
    stats: SelectStats,
}

impl<W: Enhancer> Select<W> {
    pub fn new(enhancer: W) -> Self {
        Self {
            enhancer,
            handle: None,
            bound: Vec::new(),
            stats: SelectStats::default(),
        }
    }

    pub fn enhancer(&self) -> &W {
        &self.enhancer
    }

    /// The live widget, if constructed
    pub fn handle(&self) -> Option<&W::Handle> {
        self.handle.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.is_some()
    }

    /// Event names currently bound by the event bridge
    pub fn bound_events(&self) -> &[String] {
        &self.bound
    }

    pub fn stats(&self) -> SelectStats {
        self.stats
    }
}

impl<H, W> Component<H> for Select<W>
where
    H: Host,
    W: Enhancer<Element = H::Element>,
{
    type Props = SelectProps;

    fn render(&self, props: &SelectProps) -> Element {
        render_select(props)
    }

    fn on_attach(&mut self, host: &H, props: &SelectProps) {
        self.initialize(host, props, true);
    }

    fn on_props_change(&mut self, host: &H, prev: &SelectProps, next: &SelectProps) {
        self.reconcile(host, prev, next);
    }

    fn on_detach(&mut self, _host: &H, props: &SelectProps) {
        self.destroy(props, true);
    }
}

impl<W: Enhancer> DebugState for Select<W> {
    fn debug_sections(&self) -> Vec<DebugSection> {
        let value = self
            .handle
            .as_ref()
            .map(|h| h.value().to_string())
            .unwrap_or_else(|| "-".to_string());

        let widget = DebugSection::new("Widget")
            .entry("initialized", self.is_initialized().to_string())
            .entry("value", value)
            .entry("constructions", self.stats.constructions.to_string())
            .entry("reconstructions", self.stats.reconstructions.to_string())
            .entry("value writes", self.stats.value_writes.to_string());

        let mut events = DebugSection::new("Events");
        for name in &self.bound {
            events.push_entry(name.clone(), "bound");
        }

        vec![widget, events]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use select_bridge_core::testing::{CallLog, MockEnhancer, MockHost, WidgetCall};
    use select_bridge_core::{assert_called, count_calls, json, Callback, Mount, Phase};

    fn mount(log: &CallLog, props: SelectProps) -> Mount<MockHost, Select<MockEnhancer>> {
        Mount::new(MockHost::new(log), Select::new(MockEnhancer::new(log)), props)
    }

    #[test]
    fn test_attach_commits_before_construct() {
        let log = CallLog::new();
        let mut mount = mount(&log, SelectProps::new().data(["a"]));
        mount.attach();

        let calls = log.drain();
        assert!(matches!(calls[0], WidgetCall::Commit(_)));
        assert_eq!(calls[1], WidgetCall::LoadLocale("zh-CN".into()));
        assert!(matches!(calls[2], WidgetCall::Construct { .. }));
    }

    #[test]
    fn test_full_cycle() {
        let log = CallLog::new();
        let props = SelectProps::new()
            .data(["a", "b"])
            .on_change(Callback::new(|_| {}));
        let mut mount = mount(&log, props.clone());

        mount.attach();
        mount.update(props.clone().value("a"));
        mount.detach();

        let calls = log.drain();
        assert_eq!(count_calls!(calls, WidgetCall::Construct { .. }), 1);
        assert_eq!(count_calls!(calls, WidgetCall::Destroy), 1);
        assert_eq!(count_calls!(calls, WidgetCall::On(_)), 1);
        assert_eq!(count_calls!(calls, WidgetCall::Off(_)), 5);
        assert_called!(calls, WidgetCall::SetValue(v) if v == &json!("a"));
        assert_eq!(mount.phase(), Phase::Detached);
        assert!(!mount.component().is_initialized());
    }

    #[test]
    fn test_unrelated_update_keeps_selection() {
        let log = CallLog::new();
        let props = SelectProps::new()
            .data(["a", "b", "c"])
            .value("c")
            .on_change(Callback::new(|_| {}));
        let mut mount = mount(&log, props.clone());
        mount.attach();
        let root = mount.host().root().clone();
        assert_eq!(root.value(), json!("c"));
        log.clear();

        mount.update(props.clone().attr("className", "x"));
        assert_eq!(root.value(), json!("c"));
        assert_eq!(root.attribute("className").as_deref(), Some("x"));

        // a fresh closure every render resubscribes but keeps the value
        mount.update(props.clone().on_change(Callback::new(|_| {})));
        assert_eq!(root.value(), json!("c"));
        assert_eq!(root.attribute("className"), None);

        mount.update(props.clone().data(["a", "b", "c", "d"]));
        assert_eq!(root.value(), json!("c"));
        assert_eq!(mount.component().handle().map(|h| h.value()), Some(json!("c")));
        assert_eq!(count_calls!(log.calls(), WidgetCall::SetValue(_)), 0);
    }

    #[test]
    fn test_dropped_attributes_leave_root() {
        let log = CallLog::new();
        let props = SelectProps::new().data(["a"]).multiple(true).attr("title", "t");
        let mut mount = mount(&log, props);
        mount.attach();
        let root = mount.host().root().clone();
        assert_eq!(root.attribute("multiple").as_deref(), Some(""));
        assert_eq!(root.attribute("title").as_deref(), Some("t"));

        mount.update(SelectProps::new().data(["a"]));

        assert_eq!(root.attribute("multiple"), None);
        assert_eq!(root.attribute("title"), None);
    }

    #[test]
    fn test_debug_sections() {
        let log = CallLog::new();
        let mut mount = mount(
            &log,
            SelectProps::new()
                .data(["a", "b"])
                .value("b")
                .on_open(Callback::new(|_| {})),
        );
        mount.attach();

        let table = mount.component().debug_table("Select");
        assert_eq!(table.value("initialized"), Some("true"));
        assert_eq!(table.value("value"), Some("\"b\""));
        assert_eq!(table.value("constructions"), Some("1"));
        assert_eq!(table.value("value writes"), Some("1"));
        assert_eq!(table.value("select2:open.select-bridge"), Some("bound"));
    }
}
