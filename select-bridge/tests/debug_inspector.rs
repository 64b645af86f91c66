//! Select state through the debug inspector

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use select_bridge::debug::{buffer_to_text, DebugState, DebugTableWidget};
use select_bridge::prelude::*;
use select_bridge::testing::{CallLog, MockEnhancer, MockHost};

#[test]
fn test_sections_track_lifecycle() {
    let log = CallLog::new();
    let props = SelectProps::new()
        .data(["a", "b"])
        .on_change(Callback::new(|_| {}));
    let mut mount = Mount::new(MockHost::new(&log), Select::new(MockEnhancer::new(&log)), props);

    let before = mount.component().debug_table("Select");
    assert_eq!(before.value("initialized"), Some("false"));
    assert_eq!(before.value("value"), Some("-"));

    mount.attach();
    let next = mount.props().clone().data(["a", "b", "c"]).value("c");
    mount.update(next);

    let sections = mount.component().debug_sections();
    assert_eq!(sections[0].title, "Widget");
    assert_eq!(sections[0].get("constructions"), Some("2"));
    assert_eq!(sections[0].get("reconstructions"), Some("1"));
    assert_eq!(sections[0].get("value"), Some("\"c\""));
    assert_eq!(sections[1].title, "Events");
    assert_eq!(sections[1].get("change.select-bridge"), Some("bound"));

    mount.detach();
    let after = mount.component().debug_table("Select");
    assert_eq!(after.value("initialized"), Some("false"));
    assert_eq!(after.value("change.select-bridge"), None);
}

#[test]
fn test_renders_in_terminal_table() {
    let log = CallLog::new();
    let mut mount = Mount::new(
        MockHost::new(&log),
        Select::new(MockEnhancer::new(&log)),
        SelectProps::new().data(["a"]).value("a"),
    );
    mount.attach();

    let table = mount.component().debug_table("Select");
    let area = Rect::new(0, 0, 50, 12);
    let mut buf = Buffer::empty(area);
    DebugTableWidget::new(&table).render(area, &mut buf);
    let text = buffer_to_text(&buf);

    assert!(text.contains("Select"));
    assert!(text.contains("Widget"));
    assert!(text.contains("initialized"));
    assert!(text.contains("true"));
    assert!(text.contains("value writes"));
}

#[test]
fn test_debug_text_after_rebuild() {
    let log = CallLog::new();
    let props = SelectProps::new().data(["a"]).value("a");
    let mut mount = Mount::new(MockHost::new(&log), Select::new(MockEnhancer::new(&log)), props);
    mount.attach();
    let next = mount.props().clone().data(["a", "b"]);
    mount.update(next);

    let text = mount.component().debug_text("Select", 50);
    let lines: Vec<_> = text.lines().collect();

    assert!(lines[0].contains("Select"));
    assert!(lines.iter().any(|l| l.contains("reconstructions") && l.contains('1')));
    assert!(lines.iter().any(|l| l.contains("value") && l.contains("\"a\"")));
}
