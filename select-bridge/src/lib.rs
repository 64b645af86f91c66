//! select-bridge: drive an imperative dropdown widget from declarative props
//!
//! A `<select>` is rendered from props like any other component; a widget
//! library (select2 and friends) is then constructed on top of it and kept in
//! step with later props. Widget events flow back out through callback props.
//!
//! # Example
//! ```
//! use select_bridge::prelude::*;
//! use select_bridge::testing::{CallLog, MockEnhancer, MockHost};
//!
//! let log = CallLog::new();
//! let props = SelectProps::new()
//!     .data(["red", "green", "blue"])
//!     .value("green")
//!     .on_change(Callback::new(|event| println!("now {}", event.value)));
//!
//! let mut mount = Mount::new(MockHost::new(&log), Select::new(MockEnhancer::new(&log)), props);
//! mount.attach();
//! assert_eq!(mount.host().root().value(), json!("green"));
//! mount.detach();
//! ```

// Re-export everything from core
pub use select_bridge_core::*;

// Re-export the components
pub use select_bridge_components::{
    handlers_changed, needs_rebuild, render_select, DataError, DataItem, OptionEntry, OptionGroup,
    OptionRecord, Select, SelectProps, SelectStats, RESERVED_PROPS,
};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use select_bridge_core::{Component, Enhancer, FuzzyEq, Host, WidgetHandle};

    // Lifecycle
    pub use select_bridge_core::{Mount, Phase};

    // Props and events
    pub use select_bridge_core::{
        default_event_table, Callback, EnhancerOptions, EventBinding, WidgetEvent,
    };

    // Components
    pub use select_bridge_components::{DataItem, OptionGroup, OptionRecord, Select, SelectProps};

    // Debug
    pub use select_bridge_core::debug::{DebugSection, DebugState, DebugTableBuilder};

    // Values
    pub use select_bridge_core::{json, Element, Node, Value};
}
