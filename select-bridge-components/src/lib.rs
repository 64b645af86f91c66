//! Components for select-bridge
//!
//! This crate provides the [`Select`] component: a `<select>` rendered from
//! props and enhanced by an imperative dropdown widget. It implements
//! `Component<H>` for any host whose elements the widget library accepts, so
//! it is driven through a [`Mount`](select_bridge_core::Mount).
//!
//! # Example
//!
//! ```
//! use select_bridge_components::{DataItem, Select, SelectProps};
//! use select_bridge_core::testing::{CallLog, MockEnhancer, MockHost};
//! use select_bridge_core::{json, Callback, Mount};
//!
//! let log = CallLog::new();
//! let props = SelectProps::new()
//!     .data_json(json!([
//!         {"text": "Fruit", "children": [{"id": 1, "text": "Apple"}, {"id": 2, "text": "Pear"}]},
//!         "other"
//!     ]))
//!     .unwrap()
//!     .on_change(Callback::new(|event| println!("changed to {}", event.value)));
//!
//! let mut mount = Mount::new(MockHost::new(&log), Select::new(MockEnhancer::new(&log)), props);
//! mount.attach();
//!
//! let next = mount.props().clone().value(2);
//! mount.update(next);
//! assert_eq!(mount.host().root().value(), json!(2));
//! ```

mod select;

pub use select::{
    handlers_changed, needs_rebuild, render_select, DataError, DataItem, OptionEntry, OptionGroup,
    OptionRecord, Select, SelectProps, SelectStats, RESERVED_PROPS,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DataItem, OptionGroup, OptionRecord, Select, SelectProps};
}
