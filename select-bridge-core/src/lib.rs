//! Core traits and types for select-bridge
//!
//! This crate provides the abstractions for driving an imperative, stateful
//! dropdown widget (a "select enhancer") from a declarative component tree.
//!
//! # Core Concepts
//!
//! - **Host**: the UI framework; resolves elements and applies rendered markup
//! - **Enhancer / WidgetHandle**: the widget library and a live widget instance
//! - **Component / Mount**: props-driven rendering plus lifecycle hooks, driven
//!   by an explicit attach/update/detach state machine
//! - **FuzzyEq**: type-coercing structural equality used to skip redundant work
//! - **Callback**: identity-comparable event handlers
//!
//! # Example
//!
//! ```
//! use select_bridge_core::testing::{CallLog, MockHost};
//! use select_bridge_core::{Component, Element, Mount, Node};
//!
//! struct Greeting;
//!
//! impl Component<MockHost> for Greeting {
//!     type Props = String;
//!
//!     fn render(&self, name: &String) -> Element {
//!         Element::new("span").child(Node::text(format!("Hello, {name}")))
//!     }
//! }
//!
//! let log = CallLog::new();
//! let mut mount = Mount::new(MockHost::new(&log), Greeting, "world".to_string());
//! mount.attach();
//! assert_eq!(mount.render().text_content(), "Hello, world");
//! ```

pub mod bus;
pub mod callback;
pub mod component;
pub mod debug;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod event;
pub mod markup;
pub mod options;
pub mod patch;
pub mod testing;
pub mod value;
pub mod widget;

pub use bus::ListenerRegistry;
pub use callback::Callback;
pub use component::{Component, Mount, Phase};
pub use event::{default_event_table, EventBinding, EventName, WidgetEvent, NAMESPACE};
pub use markup::{Attributes, Element, Node};
pub use options::{EnhancerOptions, OptionsError, ResolvedOptions, LOCALE};
pub use patch::{AttrChange, LiveElement, Patch};
pub use value::{display_scalar, FuzzyEq};
pub use widget::{Enhancer, Host, WidgetHandle};

// Re-export serde_json's value type; it is the currency of props and widgets
pub use serde_json::{json, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::Callback;
    pub use crate::component::{Component, Mount, Phase};
    pub use crate::debug::{DebugSection, DebugState};
    pub use crate::event::{default_event_table, EventBinding, WidgetEvent};
    pub use crate::markup::{Element, Node};
    pub use crate::options::EnhancerOptions;
    pub use crate::value::FuzzyEq;
    pub use crate::widget::{Enhancer, Host, WidgetHandle};
    pub use serde_json::{json, Value};
}
