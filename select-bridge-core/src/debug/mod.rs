//! Inspection of bridge state
//!
//! Components report their lifecycle state as titled sections of key-value
//! entries ([`DebugState`]). The sections fold into a [`DebugTable`], which
//! [`DebugTableWidget`] draws with ratatui. [`DebugState::debug_text`] draws
//! it off-screen into plain text; `Select` logs that text at trace level
//! after every reconcile, and terminal inspectors can draw the widget into
//! their own frames.
//!
//! ```
//! use select_bridge_core::debug::{DebugSection, DebugState};
//!
//! struct Counter(u32);
//!
//! impl DebugState for Counter {
//!     fn debug_sections(&self) -> Vec<DebugSection> {
//!         vec![DebugSection::new("Counter").entry("value", self.0.to_string())]
//!     }
//! }
//!
//! let table = Counter(3).debug_table("Inspector");
//! assert_eq!(table.rows.len(), 2);
//! ```

mod state;
mod table;
mod widget;

pub use state::{DebugEntry, DebugSection, DebugState};
pub use table::{DebugTable, DebugTableBuilder, DebugTableRow};
pub use widget::{buffer_to_text, table_to_text, DebugTableStyle, DebugTableWidget};
