//! Debug state introspection trait

use super::table::{DebugTable, DebugTableBuilder};
use super::widget::table_to_text;

/// A key-value pair shown in an inspector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugEntry {
    pub key: String,
    pub value: String,
}

/// A titled group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSection {
    pub title: String,
    pub entries: Vec<DebugEntry>,
}

impl DebugSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_entry(key, value);
        self
    }

    pub fn push_entry(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(DebugEntry {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Look up an entry value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Types that can describe their state for an inspector
pub trait DebugState {
    fn debug_sections(&self) -> Vec<DebugSection>;

    /// Fold the sections into a table
    fn debug_table(&self, title: impl Into<String>) -> DebugTable {
        let mut builder = DebugTableBuilder::new();
        for section in self.debug_sections() {
            builder.push_section(section.title);
            for entry in section.entries {
                builder.push_entry(entry.key, entry.value);
            }
        }
        builder.finish(title)
    }

    /// The table drawn as bordered plain text, `width` columns wide
    fn debug_text(&self, title: impl Into<String>, width: u16) -> String {
        table_to_text(&self.debug_table(title), width)
    }
}

impl<T: DebugState> DebugState for &T {
    fn debug_sections(&self) -> Vec<DebugSection> {
        (*self).debug_sections()
    }
}

impl<A: DebugState, B: DebugState> DebugState for (A, B) {
    fn debug_sections(&self) -> Vec<DebugSection> {
        let mut sections = self.0.debug_sections();
        sections.extend(self.1.debug_sections());
        sections
    }
}
