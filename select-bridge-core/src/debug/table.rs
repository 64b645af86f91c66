//! Debug table rows and builder

/// A row in a debug table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugTableRow {
    Section(String),
    Entry { key: String, value: String },
}

/// A titled table of sections and entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugTable {
    pub title: String,
    pub rows: Vec<DebugTableRow>,
}

impl DebugTable {
    /// Value of the first entry with `key`, searching every section
    pub fn value(&self, key: &str) -> Option<&str> {
        self.rows.iter().find_map(|row| match row {
            DebugTableRow::Entry { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Builder for [`DebugTable`]
///
/// ```
/// use select_bridge_core::debug::DebugTableBuilder;
///
/// let table = DebugTableBuilder::new()
///     .section("Widget")
///     .entry("mounted", "true")
///     .finish("Select");
///
/// assert_eq!(table.value("mounted"), Some("true"));
/// ```
#[derive(Debug, Default)]
pub struct DebugTableBuilder {
    rows: Vec<DebugTableRow>,
}

impl DebugTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, title: impl Into<String>) -> Self {
        self.push_section(title);
        self
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_entry(key, value);
        self
    }

    pub fn push_section(&mut self, title: impl Into<String>) {
        self.rows.push(DebugTableRow::Section(title.into()));
    }

    pub fn push_entry(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.push(DebugTableRow::Entry {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn finish(self, title: impl Into<String>) -> DebugTable {
        DebugTable {
            title: title.into(),
            rows: self.rows,
        }
    }
}
