//! Ratatui rendering of debug tables

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};

use super::table::{DebugTable, DebugTableRow};

/// Plain text of a buffer, one line per row, trailing spaces trimmed
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y.saturating_add(area.height) {
        let mut line = String::new();
        for x in area.x..area.x.saturating_add(area.width) {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end_matches(' ').to_string());
    }
    lines.join("\n")
}

/// Draw `table` into an off-screen buffer `width` columns wide, as plain text
///
/// The height fits every row plus the border.
pub fn table_to_text(table: &DebugTable, width: u16) -> String {
    let height = u16::try_from(table.rows.len() + 2).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    DebugTableWidget::new(table).render(area, &mut buf);
    buffer_to_text(&buf)
}

/// Styles for [`DebugTableWidget`]
#[derive(Debug, Clone)]
pub struct DebugTableStyle {
    pub border: Style,
    pub section: Style,
    pub key: Style,
    pub value: Style,
}

impl Default for DebugTableStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            section: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            key: Style::default().fg(Color::Yellow),
            value: Style::default().fg(Color::White),
        }
    }
}

/// Draws a [`DebugTable`] as a bordered two-column table
pub struct DebugTableWidget<'a> {
    table: &'a DebugTable,
    style: DebugTableStyle,
}

impl<'a> DebugTableWidget<'a> {
    pub fn new(table: &'a DebugTable) -> Self {
        Self {
            table,
            style: DebugTableStyle::default(),
        }
    }

    pub fn style(mut self, style: DebugTableStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for DebugTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let key_width = self
            .table
            .rows
            .iter()
            .filter_map(|row| match row {
                DebugTableRow::Entry { key, .. } => Some(key.chars().count()),
                DebugTableRow::Section(_) => None,
            })
            .max()
            .unwrap_or(0) as u16;
        let key_width = key_width
            .saturating_add(2)
            .min(area.width.saturating_sub(4) / 2);

        let rows: Vec<Row> = self
            .table
            .rows
            .iter()
            .map(|row| match row {
                DebugTableRow::Section(title) => {
                    Row::new(vec![Cell::from(title.clone()).style(self.style.section)])
                }
                DebugTableRow::Entry { key, value } => Row::new(vec![
                    Cell::from(format!("  {key}")).style(self.style.key),
                    Cell::from(value.clone()).style(self.style.value),
                ]),
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(format!(" {} ", self.table.title));

        Table::new(rows, [Constraint::Length(key_width + 2), Constraint::Min(0)])
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugTableBuilder;

    #[test]
    fn test_renders_sections_and_entries() {
        let table = DebugTableBuilder::new()
            .section("Widget")
            .entry("mounted", "yes")
            .entry("value", "b")
            .finish("Select");

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        DebugTableWidget::new(&table).render(area, &mut buf);
        let text = buffer_to_text(&buf);

        assert!(text.contains("Select"));
        assert!(text.contains("Widget"));
        assert!(text.contains("mounted"));
        assert!(text.contains("yes"));
        assert!(text.contains("value"));
    }

    #[test]
    fn test_table_to_text_fits_rows() {
        let table = DebugTableBuilder::new()
            .section("Events")
            .entry("change", "bound")
            .finish("Select");
        let text = table_to_text(&table, 30);

        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap_or_default().contains("Select"));
        assert!(text.contains("change"));
        assert!(text.contains("bound"));
    }

    #[test]
    fn test_too_small_area_draws_nothing() {
        let table = DebugTableBuilder::new().entry("k", "v").finish("T");
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        DebugTableWidget::new(&table).render(area, &mut buf);

        assert_eq!(buffer_to_text(&buf), "\n");
    }
}
