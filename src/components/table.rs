//! Record table
//!
//! Lists every field of every record in a view, in view order, with a header,
//! a separator, and a row count footer.

use crate::action::Action;
use crate::component::Component;
use crate::model::Record;
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PAGE_SIZE: usize = 10;

pub struct TableComponent {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    scroll: usize,
}

impl TableComponent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            headers: Record::headers(),
            rows: Vec::new(),
            scroll: 0,
        }
    }

    /// Replace the rows with the records of a view
    pub fn set_view(&mut self, view: &[&Record]) {
        self.rows = view.iter().map(|r| r.cells()).collect();
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.row_count().saturating_sub(1)
    }

    /// Header, separator, one line per row, blank line, row count
    pub fn build_table_lines(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }

        let pad = |text: &str, width: usize| -> String {
            let fill = width.saturating_sub(text.width());
            format!("{}{}", text, " ".repeat(fill))
        };

        let mut lines = Vec::with_capacity(rows.len() + 4);

        let header_spans: Vec<Span> = headers
            .iter()
            .zip(&widths)
            .flat_map(|(h, &w)| {
                vec![
                    Span::styled(
                        pad(h, w),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(header_spans));

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        for row in rows {
            let spans: Vec<Span> = row
                .iter()
                .zip(&widths)
                .flat_map(|(cell, &w)| {
                    vec![
                        Span::styled(pad(cell, w), Style::default().fg(Color::White)),
                        Span::raw(" │ "),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Total rows: {}", rows.len()),
            Style::default().fg(Color::Yellow),
        )));

        lines
    }
}

impl Component for TableComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max = self.max_scroll();
        match action {
            Action::ScrollDown => self.scroll = (self.scroll + 1).min(max),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::PageDown => self.scroll = (self.scroll + PAGE_SIZE).min(max),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SIZE),
            Action::ScrollTop => self.scroll = 0,
            Action::ScrollBottom => self.scroll = max,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = Self::build_table_lines(&self.headers, &self.rows);
        let total = content.len();
        let visible_height = area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, FilterState};

    #[test]
    fn test_lines_cover_every_record() {
        let dataset = Dataset::default_seeded();
        let view = FilterState::default().apply(dataset.records());
        let mut table = TableComponent::new("Data");
        table.set_view(&view);

        let lines = TableComponent::build_table_lines(&table.headers, &table.rows);
        assert_eq!(table.row_count(), 100);
        // header + separator + rows + blank + footer
        assert_eq!(lines.len(), 104);
        assert_eq!(lines.last().unwrap().to_string(), "Total rows: 100");
        assert!(lines[2].to_string().starts_with("2024-01-01"));
    }

    #[test]
    fn test_empty_view_has_zero_rows() {
        let mut table = TableComponent::new("Data");
        table.set_view(&[]);
        let lines = TableComponent::build_table_lines(&table.headers, &table.rows);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].to_string(), "Total rows: 0");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let dataset = Dataset::default_seeded();
        let view: Vec<&Record> = dataset.records().iter().take(5).collect();
        let mut table = TableComponent::new("Data");
        table.set_view(&view);

        table.update(Action::PageDown).unwrap();
        assert_eq!(table.scroll, 4);
        table.update(Action::ScrollUp).unwrap();
        assert_eq!(table.scroll, 3);
        table.update(Action::ScrollTop).unwrap();
        assert_eq!(table.scroll, 0);
        table.update(Action::ScrollBottom).unwrap();
        assert_eq!(table.scroll, 4);

        table.set_view(&view[..2]);
        assert_eq!(table.scroll, 1);
    }
}
