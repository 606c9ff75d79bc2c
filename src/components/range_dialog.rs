//! Two-bound range input for the sales and date filters
//!
//! Both fields are free text. Parsing happens on Enter; a parse failure is
//! shown in the dialog and the dialog stays open.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::error::{parse_date, parse_number, InputError};
use crate::model::DataBounds;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeKind {
    #[default]
    Sales,
    Dates,
}

impl RangeKind {
    pub fn title(&self) -> &'static str {
        match self {
            RangeKind::Sales => "Select the sales range",
            RangeKind::Dates => "Select the date range",
        }
    }

    pub fn labels(&self) -> [&'static str; 2] {
        match self {
            RangeKind::Sales => ["Min", "Max"],
            RangeKind::Dates => ["Start", "End"],
        }
    }
}

#[derive(Default)]
pub struct RangeDialog {
    pub kind: RangeKind,
    pub fields: [String; 2],
    pub active: usize,
    pub error: Option<String>,
    /// Data bounds shown as a hint
    hint: Option<String>,
}

impl RangeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill with the active selection, falling back to the data bounds
    pub fn open_sales(&mut self, current: Option<(u32, u32)>, bounds: Option<&DataBounds>) {
        let prefill = current.or(bounds.map(|b| b.sales));
        self.reset(RangeKind::Sales, prefill.map(|(a, b)| [a.to_string(), b.to_string()]));
        self.hint = bounds.map(|b| format!("Data: {} to {}", b.sales.0, b.sales.1));
    }

    pub fn open_dates(
        &mut self,
        current: Option<(NaiveDate, NaiveDate)>,
        bounds: Option<&DataBounds>,
    ) {
        let prefill = current.or(bounds.map(|b| b.dates));
        self.reset(RangeKind::Dates, prefill.map(|(a, b)| [a.to_string(), b.to_string()]));
        self.hint = bounds.map(|b| format!("Data: {} to {}", b.dates.0, b.dates.1));
    }

    fn reset(&mut self, kind: RangeKind, fields: Option<[String; 2]>) {
        self.kind = kind;
        self.fields = fields.unwrap_or_default();
        self.active = 0;
        self.error = None;
    }

    /// Parse both fields into the matching filter action
    pub fn parse(&self) -> Result<Action, InputError> {
        let [lo_label, hi_label] = self.kind.labels();
        match self.kind {
            RangeKind::Sales => {
                let min = parse_number(lo_label, &self.fields[0])?;
                let max = parse_number(hi_label, &self.fields[1])?;
                Ok(Action::SetSalesRange(min, max))
            }
            RangeKind::Dates => {
                let start = parse_date(lo_label, &self.fields[0])?;
                let end = parse_date(hi_label, &self.fields[1])?;
                Ok(Action::SetDateRange(start, end))
            }
        }
    }

    fn submit(&mut self) -> Option<Action> {
        match self.parse() {
            Ok(action) => {
                self.error = None;
                Some(action)
            }
            Err(e) => {
                log::warn!("Rejected range input: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

impl Component for RangeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.active = 1 - self.active;
                None
            }
            KeyCode::Backspace => {
                self.fields[self.active].pop();
                None
            }
            KeyCode::Char(c) => {
                self.fields[self.active].push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 12);
        frame.render_widget(Clear, popup_area);

        let labels = self.kind.labels();
        let mut lines = vec![Line::from("")];
        for (i, label) in labels.iter().enumerate() {
            let focused = i == self.active;
            let cursor = if focused { "_" } else { "" };
            let style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:>6}: ", label), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}{}", self.fields[i], cursor), style),
            ]));
        }

        lines.push(Line::from(""));
        match (&self.error, &self.hint) {
            (Some(err), _) => lines.push(Line::from(Span::styled(
                format!(" {}", err),
                Style::default().fg(Color::Red),
            ))),
            (None, Some(hint)) => lines.push(Line::from(Span::styled(
                format!(" {}", hint),
                Style::default().fg(Color::DarkGray),
            ))),
            (None, None) => lines.push(Line::from("")),
        }

        lines.push(Line::from(""));
        lines.push(
            Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("Apply  "),
                Span::styled(" Tab ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw("Switch  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw("Cancel"),
            ])
            .alignment(Alignment::Center),
        );

        let border_color = if self.error.is_some() { Color::Red } else { Color::Cyan };
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", self.kind.title()))
                .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut RangeDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn clear_field(dialog: &mut RangeDialog) {
        while !dialog.fields[dialog.active].is_empty() {
            dialog.handle_key_event(key(KeyCode::Backspace)).unwrap();
        }
    }

    #[test]
    fn test_prefilled_with_bounds() {
        let dataset = Dataset::default_seeded();
        let bounds = DataBounds::of(dataset.records()).unwrap();
        let mut dialog = RangeDialog::new();

        dialog.open_dates(None, Some(&bounds));
        assert_eq!(dialog.fields[0], "2024-01-01");
        assert_eq!(dialog.fields[1], "2024-04-09");

        dialog.open_sales(Some((200, 300)), Some(&bounds));
        assert_eq!(dialog.fields, ["200".to_string(), "300".to_string()]);
    }

    #[test]
    fn test_enter_applies_sales_range() {
        let mut dialog = RangeDialog::new();
        dialog.open_sales(None, None);
        type_text(&mut dialog, "200");
        dialog.handle_key_event(key(KeyCode::Tab)).unwrap();
        type_text(&mut dialog, "300");

        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SetSalesRange(200, 300))
        );
        assert!(dialog.error.is_none());
    }

    #[test]
    fn test_malformed_date_keeps_dialog_open() {
        let mut dialog = RangeDialog::new();
        dialog.open_dates(
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )),
            None,
        );
        dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        clear_field(&mut dialog);
        type_text(&mut dialog, "2024-02-30");

        assert_eq!(dialog.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        let error = dialog.error.clone().unwrap();
        assert!(error.contains("End"));
        assert!(error.contains("2024-02-30"));

        clear_field(&mut dialog);
        type_text(&mut dialog, "2024-02-29");
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SetDateRange(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            ))
        );
        assert!(dialog.error.is_none());
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let mut dialog = RangeDialog::new();
        dialog.open_sales(Some((400, 200)), None);
        assert_eq!(dialog.parse(), Ok(Action::SetSalesRange(400, 200)));
    }
}
