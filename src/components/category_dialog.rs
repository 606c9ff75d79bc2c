//! Crop type selector
//!
//! First entry selects all crops; the rest are the crop types present in the
//! base table, in order of first appearance.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::CropType;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct CategoryDialog {
    pub crops: Vec<CropType>,
    /// 0 is "All crops", `i + 1` is `crops[i]`
    pub selected_index: usize,
    list_state: ListState,
    current: Option<CropType>,
}

impl Default for CategoryDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            crops: Vec::new(),
            selected_index: 0,
            list_state,
            current: None,
        }
    }

    /// Load the options and highlight the active filter
    pub fn open(&mut self, crops: Vec<CropType>, current: Option<CropType>) {
        self.selected_index = current
            .and_then(|c| crops.iter().position(|x| *x == c))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.crops = crops;
        self.current = current;
        self.list_state.select(Some(self.selected_index));
    }

    pub fn selected_crop(&self) -> Option<CropType> {
        match self.selected_index {
            0 => None,
            i => self.crops.get(i - 1).copied(),
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < self.crops.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for CategoryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('c') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetCropFilter(self.selected_crop())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = (self.crops.len() as u16 + 3) + 6;
        let popup_area = centered_popup(area, 40, height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(popup_area);

        let header_text = match self.current {
            Some(crop) => format!("Current: {}", crop),
            None => "Showing all crops".to_string(),
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select a crop type ")
                .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(header, chunks[0]);

        let marker = |active: bool| if active { "● " } else { "  " };
        let mut items = vec![ListItem::new(Line::from(vec![
            Span::styled(marker(self.current.is_none()), Style::default().fg(Color::Green)),
            Span::styled("All crops", Style::default().fg(Color::DarkGray)),
        ]))];
        for crop in &self.crops {
            let active = self.current == Some(*crop);
            let style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(marker(active), Style::default().fg(Color::Green)),
                Span::styled(crop.name(), style),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Move  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}
