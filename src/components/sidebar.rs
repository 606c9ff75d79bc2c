//! Sidebar: navigation menu, filter widgets, and the setup footer

use crate::model::{DataBounds, FilterState, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub struct SidebarContext<'a> {
    pub page: Page,
    pub filters: &'a FilterState,
    pub bounds: Option<&'a DataBounds>,
}

pub fn draw_sidebar(frame: &mut Frame, area: Rect, ctx: &SidebarContext) {
    let filter_height = if ctx.page.has_filters() { 11 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Page::all().len() as u16 + 2),
            Constraint::Length(filter_height),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    render_menu(frame, chunks[0], ctx.page);
    if ctx.page.has_filters() {
        render_filters(frame, chunks[1], ctx);
    }
    render_footer(frame, chunks[3]);
}

fn render_menu(frame: &mut Frame, area: Rect, current: Page) {
    let items: Vec<ListItem> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let selected = *page == current;
            let marker = if selected { "● " } else { "○ " };
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(page.name(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Navigation ")
            .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

/// Current value of each filter widget, or the full data range when unset
fn render_filters(frame: &mut Frame, area: Rect, ctx: &SidebarContext) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let crop = ctx
        .filters
        .crop
        .map(|c| c.to_string())
        .unwrap_or_else(|| "All crops".to_string());

    let sales = match (ctx.filters.sales, ctx.bounds) {
        (Some((min, max)), _) => format!("{} - {}", min, max),
        (None, Some(b)) => format!("{} - {} (all)", b.sales.0, b.sales.1),
        (None, None) => "n/a".to_string(),
    };

    let (start, end) = match (ctx.filters.dates, ctx.bounds) {
        (Some((s, e)), _) => (s.to_string(), e.to_string()),
        (None, Some(b)) => (b.dates.0.to_string(), b.dates.1.to_string()),
        (None, None) => ("n/a".to_string(), "n/a".to_string()),
    };

    let lines = vec![
        Line::from(vec![Span::styled(" c ", key), Span::styled("Crop type", label)]),
        Line::from(Span::styled(format!("   {}", crop), value)),
        Line::from(vec![Span::styled(" s ", key), Span::styled("Sales range", label)]),
        Line::from(Span::styled(format!("   {}", sales), value)),
        Line::from(vec![Span::styled(" d ", key), Span::styled("Date range", label)]),
        Line::from(Span::styled(format!("   {}", start), value)),
        Line::from(Span::styled(format!("   {}", end), value)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" x ", key),
            Span::styled("Reset filters", Style::default().fg(Color::Yellow)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " 🎉 Setup complete",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            " Run with: agrodash",
            Style::default().fg(Color::Blue),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CropType, Dataset};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_text(ctx: &SidebarContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(28, 30)).unwrap();
        terminal
            .draw(|frame| draw_sidebar(frame, frame.area(), ctx))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_filters_only_on_visualization() {
        let dataset = Dataset::default_seeded();
        let bounds = DataBounds::of(dataset.records());
        let filters = FilterState {
            crop: Some(CropType::Corn),
            ..Default::default()
        };

        let home = render_text(&SidebarContext {
            page: Page::Home,
            filters: &filters,
            bounds: bounds.as_ref(),
        });
        assert!(home.contains("Navigation"));
        assert!(!home.contains("Filters"));

        let viz = render_text(&SidebarContext {
            page: Page::Visualization,
            filters: &filters,
            bounds: bounds.as_ref(),
        });
        assert!(viz.contains("Filters"));
        assert!(viz.contains("Corn"));
    }
}
