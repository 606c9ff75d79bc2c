//! Dashboard component - the main screen
//!
//! Owns the page widgets (tables and chart) and maps global keys to
//! Actions. Rendering takes the session and the derived view explicitly, so
//! a frame is a pure function of `(dataset, session)`.

use crate::action::Action;
use crate::component::Component;
use crate::components::sidebar::{draw_sidebar, SidebarContext};
use crate::components::{calculate_dashboard_layout, ChartComponent, TableComponent};
use crate::config::Config;
use crate::model::{DataBounds, Dataset, Page, Record, SessionState, StackedChart, VizTab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub const APP_TITLE: &str = "Interactive agroindustry dashboard";

pub struct DashboardComponent {
    pub data_table: TableComponent,
    pub viz_table: TableComponent,
    pub chart: ChartComponent,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            data_table: TableComponent::new("📂 Generated data"),
            viz_table: TableComponent::new("Raw data"),
            chart: ChartComponent::new(),
        }
    }

    /// Table visible for the given page/tab, if any
    pub fn visible_table(&mut self, page: Page, tab: VizTab) -> Option<&mut TableComponent> {
        match (page, tab) {
            (Page::Data, _) => Some(&mut self.data_table),
            (Page::Visualization, VizTab::Data) => Some(&mut self.viz_table),
            _ => None,
        }
    }

    /// Map a key pressed with no dialog open
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(n @ '1'..='4') => n
                .to_digit(10)
                .and_then(Page::from_number)
                .map(Action::Navigate),
            KeyCode::Tab => Some(Action::NextPage),
            KeyCode::BackTab => Some(Action::PrevPage),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                Some(Action::ToggleVizTab)
            }

            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
            KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),

            KeyCode::Char('c') => Some(Action::OpenCategoryFilter),
            KeyCode::Char('s') => Some(Action::OpenSalesRange),
            KeyCode::Char('d') => Some(Action::OpenDateRange),
            KeyCode::Char('x') => Some(Action::ResetFilters),

            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

pub struct DashboardContext<'a> {
    pub dataset: &'a Dataset,
    pub bounds: Option<&'a DataBounds>,
    pub session: &'a SessionState,
    pub config: &'a Config,
    pub status_message: Option<&'a str>,
}

/// Draw one full frame of the dashboard (without modals)
pub fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    ctx: &DashboardContext,
) -> Result<()> {
    let layout = calculate_dashboard_layout(area);
    let view = ctx.session.derive_view(ctx.dataset);

    render_title(frame, layout.title);
    draw_sidebar(
        frame,
        layout.sidebar,
        &SidebarContext {
            page: ctx.session.page,
            filters: &ctx.session.filters,
            bounds: ctx.bounds,
        },
    );

    match (ctx.session.page, view) {
        (Page::Data, Some(view)) => {
            dashboard.data_table.set_view(&view);
            dashboard.data_table.draw(frame, layout.content)?;
        }
        (Page::Visualization, Some(view)) => {
            render_visualization(frame, layout.content, dashboard, ctx, &view)?;
        }
        (Page::Settings, _) => render_settings(frame, layout.content, ctx),
        _ => render_home(frame, layout.content, ctx.dataset),
    }

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, ctx.session.page);
    Ok(())
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

fn render_home(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "  {} days of synthetic production and sales records, starting {} (seed {}).",
                dataset.len(),
                dataset.origin,
                dataset.seed
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  2 ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Data           browse the full table"),
        ]),
        Line::from(vec![
            Span::styled("  3 ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Visualization  filter and chart sales by region"),
        ]),
        Line::from(vec![
            Span::styled("  4 ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Settings       dataset parameters"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Home ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_visualization(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    ctx: &DashboardContext,
    view: &[&Record],
) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let crop = ctx
        .session
        .filters
        .crop
        .map(|c| c.to_string())
        .unwrap_or_else(|| "all crops".to_string());
    let caption = Paragraph::new(Line::from(vec![
        Span::styled("📊 Showing data for ", Style::default().fg(Color::Gray)),
        Span::styled(crop, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  ({} of {} records)", view.len(), ctx.dataset.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(caption, chunks[0]);

    let tabs = VizTab::all();
    let selected = tabs.iter().position(|t| *t == ctx.session.viz_tab).unwrap_or(0);
    let tab_bar = Tabs::new(tabs.iter().map(|t| t.name()).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tab_bar, chunks[1]);

    match ctx.session.viz_tab {
        VizTab::Chart => {
            dashboard.chart.set_chart(StackedChart::build(view));
            dashboard.chart.draw(frame, chunks[2])?;
        }
        VizTab::Data => {
            dashboard.viz_table.set_view(view);
            dashboard.viz_table.draw(frame, chunks[2])?;
        }
    }
    Ok(())
}

fn render_settings(frame: &mut Frame, area: Rect, ctx: &DashboardContext) {
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let config_file = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let lines = vec![
        Line::from(""),
        row("Seed", ctx.dataset.seed.to_string()),
        row("Origin date", ctx.dataset.origin.to_string()),
        row("Records", ctx.dataset.len().to_string()),
        row("Tick rate (ms)", ctx.config.tick_rate_ms.to_string()),
        row("Log directory", ctx.config.log_dir.clone()),
        row("Config file", config_file),
        Line::from(""),
        Line::from(Span::styled(
            "  Override with AGRODASH_TICK_RATE_MS / AGRODASH_LOG_DIR. Changes apply on restart.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &DashboardContext) {
    let mut spans = vec![Span::styled(
        format!(" {} ", ctx.session.page.name()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if ctx.session.page.has_filters() {
        spans.push(Span::styled(
            format!(" {} ", ctx.session.filters.summary()),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, page: Page) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let mut spans = vec![
        key(" q ", Color::Yellow),
        Span::raw("Quit "),
        key(" 1-4 ", Color::Cyan),
        Span::raw("Page "),
    ];
    match page {
        Page::Data => {
            spans.push(key(" j/k ", Color::Cyan));
            spans.push(Span::raw("Scroll "));
        }
        Page::Visualization => {
            spans.push(key(" ←/→ ", Color::Cyan));
            spans.push(Span::raw("Chart/Data "));
            spans.push(key(" c ", Color::Green));
            spans.push(Span::raw("Crop "));
            spans.push(key(" s ", Color::Green));
            spans.push(Span::raw("Sales "));
            spans.push(key(" d ", Color::Green));
            spans.push(Span::raw("Dates "));
            spans.push(key(" x ", Color::Magenta));
            spans.push(Span::raw("Reset "));
        }
        Page::Home | Page::Settings => {}
    }
    spans.push(key(" ? ", Color::White));
    spans.push(Span::raw("Help"));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
