//! Stacked bar chart: one horizontal bar per region, one colored segment per
//! crop, length proportional to summed sales.

use crate::component::Component;
use crate::model::chart::segment_widths;
use crate::model::{CropType, StackedChart};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const CHART_TITLE: &str = "Sales vs crop type by region";
const LABEL_WIDTH: usize = 13;
const TOTAL_WIDTH: u16 = 8;

pub fn crop_color(crop: CropType) -> Color {
    match crop {
        CropType::Corn => Color::Yellow,
        CropType::Bean => Color::Red,
        CropType::Squash => Color::Magenta,
        CropType::Celery => Color::Green,
    }
}

#[derive(Default)]
pub struct ChartComponent {
    chart: StackedChart,
}

impl ChartComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_chart(&mut self, chart: StackedChart) {
        self.chart = chart;
    }

    /// Render the chart into lines for an inner area `width` columns wide
    pub fn build_chart_lines(chart: &StackedChart, width: u16) -> Vec<Line<'static>> {
        if chart.is_empty() {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No data for the current filters",
                    Style::default().fg(Color::Yellow),
                )),
            ];
        }

        let bar_width = width.saturating_sub(LABEL_WIDTH as u16 + TOTAL_WIDTH);
        let max_total = chart.max_total();
        let mut lines = Vec::new();

        let mut legend = vec![Span::styled("Crop: ", Style::default().fg(Color::DarkGray))];
        for crop in chart.crops() {
            legend.push(Span::styled("■ ", Style::default().fg(crop_color(crop))));
            legend.push(Span::raw(format!("{}  ", crop)));
        }
        lines.push(Line::from(legend));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Region", width = LABEL_WIDTH),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Sales", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]));

        for bar in &chart.bars {
            let mut spans = vec![Span::styled(
                format!("{:<width$}", bar.region.name(), width = LABEL_WIDTH),
                Style::default().fg(Color::White),
            )];

            let widths = segment_widths(bar, max_total, bar_width);
            for (segment, w) in bar.segments.iter().zip(widths) {
                if w > 0 {
                    spans.push(Span::styled(
                        "█".repeat(w as usize),
                        Style::default().fg(crop_color(segment.crop)),
                    ));
                }
            }

            spans.push(Span::styled(
                format!(" {}", bar.total()),
                Style::default().fg(Color::Yellow),
            ));
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        lines
    }
}

impl Component for ChartComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let inner_width = area.width.saturating_sub(2);
        let lines = Self::build_chart_lines(&self.chart, inner_width);

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", CHART_TITLE))
                .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, FilterState, Record};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(chart: &StackedChart) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut component = ChartComponent::new();
        component.set_chart(chart.clone());
        terminal
            .draw(|frame| {
                component.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_render_is_idempotent() {
        let dataset = Dataset::default_seeded();
        let view = FilterState::default().apply(dataset.records());
        let chart = StackedChart::build(&view);
        assert_eq!(render(&chart), render(&chart));
    }

    #[test]
    fn test_one_bar_line_per_region() {
        let dataset = Dataset::default_seeded();
        let view = FilterState::default().apply(dataset.records());
        let chart = StackedChart::build(&view);
        let lines = ChartComponent::build_chart_lines(&chart, 78);

        let bar_lines = lines
            .iter()
            .filter(|l| l.to_string().contains('█'))
            .count();
        assert_eq!(bar_lines, chart.bars.len());
    }

    #[test]
    fn test_longest_bar_fills_width() {
        let dataset = Dataset::default_seeded();
        let view = FilterState::default().apply(dataset.records());
        let chart = StackedChart::build(&view);
        let lines = ChartComponent::build_chart_lines(&chart, 78);

        let longest = lines
            .iter()
            .map(|l| l.to_string().chars().filter(|c| *c == '█').count())
            .max()
            .unwrap();
        assert_eq!(longest, 78 - LABEL_WIDTH - TOTAL_WIDTH as usize);
    }

    #[test]
    fn test_empty_view_draws_no_bars() {
        let empty: Vec<&Record> = Vec::new();
        let chart = StackedChart::build(&empty);
        let buffer = render(&chart);
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("No data for the current filters"));
        assert!(!text.contains('█'));
    }
}
