//! Layout calculations for the dashboard

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the main screen
pub struct DashboardLayout {
    pub title: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Centered popup, clipped to `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Title bar on top, sidebar (28 columns) on the left, content on the right,
/// status and help lines at the bottom
pub fn calculate_dashboard_layout(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(rows[1]);

    DashboardLayout {
        title: rows[0],
        sidebar: columns[0],
        content: columns[1],
        status: rows[2],
        help: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_dashboard_layout(area);
        assert_eq!(layout.title.height, 3);
        assert_eq!(layout.sidebar.width, 28);
        assert_eq!(layout.content.width, 92);
        assert_eq!(layout.content.height, 35);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_popup_is_clipped() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 50, 20);
        assert_eq!(popup, Rect::new(0, 0, 30, 10));

        let popup = centered_popup(Rect::new(0, 0, 100, 40), 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }
}
