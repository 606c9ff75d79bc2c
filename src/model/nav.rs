//! Navigation state - which page the sidebar menu has selected

/// Pages reachable from the sidebar menu
///
/// Selecting a page replaces the current one unconditionally; there is no
/// history and no terminal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Data,
    Visualization,
    Settings,
}

impl Page {
    pub fn all() -> [Page; 4] {
        [Page::Home, Page::Data, Page::Visualization, Page::Settings]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Data => "Data",
            Page::Visualization => "Visualization",
            Page::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Page::all().iter().position(|p| p == self).unwrap_or(0)
    }

    /// Page for a 1-based menu number
    pub fn from_number(n: u32) -> Option<Page> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Page::all().get(idx).copied()
    }

    pub fn next(&self) -> Page {
        let pages = Page::all();
        pages[(self.index() + 1) % pages.len()]
    }

    pub fn previous(&self) -> Page {
        let pages = Page::all();
        pages[(self.index() + pages.len() - 1) % pages.len()]
    }

    /// Whether the filter widgets are live on this page
    pub fn has_filters(&self) -> bool {
        *self == Page::Visualization
    }
}

/// Tabs inside the Visualization page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VizTab {
    #[default]
    Chart,
    Data,
}

impl VizTab {
    pub fn all() -> [VizTab; 2] {
        [VizTab::Chart, VizTab::Data]
    }

    pub fn name(&self) -> &'static str {
        match self {
            VizTab::Chart => "Chart",
            VizTab::Data => "Data",
        }
    }

    pub fn toggle(&self) -> VizTab {
        match self {
            VizTab::Chart => VizTab::Data,
            VizTab::Data => VizTab::Chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Page::Settings.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Settings);
        let mut page = Page::Home;
        for _ in 0..4 {
            page = page.next();
        }
        assert_eq!(page, Page::Home);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Page::from_number(1), Some(Page::Home));
        assert_eq!(Page::from_number(3), Some(Page::Visualization));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(5), None);
    }

    #[test]
    fn test_only_visualization_has_filters() {
        let with_filters: Vec<Page> = Page::all().into_iter().filter(Page::has_filters).collect();
        assert_eq!(with_filters, vec![Page::Visualization]);
    }

    #[test]
    fn test_viz_tab_toggle() {
        assert_eq!(VizTab::default(), VizTab::Chart);
        assert_eq!(VizTab::Chart.toggle(), VizTab::Data);
        assert_eq!(VizTab::Data.toggle().toggle(), VizTab::Data);
    }
}
