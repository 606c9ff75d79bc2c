//! Session state - everything one interaction sequence carries between frames
//!
//! The dashboard is re-derived from `(dataset, session)` on every frame; the
//! session is the only state that survives from one event to the next.

use super::filter::FilterState;
use super::generator::Dataset;
use super::nav::{Page, VizTab};
use super::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub page: Page,
    pub viz_tab: VizTab,
    pub filters: FilterState,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current page. Returns whether it changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        log::info!("Navigate {} -> {}", self.page.name(), page.name());
        self.page = page;
        true
    }

    /// Records the current page displays
    ///
    /// Data shows the whole base table, Visualization the filtered view,
    /// and the other pages render no records at all.
    pub fn derive_view<'a>(&self, dataset: &'a Dataset) -> Option<Vec<&'a Record>> {
        match self.page {
            Page::Data => Some(dataset.records().iter().collect()),
            Page::Visualization => Some(self.filters.apply(dataset.records())),
            Page::Home | Page::Settings => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::CropType;

    #[test]
    fn test_navigate_replaces_page() {
        let mut session = SessionState::new();
        assert_eq!(session.page, Page::Home);
        assert!(session.navigate(Page::Settings));
        assert!(session.navigate(Page::Data));
        assert_eq!(session.page, Page::Data);
        assert!(!session.navigate(Page::Data));
    }

    #[test]
    fn test_view_per_page() {
        let dataset = Dataset::default_seeded();
        let mut session = SessionState::new();
        session.filters.crop = Some(CropType::Corn);

        assert!(session.derive_view(&dataset).is_none());

        session.navigate(Page::Data);
        assert_eq!(session.derive_view(&dataset).map(|v| v.len()), Some(100));

        session.navigate(Page::Visualization);
        let view = session.derive_view(&dataset).unwrap();
        assert!(view.iter().all(|r| r.crop == CropType::Corn));

        session.navigate(Page::Settings);
        assert!(session.derive_view(&dataset).is_none());
    }

    #[test]
    fn test_filters_survive_navigation() {
        let mut session = SessionState::new();
        session.navigate(Page::Visualization);
        session.filters.sales = Some((200, 300));
        session.navigate(Page::Home);
        session.navigate(Page::Visualization);
        assert_eq!(session.filters.sales, Some((200, 300)));
    }
}
