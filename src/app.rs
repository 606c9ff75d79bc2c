//! Root application component
//!
//! `App` owns the base table, the session state, and the child components.
//! Key events become Actions, `update` applies them to the session, and
//! `draw` re-derives the whole screen from `(dataset, session)`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_dashboard, CategoryDialog, DashboardComponent, DashboardContext, HelpDialog, QuitDialog,
    RangeDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{DataBounds, Dataset, FilterState, SessionState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct App {
    pub config: Config,

    /// Base table, generated once per run
    pub dataset: Dataset,
    bounds: Option<DataBounds>,

    pub session: SessionState,
    pub modals: ModalStack,

    pub should_quit: bool,
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub dashboard: DashboardComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub category_dialog: CategoryDialog,
    pub range_dialog: RangeDialog,
}

impl App {
    pub fn new(config: Config) -> App {
        let dataset = Dataset::default_seeded();
        let bounds = DataBounds::of(dataset.records());
        App {
            config,
            dataset,
            bounds,
            session: SessionState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            dashboard: DashboardComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            category_dialog: CategoryDialog::new(),
            range_dialog: RangeDialog::new(),
        }
    }

    /// Apply a filter change, close the dialog that produced it, and report it
    fn change_filters<F>(&mut self, change: F)
    where
        F: FnOnce(&mut FilterState),
    {
        change(&mut self.session.filters);
        self.dashboard.viz_table.reset_scroll();
        if !self.modals.is_empty() {
            self.modals.pop();
        }

        let summary = self.session.filters.summary();
        let shown = self.session.filters.apply(self.dataset.records()).len();
        log::info!("Filters changed: {} ({} records)", summary, shown);
        self.status_message = Some(format!("{} records match", shown));
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::CategoryFilter => self.category_dialog.handle_key_event(key),
            Modal::SalesRange | Modal::DateRange => self.range_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
            Modal::CategoryFilter => self.category_dialog.draw(frame, area),
            Modal::SalesRange | Modal::DateRange => self.range_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }
        match self.modals.top() {
            Some(modal) => self.handle_modal_key_event(modal, key),
            None => Ok(self.dashboard.handle_key_event(key)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let filters_live = self.session.page.has_filters();

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(page) => {
                if self.session.navigate(page) {
                    self.status_message = None;
                }
            }
            Action::NextPage => return Ok(Some(Action::Navigate(self.session.page.next()))),
            Action::PrevPage => return Ok(Some(Action::Navigate(self.session.page.previous()))),
            Action::ToggleVizTab => {
                if filters_live {
                    self.session.viz_tab = self.session.viz_tab.toggle();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (visible table only)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp
            | Action::ScrollDown
            | Action::PageUp
            | Action::PageDown
            | Action::ScrollTop
            | Action::ScrollBottom => {
                let (page, tab) = (self.session.page, self.session.viz_tab);
                if let Some(table) = self.dashboard.visible_table(page, tab) {
                    table.update(action)?;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::OpenCategoryFilter if filters_live => {
                self.category_dialog
                    .open(self.dataset.crops_in_order(), self.session.filters.crop);
                self.modals.push(Modal::CategoryFilter);
            }
            Action::OpenSalesRange if filters_live => {
                self.range_dialog
                    .open_sales(self.session.filters.sales, self.bounds.as_ref());
                self.modals.push(Modal::SalesRange);
            }
            Action::OpenDateRange if filters_live => {
                self.range_dialog
                    .open_dates(self.session.filters.dates, self.bounds.as_ref());
                self.modals.push(Modal::DateRange);
            }
            Action::OpenCategoryFilter | Action::OpenSalesRange | Action::OpenDateRange => {}
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(Modal::QuitConfirm) {
                    self.should_quit = true;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::SetCropFilter(crop) => self.change_filters(|f| f.crop = crop),
            Action::SetSalesRange(min, max) => self.change_filters(|f| f.sales = Some((min, max))),
            Action::SetDateRange(start, end) => {
                self.change_filters(|f| f.dates = Some((start, end)))
            }
            Action::ResetFilters => {
                if filters_live {
                    self.session.filters.reset();
                    self.dashboard.viz_table.reset_scroll();
                    log::info!("Filters reset");
                    self.status_message = Some("Filters reset".to_string());
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = DashboardContext {
            dataset: &self.dataset,
            bounds: self.bounds.as_ref(),
            session: &self.session,
            config: &self.config,
            status_message: self.status_message.as_deref(),
        };
        draw_dashboard(frame, area, &mut self.dashboard, &ctx)?;

        if let Some(modal) = self.modals.top() {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CropType, Page, Record};

    fn app() -> App {
        App::new(Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        let mut next = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn view(app: &App) -> Vec<&Record> {
        app.session.derive_view(&app.dataset).unwrap_or_default()
    }

    #[test]
    fn test_starts_on_home_with_full_table() {
        let app = app();
        assert_eq!(app.session.page, Page::Home);
        assert_eq!(app.dataset.len(), 100);
        assert!(view(&app).is_empty());
    }

    #[test]
    fn test_table_is_fixed_whatever_the_config() {
        let from_file =
            Config::from_json(r#"{ "seed": 1, "period_days": 7, "origin": "+262142-12-01" }"#)
                .unwrap();
        let from_env = Config::default().with_overrides(|key| match key {
            "AGRODASH_PERIOD_DAYS" => Some("7".to_string()),
            "AGRODASH_SEED" => Some("1".to_string()),
            _ => None,
        });

        for config in [from_file, from_env] {
            let app = App::new(config);
            assert_eq!(app.dataset.len(), 100);
            assert_eq!(app.dataset.seed, 150);
            assert_eq!(app.dataset, Dataset::default_seeded());
        }
    }

    #[test]
    fn test_page_cycle() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.page, Page::Data);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.page, Page::Settings);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.page, Page::Data);
        assert_eq!(view(&app).len(), 100);
    }

    #[test]
    fn test_filter_keys_ignored_outside_visualization() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('c'));
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Char('s'));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_corn_and_sales_range_through_dialogs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.modals.top(), Some(Modal::CategoryFilter));
        let corn_index = app
            .dataset
            .crops_in_order()
            .iter()
            .position(|c| *c == CropType::Corn)
            .unwrap();
        for _ in 0..=corn_index {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.session.filters.crop, Some(CropType::Corn));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.modals.top(), Some(Modal::SalesRange));
        for _ in 0..8 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "200");
        press(&mut app, KeyCode::Tab);
        for _ in 0..8 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "300");
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.session.filters.sales, Some((200, 300)));

        let result = view(&app);
        let corn_total = app
            .dataset
            .records()
            .iter()
            .filter(|r| r.crop == CropType::Corn)
            .count();
        assert!(result.len() <= corn_total);
        assert!(result
            .iter()
            .all(|r| r.crop == CropType::Corn && (200..=300).contains(&r.sales_amount)));
    }

    #[test]
    fn test_invalid_date_shows_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modals.top(), Some(Modal::DateRange));
        assert!(app.range_dialog.error.is_some());
        assert_eq!(app.session.filters.dates, None);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_reset_restores_full_view() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        app.update(Action::SetCropFilter(Some(CropType::Squash))).unwrap();
        app.update(Action::SetSalesRange(100, 200)).unwrap();
        assert!(view(&app).len() < 100);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session.filters, FilterState::default());
        assert_eq!(view(&app).len(), 100);
        assert_eq!(app.status_message.as_deref(), Some("Filters reset"));
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_inside_a_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('s'));
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_viz_tab_toggle_only_on_visualization() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.viz_tab, crate::model::VizTab::Chart);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.viz_tab, crate::model::VizTab::Data);
    }
}
