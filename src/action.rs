//! Action enum - everything a key press can ask the dashboard to do
//!
//! Components translate key events into Actions; `App::update` applies
//! them to the session state.

use crate::model::{CropType, Page};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Poll timeout elapsed without input
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Select a sidebar page
    Navigate(Page),
    NextPage,
    PrevPage,
    /// Switch between the Chart and Data tabs of the Visualization page
    ToggleVizTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Table scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    OpenCategoryFilter,
    OpenSalesRange,
    OpenDateRange,
    CloseModal,
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// `None` selects all crops
    SetCropFilter(Option<CropType>),
    SetSalesRange(u32, u32),
    SetDateRange(NaiveDate, NaiveDate),
    ResetFilters,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(page) => write!(f, "Navigate({})", page.name()),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::ToggleVizTab => write!(f, "ToggleVizTab"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ScrollTop => write!(f, "ScrollTop"),
            Action::ScrollBottom => write!(f, "ScrollBottom"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenCategoryFilter => write!(f, "OpenCategoryFilter"),
            Action::OpenSalesRange => write!(f, "OpenSalesRange"),
            Action::OpenDateRange => write!(f, "OpenDateRange"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::SetCropFilter(Some(crop)) => write!(f, "SetCropFilter({})", crop),
            Action::SetCropFilter(None) => write!(f, "SetCropFilter(all)"),
            Action::SetSalesRange(min, max) => write!(f, "SetSalesRange({}, {})", min, max),
            Action::SetDateRange(start, end) => write!(f, "SetDateRange({}, {})", start, end),
            Action::ResetFilters => write!(f, "ResetFilters"),
        }
    }
}
