//! UI Components
//!
//! Each component keeps its own widget state, maps keys to Actions, and
//! renders itself.

pub mod category_dialog;
pub mod chart;
pub mod dashboard;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod range_dialog;
pub mod sidebar;
pub mod table;

pub use category_dialog::CategoryDialog;
pub use chart::ChartComponent;
pub use dashboard::{draw_dashboard, DashboardComponent, DashboardContext};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_dashboard_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use range_dialog::RangeDialog;
pub use table::TableComponent;
