//! Model layer - data and session state
//!
//! - `generator` / `record` - the synthetic base table
//! - `filter` - predicates and the view pipeline
//! - `chart` - stacked bar aggregation of a view
//! - `nav` / `session` / `modal` - navigation and overlay state

pub mod chart;
pub mod filter;
pub mod generator;
pub mod modal;
pub mod nav;
pub mod record;
pub mod session;

pub use chart::StackedChart;
pub use filter::{DataBounds, FilterState};
pub use generator::Dataset;
pub use nav::{Page, VizTab};
pub use record::{CropType, Record};
pub use session::SessionState;
