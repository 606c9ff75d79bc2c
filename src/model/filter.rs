//! Filter pipeline
//!
//! A view is derived by running the active predicates, in a fixed order,
//! against the base table. Each stage narrows the output of the previous
//! one, so a record in the view satisfies every active predicate. The base
//! table is only ever borrowed.

use super::record::{CropType, Record};
use chrono::NaiveDate;

/// Actual min/max of the rangeable columns in the base table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBounds {
    pub sales: (u32, u32),
    pub dates: (NaiveDate, NaiveDate),
}

impl DataBounds {
    /// Returns `None` for an empty table
    pub fn of(records: &[Record]) -> Option<DataBounds> {
        let first = records.first()?;
        let mut sales = (first.sales_amount, first.sales_amount);
        let mut dates = (first.date, first.date);

        for r in &records[1..] {
            sales.0 = sales.0.min(r.sales_amount);
            sales.1 = sales.1.max(r.sales_amount);
            dates.0 = dates.0.min(r.date);
            dates.1 = dates.1.max(r.date);
        }

        Some(DataBounds { sales, dates })
    }
}

/// Clamp an inclusive selection to the data's bounds
///
/// The result may have `lo > hi`, which matches nothing.
fn clamp_range<T: Ord + Copy>(selected: (T, T), bounds: (T, T)) -> (T, T) {
    (selected.0.max(bounds.0), selected.1.min(bounds.1))
}

/// A single condition over one field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Crop(CropType),
    Sales { min: u32, max: u32 },
    Dates { start: NaiveDate, end: NaiveDate },
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        match *self {
            Predicate::Crop(crop) => record.crop == crop,
            Predicate::Sales { min, max } => min <= record.sales_amount && record.sales_amount <= max,
            Predicate::Dates { start, end } => start <= record.date && record.date <= end,
        }
    }
}

/// User selection for each filter stage. `None` means the stage is identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub crop: Option<CropType>,
    pub sales: Option<(u32, u32)>,
    pub dates: Option<(NaiveDate, NaiveDate)>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.crop.is_some() || self.sales.is_some() || self.dates.is_some()
    }

    /// Discard every predicate
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Active predicates in pipeline order: category, sales, date
    ///
    /// Range selections are clamped to `bounds`. Without bounds (empty base
    /// table) ranges are passed through unchanged; they have nothing to match.
    pub fn predicates(&self, bounds: Option<&DataBounds>) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(crop) = self.crop {
            predicates.push(Predicate::Crop(crop));
        }

        if let Some(selected) = self.sales {
            let (min, max) = match bounds {
                Some(b) => clamp_range(selected, b.sales),
                None => selected,
            };
            predicates.push(Predicate::Sales { min, max });
        }

        if let Some(selected) = self.dates {
            let (start, end) = match bounds {
                Some(b) => clamp_range(selected, b.dates),
                None => selected,
            };
            predicates.push(Predicate::Dates { start, end });
        }

        predicates
    }

    /// Derive a view from the base table
    pub fn apply<'a>(&self, base: &'a [Record]) -> Vec<&'a Record> {
        let bounds = DataBounds::of(base);
        let mut view: Vec<&Record> = base.iter().collect();

        for predicate in self.predicates(bounds.as_ref()) {
            view.retain(|record| predicate.matches(record));
        }

        view
    }

    /// One-line description for status displays
    pub fn summary(&self) -> String {
        if !self.is_active() {
            return "No filters".to_string();
        }

        let mut parts = Vec::new();
        if let Some(crop) = self.crop {
            parts.push(format!("crop={}", crop));
        }
        if let Some((min, max)) = self.sales {
            parts.push(format!("sales={}..={}", min, max));
        }
        if let Some((start, end)) = self.dates {
            parts.push(format!("dates={}..={}", start, end));
        }
        parts.join(", ")
    }
}
