//! Synthetic dataset generation
//!
//! The whole table is drawn from a single seeded ChaCha stream, one column at
//! a time, so a given seed always produces the same records.

use super::record::{CropType, Record, Region};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_SEED: u64 = 150;
pub const DEFAULT_PERIOD_DAYS: usize = 100;

pub fn default_origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// The base table for one run. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub seed: u64,
    pub origin: NaiveDate,
    records: Vec<Record>,
}

impl Dataset {
    /// Reference table: seed 150, 100 days starting 2024-01-01
    pub fn default_seeded() -> Self {
        generate(DEFAULT_SEED, default_origin(), DEFAULT_PERIOD_DAYS)
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<Record>) -> Self {
        let origin = records.first().map(|r| r.date).unwrap_or_else(default_origin);
        Self {
            seed: DEFAULT_SEED,
            origin,
            records,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Crop types present in the table, in order of first appearance
    pub fn crops_in_order(&self) -> Vec<CropType> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.crop) {
                seen.push(record.crop);
            }
        }
        seen
    }
}

fn int_column(rng: &mut ChaCha8Rng, len: usize, low: u32, high: u32) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

fn pick_column<T: Copy>(rng: &mut ChaCha8Rng, len: usize, choices: &[T]) -> Vec<T> {
    (0..len)
        .map(|_| choices[rng.gen_range(0..choices.len())])
        .collect()
}

/// Generate `period_days` daily records starting at `origin`
///
/// The table stops early if the calendar runs out before `period_days`.
pub fn generate(seed: u64, origin: NaiveDate, period_days: usize) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let sales = int_column(&mut rng, period_days, 100, 500);
    let production = int_column(&mut rng, period_days, 0, 5000);
    let crops = pick_column(&mut rng, period_days, &CropType::all());
    let regions = pick_column(&mut rng, period_days, &Region::all());
    let hectares = int_column(&mut rng, period_days, 0, 5000);
    let pests = int_column(&mut rng, period_days, 0, 200);
    let prices = int_column(&mut rng, period_days, 0, 200);

    let records: Vec<Record> = origin
        .iter_days()
        .take(period_days)
        .enumerate()
        .map(|(i, date)| Record {
            date,
            sales_amount: sales[i],
            production_tons: production[i],
            crop: crops[i],
            region: regions[i],
            planted_hectares: hectares[i],
            pest_reports: pests[i],
            unit_price: prices[i],
        })
        .collect();

    log::info!(
        "Generated {} records (seed {}, origin {})",
        records.len(),
        seed,
        origin
    );

    Dataset {
        seed,
        origin,
        records,
    }
}
