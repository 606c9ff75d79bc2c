//! Record - one synthetic daily agricultural observation

use chrono::NaiveDate;
use std::fmt;

/// Crop produced on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CropType {
    Corn,
    Bean,
    Squash,
    Celery,
}

impl CropType {
    pub fn all() -> [CropType; 4] {
        [CropType::Corn, CropType::Bean, CropType::Squash, CropType::Celery]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CropType::Corn => "Corn",
            CropType::Bean => "Bean",
            CropType::Squash => "Squash",
            CropType::Celery => "Celery",
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Producing region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Antioquia,
    Huila,
    Cundinamarca,
    Boyaca,
}

impl Region {
    pub fn all() -> [Region; 4] {
        [
            Region::Antioquia,
            Region::Huila,
            Region::Cundinamarca,
            Region::Boyaca,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Antioquia => "Antioquia",
            Region::Huila => "Huila",
            Region::Cundinamarca => "Cundinamarca",
            Region::Boyaca => "Boyaca",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day of production and sales figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,
    pub sales_amount: u32,
    pub production_tons: u32,
    pub crop: CropType,
    pub region: Region,
    pub planted_hectares: u32,
    pub pest_reports: u32,
    pub unit_price: u32,
}

impl Record {
    /// Column headers in display order
    pub fn headers() -> Vec<String> {
        [
            "Date",
            "Sales",
            "Production (t)",
            "Crop",
            "Region",
            "Planted (ha)",
            "Pest reports",
            "Unit price",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    /// Cell values in the same order as `headers`
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.sales_amount.to_string(),
            self.production_tons.to_string(),
            self.crop.to_string(),
            self.region.to_string(),
            self.planted_hectares.to_string(),
            self.pest_reports.to_string(),
            self.unit_price.to_string(),
        ]
    }
}
