//! Stacked bar chart data: summed sales per region, stacked by crop

use super::record::{CropType, Record, Region};

/// One crop's contribution to a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub crop: CropType,
    pub sales: u64,
}

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub region: Region,
    /// Non-empty segments in `CropType` order
    pub segments: Vec<Segment>,
}

impl Bar {
    pub fn total(&self) -> u64 {
        self.segments.iter().map(|s| s.sales).sum()
    }
}

/// Chart model built from a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackedChart {
    /// Bars for the regions present in the view, in `Region` order
    pub bars: Vec<Bar>,
}

impl StackedChart {
    pub fn build(view: &[&Record]) -> Self {
        let bars = Region::all()
            .into_iter()
            .filter_map(|region| {
                let segments: Vec<Segment> = CropType::all()
                    .into_iter()
                    .filter_map(|crop| {
                        let matching: Vec<u64> = view
                            .iter()
                            .filter(|r| r.region == region && r.crop == crop)
                            .map(|r| u64::from(r.sales_amount))
                            .collect();
                        if matching.is_empty() {
                            None
                        } else {
                            Some(Segment {
                                crop,
                                sales: matching.iter().sum(),
                            })
                        }
                    })
                    .collect();

                if segments.is_empty() {
                    None
                } else {
                    Some(Bar { region, segments })
                }
            })
            .collect();

        StackedChart { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest bar total, used as the scale maximum
    pub fn max_total(&self) -> u64 {
        self.bars.iter().map(Bar::total).max().unwrap_or(0)
    }

    /// Crops that appear in at least one bar, for the legend
    pub fn crops(&self) -> Vec<CropType> {
        CropType::all()
            .into_iter()
            .filter(|crop| {
                self.bars
                    .iter()
                    .any(|b| b.segments.iter().any(|s| s.crop == *crop))
            })
            .collect()
    }
}

/// Split `width` cells across segments proportionally to their sales,
/// relative to `max_total`
///
/// Widths are computed from cumulative sums so rounding never makes a bar
/// longer than its share of `width`.
pub fn segment_widths(bar: &Bar, max_total: u64, width: u16) -> Vec<u16> {
    if max_total == 0 || width == 0 {
        return vec![0; bar.segments.len()];
    }

    let mut widths = Vec::with_capacity(bar.segments.len());
    let mut cumulative = 0u64;
    let mut drawn = 0u16;
    for segment in &bar.segments {
        cumulative += segment.sales;
        let end = (cumulative * u64::from(width) / max_total) as u16;
        widths.push(end.saturating_sub(drawn));
        drawn = drawn.max(end);
    }
    widths
}
