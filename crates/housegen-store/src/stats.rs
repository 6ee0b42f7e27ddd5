use housegen_core::ListingRecord;
use serde::Serialize;

/// Summary of one slot's contents, reported after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStats {
    pub file: String,
    pub count: usize,
    pub price_min: u32,
    pub price_max: u32,
    pub distance_min: u32,
    pub distance_max: u32,
}

impl SlotStats {
    /// `None` for an empty slot.
    #[must_use]
    pub fn from_records(file: impl Into<String>, records: &[ListingRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut stats = Self {
            file: file.into(),
            count: records.len(),
            price_min: first.price,
            price_max: first.price,
            distance_min: first.subway_distance,
            distance_max: first.subway_distance,
        };
        for record in &records[1..] {
            stats.price_min = stats.price_min.min(record.price);
            stats.price_max = stats.price_max.max(record.price);
            stats.distance_min = stats.distance_min.min(record.subway_distance);
            stats.distance_max = stats.distance_max.max(record.subway_distance);
        }
        Some(stats)
    }
}
