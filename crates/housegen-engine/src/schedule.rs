//! Coverage rotation over the categorical axes of a listing.
//!
//! Every axis is a pure function of the coverage index, which is the number
//! of records already in the store plus the offset within the current run.
//! Splitting a batch across several runs therefore yields the same
//! assignments as generating it in one go.

use housegen_core::enums::{Decoration, FloorTier, ListingStatus, NoiseLevel, Orientation, RentalMode};
use housegen_core::FloorLabel;

/// `values[index mod values.len()]`.
///
/// # Panics
///
/// Panics if `values` is empty. Every table in this module is non-empty.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rotate<T: Copy>(index: u64, values: &[T]) -> T {
    values[(index % values.len() as u64) as usize]
}

pub const ORIENTATIONS: [Orientation; 6] = [
    Orientation::South,
    Orientation::North,
    Orientation::East,
    Orientation::West,
    Orientation::NorthSouth,
    Orientation::EastWest,
];

pub const FLOOR_TIERS: [FloorTier; 3] = [FloorTier::Low, FloorTier::Middle, FloorTier::High];

pub const NOISE_LEVELS: [NoiseLevel; 4] = [
    NoiseLevel::Quiet,
    NoiseLevel::Moderate,
    NoiseLevel::Noisy,
    NoiseLevel::StreetFacing,
];

/// 8 basic, 11 refined, 3 luxury, 2 bare, 1 unfurnished.
pub const DECORATION_CYCLE: [Decoration; 25] = {
    use Decoration::{Bare, Basic, Luxury, Refined, Unfurnished};
    [
        Basic, Basic, Basic, Basic, Basic, Basic, Basic, Basic, //
        Refined, Refined, Refined, Refined, Refined, Refined, Refined, Refined, Refined, Refined,
        Refined, //
        Luxury, Luxury, Luxury, //
        Bare, Bare, //
        Unfurnished,
    ]
};

/// Buildings at or below this height are candidates for a literal storey label.
pub const LOW_RISE_MAX_FLOORS: u32 = 6;

/// Distance to the nearest station, in meters, with its price multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceBand {
    pub min: u32,
    pub max: u32,
    pub multiplier: f64,
}

pub const DISTANCE_BANDS: [DistanceBand; 5] = [
    DistanceBand { min: 200, max: 500, multiplier: 1.08 },
    DistanceBand { min: 500, max: 1000, multiplier: 1.0 },
    DistanceBand { min: 1000, max: 2000, multiplier: 0.92 },
    DistanceBand { min: 2000, max: 3500, multiplier: 0.85 },
    DistanceBand { min: 3500, max: 5500, multiplier: 0.78 },
];

/// Room counts and the area range drawn from for a layout.
///
/// For shared rooms the area range is that of the single room let, not the
/// suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub bedrooms: u8,
    pub livingrooms: u8,
    pub bathrooms: u8,
    pub min_area: u32,
    pub max_area: u32,
}

const fn whole(bedrooms: u8, livingrooms: u8, bathrooms: u8, min_area: u32, max_area: u32) -> Layout {
    Layout {
        bedrooms,
        livingrooms,
        bathrooms,
        min_area,
        max_area,
    }
}

pub const SHARED_ROOM_MIN_AREA: u32 = 12;
pub const SHARED_ROOM_MAX_AREA: u32 = 30;

const fn suite(bedrooms: u8, livingrooms: u8, bathrooms: u8) -> Layout {
    whole(
        bedrooms,
        livingrooms,
        bathrooms,
        SHARED_ROOM_MIN_AREA,
        SHARED_ROOM_MAX_AREA,
    )
}

pub const WHOLE_UNIT_LAYOUTS: [Layout; 18] = [
    whole(1, 1, 1, 22, 52),
    whole(2, 0, 1, 48, 58),
    whole(2, 1, 1, 55, 75),
    whole(2, 1, 2, 70, 85),
    whole(2, 2, 1, 75, 88),
    whole(2, 2, 2, 82, 92),
    whole(3, 0, 1, 78, 90),
    whole(3, 0, 2, 88, 98),
    whole(3, 1, 1, 85, 105),
    whole(3, 1, 2, 95, 115),
    whole(3, 2, 1, 100, 118),
    whole(3, 2, 2, 108, 125),
    whole(4, 0, 1, 105, 118),
    whole(4, 0, 2, 112, 122),
    whole(4, 1, 1, 115, 128),
    whole(4, 1, 2, 120, 135),
    whole(4, 2, 1, 125, 138),
    whole(4, 2, 2, 130, 145),
];

pub const SHARED_SUITE_LAYOUTS: [Layout; 6] = [
    suite(2, 1, 1),
    suite(2, 1, 2),
    suite(3, 1, 1),
    suite(3, 1, 2),
    suite(4, 1, 1),
    suite(4, 1, 2),
];

/// Even indices let a shared room, odd ones a whole unit.
#[must_use]
pub const fn rental_mode(index: u64) -> RentalMode {
    if index % 2 == 0 {
        RentalMode::SharedRoom
    } else {
        RentalMode::WholeUnit
    }
}

#[must_use]
pub fn orientation(index: u64) -> Orientation {
    rotate(index, &ORIENTATIONS)
}

#[must_use]
pub fn noise_level(index: u64) -> NoiseLevel {
    rotate(index, &NOISE_LEVELS)
}

#[must_use]
pub fn decoration(index: u64) -> Decoration {
    rotate(index, &DECORATION_CYCLE)
}

#[must_use]
pub fn distance_band(index: u64) -> DistanceBand {
    rotate(index, &DISTANCE_BANDS)
}

#[must_use]
pub fn floor_tier(index: u64) -> FloorTier {
    rotate(index, &FLOOR_TIERS)
}

/// Floor label for a building of `total_floors`.
///
/// Low-rise buildings in every fourth block of three indices are labeled
/// with their literal storey count instead of a tier.
#[must_use]
pub fn floor_label(index: u64, total_floors: u32) -> FloorLabel {
    if total_floors <= LOW_RISE_MAX_FLOORS && (index / 3) % 4 == 0 {
        FloorLabel::Storeys(total_floors)
    } else {
        FloorLabel::Tier(floor_tier(index))
    }
}

/// Layout from the table of the rental mode at `index`.
#[must_use]
pub fn layout(index: u64) -> Layout {
    match rental_mode(index) {
        RentalMode::SharedRoom => rotate(index, &SHARED_SUITE_LAYOUTS),
        RentalMode::WholeUnit => rotate(index, &WHOLE_UNIT_LAYOUTS),
    }
}

/// Roughly 5% rented and 5% offline.
#[must_use]
pub const fn status(index: u64) -> ListingStatus {
    match index % 20 {
        0 => ListingStatus::Rented,
        1 => ListingStatus::Offline,
        _ => ListingStatus::Available,
    }
}

/// Every index-driven assignment for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageSlot {
    pub index: u64,
    pub rental_mode: RentalMode,
    pub orientation: Orientation,
    pub noise_level: NoiseLevel,
    pub layout: Layout,
    pub distance_band: DistanceBand,
    pub floor_tier: FloorTier,
    pub decoration: Decoration,
    pub status: ListingStatus,
}

impl CoverageSlot {
    #[must_use]
    pub fn at(index: u64) -> Self {
        Self {
            index,
            rental_mode: rental_mode(index),
            orientation: orientation(index),
            noise_level: noise_level(index),
            layout: layout(index),
            distance_band: distance_band(index),
            floor_tier: floor_tier(index),
            decoration: decoration(index),
            status: status(index),
        }
    }
}
