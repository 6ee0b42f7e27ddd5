//! Monthly rent model.
//!
//! Price is a product of multipliers over the district base rate, nudged by a
//! bounded random deviation, rounded down to the configured granularity and
//! clamped into the rental mode's bounds. Whole units and shared rooms use
//! disjoint bounds, so the mode can always be recovered from the price.

use housegen_config::PricingConfig;
use housegen_core::enums::{Decoration, FloorTier, RentalMode};
use housegen_core::FloorLabel;

use crate::schedule::DISTANCE_BANDS;

/// Base rate, in yuan per square meter per month, for districts not listed.
pub const DEFAULT_BASE_RATE: f64 = 45.0;

pub const ELEVATOR_MULTIPLIER: f64 = 1.03;

/// Applied to distances past the farthest band.
const FAR_TRANSIT_MULTIPLIER: f64 = 0.78;

/// Share of the base-rate estimate used as the "fair" reference price.
pub const REFERENCE_PRICE_FACTOR: f64 = 0.92;

#[must_use]
pub fn district_base_rate(district: &str) -> f64 {
    match district {
        "东城" => 128.0,
        "西城" => 142.0,
        "朝阳" => 118.0,
        "海淀" => 122.0,
        "丰台" => 72.0,
        "石景山" => 65.0,
        "通州" => 52.0,
        "大兴" => 48.0,
        "昌平" => 46.0,
        "顺义" => 44.0,
        "房山" => 40.0,
        "门头沟" => 38.0,
        _ => DEFAULT_BASE_RATE,
    }
}

#[must_use]
pub const fn decoration_multiplier(decoration: Decoration) -> f64 {
    match decoration {
        Decoration::Basic => 1.0,
        Decoration::Refined => 1.28,
        Decoration::Luxury => 1.55,
        Decoration::Bare => 0.78,
        Decoration::Unfurnished => 0.88,
    }
}

/// Multiplier of the half-open band containing `distance_m`.
#[must_use]
pub fn transit_multiplier(distance_m: u32) -> f64 {
    DISTANCE_BANDS
        .iter()
        .find(|band| (band.min..band.max).contains(&distance_m))
        .map_or_else(
            || {
                if distance_m >= DISTANCE_BANDS[DISTANCE_BANDS.len() - 1].max {
                    FAR_TRANSIT_MULTIPLIER
                } else {
                    1.0
                }
            },
            |band| band.multiplier,
        )
}

/// Literal storey labels carry no tier and price neutrally.
#[must_use]
pub const fn floor_multiplier(floor: FloorLabel) -> f64 {
    match floor {
        FloorLabel::Tier(FloorTier::High) => 1.02,
        FloorLabel::Tier(FloorTier::Middle) | FloorLabel::Storeys(_) => 1.0,
        FloorLabel::Tier(FloorTier::Low) => 0.98,
    }
}

/// Everything the price depends on except the random deviation.
#[derive(Debug, Clone, Copy)]
pub struct PriceInput<'a> {
    pub rental_mode: RentalMode,
    pub district: &'a str,
    pub area_sqm: u32,
    pub decoration: Decoration,
    pub distance_m: u32,
    pub elevator: bool,
    pub floor: FloorLabel,
}

/// `(floor, ceiling)` for a rental mode.
#[must_use]
pub const fn bounds(config: &PricingConfig, mode: RentalMode) -> (u32, u32) {
    match mode {
        RentalMode::WholeUnit => (config.whole_unit_floor, config.whole_unit_ceiling),
        RentalMode::SharedRoom => (config.shared_room_floor, config.shared_room_ceiling),
    }
}

/// Monthly rent for `input`.
///
/// `deviation` is the relative random nudge; it is clamped to
/// `±config.variance`. Shared rooms price on the base rate times the
/// configured premium and ignore the floor.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn monthly_rent(input: &PriceInput<'_>, config: &PricingConfig, deviation: f64) -> u32 {
    let deviation = deviation.clamp(-config.variance, config.variance);
    let (rate, floor) = match input.rental_mode {
        RentalMode::WholeUnit => (
            district_base_rate(input.district),
            floor_multiplier(input.floor),
        ),
        RentalMode::SharedRoom => (
            district_base_rate(input.district) * config.shared_room_rate_premium,
            1.0,
        ),
    };
    let elevator = if input.elevator {
        ELEVATOR_MULTIPLIER
    } else {
        1.0
    };

    let raw = rate
        * f64::from(input.area_sqm)
        * decoration_multiplier(input.decoration)
        * transit_multiplier(input.distance_m)
        * elevator
        * floor
        * (1.0 + deviation);

    // Float-to-int casts saturate, so NaN and negatives land on 0.
    let truncated = raw as u32;
    let granular = truncated - truncated % config.granularity;
    let (low, high) = bounds(config, input.rental_mode);
    granular.clamp(low, high)
}

/// Reference price used by the value tags.
#[must_use]
pub fn reference_price(district: &str, area_sqm: u32) -> f64 {
    district_base_rate(district) * f64::from(area_sqm) * REFERENCE_PRICE_FACTOR
}
