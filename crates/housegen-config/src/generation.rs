//! Record synthesis parameters.

use chrono::NaiveDate;
use housegen_core::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_seed() -> u64 {
    42
}

const fn default_jitter_radius_km() -> f64 {
    0.8
}

// Xierqi station.
const fn default_reference_longitude() -> f64 {
    116.3289
}

const fn default_reference_latitude() -> f64 {
    40.0567
}

fn default_available_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 15).unwrap_or_default()
}

const fn default_available_window_days() -> u32 {
    45
}

const fn default_elevator_probability() -> f64 {
    0.82
}

const fn default_commercial_utilities_probability() -> f64 {
    0.6
}

const fn default_community_name_attempts() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Seed for the single random stream of a run.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Maximum distance a listing is placed from its seed.
    #[serde(default = "default_jitter_radius_km")]
    pub jitter_radius_km: f64,

    /// Commute reference point.
    #[serde(default = "default_reference_longitude")]
    pub reference_longitude: f64,

    #[serde(default = "default_reference_latitude")]
    pub reference_latitude: f64,

    /// Earliest availability date.
    #[serde(default = "default_available_from")]
    pub available_from: NaiveDate,

    /// Availability is `available_from` plus up to this many days.
    #[serde(default = "default_available_window_days")]
    pub available_window_days: u32,

    /// Chance that a building of six or more storeys has an elevator.
    #[serde(default = "default_elevator_probability")]
    pub elevator_probability: f64,

    /// Chance that an apartment bills utilities at commercial rates.
    #[serde(default = "default_commercial_utilities_probability")]
    pub commercial_utilities_probability: f64,

    /// Random community-name draws before the deterministic fallback.
    #[serde(default = "default_community_name_attempts")]
    pub community_name_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            jitter_radius_km: default_jitter_radius_km(),
            reference_longitude: default_reference_longitude(),
            reference_latitude: default_reference_latitude(),
            available_from: default_available_from(),
            available_window_days: default_available_window_days(),
            elevator_probability: default_elevator_probability(),
            commercial_utilities_probability: default_commercial_utilities_probability(),
            community_name_attempts: default_community_name_attempts(),
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub const fn reference_point(&self) -> GeoPoint {
        GeoPoint::new(self.reference_longitude, self.reference_latitude)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        // The inner jitter ring starts at 0.1 km.
        if !(self.jitter_radius_km > 0.1 && self.jitter_radius_km.is_finite()) {
            return Err(ConfigError::invalid(
                "generation.jitter_radius_km",
                "must be a finite value above 0.1",
            ));
        }
        if !(-180.0..=180.0).contains(&self.reference_longitude)
            || !(-90.0..=90.0).contains(&self.reference_latitude)
        {
            return Err(ConfigError::invalid(
                "generation.reference_longitude/latitude",
                "must be valid WGS84 coordinates",
            ));
        }
        for (field, p) in [
            ("generation.elevator_probability", self.elevator_probability),
            (
                "generation.commercial_utilities_probability",
                self.commercial_utilities_probability,
            ),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::invalid(field, "must be within [0, 1]"));
            }
        }
        Ok(())
    }
}
