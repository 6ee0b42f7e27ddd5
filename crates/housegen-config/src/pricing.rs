//! Pricing model bounds and knobs.
//!
//! Whole-unit and shared-room bounds must stay disjoint so that rental mode
//! can be inferred from price alone.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_variance() -> f64 {
    0.06
}

const fn default_granularity() -> u32 {
    50
}

const fn default_whole_unit_floor() -> u32 {
    3600
}

const fn default_whole_unit_ceiling() -> u32 {
    28_000
}

const fn default_shared_room_floor() -> u32 {
    1200
}

const fn default_shared_room_ceiling() -> u32 {
    3500
}

const fn default_shared_room_rate_premium() -> f64 {
    1.35
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Maximum relative deviation applied to every computed price.
    #[serde(default = "default_variance")]
    pub variance: f64,

    /// Prices are rounded down to a multiple of this.
    #[serde(default = "default_granularity")]
    pub granularity: u32,

    #[serde(default = "default_whole_unit_floor")]
    pub whole_unit_floor: u32,

    #[serde(default = "default_whole_unit_ceiling")]
    pub whole_unit_ceiling: u32,

    #[serde(default = "default_shared_room_floor")]
    pub shared_room_floor: u32,

    #[serde(default = "default_shared_room_ceiling")]
    pub shared_room_ceiling: u32,

    /// Per-area rate multiplier for single rooms over the district base rate.
    #[serde(default = "default_shared_room_rate_premium")]
    pub shared_room_rate_premium: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            variance: default_variance(),
            granularity: default_granularity(),
            whole_unit_floor: default_whole_unit_floor(),
            whole_unit_ceiling: default_whole_unit_ceiling(),
            shared_room_floor: default_shared_room_floor(),
            shared_room_ceiling: default_shared_room_ceiling(),
            shared_room_rate_premium: default_shared_room_rate_premium(),
        }
    }
}

impl PricingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.variance) {
            return Err(ConfigError::invalid("pricing.variance", "must be within [0, 1)"));
        }
        if self.granularity == 0 {
            return Err(ConfigError::invalid("pricing.granularity", "must be positive"));
        }
        if !(self.shared_room_rate_premium > 0.0 && self.shared_room_rate_premium.is_finite()) {
            return Err(ConfigError::invalid(
                "pricing.shared_room_rate_premium",
                "must be a positive finite value",
            ));
        }

        for (field, bound) in [
            ("pricing.whole_unit_floor", self.whole_unit_floor),
            ("pricing.whole_unit_ceiling", self.whole_unit_ceiling),
            ("pricing.shared_room_floor", self.shared_room_floor),
            ("pricing.shared_room_ceiling", self.shared_room_ceiling),
        ] {
            if bound % self.granularity != 0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("{bound} is not a multiple of {}", self.granularity),
                ));
            }
        }

        if self.shared_room_floor == 0 || self.shared_room_floor > self.shared_room_ceiling {
            return Err(ConfigError::invalid(
                "pricing.shared_room_floor",
                "must be positive and not above shared_room_ceiling",
            ));
        }
        if self.whole_unit_floor > self.whole_unit_ceiling {
            return Err(ConfigError::invalid(
                "pricing.whole_unit_floor",
                "must not be above whole_unit_ceiling",
            ));
        }
        if self.whole_unit_floor <= self.shared_room_ceiling {
            return Err(ConfigError::invalid(
                "pricing.whole_unit_floor",
                format!(
                    "{} overlaps the shared-room range (ceiling {})",
                    self.whole_unit_floor, self.shared_room_ceiling
                ),
            ));
        }
        Ok(())
    }
}
