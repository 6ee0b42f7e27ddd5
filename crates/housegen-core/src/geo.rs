//! Great-circle distance and the derived commute estimate.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Blended metro + walking pace.
const COMMUTE_MINUTES_PER_KM: f64 = 2.2;
const COMMUTE_MIN_MINUTES: u32 = 8;
const COMMUTE_MAX_MINUTES: u32 = 95;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Both coordinates rounded to four decimal places (~10 m).
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            longitude: round4(self.longitude),
            latitude: round4(self.latitude),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Great-circle distance between two points in kilometers.
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dphi = (b.latitude - a.latitude).to_radians();
    let dlambda = (b.longitude - a.longitude).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Estimated door-to-door commute for a straight-line distance.
///
/// Clamped to `[8, 95]` minutes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn commute_minutes(km: f64) -> u32 {
    let raw = (km.max(0.0) * COMMUTE_MINUTES_PER_KM).round();
    let minutes = if raw >= f64::from(COMMUTE_MAX_MINUTES) {
        COMMUTE_MAX_MINUTES
    } else {
        raw as u32
    };
    minutes.clamp(COMMUTE_MIN_MINUTES, COMMUTE_MAX_MINUTES)
}
