//! The persisted listing record.
//!
//! Field names and order are the compatibility contract with the mock backend
//! and the evaluation tooling; rename nothing here without migrating them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{
    CoordinateSystem, Decoration, ListingPlatform, ListingStatus, NoiseLevel, Orientation,
    PropertyType, RentalMode, Tag, UtilitiesType,
};
use crate::floor::FloorLabel;
use crate::ids::HouseId;

/// Currency unit attached to every price.
pub const PRICE_UNIT: &str = "元/月";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub house_id: HouseId,
    pub community: String,
    pub district: String,
    pub area: String,
    pub address: String,
    pub bedrooms: u8,
    pub livingrooms: u8,
    pub bathrooms: u8,
    /// Whole-unit floor area, or the single room's area for shared rooms.
    pub area_sqm: u32,
    pub floor: FloorLabel,
    pub total_floors: u32,
    pub orientation: Orientation,
    pub decoration: Decoration,
    pub price: u32,
    pub price_unit: String,
    pub rental_type: RentalMode,
    pub property_type: PropertyType,
    pub utilities_type: UtilitiesType,
    pub elevator: bool,
    pub subway: String,
    /// Meters to the nearest station.
    pub subway_distance: u32,
    pub subway_station: String,
    /// Minutes to the fixed commute reference point.
    pub commute_to_xierqi: u32,
    pub available_from: NaiveDate,
    pub listing_platform: ListingPlatform,
    pub listing_url: String,
    pub tags: Vec<Tag>,
    pub hidden_noise_level: NoiseLevel,
    pub status: ListingStatus,
    pub longitude: f64,
    pub latitude: f64,
    pub coordinate_system: CoordinateSystem,
}
