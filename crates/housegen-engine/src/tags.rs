//! Descriptive tags derived from a listing's own fields.
//!
//! Derivation is pure: the same input always yields the same ordered list,
//! and nothing here touches randomness or the store.

use housegen_core::enums::{Decoration, FloorTier, Orientation, PropertyType, RentalMode, Tag};
use housegen_core::{FloorLabel, ListingRecord};

use crate::pricing::reference_price;

const NEAR_SUBWAY_MAX_M: u32 = 800;
const SMALL_ROOM_MAX_SQM: u32 = 25;
const SPACIOUS_MIN_SQM: u32 = 100;
const COMPACT_MAX_SQM: u32 = 60;
const LARGE_TWO_BEDROOM_MIN_SQM: u32 = 70;
const LARGE_THREE_BEDROOM_MIN_SQM: u32 = 90;

const CORE_DISTRICTS: [&str; 4] = ["东城", "西城", "朝阳", "海淀"];
const SCHOOL_DISTRICTS: [&str; 2] = ["海淀", "西城"];
const UNIVERSITY_DISTRICT: &str = "海淀";
const RURAL_DISTRICTS: [&str; 2] = ["房山", "门头沟"];
const RURAL_MAX_SQM: u32 = 50;
const RURAL_HOUSE_MAX_PRICE: u32 = 2500;
const RURAL_SELF_BUILT_MAX_PRICE: u32 = 2000;

const CHEAP_REFERENCE_RATIO: f64 = 0.85;
const CHEAP_MAX_PRICE: u32 = 4500;
const GOOD_VALUE_REFERENCE_RATIO: f64 = 1.05;
const GOOD_VALUE_MAX_PRICE: u32 = 6500;

/// The fields tags are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagInput<'a> {
    pub rental_mode: RentalMode,
    pub area_sqm: u32,
    pub decoration: Decoration,
    pub distance_m: u32,
    /// Transit lines serving the nearest station.
    pub line_count: usize,
    pub orientation: Orientation,
    pub elevator: bool,
    pub floor: FloorLabel,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub district: &'a str,
    pub area_name: &'a str,
    pub property_type: PropertyType,
    pub price: u32,
}

impl<'a> TagInput<'a> {
    /// Tag input for a stored record. Records hold only the primary line,
    /// so the line count comes from the caller.
    #[must_use]
    pub fn from_record(record: &'a ListingRecord, line_count: usize) -> Self {
        Self {
            rental_mode: record.rental_type,
            area_sqm: record.area_sqm,
            decoration: record.decoration,
            distance_m: record.subway_distance,
            line_count,
            orientation: record.orientation,
            elevator: record.elevator,
            floor: record.floor,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            district: &record.district,
            area_name: &record.area,
            property_type: record.property_type,
            price: record.price,
        }
    }
}

/// Ordered tags for `input`.
#[must_use]
pub fn derive_tags(input: &TagInput<'_>) -> Vec<Tag> {
    let mut tags = Vec::new();
    let whole_unit = !input.rental_mode.is_shared();

    if input.rental_mode.is_shared() {
        tags.push(Tag::SharedRoom);
        if input.area_sqm < SMALL_ROOM_MAX_SQM {
            tags.push(Tag::SmallRoom);
        }
    }

    match input.decoration {
        Decoration::Refined => tags.push(Tag::Refined),
        Decoration::Luxury => tags.extend([Tag::Refined, Tag::Luxury]),
        Decoration::Bare => tags.push(Tag::Bare),
        Decoration::Unfurnished => tags.push(Tag::Unfurnished),
        Decoration::Basic => {}
    }

    if input.distance_m <= NEAR_SUBWAY_MAX_M {
        tags.push(Tag::NearSubway);
    }
    match input.line_count {
        0 | 1 => {}
        2 => tags.push(Tag::DualLine),
        _ => tags.push(Tag::MultiLine),
    }

    match input.orientation {
        Orientation::South => tags.extend([Tag::SouthFacing, Tag::GoodLight]),
        Orientation::NorthSouth => tags.extend([Tag::NorthSouthThrough, Tag::GoodLight]),
        _ => {}
    }

    if input.elevator {
        tags.push(Tag::Elevator);
    }
    if input.floor.tier() == Some(FloorTier::High) {
        tags.extend([Tag::HighFloor, Tag::HighRise]);
    }

    if input.area_sqm >= SPACIOUS_MIN_SQM {
        tags.push(Tag::Spacious);
    } else if input.area_sqm < COMPACT_MAX_SQM {
        tags.push(Tag::Compact);
    }
    if whole_unit {
        if input.bedrooms == 2 && input.area_sqm >= LARGE_TWO_BEDROOM_MIN_SQM {
            tags.push(Tag::LargeTwoBedroom);
        }
        if input.bedrooms == 3 && input.area_sqm >= LARGE_THREE_BEDROOM_MIN_SQM {
            tags.push(Tag::LargeThreeBedroom);
        }
    }

    if input.bathrooms >= 2 {
        tags.push(Tag::DualBath);
    }

    if CORE_DISTRICTS.contains(&input.district) {
        tags.push(Tag::CoreDistrict);
    }
    if SCHOOL_DISTRICTS.contains(&input.district) {
        tags.push(Tag::SchoolDistrict);
    }
    if input.district == UNIVERSITY_DISTRICT {
        tags.push(Tag::NearUniversity);
    }

    match input.area_name {
        "西二旗" => tags.push(Tag::Xierqi),
        "上地" => tags.push(Tag::Shangdi),
        _ => {}
    }
    if input.area_name.contains("朝阳路") {
        tags.push(Tag::ChaoyangRoad);
    }

    if input.property_type == PropertyType::Apartment {
        tags.push(Tag::CommercialResidential);
    }

    if whole_unit && input.area_sqm > 0 {
        let reference = reference_price(input.district, input.area_sqm);
        let price = f64::from(input.price);
        if price < reference * CHEAP_REFERENCE_RATIO && input.price < CHEAP_MAX_PRICE {
            tags.push(Tag::Cheap);
        } else if price < reference * GOOD_VALUE_REFERENCE_RATIO && input.price < GOOD_VALUE_MAX_PRICE {
            tags.push(Tag::GoodValue);
        }
    }

    if RURAL_DISTRICTS.contains(&input.district) && input.area_sqm < RURAL_MAX_SQM {
        if input.price < RURAL_HOUSE_MAX_PRICE {
            tags.push(Tag::RuralHouse);
        }
        if input.price < RURAL_SELF_BUILT_MAX_PRICE {
            tags.push(Tag::RuralSelfBuilt);
        }
    }

    tags
}
