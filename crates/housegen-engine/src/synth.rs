//! Record synthesis.
//!
//! [`Generator`] walks the coverage index forward from the store's current
//! size. Categorical axes come from [`schedule`](crate::schedule); everything
//! else is drawn from a single `ChaCha8` stream seeded from configuration, in
//! the same order for every record, so a run is reproducible from the seed
//! and the store state alone.

use std::collections::HashSet;
use std::f64::consts::TAU;

use chrono::Days;
use housegen_config::HousegenConfig;
use housegen_core::enums::{
    CoordinateSystem, ListingPlatform, PropertyType, RentalMode, UtilitiesType,
};
use housegen_core::geo::{commute_minutes, haversine_km};
use housegen_core::listing::PRICE_UNIT;
use housegen_core::{GeoPoint, HouseId, LandmarkSeed, ListingRecord};
use housegen_landmarks::SeedIndex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::names::CommunityNamer;
use crate::pricing::{PriceInput, monthly_rent};
use crate::schedule::{self, CoverageSlot, Layout};
use crate::tags::{TagInput, derive_tags};

pub const TOTAL_FLOOR_CHOICES: [u32; 8] = [4, 5, 6, 11, 18, 22, 28, 32];

/// Only buildings at least this tall may have an elevator.
pub const ELEVATOR_MIN_FLOORS: u32 = 6;

/// Three residential entries to one apartment.
const PROPERTY_TYPE_CHOICES: [PropertyType; 4] = [
    PropertyType::Residential,
    PropertyType::Residential,
    PropertyType::Residential,
    PropertyType::Apartment,
];

const MAX_STREET_NUMBER: u32 = 99;

const JITTER_MIN_RADIUS_KM: f64 = 0.1;
const KM_PER_DEGREE_LATITUDE: f64 = 111.0;
// Near 40°N.
const KM_PER_DEGREE_LONGITUDE: f64 = 85.0;

/// What the generator needs to know about the store before a run.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// Records already persisted across all slots.
    pub existing: u64,
    /// Community names already taken.
    pub used_communities: HashSet<String>,
}

pub struct Generator<'a> {
    seeds: &'a SeedIndex,
    config: &'a HousegenConfig,
    rng: ChaCha8Rng,
    namer: CommunityNamer,
    next_id: HouseId,
    coverage_index: u64,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(seeds: &'a SeedIndex, config: &'a HousegenConfig, snapshot: StoreSnapshot) -> Self {
        tracing::debug!(
            seed = config.generation.seed,
            existing = snapshot.existing,
            used_communities = snapshot.used_communities.len(),
            "generator initialized"
        );
        Self {
            seeds,
            config,
            rng: ChaCha8Rng::seed_from_u64(config.generation.seed),
            namer: CommunityNamer::new(
                snapshot.used_communities,
                config.generation.community_name_attempts,
            ),
            next_id: HouseId::after(snapshot.existing),
            coverage_index: snapshot.existing,
        }
    }

    /// Coverage index of the next record.
    #[must_use]
    pub const fn coverage_index(&self) -> u64 {
        self.coverage_index
    }

    /// Id the next record will receive.
    #[must_use]
    pub const fn next_id(&self) -> HouseId {
        self.next_id
    }

    /// Generate `count` consecutive records.
    pub fn generate(&mut self, count: usize) -> Vec<ListingRecord> {
        self.by_ref().take(count).collect()
    }

    /// Synthesize the record at the current coverage index and advance.
    pub fn next_listing(&mut self) -> ListingRecord {
        let index = self.coverage_index;
        let slot = CoverageSlot::at(index);
        let (seeds, config) = (self.seeds, self.config);
        let seed = seeds.seed_for(index);
        let generation = &config.generation;

        let point = self.jitter(seed.point);
        let area_sqm = self.draw_area(slot.layout);
        let distance_m = self
            .rng
            .gen_range(slot.distance_band.min..=slot.distance_band.max);

        let total_floors = TOTAL_FLOOR_CHOICES[self.rng.gen_range(0..TOTAL_FLOOR_CHOICES.len())];
        let floor = schedule::floor_label(index, total_floors);
        let elevator =
            total_floors >= ELEVATOR_MIN_FLOORS && self.rng.gen_bool(generation.elevator_probability);

        let variance = config.pricing.variance;
        let deviation = self.rng.gen_range(-variance..=variance);
        let price = monthly_rent(
            &PriceInput {
                rental_mode: slot.rental_mode,
                district: &seed.district,
                area_sqm,
                decoration: slot.decoration,
                distance_m,
                elevator,
                floor,
            },
            &config.pricing,
            deviation,
        );

        let platform = ListingPlatform::ALL[self.rng.gen_range(0..ListingPlatform::ALL.len())];
        let offset = self.rng.gen_range(0..=generation.available_window_days);
        let available_from = generation
            .available_from
            .checked_add_days(Days::new(u64::from(offset)))
            .unwrap_or(generation.available_from);

        let commute_to_xierqi = commute_minutes(haversine_km(point, generation.reference_point()));

        let community = self.namer.mint(&mut self.rng, &seed.district);
        let street_number = self.rng.gen_range(1..=MAX_STREET_NUMBER);
        let address = format!("{}路{street_number}号", street_label(seed));

        let property_type =
            PROPERTY_TYPE_CHOICES[self.rng.gen_range(0..PROPERTY_TYPE_CHOICES.len())];
        let utilities_type = match property_type {
            PropertyType::Residential => UtilitiesType::Civil,
            PropertyType::Apartment => {
                if self
                    .rng
                    .gen_bool(generation.commercial_utilities_probability)
                {
                    UtilitiesType::Commercial
                } else {
                    UtilitiesType::Civil
                }
            }
        };

        let tags = derive_tags(&TagInput {
            rental_mode: slot.rental_mode,
            area_sqm,
            decoration: slot.decoration,
            distance_m,
            line_count: seed.line_count(),
            orientation: slot.orientation,
            elevator,
            floor,
            bedrooms: slot.layout.bedrooms,
            bathrooms: slot.layout.bathrooms,
            district: &seed.district,
            area_name: &seed.area,
            property_type,
            price,
        });

        let point = point.rounded();
        let record = ListingRecord {
            house_id: self.next_id,
            community,
            district: seed.district.clone(),
            area: seed.area.clone(),
            address,
            bedrooms: slot.layout.bedrooms,
            livingrooms: slot.layout.livingrooms,
            bathrooms: slot.layout.bathrooms,
            area_sqm,
            floor,
            total_floors,
            orientation: slot.orientation,
            decoration: slot.decoration,
            price,
            price_unit: PRICE_UNIT.to_string(),
            rental_type: slot.rental_mode,
            property_type,
            utilities_type,
            elevator,
            subway: seed.line.clone(),
            subway_distance: distance_m,
            subway_station: seed.station.clone(),
            commute_to_xierqi,
            available_from,
            listing_platform: platform,
            listing_url: platform.url().to_string(),
            tags,
            hidden_noise_level: slot.noise_level,
            status: slot.status,
            longitude: point.longitude,
            latitude: point.latitude,
            coordinate_system: CoordinateSystem::Wgs84,
        };

        tracing::trace!(house_id = %record.house_id, index, "listing synthesized");
        self.coverage_index += 1;
        self.next_id = self.next_id.next();
        record
    }

    /// Random point within the jitter ring around `center`.
    fn jitter(&mut self, center: GeoPoint) -> GeoPoint {
        let angle = self.rng.gen_range(0.0..TAU);
        let radius = self
            .rng
            .gen_range(JITTER_MIN_RADIUS_KM..=self.config.generation.jitter_radius_km);
        let dlat = radius / KM_PER_DEGREE_LATITUDE * angle.cos() * self.rng.gen_range(0.5..=1.5);
        let dlon = radius / KM_PER_DEGREE_LONGITUDE * angle.sin() * self.rng.gen_range(0.5..=1.5);
        GeoPoint::new(center.longitude + dlon, center.latitude + dlat)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_area(&mut self, layout: Layout) -> u32 {
        let area = self
            .rng
            .gen_range(f64::from(layout.min_area)..=f64::from(layout.max_area));
        area.round() as u32
    }
}

impl Iterator for Generator<'_> {
    type Item = ListingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_listing())
    }
}

fn street_label(seed: &LandmarkSeed) -> &str {
    if seed.area.is_empty() {
        &seed.district
    } else {
        &seed.area
    }
}

/// Whether a record's rental mode can be read off its price under `config`.
#[must_use]
pub fn price_implies_mode(config: &HousegenConfig, price: u32) -> Option<RentalMode> {
    let pricing = &config.pricing;
    if (pricing.shared_room_floor..=pricing.shared_room_ceiling).contains(&price) {
        Some(RentalMode::SharedRoom)
    } else if (pricing.whole_unit_floor..=pricing.whole_unit_ceiling).contains(&price) {
        Some(RentalMode::WholeUnit)
    } else {
        None
    }
}
