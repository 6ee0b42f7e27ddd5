//! # housegen-core
//!
//! Core types shared across all housegen crates:
//! - `ListingRecord`, the persisted listing shape (its field names are the
//!   wire contract read by the mock backend)
//! - Closed enums for every enumerated listing field, serialized with the
//!   exact strings the backend expects
//! - `FloorLabel` (named tier or literal storey count)
//! - `HouseId` formatting (`HF_<n>`)
//! - `LandmarkSeed`, the geographic anchor a listing is placed around
//! - Great-circle distance and commute estimates
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod floor;
pub mod geo;
pub mod ids;
pub mod listing;
pub mod seed;

pub use errors::CoreError;
pub use floor::FloorLabel;
pub use geo::GeoPoint;
pub use ids::HouseId;
pub use listing::ListingRecord;
pub use seed::LandmarkSeed;
