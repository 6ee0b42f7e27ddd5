//! # housegen-engine
//!
//! Turns a [`SeedIndex`](housegen_landmarks::SeedIndex) and a snapshot of the
//! store into new listing records:
//!
//! - [`schedule`]: index-driven rotation over every categorical axis
//! - [`pricing`]: multiplicative monthly-rent model for both rental modes
//! - [`tags`]: pure derivation of descriptive labels from record fields
//! - [`names`]: unique community-name minting with a deterministic fallback
//! - [`synth`]: the [`Generator`] that draws every random value from one
//!   seeded stream in a fixed order

pub mod names;
pub mod pricing;
pub mod schedule;
pub mod synth;
pub mod tags;

pub use synth::{Generator, StoreSnapshot};
