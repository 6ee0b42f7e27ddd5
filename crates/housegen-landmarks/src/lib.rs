//! # housegen-landmarks
//!
//! Builds the ordered list of geographic seeds listings are placed around,
//! from three static corpora in the data directory:
//!
//! | File | Key | Contributes |
//! |------|-----|-------------|
//! | `subway_stations.json` | `stations` | one seed per station |
//! | `landmarks.json` | `landmarks` | one seed per landmark near a known station |
//! | `fortune500_companies.json` | `companies` | one seed per employer near a known station |
//!
//! The resulting [`SeedIndex`] is constructed once per run and passed by
//! reference; there is no process-wide instance.

mod corpus;
mod error;
mod index;

pub use corpus::{
    COMPANIES_FILE, Corpora, Employer, LANDMARKS_FILE, PointOfInterest, SUBWAY_FILE, Station,
};
pub use error::LandmarkError;
pub use index::SeedIndex;
