use std::collections::HashMap;
use std::path::Path;

use housegen_core::geo::GeoPoint;
use housegen_core::seed::{DEFAULT_LINE, LandmarkSeed};

use crate::corpus::{Corpora, Station};
use crate::error::LandmarkError;

/// Landmark names shorter than this fall back to their district as the area.
const LANDMARK_AREA_CHARS: usize = 4;

/// Ordered, read-only list of seeds.
///
/// Order is stations first, then landmarks, then companies, each in corpus
/// order, so the same corpora always yield the same index.
#[derive(Debug, Clone)]
pub struct SeedIndex {
    seeds: Vec<LandmarkSeed>,
}

impl SeedIndex {
    /// Load the corpora from `data_dir` and build the index.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError`] when a corpus file cannot be read or parsed,
    /// or when no seed survives.
    pub fn load(data_dir: &Path) -> Result<Self, LandmarkError> {
        let corpora = Corpora::load(data_dir)?;
        Self::build(&corpora)
    }

    /// Build the index from already-loaded corpora.
    ///
    /// Landmarks and companies whose `nearby_subway` names no known station
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::EmptySeedList`] when nothing survives.
    pub fn build(corpora: &Corpora) -> Result<Self, LandmarkError> {
        // Later duplicates win, matching a plain map insert.
        let by_name: HashMap<&str, &Station> = corpora
            .stations
            .iter()
            .map(|station| (station.name.as_str(), station))
            .collect();

        let mut seeds = Vec::with_capacity(
            corpora.stations.len() + corpora.landmarks.len() + corpora.companies.len(),
        );

        seeds.extend(corpora.stations.iter().map(|station| {
            transit_seed(
                station,
                station.district.clone(),
                station.name.replace('站', ""),
                GeoPoint::new(station.longitude, station.latitude),
            )
        }));

        let mut skipped = 0usize;

        for landmark in &corpora.landmarks {
            let Some(station) = by_name.get(landmark.nearby_subway.as_str()) else {
                skipped += 1;
                continue;
            };
            let area = if landmark.name.chars().count() >= LANDMARK_AREA_CHARS {
                landmark.name.chars().take(LANDMARK_AREA_CHARS).collect()
            } else {
                landmark.district.clone()
            };
            seeds.push(transit_seed(
                station,
                landmark.district.clone(),
                area,
                GeoPoint::new(landmark.longitude, landmark.latitude),
            ));
        }

        for company in &corpora.companies {
            let Some(station) = by_name.get(company.nearby_subway.as_str()) else {
                skipped += 1;
                continue;
            };
            let area = company
                .short_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| company.district.clone());
            seeds.push(transit_seed(
                station,
                company.district.clone(),
                area,
                GeoPoint::new(company.longitude, company.latitude),
            ));
        }

        if seeds.is_empty() {
            return Err(LandmarkError::EmptySeedList);
        }

        tracing::info!(seeds = seeds.len(), skipped, "seed index built");
        Ok(Self { seeds })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Always `false` for a built index; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    #[must_use]
    pub fn seeds(&self) -> &[LandmarkSeed] {
        &self.seeds
    }

    /// Seed placed at coverage index `index`, cycling through the list.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_for(&self, index: u64) -> &LandmarkSeed {
        let position = (index % self.seeds.len() as u64) as usize;
        &self.seeds[position]
    }
}

fn transit_seed(station: &Station, district: String, area: String, point: GeoPoint) -> LandmarkSeed {
    LandmarkSeed {
        district,
        area,
        station: station.name.clone(),
        line: station
            .lines
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_LINE.to_string()),
        lines: station.lines.clone(),
        point,
    }
}
