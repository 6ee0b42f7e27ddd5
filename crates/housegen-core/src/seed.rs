use crate::geo::GeoPoint;

/// Fallback line name for stations without line data.
pub const DEFAULT_LINE: &str = "地铁";

/// Geographic anchor a synthetic listing is placed around.
///
/// Seeds are rebuilt from the landmark corpora on every run and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSeed {
    pub district: String,
    /// Short area label shown on the listing (e.g. the station name without `站`).
    pub area: String,
    /// Nearest transit station name.
    pub station: String,
    /// Primary line serving the station.
    pub line: String,
    /// Every line serving the station.
    pub lines: Vec<String>,
    pub point: GeoPoint,
}

impl LandmarkSeed {
    /// Number of distinct lines serving the seed's station (at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len().max(1)
    }
}
