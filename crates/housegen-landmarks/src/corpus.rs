//! Raw corpus records and tolerant file loading.
//!
//! Each corpus file is a JSON object holding one array. Records are decoded
//! one by one so a single malformed entry is skipped instead of failing the
//! whole file.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LandmarkError;

pub const SUBWAY_FILE: &str = "subway_stations.json";
pub const LANDMARKS_FILE: &str = "landmarks.json";
pub const COMPANIES_FILE: &str = "fortune500_companies.json";

/// A transit station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(default)]
    pub lines: Vec<String>,
    pub district: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// A named landmark with the station it sits closest to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub district: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub nearby_subway: String,
}

/// A large employer office with the station it sits closest to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employer {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub district: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub nearby_subway: String,
}

/// The three corpora, in the order seeds are built from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpora {
    pub stations: Vec<Station>,
    pub landmarks: Vec<PointOfInterest>,
    pub companies: Vec<Employer>,
}

impl Corpora {
    /// Read all three corpus files from `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::Io`] when a file is missing or unreadable and
    /// [`LandmarkError::Parse`] when a file is not a JSON document.
    pub fn load(data_dir: &Path) -> Result<Self, LandmarkError> {
        let stations = read_collection(&data_dir.join(SUBWAY_FILE), "stations")?;
        let landmarks = read_collection(&data_dir.join(LANDMARKS_FILE), "landmarks")?;
        let companies = read_collection(&data_dir.join(COMPANIES_FILE), "companies")?;

        tracing::debug!(
            stations = stations.len(),
            landmarks = landmarks.len(),
            companies = companies.len(),
            dir = %data_dir.display(),
            "loaded landmark corpora"
        );

        Ok(Self {
            stations,
            landmarks,
            companies,
        })
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path, key: &str) -> Result<Vec<T>, LandmarkError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LandmarkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&raw).map_err(|source| LandmarkError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(Value::Array(items)) = document.get(key) else {
        tracing::debug!(path = %path.display(), key, "corpus has no record array");
        return Ok(Vec::new());
    };

    Ok(decode_records(path, items))
}

fn decode_records<T: DeserializeOwned>(path: &Path, items: &[Value]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::debug!(
                    path = %path.display(),
                    position,
                    %error,
                    "skipping malformed corpus record"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn station_without_lines_defaults_to_empty() {
        let station: Station = serde_json::from_value(json!({
            "station_id": "S1",
            "name": "西二旗站",
            "district": "海淀",
            "longitude": 116.306,
            "latitude": 40.053,
        }))
        .unwrap();
        assert!(station.lines.is_empty());
    }

    #[test]
    fn malformed_records_are_dropped() {
        let items = vec![
            json!({"name": "A", "district": "海淀", "longitude": 116.3, "latitude": 40.0}),
            json!({"name": "B", "district": "海淀", "longitude": "east", "latitude": 40.0}),
            json!({"name": "C", "longitude": 116.3, "latitude": 40.0}),
            json!(17),
        ];
        let stations: Vec<Station> = decode_records(Path::new("subway_stations.json"), &items);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "A");
    }

    #[test]
    fn employer_short_name_is_optional() {
        let company: Employer = serde_json::from_value(json!({
            "company_id": "C1",
            "name": "Example Holdings",
            "district": "朝阳",
            "longitude": 116.46,
            "latitude": 39.91,
            "nearby_subway": "国贸",
        }))
        .unwrap();
        assert_eq!(company.short_name, None);
    }
}
