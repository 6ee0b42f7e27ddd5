use std::fs;
use std::path::Path;

use housegen_landmarks::{
    COMPANIES_FILE, LANDMARKS_FILE, LandmarkError, SUBWAY_FILE, SeedIndex,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const STATIONS: &str = r#"{
  "stations": [
    {"station_id": "ST001", "name": "西二旗", "lines": ["13号线", "昌平线"], "district": "海淀", "longitude": 116.306, "latitude": 40.053},
    {"station_id": "ST002", "name": "上地", "lines": ["13号线"], "district": "海淀", "longitude": 116.319, "latitude": 40.033},
    {"station_id": "ST003", "name": "broken", "district": "海淀", "longitude": "n/a", "latitude": 40.0}
  ]
}"#;

const LANDMARKS: &str = r#"{
  "landmarks": [
    {"landmark_id": "LM001", "name": "百度科技园", "district": "海淀", "longitude": 116.301, "latitude": 40.051, "nearby_subway": "西二旗"},
    {"landmark_id": "LM002", "name": "远方", "district": "昌平", "longitude": 116.2, "latitude": 40.2, "nearby_subway": "沙河"}
  ]
}"#;

const COMPANIES: &str = r#"{
  "companies": [
    {"company_id": "C001", "name": "Example Tech", "short_name": "例科", "district": "海淀", "longitude": 116.318, "latitude": 40.034, "nearby_subway": "上地"}
  ]
}"#;

fn write_corpora(dir: &Path, stations: &str, landmarks: &str, companies: &str) {
    fs::write(dir.join(SUBWAY_FILE), stations).unwrap();
    fs::write(dir.join(LANDMARKS_FILE), landmarks).unwrap();
    fs::write(dir.join(COMPANIES_FILE), companies).unwrap();
}

#[test]
fn loads_and_skips_bad_records() {
    let dir = TempDir::new().unwrap();
    write_corpora(dir.path(), STATIONS, LANDMARKS, COMPANIES);

    let index = SeedIndex::load(dir.path()).unwrap();
    let areas: Vec<&str> = index.seeds().iter().map(|s| s.area.as_str()).collect();
    assert_eq!(areas, vec!["西二旗", "上地", "百度科技", "例科"]);
    assert_eq!(index.seeds()[3].line, "13号线");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SUBWAY_FILE), STATIONS).unwrap();
    fs::write(dir.path().join(LANDMARKS_FILE), LANDMARKS).unwrap();

    let err = SeedIndex::load(dir.path()).unwrap_err();
    match err {
        LandmarkError::Io { path, .. } => assert!(path.ends_with(COMPANIES_FILE)),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn unparseable_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_corpora(dir.path(), "{ not json", LANDMARKS, COMPANIES);

    let err = SeedIndex::load(dir.path()).unwrap_err();
    assert!(matches!(err, LandmarkError::Parse { .. }));
    assert!(err.to_string().contains(SUBWAY_FILE));
}

#[test]
fn corpora_without_usable_records_yield_no_seeds() {
    let dir = TempDir::new().unwrap();
    write_corpora(
        dir.path(),
        r#"{"stations": []}"#,
        LANDMARKS,
        r#"{"something_else": []}"#,
    );

    let err = SeedIndex::load(dir.path()).unwrap_err();
    assert!(matches!(err, LandmarkError::EmptySeedList));
}
