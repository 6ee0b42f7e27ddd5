use std::collections::HashSet;

use housegen_config::HousegenConfig;
use housegen_core::enums::{RentalMode, Tag};
use housegen_core::ListingRecord;
use housegen_engine::pricing::bounds;
use housegen_engine::schedule::{SHARED_ROOM_MAX_AREA, SHARED_ROOM_MIN_AREA};
use housegen_engine::synth::price_implies_mode;
use housegen_engine::tags::{TagInput, derive_tags};
use housegen_engine::{Generator, StoreSnapshot};
use housegen_landmarks::{Corpora, Employer, PointOfInterest, SeedIndex, Station};
use pretty_assertions::assert_eq;

fn seed_index() -> SeedIndex {
    let station = |name: &str, lines: &[&str], district: &str, lon: f64, lat: f64| Station {
        name: name.to_string(),
        lines: lines.iter().map(ToString::to_string).collect(),
        district: district.to_string(),
        longitude: lon,
        latitude: lat,
    };
    let corpora = Corpora {
        stations: vec![
            station("西二旗", &["13号线", "昌平线"], "海淀", 116.306, 40.053),
            station("国贸", &["1号线", "10号线"], "朝阳", 116.461, 39.909),
            station("苹果园", &["1号线", "6号线", "S1线"], "石景山", 116.178, 39.926),
            station("长阳", &["房山线"], "房山", 116.213, 39.763),
        ],
        landmarks: vec![PointOfInterest {
            name: "上地信息产业基地".into(),
            district: "海淀".into(),
            longitude: 116.31,
            latitude: 40.03,
            nearby_subway: "西二旗".into(),
        }],
        companies: vec![Employer {
            name: "Example Group".into(),
            short_name: Some("例集团".into()),
            district: "朝阳".into(),
            longitude: 116.46,
            latitude: 39.91,
            nearby_subway: "国贸".into(),
        }],
    };
    SeedIndex::build(&corpora).unwrap()
}

fn generate(config: &HousegenConfig, seeds: &SeedIndex, snapshot: StoreSnapshot, n: usize) -> Vec<ListingRecord> {
    Generator::new(seeds, config, snapshot).generate(n)
}

#[test]
fn five_records_against_empty_store() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let records = generate(&config, &seeds, StoreSnapshot::default(), 5);

    let ids: Vec<String> = records.iter().map(|r| r.house_id.to_string()).collect();
    assert_eq!(ids, vec!["HF_1", "HF_2", "HF_3", "HF_4", "HF_5"]);

    let modes: Vec<RentalMode> = records.iter().map(|r| r.rental_type).collect();
    assert_eq!(
        modes,
        vec![
            RentalMode::SharedRoom,
            RentalMode::WholeUnit,
            RentalMode::SharedRoom,
            RentalMode::WholeUnit,
            RentalMode::SharedRoom,
        ]
    );
}

#[test]
fn same_seed_and_store_give_identical_output() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let first = generate(&config, &seeds, StoreSnapshot::default(), 50);
    let second = generate(&config, &seeds, StoreSnapshot::default(), 50);
    assert_eq!(
        serde_json::to_string_pretty(&first).unwrap(),
        serde_json::to_string_pretty(&second).unwrap()
    );
}

#[test]
fn different_seed_changes_random_fields_only() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let mut other = HousegenConfig::default();
    other.generation.seed = 7;

    let a = generate(&config, &seeds, StoreSnapshot::default(), 30);
    let b = generate(&other, &seeds, StoreSnapshot::default(), 30);

    assert_ne!(a, b);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.house_id, y.house_id);
        assert_eq!(x.rental_type, y.rental_type);
        assert_eq!(x.decoration, y.decoration);
        assert_eq!(x.orientation, y.orientation);
        assert_eq!(x.subway_station, y.subway_station);
    }
}

#[test]
fn continues_ids_and_coverage_from_existing_store() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let snapshot = StoreSnapshot {
        existing: 2000,
        used_communities: HashSet::new(),
    };
    let mut generator = Generator::new(&seeds, &config, snapshot);
    assert_eq!(generator.coverage_index(), 2000);

    let record = generator.next_listing();
    assert_eq!(record.house_id.to_string(), "HF_2001");
    assert_eq!(record.rental_type, RentalMode::SharedRoom);
    assert_eq!(record.subway_station, seeds.seed_for(2000).station);
    assert_eq!(generator.next_id().to_string(), "HF_2002");
}

#[test]
fn partitioned_runs_keep_scheduled_axes() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let axes = |r: &ListingRecord| {
        (
            r.house_id,
            r.rental_type,
            r.orientation,
            r.decoration,
            r.hidden_noise_level,
            r.status,
            (r.bedrooms, r.livingrooms, r.bathrooms),
            r.subway_station.clone(),
        )
    };

    let single: Vec<_> = generate(&config, &seeds, StoreSnapshot::default(), 60)
        .iter()
        .map(axes)
        .collect();

    let mut split = Vec::new();
    let mut existing = 0u64;
    let mut used = HashSet::new();
    for chunk in [13usize, 1, 29, 17] {
        let batch = generate(
            &config,
            &seeds,
            StoreSnapshot {
                existing,
                used_communities: used.clone(),
            },
            chunk,
        );
        used.extend(batch.iter().map(|r| r.community.clone()));
        split.extend(batch.iter().map(axes));
        existing += chunk as u64;
    }

    assert_eq!(split, single);
}

#[test]
fn generated_records_honor_field_invariants() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let records = generate(&config, &seeds, StoreSnapshot::default(), 400);

    let mut communities = HashSet::new();
    for record in &records {
        let (low, high) = bounds(&config.pricing, record.rental_type);
        assert!((low..=high).contains(&record.price), "{}: {}", record.house_id, record.price);
        assert_eq!(record.price % config.pricing.granularity, 0);
        assert_eq!(price_implies_mode(&config, record.price), Some(record.rental_type));

        if record.rental_type.is_shared() {
            assert!((SHARED_ROOM_MIN_AREA..=SHARED_ROOM_MAX_AREA).contains(&record.area_sqm));
            assert!(record.tags.contains(&Tag::SharedRoom));
        }
        assert!((8..=95).contains(&record.commute_to_xierqi));
        assert!((200..=5500).contains(&record.subway_distance));
        assert!((1..=99).any(|n| record.address.ends_with(&format!("路{n}号"))));
        if record.elevator {
            assert!(record.total_floors >= 6);
        }
        assert!(communities.insert(record.community.clone()), "duplicate {}", record.community);
    }
}

#[test]
fn existing_communities_are_not_reused() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let first = generate(&config, &seeds, StoreSnapshot::default(), 40);
    let used: HashSet<String> = first.iter().map(|r| r.community.clone()).collect();

    let second = generate(
        &config,
        &seeds,
        StoreSnapshot {
            existing: 40,
            used_communities: used.clone(),
        },
        40,
    );
    assert!(second.iter().all(|r| !used.contains(&r.community)));
}

#[test]
fn multi_line_stations_tag_their_listings() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let records = generate(&config, &seeds, StoreSnapshot::default(), 6);

    // Seeds 0 and 1 have two lines, seed 2 has three.
    assert!(records[0].tags.contains(&Tag::DualLine));
    assert!(records[2].tags.contains(&Tag::MultiLine));
    assert!(!records[3].tags.contains(&Tag::DualLine));
    assert_eq!(records[0].subway, "13号线");
}

#[test]
fn stored_tags_are_rederived_from_record_fields() {
    let seeds = seed_index();
    let config = HousegenConfig::default();
    let records = generate(&config, &seeds, StoreSnapshot::default(), 120);

    for record in &records {
        let line_count = seeds.seed_for(record.house_id.seq() - 1).line_count();
        let input = TagInput::from_record(record, line_count);
        assert_eq!(derive_tags(&input), record.tags, "{}", record.house_id);
        assert_eq!(derive_tags(&input), derive_tags(&input));
    }
}
