//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use chrono::NaiveDate;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use housegen_config::{HousegenConfig, PROJECT_CONFIG_FILE};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

#[test]
fn loads_store_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
slot_capacity = 500
slot_count = 3
file_prefix = "listings"
"#,
        )?;

        let config: HousegenConfig = Figment::from(Serialized::defaults(HousegenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.slot_capacity, 500);
        assert_eq!(config.store.slot_count, 3);
        assert_eq!(config.store.file_prefix, "listings");
        assert_eq!(config.store.ceiling(), 1500);
        Ok(())
    });
}

#[test]
fn loads_generation_and_pricing_sections() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[generation]
seed = 7
available_from = "2026-03-01"
available_window_days = 10

[pricing]
variance = 0.0
whole_unit_floor = 4000
"#,
        )?;

        let config: HousegenConfig = Figment::from(Serialized::defaults(HousegenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.generation.seed, 7);
        assert_eq!(
            config.generation.available_from,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert_eq!(config.generation.available_window_days, 10);
        // Untouched fields keep their defaults.
        assert_eq!(config.generation.community_name_attempts, 100);
        assert!(config.pricing.variance.abs() < f64::EPSILON);
        assert_eq!(config.pricing.whole_unit_floor, 4000);
        assert_eq!(config.pricing.shared_room_ceiling, 3500);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_from_cwd() {
    Jail::expect_with(|jail| {
        jail.create_file(
            PROJECT_CONFIG_FILE,
            r#"
[paths]
data_dir = "corpora"
store_dir = "out"
"#,
        )?;

        let config = HousegenConfig::load(None).expect("config loads");
        assert_eq!(config.paths.data_dir, PathBuf::from("corpora"));
        assert_eq!(config.paths.store_dir, PathBuf::from("out"));
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[generation]\nseed = 1\n")?;
        jail.create_file("override.toml", "[generation]\nseed = 2\n")?;

        let config = HousegenConfig::load(Some(Path::new("override.toml"))).expect("config loads");
        assert_eq!(config.generation.seed, 2);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = HousegenConfig::load(Some(Path::new("nope.toml")));
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn overlapping_price_ranges_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            PROJECT_CONFIG_FILE,
            "[pricing]\nwhole_unit_floor = 800\n",
        )?;

        let err = HousegenConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("pricing.whole_unit_floor"), "{err}");
        Ok(())
    });
}
