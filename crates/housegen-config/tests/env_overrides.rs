use figment::Jail;
use housegen_config::{HousegenConfig, PROJECT_CONFIG_FILE};
use std::path::PathBuf;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("HOUSEGEN_GENERATION__SEED", "99");
        jail.set_env("HOUSEGEN_STORE__SLOT_CAPACITY", "10");
        jail.set_env("HOUSEGEN_PATHS__STORE_DIR", "/tmp/housegen-store");

        let config = HousegenConfig::load(None).expect("config loads");
        assert_eq!(config.generation.seed, 99);
        assert_eq!(config.store.slot_capacity, 10);
        assert_eq!(config.paths.store_dir, PathBuf::from("/tmp/housegen-store"));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[generation]\nseed = 5\n")?;
        jail.set_env("HOUSEGEN_GENERATION__SEED", "6");

        let config = HousegenConfig::load(None).expect("config loads");
        assert_eq!(config.generation.seed, 6);
        Ok(())
    });
}

#[test]
fn unrelated_prefixed_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("HOUSEGEN_LOG", "debug");

        let config = HousegenConfig::load(None).expect("config loads");
        assert_eq!(config.generation.seed, 42);
        Ok(())
    });
}
