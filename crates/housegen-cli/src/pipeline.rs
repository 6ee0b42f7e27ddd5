//! One generation run: lock the store, load seeds, synthesize, persist.

use anyhow::Context;
use housegen_config::HousegenConfig;
use housegen_core::HouseId;
use housegen_engine::{Generator, StoreSnapshot};
use housegen_landmarks::SeedIndex;
use housegen_store::{SlotLayout, SlotStats, SlotStore, StoreError};
use serde::Serialize;

use crate::progress::Progress;
use crate::write_lock;

/// Generated-record count between progress log lines.
const PROGRESS_LOG_INTERVAL: usize = 200;

/// What a run did, printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub requested: u64,
    pub generated: usize,
    pub persisted: usize,
    pub unplaced: u64,
    pub first_house_id: Option<HouseId>,
    pub last_house_id: Option<HouseId>,
    pub store_total: u64,
    /// Stats of the last slot written this run.
    pub slot: Option<SlotStats>,
}

/// A summary plus the error to exit with after printing it, if any.
///
/// Overflowing the store ceiling still persists what fit, so the summary is
/// reported before the failure.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub failure: Option<anyhow::Error>,
}

pub fn execute(config: &HousegenConfig, count: u64, show_progress: bool) -> anyhow::Result<RunOutcome> {
    let store_dir = &config.paths.store_dir;
    let _lock = write_lock::acquire_for_store(store_dir)?;

    let seeds = SeedIndex::load(&config.paths.data_dir).with_context(|| {
        format!(
            "failed to build seed index from {}",
            config.paths.data_dir.display()
        )
    })?;

    let layout = SlotLayout::from_config(store_dir, &config.store);
    let mut store = SlotStore::open(layout).context("failed to open listing store")?;
    tracing::info!(
        seeds = seeds.len(),
        existing = store.total(),
        remaining = store.remaining(),
        requested = count,
        "starting generation"
    );

    // Only what fits under the ceiling is generated.
    let placeable = count.min(store.remaining());
    let to_generate =
        usize::try_from(placeable).context("placeable count does not fit in memory")?;
    let snapshot = StoreSnapshot {
        existing: store.total(),
        used_communities: store.communities().clone(),
    };
    let mut generator = Generator::new(&seeds, config, snapshot);

    let progress = Progress::bar(placeable, "generating listings", show_progress);
    let mut records = Vec::with_capacity(to_generate);
    for _ in 0..to_generate {
        records.push(generator.next_listing());
        progress.inc(1);
        if records.len() % PROGRESS_LOG_INTERVAL == 0 {
            tracing::info!(generated = records.len(), "generation progress");
        }
    }
    progress.set_message("writing slots");

    let ids: Vec<HouseId> = records.iter().map(|record| record.house_id).collect();
    let generated = records.len();

    let (persisted, store_unplaced) = match store.append(records) {
        Ok(report) => (report.persisted, 0),
        Err(StoreError::Overflow {
            persisted,
            unplaced,
        }) => (persisted, unplaced),
        Err(error) => {
            progress.finish_clear();
            return Err(error).context("failed to persist listings");
        }
    };
    progress.finish_clear();

    let unplaced = store_unplaced.saturating_add(count - placeable);
    let failure = (unplaced > 0).then(|| {
        anyhow::Error::new(StoreError::Overflow {
            persisted,
            unplaced,
        })
        .context("store capacity exceeded")
    });
    if unplaced > 0 {
        tracing::warn!(persisted, unplaced, "requested more listings than the store can hold");
    }

    let summary = RunSummary {
        seed: config.generation.seed,
        requested: count,
        generated,
        persisted,
        unplaced,
        first_house_id: ids.first().copied().filter(|_| persisted > 0),
        last_house_id: persisted.checked_sub(1).and_then(|last| ids.get(last).copied()),
        store_total: store.total(),
        slot: store.last_written().cloned(),
    };

    if let Some(slot) = &summary.slot {
        tracing::info!(
            file = %slot.file,
            count = slot.count,
            price_min = slot.price_min,
            price_max = slot.price_max,
            distance_min = slot.distance_min,
            distance_max = slot.distance_max,
            "current slot"
        );
    }

    Ok(RunOutcome { summary, failure })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::write_lock::LOCK_FILE;

    fn write_corpora(dir: &Path) {
        fs::write(
            dir.join("subway_stations.json"),
            r#"{"stations": [
                {"station_id": "S1", "name": "西二旗", "lines": ["13号线", "昌平线"], "district": "海淀", "longitude": 116.306, "latitude": 40.053},
                {"station_id": "S2", "name": "国贸", "lines": ["1号线", "10号线"], "district": "朝阳", "longitude": 116.461, "latitude": 39.909}
            ]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("landmarks.json"),
            r#"{"landmarks": [
                {"landmark_id": "L1", "name": "中关村软件园", "district": "海淀", "longitude": 116.29, "latitude": 40.04, "nearby_subway": "西二旗"}
            ]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("fortune500_companies.json"),
            r#"{"companies": []}"#,
        )
        .unwrap();
    }

    struct Fixture {
        _data: TempDir,
        store: TempDir,
        config: HousegenConfig,
    }

    fn fixture() -> Fixture {
        let data = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        write_corpora(data.path());
        let mut config = HousegenConfig::default();
        config.paths.data_dir = data.path().to_path_buf();
        config.paths.store_dir = store.path().to_path_buf();
        Fixture {
            _data: data,
            store,
            config,
        }
    }

    #[test]
    fn first_run_reports_ids_and_slot() {
        let fx = fixture();
        let outcome = execute(&fx.config, 5, false).unwrap();
        assert!(outcome.failure.is_none());

        let summary = outcome.summary;
        assert_eq!(summary.generated, 5);
        assert_eq!(summary.persisted, 5);
        assert_eq!(summary.unplaced, 0);
        assert_eq!(summary.first_house_id.map(|id| id.to_string()), Some("HF_1".into()));
        assert_eq!(summary.last_house_id.map(|id| id.to_string()), Some("HF_5".into()));
        assert_eq!(summary.store_total, 5);
        assert_eq!(summary.slot.as_ref().map(|s| s.file.as_str()), Some("database_2000.json"));
        assert!(!fx.store.path().join(LOCK_FILE).exists());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["first_house_id"], "HF_1");
        assert_eq!(json["slot"]["count"], 5);
    }

    #[test]
    fn second_run_continues_ids() {
        let fx = fixture();
        execute(&fx.config, 5, false).unwrap();
        let summary = execute(&fx.config, 3, false).unwrap().summary;
        assert_eq!(summary.first_house_id.map(|id| id.to_string()), Some("HF_6".into()));
        assert_eq!(summary.store_total, 8);
        assert_eq!(summary.slot.map(|s| s.count), Some(8));
    }

    #[test]
    fn same_seed_writes_identical_bytes() {
        let a = fixture();
        let b = fixture();
        execute(&a.config, 40, false).unwrap();
        execute(&b.config, 40, false).unwrap();

        let read = |fx: &Fixture| fs::read(fx.store.path().join("database_2000.json")).unwrap();
        assert_eq!(read(&a), read(&b));
    }

    #[test]
    fn overflow_reports_partial_write_then_fails() {
        let mut fx = fixture();
        fx.config.store.slot_capacity = 2;
        fx.config.store.slot_count = 2;

        let outcome = execute(&fx.config, 5, false).unwrap();
        assert_eq!(outcome.summary.persisted, 4);
        assert_eq!(outcome.summary.unplaced, 1);
        assert_eq!(outcome.summary.last_house_id.map(|id| id.to_string()), Some("HF_4".into()));
        let failure = outcome.failure.expect("overflow must fail the run");
        assert!(format!("{failure:#}").contains("1 could not be placed"));

        let err = execute(&fx.config, 1, false).unwrap_err();
        assert!(format!("{err:#}").contains("store is full"));
    }

    #[test]
    fn count_far_above_ceiling_generates_only_what_fits() {
        let mut fx = fixture();
        fx.config.store.slot_capacity = 3;
        fx.config.store.slot_count = 2;

        let outcome = execute(&fx.config, u64::MAX, false).unwrap();
        let summary = outcome.summary;
        assert_eq!(summary.requested, u64::MAX);
        assert_eq!(summary.generated, 6);
        assert_eq!(summary.persisted, 6);
        assert_eq!(summary.unplaced, u64::MAX - 6);
        assert_eq!(summary.store_total, 6);
        assert_eq!(summary.last_house_id.map(|id| id.to_string()), Some("HF_6".into()));

        let failure = outcome.failure.expect("unplaced listings must fail the run");
        assert!(format!("{failure:#}").contains(&format!("{} could not be placed", u64::MAX - 6)));
    }

    #[test]
    fn missing_corpora_fail_before_writing() {
        let fx = fixture();
        let mut config = fx.config.clone();
        config.paths.data_dir = fx.store.path().join("nowhere");

        let err = execute(&config, 3, false).unwrap_err();
        assert!(format!("{err:#}").contains("failed to build seed index"));
        assert!(!fx.store.path().join("database_2000.json").exists());
    }
}
