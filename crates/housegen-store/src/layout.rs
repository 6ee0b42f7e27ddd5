use std::path::{Path, PathBuf};

use housegen_config::StoreConfig;

/// Where slot files live and how many records each may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    dir: PathBuf,
    prefix: String,
    capacity: u64,
    slot_count: u32,
}

impl SlotLayout {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, capacity: u64, slot_count: u32) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            capacity,
            slot_count,
        }
    }

    #[must_use]
    pub fn from_config(dir: impl Into<PathBuf>, config: &StoreConfig) -> Self {
        Self::new(dir, config.file_prefix.clone(), config.slot_capacity, config.slot_count)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    #[must_use]
    pub const fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Total records the store can ever hold.
    #[must_use]
    pub fn ceiling(&self) -> u64 {
        self.capacity * u64::from(self.slot_count)
    }

    /// File name of 1-based `slot`, named after its cumulative upper bound.
    #[must_use]
    pub fn file_name(&self, slot: u32) -> String {
        format!("{}_{}.json", self.prefix, u64::from(slot) * self.capacity)
    }

    #[must_use]
    pub fn path(&self, slot: u32) -> PathBuf {
        self.dir.join(self.file_name(slot))
    }
}
