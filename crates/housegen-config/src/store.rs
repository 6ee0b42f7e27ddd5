//! Paginated store geometry.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_slot_capacity() -> u64 {
    2000
}

const fn default_slot_count() -> u32 {
    5
}

fn default_file_prefix() -> String {
    String::from("database")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Records per slot file.
    #[serde(default = "default_slot_capacity")]
    pub slot_capacity: u64,

    /// Number of slot files; the store ceiling is `slot_capacity * slot_count`.
    #[serde(default = "default_slot_count")]
    pub slot_count: u32,

    /// Slot file stem. Slot `k` is `{file_prefix}_{k * slot_capacity}.json`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot_capacity: default_slot_capacity(),
            slot_count: default_slot_count(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl StoreConfig {
    /// Total number of records the store can ever hold.
    #[must_use]
    pub fn ceiling(&self) -> u64 {
        self.slot_capacity * u64::from(self.slot_count)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_capacity == 0 {
            return Err(ConfigError::invalid("store.slot_capacity", "must be positive"));
        }
        if self.slot_count == 0 {
            return Err(ConfigError::invalid("store.slot_count", "must be positive"));
        }
        if self.file_prefix.is_empty()
            || self
                .file_prefix
                .contains(|c: char| c == '/' || c == '\\')
        {
            return Err(ConfigError::invalid(
                "store.file_prefix",
                "must be a non-empty file stem without path separators",
            ));
        }
        Ok(())
    }
}
