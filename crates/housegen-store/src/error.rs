use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access slot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse slot {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize slot {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store is full: all slots hold their capacity ({ceiling} records)")]
    Full { ceiling: u64 },

    #[error(
        "slot {} holds {records} records after partial slot {cursor}; only the last filled slot may be partial",
        path.display()
    )]
    Misplaced {
        path: PathBuf,
        records: usize,
        cursor: u32,
    },

    #[error("store ceiling reached: {persisted} records persisted, {unplaced} could not be placed")]
    Overflow { persisted: usize, unplaced: u64 },
}
