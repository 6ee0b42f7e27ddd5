//! Filesystem locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding the landmark corpora.
    #[serde(default = "default_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the paginated store slot files.
    #[serde(default = "default_dir")]
    pub store_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_dir(),
            store_dir: default_dir(),
        }
    }
}
