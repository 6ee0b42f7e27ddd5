use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error("failed to read landmark corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse landmark corpus {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("landmark corpora produced no seeds")]
    EmptySeedList,
}
