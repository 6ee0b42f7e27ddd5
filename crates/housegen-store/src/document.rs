//! Slot file codec.

use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use housegen_core::ListingRecord;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// On-disk shape of one slot: `{"listings": [...]}`.
///
/// Older slot files name the array `houses`; both are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default, alias = "houses")]
    pub listings: Vec<ListingRecord>,
}

/// Read a slot file. A missing file is `Ok(None)`.
///
/// # Errors
///
/// Returns [`StoreError::Io`] for unreadable files and
/// [`StoreError::Parse`] for malformed content.
pub fn read_slot(path: &Path) -> Result<Option<Vec<ListingRecord>>, StoreError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let document: StoreDocument = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(document.listings))
}

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    listings: &'a [ListingRecord],
}

/// Replace a slot file with `listings`.
///
/// The document is written to a temporary file in the same directory and
/// renamed over the target, so readers see either the old or the new slot.
///
/// # Errors
///
/// Returns [`StoreError::Io`] when the directory, temp file or rename fail and
/// [`StoreError::Serialize`] when encoding fails.
pub fn write_slot(path: &Path, listings: &[ListingRecord]) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_error)?;

    let temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    let mut writer = BufWriter::new(temp);
    serde_json::to_writer_pretty(&mut writer, &StoreDocumentRef { listings }).map_err(|source| {
        StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(io_error)?;
    let temp = writer.into_inner().map_err(|err| io_error(err.into_error()))?;
    temp.persist(path).map_err(|err| io_error(err.error))?;

    tracing::debug!(path = %path.display(), records = listings.len(), "slot written");
    Ok(())
}
