use std::collections::HashSet;
use std::path::PathBuf;

use housegen_core::ListingRecord;

use crate::document::{read_slot, write_slot};
use crate::error::StoreError;
use crate::layout::SlotLayout;
use crate::stats::SlotStats;

/// Outcome of a successful [`SlotStore::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReport {
    pub persisted: usize,
    /// Slot files rewritten, in write order.
    pub written: Vec<PathBuf>,
    pub store_total: u64,
}

/// Open handle on the slot series, positioned at the write cursor.
#[derive(Debug)]
pub struct SlotStore {
    layout: SlotLayout,
    cursor: u32,
    current: Vec<ListingRecord>,
    total: u64,
    communities: HashSet<String>,
    last_written: Option<SlotStats>,
}

impl SlotStore {
    /// Scan slots from the first until one has room.
    ///
    /// Every record in the scanned slots counts toward the existing total and
    /// contributes its community name. Slots after the cursor must be empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Full`] when every slot is at capacity,
    /// [`StoreError::Misplaced`] when a slot after the cursor holds records,
    /// or a read error for an unreadable slot.
    pub fn open(layout: SlotLayout) -> Result<Self, StoreError> {
        let mut total = 0u64;
        let mut communities = HashSet::new();

        for slot in 1..=layout.slot_count() {
            let path = layout.path(slot);
            let records = read_slot(&path)?.unwrap_or_default();
            total += records.len() as u64;
            communities.extend(records.iter().map(|record| record.community.clone()));

            if (records.len() as u64) < layout.capacity() {
                ensure_empty_after(&layout, slot)?;
                tracing::info!(
                    cursor = %path.display(),
                    existing = total,
                    "store opened"
                );
                return Ok(Self {
                    layout,
                    cursor: slot,
                    current: records,
                    total,
                    communities,
                    last_written: None,
                });
            }
        }

        Err(StoreError::Full {
            ceiling: layout.ceiling(),
        })
    }

    #[must_use]
    pub const fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// Records persisted across all scanned and written slots.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Room left before the store ceiling.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.layout.ceiling().saturating_sub(self.total)
    }

    #[must_use]
    pub const fn communities(&self) -> &HashSet<String> {
        &self.communities
    }

    /// 1-based slot currently receiving writes.
    #[must_use]
    pub const fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Stats of the most recently written slot, if any write happened.
    #[must_use]
    pub const fn last_written(&self) -> Option<&SlotStats> {
        self.last_written.as_ref()
    }

    /// Append `records`, filling the cursor slot before rolling to the next.
    ///
    /// Each touched slot is rewritten once per pass. Slots that receive
    /// nothing are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Overflow`] once the last slot is full and records
    /// remain; everything that fit has already been written. IO and parse
    /// failures abort the append.
    pub fn append(&mut self, records: Vec<ListingRecord>) -> Result<AppendReport, StoreError> {
        let mut incoming = records.into_iter();
        let mut persisted = 0usize;
        let mut written = Vec::new();

        loop {
            let room = usize::try_from(self.layout.capacity())
                .unwrap_or(usize::MAX)
                .saturating_sub(self.current.len());
            let chunk: Vec<ListingRecord> = incoming.by_ref().take(room).collect();

            if !chunk.is_empty() {
                let added = chunk.len();
                self.communities
                    .extend(chunk.iter().map(|record| record.community.clone()));
                self.current.extend(chunk);

                let path = self.layout.path(self.cursor);
                write_slot(&path, &self.current)?;
                persisted += added;
                self.total += added as u64;
                self.last_written =
                    SlotStats::from_records(self.layout.file_name(self.cursor), &self.current);
                tracing::debug!(
                    slot = %path.display(),
                    added,
                    slot_total = self.current.len(),
                    "slot updated"
                );
                written.push(path);
            }

            if incoming.len() == 0 {
                break;
            }

            if self.cursor >= self.layout.slot_count() {
                let unplaced = incoming.len() as u64;
                tracing::warn!(persisted, unplaced, "store ceiling reached");
                return Err(StoreError::Overflow {
                    persisted,
                    unplaced,
                });
            }

            // Slots past the cursor were verified empty on open.
            self.cursor += 1;
            self.current = Vec::new();
        }

        Ok(AppendReport {
            persisted,
            written,
            store_total: self.total,
        })
    }
}

fn ensure_empty_after(layout: &SlotLayout, cursor: u32) -> Result<(), StoreError> {
    for slot in cursor + 1..=layout.slot_count() {
        let path = layout.path(slot);
        let records = read_slot(&path)?.as_ref().map_or(0, Vec::len);
        if records > 0 {
            return Err(StoreError::Misplaced {
                path,
                records,
                cursor,
            });
        }
    }
    Ok(())
}
