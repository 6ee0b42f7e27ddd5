//! # housegen-store
//!
//! Listings persist as a fixed series of JSON slot files, each holding at
//! most `slot_capacity` records:
//!
//! ```text
//! <store_dir>/database_2000.json    slot 1
//! <store_dir>/database_4000.json    slot 2
//! ...
//! <store_dir>/database_10000.json   slot 5
//! ```
//!
//! [`SlotStore::open`] scans the slots in order to find the write cursor
//! (the first slot with room) and gathers what the generator needs to
//! continue: the existing total and every community name in use.
//! [`SlotStore::append`] fills the cursor slot, rolls over to the next one
//! and rewrites each touched slot atomically.

mod document;
mod error;
mod layout;
mod stats;
mod store;

pub use document::{StoreDocument, read_slot, write_slot};
pub use error::StoreError;
pub use layout::SlotLayout;
pub use stats::SlotStats;
pub use store::{AppendReport, SlotStore};
