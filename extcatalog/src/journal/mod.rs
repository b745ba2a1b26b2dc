// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog journal
//!
//! An append-only log of catalog creations and drops. Entries are written
//! after a catalog has been fully validated and are replayed in sequence
//! order at startup to rebuild the catalog map.

pub mod factory;
pub mod memory;
#[cfg(feature = "sled-backend")]
pub mod sled;
pub mod types;

pub use factory::open_journal;
pub use memory::MemoryJournal;
#[cfg(feature = "sled-backend")]
pub use self::sled::SledJournal;
pub use types::{JournalEntry, JournalOp, JournalRecord, JournalStorageType};

use crate::catalog::error::CatalogResult;

/// Durable, ordered store of catalog operations
pub trait CatalogJournal: Send + Sync {
    /// Append an operation and return its sequence number
    ///
    /// Sequence numbers start at 1 and increase by one per entry.
    fn append(&self, op: JournalOp) -> CatalogResult<u64>;

    /// All entries in sequence order
    fn entries(&self) -> CatalogResult<Vec<JournalEntry>>;

    /// Number of entries written so far
    fn len(&self) -> CatalogResult<usize>;

    fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Make appended entries durable
    fn flush(&self) -> CatalogResult<()>;

    fn storage_type(&self) -> JournalStorageType;
}
