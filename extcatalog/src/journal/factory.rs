// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Journal factory
//!
//! Creates the journal backend selected by configuration.

use super::memory::MemoryJournal;
use super::types::JournalStorageType;
use super::CatalogJournal;
use crate::catalog::error::CatalogResult;
use std::path::Path;
use std::sync::Arc;

/// Open the journal backend for `storage_type` at `path`
///
/// The memory backend ignores `path`.
///
/// # Examples
/// ```ignore
/// let journal = open_journal(JournalStorageType::Sled, "./catalog_journal")?;
/// let seq = journal.append(op)?;
/// ```
pub fn open_journal<P: AsRef<Path>>(
    storage_type: JournalStorageType,
    path: P,
) -> CatalogResult<Arc<dyn CatalogJournal>> {
    match storage_type {
        #[cfg(feature = "sled-backend")]
        JournalStorageType::Sled => {
            use super::sled::SledJournal;
            let journal = SledJournal::open(path)?;
            Ok(Arc::new(journal) as Arc<dyn CatalogJournal>)
        }
        #[cfg(not(feature = "sled-backend"))]
        JournalStorageType::Sled => {
            let _ = path;
            Err(crate::catalog::error::CatalogError::Config(
                "sled journal backend not compiled in (enable the sled-backend feature)"
                    .to_string(),
            ))
        }
        JournalStorageType::Memory => {
            let _ = path;
            Ok(Arc::new(MemoryJournal::new()) as Arc<dyn CatalogJournal>)
        }
    }
}
