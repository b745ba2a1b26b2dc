// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory journal, used in tests and for throwaway instances

use super::types::{JournalEntry, JournalOp, JournalRecord, JournalStorageType};
use super::CatalogJournal;
use crate::catalog::error::CatalogResult;
use parking_lot::Mutex;

/// Journal that keeps encoded entries in a vector
///
/// Entries go through the same framing as the persistent backend so that
/// encoding problems surface in tests too.
#[derive(Default)]
pub struct MemoryJournal {
    entries: Mutex<Vec<Vec<u8>>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the raw bytes of an entry. Test hook for corruption handling.
    #[cfg(test)]
    pub(crate) fn raw_entry_mut<F: FnOnce(&mut Vec<u8>)>(&self, sequence: u64, f: F) {
        let mut entries = self.entries.lock();
        if let Some(bytes) = entries.get_mut(sequence as usize - 1) {
            f(bytes);
        }
    }
}

impl CatalogJournal for MemoryJournal {
    fn append(&self, op: JournalOp) -> CatalogResult<u64> {
        let bytes = JournalRecord::new(op).encode()?;
        let mut entries = self.entries.lock();
        entries.push(bytes);
        Ok(entries.len() as u64)
    }

    fn entries(&self) -> CatalogResult<Vec<JournalEntry>> {
        self.entries
            .lock()
            .iter()
            .enumerate()
            .map(|(i, bytes)| JournalRecord::decode(i as u64 + 1, bytes))
            .collect()
    }

    fn len(&self) -> CatalogResult<usize> {
        Ok(self.entries.lock().len())
    }

    fn flush(&self) -> CatalogResult<()> {
        Ok(())
    }

    fn storage_type(&self) -> JournalStorageType {
        JournalStorageType::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::CatalogError;

    fn drop_op(name: &str) -> JournalOp {
        JournalOp::DropCatalog {
            catalog_id: 1,
            catalog_name: name.to_string(),
        }
    }

    #[test]
    fn test_sequences_start_at_one() {
        let journal = MemoryJournal::new();
        assert!(journal.is_empty().unwrap());
        assert_eq!(journal.append(drop_op("a")).unwrap(), 1);
        assert_eq!(journal.append(drop_op("b")).unwrap(), 2);

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].sequence, 2);
        assert_eq!(entries[1].op.catalog_name(), "b");
    }

    #[test]
    fn test_corrupted_entry_fails_read() {
        let journal = MemoryJournal::new();
        journal.append(drop_op("a")).unwrap();
        journal.raw_entry_mut(1, |bytes| bytes[0] ^= 0x01);
        assert!(matches!(journal.entries(), Err(CatalogError::Journal(_))));
    }
}
