// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sled journal backend

use super::types::{
    sequence_from_key, sequence_key, JournalEntry, JournalOp, JournalRecord, JournalStorageType,
};
use super::CatalogJournal;
use crate::catalog::error::{CatalogError, CatalogResult};
use parking_lot::Mutex;
use std::path::Path;

const JOURNAL_TREE: &str = "catalog_journal";

/// Journal stored in a sled tree keyed by big-endian sequence number
pub struct SledJournal {
    db: sled::Db,
    tree: sled::Tree,
    /// Last sequence handed out; appends are serialized through this lock
    last_sequence: Mutex<u64>,
}

fn backend_error(e: sled::Error) -> CatalogError {
    CatalogError::Journal(e.to_string())
}

impl SledJournal {
    pub fn open<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let db = sled::open(path.as_ref()).map_err(backend_error)?;
        let tree = db.open_tree(JOURNAL_TREE).map_err(backend_error)?;
        let last_sequence = match tree.last().map_err(backend_error)? {
            Some((key, _)) => sequence_from_key(&key)?,
            None => 0,
        };
        log::debug!(
            "Opened catalog journal at {} (last sequence {})",
            path.as_ref().display(),
            last_sequence
        );
        Ok(Self {
            db,
            tree,
            last_sequence: Mutex::new(last_sequence),
        })
    }
}

impl CatalogJournal for SledJournal {
    fn append(&self, op: JournalOp) -> CatalogResult<u64> {
        let bytes = JournalRecord::new(op).encode()?;
        let mut last = self.last_sequence.lock();
        let sequence = *last + 1;
        self.tree
            .insert(sequence_key(sequence), bytes)
            .map_err(backend_error)?;
        *last = sequence;
        Ok(sequence)
    }

    fn entries(&self) -> CatalogResult<Vec<JournalEntry>> {
        self.tree
            .iter()
            .map(|item| {
                let (key, value) = item.map_err(backend_error)?;
                JournalRecord::decode(sequence_from_key(&key)?, &value)
            })
            .collect()
    }

    fn len(&self) -> CatalogResult<usize> {
        Ok(self.tree.len())
    }

    fn flush(&self) -> CatalogResult<()> {
        self.db.flush().map_err(backend_error)?;
        Ok(())
    }

    fn storage_type(&self) -> JournalStorageType {
        JournalStorageType::Sled
    }
}
