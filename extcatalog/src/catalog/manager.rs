// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog manager - owner of the live catalog map
//!
//! The manager is the caller the builder assumes: it allocates catalog ids,
//! inserts successfully built catalogs under a unique name, records every
//! change in the journal, and rebuilds its state from the journal on startup.

use super::access::AccessController;
use super::builder::CatalogBuilder;
use super::error::{CatalogError, CatalogResult};
use super::catalog_log::{CatalogLog, CreateCatalogCommand};
use super::traits::{CatalogId, ExternalCatalog};
use crate::journal::{CatalogJournal, JournalOp};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Summary of a journal replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub total_entries: usize,
    pub created: usize,
    pub dropped: usize,
}

pub struct CatalogManager {
    builder: CatalogBuilder,
    journal: Arc<dyn CatalogJournal>,
    /// Catalogs by name
    catalogs: RwLock<HashMap<String, Arc<dyn ExternalCatalog>>>,
    next_id: AtomicU64,
}

impl CatalogManager {
    /// Create a manager and rebuild its catalogs from `journal`
    ///
    /// Any entry that fails to replay aborts startup: skipping it would leave
    /// the catalog view silently different from what was acknowledged.
    pub fn open(
        builder: CatalogBuilder,
        journal: Arc<dyn CatalogJournal>,
    ) -> CatalogResult<(Self, ReplayReport)> {
        let manager = Self {
            builder,
            journal,
            catalogs: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        };
        let report = manager.replay()?;
        Ok((manager, report))
    }

    fn replay(&self) -> CatalogResult<ReplayReport> {
        let mut report = ReplayReport::default();
        let mut catalogs = self.catalogs.write();
        let mut max_id: CatalogId = 0;

        for entry in self.journal.entries()? {
            report.total_entries += 1;
            let sequence = entry.sequence;
            let wrap = |cause: CatalogError| CatalogError::Replay {
                sequence,
                cause: Box::new(cause),
            };

            match entry.op {
                JournalOp::CreateCatalog(catalog_log) => {
                    let catalog = self.builder.create_from_log(&catalog_log).map_err(wrap)?;
                    max_id = max_id.max(catalog.id());
                    if catalogs
                        .insert(catalog_log.catalog_name.clone(), Arc::from(catalog))
                        .is_some()
                    {
                        log::warn!(
                            "Journal entry {} replaced existing catalog '{}'",
                            sequence,
                            catalog_log.catalog_name
                        );
                    }
                    report.created += 1;
                }
                JournalOp::DropCatalog {
                    catalog_id,
                    catalog_name,
                } => {
                    max_id = max_id.max(catalog_id);
                    if catalogs.remove(&catalog_name).is_none() {
                        log::warn!(
                            "Journal entry {} drops unknown catalog '{}'",
                            sequence,
                            catalog_name
                        );
                    }
                    report.dropped += 1;
                }
            }
        }

        self.next_id.store(max_id + 1, Ordering::SeqCst);
        log::info!(
            "Replayed {} journal entries: {} created, {} dropped, {} catalogs live",
            report.total_entries,
            report.created,
            report.dropped,
            catalogs.len()
        );
        Ok(report)
    }

    /// Create, journal and register a catalog
    ///
    /// # Returns
    /// * `Ok(Some(catalog))` if the catalog was created
    /// * `Ok(None)` if it already existed and `if_not_exists` was set
    /// * `Err(CatalogError)` if the name is taken, the builder rejected it or
    ///   the journal append failed; nothing is registered in that case
    ///
    /// A successful append commits the catalog. A later flush failure is
    /// logged but does not undo the registration, since the entry is already
    /// in the journal and will replay.
    pub fn create_catalog(
        &self,
        cmd: &CreateCatalogCommand,
    ) -> CatalogResult<Option<Arc<dyn ExternalCatalog>>> {
        if self.name_taken(cmd)? {
            return Ok(None);
        }

        let catalog_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let catalog: Arc<dyn ExternalCatalog> =
            Arc::from(self.builder.create_from_command(catalog_id, cmd)?);

        // Another caller may have registered the name while we were building
        let mut catalogs = self.catalogs.write();
        if catalogs.contains_key(&cmd.catalog_name) {
            return if cmd.if_not_exists {
                Ok(None)
            } else {
                Err(CatalogError::CatalogAlreadyExists(cmd.catalog_name.clone()))
            };
        }

        let sequence = self
            .journal
            .append(JournalOp::CreateCatalog(CatalogLog::from_catalog(
                catalog.as_ref(),
            )))?;
        catalogs.insert(cmd.catalog_name.clone(), catalog.clone());
        self.flush_after_commit(sequence);

        log::info!(
            "Created catalog '{}' (id {}, type {}, journal seq {})",
            catalog.name(),
            catalog.id(),
            catalog.catalog_type(),
            sequence
        );
        Ok(Some(catalog))
    }

    fn name_taken(&self, cmd: &CreateCatalogCommand) -> CatalogResult<bool> {
        if !self.catalogs.read().contains_key(&cmd.catalog_name) {
            return Ok(false);
        }
        if cmd.if_not_exists {
            log::debug!("Catalog '{}' already exists, skipping", cmd.catalog_name);
            Ok(true)
        } else {
            Err(CatalogError::CatalogAlreadyExists(cmd.catalog_name.clone()))
        }
    }

    /// Drop a catalog by name
    ///
    /// Returns `Ok(false)` if the catalog did not exist and `if_exists` was set.
    /// Like creation, the drop is committed once the journal append succeeds.
    pub fn drop_catalog(&self, name: &str, if_exists: bool) -> CatalogResult<bool> {
        let mut catalogs = self.catalogs.write();
        let catalog_id = match catalogs.get(name) {
            Some(catalog) => catalog.id(),
            None if if_exists => return Ok(false),
            None => return Err(CatalogError::CatalogNotFound(name.to_string())),
        };

        let sequence = self.journal.append(JournalOp::DropCatalog {
            catalog_id,
            catalog_name: name.to_string(),
        })?;
        catalogs.remove(name);
        self.flush_after_commit(sequence);
        log::info!("Dropped catalog '{}' (id {})", name, catalog_id);
        Ok(true)
    }

    /// The entry at `sequence` is appended, so the in-memory view already
    /// matches what a replay would produce. A failed flush only affects
    /// durability.
    fn flush_after_commit(&self, sequence: u64) {
        if let Err(e) = self.journal.flush() {
            log::error!(
                "Journal flush failed after committing entry {}: {}",
                sequence,
                e
            );
        }
    }

    pub fn get_catalog(&self, name: &str) -> Option<Arc<dyn ExternalCatalog>> {
        self.catalogs.read().get(name).cloned()
    }

    pub fn has_catalog(&self, name: &str) -> bool {
        self.catalogs.read().contains_key(name)
    }

    /// All live catalogs, ordered by name
    pub fn list_catalogs(&self) -> Vec<Arc<dyn ExternalCatalog>> {
        let mut catalogs: Vec<Arc<dyn ExternalCatalog>> =
            self.catalogs.read().values().cloned().collect();
        catalogs.sort_by(|a, b| a.name().cmp(b.name()));
        catalogs
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.read().len()
    }

    /// Access controller of a catalog, initializing it on first use
    ///
    /// Replayed catalogs never ran strict initialization, so they get a
    /// lenient one here.
    pub fn access_controller(&self, name: &str) -> CatalogResult<Arc<dyn AccessController>> {
        let catalog = self
            .get_catalog(name)
            .ok_or_else(|| CatalogError::CatalogNotFound(name.to_string()))?;
        if let Some(controller) = catalog.access_controller() {
            return Ok(controller);
        }
        catalog.init_access_controller(self.builder.access_controllers(), false)?;
        catalog.access_controller().ok_or_else(|| {
            CatalogError::AccessControllerInit {
                catalog: name.to_string(),
                cause: "controller missing after initialization".to_string(),
            }
        })
    }

    pub fn builder(&self) -> &CatalogBuilder {
        &self.builder
    }

    pub fn journal(&self) -> &Arc<dyn CatalogJournal> {
        &self.journal
    }
}
