// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog system configuration

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::providers::HMS;
use crate::catalog::resource::ResourceDescriptor;
use crate::journal::JournalStorageType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Make test-only providers reachable
    pub test_mode: bool,

    /// Type used when a legacy resource no longer resolves
    ///
    /// Defaults to `hms`, the fixed fallback of the catalog log format. Only
    /// change it for deployments whose old log entries named resources of
    /// another type; the value is lowercased and must be a registered type.
    pub fallback_catalog_type: String,

    /// Where the catalog journal lives
    pub journal: JournalConfig,

    /// Legacy resources known at startup
    pub resources: Vec<ResourceDescriptor>,
}

/// Catalog journal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub storage_type: JournalStorageType,
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            test_mode: false,
            fallback_catalog_type: HMS.to_string(),
            journal: JournalConfig::default(),
            resources: Vec::new(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            storage_type: JournalStorageType::default(),
            path: PathBuf::from("./catalog_journal"),
        }
    }
}

impl CatalogConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let config: CatalogConfig = serde_json::from_str(raw)
            .map_err(|e| CatalogError::Config(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.fallback_catalog_type.trim().is_empty() {
            return Err(CatalogError::Config(
                "fallback_catalog_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }
}
