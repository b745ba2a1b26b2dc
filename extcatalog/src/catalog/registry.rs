// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog provider registry
//!
//! Maps a catalog type tag to the provider that constructs it. The registry is
//! populated once at startup and then shared read-only behind an `Arc`, so
//! lookups from concurrent callers take no lock.

use super::error::{CatalogError, CatalogResult};
use super::providers;
use super::traits::CatalogProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of catalog providers keyed by lower-cased type tag
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn CatalogProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in provider
    pub fn with_builtin_providers() -> Self {
        let mut registry = Self::new();
        providers::register_builtin_providers(&mut registry);
        registry
    }

    /// Register a provider under its type tag
    ///
    /// # Returns
    /// * `Ok(())` if the tag was free
    /// * `Err(CatalogError::DuplicateProvider)` if a provider already owns the tag
    pub fn register(&mut self, provider: Arc<dyn CatalogProvider>) -> CatalogResult<()> {
        let tag = provider.catalog_type().to_lowercase();
        if self.providers.contains_key(&tag) {
            return Err(CatalogError::DuplicateProvider(tag));
        }
        log::info!("Registered catalog provider: {}", tag);
        self.providers.insert(tag, provider);
        Ok(())
    }

    /// Look up the provider for a tag, ignoring case
    pub fn get(&self, catalog_type: &str) -> Option<&Arc<dyn CatalogProvider>> {
        self.providers.get(&catalog_type.to_lowercase())
    }

    pub fn contains(&self, catalog_type: &str) -> bool {
        self.get(catalog_type).is_some()
    }

    /// Registered tags, sorted
    pub fn catalog_types(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.providers.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_builtin_providers()
    }
}
