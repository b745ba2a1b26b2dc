// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Inputs to the two catalog construction paths
//!
//! [`CreateCatalogCommand`] feeds the live path; [`CatalogLog`] is the record
//! persisted after a successful creation and fed back on replay.

use super::properties::PropertySet;
use super::traits::{CatalogId, ExternalCatalog};
use serde::{Deserialize, Serialize};

/// A `CREATE CATALOG` request as handed over by the statement layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCatalogCommand {
    pub catalog_name: String,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: PropertySet,
    #[serde(default)]
    pub if_not_exists: bool,
}

impl CreateCatalogCommand {
    pub fn new(catalog_name: impl Into<String>, properties: PropertySet) -> Self {
        Self {
            catalog_name: catalog_name.into(),
            properties,
            ..Default::default()
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// Persisted record of a created catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLog {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub resource: Option<String>,
    pub comment: Option<String>,
    pub props: PropertySet,
}

impl CatalogLog {
    /// Capture a built catalog, defaults included, so that replay reproduces
    /// the effective configuration rather than the user's original input
    pub fn from_catalog(catalog: &dyn ExternalCatalog) -> Self {
        Self {
            catalog_id: catalog.id(),
            catalog_name: catalog.name().to_string(),
            resource: catalog.resource().map(str::to_string),
            comment: catalog.comment().map(str::to_string),
            props: catalog.properties().clone(),
        }
    }
}
