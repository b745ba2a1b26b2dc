// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! External catalog and catalog provider traits
//!
//! A [`CatalogProvider`] is the constructor capability registered for one
//! catalog type tag. The [`ExternalCatalog`] it returns carries the three
//! lifecycle hooks the builder drives: default injection, creation-time
//! validation, and access-controller initialization.

use super::access::{AccessController, AccessControllerRegistry};
use super::base::CatalogBase;
use super::error::CatalogResult;
use super::properties::PropertySet;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

pub type CatalogId = u64;

/// Everything a provider receives to construct a catalog
#[derive(Debug, Clone)]
pub struct CatalogSpec {
    pub id: CatalogId,
    pub name: String,
    /// Legacy resource name, kept on the catalog even when it did not resolve
    pub resource: Option<String>,
    pub properties: PropertySet,
    pub comment: Option<String>,
}

/// Constructor capability for one catalog type
///
/// Implementing this trait and registering it in a
/// [`ProviderRegistry`](super::registry::ProviderRegistry) is all that is needed
/// to add a new connector type; the builder's dispatch does not change.
pub trait CatalogProvider: Send + Sync {
    /// Type tag this provider answers to. Matched case-insensitively.
    fn catalog_type(&self) -> &str;

    /// Providers that must never be reachable outside automated tests
    fn requires_test_mode(&self) -> bool {
        false
    }

    /// Build the catalog, rejecting properties the type cannot work with
    ///
    /// # Returns
    /// * `Ok(Box<dyn ExternalCatalog>)` on success
    /// * `Err(CatalogError::InvalidConfiguration)` if the properties are unusable
    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>>;
}

/// One registered external data source
///
/// Implementors embed a [`CatalogBase`] and expose it through [`Self::base`]
/// and [`Self::base_mut`]; the accessors and the default hook
/// implementations are written against it.
pub trait ExternalCatalog: Send + Sync + Debug {
    fn base(&self) -> &CatalogBase;

    fn base_mut(&mut self) -> &mut CatalogBase;

    fn catalog_type(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn id(&self) -> CatalogId {
        self.base().id()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn properties(&self) -> &PropertySet {
        self.base().properties()
    }

    fn comment(&self) -> Option<&str> {
        self.base().comment()
    }

    fn resource(&self) -> Option<&str> {
        self.base().resource()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base().created_at()
    }

    /// Fill in defaults for keys the user did not set
    ///
    /// Runs on both the creation and the replay path. `replay` lets a catalog
    /// keep what was logged instead of recomputing values whose defaults have
    /// changed since.
    fn set_default_props_if_missing(&mut self, replay: bool) {
        self.base_mut().set_common_defaults(replay);
    }

    /// Semantic validation, only run when a catalog is first created
    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base().check_common_properties()
    }

    /// Instantiate the configured access controller
    ///
    /// With `enforce` a failure is returned to the caller; without it the
    /// failure is logged and the default controller is installed instead.
    fn init_access_controller(
        &self,
        controllers: &AccessControllerRegistry,
        enforce: bool,
    ) -> CatalogResult<()> {
        self.base().init_access_controller(controllers, enforce)
    }

    fn access_controller(&self) -> Option<Arc<dyn AccessController>> {
        self.base().access_controller()
    }
}
