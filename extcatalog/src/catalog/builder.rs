// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog builder
//!
//! Turns a creation request or a replayed log entry into a catalog object:
//!
//! 1. resolve the type tag, from the legacy resource or the `type` property
//! 2. look up and invoke the provider
//! 3. inject default properties (both paths)
//! 4. on the live path only, run `check_when_creating` and then initialize the
//!    access controller
//!
//! A catalog that fails any step after construction is dropped here and never
//! reaches the caller.

use super::access::AccessControllerRegistry;
use super::error::{CatalogError, CatalogResult};
use super::catalog_log::{CatalogLog, CreateCatalogCommand};
use super::properties::PropertySet;
use super::registry::ProviderRegistry;
use super::resource::{ResourceDescriptor, ResourceManager, ResourceResolver};
use super::traits::{CatalogId, CatalogSpec, ExternalCatalog};
use crate::config::CatalogConfig;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// A single construction request
#[derive(Debug, Clone)]
pub struct CatalogDescriptor {
    pub catalog_id: CatalogId,
    pub name: String,
    pub resource: Option<String>,
    pub comment: Option<String>,
    pub properties: PropertySet,
    pub replay: bool,
}

/// Construction progress, reported in debug logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Resolving,
    Constructed,
    /// Replay path: accepted without validation
    Accepted,
    /// Live path: checks and access control passed
    Validated,
    Discarded,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuildStage::Resolving => "resolving",
            BuildStage::Constructed => "constructed",
            BuildStage::Accepted => "accepted",
            BuildStage::Validated => "validated",
            BuildStage::Discarded => "discarded",
        };
        write!(f, "{}", s)
    }
}

/// Builds catalogs from commands and from replayed log entries
///
/// Holds only immutable, shared collaborators, so one builder can serve
/// concurrent callers.
pub struct CatalogBuilder {
    providers: Arc<ProviderRegistry>,
    resources: Arc<dyn ResourceResolver>,
    access_controllers: Arc<AccessControllerRegistry>,
    test_mode: bool,
    fallback_catalog_type: String,
}

impl CatalogBuilder {
    pub fn new(
        providers: Arc<ProviderRegistry>,
        resources: Arc<dyn ResourceResolver>,
        access_controllers: Arc<AccessControllerRegistry>,
        config: &CatalogConfig,
    ) -> Self {
        Self {
            providers,
            resources,
            access_controllers,
            test_mode: config.test_mode,
            fallback_catalog_type: config.fallback_catalog_type.to_lowercase(),
        }
    }

    /// Builder with the built-in providers and access controllers, and the
    /// legacy resources listed in `config`
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let resources = ResourceManager::from_descriptors(config.resources.iter().cloned())?;
        Ok(Self::new(
            Arc::new(ProviderRegistry::with_builtin_providers()),
            Arc::new(resources),
            Arc::new(AccessControllerRegistry::with_builtin_factories()),
            config,
        ))
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn access_controllers(&self) -> &Arc<AccessControllerRegistry> {
        &self.access_controllers
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Rebuild a catalog from its persisted log entry. Skips validation.
    pub fn create_from_log(&self, log: &CatalogLog) -> CatalogResult<Box<dyn ExternalCatalog>> {
        self.create_catalog(CatalogDescriptor {
            catalog_id: log.catalog_id,
            name: log.catalog_name.clone(),
            resource: log.resource.clone(),
            comment: log.comment.clone(),
            properties: log.props.clone(),
            replay: true,
        })
    }

    /// Build a new catalog for a live creation request
    pub fn create_from_command(
        &self,
        catalog_id: CatalogId,
        cmd: &CreateCatalogCommand,
    ) -> CatalogResult<Box<dyn ExternalCatalog>> {
        self.create_catalog(CatalogDescriptor {
            catalog_id,
            name: cmd.catalog_name.clone(),
            resource: cmd.resource.clone(),
            comment: cmd.comment.clone(),
            properties: cmd.properties.clone(),
            replay: false,
        })
    }

    pub fn create_catalog(
        &self,
        descriptor: CatalogDescriptor,
    ) -> CatalogResult<Box<dyn ExternalCatalog>> {
        if descriptor.name.trim().is_empty() {
            return Err(CatalogError::InvalidName(
                "catalog name must not be empty".to_string(),
            ));
        }

        let name = descriptor.name.clone();
        let replay = descriptor.replay;
        log::debug!("Catalog '{}': {}", name, BuildStage::Resolving);

        let (catalog_type, resource) =
            self.resolve(descriptor.resource.as_deref(), &name, &descriptor.properties)?;
        let mut properties = descriptor.properties;
        if let Some(resource) = resource {
            // Catalog-level keys override the resource's
            for (key, value) in resource.properties.iter() {
                properties.insert_if_absent(key, value);
            }
        }
        let provider = self.providers.get(&catalog_type).ok_or_else(|| {
            CatalogError::UnknownCatalogType {
                tag: catalog_type.clone(),
            }
        })?;
        if provider.requires_test_mode() && !self.test_mode {
            return Err(CatalogError::RestrictedProvider { tag: catalog_type });
        }

        let mut catalog = provider.construct(CatalogSpec {
            id: descriptor.catalog_id,
            name: descriptor.name,
            resource: descriptor.resource,
            properties,
            comment: descriptor.comment,
        })?;
        log::debug!(
            "Catalog '{}': {} as {}",
            name,
            BuildStage::Constructed,
            catalog_type
        );

        catalog.set_default_props_if_missing(replay);

        if replay {
            log::debug!("Catalog '{}': {}", name, BuildStage::Accepted);
            return Ok(catalog);
        }

        if let Err(e) = catalog.check_when_creating() {
            log::debug!("Catalog '{}': {} ({})", name, BuildStage::Discarded, e);
            return Err(CatalogError::CreationValidation {
                catalog: name,
                message: e.to_string(),
            });
        }

        if let Err(cause) = self.init_access_controller(catalog.as_ref()) {
            log::warn!("Failed to init access controller for catalog '{}': {}", name, cause);
            log::debug!("Catalog '{}': {}", name, BuildStage::Discarded);
            return Err(CatalogError::AccessControllerInit {
                catalog: name,
                cause,
            });
        }

        log::debug!("Catalog '{}': {}", name, BuildStage::Validated);
        Ok(catalog)
    }

    /// Work out which provider should build a catalog
    ///
    /// A legacy resource that no longer exists is not an error: the catalog
    /// falls back to the configured type so old log entries keep replaying.
    pub fn resolve_catalog_type(
        &self,
        resource: Option<&str>,
        catalog_name: &str,
        props: &PropertySet,
    ) -> CatalogResult<String> {
        self.resolve(resource, catalog_name, props)
            .map(|(catalog_type, _)| catalog_type)
    }

    fn resolve(
        &self,
        resource: Option<&str>,
        catalog_name: &str,
        props: &PropertySet,
    ) -> CatalogResult<(String, Option<ResourceDescriptor>)> {
        if let Some(resource) = resource.filter(|r| !r.is_empty()) {
            return Ok(match self.resources.resolve(resource) {
                Some(descriptor) => (
                    descriptor.resource_type.to_string().to_lowercase(),
                    Some(descriptor),
                ),
                None => {
                    log::warn!(
                        "Resource doesn't exist: {} when create catalog {}, falling back to '{}'",
                        resource,
                        catalog_name,
                        self.fallback_catalog_type
                    );
                    (self.fallback_catalog_type.clone(), None)
                }
            });
        }

        props
            .catalog_type()
            .map(|t| (t.to_lowercase(), None))
            .ok_or(CatalogError::MissingType)
    }

    /// Strict access-controller init. Errors and panics both come back as
    /// a plain message.
    fn init_access_controller(&self, catalog: &dyn ExternalCatalog) -> Result<(), String> {
        let controllers = self.access_controllers.as_ref();
        match panic::catch_unwind(AssertUnwindSafe(|| {
            catalog.init_access_controller(controllers, true)
        })) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.to_string()),
            Err(payload) => Err(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resource::ResourceType;

    fn builder(resources: ResourceManager) -> CatalogBuilder {
        CatalogBuilder::new(
            Arc::new(ProviderRegistry::with_builtin_providers()),
            Arc::new(resources),
            Arc::new(AccessControllerRegistry::with_builtin_factories()),
            &CatalogConfig::default(),
        )
    }

    #[test]
    fn test_type_from_properties_is_lowercased() {
        let b = builder(ResourceManager::new());
        let props = PropertySet::new().with("type", "Iceberg");
        assert_eq!(b.resolve_catalog_type(None, "c", &props).unwrap(), "iceberg");
    }

    #[test]
    fn test_empty_resource_reads_properties() {
        let b = builder(ResourceManager::new());
        assert_eq!(
            b.resolve_catalog_type(Some(""), "c", &PropertySet::new()),
            Err(CatalogError::MissingType)
        );
    }

    #[test]
    fn test_resource_type_wins_over_property() {
        let resources = ResourceManager::new();
        resources
            .add(ResourceDescriptor::new("es_res", ResourceType::Es))
            .unwrap();
        let b = builder(resources);
        let props = PropertySet::new().with("type", "jdbc");
        assert_eq!(
            b.resolve_catalog_type(Some("es_res"), "c", &props).unwrap(),
            "es"
        );
    }

    #[test]
    fn test_missing_resource_falls_back() {
        let b = builder(ResourceManager::new());
        assert_eq!(
            b.resolve_catalog_type(Some("gone"), "c", &PropertySet::new())
                .unwrap(),
            "hms"
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let b = builder(ResourceManager::new());
        let cmd = CreateCatalogCommand::new(" ", PropertySet::new().with("type", "hms"));
        assert!(matches!(
            b.create_from_command(1, &cmd),
            Err(CatalogError::InvalidName(_))
        ));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
