// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Legacy resource lookup
//!
//! Older catalogs inherit their type from a separately managed named resource
//! instead of carrying a `type` property. The builder only needs to resolve a
//! resource name to its declared type, which is what [`ResourceResolver`]
//! exposes. [`ResourceManager`] is the in-process implementation.

use super::error::{CatalogError, CatalogResult};
use super::properties::PropertySet;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Declared type of a legacy resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Hms,
    Es,
    Jdbc,
    S3,
    Hdfs,
    Spark,
    OdbcCatalog,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Hms => "hms",
            ResourceType::Es => "es",
            ResourceType::Jdbc => "jdbc",
            ResourceType::S3 => "s3",
            ResourceType::Hdfs => "hdfs",
            ResourceType::Spark => "spark",
            ResourceType::OdbcCatalog => "odbc_catalog",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hms" => Ok(ResourceType::Hms),
            "es" => Ok(ResourceType::Es),
            "jdbc" => Ok(ResourceType::Jdbc),
            "s3" => Ok(ResourceType::S3),
            "hdfs" => Ok(ResourceType::Hdfs),
            "spark" => Ok(ResourceType::Spark),
            "odbc_catalog" => Ok(ResourceType::OdbcCatalog),
            _ => Err(format!("Unknown resource type: {}", s)),
        }
    }
}

/// A named resource as seen by the catalog builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    pub resource_type: ResourceType,
    #[serde(default)]
    pub properties: PropertySet,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            name: name.into(),
            resource_type,
            properties: PropertySet::new(),
        }
    }

    pub fn with_properties(mut self, properties: PropertySet) -> Self {
        self.properties = properties;
        self
    }
}

/// Resolves a resource name to its descriptor
///
/// Implementations may block (a remote resource service, for instance).
/// `None` means the resource does not exist.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<ResourceDescriptor>;
}

/// In-memory resource registry
#[derive(Default)]
pub struct ResourceManager {
    resources: RwLock<HashMap<String, ResourceDescriptor>>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager pre-populated with `resources`, rejecting duplicates
    pub fn from_descriptors(
        resources: impl IntoIterator<Item = ResourceDescriptor>,
    ) -> CatalogResult<Self> {
        let manager = Self::new();
        for resource in resources {
            manager.add(resource)?;
        }
        Ok(manager)
    }

    pub fn add(&self, resource: ResourceDescriptor) -> CatalogResult<()> {
        let mut resources = self.resources.write();
        if resources.contains_key(&resource.name) {
            return Err(CatalogError::Config(format!(
                "Resource already exists: {}",
                resource.name
            )));
        }
        log::debug!(
            "Added resource '{}' of type {}",
            resource.name,
            resource.resource_type
        );
        resources.insert(resource.name.clone(), resource);
        Ok(())
    }

    pub fn remove(&self, name: &str) -> Option<ResourceDescriptor> {
        self.resources.write().remove(name)
    }

    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }
}

impl ResourceResolver for ResourceManager {
    fn resolve(&self, name: &str) -> Option<ResourceDescriptor> {
        self.resources.read().get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_display_is_lowercase() {
        assert_eq!(ResourceType::Hms.to_string(), "hms");
        assert_eq!(ResourceType::OdbcCatalog.to_string(), "odbc_catalog");
        assert_eq!("JDBC".parse::<ResourceType>(), Ok(ResourceType::Jdbc));
        assert!("oss".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_manager_resolve_and_remove() {
        let manager = ResourceManager::new();
        manager
            .add(ResourceDescriptor::new("es_res", ResourceType::Es))
            .unwrap();

        let resolved = manager.resolve("es_res").unwrap();
        assert_eq!(resolved.resource_type, ResourceType::Es);
        assert!(manager.resolve("missing").is_none());

        manager.remove("es_res");
        assert!(manager.resolve("es_res").is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_manager_rejects_duplicates() {
        let result = ResourceManager::from_descriptors(vec![
            ResourceDescriptor::new("r", ResourceType::Hms),
            ResourceDescriptor::new("r", ResourceType::Jdbc),
        ]);
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }
}
