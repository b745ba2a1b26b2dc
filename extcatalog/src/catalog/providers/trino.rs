// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Trino connector catalog
//!
//! Wraps an arbitrary Trino connector. Everything under `trino.` is handed to
//! the connector with the prefix stripped.

use super::TRINO_CONNECTOR;
use crate::catalog::base::{require_properties, CatalogBase};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::properties::PropertySet;
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;

pub const CONNECTOR_NAME: &str = "trino.connector.name";
pub const TRINO_PREFIX: &str = "trino.";

#[derive(Debug)]
pub struct TrinoConnectorExternalCatalog {
    base: CatalogBase,
}

impl TrinoConnectorExternalCatalog {
    pub fn connector_name(&self) -> &str {
        self.base.properties().get_or(CONNECTOR_NAME, "")
    }

    /// Properties forwarded to the connector, `connector.name` excluded
    pub fn connector_properties(&self) -> PropertySet {
        let mut props = self.base.properties().with_prefix(TRINO_PREFIX);
        props.remove("connector.name");
        props
    }
}

impl ExternalCatalog for TrinoConnectorExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        TRINO_CONNECTOR
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;
        let name = self.connector_name();
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(CatalogError::invalid_config(
                TRINO_CONNECTOR,
                format!("invalid connector name '{}'", name),
            ));
        }
        Ok(())
    }
}

pub struct TrinoConnectorCatalogProvider;

impl CatalogProvider for TrinoConnectorCatalogProvider {
    fn catalog_type(&self) -> &str {
        TRINO_CONNECTOR
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        require_properties(TRINO_CONNECTOR, &spec.properties, &[CONNECTOR_NAME])?;
        Ok(Box::new(TrinoConnectorExternalCatalog {
            base: CatalogBase::new(TRINO_CONNECTOR, spec),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(props: PropertySet) -> CatalogResult<Box<dyn ExternalCatalog>> {
        TrinoConnectorCatalogProvider.construct(CatalogSpec {
            id: 6,
            name: "kafka".to_string(),
            resource: None,
            properties: props,
            comment: None,
        })
    }

    #[test]
    fn test_connector_name_required() {
        assert!(build(PropertySet::new()).is_err());
    }

    #[test]
    fn test_connector_properties_forwarded() {
        let catalog = build(
            PropertySet::new()
                .with(CONNECTOR_NAME, "kafka")
                .with("trino.kafka.nodes", "broker:9092")
                .with("use_meta_cache", "true"),
        )
        .unwrap();
        catalog.check_when_creating().unwrap();

        let trino = catalog
            .as_any()
            .downcast_ref::<TrinoConnectorExternalCatalog>()
            .unwrap();
        assert_eq!(trino.connector_name(), "kafka");
        let forwarded = trino.connector_properties();
        assert_eq!(forwarded.len(), 1);
        assert_eq!(forwarded.get("kafka.nodes"), Some("broker:9092"));
    }

    #[test]
    fn test_bad_connector_name() {
        let catalog = build(PropertySet::new().with(CONNECTOR_NAME, "kafka;drop")).unwrap();
        assert!(catalog.check_when_creating().is_err());
    }
}
