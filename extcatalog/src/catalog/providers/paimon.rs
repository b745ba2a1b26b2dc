// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Paimon catalog

use super::hms::check_metastore_uris;
use super::{HIVE_METASTORE_URIS, PAIMON, REST_URI, WAREHOUSE};
use crate::catalog::base::{require_properties, CatalogBase};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;
use std::fmt;

pub const PAIMON_CATALOG_TYPE: &str = "paimon.catalog.type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaimonFlavor {
    Filesystem,
    Hms,
    Dlf,
    Rest,
}

impl PaimonFlavor {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "filesystem" => Some(PaimonFlavor::Filesystem),
            "hms" => Some(PaimonFlavor::Hms),
            "dlf" => Some(PaimonFlavor::Dlf),
            "rest" => Some(PaimonFlavor::Rest),
            _ => None,
        }
    }
}

impl fmt::Display for PaimonFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaimonFlavor::Filesystem => "filesystem",
            PaimonFlavor::Hms => "hms",
            PaimonFlavor::Dlf => "dlf",
            PaimonFlavor::Rest => "rest",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct PaimonExternalCatalog {
    base: CatalogBase,
    flavor: PaimonFlavor,
}

impl PaimonExternalCatalog {
    pub fn flavor(&self) -> PaimonFlavor {
        self.flavor
    }
}

impl ExternalCatalog for PaimonExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        PAIMON
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn set_default_props_if_missing(&mut self, replay: bool) {
        self.base.set_common_defaults(replay);
        let flavor = self.flavor.to_string();
        self.base.default_prop(PAIMON_CATALOG_TYPE, &flavor);
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;
        let props = self.base.properties();
        require_properties(PAIMON, props, &[WAREHOUSE])?;
        match self.flavor {
            PaimonFlavor::Hms => check_metastore_uris(PAIMON, props.get(HIVE_METASTORE_URIS)),
            PaimonFlavor::Rest => require_properties(PAIMON, props, &[REST_URI]),
            PaimonFlavor::Filesystem | PaimonFlavor::Dlf => Ok(()),
        }
    }
}

pub struct PaimonCatalogProvider;

impl CatalogProvider for PaimonCatalogProvider {
    fn catalog_type(&self) -> &str {
        PAIMON
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        let flavor = match spec.properties.get_non_empty(PAIMON_CATALOG_TYPE) {
            None => PaimonFlavor::Filesystem,
            Some(raw) => PaimonFlavor::parse(raw).ok_or_else(|| {
                CatalogError::invalid_config(
                    PAIMON,
                    format!("Unknown {} value: {}", PAIMON_CATALOG_TYPE, raw),
                )
            })?,
        };
        Ok(Box::new(PaimonExternalCatalog {
            base: CatalogBase::new(PAIMON, spec),
            flavor,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::properties::PropertySet;

    fn build(props: PropertySet) -> CatalogResult<Box<dyn ExternalCatalog>> {
        PaimonCatalogProvider.construct(CatalogSpec {
            id: 5,
            name: "paimon".to_string(),
            resource: None,
            properties: props,
            comment: None,
        })
    }

    #[test]
    fn test_flavor_defaults_to_filesystem() {
        let mut catalog = build(PropertySet::new().with(WAREHOUSE, "s3://bucket/wh")).unwrap();
        catalog.set_default_props_if_missing(false);
        assert_eq!(catalog.properties().get(PAIMON_CATALOG_TYPE), Some("filesystem"));
        catalog.check_when_creating().unwrap();
    }

    #[test]
    fn test_unknown_flavor_rejected() {
        assert!(build(PropertySet::new().with(PAIMON_CATALOG_TYPE, "jdbc")).is_err());
    }

    #[test]
    fn test_check_requires_warehouse_and_flavor_keys() {
        let catalog = build(PropertySet::new()).unwrap();
        assert!(catalog.check_when_creating().is_err());

        let hms = build(
            PropertySet::new()
                .with(PAIMON_CATALOG_TYPE, "hms")
                .with(WAREHOUSE, "hdfs://nn/paimon"),
        )
        .unwrap();
        assert!(hms.check_when_creating().is_err());

        let hms = build(
            PropertySet::new()
                .with(PAIMON_CATALOG_TYPE, "hms")
                .with(WAREHOUSE, "hdfs://nn/paimon")
                .with(HIVE_METASTORE_URIS, "thrift://hms:9083"),
        )
        .unwrap();
        hms.check_when_creating().unwrap();
        let paimon = hms.as_any().downcast_ref::<PaimonExternalCatalog>().unwrap();
        assert_eq!(paimon.flavor(), PaimonFlavor::Hms);
    }
}
