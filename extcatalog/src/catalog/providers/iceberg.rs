// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Iceberg catalog
//!
//! Iceberg tables can be tracked by several kinds of catalog service. The
//! flavor is selected by `iceberg.catalog.type` and fixed at construction.

use super::hms::check_metastore_uris;
use super::{HIVE_METASTORE_URIS, ICEBERG, REST_URI, WAREHOUSE};
use crate::catalog::base::{require_properties, CatalogBase};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;
use std::fmt;

pub const ICEBERG_CATALOG_TYPE: &str = "iceberg.catalog.type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcebergFlavor {
    Hms,
    Rest,
    Hadoop,
    Glue,
    Dlf,
    S3Tables,
}

impl IcebergFlavor {
    const ALL: [IcebergFlavor; 6] = [
        IcebergFlavor::Hms,
        IcebergFlavor::Rest,
        IcebergFlavor::Hadoop,
        IcebergFlavor::Glue,
        IcebergFlavor::Dlf,
        IcebergFlavor::S3Tables,
    ];

    fn parse(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|f| f.to_string() == lower)
    }
}

impl fmt::Display for IcebergFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IcebergFlavor::Hms => "hms",
            IcebergFlavor::Rest => "rest",
            IcebergFlavor::Hadoop => "hadoop",
            IcebergFlavor::Glue => "glue",
            IcebergFlavor::Dlf => "dlf",
            IcebergFlavor::S3Tables => "s3tables",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct IcebergExternalCatalog {
    base: CatalogBase,
    flavor: IcebergFlavor,
}

impl IcebergExternalCatalog {
    pub fn flavor(&self) -> IcebergFlavor {
        self.flavor
    }
}

impl ExternalCatalog for IcebergExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        ICEBERG
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;
        let props = self.base.properties();
        match self.flavor {
            IcebergFlavor::Hms => check_metastore_uris(ICEBERG, props.get(HIVE_METASTORE_URIS)),
            IcebergFlavor::Rest => require_properties(ICEBERG, props, &[REST_URI]),
            IcebergFlavor::Hadoop | IcebergFlavor::S3Tables => {
                require_properties(ICEBERG, props, &[WAREHOUSE])
            }
            IcebergFlavor::Glue | IcebergFlavor::Dlf => Ok(()),
        }
    }
}

pub struct IcebergCatalogProvider;

impl CatalogProvider for IcebergCatalogProvider {
    fn catalog_type(&self) -> &str {
        ICEBERG
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        let raw = spec
            .properties
            .get_non_empty(ICEBERG_CATALOG_TYPE)
            .ok_or_else(|| {
                CatalogError::invalid_config(ICEBERG, format!("Missing {}", ICEBERG_CATALOG_TYPE))
            })?;
        let flavor = IcebergFlavor::parse(raw).ok_or_else(|| {
            CatalogError::invalid_config(
                ICEBERG,
                format!("Unknown {} value: {}", ICEBERG_CATALOG_TYPE, raw),
            )
        })?;
        log::debug!("Constructing iceberg catalog '{}' ({})", spec.name, flavor);
        Ok(Box::new(IcebergExternalCatalog {
            base: CatalogBase::new(ICEBERG, spec),
            flavor,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::properties::PropertySet;

    fn build(props: PropertySet) -> CatalogResult<Box<dyn ExternalCatalog>> {
        IcebergCatalogProvider.construct(CatalogSpec {
            id: 4,
            name: "ice".to_string(),
            resource: None,
            properties: props,
            comment: None,
        })
    }

    fn flavor_of(catalog: &dyn ExternalCatalog) -> IcebergFlavor {
        catalog
            .as_any()
            .downcast_ref::<IcebergExternalCatalog>()
            .unwrap()
            .flavor()
    }

    #[test]
    fn test_flavor_required_and_validated() {
        assert!(build(PropertySet::new()).is_err());
        assert!(build(PropertySet::new().with(ICEBERG_CATALOG_TYPE, "nessie")).is_err());

        let catalog = build(PropertySet::new().with(ICEBERG_CATALOG_TYPE, "REST")).unwrap();
        assert_eq!(flavor_of(catalog.as_ref()), IcebergFlavor::Rest);
    }

    #[test]
    fn test_check_per_flavor() {
        let rest = build(PropertySet::new().with(ICEBERG_CATALOG_TYPE, "rest")).unwrap();
        assert!(rest.check_when_creating().is_err());

        let rest = build(
            PropertySet::new()
                .with(ICEBERG_CATALOG_TYPE, "rest")
                .with(REST_URI, "http://rest:8181"),
        )
        .unwrap();
        rest.check_when_creating().unwrap();

        let hadoop = build(
            PropertySet::new()
                .with(ICEBERG_CATALOG_TYPE, "hadoop")
                .with(WAREHOUSE, "hdfs://nn/warehouse"),
        )
        .unwrap();
        hadoop.check_when_creating().unwrap();

        let hms = build(PropertySet::new().with(ICEBERG_CATALOG_TYPE, "hms")).unwrap();
        assert!(hms.check_when_creating().is_err());

        let glue = build(PropertySet::new().with(ICEBERG_CATALOG_TYPE, "glue")).unwrap();
        glue.check_when_creating().unwrap();
    }
}
