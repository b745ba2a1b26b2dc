// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Hive metastore catalog
//!
//! This is also the type a catalog falls back to when its legacy resource no
//! longer exists, so construction accepts an empty property set and the
//! metastore address is only enforced when a catalog is created.

use super::{HIVE_METASTORE_URIS, HMS};
use crate::catalog::base::CatalogBase;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use once_cell::sync::Lazy;
use regex::Regex;
use std::any::Any;

pub const METASTORE_TYPE: &str = "hive.metastore.type";
pub const FALLBACK_TO_SIMPLE_AUTH: &str = "ipc.client.fallback-to-simple-auth-allowed";

const METASTORE_TYPES: &[&str] = &["hms", "glue", "dlf"];

static THRIFT_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^thrift://[A-Za-z0-9._\-]+:\d{1,5}$").expect("valid regex"));

#[derive(Debug)]
pub struct HmsExternalCatalog {
    base: CatalogBase,
}

impl HmsExternalCatalog {
    pub fn metastore_type(&self) -> &str {
        self.base.properties().get_or(METASTORE_TYPE, "hms")
    }

    /// Configured metastore URIs, split on commas
    pub fn metastore_uris(&self) -> Vec<&str> {
        split_uris(self.base.properties().get(HIVE_METASTORE_URIS).unwrap_or(""))
    }
}

/// Split a comma separated URI list, dropping blanks
pub(crate) fn split_uris(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .collect()
}

/// Validate a `hive.metastore.uris` value for `catalog_type`
pub(crate) fn check_metastore_uris(catalog_type: &str, raw: Option<&str>) -> CatalogResult<()> {
    let uris = split_uris(raw.unwrap_or(""));
    if uris.is_empty() {
        return Err(CatalogError::invalid_config(
            catalog_type,
            format!("{} is required", HIVE_METASTORE_URIS),
        ));
    }
    if let Some(bad) = uris.iter().find(|u| !THRIFT_URI.is_match(u)) {
        return Err(CatalogError::invalid_config(
            catalog_type,
            format!("invalid metastore uri '{}', expected thrift://host:port", bad),
        ));
    }
    Ok(())
}

impl ExternalCatalog for HmsExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        HMS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn set_default_props_if_missing(&mut self, replay: bool) {
        self.base.set_common_defaults(replay);
        self.base.default_prop(FALLBACK_TO_SIMPLE_AUTH, "true");
        self.base.default_prop(METASTORE_TYPE, "hms");
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;

        let metastore_type = self.metastore_type().to_lowercase();
        if !METASTORE_TYPES.contains(&metastore_type.as_str()) {
            return Err(CatalogError::invalid_config(
                HMS,
                format!(
                    "unsupported {} '{}', expected one of: {}",
                    METASTORE_TYPE,
                    metastore_type,
                    METASTORE_TYPES.join(", ")
                ),
            ));
        }
        if metastore_type == "hms" {
            check_metastore_uris(HMS, self.base.properties().get(HIVE_METASTORE_URIS))?;
        }
        Ok(())
    }
}

pub struct HmsCatalogProvider;

impl CatalogProvider for HmsCatalogProvider {
    fn catalog_type(&self) -> &str {
        HMS
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        Ok(Box::new(HmsExternalCatalog {
            base: CatalogBase::new(HMS, spec),
        }))
    }
}
