// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! State and behavior shared by every external catalog type

use super::access::{AccessController, AccessControllerRegistry};
use super::error::{CatalogError, CatalogResult};
use super::properties::PropertySet;
use super::traits::{CatalogId, CatalogSpec};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub const USE_META_CACHE: &str = "use_meta_cache";
pub const LOWER_CASE_META_NAMES: &str = "lower_case_meta_names";
pub const ONLY_SPECIFIED_DATABASE: &str = "only_specified_database";
pub const METADATA_REFRESH_INTERVAL_SEC: &str = "metadata_refresh_interval_sec";
pub const INCLUDE_DATABASE_LIST: &str = "include_database_list";
pub const EXCLUDE_DATABASE_LIST: &str = "exclude_database_list";

/// Fields common to all catalog types
pub struct CatalogBase {
    id: CatalogId,
    name: String,
    catalog_type: String,
    resource: Option<String>,
    properties: PropertySet,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    access_controller: RwLock<Option<Arc<dyn AccessController>>>,
}

impl CatalogBase {
    pub fn new(catalog_type: &str, spec: CatalogSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            catalog_type: catalog_type.to_string(),
            resource: spec.resource.filter(|r| !r.is_empty()),
            properties: spec.properties,
            comment: spec.comment,
            created_at: Utc::now(),
            access_controller: RwLock::new(None),
        }
    }

    pub fn id(&self) -> CatalogId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog_type(&self) -> &str {
        &self.catalog_type
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertySet {
        &mut self.properties
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Insert a default, logging at debug so replay differences are traceable
    pub fn default_prop(&mut self, key: &str, value: &str) {
        if self.properties.insert_if_absent(key, value) {
            log::debug!(
                "Catalog '{}': defaulted property {} = {}",
                self.name,
                key,
                value
            );
        }
    }

    /// Defaults every catalog type shares
    ///
    /// Catalogs logged before `use_meta_cache` existed did not use the meta
    /// cache, so a replayed entry without the key keeps it off.
    pub fn set_common_defaults(&mut self, replay: bool) {
        let use_meta_cache = if replay { "false" } else { "true" };
        if self
            .properties
            .get(USE_META_CACHE)
            .map_or(true, |v| v.is_empty())
        {
            self.properties.insert(USE_META_CACHE, use_meta_cache);
        }
    }

    /// Checks every catalog type runs before its own
    pub fn check_common_properties(&self) -> CatalogResult<()> {
        for key in [USE_META_CACHE, LOWER_CASE_META_NAMES, ONLY_SPECIFIED_DATABASE] {
            check_bool(&self.catalog_type, &self.properties, key)?;
        }

        if let Some(raw) = self.properties.get(METADATA_REFRESH_INTERVAL_SEC) {
            raw.trim().parse::<u64>().map_err(|_| {
                CatalogError::invalid_config(
                    &self.catalog_type,
                    format!(
                        "{} must be a non-negative integer, got '{}'",
                        METADATA_REFRESH_INTERVAL_SEC, raw
                    ),
                )
            })?;
        }

        if self.properties.get_non_empty(INCLUDE_DATABASE_LIST).is_some()
            && self.properties.get_non_empty(EXCLUDE_DATABASE_LIST).is_some()
        {
            return Err(CatalogError::invalid_config(
                &self.catalog_type,
                format!(
                    "{} and {} cannot both be set",
                    INCLUDE_DATABASE_LIST, EXCLUDE_DATABASE_LIST
                ),
            ));
        }
        Ok(())
    }

    pub fn init_access_controller(
        &self,
        controllers: &AccessControllerRegistry,
        enforce: bool,
    ) -> CatalogResult<()> {
        let controller = match controllers.create_for(&self.properties) {
            Ok(controller) => controller,
            Err(e) if enforce => return Err(e),
            Err(e) => {
                log::warn!(
                    "Catalog '{}': access controller init failed, using default: {}",
                    self.name,
                    e
                );
                controllers.fallback()
            }
        };
        log::debug!(
            "Catalog '{}': access controller '{}' initialized",
            self.name,
            controller.name()
        );
        *self.access_controller.write() = Some(controller);
        Ok(())
    }

    pub fn access_controller(&self) -> Option<Arc<dyn AccessController>> {
        self.access_controller.read().clone()
    }
}

impl fmt::Debug for CatalogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller = self
            .access_controller
            .read()
            .as_ref()
            .map(|c| c.name().to_string());
        f.debug_struct("CatalogBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("catalog_type", &self.catalog_type)
            .field("resource", &self.resource)
            .field("properties", &self.properties.masked())
            .field("comment", &self.comment)
            .field("access_controller", &controller)
            .finish()
    }
}

/// Fail unless every key in `keys` is present and non-empty
pub fn require_properties(
    catalog_type: &str,
    props: &PropertySet,
    keys: &[&str],
) -> CatalogResult<()> {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|k| props.get_non_empty(k).is_none())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::invalid_config(
            catalog_type,
            format!("missing required properties: {}", missing.join(", ")),
        ))
    }
}

/// Fail if `key` is present but not `true`/`false`
pub fn check_bool(catalog_type: &str, props: &PropertySet, key: &str) -> CatalogResult<()> {
    match props.get(key) {
        None => Ok(()),
        Some(v) if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("false") => Ok(()),
        Some(v) => Err(CatalogError::invalid_config(
            catalog_type,
            format!("{} must be true or false, got '{}'", key, v),
        )),
    }
}

/// Parse `key` as a strictly positive integer, if present
pub fn parse_positive(
    catalog_type: &str,
    props: &PropertySet,
    key: &str,
) -> CatalogResult<Option<u64>> {
    match props.get(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(v) if v > 0 => Ok(Some(v)),
            _ => Err(CatalogError::invalid_config(
                catalog_type,
                format!("{} must be a positive integer, got '{}'", key, raw),
            )),
        },
    }
}

/// Like [`parse_positive`], but zero is allowed
pub fn parse_non_negative(
    catalog_type: &str,
    props: &PropertySet,
    key: &str,
) -> CatalogResult<Option<u64>> {
    match props.get(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|_| {
            CatalogError::invalid_config(
                catalog_type,
                format!("{} must be a non-negative integer, got '{}'", key, raw),
            )
        }),
    }
}
