// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! JDBC catalog

use super::JDBC;
use crate::catalog::base::{
    check_bool, require_properties, CatalogBase, LOWER_CASE_META_NAMES, ONLY_SPECIFIED_DATABASE,
};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;

pub const JDBC_URL: &str = "jdbc_url";
pub const DRIVER_URL: &str = "driver_url";
pub const DRIVER_CLASS: &str = "driver_class";
pub const USER: &str = "user";
pub const PASSWORD: &str = "password";
pub const POOL_MIN_SIZE: &str = "connection_pool_min_size";
pub const POOL_MAX_SIZE: &str = "connection_pool_max_size";
pub const POOL_MAX_WAIT_TIME: &str = "connection_pool_max_wait_time";
pub const POOL_MAX_LIFE_TIME: &str = "connection_pool_max_life_time";
pub const POOL_KEEP_ALIVE: &str = "connection_pool_keep_alive";

const REQUIRED: &[&str] = &[JDBC_URL, DRIVER_URL, DRIVER_CLASS, USER];

#[derive(Debug)]
pub struct JdbcExternalCatalog {
    base: CatalogBase,
}

impl JdbcExternalCatalog {
    pub fn jdbc_url(&self) -> &str {
        self.base.properties().get_or(JDBC_URL, "")
    }

    /// Database product named in the URL, e.g. `mysql` for `jdbc:mysql://...`
    pub fn database_type(&self) -> Option<&str> {
        self.jdbc_url()
            .strip_prefix("jdbc:")
            .and_then(|rest| rest.split(':').next())
            .filter(|t| !t.is_empty())
    }

    fn pool_size(&self, key: &str) -> CatalogResult<u64> {
        let raw = self.base.properties().get_or(key, "");
        raw.trim().parse::<u64>().map_err(|_| {
            CatalogError::invalid_config(
                JDBC,
                format!("{} must be an integer, got '{}'", key, raw),
            )
        })
    }
}

/// A driver is either a bare jar file name resolved against the driver
/// directory, or a URL
fn is_valid_driver_url(driver_url: &str) -> bool {
    if driver_url.contains("://") {
        return ["file://", "http://", "https://"]
            .iter()
            .any(|scheme| driver_url.starts_with(scheme));
    }
    driver_url.ends_with(".jar") && !driver_url.contains('/')
}

impl ExternalCatalog for JdbcExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        JDBC
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn set_default_props_if_missing(&mut self, replay: bool) {
        self.base.set_common_defaults(replay);
        self.base.default_prop(PASSWORD, "");
        self.base.default_prop(ONLY_SPECIFIED_DATABASE, "false");
        self.base.default_prop(LOWER_CASE_META_NAMES, "false");
        self.base.default_prop(POOL_MIN_SIZE, "1");
        self.base.default_prop(POOL_MAX_SIZE, "30");
        self.base.default_prop(POOL_MAX_WAIT_TIME, "5000");
        self.base.default_prop(POOL_MAX_LIFE_TIME, "1800000");
        self.base.default_prop(POOL_KEEP_ALIVE, "false");
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;
        check_bool(JDBC, self.base.properties(), POOL_KEEP_ALIVE)?;

        if self.database_type().is_none() {
            return Err(CatalogError::invalid_config(
                JDBC,
                format!("{} must look like jdbc:<type>:..., got '{}'", JDBC_URL, self.jdbc_url()),
            ));
        }

        let driver_url = self.base.properties().get_or(DRIVER_URL, "");
        if !is_valid_driver_url(driver_url) {
            return Err(CatalogError::invalid_config(
                JDBC,
                format!("invalid {} '{}'", DRIVER_URL, driver_url),
            ));
        }

        let min = self.pool_size(POOL_MIN_SIZE)?;
        let max = self.pool_size(POOL_MAX_SIZE)?;
        if min < 1 || min > max {
            return Err(CatalogError::invalid_config(
                JDBC,
                format!(
                    "connection pool sizes must satisfy 1 <= min <= max, got min={} max={}",
                    min, max
                ),
            ));
        }
        self.pool_size(POOL_MAX_WAIT_TIME)?;
        self.pool_size(POOL_MAX_LIFE_TIME)?;
        Ok(())
    }
}

pub struct JdbcCatalogProvider;

impl CatalogProvider for JdbcCatalogProvider {
    fn catalog_type(&self) -> &str {
        JDBC
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        require_properties(JDBC, &spec.properties, REQUIRED)?;
        Ok(Box::new(JdbcExternalCatalog {
            base: CatalogBase::new(JDBC, spec),
        }))
    }
}
