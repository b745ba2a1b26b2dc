// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! MaxCompute catalog

use super::MAX_COMPUTE;
use crate::catalog::base::{parse_non_negative, parse_positive, require_properties, CatalogBase};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;

pub const DEFAULT_PROJECT: &str = "mc.default.project";
pub const ACCESS_KEY: &str = "mc.access_key";
pub const SECRET_KEY: &str = "mc.secret_key";
pub const ENDPOINT: &str = "mc.endpoint";
/// Older catalogs name a region instead of an endpoint
pub const REGION: &str = "mc.region";
pub const SPLIT_STRATEGY: &str = "mc.split_strategy";
pub const SPLIT_BYTE_SIZE: &str = "mc.split_byte_size";
pub const SPLIT_ROW_COUNT: &str = "mc.split_row_count";
pub const CONNECT_TIMEOUT: &str = "mc.connect_timeout";
pub const READ_TIMEOUT: &str = "mc.read_timeout";
pub const RETRY_COUNT: &str = "mc.retry_count";

const SPLIT_STRATEGIES: &[&str] = &["byte_size", "row_count"];

const DEFAULTS: &[(&str, &str)] = &[
    (SPLIT_STRATEGY, "byte_size"),
    (SPLIT_BYTE_SIZE, "268435456"),
    (SPLIT_ROW_COUNT, "1048576"),
    (CONNECT_TIMEOUT, "10"),
    (READ_TIMEOUT, "120"),
    (RETRY_COUNT, "4"),
];

#[derive(Debug)]
pub struct MaxComputeExternalCatalog {
    base: CatalogBase,
}

impl MaxComputeExternalCatalog {
    pub fn default_project(&self) -> &str {
        self.base.properties().get_or(DEFAULT_PROJECT, "")
    }

    /// Endpoint, derived from the legacy region when no endpoint is set
    pub fn endpoint(&self) -> String {
        let props = self.base.properties();
        match props.get_non_empty(ENDPOINT) {
            Some(endpoint) => endpoint.to_string(),
            None => format!(
                "http://service.{}.maxcompute.aliyun.com/api",
                props.get_or(REGION, "")
            ),
        }
    }
}

impl ExternalCatalog for MaxComputeExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        MAX_COMPUTE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn set_default_props_if_missing(&mut self, replay: bool) {
        self.base.set_common_defaults(replay);
        for (key, value) in DEFAULTS {
            self.base.default_prop(key, value);
        }
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;
        let props = self.base.properties();

        let strategy = props.get_or(SPLIT_STRATEGY, "byte_size");
        if !SPLIT_STRATEGIES.contains(&strategy) {
            return Err(CatalogError::invalid_config(
                MAX_COMPUTE,
                format!(
                    "{} must be one of {}, got '{}'",
                    SPLIT_STRATEGY,
                    SPLIT_STRATEGIES.join(", "),
                    strategy
                ),
            ));
        }
        for key in [SPLIT_BYTE_SIZE, SPLIT_ROW_COUNT, CONNECT_TIMEOUT, READ_TIMEOUT] {
            parse_positive(MAX_COMPUTE, props, key)?;
        }
        // Zero disables retries
        parse_non_negative(MAX_COMPUTE, props, RETRY_COUNT)?;
        Ok(())
    }
}

pub struct MaxComputeCatalogProvider;

impl CatalogProvider for MaxComputeCatalogProvider {
    fn catalog_type(&self) -> &str {
        MAX_COMPUTE
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        require_properties(
            MAX_COMPUTE,
            &spec.properties,
            &[DEFAULT_PROJECT, ACCESS_KEY, SECRET_KEY],
        )?;
        if spec.properties.get_non_empty(ENDPOINT).is_none()
            && spec.properties.get_non_empty(REGION).is_none()
        {
            return Err(CatalogError::invalid_config(
                MAX_COMPUTE,
                format!("one of {} or {} is required", ENDPOINT, REGION),
            ));
        }
        Ok(Box::new(MaxComputeExternalCatalog {
            base: CatalogBase::new(MAX_COMPUTE, spec),
        }))
    }
}
