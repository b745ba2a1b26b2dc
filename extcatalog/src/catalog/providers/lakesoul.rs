// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! LakeSoul catalog, backed by a PostgreSQL metadata store

use super::LAKESOUL;
use crate::catalog::base::{require_properties, CatalogBase};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;

pub const PG_USERNAME: &str = "lakesoul.pg.username";
pub const PG_PASSWORD: &str = "lakesoul.pg.password";
pub const PG_URL: &str = "lakesoul.pg.url";

#[derive(Debug)]
pub struct LakeSoulExternalCatalog {
    base: CatalogBase,
}

impl LakeSoulExternalCatalog {
    pub fn pg_url(&self) -> &str {
        self.base.properties().get_or(PG_URL, "")
    }
}

impl ExternalCatalog for LakeSoulExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        LAKESOUL
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.base.check_common_properties()?;
        if !self.pg_url().starts_with("jdbc:postgresql://") {
            return Err(CatalogError::invalid_config(
                LAKESOUL,
                format!("{} must start with jdbc:postgresql://", PG_URL),
            ));
        }
        Ok(())
    }
}

pub struct LakeSoulCatalogProvider;

impl CatalogProvider for LakeSoulCatalogProvider {
    fn catalog_type(&self) -> &str {
        LAKESOUL
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        require_properties(
            LAKESOUL,
            &spec.properties,
            &[PG_USERNAME, PG_PASSWORD, PG_URL],
        )?;
        Ok(Box::new(LakeSoulExternalCatalog {
            base: CatalogBase::new(LAKESOUL, spec),
        }))
    }
}
