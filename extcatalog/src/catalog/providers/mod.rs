// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Built-in catalog providers
//!
//! Each module implements the configuration contract of one connector type:
//! required keys, injected defaults and creation-time checks. Adding a new
//! type means implementing `CatalogProvider` and adding one line to
//! `register_builtin_providers`.

use super::registry::ProviderRegistry;
use std::sync::Arc;

pub mod es;
pub mod hms;
pub mod iceberg;
pub mod jdbc;
pub mod lakesoul;
pub mod max_compute;
pub mod paimon;
pub mod trino;

pub const HMS: &str = "hms";
pub const ES: &str = "es";
pub const JDBC: &str = "jdbc";
pub const ICEBERG: &str = "iceberg";
pub const PAIMON: &str = "paimon";
pub const TRINO_CONNECTOR: &str = "trino-connector";
pub const MAX_COMPUTE: &str = "max_compute";
pub const LAKESOUL: &str = "lakesoul";
pub const TEST: &str = "test";

/// Shared by every catalog type that talks to a Hive metastore
pub const HIVE_METASTORE_URIS: &str = "hive.metastore.uris";
pub const WAREHOUSE: &str = "warehouse";
pub const REST_URI: &str = "uri";

/// Register every built-in provider
///
/// Called once when the provider registry is created.
pub fn register_builtin_providers(registry: &mut ProviderRegistry) {
    let builtins: Vec<Arc<dyn super::traits::CatalogProvider>> = vec![
        Arc::new(hms::HmsCatalogProvider),
        Arc::new(es::EsCatalogProvider),
        Arc::new(jdbc::JdbcCatalogProvider),
        Arc::new(iceberg::IcebergCatalogProvider),
        Arc::new(paimon::PaimonCatalogProvider),
        Arc::new(trino::TrinoConnectorCatalogProvider),
        Arc::new(max_compute::MaxComputeCatalogProvider),
        Arc::new(lakesoul::LakeSoulCatalogProvider),
        Arc::new(test::TestCatalogProvider),
    ];

    for provider in builtins {
        if let Err(e) = registry.register(provider) {
            log::warn!("Skipping built-in catalog provider: {}", e);
        }
    }

    log::info!("Catalog provider registration complete");
}
