// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! extcatalog - pluggable registry of external data catalogs
//!
//! Catalogs for Hive Metastore, Elasticsearch, JDBC, Iceberg, Paimon,
//! Trino connectors, MaxCompute and LakeSoul are built through a single
//! pipeline that resolves the catalog type, constructs the catalog through
//! its provider, fills in default properties and, for live creations only,
//! validates the configuration and initializes access control.
//!
//! # Usage
//!
//! ```ignore
//! use extcatalog::{CatalogBuilder, CatalogConfig, CatalogManager, CreateCatalogCommand, PropertySet};
//!
//! let config = CatalogConfig::default();
//! let builder = CatalogBuilder::from_config(&config)?;
//! let journal = extcatalog::open_journal(config.journal.storage_type, &config.journal.path)?;
//! let (manager, _report) = CatalogManager::open(builder, journal)?;
//!
//! let props = PropertySet::new()
//!     .with("type", "hms")
//!     .with("hive.metastore.uris", "thrift://127.0.0.1:9083");
//! manager.create_catalog(&CreateCatalogCommand::new("hive", props))?;
//! ```

pub mod catalog;
pub mod config;
pub mod journal;

pub use catalog::access::{
    AccessController, AccessControllerFactory, AccessControllerRegistry, Privilege,
};
pub use catalog::builder::{CatalogBuilder, CatalogDescriptor};
pub use catalog::catalog_log::{CatalogLog, CreateCatalogCommand};
pub use catalog::error::{CatalogError, CatalogResult};
pub use catalog::manager::{CatalogManager, ReplayReport};
pub use catalog::properties::PropertySet;
pub use catalog::registry::ProviderRegistry;
pub use catalog::resource::{ResourceDescriptor, ResourceManager, ResourceResolver, ResourceType};
pub use catalog::traits::{CatalogId, CatalogProvider, CatalogSpec, ExternalCatalog};
pub use config::CatalogConfig;
pub use journal::{open_journal, CatalogJournal, JournalStorageType};

/// extcatalog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// extcatalog crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
