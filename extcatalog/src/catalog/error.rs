// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the external catalog system

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Missing property 'type' in properties")]
    MissingType,

    #[error("Unknown catalog type: {tag}")]
    UnknownCatalogType { tag: String },

    #[error("Catalog type '{tag}' is only available in test mode")]
    RestrictedProvider { tag: String },

    #[error("Invalid {catalog_type} catalog configuration: {message}")]
    InvalidConfiguration {
        catalog_type: String,
        message: String,
    },

    #[error("Failed to validate catalog '{catalog}': {message}")]
    CreationValidation { catalog: String, message: String },

    #[error("Failed to init access controller for catalog '{catalog}': {cause}")]
    AccessControllerInit { catalog: String, cause: String },

    #[error("Invalid catalog name: {0}")]
    InvalidName(String),

    #[error("Catalog provider already registered: {0}")]
    DuplicateProvider(String),

    #[error("Access controller factory already registered: {0}")]
    DuplicateAccessController(String),

    #[error("Catalog already exists: {0}")]
    CatalogAlreadyExists(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Journal error: {0}")]
    Journal(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to replay journal entry {sequence}: {cause}")]
    Replay {
        sequence: u64,
        cause: Box<CatalogError>,
    },
}

impl CatalogError {
    /// Shorthand used by providers when rejecting properties
    pub fn invalid_config(catalog_type: &str, message: impl Into<String>) -> Self {
        CatalogError::InvalidConfiguration {
            catalog_type: catalog_type.to_string(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Journal(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for CatalogError {
    fn from(err: bincode::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
