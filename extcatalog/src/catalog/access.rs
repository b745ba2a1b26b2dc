// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pluggable per-catalog access control
//!
//! Each catalog may name an access-controller class through the
//! `access_controller.class` property. The class is looked up in an
//! [`AccessControllerRegistry`] and instantiated with the properties found
//! under `access_controller.properties.`.

use super::error::{CatalogError, CatalogResult};
use super::properties::PropertySet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Property selecting the access-controller factory
pub const ACCESS_CONTROLLER_CLASS_PROP: &str = "access_controller.class";
/// Prefix of properties handed to the access-controller factory
pub const ACCESS_CONTROLLER_PROPERTY_PREFIX: &str = "access_controller.properties.";
/// Factory used when a catalog does not name one
pub const DEFAULT_ACCESS_CONTROLLER: &str = "internal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    Select,
    Show,
    Load,
    Alter,
    Create,
    Drop,
}

impl Privilege {
    pub fn is_read_only(&self) -> bool {
        matches!(self, Privilege::Select | Privilege::Show)
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Privilege::Select => "SELECT",
            Privilege::Show => "SHOW",
            Privilege::Load => "LOAD",
            Privilege::Alter => "ALTER",
            Privilege::Create => "CREATE",
            Privilege::Drop => "DROP",
        };
        write!(f, "{}", s)
    }
}

/// Security policy consulted for operations against one catalog
pub trait AccessController: Send + Sync {
    fn name(&self) -> &str;

    fn check_privilege(&self, user: &str, database: &str, privilege: Privilege) -> bool;
}

/// Creates access controllers for a named class
pub trait AccessControllerFactory: Send + Sync {
    fn class_name(&self) -> &str;

    fn create(&self, properties: &PropertySet) -> CatalogResult<Arc<dyn AccessController>>;
}

/// Defers to the global privilege system, which is outside this crate
pub struct InternalAccessController;

impl AccessController for InternalAccessController {
    fn name(&self) -> &str {
        DEFAULT_ACCESS_CONTROLLER
    }

    fn check_privilege(&self, _user: &str, _database: &str, _privilege: Privilege) -> bool {
        true
    }
}

struct InternalAccessControllerFactory;

impl AccessControllerFactory for InternalAccessControllerFactory {
    fn class_name(&self) -> &str {
        DEFAULT_ACCESS_CONTROLLER
    }

    fn create(&self, _properties: &PropertySet) -> CatalogResult<Arc<dyn AccessController>> {
        Ok(Arc::new(InternalAccessController))
    }
}

/// Grants only read privileges, optionally to a fixed set of users
pub struct ReadOnlyAccessController {
    allowed_users: Option<HashSet<String>>,
}

impl ReadOnlyAccessController {
    pub const CLASS_NAME: &'static str = "read_only";
    const ALLOWED_USERS_PROP: &'static str = "allowed_users";
}

impl AccessController for ReadOnlyAccessController {
    fn name(&self) -> &str {
        Self::CLASS_NAME
    }

    fn check_privilege(&self, user: &str, _database: &str, privilege: Privilege) -> bool {
        if !privilege.is_read_only() {
            return false;
        }
        match &self.allowed_users {
            Some(users) => users.contains(user),
            None => true,
        }
    }
}

struct ReadOnlyAccessControllerFactory;

impl AccessControllerFactory for ReadOnlyAccessControllerFactory {
    fn class_name(&self) -> &str {
        ReadOnlyAccessController::CLASS_NAME
    }

    fn create(&self, properties: &PropertySet) -> CatalogResult<Arc<dyn AccessController>> {
        let allowed_users = match properties.get(ReadOnlyAccessController::ALLOWED_USERS_PROP) {
            None => None,
            Some(raw) => {
                let users: HashSet<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .map(str::to_string)
                    .collect();
                if users.is_empty() {
                    return Err(CatalogError::Config(format!(
                        "'{}' must name at least one user",
                        ReadOnlyAccessController::ALLOWED_USERS_PROP
                    )));
                }
                Some(users)
            }
        };
        Ok(Arc::new(ReadOnlyAccessController { allowed_users }))
    }
}

/// Registry of access-controller factories, keyed by class name
///
/// Populated at startup and shared read-only afterwards.
pub struct AccessControllerRegistry {
    factories: HashMap<String, Arc<dyn AccessControllerFactory>>,
}

impl AccessControllerRegistry {
    /// An empty registry. Catalogs without an explicit class still need the
    /// `internal` factory, so most callers want [`Self::with_builtin_factories`].
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn with_builtin_factories() -> Self {
        let mut registry = Self::new();
        registry
            .factories
            .insert(DEFAULT_ACCESS_CONTROLLER.to_string(), Arc::new(InternalAccessControllerFactory));
        registry.factories.insert(
            ReadOnlyAccessController::CLASS_NAME.to_string(),
            Arc::new(ReadOnlyAccessControllerFactory),
        );
        registry
    }

    pub fn register(&mut self, factory: Arc<dyn AccessControllerFactory>) -> CatalogResult<()> {
        let class_name = factory.class_name().to_string();
        if self.factories.contains_key(&class_name) {
            return Err(CatalogError::DuplicateAccessController(class_name));
        }
        log::info!("Registered access controller factory: {}", class_name);
        self.factories.insert(class_name, factory);
        Ok(())
    }

    pub fn get(&self, class_name: &str) -> Option<Arc<dyn AccessControllerFactory>> {
        self.factories.get(class_name).cloned()
    }

    /// Instantiate the controller configured by a catalog's properties
    pub fn create_for(&self, catalog_props: &PropertySet) -> CatalogResult<Arc<dyn AccessController>> {
        let class_name = catalog_props
            .get_non_empty(ACCESS_CONTROLLER_CLASS_PROP)
            .unwrap_or(DEFAULT_ACCESS_CONTROLLER);
        let factory = self.get(class_name).ok_or_else(|| {
            CatalogError::Config(format!("Unknown access controller class: {}", class_name))
        })?;
        factory.create(&catalog_props.with_prefix(ACCESS_CONTROLLER_PROPERTY_PREFIX))
    }

    /// The controller installed when lenient initialization fails
    pub fn fallback(&self) -> Arc<dyn AccessController> {
        Arc::new(InternalAccessController)
    }
}

impl Default for AccessControllerRegistry {
    fn default() -> Self {
        Self::with_builtin_factories()
    }
}
