// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Elasticsearch catalog

use super::ES;
use crate::catalog::base::{check_bool, require_properties, CatalogBase};
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::traits::{CatalogProvider, CatalogSpec, ExternalCatalog};
use std::any::Any;

pub const HOSTS: &str = "hosts";
pub const LEGACY_HOSTS: &str = "elasticsearch.hosts";
pub const USER: &str = "user";
pub const PASSWORD: &str = "password";
pub const ENABLE_DOCVALUE_SCAN: &str = "enable_docvalue_scan";
pub const ENABLE_KEYWORD_SNIFF: &str = "enable_keyword_sniff";
pub const NODES_DISCOVERY: &str = "nodes_discovery";
pub const HTTP_SSL_ENABLED: &str = "http_ssl_enabled";
pub const MAPPING_ES_ID: &str = "mapping_es_id";
pub const LIKE_PUSH_DOWN: &str = "like_push_down";
pub const INCLUDE_HIDDEN_INDEX: &str = "include_hidden_index";

const DEFAULTS: &[(&str, &str)] = &[
    (ENABLE_DOCVALUE_SCAN, "true"),
    (ENABLE_KEYWORD_SNIFF, "true"),
    (NODES_DISCOVERY, "true"),
    (HTTP_SSL_ENABLED, "false"),
    (MAPPING_ES_ID, "false"),
    (LIKE_PUSH_DOWN, "true"),
    (INCLUDE_HIDDEN_INDEX, "false"),
];

#[derive(Debug)]
pub struct EsExternalCatalog {
    base: CatalogBase,
}

impl EsExternalCatalog {
    pub fn hosts(&self) -> Vec<&str> {
        self.base
            .properties()
            .get(HOSTS)
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect()
    }

    fn flag(&self, key: &str) -> bool {
        self.base
            .properties()
            .get(key)
            .map_or(false, |v| v.eq_ignore_ascii_case("true"))
    }

    pub fn ssl_enabled(&self) -> bool {
        self.flag(HTTP_SSL_ENABLED)
    }
}

impl ExternalCatalog for EsExternalCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        ES
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
        for (key, _) in DEFAULTS {
            check_bool(ES, self.base.properties(), key)?;
        }

        let hosts = self.hosts();
        if hosts.is_empty() {
            return Err(CatalogError::invalid_config(ES, "hosts must not be empty"));
        }
        let ssl = self.ssl_enabled();
        for host in hosts {
            let valid = if ssl {
                host.starts_with("https://")
            } else {
                host.starts_with("http://") || host.starts_with("https://")
            };
            if !valid {
                return Err(CatalogError::invalid_config(
                    ES,
                    format!(
                        "host '{}' must use {}",
                        host,
                        if ssl { "https://" } else { "http:// or https://" }
                    ),
                ));
            }
        }
        Ok(())
    }
}

pub struct EsCatalogProvider;

impl CatalogProvider for EsCatalogProvider {
    fn catalog_type(&self) -> &str {
        ES
    }

    fn construct(&self, mut spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        spec.properties.rename_legacy(LEGACY_HOSTS, HOSTS);
        require_properties(ES, &spec.properties, &[HOSTS])?;
        Ok(Box::new(EsExternalCatalog {
            base: CatalogBase::new(ES, spec),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::properties::PropertySet;

    fn spec(props: PropertySet) -> CatalogSpec {
        CatalogSpec {
            id: 2,
            name: "es".to_string(),
            resource: None,
            properties: props,
            comment: Some("search".to_string()),
        }
    }

    #[test]
    fn test_construct_requires_hosts() {
        let result = EsCatalogProvider.construct(spec(PropertySet::new()));
        assert!(matches!(
            result,
            Err(CatalogError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_legacy_hosts_key_accepted() {
        let catalog = EsCatalogProvider
            .construct(spec(
                PropertySet::new().with(LEGACY_HOSTS, "http://es1:9200,http://es2:9200"),
            ))
            .unwrap();
        let es = catalog.as_any().downcast_ref::<EsExternalCatalog>().unwrap();
        assert_eq!(es.hosts(), vec!["http://es1:9200", "http://es2:9200"]);
        assert!(!catalog.properties().contains_key(LEGACY_HOSTS));
    }

    #[test]
    fn test_defaults_and_check() {
        let mut catalog = EsCatalogProvider
            .construct(spec(PropertySet::new().with(HOSTS, "http://es:9200")))
            .unwrap();
        catalog.set_default_props_if_missing(false);
        assert_eq!(catalog.properties().get(NODES_DISCOVERY), Some("true"));
        assert_eq!(catalog.properties().get(HTTP_SSL_ENABLED), Some("false"));
        catalog.check_when_creating().unwrap();
    }

    #[test]
    fn test_ssl_requires_https_hosts() {
        let mut catalog = EsCatalogProvider
            .construct(spec(
                PropertySet::new()
                    .with(HOSTS, "http://es:9200")
                    .with(HTTP_SSL_ENABLED, "true"),
            ))
            .unwrap();
        catalog.set_default_props_if_missing(false);
        assert!(catalog.check_when_creating().is_err());
    }
}
