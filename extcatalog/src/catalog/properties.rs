// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog property set
//!
//! Catalog configuration is a flat string-to-string map. The only key with a
//! meaning outside of a specific connector is [`CATALOG_TYPE_PROP`]; every other
//! key is interpreted by the catalog type that owns it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Reserved key that selects the catalog type
pub const CATALOG_TYPE_PROP: &str = "type";

/// Replacement text for sensitive values
const MASKED_VALUE: &str = "*XXX";

/// Key fragments that mark a property as sensitive
const SENSITIVE_KEY_FRAGMENTS: &[&str] = &["password", "secret", "access_key", "token"];

/// Mapping of catalog configuration keys to values
///
/// Backed by a `BTreeMap` so iteration, display and serialization are
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and literals
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, treating an empty string the same as a missing key
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The raw `type` property, if present and non-empty
    pub fn catalog_type(&self) -> Option<&str> {
        self.get_non_empty(CATALOG_TYPE_PROP)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert `value` only when `key` is absent. Returns true if inserted.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), value.to_string());
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Move the value of a legacy key to its current name unless the
    /// current name is already set
    pub fn rename_legacy(&mut self, legacy: &str, current: &str) {
        if let Some(value) = self.entries.remove(legacy) {
            self.entries.entry(current.to_string()).or_insert(value);
        }
    }

    /// All keys under `prefix`, with the prefix stripped
    pub fn with_prefix(&self, prefix: &str) -> PropertySet {
        self.entries
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(prefix)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), v.clone()))
            })
            .collect()
    }

    /// Copy with sensitive values replaced, for logs and display
    pub fn masked(&self) -> PropertySet {
        self.entries
            .iter()
            .map(|(k, v)| {
                if is_sensitive_key(k) {
                    (k.clone(), MASKED_VALUE.to_string())
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    SENSITIVE_KEY_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for PropertySet {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for PropertySet {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl fmt::Display for PropertySet {
    /// Renders as `"k" = "v"` pairs with sensitive values masked
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.masked();
        let rendered: Vec<String> = masked
            .iter()
            .map(|(k, v)| format!("\"{}\" = \"{}\"", k, v))
            .collect();
        write!(f, "({})", rendered.join(", "))
    }
}
