// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pluggable external catalog system
//!
//! New catalog kinds are added by implementing [`traits::CatalogProvider`]
//! and registering the provider under its type tag. Every catalog, whatever
//! its kind, is built through the same [`builder::CatalogBuilder`] pipeline.

pub mod access;
pub mod base;
pub mod builder;
pub mod catalog_log;
pub mod error;
pub mod manager;
pub mod properties;
pub mod providers;
pub mod registry;
pub mod resource;
pub mod traits;
