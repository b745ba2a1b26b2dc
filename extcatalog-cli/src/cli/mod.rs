// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for extcatalog
//!
//! Creates, drops and inspects external catalogs recorded in a catalog
//! journal, and replays the journal to check that it still loads.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_create, handle_drop, handle_list, handle_replay, handle_show, handle_types,
};
