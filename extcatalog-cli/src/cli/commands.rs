// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use extcatalog::JournalStorageType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extcatalog")]
#[command(about = "Manage external data catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Journal location, overrides the configuration file
    #[arg(long, global = true)]
    pub journal: Option<PathBuf>,

    /// Journal backend, overrides the configuration file
    #[arg(long, global = true, value_parser = parse_storage_type)]
    pub storage: Option<JournalStorageType>,

    /// Allow test-only catalog types
    #[arg(long, global = true)]
    pub test_mode: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (ignored when --verbose is set)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version information
    Version,

    /// List the registered catalog types
    Types,

    /// Create a catalog
    Create {
        /// Catalog name
        name: String,

        /// Catalog property, repeatable
        #[arg(short = 'p', long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
        properties: Vec<(String, String)>,

        /// Legacy resource to take the catalog type from
        #[arg(long)]
        resource: Option<String>,

        #[arg(long)]
        comment: Option<String>,

        /// Succeed without changes if the catalog exists
        #[arg(long)]
        if_not_exists: bool,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Drop a catalog
    Drop {
        name: String,

        /// Succeed without changes if the catalog does not exist
        #[arg(long)]
        if_exists: bool,
    },

    /// List catalogs
    List {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one catalog with its effective properties
    Show {
        name: String,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Replay the journal and report what it contains
    Replay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Options shared by every subcommand that opens the catalog journal
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub journal: Option<PathBuf>,
    pub storage: Option<JournalStorageType>,
    pub test_mode: bool,
}

impl Cli {
    pub fn options(&self) -> GlobalOptions {
        GlobalOptions {
            config: self.config.clone(),
            journal: self.journal.clone(),
            storage: self.storage,
            test_mode: self.test_mode,
        }
    }
}

fn parse_property(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn parse_storage_type(raw: &str) -> Result<JournalStorageType, String> {
    raw.parse()
}
