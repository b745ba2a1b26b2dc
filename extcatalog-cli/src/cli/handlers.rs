// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for extcatalog

use colored::Colorize;

use super::commands::{GlobalOptions, OutputFormat};
use super::output::CatalogFormatter;
use extcatalog::{
    open_journal, CatalogBuilder, CatalogConfig, CatalogManager, CreateCatalogCommand,
    PropertySet,
};

/// Load configuration and apply command-line overrides
fn load_config(options: &GlobalOptions) -> Result<CatalogConfig, Box<dyn std::error::Error>> {
    let mut config = match &options.config {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(journal) = &options.journal {
        config.journal.path = journal.clone();
    }
    if let Some(storage) = options.storage {
        config.journal.storage_type = storage;
    }
    if options.test_mode {
        config.test_mode = true;
    }
    log::debug!(
        "Using {} journal at {}",
        config.journal.storage_type,
        config.journal.path.display()
    );
    Ok(config)
}

/// Open the journal and rebuild the catalog map from it
fn open_manager(options: &GlobalOptions) -> Result<CatalogManager, Box<dyn std::error::Error>> {
    let config = load_config(options)?;
    let builder = CatalogBuilder::from_config(&config)?;
    let journal = open_journal(config.journal.storage_type, &config.journal.path)?;
    let (manager, _report) = CatalogManager::open(builder, journal)?;
    Ok(manager)
}

/// Handle the types command
pub fn handle_types(options: &GlobalOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(options)?;
    let builder = CatalogBuilder::from_config(&config)?;
    print!("{}", CatalogFormatter::format_types(builder.providers(), config.test_mode));
    Ok(())
}

/// Handle the create command
pub fn handle_create(
    options: &GlobalOptions,
    name: String,
    properties: Vec<(String, String)>,
    resource: Option<String>,
    comment: Option<String>,
    if_not_exists: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(options)?;

    let mut cmd = CreateCatalogCommand::new(name.clone(), properties.into_iter().collect::<PropertySet>());
    if let Some(resource) = resource {
        cmd = cmd.with_resource(resource);
    }
    if let Some(comment) = comment {
        cmd = cmd.with_comment(comment);
    }
    if if_not_exists {
        cmd = cmd.if_not_exists();
    }

    match manager.create_catalog(&cmd)? {
        Some(catalog) => {
            if format == OutputFormat::Table {
                println!("{}", format!("Created catalog '{}'", name).green());
            }
            print!("{}", CatalogFormatter::format_catalog(catalog.as_ref(), format));
        }
        None => println!(
            "{}",
            format!("Catalog '{}' already exists, nothing to do", name).yellow()
        ),
    }
    Ok(())
}

/// Handle the drop command
pub fn handle_drop(
    options: &GlobalOptions,
    name: &str,
    if_exists: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(options)?;
    if manager.drop_catalog(name, if_exists)? {
        println!("{}", format!("Dropped catalog '{}'", name).green());
    } else {
        println!(
            "{}",
            format!("Catalog '{}' does not exist, nothing to do", name).yellow()
        );
    }
    Ok(())
}

/// Handle the list command
pub fn handle_list(
    options: &GlobalOptions,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(options)?;
    print!("{}", CatalogFormatter::format_list(&manager.list_catalogs(), format));
    Ok(())
}

/// Handle the show command
pub fn handle_show(
    options: &GlobalOptions,
    name: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(options)?;
    let catalog = manager
        .get_catalog(name)
        .ok_or_else(|| extcatalog::CatalogError::CatalogNotFound(name.to_string()))?;
    print!("{}", CatalogFormatter::format_catalog(catalog.as_ref(), format));
    Ok(())
}

/// Handle the replay command
pub fn handle_replay(options: &GlobalOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(options)?;
    let builder = CatalogBuilder::from_config(&config)?;
    let journal = open_journal(config.journal.storage_type, &config.journal.path)?;

    println!(
        "{}",
        format!("Replaying journal at {}...", config.journal.path.display()).bold()
    );
    match CatalogManager::open(builder, journal) {
        Ok((manager, report)) => {
            print!("{}", CatalogFormatter::format_replay(&report, manager.catalog_count()));
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("Replay failed: {}", e).red());
            Err(e.into())
        }
    }
}
