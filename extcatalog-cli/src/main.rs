// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! extcatalog CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        // Default to Warn (can still be overridden by RUST_LOG env var)
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let options = cli.options();
    match cli.command {
        Commands::Version => {
            println!("{} {}", "extcatalog".bold().green(), extcatalog::VERSION);
            println!("Pluggable external catalog registry");
            Ok(())
        }

        Commands::Types => cli::handle_types(&options),

        Commands::Create {
            name,
            properties,
            resource,
            comment,
            if_not_exists,
            format,
        } => cli::handle_create(
            &options,
            name,
            properties,
            resource,
            comment,
            if_not_exists,
            format,
        ),

        Commands::Drop { name, if_exists } => cli::handle_drop(&options, &name, if_exists),

        Commands::List { format } => cli::handle_list(&options, format),

        Commands::Show { name, format } => cli::handle_show(&options, &name, format),

        Commands::Replay => cli::handle_replay(&options),
    }
}
