// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use extcatalog::{ExternalCatalog, ProviderRegistry, ReplayReport};
use std::sync::Arc;

use super::commands::OutputFormat;

/// Formatter for catalog listings and details
pub struct CatalogFormatter;

impl CatalogFormatter {
    /// Registered catalog types, marking the ones hidden outside test mode
    pub fn format_types(providers: &ProviderRegistry, test_mode: bool) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Type").fg(Color::Green),
            Cell::new("Available").fg(Color::Green),
        ]);

        for tag in providers.catalog_types() {
            let restricted = providers
                .get(&tag)
                .map(|p| p.requires_test_mode())
                .unwrap_or(false);
            let available = if restricted && !test_mode {
                "test mode only"
            } else {
                "yes"
            };
            table.add_row(vec![tag, available.to_string()]);
        }

        format!("{}\n", table)
    }

    pub fn format_list(catalogs: &[Arc<dyn ExternalCatalog>], format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::list_table(catalogs),
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> =
                    catalogs.iter().map(|c| Self::catalog_json(c.as_ref())).collect();
                Self::to_json(&serde_json::json!({
                    "catalogs": rows,
                    "count": catalogs.len(),
                }))
            }
        }
    }

    pub fn format_catalog(catalog: &dyn ExternalCatalog, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::catalog_table(catalog),
            OutputFormat::Json => Self::to_json(&Self::catalog_json(catalog)),
        }
    }

    pub fn format_replay(report: &ReplayReport, live: usize) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Replay complete".bold().green()));
        output.push_str(&format!("  Entries:  {}\n", report.total_entries));
        output.push_str(&format!("  Created:  {}\n", report.created));
        output.push_str(&format!("  Dropped:  {}\n", report.dropped));
        output.push_str(&format!("  Live:     {}\n", live));
        output
    }

    fn list_table(catalogs: &[Arc<dyn ExternalCatalog>]) -> String {
        if catalogs.is_empty() {
            return format!("{}\n", "No catalogs found".yellow());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["Id", "Name", "Type", "Resource", "Comment", "Created"]
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green))
                .collect::<Vec<_>>(),
        );
        for catalog in catalogs {
            table.add_row(vec![
                catalog.id().to_string(),
                catalog.name().to_string(),
                catalog.catalog_type().to_string(),
                catalog.resource().unwrap_or("").to_string(),
                catalog.comment().unwrap_or("").to_string(),
                catalog.created_at().format("%Y-%m-%d %H:%M:%S").to_string(),
            ]);
        }

        format!(
            "{}\n{}\n",
            format!("Catalogs: {}", catalogs.len()).bold(),
            table
        )
    }

    fn catalog_table(catalog: &dyn ExternalCatalog) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} (id {}, type {})\n",
            catalog.name().bold().green(),
            catalog.id(),
            catalog.catalog_type()
        ));
        if let Some(comment) = catalog.comment() {
            output.push_str(&format!("Comment: {}\n", comment));
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Property").fg(Color::Green),
            Cell::new("Value").fg(Color::Green),
        ]);
        for (key, value) in catalog.properties().masked().iter() {
            table.add_row(vec![key, value]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    /// Secrets are masked in every output format
    fn catalog_json(catalog: &dyn ExternalCatalog) -> serde_json::Value {
        serde_json::json!({
            "id": catalog.id(),
            "name": catalog.name(),
            "type": catalog.catalog_type(),
            "resource": catalog.resource(),
            "comment": catalog.comment(),
            "created_at": catalog.created_at().to_rfc3339(),
            "properties": catalog.properties().masked(),
        })
    }

    fn to_json(value: &serde_json::Value) -> String {
        let mut output = serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize output to JSON\"}".to_string()
        });
        output.push('\n');
        output
    }
}
