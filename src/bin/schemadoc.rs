// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record Schema Markdown Documentation Generator
//!
//! Generates a markdown reference of every registered private DNS record schema.
//! This keeps the documentation in docs/schemas.md in sync with the schema tables.
//!
//! Usage:
//!   cargo run --bin schemadoc > docs/schemas.md

use privatedns::records::RecordKind;
use privatedns::registry::SchemaRegistry;
use privatedns::schema::{PropertyDefinition, RuleKind, SchemaVersion};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SchemaRegistry::builtin()?;

    println!("# Record Schema Reference");
    println!();
    println!("This document describes the Azure Private DNS record schemas registered by privatedns.");
    println!();
    println!("> **Note**: This file is AUTO-GENERATED from `src/records/`");
    println!("> DO NOT EDIT MANUALLY - Run `cargo run --bin schemadoc` to regenerate");
    println!();

    println!("## Table of Contents");
    println!();
    for kind in RecordKind::ALL {
        println!("- [{kind}](#{})", kind.as_str().to_lowercase());
    }
    println!();

    for kind in RecordKind::ALL {
        let versions = registry.versions(kind.resource_type())?;
        generate_record_doc(kind, versions);
    }

    Ok(())
}

fn generate_record_doc(kind: RecordKind, versions: &[SchemaVersion]) {
    println!("## {kind}");
    println!();
    println!("**Resource Type**: `{}`", kind.resource_type());
    println!();
    println!("**Record Field**: `{}`", kind.wire_field());
    println!();

    println!("| Version | Support | Released | Sunset |");
    println!("| ------- | ------- | -------- | ------ |");
    for entry in versions {
        let sunset = entry
            .sunset_date
            .map_or_else(|| "-".to_string(), |date| date.to_string());
        println!(
            "| `{}` | {:?} | {} | {sunset} |",
            entry.version, entry.support_level, entry.release_date
        );
    }
    println!();

    // Newest version documents the current shape
    if let Some(latest) = versions.last() {
        println!("### Properties");
        println!();
        print_property_table(&latest.schema.properties);
        println!();

        for (name, definition) in &latest.schema.properties {
            if !definition.properties.is_empty() {
                println!("#### `{name}` entries");
                println!();
                print_property_table(&definition.properties);
                println!();
            }
        }

        println!("### Validation Rules");
        println!();
        println!("| Path | Rule | Message |");
        println!("| ---- | ---- | ------- |");
        for (path, rule) in latest.schema.validation_rules() {
            println!(
                "| `{path}` | {} | {} |",
                describe_rule(&rule.kind),
                escape(&rule.message)
            );
        }
        println!();
    }

    println!("---");
    println!();
}

fn print_property_table(properties: &BTreeMap<String, PropertyDefinition>) {
    println!("| Field | Type | Required | Default | Description |");
    println!("| ----- | ---- | -------- | ------- | ----------- |");

    for (name, definition) in properties {
        let type_str = match definition.item_type {
            Some(item_type) => format!("array of {}", item_type.as_str()),
            None => definition.data_type.as_str().to_string(),
        };
        let required_str = if definition.required { "Yes" } else { "No" };
        let default_str = definition
            .default
            .as_ref()
            .map_or_else(|| "-".to_string(), |value| format!("`{value}`"));

        println!(
            "| `{name}` | {type_str} | {required_str} | {default_str} | {} |",
            escape(&definition.description)
        );
    }
}

fn describe_rule(kind: &RuleKind) -> String {
    match kind {
        RuleKind::Required => "required".to_string(),
        RuleKind::Range { min, max } => format!("range {min}..{max}"),
        RuleKind::MinLength { min } => format!("minLength {min}"),
        RuleKind::MaxLength { max } => format!("maxLength {max}"),
        RuleKind::MinItems { min } => format!("minItems {min}"),
        RuleKind::Format { format } => format!("format {format:?}").to_lowercase(),
    }
}

fn escape(text: &str) -> String {
    // Pipes would break the markdown table
    text.replace('|', "\\|").replace('\n', " ")
}
