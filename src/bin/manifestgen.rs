// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Manifest JSON Schema Generator
//!
//! Generates the JSON Schema of the privatedns manifest from the Rust types in
//! src/manifest.rs, so editors can validate manifests as they are written.
//!
//! Usage:
//!   cargo run --bin manifestgen [OUTPUT_DIR]
//!
//! The schema is written to OUTPUT_DIR/manifest.schema.json (default: deploy/schemas/).

use privatedns::manifest::Manifest;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const SCHEMA_FILENAME: &str = "manifest.schema.json";
const DEFAULT_OUTPUT_DIR: &str = "deploy/schemas";
const SCHEMA_COMMENT: &str =
    "AUTO-GENERATED from src/manifest.rs. DO NOT EDIT MANUALLY - Run `cargo run --bin manifestgen` to regenerate";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    fs::create_dir_all(&output_dir)?;

    println!("Generating manifest JSON Schema from src/manifest.rs...");

    generate_schema(&output_dir)?;

    println!("✓ Successfully generated {SCHEMA_FILENAME} in {}", output_dir.display());

    Ok(())
}

fn generate_schema(output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut schema = Manifest::json_schema();

    if let Value::Object(map) = &mut schema {
        map.insert("$comment".to_string(), Value::String(SCHEMA_COMMENT.to_string()));
    }

    let content = serde_json::to_string_pretty(&schema)?;
    let output_path = output_dir.join(SCHEMA_FILENAME);
    fs::write(&output_path, format!("{content}\n"))?;

    println!("  ✓ Generated {}", output_path.display());

    Ok(())
}
