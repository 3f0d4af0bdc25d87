// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use privatedns::{manifest::Manifest, records::RecordKind, registry::SchemaRegistry};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(
    name = "privatedns",
    version,
    about = "Validate and synthesize Azure Private DNS record manifests"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build every record of a manifest and report all violations
    Validate {
        /// Path to the manifest YAML file
        manifest: PathBuf,
    },
    /// Render a manifest as Terraform JSON
    Synth {
        /// Path to the manifest YAML file
        manifest: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the registered schema versions as JSON
    Schemas {
        /// Only print the schemas of this record kind (e.g. SRV)
        #[arg(long)]
        kind: Option<RecordKind>,
    },
}

fn main() -> Result<()> {
    // Respects RUST_LOG (default "info") and RUST_LOG_FORMAT=json|text.
    // Logs go to stderr so synthesized output on stdout stays clean.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized with file and line number tracking");

    let cli = Cli::parse();
    let registry = SchemaRegistry::builtin().context("Builtin schema tables are inconsistent")?;
    debug!("Schema registry holds {} resource type(s)", registry.len());

    match cli.command {
        Command::Validate { manifest } => validate(&manifest, &registry),
        Command::Synth { manifest, out } => synth(&manifest, out.as_deref(), &registry),
        Command::Schemas { kind } => schemas(kind, &registry),
    }
}

fn validate(path: &Path, registry: &SchemaRegistry) -> Result<()> {
    let manifest = Manifest::load(path)?;
    let issues = manifest.check(registry);

    if issues.is_empty() {
        info!(
            "Manifest {} is valid ({} record(s))",
            path.display(),
            manifest.records.len()
        );
        return Ok(());
    }

    for issue in &issues {
        error!("Record '{}': {:#}", issue.id, issue.error);
    }
    anyhow::bail!(
        "Manifest {} has {} invalid record(s)",
        path.display(),
        issues.len()
    )
}

fn synth(path: &Path, out: Option<&Path>, registry: &SchemaRegistry) -> Result<()> {
    let manifest = Manifest::load(path)?;
    let stack = manifest.build_stack(registry)?;
    let rendered = stack.to_json_string()?;

    match out {
        Some(out) => {
            fs::write(out, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!("Wrote Terraform JSON to {}", out.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn schemas(kind: Option<RecordKind>, registry: &SchemaRegistry) -> Result<()> {
    let mut document = Map::new();

    for resource_type in registry.resource_types() {
        let record_kind = RecordKind::from_resource_type(resource_type);
        if kind.is_none() || kind == record_kind {
            let versions = registry.versions(resource_type)?;
            document.insert(resource_type.to_string(), serde_json::to_value(versions)?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(document))?);
    Ok(())
}
