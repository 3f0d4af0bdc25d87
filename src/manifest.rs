// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! YAML manifest describing a stack of private DNS records.
//!
//! ```yaml
//! stack: private-dns
//! provider:
//!   source: azure/azapi
//!   version: ">= 2.0.0"
//! records:
//!   - id: web
//!     type: A
//!     name: www
//!     privateDnsZoneId: /subscriptions/.../privateDnsZones/example.internal
//!     ttl: 300
//!     records:
//!       - ipv4Address: 10.0.1.4
//! ```
//!
//! `provider` is optional and defaults to the values above. Each record entry carries a
//! logical `id` plus the [`RecordProps`] of the record, tagged by `type`. Keys that are not
//! part of the record's type are rejected.

use anyhow::{bail, Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::records::{RecordKind, RecordProps};
use crate::registry::SchemaRegistry;
use crate::resource::PrivateDnsRecord;
use crate::stack::{ProviderConfig, Stack};

/// Keys a record entry may carry whatever its type; the payload key depends on the type.
const COMMON_RECORD_KEYS: [&str; 7] = [
    "id",
    "type",
    "name",
    "privateDnsZoneId",
    "ttl",
    "metadata",
    "apiVersion",
];

/// Top-level manifest document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    /// Name of the stack; the root of every construct path.
    pub stack: String,

    /// azapi provider requirement.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Records to synthesize, in order.
    #[serde(default)]
    pub records: Vec<RecordDeclaration>,
}

/// One record of the manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordDeclaration {
    /// Logical id of the record, unique within the stack.
    pub id: String,

    /// Record properties, tagged with `type`.
    #[serde(flatten)]
    pub props: RecordProps,
}

/// A record that failed to build, with the reason.
#[derive(Debug)]
pub struct RecordIssue {
    /// Logical id of the record
    pub id: String,
    /// Why the record was rejected
    pub error: anyhow::Error,
}

impl Manifest {
    /// Parse a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid manifest, including record entries with
    /// keys their type does not define.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(text).context("Failed to parse manifest YAML")?;
        check_record_keys(&document)?;
        serde_yaml::from_value(document).context("Failed to parse manifest YAML")
    }

    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error naming `path` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;

        let manifest = Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;

        debug!(
            "Loaded manifest {} with {} record(s)",
            path.display(),
            manifest.records.len()
        );
        Ok(manifest)
    }

    /// Build every record and add it to a new stack.
    ///
    /// # Errors
    ///
    /// Fails on the first record that does not validate or whose id is already taken.
    pub fn build_stack(&self, registry: &SchemaRegistry) -> Result<Stack> {
        let mut stack = Stack::new(&self.stack, self.provider.clone());

        for declaration in &self.records {
            let record = PrivateDnsRecord::new(
                stack.scope(),
                &declaration.id,
                declaration.props.clone(),
                registry,
            )
            .with_context(|| format!("Record '{}' is invalid", declaration.id))?;

            stack
                .add(record)
                .with_context(|| format!("Record '{}' cannot be added", declaration.id))?;
        }

        info!("Built stack {} with {} record(s)", self.stack, stack.len());
        Ok(stack)
    }

    /// Build every record, collecting all failures instead of stopping at the first.
    #[must_use]
    pub fn check(&self, registry: &SchemaRegistry) -> Vec<RecordIssue> {
        let mut stack = Stack::new(&self.stack, self.provider.clone());
        let mut issues = Vec::new();

        for declaration in &self.records {
            let result = PrivateDnsRecord::new(
                stack.scope(),
                &declaration.id,
                declaration.props.clone(),
                registry,
            )
            .map_err(anyhow::Error::from)
            .and_then(|record| stack.add(record).map_err(anyhow::Error::from));

            if let Err(error) = result {
                issues.push(RecordIssue {
                    id: declaration.id.clone(),
                    error,
                });
            }
        }

        issues
    }

    /// JSON Schema of the manifest document.
    #[must_use]
    pub fn json_schema() -> Value {
        schemars::schema_for!(Manifest).to_value()
    }
}

/// Reject record keys that a flattened [`RecordProps`] would otherwise drop silently.
fn check_record_keys(document: &serde_yaml::Value) -> Result<()> {
    let Some(records) = document
        .get("records")
        .and_then(serde_yaml::Value::as_sequence)
    else {
        return Ok(());
    };

    let mut problems = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let Some(mapping) = record.as_mapping() else {
            continue;
        };
        // Unknown or missing types are reported by the typed parse.
        let Some(kind) = record
            .get("type")
            .and_then(serde_yaml::Value::as_str)
            .and_then(|value| value.parse::<RecordKind>().ok())
        else {
            continue;
        };

        let stray: Vec<String> = mapping
            .iter()
            .map(|(key, _)| key.as_str().map_or_else(|| format!("{key:?}"), str::to_string))
            .filter(|key| {
                !COMMON_RECORD_KEYS.contains(&key.as_str()) && key != kind.payload_field()
            })
            .collect();

        if !stray.is_empty() {
            let id = record
                .get("id")
                .and_then(serde_yaml::Value::as_str)
                .map_or_else(|| format!("#{index}"), str::to_string);
            problems.push(format!("'{id}' ({kind}): {}", stray.join(", ")));
        }
    }

    if !problems.is_empty() {
        bail!("Unknown field(s) in record {}", problems.join("; "));
    }
    debug!("Record keys checked for {} record(s)", records.len());
    Ok(())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod manifest_tests;
