// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! SRV record schema and wire mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::constants::MAX_U16_FIELD;
use crate::schema::{PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the SRV record list.
pub const WIRE_FIELD: &str = "srvRecords";

/// One service location of an SRV record set.
///
/// The record name carries the service and protocol, e.g. `_sip._tcp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SrvRecordEntry {
    /// Priority of the target host. Lower values = higher priority.
    #[schemars(range(min = 0, max = 65535))]
    pub priority: i64,

    /// Relative weight for entries with the same priority.
    #[schemars(range(min = 0, max = 65535))]
    pub weight: i64,

    /// TCP or UDP port of the service.
    #[schemars(range(min = 0, max = 65535))]
    pub port: i64,

    /// Hostname of the target.
    pub target: String,
}

impl SrvRecordEntry {
    #[must_use]
    pub fn new(priority: i64, weight: i64, port: i64, target: impl Into<String>) -> Self {
        Self {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }
}

/// Schema versions of the SRV record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::SRV, records_property())]
}

fn u16_property(description: &str, label: &str) -> PropertyDefinition {
    PropertyDefinition::integer(description)
        .required(format!("SRV {label} is required"))
        .with_rule(ValidationRule::range(
            0,
            MAX_U16_FIELD,
            format!("SRV {label} must be between 0 and {MAX_U16_FIELD}"),
        ))
}

fn records_property() -> PropertyDefinition {
    PropertyDefinition::array("Service locations of the record set")
        .required("At least one SRV record is required")
        .with_rule(ValidationRule::min_items(1, "At least one SRV record is required"))
        .with_property("priority", u16_property("Priority of the target", "priority"))
        .with_property("weight", u16_property("Relative weight of the target", "weight"))
        .with_property("port", u16_property("Port of the service", "port"))
        .with_property(
            "target",
            PropertyDefinition::string("Target hostname")
                .required("SRV target is required")
                .with_rule(ValidationRule::min_length(1, "SRV target must not be empty")),
        )
}

pub(crate) fn to_wire(entries: &[SrvRecordEntry]) -> Value {
    entries
        .iter()
        .map(|entry| {
            json!({
                "priority": entry.priority,
                "weight": entry.weight,
                "port": entry.port,
                "target": entry.target,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "srv_tests.rs"]
mod srv_tests;
