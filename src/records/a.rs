// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! A record schema and wire mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::schema::{AddressFormat, PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the A record list.
pub const WIRE_FIELD: &str = "aRecords";

/// One IPv4 address of an A record set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ARecordEntry {
    /// IPv4 address in dotted-decimal notation (e.g. "10.0.1.4").
    pub ipv4_address: String,
}

impl ARecordEntry {
    #[must_use]
    pub fn new(ipv4_address: impl Into<String>) -> Self {
        Self {
            ipv4_address: ipv4_address.into(),
        }
    }
}

/// Schema versions of the A record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::A, records_property())]
}

fn records_property() -> PropertyDefinition {
    PropertyDefinition::array("IPv4 addresses of the record set")
        .required("At least one A record is required")
        .with_rule(ValidationRule::min_items(1, "At least one A record is required"))
        .with_property(
            "ipv4Address",
            PropertyDefinition::string("IPv4 address")
                .required("IPv4 address is required")
                .with_rule(ValidationRule::format(
                    AddressFormat::Ipv4,
                    "IPv4 address must be in dotted-decimal notation",
                )),
        )
}

pub(crate) fn to_wire(entries: &[ARecordEntry]) -> Value {
    entries
        .iter()
        .map(|entry| json!({ "ipv4Address": entry.ipv4_address }))
        .collect()
}

#[cfg(test)]
#[path = "a_tests.rs"]
mod a_tests;
