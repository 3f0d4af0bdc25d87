// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! PTR record schema and wire mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::schema::{PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the PTR record list.
pub const WIRE_FIELD: &str = "ptrRecords";

/// One pointer target of a PTR record set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PtrRecordEntry {
    /// Domain name the reverse lookup resolves to.
    pub ptrdname: String,
}

impl PtrRecordEntry {
    #[must_use]
    pub fn new(ptrdname: impl Into<String>) -> Self {
        Self {
            ptrdname: ptrdname.into(),
        }
    }
}

/// Schema versions of the PTR record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::PTR, records_property())]
}

fn records_property() -> PropertyDefinition {
    PropertyDefinition::array("Pointer targets of the record set")
        .required("At least one PTR record is required")
        .with_rule(ValidationRule::min_items(1, "At least one PTR record is required"))
        .with_property(
            "ptrdname",
            PropertyDefinition::string("Pointer domain name")
                .required("PTR domain name is required")
                .with_rule(ValidationRule::min_length(1, "PTR domain name must not be empty")),
        )
}

pub(crate) fn to_wire(entries: &[PtrRecordEntry]) -> Value {
    entries
        .iter()
        .map(|entry| json!({ "ptrdname": entry.ptrdname }))
        .collect()
}
