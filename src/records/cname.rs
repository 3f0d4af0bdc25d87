// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CNAME record schema and wire mapping.
//!
//! Unlike the list-based kinds, a CNAME record set holds exactly one canonical name.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::schema::{PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the CNAME record.
pub const WIRE_FIELD: &str = "cnameRecord";

/// Canonical name target of a CNAME record set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CnameRecord {
    /// Target hostname the alias resolves to.
    ///
    /// Example: "app.example.internal"
    pub cname: String,
}

impl CnameRecord {
    #[must_use]
    pub fn new(cname: impl Into<String>) -> Self {
        Self {
            cname: cname.into(),
        }
    }
}

/// Schema versions of the CNAME record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::CNAME, record_property())]
}

fn record_property() -> PropertyDefinition {
    PropertyDefinition::object("Canonical name of the record set")
        .required("CNAME record is required")
        .with_property(
            "cname",
            PropertyDefinition::string("Canonical name target")
                .required("Canonical name is required")
                .with_rule(ValidationRule::min_length(1, "Canonical name must not be empty")),
        )
}

pub(crate) fn to_wire(record: &CnameRecord) -> Value {
    json!({ "cname": record.cname })
}

#[cfg(test)]
#[path = "cname_tests.rs"]
mod cname_tests;
