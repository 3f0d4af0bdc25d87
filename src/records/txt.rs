// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! TXT record schema and wire mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::constants::MAX_TXT_STRING_LENGTH;
use crate::schema::{PropertyDefinition, PropertyType, SchemaVersion, ValidationRule};

/// Wire field holding the TXT record list.
pub const WIRE_FIELD: &str = "txtRecords";

/// One TXT record of a record set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TxtRecordEntry {
    /// Text strings of the record. Each string can be up to 255 characters.
    ///
    /// Multiple strings are concatenated by DNS resolvers.
    pub value: Vec<String>,
}

impl TxtRecordEntry {
    #[must_use]
    pub fn new<I, S>(value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into_iter().map(Into::into).collect(),
        }
    }
}

/// Schema versions of the TXT record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::TXT, records_property())]
}

fn records_property() -> PropertyDefinition {
    PropertyDefinition::array("Text records of the record set")
        .required("At least one TXT record is required")
        .with_rule(ValidationRule::min_items(1, "At least one TXT record is required"))
        .with_property(
            "value",
            PropertyDefinition::array("Text strings of the record")
                .with_items(PropertyType::String)
                .with_item_rule(ValidationRule::max_length(
                    MAX_TXT_STRING_LENGTH,
                    format!("TXT strings must be at most {MAX_TXT_STRING_LENGTH} characters"),
                ))
                .required("TXT value is required")
                .with_rule(ValidationRule::min_items(
                    1,
                    "TXT value must contain at least one string",
                )),
        )
}

pub(crate) fn to_wire(entries: &[TxtRecordEntry]) -> Value {
    entries
        .iter()
        .map(|entry| json!({ "value": entry.value }))
        .collect()
}

#[cfg(test)]
#[path = "txt_tests.rs"]
mod txt_tests;
