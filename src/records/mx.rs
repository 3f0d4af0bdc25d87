// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! MX record schema and wire mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::constants::MAX_U16_FIELD;
use crate::schema::{PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the MX record list.
pub const WIRE_FIELD: &str = "mxRecords";

/// One mail exchanger of an MX record set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MxRecordEntry {
    /// Preference of this exchanger. Lower values are preferred.
    #[schemars(range(min = 0, max = 65535))]
    pub preference: i64,

    /// Hostname of the mail server.
    pub exchange: String,
}

impl MxRecordEntry {
    #[must_use]
    pub fn new(preference: i64, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Schema versions of the MX record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::MX, records_property())]
}

fn records_property() -> PropertyDefinition {
    PropertyDefinition::array("Mail exchangers of the record set")
        .required("At least one MX record is required")
        .with_rule(ValidationRule::min_items(1, "At least one MX record is required"))
        .with_property(
            "preference",
            PropertyDefinition::integer("Preference; lower values are preferred")
                .required("MX preference is required")
                .with_rule(ValidationRule::range(
                    0,
                    MAX_U16_FIELD,
                    format!("MX preference must be between 0 and {MAX_U16_FIELD}"),
                )),
        )
        .with_property(
            "exchange",
            PropertyDefinition::string("Mail server hostname")
                .required("MX exchange is required")
                .with_rule(ValidationRule::min_length(1, "MX exchange must not be empty")),
        )
}

pub(crate) fn to_wire(entries: &[MxRecordEntry]) -> Value {
    entries
        .iter()
        .map(|entry| {
            json!({
                "preference": entry.preference,
                "exchange": entry.exchange,
            })
        })
        .collect()
}
