// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! AAAA record schema and wire mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{initial_version, RecordKind};
use crate::schema::{AddressFormat, PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the AAAA record list.
pub const WIRE_FIELD: &str = "aaaaRecords";

/// One IPv6 address of an AAAA record set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AaaaRecordEntry {
    /// IPv6 address in standard notation.
    ///
    /// Examples: "`2001:db8::1`", "`fd00::4`"
    pub ipv6_address: String,
}

impl AaaaRecordEntry {
    #[must_use]
    pub fn new(ipv6_address: impl Into<String>) -> Self {
        Self {
            ipv6_address: ipv6_address.into(),
        }
    }
}

/// Schema versions of the AAAA record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::AAAA, records_property())]
}

fn records_property() -> PropertyDefinition {
    PropertyDefinition::array("IPv6 addresses of the record set")
        .required("At least one AAAA record is required")
        .with_rule(ValidationRule::min_items(1, "At least one AAAA record is required"))
        .with_property(
            "ipv6Address",
            PropertyDefinition::string("IPv6 address")
                .required("IPv6 address is required")
                .with_rule(ValidationRule::format(
                    AddressFormat::Ipv6,
                    "IPv6 address must be in standard notation",
                )),
        )
}

pub(crate) fn to_wire(entries: &[AaaaRecordEntry]) -> Value {
    entries
        .iter()
        .map(|entry| json!({ "ipv6Address": entry.ipv6_address }))
        .collect()
}
