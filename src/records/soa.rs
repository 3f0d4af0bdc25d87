// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! SOA record schema and wire mapping.
//!
//! Every SOA field is optional. The wire object carries exactly the fields the caller
//! supplied, so Azure keeps its own values for the rest.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{initial_version, RecordKind};
use crate::constants::{MAX_RECORD_TTL_SECS, MAX_SOA_SERIAL};
use crate::schema::{PropertyDefinition, SchemaVersion, ValidationRule};

/// Wire field holding the SOA record.
pub const WIRE_FIELD: &str = "soaRecord";

/// Start of authority data of a private DNS zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SoaRecord {
    /// Authoritative name server host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Email of the zone administrator, with "@" replaced by ".".
    ///
    /// Example: `admin.example.com` for admin@example.com
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Zone serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 4_294_967_295_i64))]
    pub serial_number: Option<i64>,

    /// Refresh interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 2_147_483_647))]
    pub refresh_time: Option<i64>,

    /// Retry interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 2_147_483_647))]
    pub retry_time: Option<i64>,

    /// Expire time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 2_147_483_647))]
    pub expire_time: Option<i64>,

    /// Negative caching TTL in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 2_147_483_647))]
    pub minimum_ttl: Option<i64>,
}

/// Schema versions of the SOA record, oldest first.
#[must_use]
pub fn schema_versions() -> Vec<SchemaVersion> {
    vec![initial_version(RecordKind::SOA, record_property())]
}

fn seconds_property(description: &str, label: &str) -> PropertyDefinition {
    PropertyDefinition::integer(description).with_rule(ValidationRule::range(
        0,
        MAX_RECORD_TTL_SECS,
        format!("{label} must be between 0 and {MAX_RECORD_TTL_SECS}"),
    ))
}

fn record_property() -> PropertyDefinition {
    PropertyDefinition::object("Start of authority data of the zone")
        .required("SOA record is required")
        .with_property(
            "host",
            PropertyDefinition::string("Authoritative name server host")
                .with_rule(ValidationRule::min_length(1, "SOA host must not be empty")),
        )
        .with_property(
            "email",
            PropertyDefinition::string("Zone administrator email")
                .with_rule(ValidationRule::min_length(1, "SOA email must not be empty")),
        )
        .with_property(
            "serialNumber",
            PropertyDefinition::integer("Zone serial number").with_rule(ValidationRule::range(
                0,
                MAX_SOA_SERIAL,
                format!("SOA serial number must be between 0 and {MAX_SOA_SERIAL}"),
            )),
        )
        .with_property(
            "refreshTime",
            seconds_property("Refresh interval in seconds", "SOA refresh time"),
        )
        .with_property(
            "retryTime",
            seconds_property("Retry interval in seconds", "SOA retry time"),
        )
        .with_property(
            "expireTime",
            seconds_property("Expire time in seconds", "SOA expire time"),
        )
        .with_property(
            "minimumTtl",
            seconds_property("Negative caching TTL in seconds", "SOA minimum TTL"),
        )
}

pub(crate) fn to_wire(record: &SoaRecord) -> Value {
    let mut soa = Map::new();

    if let Some(host) = &record.host {
        soa.insert("host".to_string(), json!(host));
    }
    if let Some(email) = &record.email {
        soa.insert("email".to_string(), json!(email));
    }
    if let Some(serial_number) = record.serial_number {
        soa.insert("serialNumber".to_string(), json!(serial_number));
    }
    if let Some(refresh_time) = record.refresh_time {
        soa.insert("refreshTime".to_string(), json!(refresh_time));
    }
    if let Some(retry_time) = record.retry_time {
        soa.insert("retryTime".to_string(), json!(retry_time));
    }
    if let Some(expire_time) = record.expire_time {
        soa.insert("expireTime".to_string(), json!(expire_time));
    }
    if let Some(minimum_ttl) = record.minimum_ttl {
        soa.insert("minimumTtl".to_string(), json!(minimum_ttl));
    }

    Value::Object(soa)
}

#[cfg(test)]
#[path = "soa_tests.rs"]
mod soa_tests;
