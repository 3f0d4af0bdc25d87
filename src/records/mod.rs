// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Private DNS record kinds, their schema tables and wire mappings.
//!
//! Every record kind is described by a [`RecordKind`] descriptor (resource type, wire field,
//! schema versions) and carries its typed entries in the [`RecordPayload`] tagged union.
//! Each kind has its own submodule with the entry types, schema table and entry transform.
//!
//! # Example
//!
//! ```rust
//! use privatedns::records::{a::ARecordEntry, build_request_body, RecordPayload, RecordProps};
//!
//! let props = RecordProps::new(
//!     "www",
//!     "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Network/privateDnsZones/example.internal",
//!     RecordPayload::A {
//!         records: vec![ARecordEntry::new("10.0.1.4")],
//!     },
//! );
//!
//! let body = build_request_body(&props);
//! assert_eq!(body["properties"]["ttl"], 3600);
//! assert_eq!(body["properties"]["aRecords"][0]["ipv4Address"], "10.0.1.4");
//! ```

pub mod a;
pub mod aaaa;
pub mod cname;
pub mod mx;
pub mod ptr;
pub mod soa;
pub mod srv;
pub mod txt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BODY_PROPERTIES, DEFAULT_API_VERSION, DEFAULT_RECORD_TTL_SECS, MAX_RECORD_NAME_LENGTH,
    MAX_RECORD_TTL_SECS, MIN_RECORD_TTL_SECS, PROPERTY_METADATA, PROPERTY_NAME,
    PROPERTY_PRIVATE_DNS_ZONE_ID, PROPERTY_TTL, RESOURCE_TYPE_AAAA_RECORD, RESOURCE_TYPE_A_RECORD,
    RESOURCE_TYPE_CNAME_RECORD, RESOURCE_TYPE_MX_RECORD, RESOURCE_TYPE_PTR_RECORD,
    RESOURCE_TYPE_SOA_RECORD, RESOURCE_TYPE_SRV_RECORD, RESOURCE_TYPE_TXT_RECORD, ZONE_APEX,
};
use crate::errors::SchemaError;
use crate::schema::{ApiSchema, ChangeType, PropertyDefinition, SchemaVersion, ValidationRule};

use self::a::ARecordEntry;
use self::aaaa::AaaaRecordEntry;
use self::cname::CnameRecord;
use self::mx::MxRecordEntry;
use self::ptr::PtrRecordEntry;
use self::soa::SoaRecord;
use self::srv::SrvRecordEntry;
use self::txt::TxtRecordEntry;

/// Release date of the `2024-06-01` record schemas.
const RELEASE_2024_06_01: NaiveDate = match NaiveDate::from_ymd_opt(2024, 6, 1) {
    Some(date) => date,
    None => panic!("invalid release date"),
};

/// The closed set of private DNS record kinds.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum RecordKind {
    A,
    AAAA,
    CNAME,
    MX,
    PTR,
    SOA,
    SRV,
    TXT,
}

impl RecordKind {
    /// Every record kind, in registration order.
    pub const ALL: [RecordKind; 8] = [
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::CNAME,
        RecordKind::MX,
        RecordKind::PTR,
        RecordKind::SOA,
        RecordKind::SRV,
        RecordKind::TXT,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::MX => "MX",
            RecordKind::PTR => "PTR",
            RecordKind::SOA => "SOA",
            RecordKind::SRV => "SRV",
            RecordKind::TXT => "TXT",
        }
    }

    /// Azure resource type string of this kind.
    #[must_use]
    pub fn resource_type(&self) -> &'static str {
        match self {
            RecordKind::A => RESOURCE_TYPE_A_RECORD,
            RecordKind::AAAA => RESOURCE_TYPE_AAAA_RECORD,
            RecordKind::CNAME => RESOURCE_TYPE_CNAME_RECORD,
            RecordKind::MX => RESOURCE_TYPE_MX_RECORD,
            RecordKind::PTR => RESOURCE_TYPE_PTR_RECORD,
            RecordKind::SOA => RESOURCE_TYPE_SOA_RECORD,
            RecordKind::SRV => RESOURCE_TYPE_SRV_RECORD,
            RecordKind::TXT => RESOURCE_TYPE_TXT_RECORD,
        }
    }

    /// Name of the kind-specific field inside `properties` of the request body.
    ///
    /// This is also the kind-specific required property of the schema.
    #[must_use]
    pub fn wire_field(&self) -> &'static str {
        match self {
            RecordKind::A => a::WIRE_FIELD,
            RecordKind::AAAA => aaaa::WIRE_FIELD,
            RecordKind::CNAME => cname::WIRE_FIELD,
            RecordKind::MX => mx::WIRE_FIELD,
            RecordKind::PTR => ptr::WIRE_FIELD,
            RecordKind::SOA => soa::WIRE_FIELD,
            RecordKind::SRV => srv::WIRE_FIELD,
            RecordKind::TXT => txt::WIRE_FIELD,
        }
    }

    /// Key of the kind-specific data in a serialized [`RecordProps`].
    #[must_use]
    pub fn payload_field(&self) -> &'static str {
        match self {
            RecordKind::CNAME => "cnameRecord",
            RecordKind::SOA => "soaRecord",
            _ => "records",
        }
    }

    /// Schema versions of this kind, oldest first.
    #[must_use]
    pub fn schema_versions(&self) -> Vec<SchemaVersion> {
        match self {
            RecordKind::A => a::schema_versions(),
            RecordKind::AAAA => aaaa::schema_versions(),
            RecordKind::CNAME => cname::schema_versions(),
            RecordKind::MX => mx::schema_versions(),
            RecordKind::PTR => ptr::schema_versions(),
            RecordKind::SOA => soa::schema_versions(),
            RecordKind::SRV => srv::schema_versions(),
            RecordKind::TXT => txt::schema_versions(),
        }
    }

    /// Look a kind up by its resource type string.
    #[must_use]
    pub fn from_resource_type(resource_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.resource_type() == resource_type)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchemaError::UnknownRecordKind {
                value: s.to_string(),
            })
    }
}

/// Kind-specific record data.
///
/// Serialized with a `type` tag so that a manifest entry reads `type: SRV` next to its
/// `records` list.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum RecordPayload {
    /// IPv4 address records
    A { records: Vec<ARecordEntry> },
    /// IPv6 address records
    AAAA { records: Vec<AaaaRecordEntry> },
    /// Canonical name (alias)
    #[serde(rename_all = "camelCase")]
    CNAME { cname_record: CnameRecord },
    /// Mail exchangers
    MX { records: Vec<MxRecordEntry> },
    /// Reverse lookup pointers
    PTR { records: Vec<PtrRecordEntry> },
    /// Start of authority; only supplied fields are sent
    #[serde(rename_all = "camelCase")]
    SOA { soa_record: SoaRecord },
    /// Service locations
    SRV { records: Vec<SrvRecordEntry> },
    /// Text records
    TXT { records: Vec<TxtRecordEntry> },
}

impl RecordPayload {
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordPayload::A { .. } => RecordKind::A,
            RecordPayload::AAAA { .. } => RecordKind::AAAA,
            RecordPayload::CNAME { .. } => RecordKind::CNAME,
            RecordPayload::MX { .. } => RecordKind::MX,
            RecordPayload::PTR { .. } => RecordKind::PTR,
            RecordPayload::SOA { .. } => RecordKind::SOA,
            RecordPayload::SRV { .. } => RecordKind::SRV,
            RecordPayload::TXT { .. } => RecordKind::TXT,
        }
    }

    /// Wire value of the kind-specific field.
    #[must_use]
    pub fn wire_value(&self) -> Value {
        match self {
            RecordPayload::A { records } => a::to_wire(records),
            RecordPayload::AAAA { records } => aaaa::to_wire(records),
            RecordPayload::CNAME { cname_record } => cname::to_wire(cname_record),
            RecordPayload::MX { records } => mx::to_wire(records),
            RecordPayload::PTR { records } => ptr::to_wire(records),
            RecordPayload::SOA { soa_record } => soa::to_wire(soa_record),
            RecordPayload::SRV { records } => srv::to_wire(records),
            RecordPayload::TXT { records } => txt::to_wire(records),
        }
    }
}

/// Properties of one private DNS record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordProps {
    /// Record name relative to the zone. Use "@" for the zone apex.
    ///
    /// Examples: "www", "_sip._tcp", "@"
    pub name: String,

    /// Resource id of the parent private DNS zone.
    pub private_dns_zone_id: String,

    /// Time To Live in seconds. Defaults to 3600.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 2_147_483_647))]
    pub ttl: Option<i64>,

    /// Free-form metadata attached to the record set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,

    /// API version override. Defaults to the latest supported version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kind-specific record data.
    #[serde(flatten)]
    pub record: RecordPayload,
}

impl RecordProps {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        private_dns_zone_id: impl Into<String>,
        record: RecordPayload,
    ) -> Self {
        Self {
            name: name.into(),
            private_dns_zone_id: private_dns_zone_id.into(),
            ttl: None,
            metadata: None,
            api_version: None,
            record,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.record.kind()
    }

    /// Resource id of the parent zone the record is created under.
    #[must_use]
    pub fn parent_zone_id(&self) -> &str {
        &self.private_dns_zone_id
    }

    /// API version the record is pinned to, or `default_version` when unpinned.
    #[must_use]
    pub fn configured_version<'a>(&'a self, default_version: &'a str) -> &'a str {
        self.api_version.as_deref().unwrap_or(default_version)
    }

    #[must_use]
    pub fn effective_ttl(&self) -> i64 {
        self.ttl.unwrap_or(DEFAULT_RECORD_TTL_SECS)
    }

    /// The document validated against the record schema, keyed by schema property names.
    #[must_use]
    pub fn validation_view(&self) -> Value {
        let mut view = Map::new();
        view.insert(PROPERTY_NAME.to_string(), json!(self.name));
        view.insert(
            PROPERTY_PRIVATE_DNS_ZONE_ID.to_string(),
            json!(self.private_dns_zone_id),
        );
        if let Some(ttl) = self.ttl {
            view.insert(PROPERTY_TTL.to_string(), json!(ttl));
        }
        if let Some(metadata) = &self.metadata {
            view.insert(PROPERTY_METADATA.to_string(), json!(metadata));
        }
        view.insert(self.kind().wire_field().to_string(), self.record.wire_value());
        Value::Object(view)
    }
}

/// Build the request body sent to the private DNS API.
///
/// Shape: `{ "properties": { "ttl", <wire field>, "metadata"? } }`. TTL defaults to 3600
/// and metadata is only included when the map is non-empty. Input is assumed validated.
#[must_use]
pub fn build_request_body(props: &RecordProps) -> Value {
    let mut properties = Map::new();
    properties.insert(PROPERTY_TTL.to_string(), json!(props.effective_ttl()));
    properties.insert(
        props.kind().wire_field().to_string(),
        props.record.wire_value(),
    );

    if let Some(metadata) = props.metadata.as_ref().filter(|m| !m.is_empty()) {
        properties.insert(PROPERTY_METADATA.to_string(), json!(metadata));
    }

    let mut body = Map::new();
    body.insert(BODY_PROPERTIES.to_string(), Value::Object(properties));
    Value::Object(body)
}

/// Properties shared by every record kind.
fn common_properties() -> BTreeMap<String, PropertyDefinition> {
    let mut properties = BTreeMap::new();

    properties.insert(
        PROPERTY_NAME.to_string(),
        PropertyDefinition::string(format!(
            "Record name relative to the zone; \"{ZONE_APEX}\" for the zone apex"
        ))
        .required("Record name is required")
        .with_rule(ValidationRule::min_length(1, "Record name must not be empty"))
        .with_rule(ValidationRule::max_length(
            MAX_RECORD_NAME_LENGTH,
            format!("Record name must be at most {MAX_RECORD_NAME_LENGTH} characters"),
        )),
    );

    properties.insert(
        PROPERTY_PRIVATE_DNS_ZONE_ID.to_string(),
        PropertyDefinition::string("Resource id of the parent private DNS zone")
            .required("Private DNS zone id is required")
            .with_rule(ValidationRule::min_length(
                1,
                "Private DNS zone id must not be empty",
            )),
    );

    properties.insert(
        PROPERTY_TTL.to_string(),
        PropertyDefinition::integer("Time to live of the record set in seconds")
            .with_default(json!(DEFAULT_RECORD_TTL_SECS))
            .with_rule(ValidationRule::range(
                MIN_RECORD_TTL_SECS,
                MAX_RECORD_TTL_SECS,
                format!("TTL must be between {MIN_RECORD_TTL_SECS} and {MAX_RECORD_TTL_SECS}"),
            )),
    );

    properties.insert(
        PROPERTY_METADATA.to_string(),
        PropertyDefinition::object("Metadata attached to the record set"),
    );

    properties
}

/// Schema of `kind` at the default API version, with the kind field added to the common
/// properties.
fn record_schema(kind: RecordKind, kind_property: PropertyDefinition) -> ApiSchema {
    let mut properties = common_properties();
    properties.insert(kind.wire_field().to_string(), kind_property);

    ApiSchema::new(kind.resource_type(), DEFAULT_API_VERSION, properties).with_required_order(&[
        PROPERTY_NAME,
        PROPERTY_PRIVATE_DNS_ZONE_ID,
        kind.wire_field(),
    ])
}

/// The initial, active `2024-06-01` version entry of `kind`.
fn initial_version(kind: RecordKind, kind_property: PropertyDefinition) -> SchemaVersion {
    SchemaVersion::active(record_schema(kind, kind_property), RELEASE_2024_06_01).with_change(
        ChangeType::Added,
        format!("Initial release of the private DNS {kind} record schema"),
        false,
    )
}
