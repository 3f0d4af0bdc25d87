// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The azapi base-resource contract and the private DNS record resource.
//!
//! [`AzapiResource`] is the set of hooks a resource implements so the [`crate::stack::Stack`]
//! can render it as an `azapi_resource` block. [`PrivateDnsRecord`] is the single resource
//! type for every private DNS record kind; the kind is carried by its [`RecordProps`].
//!
//! # Example
//!
//! ```rust
//! use privatedns::records::{srv::SrvRecordEntry, RecordPayload, RecordProps};
//! use privatedns::registry::SchemaRegistry;
//! use privatedns::resource::PrivateDnsRecord;
//! use privatedns::stack::Scope;
//!
//! let registry = SchemaRegistry::builtin().expect("builtin tables are consistent");
//! let props = RecordProps::new(
//!     "_sip._tcp",
//!     "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Network/privateDnsZones/example.internal",
//!     RecordPayload::SRV {
//!         records: vec![SrvRecordEntry::new(10, 60, 5060, "sip1.example.com")],
//!     },
//! );
//!
//! let record = PrivateDnsRecord::new(&Scope::root("dns"), "sip", props, &registry)
//!     .expect("valid SRV record");
//! assert!(record.fqdn().as_str().ends_with(".output.properties.fqdn}"));
//! ```

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::constants::{
    AZAPI_RESOURCE_TYPE, DEFAULT_API_VERSION, FQDN_EXPORT_PATH, OUTPUT_FQDN, OUTPUT_ID,
    OUTPUT_NAME,
};
use crate::errors::SchemaError;
use crate::records::{build_request_body, RecordKind, RecordProps};
use crate::registry::SchemaRegistry;
use crate::schema::ApiSchema;
use crate::stack::Scope;
use crate::validation::validate;

/// Deferred reference to an attribute of another block, rendered as `${<fqn>.<attribute>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TerraformReference(String);

impl TerraformReference {
    #[must_use]
    pub fn new(fqn: &str, attribute: &str) -> Self {
        Self(format!("${{{fqn}.{attribute}}}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerraformReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named output of a resource, nested under the resource's construct path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerraformOutput {
    /// Scope of the output; its logical id is the output name
    pub scope: Scope,
    /// Value the output exposes
    pub value: TerraformReference,
}

impl TerraformOutput {
    #[must_use]
    pub fn new(resource_scope: &Scope, logical_id: &str, value: TerraformReference) -> Self {
        Self {
            scope: resource_scope.child(logical_id),
            value,
        }
    }

    /// Logical id of the output (`id`, `name` or `fqdn` for records).
    #[must_use]
    pub fn logical_id(&self) -> &str {
        self.scope.id()
    }

    /// Key of the output in the synthesized `output` block.
    #[must_use]
    pub fn name(&self) -> String {
        self.scope.unique_name()
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "value": self.value })
    }
}

/// Hooks a resource implements to be synthesized as an `azapi_resource` block.
pub trait AzapiResource: fmt::Debug {
    /// Construct scope of this resource
    fn scope(&self) -> &Scope;

    /// Logical id of this resource within its parent scope
    fn logical_id(&self) -> &str {
        self.scope().id()
    }

    /// Resource id of the parent the resource is created under
    fn resolve_parent_id(&self) -> String;

    /// API version used when the caller does not pin one
    fn default_version(&self) -> &str;

    /// API version to resolve against the registry
    fn requested_version(&self) -> &str {
        self.default_version()
    }

    /// Azure resource type, e.g. `Microsoft.Network/privateDnsZones/A`
    fn resource_type(&self) -> &str;

    /// Schema the resource was validated against
    fn api_schema(&self) -> &ApiSchema;

    /// API version the resource is rendered with
    fn api_version(&self) -> &str {
        &self.api_schema().version
    }

    fn requires_location(&self) -> bool {
        false
    }

    fn supports_tags(&self) -> bool {
        false
    }

    fn location(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> Option<&BTreeMap<String, String>> {
        None
    }

    /// Name of the Azure resource
    fn resource_name(&self) -> &str;

    /// Request body sent to the API
    fn create_resource_body(&self) -> Value;

    /// Response paths exported for use in references
    fn response_export_values(&self) -> Vec<String> {
        Vec::new()
    }

    /// Outputs exposed by this resource
    fn outputs(&self) -> Vec<TerraformOutput>;

    /// Fully-qualified Terraform address, e.g. `azapi_resource.dns_web_1a2b3c4d`
    fn fqn(&self) -> String {
        format!("{AZAPI_RESOURCE_TYPE}.{}", self.scope().unique_name())
    }

    /// The `azapi_resource` block of this resource.
    fn terraform_block(&self) -> Value {
        let mut block = Map::new();
        block.insert(
            "type".to_string(),
            json!(format!("{}@{}", self.resource_type(), self.api_version())),
        );
        block.insert("name".to_string(), json!(self.resource_name()));
        block.insert("parent_id".to_string(), json!(self.resolve_parent_id()));
        block.insert("body".to_string(), self.create_resource_body());

        if self.requires_location() {
            if let Some(location) = self.location() {
                block.insert("location".to_string(), json!(location));
            }
        }
        if self.supports_tags() {
            if let Some(tags) = self.tags().filter(|t| !t.is_empty()) {
                block.insert("tags".to_string(), json!(tags));
            }
        }

        let exports = self.response_export_values();
        if !exports.is_empty() {
            block.insert("response_export_values".to_string(), json!(exports));
        }

        Value::Object(block)
    }
}

/// A private DNS record set of any kind.
#[derive(Clone, Debug)]
pub struct PrivateDnsRecord {
    scope: Scope,
    props: RecordProps,
    schema: ApiSchema,
}

impl PrivateDnsRecord {
    /// Create a record under `parent` after resolving and validating its schema.
    ///
    /// The schema version is [`AzapiResource::requested_version`]: `props.api_version` when
    /// set, otherwise [`AzapiResource::default_version`].
    ///
    /// # Errors
    ///
    /// Returns the [`SchemaError`] from version resolution, or [`SchemaError::Validation`]
    /// listing every property violation.
    pub fn new(
        parent: &Scope,
        logical_id: &str,
        props: RecordProps,
        registry: &SchemaRegistry,
    ) -> Result<Self, SchemaError> {
        let kind = props.kind();
        let mut record = Self {
            scope: parent.child(logical_id),
            props,
            schema: ApiSchema::new(kind.resource_type(), DEFAULT_API_VERSION, BTreeMap::new()),
        };

        let entry = registry.resolve(kind.resource_type(), Some(record.requested_version()))?;
        validate(&entry.schema, &record.props.validation_view())?;
        record.schema = entry.schema.clone();

        debug!(
            "Created {} record {} ({}@{})",
            kind,
            record.scope.path(),
            entry.schema.resource_type,
            entry.version
        );
        Ok(record)
    }

    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.props.kind()
    }

    #[must_use]
    pub fn props(&self) -> &RecordProps {
        &self.props
    }

    /// Reference to the Azure resource id of the record set.
    #[must_use]
    pub fn id(&self) -> TerraformReference {
        TerraformReference::new(&self.fqn(), "id")
    }

    /// Reference to the name of the record set.
    #[must_use]
    pub fn name(&self) -> TerraformReference {
        TerraformReference::new(&self.fqn(), "name")
    }

    /// Reference to the FQDN reported by the API.
    #[must_use]
    pub fn fqdn(&self) -> TerraformReference {
        TerraformReference::new(&self.fqn(), &format!("output.{FQDN_EXPORT_PATH}"))
    }
}

impl AzapiResource for PrivateDnsRecord {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn resolve_parent_id(&self) -> String {
        self.props.parent_zone_id().to_string()
    }

    fn default_version(&self) -> &str {
        DEFAULT_API_VERSION
    }

    fn requested_version(&self) -> &str {
        self.props.configured_version(self.default_version())
    }

    fn resource_type(&self) -> &str {
        self.kind().resource_type()
    }

    fn api_schema(&self) -> &ApiSchema {
        &self.schema
    }

    fn resource_name(&self) -> &str {
        &self.props.name
    }

    fn create_resource_body(&self) -> Value {
        build_request_body(&self.props)
    }

    fn response_export_values(&self) -> Vec<String> {
        vec![FQDN_EXPORT_PATH.to_string()]
    }

    fn outputs(&self) -> Vec<TerraformOutput> {
        vec![
            TerraformOutput::new(&self.scope, OUTPUT_ID, self.id()),
            TerraformOutput::new(&self.scope, OUTPUT_NAME, self.name()),
            TerraformOutput::new(&self.scope, OUTPUT_FQDN, self.fqdn()),
        ]
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod resource_tests;
