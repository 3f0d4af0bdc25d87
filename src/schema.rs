// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Versioned API schema types.
//!
//! A schema describes, per property, its data type, whether it is required, an optional
//! default, a description and the validation rules that apply to it. Array and object
//! properties may declare nested item properties, which the validator walks recursively.
//!
//! Schemas are wrapped in a [`SchemaVersion`] carrying the API version tag, support level,
//! lifecycle dates and change log. The [`crate::registry`] groups these per resource type.
//!
//! # Example
//!
//! ```rust
//! use privatedns::schema::{ApiSchema, PropertyDefinition, ValidationRule};
//! use std::collections::BTreeMap;
//!
//! let mut properties = BTreeMap::new();
//! properties.insert(
//!     "name".to_string(),
//!     PropertyDefinition::string("Relative record name").required("Record name is required"),
//! );
//! properties.insert(
//!     "ttl".to_string(),
//!     PropertyDefinition::integer("Time to live in seconds")
//!         .with_rule(ValidationRule::range(1, 2_147_483_647, "TTL out of range")),
//! );
//!
//! let schema = ApiSchema::new("Example/records", "2024-06-01", properties);
//! assert_eq!(schema.required, vec!["name".to_string()]);
//! assert_eq!(schema.optional, vec!["ttl".to_string()]);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::errors::SchemaError;

/// JSON data type of a schema property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Object,
    Array,
}

impl PropertyType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Integer => "integer",
            PropertyType::Object => "object",
            PropertyType::Array => "array",
        }
    }

    /// Whether a JSON value has this data type.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            PropertyType::String => value.is_string(),
            PropertyType::Integer => value.is_i64() || value.is_u64(),
            PropertyType::Object => value.is_object(),
            PropertyType::Array => value.is_array(),
        }
    }
}

/// Textual address formats a string property can be checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    Ipv4,
    Ipv6,
}

impl AddressFormat {
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            AddressFormat::Ipv4 => text.parse::<Ipv4Addr>().is_ok(),
            AddressFormat::Ipv6 => text.parse::<Ipv6Addr>().is_ok(),
        }
    }
}

/// The check a validation rule performs, with its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RuleKind {
    /// The property must be present and non-null
    Required,
    /// Integer value must lie in `[min, max]`
    Range { min: i64, max: i64 },
    /// String must have at least `min` characters
    MinLength { min: usize },
    /// String must have at most `max` characters
    MaxLength { max: usize },
    /// Array must have at least `min` elements
    MinItems { min: usize },
    /// String must parse as the given address format
    Format { format: AddressFormat },
}

impl RuleKind {
    /// Short rule name used in violation reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Range { .. } => "range",
            RuleKind::MinLength { .. } => "minLength",
            RuleKind::MaxLength { .. } => "maxLength",
            RuleKind::MinItems { .. } => "minItems",
            RuleKind::Format { .. } => "format",
        }
    }
}

/// A validation rule: what to check plus the message reported when the check fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(flatten)]
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationRule {
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Required,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn range(min: i64, max: i64, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Range { min, max },
            message: message.into(),
        }
    }

    #[must_use]
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::MinLength { min },
            message: message.into(),
        }
    }

    #[must_use]
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::MaxLength { max },
            message: message.into(),
        }
    }

    #[must_use]
    pub fn min_items(min: usize, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::MinItems { min },
            message: message.into(),
        }
    }

    #[must_use]
    pub fn format(format: AddressFormat, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Format { format },
            message: message.into(),
        }
    }
}

/// Definition of a single schema property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// JSON data type of the value
    #[serde(rename = "type")]
    pub data_type: PropertyType,

    /// Whether the property must be supplied
    pub required: bool,

    /// Value the resource applies when the property is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Human-readable description
    pub description: String,

    /// Rules checked against the value
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,

    /// Element type of scalar arrays (e.g. TXT string lists)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<PropertyType>,

    /// Rules checked against each element of a scalar array
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_validation: Vec<ValidationRule>,

    /// Nested properties of an object, or of each element of an array of objects
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyDefinition>,
}

impl PropertyDefinition {
    fn of_type(data_type: PropertyType, description: impl Into<String>) -> Self {
        Self {
            data_type,
            required: false,
            default: None,
            description: description.into(),
            validation: Vec::new(),
            item_type: None,
            item_validation: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn string(description: impl Into<String>) -> Self {
        Self::of_type(PropertyType::String, description)
    }

    #[must_use]
    pub fn integer(description: impl Into<String>) -> Self {
        Self::of_type(PropertyType::Integer, description)
    }

    #[must_use]
    pub fn object(description: impl Into<String>) -> Self {
        Self::of_type(PropertyType::Object, description)
    }

    #[must_use]
    pub fn array(description: impl Into<String>) -> Self {
        Self::of_type(PropertyType::Array, description)
    }

    /// Mark the property as required, attaching the message reported when it is missing.
    #[must_use]
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.validation.insert(0, ValidationRule::required(message));
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.validation.push(rule);
        self
    }

    #[must_use]
    pub fn with_items(mut self, item_type: PropertyType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Add a rule checked against every element of a scalar array.
    #[must_use]
    pub fn with_item_rule(mut self, rule: ValidationRule) -> Self {
        self.item_validation.push(rule);
        self
    }

    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        definition: PropertyDefinition,
    ) -> Self {
        self.properties.insert(name.into(), definition);
        self
    }
}

/// API schema of one resource type at one version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSchema {
    pub resource_type: String,
    pub version: String,
    pub properties: BTreeMap<String, PropertyDefinition>,
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl ApiSchema {
    /// Build a schema, deriving the required and optional lists from the property flags.
    ///
    /// Both lists follow property key order; see [`ApiSchema::with_required_order`].
    #[must_use]
    pub fn new(
        resource_type: impl Into<String>,
        version: impl Into<String>,
        properties: BTreeMap<String, PropertyDefinition>,
    ) -> Self {
        let required = properties
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(name, _)| name.clone())
            .collect();
        let optional = properties
            .iter()
            .filter(|(_, def)| !def.required)
            .map(|(name, _)| name.clone())
            .collect();

        Self {
            resource_type: resource_type.into(),
            version: version.into(),
            properties,
            required,
            optional,
        }
    }

    /// Reorder the required list. Names not in `order` keep their relative position at the end.
    #[must_use]
    pub fn with_required_order(mut self, order: &[&str]) -> Self {
        self.required.sort_by_key(|name| {
            order
                .iter()
                .position(|o| *o == name.as_str())
                .unwrap_or(order.len())
        });
        self
    }

    /// Every validation rule of the schema, with the property path it applies to.
    ///
    /// Array element paths use `[]`, e.g. `srvRecords[].port`.
    #[must_use]
    pub fn validation_rules(&self) -> Vec<(String, &ValidationRule)> {
        let mut rules = Vec::new();
        collect_rules(&self.properties, "", &mut rules);
        rules
    }

    /// Check the structural invariants of the table.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSchema`] if a required name is not a property, if a
    /// property flagged required is missing from the required list, or if the optional
    /// list disagrees with the property flags.
    pub fn check_invariants(&self) -> Result<(), SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidSchema {
            resource_type: self.resource_type.clone(),
            version: self.version.clone(),
            reason,
        };

        for name in &self.required {
            match self.properties.get(name) {
                None => return Err(invalid(format!("required property '{name}' is not defined"))),
                Some(def) if !def.required => {
                    return Err(invalid(format!(
                        "property '{name}' is listed as required but not flagged required"
                    )))
                }
                Some(_) => {}
            }
        }

        for (name, def) in &self.properties {
            if def.required && !self.required.contains(name) {
                return Err(invalid(format!(
                    "property '{name}' is flagged required but missing from the required list"
                )));
            }
            if !def.required && !self.optional.contains(name) {
                return Err(invalid(format!(
                    "property '{name}' is optional but missing from the optional list"
                )));
            }
        }

        if let Some(name) = self.optional.iter().find(|n| self.required.contains(n)) {
            return Err(invalid(format!(
                "property '{name}' is listed as both required and optional"
            )));
        }

        Ok(())
    }
}

fn collect_rules<'a>(
    properties: &'a BTreeMap<String, PropertyDefinition>,
    prefix: &str,
    out: &mut Vec<(String, &'a ValidationRule)>,
) {
    for (name, def) in properties {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        out.extend(def.validation.iter().map(|rule| (path.clone(), rule)));

        let nested_prefix = match def.data_type {
            PropertyType::Array => format!("{path}[]"),
            _ => path,
        };
        out.extend(
            def.item_validation
                .iter()
                .map(|rule| (nested_prefix.clone(), rule)),
        );
        collect_rules(&def.properties, &nested_prefix, out);
    }
}

/// Support status of a schema version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    /// Recommended for new resources
    Active,
    /// Usable, but a newer version should be preferred
    Deprecated,
    /// Rejected by version resolution
    Sunset,
}

/// Kind of change recorded in a version's change log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
}

/// One change log line of a schema version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogEntry {
    pub change_type: ChangeType,
    pub description: String,
    pub breaking: bool,
}

/// A schema together with its version metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaVersion {
    pub version: String,
    pub schema: ApiSchema,
    pub support_level: SupportLevel,
    pub release_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset_date: Option<NaiveDate>,
    #[serde(default)]
    pub change_log: Vec<ChangeLogEntry>,
}

impl SchemaVersion {
    /// An active version released on `release_date`, with no deprecation scheduled.
    #[must_use]
    pub fn active(schema: ApiSchema, release_date: NaiveDate) -> Self {
        Self {
            version: schema.version.clone(),
            schema,
            support_level: SupportLevel::Active,
            release_date,
            deprecation_date: None,
            sunset_date: None,
            change_log: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_change(
        mut self,
        change_type: ChangeType,
        description: impl Into<String>,
        breaking: bool,
    ) -> Self {
        self.change_log.push(ChangeLogEntry {
            change_type,
            description: description.into(),
            breaking,
        });
        self
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod schema_tests;
