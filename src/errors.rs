// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for schema registration, validation and synthesis.
//!
//! This module provides specialized error types for:
//! - Schema table defects detected while building the registry
//! - API version resolution (unknown, sunset or missing versions)
//! - Validation of record properties against a registered schema
//! - Construct tree and Terraform JSON synthesis failures

use std::fmt;
use thiserror::Error;

/// A single rule violation found while validating record properties.
///
/// `path` uses dotted notation with array indices, e.g. `srvRecords[0].port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Location of the offending value within the validated document
    pub path: String,
    /// Name of the rule that failed (e.g. "required", "range", "type")
    pub rule: String,
    /// Human-readable explanation taken from the schema table
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.rule)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by the schema registry, version resolution and the validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A resource type was registered twice
    ///
    /// Every resource type must be registered exactly once, before the registry is built.
    #[error("Resource type '{resource_type}' is already registered")]
    AlreadyRegistered {
        /// The resource type string (e.g. `Microsoft.Network/privateDnsZones/A`)
        resource_type: String,
    },

    /// A version list was registered without any entries
    #[error("Resource type '{resource_type}' was registered without any schema versions")]
    EmptyVersionList {
        /// The resource type string
        resource_type: String,
    },

    /// The same version appears more than once for a resource type
    #[error("Resource type '{resource_type}' declares version '{version}' more than once")]
    DuplicateVersion {
        /// The resource type string
        resource_type: String,
        /// The duplicated version
        version: String,
    },

    /// A schema table breaks one of its structural invariants
    ///
    /// These are defects in the static tables, surfaced when the registry is built.
    #[error("Invalid schema for '{resource_type}@{version}': {reason}")]
    InvalidSchema {
        /// The resource type string
        resource_type: String,
        /// The schema version
        version: String,
        /// Which invariant is broken
        reason: String,
    },

    /// Lookup of a resource type that was never registered
    #[error("Resource type '{resource_type}' is not registered")]
    UnregisteredResourceType {
        /// The resource type string
        resource_type: String,
    },

    /// An explicitly requested version does not exist
    #[error("Version '{version}' is not registered for '{resource_type}'")]
    UnknownVersion {
        /// The resource type string
        resource_type: String,
        /// The requested version
        version: String,
    },

    /// An explicitly requested version has been sunset
    #[error("Version '{version}' of '{resource_type}' is sunset and can no longer be used")]
    VersionSunset {
        /// The resource type string
        resource_type: String,
        /// The requested version
        version: String,
    },

    /// No active version exists to fall back to
    #[error("Resource type '{resource_type}' has no active schema version")]
    NoActiveVersion {
        /// The resource type string
        resource_type: String,
    },

    /// Record kind name could not be parsed
    #[error("Unknown record kind '{value}' (expected one of A, AAAA, CNAME, MX, PTR, SOA, SRV, TXT)")]
    UnknownRecordKind {
        /// The rejected input
        value: String,
    },

    /// Record properties violate the registered schema
    #[error(
        "Validation failed for '{resource_type}@{version}': {}",
        join_violations(.violations)
    )]
    Validation {
        /// The resource type string
        resource_type: String,
        /// The schema version validated against
        version: String,
        /// Every violation found, in schema order
        violations: Vec<FieldViolation>,
    },
}

/// Errors raised while assembling a stack and rendering Terraform JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// Logical ids must be unique within their parent scope
    #[error("Logical id '{id}' is already used in scope '{scope}'")]
    DuplicateId {
        /// Path of the parent scope
        scope: String,
        /// The duplicated logical id
        id: String,
    },

    /// Logical ids must not be empty
    #[error("Logical id in scope '{scope}' must not be empty")]
    EmptyId {
        /// Path of the parent scope
        scope: String,
    },

    /// Resources must be created directly under the stack they are added to
    #[error("Resource '{path}' was not created under stack '{stack}'")]
    ForeignScope {
        /// Path of the stack
        stack: String,
        /// Construct path of the rejected resource
        path: String,
    },

    /// Serializing the synthesized document failed
    #[error("Failed to render Terraform JSON: {reason}")]
    Render {
        /// Underlying serializer message
        reason: String,
    },
}

impl From<serde_json::Error> for SynthError {
    fn from(err: serde_json::Error) -> Self {
        SynthError::Render {
            reason: err.to_string(),
        }
    }
}
