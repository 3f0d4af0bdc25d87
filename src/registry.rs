// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Immutable registry of versioned API schemas.
//!
//! The registry is assembled once at process start with [`SchemaRegistryBuilder`] and is
//! read-only afterwards. It is passed by reference to every resource constructor; nothing
//! registers schemas as a side effect of loading a type.
//!
//! # Example
//!
//! ```rust
//! use privatedns::registry::SchemaRegistry;
//!
//! let registry = SchemaRegistry::builtin().expect("builtin tables are consistent");
//! let entry = registry
//!     .resolve("Microsoft.Network/privateDnsZones/SRV", None)
//!     .expect("SRV is registered");
//! assert_eq!(entry.version, "2024-06-01");
//! ```

use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::errors::SchemaError;
use crate::records::RecordKind;
use crate::schema::{SchemaVersion, SupportLevel};

/// Collects schema registrations before freezing them into a [`SchemaRegistry`].
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    entries: BTreeMap<String, Vec<SchemaVersion>>,
}

impl SchemaRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every version of `resource_type`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::AlreadyRegistered`] if the type was registered before,
    /// [`SchemaError::EmptyVersionList`] for an empty list and
    /// [`SchemaError::DuplicateVersion`] if a version appears twice.
    pub fn register(
        mut self,
        resource_type: &str,
        mut versions: Vec<SchemaVersion>,
    ) -> Result<Self, SchemaError> {
        if self.entries.contains_key(resource_type) {
            return Err(SchemaError::AlreadyRegistered {
                resource_type: resource_type.to_string(),
            });
        }

        if versions.is_empty() {
            return Err(SchemaError::EmptyVersionList {
                resource_type: resource_type.to_string(),
            });
        }

        let duplicate = {
            let mut seen = HashSet::new();
            versions
                .iter()
                .find(|v| !seen.insert(v.version.as_str()))
                .map(|v| v.version.clone())
        };
        if let Some(version) = duplicate {
            return Err(SchemaError::DuplicateVersion {
                resource_type: resource_type.to_string(),
                version,
            });
        }

        versions.sort_by(|a, b| {
            a.release_date
                .cmp(&b.release_date)
                .then_with(|| a.version.cmp(&b.version))
        });

        debug!(
            "Registered {} schema version(s) for {}",
            versions.len(),
            resource_type
        );
        self.entries.insert(resource_type.to_string(), versions);
        Ok(self)
    }

    /// Check every registered table and freeze the registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSchema`] if a schema breaks its invariants or does not
    /// match the resource type and version it was registered under.
    pub fn build(self) -> Result<SchemaRegistry, SchemaError> {
        for (resource_type, versions) in &self.entries {
            for entry in versions {
                if entry.schema.resource_type != *resource_type
                    || entry.schema.version != entry.version
                {
                    return Err(SchemaError::InvalidSchema {
                        resource_type: resource_type.clone(),
                        version: entry.version.clone(),
                        reason: format!(
                            "schema declares {}@{}",
                            entry.schema.resource_type, entry.schema.version
                        ),
                    });
                }
                entry.schema.check_invariants()?;
            }
        }

        debug!("Schema registry built with {} resource type(s)", self.entries.len());
        Ok(SchemaRegistry {
            entries: self.entries,
        })
    }
}

/// Read-only table of schema versions per resource type.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    entries: BTreeMap<String, Vec<SchemaVersion>>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new()
    }

    /// Registry holding every private DNS record kind.
    ///
    /// # Errors
    ///
    /// Returns an error only if the builtin tables are inconsistent.
    pub fn builtin() -> Result<Self, SchemaError> {
        RecordKind::ALL
            .iter()
            .try_fold(Self::builder(), |builder, kind| {
                builder.register(kind.resource_type(), kind.schema_versions())
            })?
            .build()
    }

    /// Registered resource types, sorted.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every version of `resource_type`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnregisteredResourceType`] for unknown types.
    pub fn versions(&self, resource_type: &str) -> Result<&[SchemaVersion], SchemaError> {
        self.entries
            .get(resource_type)
            .map(Vec::as_slice)
            .ok_or_else(|| SchemaError::UnregisteredResourceType {
                resource_type: resource_type.to_string(),
            })
    }

    /// Resolve the schema version an instance should use.
    ///
    /// With an explicit `requested` version the entry must exist and must not be sunset;
    /// deprecated entries are returned with a warning. Without one, the newest active entry
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnregisteredResourceType`], [`SchemaError::UnknownVersion`],
    /// [`SchemaError::VersionSunset`] or [`SchemaError::NoActiveVersion`].
    pub fn resolve(
        &self,
        resource_type: &str,
        requested: Option<&str>,
    ) -> Result<&SchemaVersion, SchemaError> {
        let versions = self.versions(resource_type)?;

        let Some(requested) = requested else {
            return versions
                .iter()
                .rev()
                .find(|v| v.support_level == SupportLevel::Active)
                .ok_or_else(|| SchemaError::NoActiveVersion {
                    resource_type: resource_type.to_string(),
                });
        };

        let entry = versions
            .iter()
            .find(|v| v.version == requested)
            .ok_or_else(|| SchemaError::UnknownVersion {
                resource_type: resource_type.to_string(),
                version: requested.to_string(),
            })?;

        match entry.support_level {
            SupportLevel::Active => Ok(entry),
            SupportLevel::Deprecated => {
                warn!(
                    "Version {} of {} is deprecated{}",
                    requested,
                    resource_type,
                    entry
                        .sunset_date
                        .map(|date| format!(" and will be sunset on {date}"))
                        .unwrap_or_default()
                );
                Ok(entry)
            }
            SupportLevel::Sunset => Err(SchemaError::VersionSunset {
                resource_type: resource_type.to_string(),
                version: requested.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
