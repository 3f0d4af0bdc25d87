// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Construct scopes and the synthesis stack.
//!
//! A [`Stack`] is the root [`Scope`] of a deployment. Record resources are added to it and
//! [`Stack::synthesize`] renders them as Terraform JSON for the `azapi` provider:
//!
//! ```text
//! {
//!   "terraform": { "required_providers": { "azapi": { "source", "version" } } },
//!   "provider":  { "azapi": [ {} ] },
//!   "resource":  { "azapi_resource": { "<unique name>": { ... } } },
//!   "output":    { "<unique name>": { "value": "${...}" } }
//! }
//! ```
//!
//! Unique names are derived from the construct path, so the same manifest always
//! synthesizes the same document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::constants::{
    AZAPI_PROVIDER_NAME, AZAPI_PROVIDER_SOURCE, AZAPI_PROVIDER_VERSION, AZAPI_RESOURCE_TYPE,
    UNIQUE_NAME_HASH_LEN,
};
use crate::errors::SynthError;
use crate::resource::AzapiResource;

/// Separator between construct path segments.
const PATH_SEPARATOR: &str = "/";

/// Position of a construct in the tree, as the list of logical ids from the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scope {
    segments: Vec<String>,
}

impl Scope {
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Scope of a construct with `logical_id` nested under this one.
    #[must_use]
    pub fn child(&self, logical_id: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(logical_id.into());
        Self { segments }
    }

    /// Logical id of this construct (the last path segment).
    #[must_use]
    pub fn id(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Full construct path, e.g. `private-dns/web`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join(PATH_SEPARATOR)
    }

    /// Path of the enclosing scope. Empty for a root scope.
    #[must_use]
    pub fn parent_path(&self) -> String {
        match self.segments.split_last() {
            Some((_, parents)) => parents.join(PATH_SEPARATOR),
            None => String::new(),
        }
    }

    /// Stable Terraform identifier for this construct.
    ///
    /// Format: `<sanitized path>_<first 8 hex chars of sha256(path)>`. Characters that are
    /// not valid in a Terraform identifier are replaced with `_`.
    #[must_use]
    pub fn unique_name(&self) -> String {
        let path = self.path();

        let mut hasher = Sha256::new();
        hasher.update(path.as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        let readable = self
            .segments
            .iter()
            .map(|segment| sanitize_segment(segment))
            .collect::<Vec<_>>()
            .join("_");

        let prefix = if readable.starts_with(|c: char| c.is_ascii_digit()) {
            "_"
        } else {
            ""
        };

        format!("{prefix}{readable}_{}", &digest[..UNIQUE_NAME_HASH_LEN])
    }
}

fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Provider requirement written to the `terraform.required_providers` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProviderConfig {
    /// Registry source of the azapi provider.
    #[serde(default = "default_provider_source")]
    pub source: String,

    /// Version constraint of the azapi provider.
    #[serde(default = "default_provider_version")]
    pub version: String,
}

fn default_provider_source() -> String {
    AZAPI_PROVIDER_SOURCE.to_string()
}

fn default_provider_version() -> String {
    AZAPI_PROVIDER_VERSION.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            source: default_provider_source(),
            version: default_provider_version(),
        }
    }
}

/// Root construct collecting resources for synthesis.
#[derive(Debug)]
pub struct Stack {
    scope: Scope,
    provider: ProviderConfig,
    resources: Vec<Box<dyn AzapiResource>>,
}

impl Stack {
    #[must_use]
    pub fn new(name: impl Into<String>, provider: ProviderConfig) -> Self {
        Self {
            scope: Scope::root(name),
            provider,
            resources: Vec::new(),
        }
    }

    /// Scope that resources of this stack are created under.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Add a resource to the stack.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::EmptyId`] if the resource has no logical id,
    /// [`SynthError::ForeignScope`] if it was not created under this stack's scope, and
    /// [`SynthError::DuplicateId`] if its construct path is already taken.
    pub fn add<R: AzapiResource + 'static>(&mut self, resource: R) -> Result<(), SynthError> {
        let scope = resource.scope();

        if resource.logical_id().is_empty() {
            return Err(SynthError::EmptyId {
                scope: scope.parent_path(),
            });
        }

        if scope.parent_path() != self.scope.path() {
            return Err(SynthError::ForeignScope {
                stack: self.scope.path(),
                path: scope.path(),
            });
        }

        if self.resources.iter().any(|existing| existing.scope() == scope) {
            return Err(SynthError::DuplicateId {
                scope: scope.parent_path(),
                id: resource.logical_id().to_string(),
            });
        }

        debug!("Added {} as {}", scope.path(), resource.fqn());
        self.resources.push(Box::new(resource));
        Ok(())
    }

    /// Render every resource and output as a Terraform JSON document.
    #[must_use]
    pub fn synthesize(&self) -> Value {
        let mut resources = Map::new();
        let mut outputs = Map::new();

        for resource in &self.resources {
            resources.insert(resource.scope().unique_name(), resource.terraform_block());
            for output in resource.outputs() {
                outputs.insert(output.name(), output.to_json());
            }
        }

        let mut document = Map::new();
        document.insert(
            "terraform".to_string(),
            json!({
                "required_providers": {
                    AZAPI_PROVIDER_NAME: {
                        "source": self.provider.source,
                        "version": self.provider.version,
                    }
                }
            }),
        );
        document.insert(
            "provider".to_string(),
            json!({ AZAPI_PROVIDER_NAME: [{}] }),
        );

        if !resources.is_empty() {
            let mut by_type = Map::new();
            by_type.insert(AZAPI_RESOURCE_TYPE.to_string(), Value::Object(resources));
            document.insert("resource".to_string(), Value::Object(by_type));
        }
        if !outputs.is_empty() {
            document.insert("output".to_string(), Value::Object(outputs));
        }

        info!(
            "Synthesized stack {} with {} resource(s)",
            self.scope.path(),
            self.resources.len()
        );
        Value::Object(document)
    }

    /// Synthesize and pretty-print the Terraform JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Render`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, SynthError> {
        Ok(serde_json::to_string_pretty(&self.synthesize())?)
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod stack_tests;
