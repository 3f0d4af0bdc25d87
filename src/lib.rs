// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # privatedns - Azure Private DNS record schemas and synthesis
//!
//! Typed, versioned schemas for the Azure Private DNS record kinds A, AAAA, CNAME, MX, PTR,
//! SOA, SRV and TXT, and a single record resource that validates its properties, builds the
//! API request body and renders Terraform JSON for the `azapi` provider.
//!
//! ## Modules
//!
//! - [`schema`] - Property definitions, validation rules and versioned schemas
//! - [`registry`] - Immutable registry of schema versions per resource type
//! - [`validation`] - Rule evaluation with full violation reporting
//! - [`records`] - Record kinds, typed payloads and request body assembly
//! - [`resource`] - The azapi base-resource contract and the private DNS record resource
//! - [`stack`] - Construct scopes and Terraform JSON synthesis
//! - [`manifest`] - YAML manifests describing a stack of records
//!
//! ## Example
//!
//! ```rust
//! use privatedns::records::{a::ARecordEntry, RecordPayload, RecordProps};
//! use privatedns::registry::SchemaRegistry;
//! use privatedns::resource::PrivateDnsRecord;
//! use privatedns::stack::{ProviderConfig, Stack};
//!
//! let registry = SchemaRegistry::builtin().expect("builtin tables are consistent");
//! let mut stack = Stack::new("private-dns", ProviderConfig::default());
//!
//! let props = RecordProps::new(
//!     "www",
//!     "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Network/privateDnsZones/example.internal",
//!     RecordPayload::A {
//!         records: vec![ARecordEntry::new("10.0.1.4"), ARecordEntry::new("10.0.1.5")],
//!     },
//! )
//! .with_ttl(300);
//!
//! let record = PrivateDnsRecord::new(stack.scope(), "web", props, &registry)
//!     .expect("valid A record");
//! stack.add(record).expect("unique logical id");
//!
//! let document = stack.synthesize();
//! assert_eq!(document["resource"]["azapi_resource"].as_object().map(|r| r.len()), Some(1));
//! ```

pub mod constants;
pub mod errors;
pub mod manifest;
pub mod records;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod stack;
pub mod validation;

#[cfg(test)]
mod errors_tests;
