// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for private DNS record synthesis.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// Default Azure API version used by every private DNS record kind
pub const DEFAULT_API_VERSION: &str = "2024-06-01";

/// Resource type for private DNS zone A records
pub const RESOURCE_TYPE_A_RECORD: &str = "Microsoft.Network/privateDnsZones/A";

/// Resource type for private DNS zone AAAA records
pub const RESOURCE_TYPE_AAAA_RECORD: &str = "Microsoft.Network/privateDnsZones/AAAA";

/// Resource type for private DNS zone CNAME records
pub const RESOURCE_TYPE_CNAME_RECORD: &str = "Microsoft.Network/privateDnsZones/CNAME";

/// Resource type for private DNS zone MX records
pub const RESOURCE_TYPE_MX_RECORD: &str = "Microsoft.Network/privateDnsZones/MX";

/// Resource type for private DNS zone PTR records
pub const RESOURCE_TYPE_PTR_RECORD: &str = "Microsoft.Network/privateDnsZones/PTR";

/// Resource type for private DNS zone SOA records
pub const RESOURCE_TYPE_SOA_RECORD: &str = "Microsoft.Network/privateDnsZones/SOA";

/// Resource type for private DNS zone SRV records
pub const RESOURCE_TYPE_SRV_RECORD: &str = "Microsoft.Network/privateDnsZones/SRV";

/// Resource type for private DNS zone TXT records
pub const RESOURCE_TYPE_TXT_RECORD: &str = "Microsoft.Network/privateDnsZones/TXT";

// ============================================================================
// DNS Record Constants
// ============================================================================

/// Default TTL for DNS records (1 hour)
pub const DEFAULT_RECORD_TTL_SECS: i64 = 3600;

/// Smallest TTL accepted by the private DNS API
pub const MIN_RECORD_TTL_SECS: i64 = 1;

/// Largest TTL accepted by the private DNS API (signed 32-bit max)
pub const MAX_RECORD_TTL_SECS: i64 = 2_147_483_647;

/// Upper bound for 16-bit record fields (MX preference, SRV priority/weight/port)
pub const MAX_U16_FIELD: i64 = 65_535;

/// Upper bound for the SOA serial number (unsigned 32-bit max)
pub const MAX_SOA_SERIAL: i64 = 4_294_967_295;

/// Maximum length of a relative record name
pub const MAX_RECORD_NAME_LENGTH: usize = 253;

/// Maximum length of a single TXT string
pub const MAX_TXT_STRING_LENGTH: usize = 255;

/// Relative name that addresses the zone apex
pub const ZONE_APEX: &str = "@";

// ============================================================================
// Schema Property Names
// ============================================================================

/// Record name property
pub const PROPERTY_NAME: &str = "name";

/// Parent zone reference property
pub const PROPERTY_PRIVATE_DNS_ZONE_ID: &str = "privateDnsZoneId";

/// TTL property
pub const PROPERTY_TTL: &str = "ttl";

/// Metadata property
pub const PROPERTY_METADATA: &str = "metadata";

/// Top-level key of every request body
pub const BODY_PROPERTIES: &str = "properties";

// ============================================================================
// Terraform Synthesis Constants
// ============================================================================

/// Terraform resource type emitted for every record
pub const AZAPI_RESOURCE_TYPE: &str = "azapi_resource";

/// Provider name used in `required_providers` and `provider` blocks
pub const AZAPI_PROVIDER_NAME: &str = "azapi";

/// Default registry source of the azapi provider
pub const AZAPI_PROVIDER_SOURCE: &str = "azure/azapi";

/// Default version constraint of the azapi provider
pub const AZAPI_PROVIDER_VERSION: &str = ">= 2.0.0";

/// Response path exported so the FQDN output can be referenced
pub const FQDN_EXPORT_PATH: &str = "properties.fqdn";

/// Logical id of the resource id output
pub const OUTPUT_ID: &str = "id";

/// Logical id of the record name output
pub const OUTPUT_NAME: &str = "name";

/// Logical id of the FQDN output
pub const OUTPUT_FQDN: &str = "fqdn";

/// Number of hex characters of the path hash appended to unique names
pub const UNIQUE_NAME_HASH_LEN: usize = 8;
