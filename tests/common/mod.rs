// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common test utilities for integration tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Parent zone id used by every test manifest
pub const ZONE_ID: &str =
    "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Network/privateDnsZones/example.internal";

/// A manifest covering every record kind.
pub fn full_manifest() -> String {
    format!(
        r#"
stack: private-dns
provider:
  version: "~> 2.2"
records:
  - id: web
    type: A
    name: www
    privateDnsZoneId: {ZONE_ID}
    ttl: 300
    metadata:
      team: platform
    records:
      - ipv4Address: 10.0.1.4
      - ipv4Address: 10.0.1.5
  - id: web6
    type: AAAA
    name: www
    privateDnsZoneId: {ZONE_ID}
    records:
      - ipv6Address: "fd00::4"
  - id: alias
    type: CNAME
    name: app
    privateDnsZoneId: {ZONE_ID}
    cnameRecord:
      cname: www.example.internal
  - id: mail
    type: MX
    name: "@"
    privateDnsZoneId: {ZONE_ID}
    records:
      - preference: 10
        exchange: mail.example.internal
  - id: reverse
    type: PTR
    name: "4"
    privateDnsZoneId: {ZONE_ID}
    records:
      - ptrdname: www.example.internal
  - id: soa
    type: SOA
    name: "@"
    privateDnsZoneId: {ZONE_ID}
    soaRecord:
      email: admin.example.com
      refreshTime: 3600
  - id: sip
    type: SRV
    name: _sip._tcp
    privateDnsZoneId: {ZONE_ID}
    records:
      - priority: 10
        weight: 60
        port: 5060
        target: sip1.example.com
  - id: spf
    type: TXT
    name: "@"
    privateDnsZoneId: {ZONE_ID}
    records:
      - value: ["v=spf1 -all"]
"#
    )
}

/// Write `content` to a temporary manifest file that lives as long as the handle.
pub fn write_manifest(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temporary manifest");
    file.write_all(content.as_bytes())
        .expect("Failed to write temporary manifest");
    file
}
