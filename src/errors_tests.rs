// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for error types.

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_already_registered_error() {
        let error = SchemaError::AlreadyRegistered {
            resource_type: "Microsoft.Network/privateDnsZones/A".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Resource type 'Microsoft.Network/privateDnsZones/A' is already registered"
        );
    }

    #[test]
    fn test_duplicate_version_error() {
        let error = SchemaError::DuplicateVersion {
            resource_type: "Microsoft.Network/privateDnsZones/MX".to_string(),
            version: "2024-06-01".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Resource type 'Microsoft.Network/privateDnsZones/MX' declares version '2024-06-01' more than once"
        );
    }

    #[test]
    fn test_unknown_version_error() {
        let error = SchemaError::UnknownVersion {
            resource_type: "Microsoft.Network/privateDnsZones/TXT".to_string(),
            version: "2018-09-01".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Version '2018-09-01' is not registered for 'Microsoft.Network/privateDnsZones/TXT'"
        );
    }

    #[test]
    fn test_version_sunset_error() {
        let error = SchemaError::VersionSunset {
            resource_type: "Microsoft.Network/privateDnsZones/A".to_string(),
            version: "2020-01-01".to_string(),
        };

        assert!(error.to_string().contains("is sunset"));
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let error = SchemaError::Validation {
            resource_type: "Microsoft.Network/privateDnsZones/SRV".to_string(),
            version: "2024-06-01".to_string(),
            violations: vec![
                FieldViolation::new("ttl", "range", "TTL must be between 1 and 2147483647"),
                FieldViolation::new(
                    "srvRecords[0].port",
                    "range",
                    "Port must be between 0 and 65535",
                ),
            ],
        };

        assert_eq!(
            error.to_string(),
            "Validation failed for 'Microsoft.Network/privateDnsZones/SRV@2024-06-01': \
             ttl: TTL must be between 1 and 2147483647 (range); \
             srvRecords[0].port: Port must be between 0 and 65535 (range)"
        );
    }

    #[test]
    fn test_unknown_record_kind_error() {
        let error = SchemaError::UnknownRecordKind {
            value: "NS".to_string(),
        };

        assert!(error.to_string().starts_with("Unknown record kind 'NS'"));
    }

    #[test]
    fn test_duplicate_id_error() {
        let error = SynthError::DuplicateId {
            scope: "private-dns".to_string(),
            id: "web".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Logical id 'web' is already used in scope 'private-dns'"
        );
    }

    #[test]
    fn test_foreign_scope_message() {
        let error = SynthError::ForeignScope {
            stack: "private-dns".to_string(),
            path: "other/web".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Resource 'other/web' was not created under stack 'private-dns'"
        );
    }

    #[test]
    fn test_render_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = SynthError::from(json_err);

        assert!(matches!(error, SynthError::Render { .. }));
        assert!(error.to_string().starts_with("Failed to render Terraform JSON"));
    }
}
