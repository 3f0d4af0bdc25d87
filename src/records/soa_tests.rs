// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod tests {
    use crate::constants::ZONE_APEX;
    use crate::records::soa::{schema_versions, SoaRecord};
    use crate::records::{build_request_body, RecordPayload, RecordProps};
    use crate::validation::collect_violations;
    use serde_json::json;

    fn props(soa_record: SoaRecord) -> RecordProps {
        RecordProps::new(ZONE_APEX, "/zones/example.internal", RecordPayload::SOA { soa_record })
    }

    #[test]
    fn test_only_supplied_fields_are_sent() {
        let record = SoaRecord {
            email: Some("admin.example.com".to_string()),
            refresh_time: Some(3600),
            ..SoaRecord::default()
        };

        let body = build_request_body(&props(record));
        assert_eq!(
            body["properties"]["soaRecord"],
            json!({"email": "admin.example.com", "refreshTime": 3600})
        );
    }

    #[test]
    fn test_empty_soa_is_empty_object() {
        let body = build_request_body(&props(SoaRecord::default()));
        assert_eq!(body["properties"]["soaRecord"], json!({}));
    }

    #[test]
    fn test_every_field_mapped() {
        let record = SoaRecord {
            host: Some("azureprivatedns.net".to_string()),
            email: Some("azureprivatedns-host.microsoft.com".to_string()),
            serial_number: Some(1),
            refresh_time: Some(3600),
            retry_time: Some(300),
            expire_time: Some(2_419_200),
            minimum_ttl: Some(10),
        };

        let body = build_request_body(&props(record));
        let keys: Vec<&String> = body["properties"]["soaRecord"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys.len(), 7);
        assert_eq!(body["properties"]["soaRecord"]["expireTime"], 2_419_200);
    }

    #[test]
    fn test_serial_number_accepts_full_u32_range() {
        let schema = &schema_versions()[0].schema;
        let input = |serial: i64| {
            json!({
                "name": "@",
                "privateDnsZoneId": "/zones/example.internal",
                "soaRecord": {"serialNumber": serial},
            })
        };

        assert!(collect_violations(schema, &input(4_294_967_295)).is_empty());

        let violations = collect_violations(schema, &input(4_294_967_296));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "soaRecord.serialNumber");
    }

    #[test]
    fn test_negative_times_rejected() {
        let schema = &schema_versions()[0].schema;
        let input = json!({
            "name": "@",
            "privateDnsZoneId": "/zones/example.internal",
            "soaRecord": {"retryTime": -1},
        });

        let violations = collect_violations(schema, &input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "range");
    }
}
