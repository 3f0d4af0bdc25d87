// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod tests {
    use crate::records::srv::{schema_versions, SrvRecordEntry};
    use crate::records::{build_request_body, RecordPayload, RecordProps};
    use crate::validation::collect_violations;
    use serde_json::json;

    #[test]
    fn test_srv_entry_on_the_wire() {
        let props = RecordProps::new(
            "_sip._tcp",
            "/zones/example.internal",
            RecordPayload::SRV {
                records: vec![SrvRecordEntry::new(10, 60, 5060, "sip1.example.com")],
            },
        );

        assert_eq!(
            build_request_body(&props)["properties"]["srvRecords"],
            json!([{"priority": 10, "weight": 60, "port": 5060, "target": "sip1.example.com"}])
        );
    }

    #[test]
    fn test_port_out_of_range() {
        let schema = &schema_versions()[0].schema;
        let input = json!({
            "name": "_sip._tcp",
            "privateDnsZoneId": "/zones/example.internal",
            "srvRecords": [
                {"priority": 10, "weight": 60, "port": 5060, "target": "sip1.example.com"},
                {"priority": 10, "weight": 60, "port": 65536, "target": "sip2.example.com"},
            ],
        });

        let violations = collect_violations(schema, &input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "srvRecords[1].port");
        assert_eq!(
            violations[0].message,
            "SRV port must be between 0 and 65535"
        );
    }

    #[test]
    fn test_missing_target() {
        let schema = &schema_versions()[0].schema;
        let input = json!({
            "name": "_sip._tcp",
            "privateDnsZoneId": "/zones/example.internal",
            "srvRecords": [{"priority": 0, "weight": 0, "port": 0}],
        });

        let violations = collect_violations(schema, &input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "srvRecords[0].target");
        assert_eq!(violations[0].rule, "required");
    }
}
