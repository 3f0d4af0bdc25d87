// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod tests {
    use crate::records::txt::{schema_versions, TxtRecordEntry};
    use crate::records::{build_request_body, RecordPayload, RecordProps};
    use crate::validation::collect_violations;
    use serde_json::json;

    #[test]
    fn test_value_lists_preserved() {
        let props = RecordProps::new(
            "_dmarc",
            "/zones/example.internal",
            RecordPayload::TXT {
                records: vec![
                    TxtRecordEntry::new(["v=DMARC1; p=reject"]),
                    TxtRecordEntry::new(["part one", "part two"]),
                ],
            },
        );

        assert_eq!(
            build_request_body(&props)["properties"]["txtRecords"],
            json!([
                {"value": ["v=DMARC1; p=reject"]},
                {"value": ["part one", "part two"]},
            ])
        );
    }

    #[test]
    fn test_empty_value_rejected() {
        let schema = &schema_versions()[0].schema;
        let input = json!({
            "name": "_dmarc",
            "privateDnsZoneId": "/zones/example.internal",
            "txtRecords": [{"value": []}],
        });

        let violations = collect_violations(schema, &input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "txtRecords[0].value");
        assert_eq!(violations[0].rule, "minItems");
    }

    #[test]
    fn test_non_string_value_rejected() {
        let schema = &schema_versions()[0].schema;
        let input = json!({
            "name": "_dmarc",
            "privateDnsZoneId": "/zones/example.internal",
            "txtRecords": [{"value": ["ok", 7]}],
        });

        let violations = collect_violations(schema, &input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "txtRecords[0].value[1]");
    }

    #[test]
    fn test_overlong_string_rejected() {
        let schema = &schema_versions()[0].schema;
        let input = json!({
            "name": "_dmarc",
            "privateDnsZoneId": "/zones/example.internal",
            "txtRecords": [{"value": ["a".repeat(255), "b".repeat(256)]}],
        });

        let violations = collect_violations(schema, &input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "txtRecords[0].value[1]");
        assert_eq!(violations[0].rule, "maxLength");
    }

    #[test]
    fn test_string_rule_listed_per_item() {
        let versions = schema_versions();
        let rules = versions[0].schema.validation_rules();
        assert!(rules.iter().any(|(path, rule)| {
            path == "txtRecords[].value[]" && rule.kind.name() == "maxLength"
        }));
    }
}
