// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for schema types.

#[cfg(test)]
mod tests {
    use crate::errors::SchemaError;
    use crate::schema::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn sample_properties() -> BTreeMap<String, PropertyDefinition> {
        let mut properties = BTreeMap::new();
        properties.insert(
            "name".to_string(),
            PropertyDefinition::string("Record name").required("name is required"),
        );
        properties.insert(
            "zoneId".to_string(),
            PropertyDefinition::string("Zone").required("zoneId is required"),
        );
        properties.insert(
            "ttl".to_string(),
            PropertyDefinition::integer("TTL")
                .with_default(json!(3600))
                .with_rule(ValidationRule::range(1, 10, "ttl out of range")),
        );
        properties.insert(
            "entries".to_string(),
            PropertyDefinition::array("Entries")
                .with_rule(ValidationRule::min_items(1, "at least one entry"))
                .with_property(
                    "port",
                    PropertyDefinition::integer("Port")
                        .required("port is required")
                        .with_rule(ValidationRule::range(0, 65535, "port out of range")),
                ),
        );
        properties
    }

    #[test]
    fn test_property_type_matches() {
        assert!(PropertyType::String.matches(&json!("x")));
        assert!(PropertyType::Integer.matches(&json!(42)));
        assert!(PropertyType::Integer.matches(&json!(4_294_967_295_u64)));
        assert!(!PropertyType::Integer.matches(&json!(1.5)));
        assert!(!PropertyType::String.matches(&json!(true)));
        assert!(PropertyType::Object.matches(&json!({})));
        assert!(PropertyType::Array.matches(&json!([])));
        assert!(!PropertyType::Array.matches(&json!("[]")));
    }

    #[test]
    fn test_address_format_accepts() {
        assert!(AddressFormat::Ipv4.accepts("10.0.1.4"));
        assert!(!AddressFormat::Ipv4.accepts("10.0.1.256"));
        assert!(!AddressFormat::Ipv4.accepts("2001:db8::1"));
        assert!(AddressFormat::Ipv6.accepts("2001:db8::1"));
        assert!(!AddressFormat::Ipv6.accepts("10.0.1.4"));
    }

    #[test]
    fn test_required_builder_sets_flag_and_rule() {
        let def = PropertyDefinition::string("Flag")
            .with_rule(ValidationRule::min_length(1, "unused"))
            .required("flag is required");

        assert!(def.required);
        assert_eq!(def.validation[0], ValidationRule::required("flag is required"));
        assert_eq!(def.validation.len(), 2);
    }

    #[test]
    fn test_new_derives_required_and_optional() {
        let schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties());

        assert_eq!(schema.required, vec!["name", "zoneId"]);
        assert_eq!(schema.optional, vec!["entries", "ttl"]);
        assert!(schema.check_invariants().is_ok());
    }

    #[test]
    fn test_with_required_order() {
        let schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties())
            .with_required_order(&["zoneId", "name"]);

        assert_eq!(schema.required, vec!["zoneId", "name"]);
    }

    #[test]
    fn test_check_invariants_rejects_undefined_required() {
        let mut schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties());
        schema.required.push("missing".to_string());

        let err = schema.check_invariants().unwrap_err();
        assert!(matches!(err, SchemaError::InvalidSchema { .. }));
        assert!(err.to_string().contains("'missing' is not defined"));
    }

    #[test]
    fn test_check_invariants_rejects_unlisted_required_flag() {
        let mut schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties());
        schema.required.retain(|name| name != "name");

        let err = schema.check_invariants().unwrap_err();
        assert!(err.to_string().contains("missing from the required list"));
    }

    #[test]
    fn test_check_invariants_rejects_required_listed_as_optional() {
        let mut schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties());
        schema.optional.push("name".to_string());

        let err = schema.check_invariants().unwrap_err();
        assert!(err.to_string().contains("both required and optional"));
    }

    #[test]
    fn test_validation_rules_include_nested_paths() {
        let schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties());
        let paths: Vec<String> = schema
            .validation_rules()
            .into_iter()
            .map(|(path, rule)| format!("{path}:{}", rule.kind.name()))
            .collect();

        assert!(paths.contains(&"entries:minItems".to_string()));
        assert!(paths.contains(&"entries[].port:required".to_string()));
        assert!(paths.contains(&"entries[].port:range".to_string()));
        assert!(paths.contains(&"ttl:range".to_string()));
    }

    #[test]
    fn test_rule_serialization_shape() {
        let rule = ValidationRule::range(1, 2_147_483_647, "TTL out of range");
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(
            value,
            json!({"kind": "range", "min": 1, "max": 2_147_483_647, "message": "TTL out of range"})
        );
    }

    #[test]
    fn test_schema_version_active() {
        let schema = ApiSchema::new("Example/type", "2024-06-01", sample_properties());
        let release = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let version = SchemaVersion::active(schema, release).with_change(
            ChangeType::Added,
            "Initial schema",
            false,
        );

        assert_eq!(version.version, "2024-06-01");
        assert_eq!(version.support_level, SupportLevel::Active);
        assert!(version.deprecation_date.is_none());
        assert_eq!(version.change_log.len(), 1);
        assert_eq!(version.change_log[0].change_type, ChangeType::Added);

        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json["supportLevel"], "active");
        assert_eq!(json["releaseDate"], "2024-06-01");
        assert!(json.get("sunsetDate").is_none());
    }
}
