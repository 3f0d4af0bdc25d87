// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for scopes and Terraform JSON synthesis.

#[cfg(test)]
mod tests {
    use crate::errors::SynthError;
    use crate::records::a::ARecordEntry;
    use crate::records::cname::CnameRecord;
    use crate::records::{RecordPayload, RecordProps};
    use crate::registry::SchemaRegistry;
    use crate::resource::{AzapiResource, PrivateDnsRecord};
    use crate::stack::{ProviderConfig, Scope, Stack};
    use serde_json::json;

    const ZONE_ID: &str = "/zones/example.internal";

    fn a_record(stack: &Stack, id: &str, registry: &SchemaRegistry) -> PrivateDnsRecord {
        let props = RecordProps::new(
            "www",
            ZONE_ID,
            RecordPayload::A {
                records: vec![ARecordEntry::new("10.0.1.4")],
            },
        );
        PrivateDnsRecord::new(stack.scope(), id, props, registry).unwrap()
    }

    #[test]
    fn test_scope_paths() {
        let root = Scope::root("dns");
        let child = root.child("web");

        assert_eq!(root.path(), "dns");
        assert_eq!(root.parent_path(), "");
        assert_eq!(child.path(), "dns/web");
        assert_eq!(child.parent_path(), "dns");
        assert_eq!(child.id(), "web");
    }

    #[test]
    fn test_unique_name_is_stable_and_sanitized() {
        let scope = Scope::root("private-dns").child("sip.tcp");
        let name = scope.unique_name();

        assert!(name.starts_with("private-dns_sip_tcp_"));
        assert_eq!(name.len(), "private-dns_sip_tcp_".len() + 8);
        assert!(name[name.len() - 8..]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
        assert_eq!(name, Scope::root("private-dns").child("sip.tcp").unique_name());
    }

    #[test]
    fn test_unique_name_distinguishes_sanitized_collisions() {
        let dotted = Scope::root("dns").child("a.b").unique_name();
        let underscored = Scope::root("dns").child("a_b").unique_name();

        assert_ne!(dotted, underscored);
    }

    #[test]
    fn test_unique_name_never_starts_with_digit() {
        assert!(Scope::root("1dns").unique_name().starts_with("_1dns_"));
    }

    #[test]
    fn test_provider_defaults() {
        let provider = ProviderConfig::default();
        assert_eq!(provider.source, "azure/azapi");
        assert_eq!(provider.version, ">= 2.0.0");

        let partial: ProviderConfig = serde_json::from_value(json!({"version": "~> 2.2"})).unwrap();
        assert_eq!(partial.source, "azure/azapi");
        assert_eq!(partial.version, "~> 2.2");
    }

    #[test]
    fn test_duplicate_logical_id_rejected() {
        let registry = SchemaRegistry::builtin().unwrap();
        let mut stack = Stack::new("dns", ProviderConfig::default());

        stack.add(a_record(&stack, "web", &registry)).unwrap();
        let err = stack.add(a_record(&stack, "web", &registry)).unwrap_err();

        assert_eq!(
            err,
            SynthError::DuplicateId {
                scope: "dns".to_string(),
                id: "web".to_string(),
            }
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_logical_id_rejected() {
        let registry = SchemaRegistry::builtin().unwrap();
        let mut stack = Stack::new("dns", ProviderConfig::default());

        let err = stack.add(a_record(&stack, "", &registry)).unwrap_err();
        assert_eq!(
            err,
            SynthError::EmptyId {
                scope: "dns".to_string()
            }
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn test_resource_from_other_stack_rejected() {
        let registry = SchemaRegistry::builtin().unwrap();
        let mut stack = Stack::new("dns", ProviderConfig::default());
        let other = Stack::new("other", ProviderConfig::default());

        let err = stack.add(a_record(&other, "web", &registry)).unwrap_err();
        assert_eq!(
            err,
            SynthError::ForeignScope {
                stack: "dns".to_string(),
                path: "other/web".to_string(),
            }
        );

        let props = RecordProps::new(
            "www",
            ZONE_ID,
            RecordPayload::A {
                records: vec![ARecordEntry::new("10.0.1.4")],
            },
        );
        let nested = PrivateDnsRecord::new(&stack.scope().child("group"), "web", props, &registry)
            .unwrap();
        assert!(matches!(
            stack.add(nested),
            Err(SynthError::ForeignScope { .. })
        ));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack_has_only_provider_blocks() {
        let stack = Stack::new("dns", ProviderConfig::default());

        assert_eq!(
            stack.synthesize(),
            json!({
                "terraform": {
                    "required_providers": {
                        "azapi": {"source": "azure/azapi", "version": ">= 2.0.0"}
                    }
                },
                "provider": {"azapi": [{}]},
            })
        );
    }

    #[test]
    fn test_one_resource_and_three_outputs_per_record() {
        let registry = SchemaRegistry::builtin().unwrap();
        let mut stack = Stack::new("dns", ProviderConfig::default());

        let web = a_record(&stack, "web", &registry);
        let web_name = web.scope().unique_name();
        let web_fqdn = web.fqdn();
        stack.add(web).unwrap();

        let alias = PrivateDnsRecord::new(
            stack.scope(),
            "alias",
            RecordProps::new(
                "app",
                ZONE_ID,
                RecordPayload::CNAME {
                    cname_record: CnameRecord::new("www.example.internal"),
                },
            ),
            &registry,
        )
        .unwrap();
        stack.add(alias).unwrap();

        let document = stack.synthesize();
        let resources = document["resource"]["azapi_resource"].as_object().unwrap();
        let outputs = document["output"].as_object().unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(outputs.len(), 6);
        assert_eq!(
            resources[&web_name]["type"],
            "Microsoft.Network/privateDnsZones/A@2024-06-01"
        );

        let fqdn_output = Scope::root("dns").child("web").child("fqdn").unique_name();
        assert_eq!(outputs[&fqdn_output]["value"], json!(web_fqdn));
    }

    #[test]
    fn test_json_string_round_trips() {
        let registry = SchemaRegistry::builtin().unwrap();
        let mut stack = Stack::new("dns", ProviderConfig::default());
        stack.add(a_record(&stack, "web", &registry)).unwrap();

        let rendered = stack.to_json_string().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, stack.synthesize());
    }
}
