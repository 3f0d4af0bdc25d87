// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Validation of record properties against a registered schema.
//!
//! The validator walks every property declared by the schema, checks presence, data type
//! and the declared rules, and recurses into nested object and array-item properties.
//! All violations are collected rather than stopping at the first one, so a caller sees
//! every problem with a record in a single pass.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::errors::{FieldViolation, SchemaError};
use crate::schema::{ApiSchema, PropertyDefinition, RuleKind, ValidationRule};

/// Validate `input` against `schema`.
///
/// # Errors
///
/// Returns [`SchemaError::Validation`] carrying every violation found.
pub fn validate(schema: &ApiSchema, input: &Value) -> Result<(), SchemaError> {
    let violations = collect_violations(schema, input);

    if violations.is_empty() {
        debug!(
            "Properties satisfy {}@{}",
            schema.resource_type, schema.version
        );
        return Ok(());
    }

    debug!(
        "{} violation(s) against {}@{}",
        violations.len(),
        schema.resource_type,
        schema.version
    );
    Err(SchemaError::Validation {
        resource_type: schema.resource_type.clone(),
        version: schema.version.clone(),
        violations,
    })
}

/// Collect every violation of `input` against `schema`, in schema order.
#[must_use]
pub fn collect_violations(schema: &ApiSchema, input: &Value) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    match input.as_object() {
        Some(object) => check_properties(&schema.properties, object, "", &mut violations),
        None => violations.push(FieldViolation::new(
            "$",
            "type",
            "Record properties must be an object",
        )),
    }

    violations
}

fn check_properties(
    definitions: &BTreeMap<String, PropertyDefinition>,
    object: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<FieldViolation>,
) {
    for (name, definition) in definitions {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match object.get(name) {
            None | Some(Value::Null) => {
                if definition.required {
                    out.push(FieldViolation::new(
                        &path,
                        "required",
                        required_message(definition, name),
                    ));
                }
            }
            Some(value) => check_value(definition, value, &path, out),
        }
    }
}

fn required_message(definition: &PropertyDefinition, name: &str) -> String {
    definition
        .validation
        .iter()
        .find(|rule| rule.kind == RuleKind::Required)
        .map_or_else(|| format!("{name} is required"), |rule| rule.message.clone())
}

fn check_value(
    definition: &PropertyDefinition,
    value: &Value,
    path: &str,
    out: &mut Vec<FieldViolation>,
) {
    if !definition.data_type.matches(value) {
        out.push(FieldViolation::new(
            path,
            "type",
            format!("Expected {}", definition.data_type.as_str()),
        ));
        return;
    }

    check_rules(&definition.validation, value, path, out);

    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{index}]");

                match definition.item_type {
                    Some(item_type) if !item_type.matches(item) => {
                        out.push(FieldViolation::new(
                            &item_path,
                            "type",
                            format!("Expected {}", item_type.as_str()),
                        ));
                    }
                    _ => check_rules(&definition.item_validation, item, &item_path, out),
                }

                if definition.properties.is_empty() {
                    continue;
                }
                match item.as_object() {
                    Some(object) => {
                        check_properties(&definition.properties, object, &item_path, out);
                    }
                    None => out.push(FieldViolation::new(&item_path, "type", "Expected object")),
                }
            }
        }
        Value::Object(object) if !definition.properties.is_empty() => {
            check_properties(&definition.properties, object, path, out);
        }
        _ => {}
    }
}

fn check_rules(
    rules: &[ValidationRule],
    value: &Value,
    path: &str,
    out: &mut Vec<FieldViolation>,
) {
    out.extend(
        rules
            .iter()
            .filter(|rule| rule_violated(rule, value))
            .map(|rule| FieldViolation::new(path, rule.kind.name(), rule.message.clone())),
    );
}

fn rule_violated(rule: &ValidationRule, value: &Value) -> bool {
    match &rule.kind {
        RuleKind::Required => false,
        RuleKind::Range { min, max } => match value {
            // Integers beyond i64 only arrive as u64 and are above every declared max
            Value::Number(number) => number.as_i64().is_none_or(|n| n < *min || n > *max),
            _ => false,
        },
        RuleKind::MinLength { min } => value.as_str().is_some_and(|s| s.chars().count() < *min),
        RuleKind::MaxLength { max } => value.as_str().is_some_and(|s| s.chars().count() > *max),
        RuleKind::MinItems { min } => value.as_array().is_some_and(|items| items.len() < *min),
        RuleKind::Format { format } => value.as_str().is_some_and(|s| !format.accepts(s)),
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
