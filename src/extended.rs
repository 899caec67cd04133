//! # Extended Schema Dialect
//!
//! The superset JSON-Schema-like structure used by the surrounding
//! infrastructure layer to describe request/response payload models.
//!
//! The dialect is a wire format: every field round-trips through serde with
//! camelCase names, and mappings keep their input iteration order so
//! translated output is reproducible. A handful of draft-specific keywords
//! are carried for fidelity but never translated (see
//! [`ExtendedSchema::legacy_fields`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value that is either one `T` or a sequence of `T`.
///
/// Used for `type`, where a sequence means "any of these types" (most
/// commonly a primary type alongside `null` to express nullability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SingleOrMany<T> {
    /// A single value.
    One(T),
    /// A sequence of values.
    Many(Vec<T>),
}

/// The `items` keyword: one schema, or a tuple of schemas.
///
/// The tuple form is carried by the dialect but unsupported on translation;
/// the translator drops it with a diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtendedItems {
    /// Every array element matches this schema.
    One(Box<ExtendedSchema>),
    /// Positional element schemas (tuple typing).
    Tuple(Vec<ExtendedSchema>),
}

/// The `additionalProperties` keyword: a blanket boolean or a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrSchema {
    /// `true` allows, `false` forbids extra properties.
    Bool(bool),
    /// Extra properties must match this schema.
    Schema(Box<ExtendedSchema>),
}

/// One extended-schema fragment.
///
/// All fields are optional. A node with [`ref_`](Self::ref_) set is
/// reference-only: every other populated field is ignored on translation
/// (and reported via diagnostic).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtendedSchema {
    /// Reference to another schema; makes this node reference-only.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// Platform type tag(s); normalized by the translator.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SingleOrMany<String>>,

    /// Must match all of these schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<ExtendedSchema>>,
    /// Must match at least one of these schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<ExtendedSchema>>,
    /// Must match exactly one of these schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<ExtendedSchema>>,
    /// Must not match this schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<ExtendedSchema>>,

    /// Named object properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, ExtendedSchema>>,
    /// Property names that must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Policy for properties not listed in `properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BoolOrSchema>,
    /// Maximum number of properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    /// Minimum number of properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,

    /// Array element schema(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ExtendedItems>,
    /// Maximum number of array elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum number of array elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array elements must be distinct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    /// Format hint (e.g. `"int64"`, `"date-time"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Regular expression a string value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Numeric value must be a multiple of this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    /// Upper numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Whether `maximum` is exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Lower numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Whether `minimum` is exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Short title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Closed set of permitted values.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    // Draft-specific keywords carried for round-trip fidelity only.
    // The translator drops each of these with a diagnostic.
    /// Legacy `additionalItems` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<Value>,
    /// Legacy `contains` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Value>,
    /// Legacy `definitions` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Value>,
    /// Legacy `dependencies` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,
    /// Legacy `id` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Legacy `patternProperties` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<Value>,
    /// Legacy `propertyNames` keyword (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Value>,
    /// Embedded draft meta-schema marker (unsupported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl ExtendedSchema {
    /// Names of every populated field other than `ref`.
    ///
    /// Used to report which fields a reference-only node is discarding.
    pub fn fields_ignored_by_ref(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        macro_rules! check {
            ($field:ident, $name:literal) => {
                if self.$field.is_some() {
                    ignored.push($name);
                }
            };
        }
        check!(schema_type, "type");
        check!(all_of, "allOf");
        check!(any_of, "anyOf");
        check!(one_of, "oneOf");
        check!(not, "not");
        check!(properties, "properties");
        check!(required, "required");
        check!(additional_properties, "additionalProperties");
        check!(max_properties, "maxProperties");
        check!(min_properties, "minProperties");
        check!(items, "items");
        check!(max_items, "maxItems");
        check!(min_items, "minItems");
        check!(unique_items, "uniqueItems");
        check!(format, "format");
        check!(pattern, "pattern");
        check!(multiple_of, "multipleOf");
        check!(maximum, "maximum");
        check!(exclusive_maximum, "exclusiveMaximum");
        check!(minimum, "minimum");
        check!(exclusive_minimum, "exclusiveMinimum");
        check!(max_length, "maxLength");
        check!(min_length, "minLength");
        check!(title, "title");
        check!(description, "description");
        check!(default, "default");
        check!(example, "example");
        check!(enum_values, "enum");
        check!(additional_items, "additionalItems");
        check!(contains, "contains");
        check!(definitions, "definitions");
        check!(dependencies, "dependencies");
        check!(id, "id");
        check!(pattern_properties, "patternProperties");
        check!(property_names, "propertyNames");
        check!(schema, "schema");
        ignored
    }

    /// The populated legacy keywords, paired with their raw values.
    pub fn legacy_fields(&self) -> Vec<(&'static str, &Value)> {
        let mut present = Vec::new();
        macro_rules! check {
            ($field:ident, $name:literal) => {
                if let Some(v) = &self.$field {
                    present.push(($name, v));
                }
            };
        }
        check!(additional_items, "additionalItems");
        check!(contains, "contains");
        check!(definitions, "definitions");
        check!(dependencies, "dependencies");
        check!(id, "id");
        check!(pattern_properties, "patternProperties");
        check!(property_names, "propertyNames");
        check!(schema, "schema");
        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_items_forms() {
        let single: ExtendedSchema =
            serde_json::from_value(json!({"type": "array", "items": {"type": "string"}}))
                .unwrap();
        assert!(matches!(single.items, Some(ExtendedItems::One(_))));

        let tuple: ExtendedSchema = serde_json::from_value(
            json!({"type": "array", "items": [{"type": "string"}, {"type": "number"}]}),
        )
        .unwrap();
        match tuple.items {
            Some(ExtendedItems::Tuple(elems)) => assert_eq!(elems.len(), 2),
            other => panic!("expected tuple items, got {:?}", other),
        }
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let node = ExtendedSchema {
            schema_type: Some(SingleOrMany::One("string".into())),
            ..Default::default()
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({"type": "string"}));
    }

    #[test]
    fn test_fields_ignored_by_ref() {
        let node = ExtendedSchema {
            ref_: Some("#/components/schemas/Pet".into()),
            title: Some("ignored".into()),
            min_length: Some(1),
            ..Default::default()
        };
        assert_eq!(node.fields_ignored_by_ref(), vec!["minLength", "title"]);
    }

    #[test]
    fn test_legacy_fields_detected() {
        let node: ExtendedSchema = serde_json::from_value(json!({
            "type": "object",
            "definitions": {"Inner": {"type": "string"}},
            "id": "http://example.com/root.json"
        }))
        .unwrap();
        let names: Vec<&str> = node.legacy_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["definitions", "id"]);
    }

    #[test]
    fn test_roundtrip_preserves_property_order() {
        let source = json!({
            "type": "object",
            "properties": {
                "zebra": {"type": "string"},
                "alpha": {"type": "integer"}
            }
        });
        let node: ExtendedSchema = serde_json::from_value(source.clone()).unwrap();
        let keys: Vec<&String> = node.properties.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["zebra", "alpha"]);
        assert_eq!(serde_json::to_value(&node).unwrap(), source);
    }
}
