#![deny(missing_docs)]

//! # OpenAPI 3.0 Fragments
//!
//! The target dialect: Schema Object, Reference Object, media-type content
//! maps, Request Body Object and Responses Object, as in-memory structures
//! intended for later serialization into an OpenAPI document.
//!
//! The schema surface mirrors the supported extended-dialect fields 1:1,
//! plus `discriminator`/`xml`/`externalDocs` pass-through fields that the
//! translator never populates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Schema type, normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Null type.
    Null,
    /// Boolean type.
    Boolean,
    /// Object type.
    Object,
    /// Array type.
    Array,
    /// Number type.
    Number,
    /// Integer type.
    Integer,
    /// String type.
    String,
}

/// A schema's `type`: one tag, or a sequence meaning "any of these".
///
/// The sequence form is how callers express nullability (`null` alongside a
/// primary type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    /// A single type tag.
    One(SchemaType),
    /// A sequence of type tags.
    Many(Vec<SchemaType>),
}

/// A `{"$ref": ...}` node pointing at a named component schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceObject {
    /// The reference target, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// Either a full Schema Object or a Reference Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    /// A reference node.
    Ref(ReferenceObject),
    /// A full (possibly empty) schema node.
    Schema(Box<SchemaObject>),
}

impl SchemaOrRef {
    /// An empty schema (`{}`), matching any value.
    pub fn any() -> Self {
        SchemaOrRef::Schema(Box::default())
    }

    /// Wraps an already-built reference target such as
    /// `#/components/schemas/Pet` (see [`crate::refs::schema_ref`]).
    pub fn reference(target: impl Into<String>) -> Self {
        SchemaOrRef::Ref(ReferenceObject {
            reference: target.into(),
        })
    }
}

/// The `additionalProperties` keyword on the OpenAPI side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// Blanket allow/forbid.
    Bool(bool),
    /// Extra properties must match this schema.
    Schema(Box<SchemaOrRef>),
}

/// Discriminator Object (pass-through surface, never populated by the
/// translator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscriminatorObject {
    /// The property holding the discriminating value.
    pub property_name: String,
    /// Mapping from discriminating value to schema name or reference.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub mapping: IndexMap<String, String>,
}

/// XML Object (pass-through surface).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XmlObject {
    /// Element/attribute name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// XML namespace URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Namespace prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Whether the value is an attribute rather than an element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
    /// Whether array values are wrapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
}

/// External Documentation Object (pass-through surface).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocsObject {
    /// Documentation URL.
    pub url: String,
    /// Description of the linked documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// OpenAPI 3.0 Schema Object.
///
/// All fields optional; an empty instance serializes to `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaObject {
    /// Normalized type tag(s).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeSet>,

    /// Must match all of these schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<SchemaOrRef>>,
    /// Must match at least one of these schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaOrRef>>,
    /// Must match exactly one of these schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaOrRef>>,
    /// Must not match this schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<SchemaOrRef>>,

    /// Named object properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaOrRef>>,
    /// Property names that must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Policy for properties not listed in `properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Maximum number of properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    /// Minimum number of properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,

    /// Array element schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,
    /// Maximum number of array elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum number of array elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array elements must be distinct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    /// Format hint.
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

    /// Polymorphism discriminator (never populated by the translator).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<DiscriminatorObject>,
    /// XML serialization hints (never populated by the translator).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<XmlObject>,
    /// External documentation (never populated by the translator).
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocsObject>,
}

/// One media-type entry within a content map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaTypeObject {
    /// Schema (or reference) describing the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

/// Content map: media type -> schema entry.
pub type ContentObject = IndexMap<String, MediaTypeObject>;

/// OpenAPI Request Body Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBodyObject {
    /// Description of the body (not populated by the adapter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the body is required (not populated by the adapter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Content by media type.
    pub content: ContentObject,
}

/// One response within a Responses Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Description (required by OpenAPI).
    pub description: String,
    /// Content by media type. Absent is distinct from empty: a descriptor
    /// without response models produces no `content` key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentObject>,
}

/// Responses Object: status code -> response.
pub type ResponsesObject = IndexMap<String, ResponseObject>;
