#![deny(missing_docs)]

//! # Schema Translation
//!
//! The recursive walk converting one extended-schema node into one OpenAPI
//! Schema Object or Reference Object.
//!
//! Precondition: input trees are finite and acyclic. Translation is a fresh
//! depth-first walk on every call with no node-level caching; a depth guard
//! converts a violated precondition into [`AppError::RecursionLimitExceeded`]
//! instead of overflowing the stack.

use crate::diagnostics::DiagnosticSink;
use crate::error::{AppError, AppResult};
use crate::extended::{BoolOrSchema, ExtendedItems, ExtendedSchema, SingleOrMany};
use crate::openapi::{
    AdditionalProperties, SchemaObject, SchemaOrRef, SchemaType, TypeSet,
};
use indexmap::IndexMap;
use serde_json::json;

/// Maximum supported nesting depth of an extended-schema tree.
pub const MAX_TRANSLATE_DEPTH: usize = 128;

const COMPONENT: &str = "SchemaTranslator";

/// Converts extended-schema trees to OpenAPI schema nodes.
///
/// Holds only the caller's diagnostic sink; all translation state lives on
/// the stack, so one translator may serve concurrent calls.
pub struct SchemaTranslator<'a> {
    sink: &'a dyn DiagnosticSink,
}

impl<'a> SchemaTranslator<'a> {
    /// Creates a translator reporting degradations to `sink`.
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Translates one node.
    ///
    /// A node with `ref` set yields exactly a reference node; any other
    /// populated field on it is ignored with a diagnostic. A node without
    /// `ref` always yields a full schema node, even if empty.
    ///
    /// Fatal errors: an unrecognized `type` tag
    /// ([`AppError::InvalidSchemaType`]) and a tree deeper than
    /// [`MAX_TRANSLATE_DEPTH`]. Everything else degrades: the offending
    /// fragment is dropped and a diagnostic recorded.
    pub fn translate(&self, node: &ExtendedSchema) -> AppResult<SchemaOrRef> {
        self.translate_at(node, 0)
    }

    fn translate_at(&self, node: &ExtendedSchema, depth: usize) -> AppResult<SchemaOrRef> {
        if depth > MAX_TRANSLATE_DEPTH {
            return Err(AppError::RecursionLimitExceeded(MAX_TRANSLATE_DEPTH));
        }

        // 1. Reference-only node: no recursion into other fields.
        if let Some(target) = &node.ref_ {
            let ignored = node.fields_ignored_by_ref();
            if !ignored.is_empty() {
                self.sink.emit(
                    COMPONENT,
                    "node with ref set ignores its other fields",
                    json!({"ref": target, "ignoredFields": ignored}),
                );
            }
            return Ok(SchemaOrRef::reference(target.clone()));
        }

        // 2. Drop unsupported draft keywords, naming field and value.
        for (name, value) in node.legacy_fields() {
            self.sink.emit(
                COMPONENT,
                "unsupported schema keyword dropped",
                json!({"field": name, "value": value}),
            );
        }

        let mut out = SchemaObject::default();

        // 3. Composition keywords, element-wise and order-preserving.
        out.all_of = self.translate_children(node.all_of.as_deref(), depth)?;
        out.any_of = self.translate_children(node.any_of.as_deref(), depth)?;
        out.one_of = self.translate_children(node.one_of.as_deref(), depth)?;
        if let Some(child) = &node.not {
            out.not = Some(Box::new(self.translate_at(child, depth + 1)?));
        }

        // 4. Properties, preserving input iteration order.
        if let Some(props) = &node.properties {
            let mut translated = IndexMap::with_capacity(props.len());
            for (key, child) in props {
                translated.insert(key.clone(), self.translate_at(child, depth + 1)?);
            }
            out.properties = Some(translated);
        }

        // 5. Items: tuple typing is unsupported and omitted wholesale.
        match &node.items {
            Some(ExtendedItems::One(child)) => {
                out.items = Some(Box::new(self.translate_at(child, depth + 1)?));
            }
            Some(ExtendedItems::Tuple(elems)) => {
                self.sink.emit(
                    COMPONENT,
                    "tuple-typed items are unsupported; items omitted",
                    json!({"elementCount": elems.len()}),
                );
            }
            None => {}
        }

        // 6. additionalProperties: boolean passes through, schema recurses.
        match &node.additional_properties {
            Some(BoolOrSchema::Bool(allowed)) => {
                out.additional_properties = Some(AdditionalProperties::Bool(*allowed));
            }
            Some(BoolOrSchema::Schema(child)) => {
                out.additional_properties = Some(AdditionalProperties::Schema(Box::new(
                    self.translate_at(child, depth + 1)?,
                )));
            }
            None => {}
        }

        // 7. Type normalization; any unrecognized tag is fatal.
        out.schema_type = match &node.schema_type {
            Some(SingleOrMany::One(tag)) => Some(TypeSet::One(normalize_type(tag)?)),
            Some(SingleOrMany::Many(tags)) => Some(TypeSet::Many(
                tags.iter()
                    .map(|tag| normalize_type(tag))
                    .collect::<AppResult<Vec<_>>>()?,
            )),
            None => None,
        };

        // 8. Remaining supported fields pass through by direct copy.
        out.required = node.required.clone();
        out.max_properties = node.max_properties;
        out.min_properties = node.min_properties;
        out.max_items = node.max_items;
        out.min_items = node.min_items;
        out.unique_items = node.unique_items;
        out.format = node.format.clone();
        out.pattern = node.pattern.clone();
        out.multiple_of = node.multiple_of;
        out.maximum = node.maximum;
        out.exclusive_maximum = node.exclusive_maximum;
        out.minimum = node.minimum;
        out.exclusive_minimum = node.exclusive_minimum;
        out.max_length = node.max_length;
        out.min_length = node.min_length;
        out.title = node.title.clone();
        out.description = node.description.clone();
        out.default = node.default.clone();
        out.example = node.example.clone();
        out.enum_values = node.enum_values.clone();

        Ok(SchemaOrRef::Schema(Box::new(out)))
    }

    fn translate_children(
        &self,
        children: Option<&[ExtendedSchema]>,
        depth: usize,
    ) -> AppResult<Option<Vec<SchemaOrRef>>> {
        children
            .map(|nodes| {
                nodes
                    .iter()
                    .map(|child| self.translate_at(child, depth + 1))
                    .collect::<AppResult<Vec<_>>>()
            })
            .transpose()
    }
}

/// Normalizes a platform type tag into the closed seven-value set.
///
/// Tags are matched case-insensitively; anything outside the set is fatal.
fn normalize_type(tag: &str) -> AppResult<SchemaType> {
    match tag.to_ascii_lowercase().as_str() {
        "null" => Ok(SchemaType::Null),
        "boolean" => Ok(SchemaType::Boolean),
        "object" => Ok(SchemaType::Object),
        "array" => Ok(SchemaType::Array),
        "number" => Ok(SchemaType::Number),
        "integer" => Ok(SchemaType::Integer),
        "string" => Ok(SchemaType::String),
        _ => Err(AppError::InvalidSchemaType(tag.to_string())),
    }
}
