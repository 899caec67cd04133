#![deny(missing_docs)]

//! # Content Assembly
//!
//! Turns content-type -> model maps into OpenAPI content objects whose
//! entries reference named component schemas.
//!
//! Assembly is best-effort: a model that cannot be resolved degrades to an
//! empty (match-anything) schema for that media type only, surfaced via
//! diagnostic. One bad model reference must not prevent the rest of the
//! content map from being produced.

use crate::diagnostics::DiagnosticSink;
use crate::error::AppResult;
use crate::models::{ModelReference, StackContext};
use crate::openapi::{ContentObject, MediaTypeObject, SchemaOrRef};
use crate::refs::schema_ref;
use crate::resolver::resolve_name;
use indexmap::IndexMap;
use serde_json::json;

const COMPONENT: &str = "ContentAssembler";

/// Builds a content object from a media-type -> model map.
///
/// With `use_physical_name` set, a model carrying a physical name is
/// referenced by that name directly, bypassing token resolution; models
/// without one fall back to the resolver either way.
pub fn build_content(
    owner: &StackContext,
    models: &IndexMap<String, ModelReference>,
    use_physical_name: bool,
    sink: &dyn DiagnosticSink,
) -> ContentObject {
    let mut content = ContentObject::with_capacity(models.len());

    for (media_type, model) in models {
        let schema = match schema_name(owner, model, use_physical_name) {
            Ok(name) => SchemaOrRef::reference(schema_ref(&name)),
            Err(err) => {
                sink.emit(
                    COMPONENT,
                    "model reference could not be resolved; emitting empty schema",
                    json!({
                        "mediaType": media_type,
                        "modelId": model.model_id,
                        "error": err.to_string(),
                    }),
                );
                SchemaOrRef::any()
            }
        };

        content.insert(
            media_type.clone(),
            MediaTypeObject {
                schema: Some(schema),
            },
        );
    }

    content
}

/// Picks the component name for one model, per-entry fallible.
fn schema_name(
    owner: &StackContext,
    model: &ModelReference,
    use_physical_name: bool,
) -> AppResult<String> {
    if use_physical_name {
        if let Some(physical) = &model.physical_name {
            return Ok(physical.clone());
        }
    }
    resolve_name(owner, &model.model_id)
}
