#![deny(missing_docs)]

//! # Request Body & Responses Assembly
//!
//! Orchestrates the content assembler over an operation's request-body
//! model map and its per-status response descriptors.

use crate::content::build_content;
use crate::diagnostics::DiagnosticSink;
use crate::models::{ModelReference, ResponseDescriptor, StackContext};
use crate::openapi::{RequestBodyObject, ResponseObject, ResponsesObject};
use indexmap::IndexMap;

/// Builds a Request Body Object from a media-type -> model map.
pub fn build_request_body(
    owner: &StackContext,
    request_models: &IndexMap<String, ModelReference>,
    use_physical_name: bool,
    sink: &dyn DiagnosticSink,
) -> RequestBodyObject {
    RequestBodyObject {
        description: None,
        required: None,
        content: build_content(owner, request_models, use_physical_name, sink),
    }
}

/// Builds a Responses Object keyed by status code.
///
/// A descriptor without a description gets `"<statusCode> response"`; a
/// descriptor without response models gets no `content` key at all.
///
/// Quirk, preserved from the source behavior: when two descriptors share a
/// status code, the last one wins via plain mapping overwrite. This is not
/// validated against.
pub fn build_responses(
    owner: &StackContext,
    responses: &[ResponseDescriptor],
    use_physical_name: bool,
    sink: &dyn DiagnosticSink,
) -> ResponsesObject {
    let mut out = ResponsesObject::with_capacity(responses.len());

    for descriptor in responses {
        let description = descriptor
            .description
            .clone()
            .unwrap_or_else(|| format!("{} response", descriptor.status_code));

        let content = descriptor
            .response_models
            .as_ref()
            .map(|models| build_content(owner, models, use_physical_name, sink));

        out.insert(
            descriptor.status_code.clone(),
            ResponseObject {
                description,
                content,
            },
        );
    }

    out
}
