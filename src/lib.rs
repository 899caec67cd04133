#![deny(missing_docs)]

//! # OAS Bridge
//!
//! Converts extended JSON-Schema payload models into OpenAPI 3.0 fragments:
//! Schema/Reference Objects from schema trees, and Request Body / Responses
//! Objects from named model maps and per-status response descriptors.
//!
//! The crate is purely functional over its inputs; the only side effect is
//! structured diagnostic emission through a caller-supplied sink, which
//! makes the best-effort degradation policy observable and testable.

/// Shared error types.
pub mod error;

/// Injectable diagnostic collection.
pub mod diagnostics;

/// The extended JSON-Schema input dialect.
pub mod extended;

/// The OpenAPI 3.0 output dialect.
pub mod openapi;

/// `#/components/schemas/` reference construction.
pub mod refs;

/// Model handles and resolution contexts.
pub mod models;

/// Model-token name resolution.
pub mod resolver;

/// Recursive schema translation.
pub mod translator;

/// Content-object assembly.
pub mod content;

/// Request-body and responses assembly.
pub mod responses;

pub use content::build_content;
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, RecordingSink};
pub use error::{AppError, AppResult};
pub use extended::{BoolOrSchema, ExtendedItems, ExtendedSchema, SingleOrMany};
pub use models::{ModelReference, ResponseDescriptor, StackContext};
pub use openapi::{
    AdditionalProperties, ContentObject, MediaTypeObject, ReferenceObject, RequestBodyObject,
    ResponseObject, ResponsesObject, SchemaObject, SchemaOrRef, SchemaType, TypeSet,
};
pub use refs::{component_name_from_ref, schema_ref};
pub use resolver::resolve_name;
pub use responses::{build_request_body, build_responses};
pub use translator::{SchemaTranslator, MAX_TRANSLATE_DEPTH};
