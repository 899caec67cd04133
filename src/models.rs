//! # Model Handles
//!
//! Data carriers owned by the surrounding infrastructure layer: the
//! resolution context, opaque payload-model handles, and per-status
//! response descriptors. The translation core never mutates or retains
//! these; every call is purely functional over its inputs.

use indexmap::IndexMap;

/// Scope for model-token resolution.
///
/// The core treats this as an opaque key: it only hands it to the resolver,
/// which looks tokens up in the registry populated by the host.
#[derive(Debug, Clone, Default)]
pub struct StackContext {
    /// Path identifying this context (used in resolution errors).
    pub path: String,
    /// Token -> component-name registry for models owned by this context.
    pub models: IndexMap<String, String>,
}

impl StackContext {
    /// Creates an empty context with the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            models: IndexMap::new(),
        }
    }

    /// Registers a model token under its stable component name.
    pub fn register_model(
        mut self,
        token: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.models.insert(token.into(), name.into());
        self
    }
}

/// Opaque handle to a named payload model.
///
/// `physical_name` is an explicit optional capability: handles created from
/// platform-managed models carry only a token, while handles the host named
/// itself also carry the physical name and can bypass resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReference {
    /// Token the resolver maps to a stable component name.
    pub model_id: String,
    /// Host-chosen name, usable directly when physical naming is requested.
    pub physical_name: Option<String>,
}

impl ModelReference {
    /// A handle known only by its resolution token.
    pub fn by_token(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            physical_name: None,
        }
    }

    /// A handle that also carries a host-chosen physical name.
    pub fn with_physical_name(
        model_id: impl Into<String>,
        physical_name: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            physical_name: Some(physical_name.into()),
        }
    }
}

/// One declared HTTP status for an operation.
#[derive(Debug, Clone, Default)]
pub struct ResponseDescriptor {
    /// Status code used as the key in the Responses Object.
    pub status_code: String,
    /// Response description; defaults to `"<statusCode> response"`.
    pub description: Option<String>,
    /// Media type -> model for the response body, if any.
    pub response_models: Option<IndexMap<String, ModelReference>>,
}
