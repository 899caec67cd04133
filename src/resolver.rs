//! # Resource-Identifier Resolution
//!
//! Maps opaque model tokens to the stable string identifiers used as
//! OpenAPI component names. Pure lookup over the context's registry, no
//! mutable state.

use crate::error::{AppError, AppResult};
use crate::models::StackContext;

/// Resolves a model token to its stable component name within `owner`.
///
/// Fails with [`AppError::UnresolvableReference`] when the token is not
/// registered in the context — an unknown token, or a reference that
/// belongs to a different context.
pub fn resolve_name(owner: &StackContext, model_token: &str) -> AppResult<String> {
    owner
        .models
        .get(model_token)
        .cloned()
        .ok_or_else(|| AppError::UnresolvableReference {
            token: model_token.to_string(),
            context: owner.path.clone(),
        })
}
