//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
///
/// `InvalidSchemaType` and `RecursionLimitExceeded` are fatal for the
/// translation call that raised them; `UnresolvableReference` is caught at
/// the content-assembly boundary and degraded to an empty schema.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A `type` tag outside the supported seven-value set.
    #[from(ignore)]
    #[display("Invalid schema type: {_0:?}")]
    InvalidSchemaType(String),

    /// A model token that cannot be mapped to a component name within the
    /// given stack context (unknown token or cross-context reference).
    #[from(ignore)]
    #[display("Unresolvable reference: {token:?} in context {context:?}")]
    UnresolvableReference {
        /// The model token that failed to resolve.
        token: String,
        /// Path of the context the resolution was scoped to.
        context: String,
    },

    /// The translation walk exceeded the depth guard; the input tree is
    /// deeper than supported or violates the acyclicity precondition.
    #[display("Schema nesting exceeds the supported depth of {_0}")]
    #[from(ignore)]
    RecursionLimitExceeded(usize),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_invalid_type_display() {
        let app_err = AppError::InvalidSchemaType("tuple".into());
        assert_eq!(format!("{}", app_err), "Invalid schema type: \"tuple\"");
    }

    #[test]
    fn test_unresolvable_display_names_context() {
        let app_err = AppError::UnresolvableReference {
            token: "m-123".into(),
            context: "PetApi".into(),
        };
        let rendered = format!("{}", app_err);
        assert!(rendered.contains("m-123"));
        assert!(rendered.contains("PetApi"));
    }
}
