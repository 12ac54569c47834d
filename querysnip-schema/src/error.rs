//! Error types for schema loading and type resolution.

use thiserror::Error;

/// Error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Type lookup failed against both the schema and the anonymous registry.
    #[error("type '{name}' not found in schema or anonymous types")]
    TypeNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// Malformed array type name.
    #[error("malformed array type name '{name}': missing element type")]
    MalformedArrayName {
        /// The offending name.
        name: String,
    },

    /// JSON deserialization error.
    #[error("schema JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Creates a type-not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }
}
