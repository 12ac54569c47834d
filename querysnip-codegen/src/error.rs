//! Error types for snippet generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Type resolution failed while walking the return type.
    #[error("schema error: {0}")]
    Schema(#[from] querysnip_schema::SchemaError),
}
