//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use querysnip::prelude::*;
//! ```

// Schema types
pub use querysnip_schema::{
    Attribute, PrimitiveKind, QualifiedName, Schema, SchemaError, Type, TypeCategory, resolve_type,
};

// Codegen types
pub use querysnip_codegen::{
    CodeGenRequest, CodegenError, DeclarationWalker, Generator, KotlinGenerator, QueryVerb,
    Snippet, Target, TypescriptGenerator, generate,
};

// Panel
pub use crate::panel::SnippetPanel;
