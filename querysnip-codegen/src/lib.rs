//! # Querysnip Codegen
//!
//! Client code snippet generation from query API schemas.
//!
//! This crate provides:
//! - A recursive type-to-declaration walker over schema type graphs
//! - Kotlin and TypeScript snippet generators
//! - Target descriptors with per-language primitive mapping tables
//! - Request and snippet value types shared with the display panel

pub mod error;
pub mod generator;
pub mod kotlin;
pub mod request;
pub mod snippet;
pub mod target;
pub mod typescript;
pub mod walker;

pub use error::CodegenError;
pub use generator::Generator;
pub use kotlin::KotlinGenerator;
pub use request::{CodeGenRequest, QueryVerb};
pub use snippet::Snippet;
pub use target::Target;
pub use typescript::TypescriptGenerator;
pub use walker::{DeclarationWalker, WalkedType};

/// Generates the snippet list for a request against the given target.
///
/// # Arguments
/// * `target` - Target language
/// * `request` - Code generation request
///
/// # Returns
/// Three snippets (Dependencies, Imports, Code) with Code open by default.
///
/// # Errors
/// Returns `CodegenError` if the return type graph references a type that
/// does not resolve against the schema or anonymous registry.
pub fn generate(
    target: Target,
    request: &CodeGenRequest<'_>,
) -> Result<Vec<Snippet>, CodegenError> {
    match target {
        Target::Kotlin => KotlinGenerator.generate(request),
        Target::Typescript => TypescriptGenerator.generate(request),
    }
}
