//! # Querysnip
//!
//! Example client code generation for schema-described query APIs.
//!
//! Given a query, its resolved return type, and the schema it runs
//! against, querysnip renders ready-to-paste example client code (Kotlin,
//! TypeScript) as a list of labeled snippets: a dependency declaration, an
//! import block, and the call-site example.
//!
//! ## Quick Start
//!
//! ```ignore
//! use querysnip::prelude::*;
//!
//! let request = CodeGenRequest {
//!     query: "findAll { Person[] }",
//!     return_type: &return_type,
//!     schema: &schema,
//!     anonymous_types: &[],
//!     verb: QueryVerb::Find,
//!     origin: "https://queries.acme.com",
//! };
//!
//! let mut panel = SnippetPanel::new();
//! panel.select(Target::Kotlin, &request);
//! for snippet in panel.snippets() {
//!     println!("== {}\n{}", snippet.label, snippet.content);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type descriptors, qualified names, type resolution
//! - [`codegen`] - Declaration walker and per-target generators
//! - [`panel`] - Generator selection state for the display panel

pub mod panel;
pub mod prelude;

/// Schema type model and resolution.
pub mod schema {
    pub use querysnip_schema::*;
}

/// Snippet generation.
pub mod codegen {
    pub use querysnip_codegen::*;
}

pub use panel::SnippetPanel;

// Re-export commonly used items at the crate root
pub use querysnip_codegen::{
    CodeGenRequest, CodegenError, Generator, QueryVerb, Snippet, Target, generate,
};
pub use querysnip_schema::{Attribute, QualifiedName, Schema, SchemaError, Type, resolve_type};
