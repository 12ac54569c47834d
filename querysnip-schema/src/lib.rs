//! # Querysnip Schema
//!
//! Schema type model and type resolution.
//!
//! This crate provides:
//! - Qualified type names with parameterized and display forms
//! - Type descriptors (scalar, collection, composite) with attributes
//! - A closed set of base primitive kinds
//! - Type resolution across a schema and an anonymous type registry

pub mod error;
pub mod lookup;
pub mod names;
pub mod types;

pub use error::SchemaError;
pub use lookup::resolve_type;
pub use names::QualifiedName;
pub use types::{Attribute, PrimitiveKind, Schema, Type, TypeCategory};
