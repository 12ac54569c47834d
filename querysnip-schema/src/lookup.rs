//! Type resolution across a schema and an anonymous type registry.
//!
//! Anonymous types are descriptors scoped to a single query result shape;
//! they are consulted alongside the named schema. Array forms synthesize a
//! collection descriptor wrapping the resolved element type.

use crate::error::SchemaError;
use crate::names::array_element_name;
use crate::types::{Schema, Type};

/// Resolves a type name against a schema and an anonymous type registry.
///
/// # Arguments
/// * `schema` - The named schema
/// * `name` - Fully-qualified, array-suffix, or parameterized array name
/// * `anonymous_types` - Types scoped to the current query result
///
/// # Returns
/// The resolved type descriptor. Array names produce a synthesized
/// collection descriptor over the resolved element type.
///
/// # Errors
/// Returns `SchemaError::TypeNotFound` when the name resolves nowhere.
pub fn resolve_type(
    schema: &Schema,
    name: &str,
    anonymous_types: &[Type],
) -> Result<Type, SchemaError> {
    if let Some(element_name) = array_element_name(name) {
        if element_name.is_empty() {
            return Err(SchemaError::MalformedArrayName {
                name: name.to_string(),
            });
        }
        let element = resolve_type(schema, element_name, anonymous_types)?;
        return Ok(Type::collection_of(element));
    }

    if let Some(found) = schema.get_type(name) {
        return Ok(found.clone());
    }

    anonymous_types
        .iter()
        .find(|t| t.name.fully_qualified_name == name)
        .cloned()
        .ok_or_else(|| SchemaError::not_found(name))
}
