//! Schema type definitions.
//!
//! This module contains the data structures describing the types of a
//! query API schema: scalar types with a base primitive kind, collection
//! types with a member type, and composite types with named attributes.

use crate::names::{self, QualifiedName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base primitive kinds for scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// UTF-8 text.
    String,
    /// True/false value.
    Boolean,
    /// Arbitrary-precision decimal number.
    Decimal,
    /// Point in time (UTC instant).
    Instant,
    /// Time of day without a date.
    Time,
    /// Calendar date without a time.
    LocalDate,
    /// 64-bit floating point number.
    Double,
    /// Whole number.
    Integer,
    /// Any value; the untyped fallback.
    Any,
}

impl PrimitiveKind {
    /// Parses a primitive kind from a type name.
    ///
    /// Accepts fully-qualified names (`lang.taxi.String`) and bare names.
    /// Returns `None` for names outside the closed primitive set, which
    /// feeds the unmapped-primitive diagnostic path during generation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match names::name_only(name) {
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Decimal" => Some(Self::Decimal),
            "Instant" => Some(Self::Instant),
            "Time" => Some(Self::Time),
            "Date" | "LocalDate" => Some(Self::LocalDate),
            "Double" => Some(Self::Double),
            "Int" | "Integer" => Some(Self::Integer),
            "Any" => Some(Self::Any),
            _ => None,
        }
    }
}

/// A named attribute of a composite type.
///
/// The referenced type name must be resolved via [`crate::resolve_type`]
/// to obtain the full descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Referenced type name (fully-qualified or array form).
    pub type_name: String,
}

impl Attribute {
    /// Creates an attribute referencing the given type name.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Category of a type descriptor.
///
/// A type is exactly one of scalar, collection, or composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// Scalar type with a base primitive kind.
    Scalar,
    /// Collection type with a member type.
    Collection,
    /// Composite (object) type with attributes.
    Composite,
}

/// A schema type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    /// Qualified name of the type.
    pub name: QualifiedName,
    /// Attributes in declaration order (composite types).
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// True for scalar types. Never set together with `is_collection`.
    #[serde(default)]
    pub is_scalar: bool,
    /// True for collection types. Never set together with `is_scalar`.
    #[serde(default)]
    pub is_collection: bool,
    /// Base primitive type name (scalar types only).
    #[serde(default)]
    pub base_primitive_type_name: Option<QualifiedName>,
    /// Member type (collection types only).
    #[serde(default)]
    pub collection_type: Option<Box<Type>>,
}

impl Type {
    /// Creates a scalar type with the given base primitive type name.
    #[must_use]
    pub fn scalar(name: &str, base_primitive: &str) -> Self {
        Self {
            name: QualifiedName::from_name(name),
            attributes: Vec::new(),
            is_scalar: true,
            is_collection: false,
            base_primitive_type_name: Some(QualifiedName::from_name(base_primitive)),
            collection_type: None,
        }
    }

    /// Creates a composite type with the given attributes.
    #[must_use]
    pub fn composite(name: &str, attributes: Vec<Attribute>) -> Self {
        Self {
            name: QualifiedName::from_name(name),
            attributes,
            is_scalar: false,
            is_collection: false,
            base_primitive_type_name: None,
            collection_type: None,
        }
    }

    /// Creates a collection type over the given member type.
    #[must_use]
    pub fn collection_of(member: Type) -> Self {
        Self {
            name: QualifiedName::array_of(&member.name),
            attributes: Vec::new(),
            is_scalar: false,
            is_collection: true,
            base_primitive_type_name: None,
            collection_type: Some(Box::new(member)),
        }
    }

    /// Returns the category of this type.
    #[must_use]
    pub fn category(&self) -> TypeCategory {
        if self.is_collection {
            TypeCategory::Collection
        } else if self.is_scalar {
            TypeCategory::Scalar
        } else {
            TypeCategory::Composite
        }
    }
}

/// The registry of known type descriptors for a query API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Type definitions.
    pub types: Vec<Type>,
    /// Type lookup map (built during loading).
    #[serde(skip)]
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a schema from a JSON document.
    ///
    /// # Errors
    /// Returns `SchemaError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, crate::SchemaError> {
        let mut schema: Self = serde_json::from_str(json)?;
        schema.build_type_map();
        Ok(schema)
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, type_def: Type) {
        let name = type_def.name.fully_qualified_name.clone();
        let index = self.types.len();
        self.types.push(type_def);
        self.type_map.insert(name, index);
    }

    /// Looks up a type by fully-qualified name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&Type> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Builds the type lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, type_def) in self.types.iter().enumerate() {
            self.type_map
                .insert(type_def.name.fully_qualified_name.clone(), idx);
        }
    }
}
