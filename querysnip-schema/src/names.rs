//! Qualified type names.
//!
//! A type is identified by its fully-qualified name (e.g. `com.acme.Person`).
//! Array types carry a parameterized form (`lang.taxi.Array<com.acme.Person>`)
//! and a display form (`Person[]`).

use serde::{Deserialize, Serialize};

/// Fully-qualified name of the built-in array type.
pub const ARRAY_TYPE_NAME: &str = "lang.taxi.Array";

/// A qualified type name with its parameterized and display forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedName {
    /// Fully-qualified name, e.g. `com.acme.Person`.
    pub fully_qualified_name: String,
    /// Parameterized name, e.g. `lang.taxi.Array<com.acme.Person>`.
    pub parameterized_name: String,
    /// Short display name, e.g. `Person` or `Person[]`.
    pub short_display_name: String,
    /// Type parameters (populated for array types).
    #[serde(default)]
    pub parameters: Vec<QualifiedName>,
}

impl QualifiedName {
    /// Creates a qualified name from a fully-qualified string.
    ///
    /// The short display name is the final dot-separated segment.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            fully_qualified_name: name.to_string(),
            parameterized_name: name.to_string(),
            short_display_name: name_only(name).to_string(),
            parameters: Vec::new(),
        }
    }

    /// Creates the qualified name of an array over the given element name.
    #[must_use]
    pub fn array_of(element: &QualifiedName) -> Self {
        Self {
            fully_qualified_name: ARRAY_TYPE_NAME.to_string(),
            parameterized_name: format!("{}<{}>", ARRAY_TYPE_NAME, element.fully_qualified_name),
            short_display_name: format!("{}[]", element.short_display_name),
            parameters: vec![element.clone()],
        }
    }
}

/// Returns the final dot-separated segment of a qualified name.
#[must_use]
pub fn name_only(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Extracts the element type name from an array type name.
///
/// Recognizes both the suffix form (`com.acme.Person[]`) and the
/// parameterized form (`lang.taxi.Array<com.acme.Person>`). Returns `None`
/// for non-array names.
#[must_use]
pub fn array_element_name(name: &str) -> Option<&str> {
    if let Some(stripped) = name.strip_suffix("[]") {
        return Some(stripped);
    }
    name.strip_prefix(ARRAY_TYPE_NAME)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_short_display() {
        let name = QualifiedName::from_name("com.acme.Person");
        assert_eq!(name.fully_qualified_name, "com.acme.Person");
        assert_eq!(name.short_display_name, "Person");
        assert!(name.parameters.is_empty());
    }

    #[test]
    fn test_from_name_without_package() {
        let name = QualifiedName::from_name("Person");
        assert_eq!(name.short_display_name, "Person");
    }

    #[test]
    fn test_array_of() {
        let element = QualifiedName::from_name("com.acme.Person");
        let array = QualifiedName::array_of(&element);
        assert_eq!(array.fully_qualified_name, ARRAY_TYPE_NAME);
        assert_eq!(array.parameterized_name, "lang.taxi.Array<com.acme.Person>");
        assert_eq!(array.short_display_name, "Person[]");
        assert_eq!(array.parameters, vec![element]);
    }

    #[test]
    fn test_array_element_name_suffix_form() {
        assert_eq!(array_element_name("com.acme.Person[]"), Some("com.acme.Person"));
    }

    #[test]
    fn test_array_element_name_parameterized_form() {
        assert_eq!(
            array_element_name("lang.taxi.Array<com.acme.Person>"),
            Some("com.acme.Person")
        );
    }

    #[test]
    fn test_array_element_name_non_array() {
        assert_eq!(array_element_name("com.acme.Person"), None);
    }
}
