//! The generator interface exposed to the selection panel.

use crate::error::CodegenError;
use crate::request::CodeGenRequest;
use crate::snippet::Snippet;
use querysnip_schema::Type;

/// A client code generator for one target language.
///
/// Generation is pure: the same request always yields the same snippet
/// list. Generators return exactly three snippets (Dependencies, Imports,
/// Code) with Code open by default.
pub trait Generator {
    /// Display name shown in the generator list.
    fn label(&self) -> &'static str;

    /// Generates the snippet list for a request.
    ///
    /// # Errors
    /// Returns `CodegenError` if the return type graph references a type
    /// that does not resolve.
    fn generate(&self, request: &CodeGenRequest<'_>) -> Result<Vec<Snippet>, CodegenError>;
}

/// Splits a return type into the element to declare and whether the
/// response is a collection of it.
///
/// Collection-ness is read off the resolved descriptor; the query text is
/// never inspected.
pub(crate) fn response_element(return_type: &Type) -> (&Type, bool) {
    match &return_type.collection_type {
        Some(member) if return_type.is_collection => (member.as_ref(), true),
        _ => (return_type, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use querysnip_schema::Type;

    #[test]
    fn test_response_element_unwraps_collections() {
        let person = Type::composite("com.acme.Person", vec![]);
        let collection = Type::collection_of(person.clone());

        let (element, is_collection) = response_element(&collection);
        assert!(is_collection);
        assert_eq!(element.name, person.name);
    }

    #[test]
    fn test_response_element_passes_composites_through() {
        let person = Type::composite("com.acme.Person", vec![]);
        let (element, is_collection) = response_element(&person);
        assert!(!is_collection);
        assert_eq!(element.name, person.name);
    }
}
