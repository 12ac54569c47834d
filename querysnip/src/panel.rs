//! Generator selection state for the display panel.
//!
//! Two states: no generator selected (initial, nothing to show) and
//! generator selected (a snippet list is computed and stored). Selection
//! triggers synchronous generation; there is no asynchronous work and no
//! error state visible to the host. A generation failure is logged and
//! leaves the snippet list empty.

use querysnip_codegen::{CodeGenRequest, Snippet, Target, generate};

/// Selection state machine backing the snippet display panel.
#[derive(Debug, Default)]
pub struct SnippetPanel {
    selected: Option<Target>,
    snippets: Vec<Snippet>,
}

impl SnippetPanel {
    /// The fixed list of available generators, in display order.
    pub const GENERATORS: [Target; 2] = [Target::Kotlin, Target::Typescript];

    /// Creates a panel with no generator selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a generator and computes its snippet list for the request.
    ///
    /// Generation errors do not surface: they are logged and the panel
    /// shows an empty list until a selection succeeds.
    pub fn select(&mut self, target: Target, request: &CodeGenRequest<'_>) {
        self.selected = Some(target);
        match generate(target, request) {
            Ok(snippets) => self.snippets = snippets,
            Err(error) => {
                tracing::warn!(
                    target_language = target.label(),
                    %error,
                    "snippet generation failed"
                );
                self.snippets.clear();
            }
        }
    }

    /// Clears the selection, returning to the initial state.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.snippets.clear();
    }

    /// Currently selected generator, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Target> {
        self.selected
    }

    /// Snippets for the current selection (empty when nothing is selected
    /// or the last generation failed).
    #[must_use]
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use querysnip_codegen::QueryVerb;
    use querysnip_schema::{Attribute, Schema, Type};

    fn person_schema() -> Schema {
        let mut schema = Schema::new();
        schema.add_type(Type::scalar("com.acme.PersonId", "lang.taxi.Int"));
        schema.add_type(Type::scalar("com.acme.PersonName", "lang.taxi.String"));
        schema.add_type(Type::composite(
            "com.acme.Person",
            vec![
                Attribute::new("id", "com.acme.PersonId"),
                Attribute::new("name", "com.acme.PersonName"),
            ],
        ));
        schema
    }

    fn request<'a>(schema: &'a Schema, return_type: &'a Type) -> CodeGenRequest<'a> {
        CodeGenRequest {
            query: "findAll { Person[] }",
            return_type,
            schema,
            anonymous_types: &[],
            verb: QueryVerb::Find,
            origin: "https://queries.acme.com",
        }
    }

    #[test]
    fn test_initial_state() {
        let panel = SnippetPanel::new();
        assert_eq!(panel.selected(), None);
        assert!(panel.snippets().is_empty());
    }

    #[test]
    fn test_select_computes_snippets() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let mut panel = SnippetPanel::new();

        panel.select(Target::Kotlin, &request(&schema, &person));
        assert_eq!(panel.selected(), Some(Target::Kotlin));
        assert_eq!(panel.snippets().len(), 3);
    }

    #[test]
    fn test_reselect_switches_generator() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let mut panel = SnippetPanel::new();

        panel.select(Target::Kotlin, &request(&schema, &person));
        let kotlin_code = panel.snippets()[2].content.clone();

        panel.select(Target::Typescript, &request(&schema, &person));
        assert_eq!(panel.selected(), Some(Target::Typescript));
        assert_ne!(panel.snippets()[2].content, kotlin_code);
    }

    #[test]
    fn test_deselect_returns_to_initial_state() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let mut panel = SnippetPanel::new();

        panel.select(Target::Kotlin, &request(&schema, &person));
        panel.deselect();
        assert_eq!(panel.selected(), None);
        assert!(panel.snippets().is_empty());
    }

    #[test]
    fn test_generation_failure_leaves_empty_list() {
        let mut schema = Schema::new();
        schema.add_type(Type::composite(
            "com.acme.Broken",
            vec![Attribute::new("ghost", "com.acme.Missing")],
        ));
        let broken = schema.get_type("com.acme.Broken").expect("type exists").clone();
        let mut panel = SnippetPanel::new();

        panel.select(Target::Kotlin, &request(&schema, &broken));
        assert_eq!(panel.selected(), Some(Target::Kotlin));
        assert!(panel.snippets().is_empty());
    }

    #[test]
    fn test_generator_list() {
        let labels: Vec<&str> = SnippetPanel::GENERATORS
            .iter()
            .map(|t| t.label())
            .collect();
        assert_eq!(labels, vec!["Kotlin", "TypeScript"]);
    }
}
