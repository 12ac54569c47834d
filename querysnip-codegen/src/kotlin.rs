//! Kotlin client snippet generation.

use crate::error::CodegenError;
use crate::generator::{Generator, response_element};
use crate::request::{CodeGenRequest, QueryVerb};
use crate::snippet::Snippet;
use crate::target::Target;
use crate::walker::DeclarationWalker;

const DEPENDENCIES: &str = r#"dependencies {
    implementation("com.querysnip:query-client-kotlin:1.0.0")
}"#;

const IMPORTS: &str = "import com.querysnip.client.HttpQueryClient
import reactor.core.publisher.Flux
import reactor.core.publisher.Mono";

/// Generates Kotlin example code with Reactor response wrappers.
pub struct KotlinGenerator;

impl Generator for KotlinGenerator {
    fn label(&self) -> &'static str {
        Target::Kotlin.label()
    }

    fn generate(&self, request: &CodeGenRequest<'_>) -> Result<Vec<Snippet>, CodegenError> {
        let walker = DeclarationWalker::new(Target::Kotlin, request.schema, request.anonymous_types);

        // Collection-ness of the response comes from the resolved return
        // type descriptor, not from the query text.
        let (element, is_collection) = response_element(request.return_type);
        let walked = walker.reference(element)?;

        let response_type = match (request.verb, is_collection) {
            (QueryVerb::Find, true) => format!("Mono<List<{}>>", walked.token),
            (QueryVerb::Find, false) => format!("Mono<{}>", walked.token),
            // Streams emit elements one at a time regardless of whether the
            // query's return type is a collection.
            (QueryVerb::Stream, _) => format!("Flux<{}>", walked.token),
        };
        let method = match request.verb {
            QueryVerb::Find => "query",
            QueryVerb::Stream => "queryStream",
        };

        let mut code = String::new();
        if !walked.declarations.is_empty() {
            code.push_str(&walked.declarations.join("\n\n"));
            code.push_str("\n\n");
        }
        code.push_str(&format!(
            "val client = HttpQueryClient(\"{}\")\n",
            request.origin
        ));
        code.push_str(&format!(
            "val response: {} = client.{}(\"\"\"{}\"\"\")\n",
            response_type, method, request.query
        ));

        Ok(vec![
            Snippet::new("Dependencies", "kotlin", DEPENDENCIES),
            Snippet::new("Imports", "kotlin", IMPORTS),
            Snippet::new("Code", "kotlin", code).default_open(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn find_all_request<'a>(schema: &'a Schema, return_type: &'a Type) -> CodeGenRequest<'a> {
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
    fn test_snippet_list_shape() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let request = find_all_request(&schema, &person);

        let snippets = KotlinGenerator.generate(&request).expect("generation succeeds");
        assert_eq!(snippets.len(), 3);
        assert_eq!(snippets[0].label, "Dependencies");
        assert_eq!(snippets[1].label, "Imports");
        assert_eq!(snippets[2].label, "Code");
        assert!(!snippets[0].open_by_default);
        assert!(!snippets[1].open_by_default);
        assert!(snippets[2].open_by_default);
    }

    #[test]
    fn test_find_collection_scenario() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let return_type = Type::collection_of(person);
        let request = find_all_request(&schema, &return_type);

        let snippets = KotlinGenerator.generate(&request).expect("generation succeeds");
        let code = &snippets[2].content;

        assert!(code.contains("data class Person(\n   val id : Int,\n   val name : String\n)"));
        assert!(code.contains("val client = HttpQueryClient(\"https://queries.acme.com\")"));
        assert!(code.contains(
            "val response: Mono<List<Person>> = client.query(\"\"\"findAll { Person[] }\"\"\")"
        ));
    }

    #[test]
    fn test_find_single_value_wrapper() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let request = find_all_request(&schema, &person);

        let snippets = KotlinGenerator.generate(&request).expect("generation succeeds");
        assert!(snippets[2].content.contains("val response: Mono<Person> = client.query("));
    }

    #[test]
    fn test_stream_multi_value_wrapper() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let return_type = Type::collection_of(person);
        let mut request = find_all_request(&schema, &return_type);
        request.verb = QueryVerb::Stream;
        request.query = "stream { Person }";

        let snippets = KotlinGenerator.generate(&request).expect("generation succeeds");
        assert!(snippets[2].content.contains(
            "val response: Flux<Person> = client.queryStream(\"\"\"stream { Person }\"\"\")"
        ));
    }

    #[test]
    fn test_idempotent_generation() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let return_type = Type::collection_of(person);
        let request = find_all_request(&schema, &return_type);

        let first = KotlinGenerator.generate(&request).expect("generation succeeds");
        let second = KotlinGenerator.generate(&request).expect("generation succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmapped_primitive_does_not_fail() {
        let mut schema = Schema::new();
        schema.add_type(Type::scalar("com.acme.Funky", "com.acme.FunkyBase"));
        schema.add_type(Type::composite(
            "com.acme.Holder",
            vec![Attribute::new("funky", "com.acme.Funky")],
        ));
        let holder = schema.get_type("com.acme.Holder").expect("type exists").clone();
        let request = find_all_request(&schema, &holder);

        let snippets = KotlinGenerator.generate(&request).expect("generation succeeds");
        assert!(snippets[2].content.contains("val funky : FunkyBase"));
    }

    #[test]
    fn test_dependency_snippet_content() {
        let schema = person_schema();
        let person = schema.get_type("com.acme.Person").expect("type exists").clone();
        let request = find_all_request(&schema, &person);

        let snippets = KotlinGenerator.generate(&request).expect("generation succeeds");
        assert!(snippets[0].content.contains("com.querysnip:query-client-kotlin"));
        assert!(snippets[1].content.contains("import reactor.core.publisher.Mono"));
    }
}
