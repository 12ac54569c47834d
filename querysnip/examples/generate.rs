//! Generates example client code for a small schema and prints it.
//!
//! Run with: cargo run --example generate

use querysnip::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

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

    let return_type = resolve_type(&schema, "com.acme.Person[]", &[])
        .expect("return type should resolve");

    let request = CodeGenRequest {
        query: "findAll { Person[] }",
        return_type: &return_type,
        schema: &schema,
        anonymous_types: &[],
        verb: QueryVerb::Find,
        origin: "https://queries.acme.com",
    };

    let mut panel = SnippetPanel::new();
    for target in SnippetPanel::GENERATORS {
        panel.select(target, &request);
        println!("==== {} ====", target.label());
        for snippet in panel.snippets() {
            println!("-- {} ({})", snippet.label, snippet.language);
            println!("{}", snippet.content);
        }
    }
}
