//! TypeScript client snippet generation.

use crate::error::CodegenError;
use crate::generator::{Generator, response_element};
use crate::request::{CodeGenRequest, QueryVerb};
use crate::snippet::Snippet;
use crate::target::Target;
use crate::walker::DeclarationWalker;

const DEPENDENCIES: &str = r#"{
  "dependencies": {
    "@querysnip/query-client": "^1.0.0"
  }
}"#;

const IMPORTS: &str = "import { HttpQueryClient } from '@querysnip/query-client';
import { Observable, firstValueFrom } from 'rxjs';";

/// Generates TypeScript example code with RxJS response wrappers.
///
/// Composite types render as inline object-literal annotations; TypeScript
/// needs no named wrapping declaration.
pub struct TypescriptGenerator;

impl Generator for TypescriptGenerator {
    fn label(&self) -> &'static str {
        Target::Typescript.label()
    }

    fn generate(&self, request: &CodeGenRequest<'_>) -> Result<Vec<Snippet>, CodegenError> {
        let walker =
            DeclarationWalker::new(Target::Typescript, request.schema, request.anonymous_types);

        let (element, is_collection) = response_element(request.return_type);
        let walked = walker.reference(element)?;

        let annotation = if is_collection {
            Target::Typescript.sequence_type(&walked.token)
        } else {
            walked.token.clone()
        };

        let invocation = match request.verb {
            QueryVerb::Find => format!(
                "const response: Promise<{}> = firstValueFrom(client.query(`{}`));",
                annotation, request.query
            ),
            QueryVerb::Stream => format!(
                "const response: Observable<{}> = client.queryStream(`{}`);",
                walked.token, request.query
            ),
        };

        let code = format!(
            "const client = new HttpQueryClient('{}');\n{}\n",
            request.origin, invocation
        );

        Ok(vec![
            Snippet::new("Dependencies", "json", DEPENDENCIES),
            Snippet::new("Imports", "typescript", IMPORTS),
            Snippet::new("Code", "typescript", code).default_open(),
        ])
    }
}
