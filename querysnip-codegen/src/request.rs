//! Code generation requests.

use querysnip_schema::{Schema, Type};
use serde::{Deserialize, Serialize};

/// Query execution verb.
///
/// `Find` resolves to a single response value; `Stream` resolves to a
/// continuous stream of values. Generators map these to the target
/// language's single-value and multi-value reactive wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryVerb {
    /// Single-response query.
    Find,
    /// Streaming query.
    Stream,
}

/// Everything a generator needs to produce a snippet list.
///
/// Requests are borrowed views over caller-owned data; generation is pure
/// and nothing outlives the call.
#[derive(Debug, Clone)]
pub struct CodeGenRequest<'a> {
    /// Verbatim query text, embedded into the generated invocation.
    pub query: &'a str,
    /// Resolved return type of the query.
    pub return_type: &'a Type,
    /// The named schema.
    pub schema: &'a Schema,
    /// Anonymous types scoped to this query's result shape.
    pub anonymous_types: &'a [Type],
    /// Execution verb.
    pub verb: QueryVerb,
    /// Origin of the query server, e.g. `https://queries.acme.com`.
    /// Parameterizes the generated transport construction line.
    pub origin: &'a str,
}
