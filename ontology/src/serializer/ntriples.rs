//! N-Triples serializer.
//!
//! One triple per line, full IRIs, no prefixes. Prefix bindings on
//! the graph are ignored: N-Triples has no syntax for them.

use super::escape_literal;
use crate::graph::{OntologyGraph, Term};
use crate::vocab;

/// Serializes the graph as N-Triples.
#[must_use]
pub fn to_ntriples(graph: &OntologyGraph) -> String {
    let mut out = String::new();
    for triple in graph.triples() {
        out.push_str(&term(&triple.subject));
        out.push(' ');
        out.push_str(&format!("<{}>", triple.predicate));
        out.push(' ');
        out.push_str(&term(&triple.object));
        out.push_str(" .\n");
    }
    out
}

fn term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Bnode(id) => format!("_:{id}"),
        Term::Str(value) => format!("\"{}\"", escape_literal(value)),
        Term::Int(value) => format!("\"{value}\"^^<{}>", vocab::XSD_INTEGER),
    }
}
