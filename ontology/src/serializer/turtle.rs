//! Turtle serializer.
//!
//! Emits a prefix header from the graph's bindings, then the triples
//! in insertion order, grouping consecutive triples that share a
//! subject under one subject line with `;`-separated predicate-object
//! pairs. IRIs are written in full angle-bracket form; only
//! `rdf:type` is abbreviated, to the standard `a`.

use super::escape_literal;
use crate::graph::{OntologyGraph, Term};
use crate::vocab;

/// Serializes the graph as Turtle.
#[must_use]
pub fn to_turtle(graph: &OntologyGraph) -> String {
    let mut out = String::new();
    for (prefix, namespace) in graph.prefixes() {
        out.push_str(&format!("@prefix {prefix}: <{namespace}> .\n"));
    }
    if !graph.prefixes().is_empty() && !graph.is_empty() {
        out.push('\n');
    }

    let mut current_subject: Option<&Term> = None;
    for triple in graph.triples() {
        if current_subject == Some(&triple.subject) {
            out.push_str(" ;\n    ");
        } else {
            if current_subject.is_some() {
                out.push_str(" .\n");
            }
            out.push_str(&term(&triple.subject));
            out.push(' ');
            current_subject = Some(&triple.subject);
        }
        out.push_str(&predicate(&triple.predicate));
        out.push(' ');
        out.push_str(&term(&triple.object));
    }
    if current_subject.is_some() {
        out.push_str(" .\n");
    }
    out
}

fn predicate(iri: &str) -> String {
    if iri == vocab::RDF_TYPE {
        "a".to_owned()
    } else {
        format!("<{iri}>")
    }
}

fn term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Bnode(id) => format!("_:{id}"),
        Term::Str(value) => format!("\"{}\"", escape_literal(value)),
        Term::Int(value) => format!("\"{value}\"^^xsd:integer"),
    }
}
