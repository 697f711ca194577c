//! In-memory RDF graph model.
//!
//! An [`OntologyGraph`] is an append-only list of triples plus a
//! prefix-binding table, built fresh per encoding call and discarded
//! after serialization. Blank-node identifiers are opaque handles
//! scoped to one graph: every graph owns its own identifier space, so
//! two encode calls can never share blank-node identities.

use crate::serializer;
use crate::{Error, Result};

/// An opaque, graph-scoped blank-node handle.
///
/// Handles are only meaningful inside the graph that issued them;
/// the numeric label leaks into serializations (`_:b0`) but carries
/// no cross-graph identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BnodeId(u32);

impl std::fmt::Display for BnodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// One position of a triple: IRI, blank node, or literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node issued by [`OntologyGraph::bnode`].
    Bnode(BnodeId),
    /// A string literal.
    Str(String),
    /// An integer literal (`xsd:integer`).
    Int(i64),
}

impl Term {
    /// Whether the term may stand in subject position.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        matches!(self, Term::Iri(_) | Term::Bnode(_))
    }
}

/// A single RDF triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object (any term).
    pub object: Term,
}

/// Output serialization of a graph.
///
/// The ontology source does not fix a format, so it is a
/// configuration option rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Turtle 1.1 (the default).
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl std::str::FromStr for RdfFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "nt" => Ok(RdfFormat::NTriples),
            other => Err(format!("unknown RDF format '{other}' (expected 'turtle' or 'ntriples')")),
        }
    }
}

/// An append-only triple set with prefix bindings.
#[derive(Debug, Default)]
pub struct OntologyGraph {
    prefixes: Vec<(String, String)>,
    triples: Vec<Triple>,
    next_bnode: u32,
}

impl OntologyGraph {
    /// Creates an empty graph with its own blank-node space.
    #[must_use]
    pub fn new() -> OntologyGraph {
        OntologyGraph::default()
    }

    /// Binds a namespace prefix for serialization.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        self.prefixes
            .push((prefix.to_owned(), namespace.to_owned()));
    }

    /// Issues a fresh blank node scoped to this graph.
    pub fn bnode(&mut self) -> BnodeId {
        let id = BnodeId(self.next_bnode);
        self.next_bnode += 1;
        id
    }

    /// Appends a triple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] when the subject is a literal or
    /// when an IRI contains characters that cannot appear in an IRI
    /// reference.
    pub fn insert(&mut self, subject: Term, predicate: &str, object: Term) -> Result<()> {
        if !subject.is_resource() {
            return Err(Error::Encoding(format!(
                "literal {subject:?} cannot be a triple subject"
            )));
        }
        if let Term::Iri(iri) = &subject {
            check_iri(iri)?;
        }
        check_iri(predicate)?;
        if let Term::Iri(iri) = &object {
            check_iri(iri)?;
        }
        self.triples.push(Triple {
            subject,
            predicate: predicate.to_owned(),
            object,
        });
        Ok(())
    }

    /// All triples in insertion order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Bound prefixes in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Serializes the graph to text in the requested format.
    #[must_use]
    pub fn serialize(&self, format: RdfFormat) -> String {
        match format {
            RdfFormat::Turtle => serializer::turtle::to_turtle(self),
            RdfFormat::NTriples => serializer::ntriples::to_ntriples(self),
        }
    }
}

/// Rejects strings that cannot stand as an IRI reference.
fn check_iri(iri: &str) -> Result<()> {
    let malformed = iri.is_empty()
        || iri
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'));
    if malformed {
        return Err(Error::Encoding(format!("malformed IRI '{iri}'")));
    }
    Ok(())
}
