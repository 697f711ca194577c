//! Roman-numeral chord decomposition and knowledge-graph encoding.
//!
//! The crate turns a roman-numeral chord symbol (e.g. `"VII64[no3]"`)
//! into two artifacts:
//!
//! 1. a validated [`ChordDecomposition`]: root, bass, quality,
//!    inversion, scale-degree intervals and omitted intervals, each
//!    interval in normalized (alteration, degree) form;
//! 2. an [`OntologyGraph`]: RDF triples describing the chord under
//!    the Polifonia roman-chord ontology, serializable to Turtle or
//!    N-Triples.
//!
//! # Pipeline
//!
//! ```text
//! symbol → decompose → validate → encode → serialize
//! ```
//!
//! ```
//! use roman_ontology::graph::RdfFormat;
//!
//! let record = roman_ontology::decompose_validated("V65").unwrap();
//! assert_eq!(record.inversion, 1);
//!
//! let graph = roman_ontology::chord_graph("V65").unwrap();
//! let turtle = graph.serialize(RdfFormat::Turtle);
//! assert!(turtle.contains("roman-chord/Chord"));
//! ```
//!
//! Every call builds independent values; nothing is shared or
//! retained, so concurrent callers need no coordination. The core
//! never logs and never retries; every failure is a value.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod decompose;
pub mod encoder;
pub mod graph;
pub mod harte;
pub mod model;
pub mod serializer;
pub mod validate;
pub mod vocab;

pub use graph::OntologyGraph;
pub use model::{Alteration, AlterationDegree, ChordDecomposition, Quality};

/// Errors raised by the decomposition and encoding pipeline.
///
/// The taxonomy is fixed: parse failures are `InvalidChord`, contract
/// violations between decomposer and encoder are `Schema`, and a
/// validated record that still cannot become triples is `Encoding`
/// (a mapping-rule bug, never a user-input problem).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input symbol is not a roman-numeral chord the theory
    /// engine accepts under the given key.
    #[error("'{0}' is not a valid roman-numeral chord")]
    InvalidChord(String),

    /// An accidental bucket does not match the fixed alteration
    /// vocabulary.
    #[error("unmapped accidental combination '{0}'")]
    InvalidAlteration(String),

    /// A decomposition record violates the data contract.
    #[error("decomposition violates the data contract: {0}")]
    Schema(String),

    /// Triple construction failed for a validated record.
    #[error("cannot encode decomposition as RDF: {0}")]
    Encoding(String),
}

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, Error>;

/// Decomposes `symbol` in the default key and validates the record.
///
/// # Errors
///
/// Returns [`Error::InvalidChord`] or [`Error::InvalidAlteration`]
/// from decomposition, or [`Error::Schema`] if the record fails the
/// structural gate.
pub fn decompose_validated(symbol: &str) -> Result<ChordDecomposition> {
    let record = decompose::decompose(symbol)?;
    validate::validate(&record)?;
    Ok(record)
}

/// Runs the full pipeline: decompose, validate, and encode `symbol`
/// into an RDF graph.
///
/// # Errors
///
/// Any error of [`decompose_validated`], plus [`Error::Encoding`]
/// when triple construction fails.
pub fn chord_graph(symbol: &str) -> Result<OntologyGraph> {
    let record = decompose_validated(symbol)?;
    encoder::encode(&record)
}
