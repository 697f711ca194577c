//! Decomposition-record → RDF graph encoder.
//!
//! The encoder walks a validated [`ChordDecomposition`] and emits the
//! fixed triple shape of the roman-chord ontology mapping:
//!
//! | Record field | Graph shape |
//! |--------------|-------------|
//! | `chord` | resource IRI, typed `roman:Chord` |
//! | `quality` | `roman:hasQuality` → quality resource IRI |
//! | `inversion` | `roman:inversionType` → integer literal |
//! | `root` | blank `roman:Note` with label and `owl:sameAs` identity |
//! | `plain_roman` | blank `roman:BasicFunction` with label |
//! | `bass` | blank `roman:Interval` via `roman:hasBass` |
//! | `degrees[*]` | blank `roman:Interval` via `roman:containsInterval` |
//! | `missing[*]` | blank `roman:Interval` via `roman:missingInterval` |
//!
//! All structured nodes are blank: only the chord, its quality, and
//! the `owl:sameAs` identity targets get stable IRIs.

use crate::graph::{OntologyGraph, Term};
use crate::model::{AlterationDegree, ChordDecomposition};
use crate::vocab;
use crate::{Error, Result};

/// Encodes a decomposition record as an ontology graph.
///
/// The output is deterministic up to blank-node labels: the same
/// record always yields the same triples in the same order.
///
/// # Errors
///
/// Returns [`Error::Encoding`] when a degree does not convert to an
/// integer or a constructed IRI is malformed. Records that pass
/// [`crate::validate::validate`] cannot trip either case.
pub fn encode(record: &ChordDecomposition) -> Result<OntologyGraph> {
    let mut graph = OntologyGraph::new();
    graph.bind("roman", vocab::NS_ROMAN);
    graph.bind("chord", vocab::NS_CHORD);
    graph.bind("rdf", vocab::NS_RDF);
    graph.bind("rdfs", vocab::NS_RDFS);
    graph.bind("owl", vocab::NS_OWL);
    graph.bind("xsd", vocab::NS_XSD);

    let chord = Term::Iri(format!("{}{}", vocab::NS_RESOURCE, record.chord));
    let quality = Term::Iri(format!("{}{}", vocab::NS_RESOURCE, record.quality.as_str()));

    graph.insert(chord.clone(), vocab::RDF_TYPE, Term::Iri(vocab::ROMAN_CHORD.to_owned()))?;
    graph.insert(chord.clone(), vocab::ROMAN_HAS_QUALITY, quality)?;
    graph.insert(
        chord.clone(),
        vocab::ROMAN_INVERSION_TYPE,
        Term::Int(i64::from(record.inversion)),
    )?;

    encode_root(&mut graph, &chord, &record.root)?;
    encode_basic_function(&mut graph, &chord, &record.plain_roman)?;

    encode_interval(&mut graph, &chord, vocab::ROMAN_HAS_BASS, &record.bass)?;
    for degree in &record.degrees {
        encode_interval(&mut graph, &chord, vocab::ROMAN_CONTAINS_INTERVAL, degree)?;
    }
    for degree in &record.missing {
        encode_interval(&mut graph, &chord, vocab::ROMAN_MISSING_INTERVAL, degree)?;
    }

    Ok(graph)
}

/// Blank root note with a stable chord-ontology identity.
///
/// Sharps in the note name become `s` in the identity IRI, matching
/// the chord ontology's note naming (`Fs` for F#).
fn encode_root(graph: &mut OntologyGraph, chord: &Term, root: &str) -> Result<()> {
    let node = Term::Bnode(graph.bnode());
    graph.insert(chord.clone(), vocab::ROMAN_HAS_ROOT, node.clone())?;
    graph.insert(node.clone(), vocab::RDF_TYPE, Term::Iri(vocab::ROMAN_NOTE.to_owned()))?;
    graph.insert(node.clone(), vocab::RDFS_LABEL, Term::Str(root.to_owned()))?;
    graph.insert(
        node,
        vocab::OWL_SAME_AS,
        Term::Iri(format!("{}{}", vocab::NS_CHORD, root.replace('#', "s"))),
    )?;
    Ok(())
}

fn encode_basic_function(graph: &mut OntologyGraph, chord: &Term, plain_roman: &str) -> Result<()> {
    let node = Term::Bnode(graph.bnode());
    graph.insert(chord.clone(), vocab::ROMAN_HAS_BASIC_FUNCTION, node.clone())?;
    graph.insert(
        node.clone(),
        vocab::RDF_TYPE,
        Term::Iri(vocab::ROMAN_BASIC_FUNCTION.to_owned()),
    )?;
    graph.insert(node, vocab::RDFS_LABEL, Term::Str(plain_roman.to_owned()))?;
    Ok(())
}

/// Blank interval node hung off the chord via `predicate`.
///
/// `chord:modifier` is asserted only when the alteration is not
/// [`crate::model::Alteration::None`]; an unaltered interval has no
/// modifier triple rather than a null one.
fn encode_interval(
    graph: &mut OntologyGraph,
    chord: &Term,
    predicate: &str,
    interval: &AlterationDegree,
) -> Result<()> {
    let degree: i64 = interval.degree.parse().map_err(|_| {
        Error::Encoding(format!("degree '{}' is not an integer", interval.degree))
    })?;

    let node = Term::Bnode(graph.bnode());
    graph.insert(chord.clone(), predicate, node.clone())?;
    graph.insert(
        node.clone(),
        vocab::RDF_TYPE,
        Term::Iri(vocab::ROMAN_INTERVAL.to_owned()),
    )?;
    graph.insert(node.clone(), vocab::CHORD_DEGREE, Term::Int(degree))?;

    let modifier = interval.alteration.as_modifier();
    graph.insert(
        node.clone(),
        vocab::OWL_SAME_AS,
        Term::Iri(format!(
            "{}{}{}",
            vocab::NS_SCALE_INTERVAL,
            modifier.unwrap_or(""),
            interval.degree
        )),
    )?;
    if let Some(modifier) = modifier {
        graph.insert(node, vocab::CHORD_MODIFIER, Term::Str(modifier.to_owned()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quality;
    use crate::{decompose, validate};

    fn record(symbol: &str) -> ChordDecomposition {
        let record = decompose::decompose(symbol).unwrap();
        validate::validate(&record).unwrap();
        record
    }

    fn count_predicate(graph: &OntologyGraph, predicate: &str) -> usize {
        graph
            .triples()
            .iter()
            .filter(|t| t.predicate == predicate)
            .count()
    }

    #[test]
    fn chord_node_shape() {
        let graph = encode(&record("V7")).unwrap();
        let chord = Term::Iri(format!("{}V7", vocab::NS_RESOURCE));
        assert!(graph.triples().iter().any(|t| {
            t.subject == chord
                && t.predicate == vocab::RDF_TYPE
                && t.object == Term::Iri(vocab::ROMAN_CHORD.to_owned())
        }));
        assert!(graph.triples().iter().any(|t| {
            t.predicate == vocab::ROMAN_HAS_QUALITY
                && t.object == Term::Iri(format!("{}major", vocab::NS_RESOURCE))
        }));
        assert!(graph.triples().iter().any(|t| {
            t.predicate == vocab::ROMAN_INVERSION_TYPE && t.object == Term::Int(0)
        }));
    }

    #[test]
    fn one_interval_node_per_element() {
        let record = record("VII64[no3]");
        let graph = encode(&record).unwrap();
        assert_eq!(count_predicate(&graph, vocab::ROMAN_HAS_BASS), 1);
        assert_eq!(
            count_predicate(&graph, vocab::ROMAN_CONTAINS_INTERVAL),
            record.degrees.len()
        );
        assert_eq!(
            count_predicate(&graph, vocab::ROMAN_MISSING_INTERVAL),
            record.missing.len()
        );
    }

    #[test]
    fn modifier_only_when_altered() {
        // VII64[no3] has bass #4 and degrees [#4, 7]: two interval
        // nodes carry the sharp modifier (bass + one degree), the
        // plain 7 and the missing 3 carry none.
        let graph = encode(&record("VII64[no3]")).unwrap();
        let modifiers: Vec<_> = graph
            .triples()
            .iter()
            .filter(|t| t.predicate == vocab::CHORD_MODIFIER)
            .collect();
        assert_eq!(modifiers.len(), 2);
        assert!(modifiers
            .iter()
            .all(|t| t.object == Term::Str("sharp".to_owned())));
    }

    #[test]
    fn root_identity_rewrites_sharps() {
        let record = record("VII64[no3]");
        assert_eq!(record.root, "B");
        let mut altered = record;
        altered.root = "F#".to_owned();
        let graph = encode(&altered).unwrap();
        assert!(graph.triples().iter().any(|t| {
            t.predicate == vocab::OWL_SAME_AS
                && t.object == Term::Iri(format!("{}Fs", vocab::NS_CHORD))
        }));
    }

    #[test]
    fn scale_interval_identities_carry_modifier_text() {
        let graph = encode(&record("VII64[no3]")).unwrap();
        let identities: Vec<_> = graph
            .triples()
            .iter()
            .filter_map(|t| match (&t.predicate[..], &t.object) {
                (p, Term::Iri(iri)) if p == vocab::OWL_SAME_AS => Some(iri.as_str()),
                _ => None,
            })
            .collect();
        assert!(identities.contains(&format!("{}sharp4", vocab::NS_SCALE_INTERVAL).as_str()));
        assert!(identities.contains(&format!("{}7", vocab::NS_SCALE_INTERVAL).as_str()));
        assert!(identities.contains(&format!("{}3", vocab::NS_SCALE_INTERVAL).as_str()));
    }

    #[test]
    fn basic_function_carries_plain_numeral() {
        let graph = encode(&record("V65")).unwrap();
        assert!(graph.triples().iter().any(|t| {
            t.predicate == vocab::RDFS_LABEL && t.object == Term::Str("V".to_owned())
        }));
    }

    #[test]
    fn encoding_is_deterministic() {
        let record = record("viio7");
        assert_eq!(record.quality, Quality::Diminished);
        let first = encode(&record).unwrap();
        let second = encode(&record).unwrap();
        assert_eq!(first.triples(), second.triples());
        assert_eq!(
            first.serialize(crate::graph::RdfFormat::Turtle),
            second.serialize(crate::graph::RdfFormat::Turtle)
        );
    }
}
