//! Full-pipeline tests: symbol in, parseable RDF out.
//!
//! The serialized output is fed back through an independent RDF
//! parser (sophia) to check that both formats are well formed and
//! carry the same statements. Symbols with `[no..]` omissions yield
//! resource IRIs containing square brackets, which strict RFC 3987
//! validation refuses, so those are checked at the text level only.

use roman_ontology::graph::RdfFormat;
use roman_ontology::{chord_graph, decompose_validated, Error, Quality};

use sophia_api::prelude::*;
use sophia_inmem::graph::LightGraph;
use sophia_turtle::parser::{nt, turtle};

fn reparse_turtle(text: &str) -> LightGraph {
    turtle::parse_str(text)
        .collect_triples()
        .unwrap_or_else(|e| panic!("emitted Turtle does not re-parse: {e}\n{text}"))
}

fn reparse_ntriples(text: &str) -> LightGraph {
    nt::parse_str(text)
        .collect_triples()
        .unwrap_or_else(|e| panic!("emitted N-Triples does not re-parse: {e}\n{text}"))
}

#[test]
fn turtle_output_reparses() {
    for symbol in ["I", "V7", "viio7", "bVII", "V:V", "iv", "III+"] {
        let graph = chord_graph(symbol).unwrap();
        let parsed = reparse_turtle(&graph.serialize(RdfFormat::Turtle));
        assert_eq!(
            parsed.triples().count(),
            graph.len(),
            "triple count drift for '{symbol}'"
        );
    }
}

#[test]
fn ntriples_output_reparses() {
    for symbol in ["I", "V65", "viio7"] {
        let graph = chord_graph(symbol).unwrap();
        let parsed = reparse_ntriples(&graph.serialize(RdfFormat::NTriples));
        assert_eq!(parsed.triples().count(), graph.len());
    }
}

#[test]
fn both_formats_carry_the_same_statement_count() {
    let graph = chord_graph("V65").unwrap();
    let from_turtle = reparse_turtle(&graph.serialize(RdfFormat::Turtle));
    let from_nt = reparse_ntriples(&graph.serialize(RdfFormat::NTriples));
    assert_eq!(from_turtle.triples().count(), from_nt.triples().count());
}

#[test]
fn reference_decomposition() {
    // The worked example from the project documentation.
    let record = decompose_validated("VII64[no3]").unwrap();
    assert_eq!(record.chord, "VII64[no3]");
    assert_eq!(record.quality, Quality::Other);
    assert_eq!(record.inversion, 2);
    assert_eq!(record.plain_roman, "VII");
    assert_eq!(record.root, "B");
    assert_eq!(record.degrees.len(), 2);
    assert_eq!(record.missing.len(), 1);
}

#[test]
fn reference_graph_contains_the_expected_resources() {
    let ttl = chord_graph("VII64[no3]")
        .unwrap()
        .serialize(RdfFormat::Turtle);
    assert!(ttl.contains("<http://w3id.org/polifonia/resource/roman-chord/VII64[no3]>"));
    assert!(ttl.contains("<http://w3id.org/polifonia/resource/roman-chord/other>"));
    assert!(ttl.contains("\"2\"^^xsd:integer"));
    assert!(ttl.contains("<http://purl.org/ontology/scale_interval/sharp4>"));
    assert!(ttl.contains("\"sharp\""));
}

#[test]
fn record_serializes_to_the_wire_shape() {
    let record = decompose_validated("VII64[no3]").unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["chord"], "VII64[no3]");
    assert_eq!(json["quality"], "other");
    assert_eq!(json["inversion"], 2);
    assert_eq!(json["bass"], serde_json::json!(["sharp", "4"]));
    assert_eq!(json["missing"], serde_json::json!([[null, "3"]]));
}

#[test]
fn invalid_symbols_fail_before_encoding() {
    for symbol in ["ciao", "", "xyz", "VIII"] {
        assert!(
            matches!(chord_graph(symbol), Err(Error::InvalidChord(_))),
            "'{symbol}' should be rejected"
        );
    }
}
