//! Fixed vocabulary IRIs for the roman-chord ontology mapping.
//!
//! Namespaces and terms are full literals: the mapping must be
//! reproduced bit-for-bit for interoperability, so nothing here is
//! assembled at runtime.

/// Polifonia roman-chord ontology namespace.
pub const NS_ROMAN: &str = "http://w3id.org/polifonia/ontology/roman-chord/";
/// Chord ontology namespace (note identities, degree/modifier terms).
pub const NS_CHORD: &str = "http://purl.org/ontology/chord/";
/// Namespace for chord and quality resource IRIs.
pub const NS_RESOURCE: &str = "http://w3id.org/polifonia/resource/roman-chord/";
/// Namespace for stable scale-interval identity IRIs.
pub const NS_SCALE_INTERVAL: &str = "http://purl.org/ontology/scale_interval/";
/// RDF namespace.
pub const NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const NS_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const NS_OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XSD namespace.
pub const NS_XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `owl:sameAs`.
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// `roman:Chord`, the chord resource class.
pub const ROMAN_CHORD: &str = "http://w3id.org/polifonia/ontology/roman-chord/Chord";
/// `roman:Note`, the class of anonymous root-note nodes.
pub const ROMAN_NOTE: &str = "http://w3id.org/polifonia/ontology/roman-chord/Note";
/// `roman:Interval`, the class of anonymous interval nodes.
pub const ROMAN_INTERVAL: &str = "http://w3id.org/polifonia/ontology/roman-chord/Interval";
/// `roman:BasicFunction`, the class of anonymous basic-function nodes.
pub const ROMAN_BASIC_FUNCTION: &str =
    "http://w3id.org/polifonia/ontology/roman-chord/BasicFunction";
/// `roman:hasQuality`.
pub const ROMAN_HAS_QUALITY: &str = "http://w3id.org/polifonia/ontology/roman-chord/hasQuality";
/// `roman:inversionType`.
pub const ROMAN_INVERSION_TYPE: &str =
    "http://w3id.org/polifonia/ontology/roman-chord/inversionType";
/// `roman:hasRoot`.
pub const ROMAN_HAS_ROOT: &str = "http://w3id.org/polifonia/ontology/roman-chord/hasRoot";
/// `roman:hasBasicFunction`.
pub const ROMAN_HAS_BASIC_FUNCTION: &str =
    "http://w3id.org/polifonia/ontology/roman-chord/hasBasicFunction";
/// `roman:hasBass`.
pub const ROMAN_HAS_BASS: &str = "http://w3id.org/polifonia/ontology/roman-chord/hasBass";
/// `roman:containsInterval`.
pub const ROMAN_CONTAINS_INTERVAL: &str =
    "http://w3id.org/polifonia/ontology/roman-chord/containsInterval";
/// `roman:missingInterval`.
pub const ROMAN_MISSING_INTERVAL: &str =
    "http://w3id.org/polifonia/ontology/roman-chord/missingInterval";

/// `chord:degree`.
pub const CHORD_DEGREE: &str = "http://purl.org/ontology/chord/degree";
/// `chord:modifier`.
pub const CHORD_MODIFIER: &str = "http://purl.org/ontology/chord/modifier";
