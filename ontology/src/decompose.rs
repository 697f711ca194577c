//! Chord decomposition: symbol + key → canonical record.
//!
//! The decomposer normalizes separator punctuation, resolves the key
//! (explicit `_key` suffix, else the default tonic), parses the
//! symbol through the theory engine, and runs every pitch-bearing
//! field through the interval-normalization pipeline against a fixed
//! reference tonic. Engine failures of any kind are translated to
//! [`Error::InvalidChord`] at this boundary, so the rest of the crate
//! never sees engine-specific errors.

use roman_theory::{Interval, Letter, Pitch, RomanChord};

use crate::harte::{split_alteration, to_harte};
use crate::model::{AlterationDegree, ChordDecomposition, Quality};
use crate::{Error, Result};

/// Key assumed when the symbol does not name one: C major, spelled
/// the way the original corpus spells it.
pub const DEFAULT_TONIC: &str = "C4";

/// Decomposes `symbol` in the default key.
///
/// # Errors
///
/// Returns [`Error::InvalidChord`] when the theory engine rejects the
/// symbol, or [`Error::InvalidAlteration`] if normalization meets an
/// unmapped accidental bucket (a defect in upstream assumptions, not
/// a user-input problem).
pub fn decompose(symbol: &str) -> Result<ChordDecomposition> {
    decompose_in_key(symbol, DEFAULT_TONIC)
}

/// Decomposes `symbol` against an explicit key token.
///
/// `:` is rewritten to the engine's `/` tonicization separator before
/// parsing, and a `_key` suffix overrides the `key` argument.
///
/// # Errors
///
/// Same contract as [`decompose`].
pub fn decompose_in_key(symbol: &str, key: &str) -> Result<ChordDecomposition> {
    let normalized = symbol.replace(':', "/");
    let (chord_symbol, key_token) = match normalized.split_once('_') {
        Some((chord, explicit)) => (chord.to_owned(), explicit.to_owned()),
        None => (normalized, key.to_owned()),
    };
    if chord_symbol.is_empty() {
        return Err(Error::InvalidChord(symbol.to_owned()));
    }

    let chord = RomanChord::parse(&chord_symbol, &key_token)
        .map_err(|_| Error::InvalidChord(symbol.to_owned()))?;

    // Intervals are measured from a fixed reference tonic, not the
    // key: the ontology's scale-interval identities are anchored at C.
    let reference = Pitch::new(Letter::C, 0);

    let bass = reference_interval(&reference, chord.bass())?;
    let degrees = chord
        .pitches()
        .iter()
        .map(|pitch| reference_interval(&reference, pitch))
        .collect::<Result<Vec<_>>>()?;
    let missing = chord
        .omitted_steps()
        .iter()
        .map(|step| split_alteration(&step.to_string()))
        .collect::<Result<Vec<_>>>()?;

    Ok(ChordDecomposition {
        chord: chord_symbol,
        quality: Quality::from(chord.quality()),
        inversion: chord.inversion(),
        plain_roman: chord.numeral().to_owned(),
        // Root is absolute, not relative: it never goes through the
        // interval pipeline.
        root: chord.root().name(),
        bass,
        degrees,
        missing,
    })
}

/// The normalized interval from the reference tonic up to `pitch`.
fn reference_interval(reference: &Pitch, pitch: &Pitch) -> Result<AlterationDegree> {
    let interval = Interval::simple_between(reference, pitch)
        .map_err(|_| Error::InvalidChord(pitch.name()))?;
    split_alteration(&to_harte(&interval.name()))
}
