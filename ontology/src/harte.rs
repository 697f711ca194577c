//! Interval normalization into Harte-style notation.
//!
//! Two small pure functions bridge the theory engine's interval names
//! and the (alteration, degree) encoding used everywhere downstream:
//! [`to_harte`] substitutes quality letters for accidental characters,
//! and [`split_alteration`] buckets a token into accidentals and the
//! rest.

use crate::model::{Alteration, AlterationDegree};
use crate::Result;

/// Rewrites a theory-engine interval name into Harte notation.
///
/// Quality letters are substituted (major/perfect vanish, minor and
/// diminished become `b`, augmented becomes `#`) and degree `2` is
/// rewritten to `9` per the compound-interval convention. Characters
/// outside the substitution alphabet pass through unchanged.
///
/// ```
/// use roman_ontology::harte::to_harte;
///
/// assert_eq!(to_harte("P4"), "4");
/// assert_eq!(to_harte("m3"), "b3");
/// assert_eq!(to_harte("AA4"), "##4");
/// assert_eq!(to_harte("M2"), "9");
/// ```
#[must_use]
pub fn to_harte(interval_name: &str) -> String {
    let mut out = String::with_capacity(interval_name.len());
    for c in interval_name.chars() {
        match c {
            'M' | 'P' => {}
            'm' | 'd' => out.push('b'),
            'A' => out.push('#'),
            '2' => out.push('9'),
            other => out.push(other),
        }
    }
    out
}

/// Splits a pitch or interval token into an [`AlterationDegree`].
///
/// The scan is a character-bucket partition, not positional parsing:
/// accidentals (`b`, `#`) may be interleaved with the rest of the
/// token in pitch names and suffixed in interval numerals, and
/// bucketing tolerates both shapes. The accidental bucket then goes
/// through the fixed alteration table; everything else becomes the
/// degree text, unvalidated.
///
/// ```
/// use roman_ontology::harte::split_alteration;
/// use roman_ontology::{Alteration, AlterationDegree};
///
/// assert_eq!(
///     split_alteration("##4").unwrap(),
///     AlterationDegree::new(Alteration::DoubleSharp, "4"),
/// );
/// assert_eq!(
///     split_alteration("bbB").unwrap(),
///     AlterationDegree::new(Alteration::DoubleFlat, "B"),
/// );
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::InvalidAlteration`] when the accidental
/// bucket falls outside the fixed vocabulary.
pub fn split_alteration(token: &str) -> Result<AlterationDegree> {
    let mut accidentals = String::new();
    let mut degree = String::new();
    for c in token.chars() {
        match c {
            'b' | '#' => accidentals.push(c),
            other => degree.push(other),
        }
    }
    let alteration = Alteration::from_accidentals(&accidentals)?;
    Ok(AlterationDegree { alteration, degree })
}
