//! Typed decomposition model.
//!
//! These types are the canonical result of decomposing one chord
//! symbol. A [`ChordDecomposition`] is built fresh per request, is
//! immutable once constructed, passes through validation unchanged,
//! and is consumed exactly once by the encoder; it is never persisted.
//!
//! On the wire an [`AlterationDegree`] keeps the historical two-element
//! shape `[modifier-or-null, degree]`, e.g. `[null, "3"]` or
//! `["sharp", "4"]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Chromatic modifier attached to a scale-degree reference.
///
/// A closed vocabulary: accidental buckets outside the fixed table
/// are rejected at construction, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alteration {
    /// No modifier (also the result of a canceling `b#`/`#b` pair).
    None,
    /// One sharp.
    Sharp,
    /// Two sharps.
    DoubleSharp,
    /// One flat.
    Flat,
    /// Two flats.
    DoubleFlat,
}

impl Alteration {
    /// Maps an accidental bucket through the fixed vocabulary.
    ///
    /// | Bucket | Alteration |
    /// |--------|-----------|
    /// | `""`, `"b#"`, `"#b"` | `None` |
    /// | `"#"` | `Sharp` |
    /// | `"##"` | `DoubleSharp` |
    /// | `"b"` | `Flat` |
    /// | `"bb"` | `DoubleFlat` |
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlteration`] for any other combination.
    pub fn from_accidentals(bucket: &str) -> Result<Alteration> {
        match bucket {
            "" | "b#" | "#b" => Ok(Alteration::None),
            "#" => Ok(Alteration::Sharp),
            "##" => Ok(Alteration::DoubleSharp),
            "b" => Ok(Alteration::Flat),
            "bb" => Ok(Alteration::DoubleFlat),
            other => Err(Error::InvalidAlteration(other.to_owned())),
        }
    }

    /// The modifier name used in literals and identity IRIs, or
    /// `None` when there is no modifier.
    #[must_use]
    pub fn as_modifier(self) -> Option<&'static str> {
        match self {
            Alteration::None => None,
            Alteration::Sharp => Some("sharp"),
            Alteration::DoubleSharp => Some("doublesharp"),
            Alteration::Flat => Some("flat"),
            Alteration::DoubleFlat => Some("doubleflat"),
        }
    }
}

/// A normalized scale-degree reference: chromatic modifier plus the
/// degree text.
///
/// `degree` holds the non-accidental characters of the source token;
/// callers that need degree semantics must ensure it is a non-empty
/// digit string (the validator enforces this before encoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterationDegree {
    /// Chromatic modifier.
    pub alteration: Alteration,
    /// Degree text (digits for intervals).
    pub degree: String,
}

impl AlterationDegree {
    /// Builds a degree reference directly from parts.
    #[must_use]
    pub fn new(alteration: Alteration, degree: impl Into<String>) -> AlterationDegree {
        AlterationDegree {
            alteration,
            degree: degree.into(),
        }
    }
}

impl Serialize for AlterationDegree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.alteration.as_modifier(), &self.degree).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AlterationDegree {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let (modifier, degree): (Option<String>, String) =
            Deserialize::deserialize(deserializer)?;
        let alteration = match modifier.as_deref() {
            None => Alteration::None,
            Some("sharp") => Alteration::Sharp,
            Some("doublesharp") => Alteration::DoubleSharp,
            Some("flat") => Alteration::Flat,
            Some("doubleflat") => Alteration::DoubleFlat,
            Some(other) => {
                return Err(D::Error::custom(format!("unknown alteration '{other}'")))
            }
        };
        Ok(AlterationDegree { alteration, degree })
    }
}

/// Harmonic quality of the decomposed chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Major triad sounding.
    Major,
    /// Minor triad sounding.
    Minor,
    /// Diminished triad sounding.
    Diminished,
    /// Augmented triad sounding.
    Augmented,
    /// No recognizable tonal function (e.g. third or fifth omitted).
    Other,
}

impl Quality {
    /// Lowercase text label, as used in resource IRIs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
            Quality::Augmented => "augmented",
            Quality::Other => "other",
        }
    }
}

impl From<roman_theory::ChordQuality> for Quality {
    fn from(quality: roman_theory::ChordQuality) -> Quality {
        match quality {
            roman_theory::ChordQuality::Major => Quality::Major,
            roman_theory::ChordQuality::Minor => Quality::Minor,
            roman_theory::ChordQuality::Diminished => Quality::Diminished,
            roman_theory::ChordQuality::Augmented => Quality::Augmented,
            roman_theory::ChordQuality::Other => Quality::Other,
        }
    }
}

/// The canonical result of decomposing one chord symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordDecomposition {
    /// The input symbol after separator normalization, key stripped.
    pub chord: String,
    /// Harmonic quality label.
    pub quality: Quality,
    /// Which chord tone is in the bass (0 = root position).
    pub inversion: u32,
    /// The bare roman numeral, figures and decorations stripped.
    pub plain_roman: String,
    /// Absolute root pitch name (letter plus accidentals, no octave).
    pub root: String,
    /// Bass interval relative to the reference tonic.
    pub bass: AlterationDegree,
    /// One interval per sounding pitch, in engine pitch order.
    pub degrees: Vec<AlterationDegree>,
    /// Intervals the chord theoretically contains but omits.
    pub missing: Vec<AlterationDegree>,
}
