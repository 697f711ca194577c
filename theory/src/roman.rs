//! Roman-numeral chord symbols.
//!
//! The grammar covers the figured-bass notation used in classical
//! harmonic analysis:
//!
//! ```text
//! symbol    := chord ( "/" tonicization )?
//! chord     := accidental* numeral marker? figure omission*
//! accidental:= "#" | "b"
//! numeral   := I…VII | i…vii            (consistent case)
//! marker    := "o" | "ø" | "+"
//! figure    := "" | 53 | 6 | 63 | 64 | 7 | 65 | 43 | 42 | 2
//! omission  := "[no" digits "]"
//! ```
//!
//! Case selects the third (uppercase major, lowercase minor), `o`/`ø`/`+`
//! force diminished/half-diminished/augmented colors, and the figure
//! selects chord size and inversion. A tonicization (`V/V`) re-anchors
//! the key to the named degree before the primary numeral is read.

use crate::key::{Key, Mode};
use crate::pitch::Pitch;
use crate::{Error, Result};

/// Harmonic quality of the sounding triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordQuality {
    /// Major third and perfect fifth.
    Major,
    /// Minor third and perfect fifth.
    Minor,
    /// Minor third and diminished fifth.
    Diminished,
    /// Major third and augmented fifth.
    Augmented,
    /// Anything else, including chords whose third or fifth is omitted.
    Other,
}

impl ChordQuality {
    /// Lowercase text label (`"major"`, `"other"`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Diminished,
    HalfDiminished,
    Augmented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChordSize {
    Triad,
    Seventh,
}

/// Parsed pieces of one chord token, before pitch construction.
#[derive(Debug)]
struct Parts {
    accidental: i8,
    numeral: String,
    degree: u8,
    lowercase: bool,
    marker: Option<Marker>,
    size: ChordSize,
    inversion: u32,
    omitted: Vec<u8>,
}

fn parse_parts(token: &str, full: &str) -> Result<Parts> {
    let fail = || Error::InvalidRomanNumeral(full.to_owned());
    let mut rest = token;

    let mut accidental = 0i8;
    loop {
        if let Some(r) = rest.strip_prefix('#') {
            accidental += 1;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('b') {
            accidental -= 1;
            rest = r;
        } else {
            break;
        }
    }

    let numeral_len = rest
        .chars()
        .take_while(|c| matches!(c, 'i' | 'v' | 'I' | 'V'))
        .count();
    let numeral = &rest[..numeral_len];
    rest = &rest[numeral_len..];
    let lowercase = numeral.chars().all(|c| c.is_ascii_lowercase());
    let uppercase = numeral.chars().all(|c| c.is_ascii_uppercase());
    if !lowercase && !uppercase {
        return Err(fail());
    }
    let degree = match numeral.to_ascii_uppercase().as_str() {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        "V" => 5,
        "VI" => 6,
        "VII" => 7,
        _ => return Err(fail()),
    };

    let marker = if let Some(r) = rest.strip_prefix('o') {
        rest = r;
        Some(Marker::Diminished)
    } else if let Some(r) = rest.strip_prefix('ø') {
        rest = r;
        Some(Marker::HalfDiminished)
    } else if let Some(r) = rest.strip_prefix('+') {
        rest = r;
        Some(Marker::Augmented)
    } else {
        None
    };

    let figure_len = rest.chars().take_while(char::is_ascii_digit).count();
    let figure = &rest[..figure_len];
    rest = &rest[figure_len..];
    let (size, inversion) = match figure {
        "" | "53" => (ChordSize::Triad, 0),
        "6" | "63" => (ChordSize::Triad, 1),
        "64" => (ChordSize::Triad, 2),
        "7" => (ChordSize::Seventh, 0),
        "65" => (ChordSize::Seventh, 1),
        "43" => (ChordSize::Seventh, 2),
        "42" | "2" => (ChordSize::Seventh, 3),
        _ => return Err(fail()),
    };

    let mut omitted = Vec::new();
    while !rest.is_empty() {
        let r = rest.strip_prefix("[no").ok_or_else(fail)?;
        let digits_len = r.chars().take_while(char::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(fail());
        }
        let step: u8 = r[..digits_len].parse().map_err(|_| fail())?;
        rest = r[digits_len..].strip_prefix(']').ok_or_else(fail)?;
        omitted.push(step);
    }

    Ok(Parts {
        accidental,
        numeral: numeral.to_owned(),
        degree,
        lowercase,
        marker,
        size,
        inversion,
        omitted,
    })
}

/// A resolved roman-numeral chord: concrete pitches in a key.
///
/// ```
/// use roman_theory::RomanChord;
///
/// let chord = RomanChord::parse("VII64[no3]", "C4").unwrap();
/// assert_eq!(chord.numeral(), "VII");
/// assert_eq!(chord.inversion(), 2);
/// assert_eq!(chord.bass().name(), "F#");
/// assert_eq!(chord.omitted_steps(), &[3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanChord {
    numeral: String,
    root: Pitch,
    bass: Pitch,
    pitches: Vec<Pitch>,
    quality: ChordQuality,
    inversion: u32,
    omitted: Vec<u8>,
}

impl RomanChord {
    /// Parses `symbol` against a key token (see [`Key::parse`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] for a malformed key and
    /// [`Error::InvalidRomanNumeral`] (or a spelling error) for a
    /// symbol outside the grammar.
    pub fn parse(symbol: &str, key: &str) -> Result<RomanChord> {
        let key = Key::parse(key)?;
        Self::parse_in(symbol, &key)
    }

    /// Parses `symbol` against an already-resolved [`Key`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRomanNumeral`] when the symbol is
    /// outside the grammar, or a spelling error for unreachable
    /// chromatic spellings.
    pub fn parse_in(symbol: &str, key: &Key) -> Result<RomanChord> {
        if let Some((primary, secondary)) = symbol.split_once('/') {
            let parts = parse_parts(secondary, symbol)?;
            if parts.size != ChordSize::Triad || parts.inversion != 0 || !parts.omitted.is_empty()
            {
                return Err(Error::InvalidRomanNumeral(symbol.to_owned()));
            }
            let scale = key.degree(parts.degree)?;
            let tonic = Pitch::new(scale.letter, scale.alteration + parts.accidental);
            let mode = if parts.lowercase { Mode::Minor } else { Mode::Major };
            let tonicized = Key { tonic, mode };
            return Self::build(primary, &tonicized, symbol);
        }
        Self::build(symbol, key, symbol)
    }

    fn build(token: &str, key: &Key, full: &str) -> Result<RomanChord> {
        let parts = parse_parts(token, full)?;
        let scale_root = key.degree(parts.degree)?;
        let root = Pitch::new(scale_root.letter, scale_root.alteration + parts.accidental);

        let (third_semis, fifth_semis) = match (parts.marker, parts.lowercase) {
            (Some(Marker::Diminished | Marker::HalfDiminished), _) => (3u8, 6u8),
            (Some(Marker::Augmented), _) => (4, 8),
            (None, true) => (3, 7),
            (None, false) => (4, 7),
        };
        let third = root.at(2, third_semis)?;
        let fifth = root.at(4, fifth_semis)?;
        let mut members: Vec<(u8, Pitch)> = vec![(1, root.clone()), (3, third), (5, fifth)];
        if parts.size == ChordSize::Seventh {
            let seventh = match parts.marker {
                Some(Marker::Diminished) => root.at(6, 9)?,
                Some(Marker::HalfDiminished) => root.at(6, 10)?,
                // Diatonic seventh: the scale tone keeps its spelling
                // even over a chromatically altered root.
                _ => key.degree((parts.degree - 1 + 6) % 7 + 1)?,
            };
            members.push((7, seventh));
        }

        // The figure table guarantees the inversion indexes a member.
        members.rotate_left(parts.inversion as usize);
        let bass = members[0].1.clone();
        let bass_step = members[0].0;

        // The bass always sounds; an omission naming it is ignored.
        let mut omitted: Vec<u8> = Vec::new();
        for step in &parts.omitted {
            let in_chord = members.iter().any(|(s, _)| s == step);
            if in_chord && *step != bass_step && !omitted.contains(step) {
                omitted.push(*step);
            }
        }

        let sounding: Vec<(u8, Pitch)> = members
            .into_iter()
            .enumerate()
            .filter(|(i, (step, _))| *i == 0 || !omitted.contains(step))
            .map(|(_, member)| member)
            .collect();

        let has = |step: u8| sounding.iter().any(|(s, _)| *s == step);
        let quality = if has(3) && has(5) {
            match (third_semis, fifth_semis) {
                (4, 7) => ChordQuality::Major,
                (3, 7) => ChordQuality::Minor,
                (3, 6) => ChordQuality::Diminished,
                (4, 8) => ChordQuality::Augmented,
                _ => ChordQuality::Other,
            }
        } else {
            ChordQuality::Other
        };

        Ok(RomanChord {
            numeral: parts.numeral,
            root,
            bass,
            pitches: sounding.into_iter().map(|(_, p)| p).collect(),
            quality,
            inversion: parts.inversion,
            omitted,
        })
    }

    /// The bare numeral, case preserved, accidentals and figures
    /// stripped (`"VII"` for `"bVII64[no3]"`).
    #[must_use]
    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    /// The chord root.
    #[must_use]
    pub fn root(&self) -> &Pitch {
        &self.root
    }

    /// The sounding bass pitch (always the first of [`Self::pitches`]).
    #[must_use]
    pub fn bass(&self) -> &Pitch {
        &self.bass
    }

    /// Sounding pitches, bass first, stacked upward.
    #[must_use]
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Quality of the sounding triad.
    #[must_use]
    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Which chord member is in the bass (0 = root position).
    #[must_use]
    pub fn inversion(&self) -> u32 {
        self.inversion
    }

    /// Chord-member steps named by `[noX]` groups and actually
    /// removed from the sounding pitches.
    #[must_use]
    pub fn omitted_steps(&self) -> &[u8] {
        &self.omitted
    }
}
