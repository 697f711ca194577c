//! Keys and diatonic scales.

use crate::pitch::{Letter, Pitch};
use crate::{Error, Result};

/// Major or minor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Major scale (Ionian).
    Major,
    /// Natural minor scale (Aeolian).
    Minor,
}

impl Mode {
    /// Semitone offsets of the seven scale degrees above the tonic.
    #[must_use]
    pub fn scale_semitones(self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }
}

/// A tonal context: tonic pitch plus mode.
///
/// The token convention follows music21: an uppercase letter names a
/// major key, a lowercase letter a minor one, and a trailing octave
/// digit (as in `"C4"`) is accepted and discarded.
///
/// ```
/// use roman_theory::{Key, Mode};
///
/// assert_eq!(Key::parse("C4").unwrap().mode, Mode::Major);
/// assert_eq!(Key::parse("g").unwrap().mode, Mode::Minor);
/// assert_eq!(Key::parse("Eb").unwrap().tonic.name(), "Eb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// The tonic pitch (octave-free).
    pub tonic: Pitch,
    /// Major or minor.
    pub mode: Mode,
}

impl Key {
    /// Parses a key token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] when the token is not a pitch
    /// name.
    pub fn parse(token: &str) -> Result<Key> {
        let first = token
            .chars()
            .next()
            .ok_or_else(|| Error::InvalidKey(token.to_owned()))?;
        let mode = if first.is_ascii_lowercase() {
            Mode::Minor
        } else {
            Mode::Major
        };
        let mut tonic =
            Pitch::parse(token).map_err(|_| Error::InvalidKey(token.to_owned()))?;
        tonic.octave = None;
        Ok(Key { tonic, mode })
    }

    /// The diatonic pitch of scale degree `n` (1 = tonic … 7), with
    /// the letter spelling the scale demands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] when `n` is outside 1–7, or
    /// [`Error::Unspellable`] for keys too remote to spell.
    pub fn degree(&self, n: u8) -> Result<Pitch> {
        if !(1..=7).contains(&n) {
            return Err(Error::InvalidKey(format!("scale degree {n}")));
        }
        let steps = n - 1;
        let letter = self.tonic.letter.nth_above(steps);
        let semis = self.mode.scale_semitones()[steps as usize];
        let target = (u16::from(self.tonic.pitch_class()) + u16::from(semis)) % 12;
        #[allow(clippy::cast_possible_truncation)]
        Pitch::spelled(letter, target as u8)
    }
}
