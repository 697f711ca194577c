//! Pitch spelling: diatonic letters plus chromatic alteration.
//!
//! A [`Pitch`] is a spelled note, not a piano key: `F#` and `Gb` share
//! a pitch class but are distinct values, and interval arithmetic
//! depends on the distinction.

use crate::{Error, Result};

/// The seven diatonic letters, in C-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitone offsets of the natural letters above C.
    const PITCH_CLASSES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

    /// Diatonic index of this letter (C = 0 … B = 6).
    #[must_use]
    pub fn step(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Pitch class of the natural letter (C = 0 … B = 11).
    #[must_use]
    pub fn pitch_class(self) -> u8 {
        Self::PITCH_CLASSES[self.step() as usize]
    }

    /// The letter `steps` diatonic steps above this one, wrapping at B.
    #[must_use]
    pub fn nth_above(self, steps: u8) -> Letter {
        Self::ALL[((self.step() + steps) % 7) as usize]
    }

    /// Parses a letter from its (case-insensitive) character form.
    #[must_use]
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// The uppercase character form of the letter.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// A spelled pitch: letter, chromatic alteration in semitones, and an
/// optional octave.
///
/// Alteration is positive for sharps and negative for flats; `F#` is
/// `(F, +1)` and `Bbb` is `(B, -2)`. The octave is carried only when
/// the source token names one (`"C4"`); chord construction works
/// octave-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pitch {
    /// Diatonic letter.
    pub letter: Letter,
    /// Chromatic alteration in semitones (−2 … +2).
    pub alteration: i8,
    /// Octave number, when the source named one.
    pub octave: Option<i8>,
}

impl Pitch {
    /// Creates an octave-free pitch.
    #[must_use]
    pub fn new(letter: Letter, alteration: i8) -> Pitch {
        Pitch {
            letter,
            alteration,
            octave: None,
        }
    }

    /// Parses a pitch token: a letter, optional accidentals
    /// (`#`, `b`, or music21-style `-` for flat), and an optional
    /// octave number.
    ///
    /// ```
    /// use roman_theory::Pitch;
    ///
    /// assert_eq!(Pitch::parse("F#").unwrap().name(), "F#");
    /// assert_eq!(Pitch::parse("B-4").unwrap().name(), "Bb");
    /// assert_eq!(Pitch::parse("C4").unwrap().octave, Some(4));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPitch`] when the token is empty, the
    /// first character is not a letter, accidentals are mixed, or
    /// trailing characters remain.
    pub fn parse(token: &str) -> Result<Pitch> {
        let invalid = || Error::InvalidPitch(token.to_owned());
        let mut chars = token.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;

        let rest: &str = chars.as_str();
        let mut sharps = 0i8;
        let mut flats = 0i8;
        let mut idx = 0;
        for c in rest.chars() {
            match c {
                '#' => sharps += 1,
                'b' | '-' => flats += 1,
                _ => break,
            }
            idx += c.len_utf8();
        }
        if sharps > 0 && flats > 0 {
            return Err(invalid());
        }

        let octave_part = &rest[idx..];
        let octave = if octave_part.is_empty() {
            None
        } else {
            Some(octave_part.parse::<i8>().map_err(|_| invalid())?)
        };

        Ok(Pitch {
            letter,
            alteration: sharps - flats,
            octave,
        })
    }

    /// Spells the pitch with `letter` that sounds at `pitch_class`,
    /// choosing the smallest alteration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unspellable`] when more than two accidentals
    /// would be required.
    pub fn spelled(letter: Letter, pitch_class: u8) -> Result<Pitch> {
        let mut delta = i16::from(pitch_class % 12) - i16::from(letter.pitch_class());
        if delta > 6 {
            delta -= 12;
        } else if delta < -6 {
            delta += 12;
        }
        if !(-2..=2).contains(&delta) {
            return Err(Error::Unspellable {
                letter: letter.as_char(),
                pitch_class: pitch_class % 12,
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Pitch::new(letter, delta as i8))
    }

    /// The pitch a given diatonic/chromatic distance above this one.
    ///
    /// `letter_steps` fixes the letter; `semitones` fixes the sound.
    /// `C.at(2, 4)` is `E` (a major third); `C.at(2, 3)` is `Eb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unspellable`] when the resulting spelling
    /// would need more than two accidentals.
    pub fn at(&self, letter_steps: u8, semitones: u8) -> Result<Pitch> {
        let letter = self.letter.nth_above(letter_steps);
        let target = (u16::from(self.pitch_class()) + u16::from(semitones)) % 12;
        #[allow(clippy::cast_possible_truncation)]
        Pitch::spelled(letter, target as u8)
    }

    /// Chromatic pitch class (0–11) of the spelled pitch.
    #[must_use]
    pub fn pitch_class(&self) -> u8 {
        let pc = i16::from(self.letter.pitch_class()) + i16::from(self.alteration);
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        {
            pc.rem_euclid(12) as u8
        }
    }

    /// The pitch name without octave: letter plus accidental
    /// characters (`#` for sharps, `b` for flats).
    #[must_use]
    pub fn name(&self) -> String {
        let mut name = String::with_capacity(3);
        name.push(self.letter.as_char());
        let accidental = if self.alteration >= 0 { '#' } else { 'b' };
        for _ in 0..self.alteration.unsigned_abs() {
            name.push(accidental);
        }
        name
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())?;
        if let Some(octave) = self.octave {
            write!(f, "{octave}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_letter() {
        let p = Pitch::parse("C").unwrap();
        assert_eq!(p.letter, Letter::C);
        assert_eq!(p.alteration, 0);
        assert_eq!(p.octave, None);
    }

    #[test]
    fn parse_accidentals_and_octave() {
        let p = Pitch::parse("F#5").unwrap();
        assert_eq!((p.letter, p.alteration, p.octave), (Letter::F, 1, Some(5)));

        let p = Pitch::parse("Bbb").unwrap();
        assert_eq!((p.letter, p.alteration), (Letter::B, -2));

        // music21 spells flats with '-'
        let p = Pitch::parse("E-4").unwrap();
        assert_eq!((p.letter, p.alteration, p.octave), (Letter::E, -1, Some(4)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Pitch::parse("").is_err());
        assert!(Pitch::parse("H").is_err());
        assert!(Pitch::parse("C#b").is_err());
        assert!(Pitch::parse("Cx4").is_err());
    }

    #[test]
    fn pitch_class_wraps() {
        assert_eq!(Pitch::parse("B#").unwrap().pitch_class(), 0);
        assert_eq!(Pitch::parse("Cb").unwrap().pitch_class(), 11);
        assert_eq!(Pitch::parse("F#").unwrap().pitch_class(), 6);
    }

    #[test]
    fn spelled_picks_smallest_alteration() {
        assert_eq!(Pitch::spelled(Letter::E, 3).unwrap().name(), "Eb");
        assert_eq!(Pitch::spelled(Letter::F, 8).unwrap().name(), "F##");
        assert!(Pitch::spelled(Letter::C, 6).is_err());
    }

    #[test]
    fn at_builds_chord_tones() {
        let c = Pitch::parse("C").unwrap();
        assert_eq!(c.at(2, 4).unwrap().name(), "E");
        assert_eq!(c.at(2, 3).unwrap().name(), "Eb");
        assert_eq!(c.at(4, 8).unwrap().name(), "G#");
    }

    #[test]
    fn name_round_trips() {
        for token in ["C", "F#", "Bb", "G##", "Abb"] {
            assert_eq!(Pitch::parse(token).unwrap().name(), token);
        }
    }
}
