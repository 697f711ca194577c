//! Simple intervals between spelled pitches.
//!
//! Intervals are measured octave-insensitively, ascending from the
//! first pitch to the second, and carry a quality in the range
//! doubly-diminished to doubly-augmented. The textual form matches
//! music21's `simpleName` convention: `P4`, `m3`, `AA4`, `dd7`.

use crate::pitch::Pitch;
use crate::{Error, Result};

/// Interval quality, doubly-diminished through doubly-augmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalQuality {
    /// Doubly diminished (`dd`).
    DoublyDiminished,
    /// Diminished (`d`).
    Diminished,
    /// Minor (`m`).
    Minor,
    /// Major (`M`).
    Major,
    /// Perfect (`P`).
    Perfect,
    /// Augmented (`A`).
    Augmented,
    /// Doubly augmented (`AA`).
    DoublyAugmented,
}

impl IntervalQuality {
    /// Quality token used in interval names.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            IntervalQuality::DoublyDiminished => "dd",
            IntervalQuality::Diminished => "d",
            IntervalQuality::Minor => "m",
            IntervalQuality::Major => "M",
            IntervalQuality::Perfect => "P",
            IntervalQuality::Augmented => "A",
            IntervalQuality::DoublyAugmented => "AA",
        }
    }
}

/// A simple (within-octave) interval: quality plus generic number 1–7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Quality of the interval.
    pub quality: IntervalQuality,
    /// Generic number (1 = unison … 7 = seventh).
    pub number: u8,
}

impl Interval {
    /// Computes the ascending simple interval from `from` to `to`,
    /// ignoring octaves.
    ///
    /// ```
    /// use roman_theory::{Interval, Pitch};
    ///
    /// let c = Pitch::parse("C").unwrap();
    /// let fs = Pitch::parse("F#").unwrap();
    /// assert_eq!(Interval::simple_between(&c, &fs).unwrap().name(), "A4");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedInterval`] when the quality would
    /// fall outside doubly-diminished … doubly-augmented.
    pub fn simple_between(from: &Pitch, to: &Pitch) -> Result<Interval> {
        let steps = (to.letter.step() + 7 - from.letter.step()) % 7;
        let number = steps + 1;
        let expected = i16::from(MAJOR_OFFSETS[steps as usize]);
        let pc_diff =
            i16::from((u16::from(to.pitch_class()) + 12 - u16::from(from.pitch_class())) as u8 % 12);
        let mut delta = pc_diff - expected;
        if delta > 6 {
            delta -= 12;
        } else if delta < -6 {
            delta += 12;
        }

        let unsupported =
            || Error::UnsupportedInterval(from.name(), to.name());
        let perfect_family = matches!(number, 1 | 4 | 5);
        let quality = if perfect_family {
            match delta {
                -2 => IntervalQuality::DoublyDiminished,
                -1 => IntervalQuality::Diminished,
                0 => IntervalQuality::Perfect,
                1 => IntervalQuality::Augmented,
                2 => IntervalQuality::DoublyAugmented,
                _ => return Err(unsupported()),
            }
        } else {
            match delta {
                -3 => IntervalQuality::DoublyDiminished,
                -2 => IntervalQuality::Diminished,
                -1 => IntervalQuality::Minor,
                0 => IntervalQuality::Major,
                1 => IntervalQuality::Augmented,
                2 => IntervalQuality::DoublyAugmented,
                _ => return Err(unsupported()),
            }
        };
        Ok(Interval { quality, number })
    }

    /// Textual name in music21 `simpleName` form, e.g. `"P5"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.quality.token(), self.number)
    }
}

/// Semitones spanned by the major/perfect form of each generic number
/// (unison … seventh).
const MAJOR_OFFSETS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
