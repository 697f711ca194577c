//! Roman-numeral harmony engine.
//!
//! `roman-theory` understands just enough classical harmony to turn a
//! roman-numeral chord symbol into concrete pitches:
//!
//! | Concept | Type | Example |
//! |---------|------|---------|
//! | Pitch spelling | [`Pitch`] | `F#`, `Bb`, `C4` |
//! | Tonal context | [`Key`] | `C` (major), `g` (minor) |
//! | Simple interval | [`Interval`] | `P4`, `m3`, `AA4` |
//! | Chord symbol | [`RomanChord`] | `VII64[no3]`, `viio7`, `V7/V` |
//!
//! # Example
//!
//! ```
//! use roman_theory::RomanChord;
//!
//! let chord = RomanChord::parse("V7", "C").unwrap();
//! assert_eq!(chord.root().name(), "G");
//! assert_eq!(chord.inversion(), 0);
//! assert_eq!(chord.pitches().len(), 4);
//! ```
//!
//! The engine is purely synchronous and allocation-light; every parse
//! builds an independent value, so concurrent callers need no
//! coordination.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod interval;
pub mod key;
pub mod pitch;
pub mod roman;

pub use interval::{Interval, IntervalQuality};
pub use key::{Key, Mode};
pub use pitch::{Letter, Pitch};
pub use roman::{ChordQuality, RomanChord};

/// Errors raised while interpreting pitches, keys, or chord symbols.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The token is not a pitch name (letter, optional accidentals,
    /// optional octave digit).
    #[error("cannot interpret '{0}' as a pitch")]
    InvalidPitch(String),

    /// The token is not a key (pitch name whose letter case selects
    /// the mode).
    #[error("cannot interpret '{0}' as a key")]
    InvalidKey(String),

    /// The symbol does not match the roman-numeral chord grammar.
    #[error("cannot interpret '{0}' as a roman-numeral chord")]
    InvalidRomanNumeral(String),

    /// The requested spelling would need more than two accidentals.
    #[error("no supported spelling for pitch class {pitch_class} on letter {letter}")]
    Unspellable {
        /// The diatonic letter the spelling was anchored to.
        letter: char,
        /// The chromatic pitch class (0–11) that could not be reached.
        pitch_class: u8,
    },

    /// The interval between the two pitches falls outside the
    /// supported quality range (beyond doubly augmented/diminished).
    #[error("interval from {0} to {1} is outside the supported quality range")]
    UnsupportedInterval(String, String),
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, Error>;
