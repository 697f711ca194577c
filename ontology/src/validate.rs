//! Structural validation of decomposition records.
//!
//! A purely structural gate between decomposer and encoder: no
//! music-theory computation, no mutation. A record that passes here
//! is guaranteed to encode without tripping the integer conversion of
//! `chord:degree` literals.

use crate::model::{AlterationDegree, ChordDecomposition};
use crate::{Error, Result};

/// Checks the data-contract invariants of a [`ChordDecomposition`].
///
/// # Errors
///
/// Returns [`Error::Schema`] when a textual field is empty or a
/// degree is not a non-empty digit string.
pub fn validate(record: &ChordDecomposition) -> Result<()> {
    non_empty("chord", &record.chord)?;
    non_empty("plain_roman", &record.plain_roman)?;
    non_empty("root", &record.root)?;

    numeric_degree("bass", &record.bass)?;
    for (index, degree) in record.degrees.iter().enumerate() {
        numeric_degree(&format!("degrees[{index}]"), degree)?;
    }
    for (index, degree) in record.missing.iter().enumerate() {
        numeric_degree(&format!("missing[{index}]"), degree)?;
    }
    Ok(())
}

fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Schema(format!("field '{field}' must be non-empty")));
    }
    Ok(())
}

fn numeric_degree(field: &str, value: &AlterationDegree) -> Result<()> {
    if value.degree.is_empty() {
        return Err(Error::Schema(format!("{field}: degree must be non-empty")));
    }
    if !value.degree.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Schema(format!(
            "{field}: degree '{}' is not a digit string",
            value.degree
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alteration, Quality};

    fn valid_record() -> ChordDecomposition {
        ChordDecomposition {
            chord: "VII64[no3]".to_owned(),
            quality: Quality::Other,
            inversion: 2,
            plain_roman: "VII".to_owned(),
            root: "B".to_owned(),
            bass: AlterationDegree::new(Alteration::Sharp, "4"),
            degrees: vec![
                AlterationDegree::new(Alteration::Sharp, "4"),
                AlterationDegree::new(Alteration::None, "7"),
            ],
            missing: vec![AlterationDegree::new(Alteration::None, "3")],
        }
    }

    #[test]
    fn accepts_a_well_formed_record() {
        assert!(validate(&valid_record()).is_ok());
    }

    #[test]
    fn empty_sequences_are_fine() {
        let mut record = valid_record();
        record.degrees.clear();
        record.missing.clear();
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn rejects_empty_chord() {
        let mut record = valid_record();
        record.chord.clear();
        assert!(matches!(validate(&record), Err(Error::Schema(_))));
    }

    #[test]
    fn rejects_empty_degree() {
        let mut record = valid_record();
        record.bass = AlterationDegree::new(Alteration::None, "");
        assert!(matches!(validate(&record), Err(Error::Schema(_))));
    }

    #[test]
    fn rejects_non_numeric_degree() {
        let mut record = valid_record();
        record.degrees[1] = AlterationDegree::new(Alteration::None, "B");
        let error = validate(&record).unwrap_err();
        assert!(matches!(error, Error::Schema(message) if message.contains("degrees[1]")));
    }
}
