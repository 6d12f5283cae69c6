//! Trait axes and their letter pairs
//!
//! Each axis is a bipolar dimension with a primary letter (the first in the
//! axis name) and a secondary letter. Positive axis totals resolve to the
//! primary letter; zero or negative totals resolve to the secondary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// The four bipolar trait axes, in fixed reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion / Introversion
    EI,
    /// Sensing / Intuition
    SN,
    /// Thinking / Feeling
    TF,
    /// Judging / Perceiving
    JP,
}

impl Axis {
    /// All axes in the fixed order used to assemble the type code
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The letter a positive total resolves to
    pub fn primary(&self) -> char {
        match self {
            Axis::EI => 'E',
            Axis::SN => 'S',
            Axis::TF => 'T',
            Axis::JP => 'J',
        }
    }

    /// The letter a zero or negative total resolves to
    pub fn secondary(&self) -> char {
        match self {
            Axis::EI => 'I',
            Axis::SN => 'N',
            Axis::TF => 'F',
            Axis::JP => 'P',
        }
    }

    /// Whether `letter` belongs to this axis's pair
    pub fn contains(&self, letter: char) -> bool {
        letter == self.primary() || letter == self.secondary()
    }

    /// Parse an axis id ("EI", "SN", "TF", "JP")
    pub fn parse(s: &str) -> Result<Axis> {
        match s {
            "EI" => Ok(Axis::EI),
            "SN" => Ok(Axis::SN),
            "TF" => Ok(Axis::TF),
            "JP" => Ok(Axis::JP),
            other => Err(Error::Config(format!("Unknown axis id: {}", other))),
        }
    }

    /// Axis id as used in config files and export documents
    pub fn id(&self) -> &'static str {
        match self {
            Axis::EI => "EI",
            Axis::SN => "SN",
            Axis::TF => "TF",
            Axis::JP => "JP",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_pairs() {
        assert_eq!(Axis::EI.primary(), 'E');
        assert_eq!(Axis::EI.secondary(), 'I');
        assert_eq!(Axis::SN.primary(), 'S');
        assert_eq!(Axis::SN.secondary(), 'N');
        assert_eq!(Axis::TF.primary(), 'T');
        assert_eq!(Axis::TF.secondary(), 'F');
        assert_eq!(Axis::JP.primary(), 'J');
        assert_eq!(Axis::JP.secondary(), 'P');
    }

    #[test]
    fn test_contains() {
        assert!(Axis::EI.contains('E'));
        assert!(Axis::EI.contains('I'));
        assert!(!Axis::EI.contains('S'));
    }

    #[test]
    fn test_parse_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::parse(axis.id()).unwrap(), axis);
        }
        assert!(Axis::parse("XY").is_err());
    }

    #[test]
    fn test_fixed_order() {
        assert_eq!(Axis::ALL, [Axis::EI, Axis::SN, Axis::TF, Axis::JP]);
    }
}
