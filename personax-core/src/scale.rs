//! Likert response scale
//!
//! Five responses mapped to integer weights symmetric around zero.
//! Submissions may arrive as canonical labels or as raw weights; both
//! forms validate against this scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// A single Likert-scale response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    #[serde(rename = "Strongly agree")]
    StronglyAgree,
    #[serde(rename = "Agree")]
    Agree,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Disagree")]
    Disagree,
    #[serde(rename = "Strongly disagree")]
    StronglyDisagree,
}

impl Response {
    /// All responses in display order, strongest agreement first
    pub const ALL: [Response; 5] = [
        Response::StronglyAgree,
        Response::Agree,
        Response::Neutral,
        Response::Disagree,
        Response::StronglyDisagree,
    ];

    /// Signed scoring weight
    pub fn weight(&self) -> i32 {
        match self {
            Response::StronglyAgree => 2,
            Response::Agree => 1,
            Response::Neutral => 0,
            Response::Disagree => -1,
            Response::StronglyDisagree => -2,
        }
    }

    /// Canonical label as shown in the quiz UI
    pub fn label(&self) -> &'static str {
        match self {
            Response::StronglyAgree => "Strongly agree",
            Response::Agree => "Agree",
            Response::Neutral => "Neutral",
            Response::Disagree => "Disagree",
            Response::StronglyDisagree => "Strongly disagree",
        }
    }

    /// Parse a canonical label (case-insensitive)
    pub fn from_label(label: &str) -> Result<Response> {
        let normalized = label.trim().to_lowercase();
        Response::ALL
            .into_iter()
            .find(|r| r.label().to_lowercase() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("Unrecognized answer label: {}", label)))
    }

    /// Validate a raw weight against the scale
    pub fn from_weight(weight: i32) -> Result<Response> {
        match weight {
            2 => Ok(Response::StronglyAgree),
            1 => Ok(Response::Agree),
            0 => Ok(Response::Neutral),
            -1 => Ok(Response::Disagree),
            -2 => Ok(Response::StronglyDisagree),
            other => Err(Error::InvalidInput(format!(
                "Answer weight {} outside recognized range -2..=2",
                other
            ))),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_symmetric_around_zero() {
        let sum: i32 = Response::ALL.iter().map(|r| r.weight()).sum();
        assert_eq!(sum, 0);
        assert_eq!(Response::StronglyAgree.weight(), -Response::StronglyDisagree.weight());
        assert_eq!(Response::Agree.weight(), -Response::Disagree.weight());
    }

    #[test]
    fn test_label_round_trip() {
        for response in Response::ALL {
            assert_eq!(Response::from_label(response.label()).unwrap(), response);
        }
    }

    #[test]
    fn test_label_case_insensitive() {
        assert_eq!(
            Response::from_label("strongly AGREE").unwrap(),
            Response::StronglyAgree
        );
        assert_eq!(Response::from_label("  neutral ").unwrap(), Response::Neutral);
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(Response::from_label("Maybe").is_err());
    }

    #[test]
    fn test_weight_round_trip() {
        for response in Response::ALL {
            assert_eq!(Response::from_weight(response.weight()).unwrap(), response);
        }
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        assert!(Response::from_weight(3).is_err());
        assert!(Response::from_weight(-3).is_err());
    }
}
