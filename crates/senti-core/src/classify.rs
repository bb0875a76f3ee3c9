//! Three-way label policy over the compound score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound scores at or above this value are labelled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are labelled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Sentiment label derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify a compound score. Depends on nothing but `compound`.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_partition() {
        let cases = [
            (-1.0, Sentiment::Negative),
            (-0.05, Sentiment::Negative),
            (-0.0499, Sentiment::Neutral),
            (0.0, Sentiment::Neutral),
            (0.0499, Sentiment::Neutral),
            (0.05, Sentiment::Positive),
            (1.0, Sentiment::Positive),
        ];
        for (compound, expected) in cases {
            assert_eq!(Sentiment::from_compound(compound), expected, "compound = {}", compound);
        }
    }

    #[test]
    fn test_nan_is_neutral() {
        assert_eq!(Sentiment::from_compound(f64::NAN), Sentiment::Neutral);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"Negative\"");
        assert_eq!(Sentiment::Positive.to_string(), "Positive");
    }
}
