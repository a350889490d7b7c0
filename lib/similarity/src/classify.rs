//! Score to verdict mapping
//!
//! Scores are turned into a percentage rounded to two decimals
//! (round-half-away-from-zero) before being compared against the tier
//! bounds. Upper bounds are exclusive: exactly 70.00 is not `PARTIALLY_TRUE`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentages strictly above this are `PARTIALLY_TRUE`
pub const PARTIALLY_TRUE_THRESHOLD: f64 = 70.0;
/// Percentages strictly above this (and not above the previous bound) are `POTENTIALLY_HOAX`
pub const POTENTIALLY_HOAX_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Trusted,
    PartiallyTrue,
    PotentiallyHoax,
    HighlySuspicious,
}

impl Tier {
    /// Map a percentage in [0, 100] to a tier. Never returns `Trusted`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > PARTIALLY_TRUE_THRESHOLD {
            Tier::PartiallyTrue
        } else if percentage > POTENTIALLY_HOAX_THRESHOLD {
            Tier::PotentiallyHoax
        } else {
            Tier::HighlySuspicious
        }
    }

    #[inline]
    pub fn from_score(score: f64) -> Self {
        Self::from_percentage(to_percentage(score))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Trusted => "TRUSTED",
            Tier::PartiallyTrue => "PARTIALLY_TRUE",
            Tier::PotentiallyHoax => "POTENTIALLY_HOAX",
            Tier::HighlySuspicious => "HIGHLY_SUSPICIOUS",
        }
    }

    /// Headline shown to the user for this verdict
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Trusted => "This news comes from a trusted source!",
            Tier::PartiallyTrue => "Likely genuine news!",
            Tier::PotentiallyHoax => "Suspicious news!",
            Tier::HighlySuspicious => "Highly suspicious news!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `score * 100` rounded to two decimals, half away from zero
#[inline]
pub fn to_percentage(score: f64) -> f64 {
    (score * 10_000.0).round() / 100.0
}

/// Render a percentage as `NN.NN%`
#[inline]
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(Tier::from_percentage(70.0), Tier::PotentiallyHoax);
        assert_eq!(Tier::from_percentage(70.01), Tier::PartiallyTrue);
        assert_eq!(Tier::from_percentage(30.0), Tier::HighlySuspicious);
        assert_eq!(Tier::from_percentage(30.01), Tier::PotentiallyHoax);
        assert_eq!(Tier::from_percentage(0.0), Tier::HighlySuspicious);
        assert_eq!(Tier::from_percentage(100.0), Tier::PartiallyTrue);
    }

    #[test]
    fn test_rounding_happens_before_comparison() {
        // 70.004 rounds down onto the boundary
        assert_eq!(Tier::from_score(0.70004), Tier::PotentiallyHoax);
        // 70.005 rounds half away from zero, above the boundary
        assert_eq!(Tier::from_score(0.700051), Tier::PartiallyTrue);
        assert_eq!(Tier::from_score(0.300049), Tier::HighlySuspicious);
    }

    #[test]
    fn test_to_percentage() {
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(0.7), 70.0);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(58.3), "58.30%");
        assert_eq!(format_percentage(100.0), "100.00%");
        assert_eq!(format_percentage(to_percentage(0.07)), "7.00%");
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&Tier::PartiallyTrue).unwrap(), "\"PARTIALLY_TRUE\"");
        assert_eq!(Tier::HighlySuspicious.to_string(), "HIGHLY_SUSPICIOUS");
        let tier: Tier = serde_json::from_str("\"POTENTIALLY_HOAX\"").unwrap();
        assert_eq!(tier, Tier::PotentiallyHoax);
    }
}
