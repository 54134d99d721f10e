//! Tunable BM25 and bonus parameters.

use crate::error::IndexError;

/// BM25 and weighting parameters used by the scorer.
///
/// All fields are tunable via [`crate::Engine::set_ranking`]; defaults match
/// the values a freshly-built engine starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingParams {
    /// BM25 term-frequency saturation parameter.
    pub k1: f64,
    /// BM25 length-normalization parameter.
    pub b: f64,
    /// Per-occurrence weight for terms inside a section's title.
    pub title_weight: f64,
    /// Per-occurrence weight for terms inside a fenced code region.
    pub code_weight: f64,
    /// Per-occurrence weight for terms also found in the document description.
    pub description_weight: f64,
    /// Bonus added per extra distinct query term matched, beyond the first.
    pub term_proximity_bonus: f64,
    /// Bonus added when a section matches every query term (query has ≥2 terms).
    pub full_coverage_bonus: f64,
    /// Multiplier applied to scores contributed by prefix (non-exact) matches.
    pub prefix_penalty: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            k1: 1.2,
            b: 0.75,
            title_weight: 3.0,
            code_weight: 1.5,
            description_weight: 2.0,
            term_proximity_bonus: 2.0,
            full_coverage_bonus: 5.0,
            prefix_penalty: 0.5,
        }
    }
}

impl RankingParams {
    /// Validates that every parameter is within its allowed range.
    ///
    /// `k1`, `b`, and all multipliers/bonuses must be non-negative.
    pub fn validate(&self) -> Result<(), IndexError> {
        let checks: [(&'static str, f64); 8] = [
            ("k1", self.k1),
            ("b", self.b),
            ("title_weight", self.title_weight),
            ("code_weight", self.code_weight),
            ("description_weight", self.description_weight),
            ("term_proximity_bonus", self.term_proximity_bonus),
            ("full_coverage_bonus", self.full_coverage_bonus),
            ("prefix_penalty", self.prefix_penalty),
        ];

        for (name, value) in checks {
            if value < 0.0 {
                return Err(IndexError::InvalidRankingParam {
                    name,
                    value,
                    reason: "must be non-negative",
                });
            }
        }

        Ok(())
    }
}
