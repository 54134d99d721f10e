//! BM25 scoring math.
//!
//! Pure functions only; the orchestrator in [`crate::search`] owns the
//! per-query accumulation, co-occurrence bonuses, and collection weighting
//! that these combine into.

use crate::ranking::RankingParams;

/// Inverse document frequency: `ln((N - n_t + 0.5) / (n_t + 0.5) + 1)`.
///
/// Always positive (unlike classic BM25 idf, which can go negative for
/// terms present in more than half the corpus) because of the `+ 1`.
pub fn idf(total_sections: usize, sections_with_term: usize) -> f64 {
    let n = total_sections as f64;
    let n_t = sections_with_term as f64;
    ((n - n_t + 0.5) / (n_t + 0.5) + 1.0).ln()
}

/// BM25 length normalization: `1 - b + b * (L_d / avgL)`.
pub fn length_norm(section_length: usize, avg_length: f64, b: f64) -> f64 {
    if avg_length <= 0.0 {
        return 1.0 - b;
    }
    1.0 - b + b * (section_length as f64 / avg_length)
}

/// Term-frequency saturation: `tf * (k1 + 1) / (tf + k1 * lengthNorm)`.
pub fn tf_norm(term_frequency: usize, k1: f64, length_norm: f64) -> f64 {
    let tf = term_frequency as f64;
    tf * (k1 + 1.0) / (tf + k1 * length_norm)
}

/// Full per-term, per-section score: `idf(t) * tfNorm * p.weight`.
pub fn score_term(
    total_sections: usize,
    sections_with_term: usize,
    term_frequency: usize,
    section_length: usize,
    avg_length: f64,
    posting_weight: f64,
    params: &RankingParams,
) -> f64 {
    let idf_val = idf(total_sections, sections_with_term);
    let norm = length_norm(section_length, avg_length, params.b);
    let tf_val = tf_norm(term_frequency, params.k1, norm);
    idf_val * tf_val * posting_weight
}
