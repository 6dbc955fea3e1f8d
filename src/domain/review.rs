// ============================================================
// Layer 3 — LabeledReview Domain Type
// ============================================================
// Represents one review summary paired with its externally
// assigned sentiment label. The text and the label come from
// two different CSV files that are paired row by row — by the
// time a LabeledReview exists, that pairing has already been
// validated by the loader.

use serde::{Deserialize, Serialize};

/// One review summary and its raw sentiment label.
///
/// The label is kept as the raw integer from the source file;
/// range validation against the class count happens later in
/// the label encoder, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledReview {
    /// The summary text. Always present — empty or missing source
    /// cells are coerced to an empty string, which simply encodes
    /// to zero tokens downstream.
    pub summary: String,

    /// The raw sentiment class identifier (expected 0, 1 or 2
    /// for negative / positive / neutral in the reference data)
    pub sentiment: i64,
}

impl LabeledReview {
    /// Create a new LabeledReview.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(summary: impl Into<String>, sentiment: i64) -> Self {
        Self {
            summary: summary.into(),
            sentiment,
        }
    }
}
