// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvReviewSource implements ReviewSource
//   - A future ParquetSource could also implement ReviewSource
//   - The application layer only sees ReviewSource
//     and works with both without any changes

use anyhow::Result;
use crate::domain::review::LabeledReview;
use crate::domain::roc::RocCurve;

// ─── ReviewSource ─────────────────────────────────────────────────────────────
/// Any component that can supply labelled reviews.
///
/// Implementations:
///   - CsvReviewSource → pairs a summaries CSV with a sentiments CSV
///   - (tests) in-memory fixtures
pub trait ReviewSource {
    /// Load every available labelled review from this source.
    /// Text and labels are already paired and count-validated.
    fn load_all(&self) -> Result<Vec<LabeledReview>>;
}

// ─── CurveSink ────────────────────────────────────────────────────────────────
/// The plotting collaborator boundary. The evaluator computes
/// per-class ROC point sequences; a CurveSink takes ownership of
/// rendering-adjacent concerns (file formats, axes, colours).
///
/// Implementations:
///   - CsvCurveSink → writes one (class, fpr, tpr) row per point
pub trait CurveSink {
    /// Hand over the finished curves. Called once per run.
    fn consume(&self, curves: &[RocCurve]) -> Result<()>;
}
