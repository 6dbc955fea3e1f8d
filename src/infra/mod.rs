// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting output concerns that don't belong in any
// specific business layer:
//
//   metrics.rs — Training metrics logging
//                Writes epoch-level metrics (loss, accuracy)
//                to a CSV file for later analysis and plotting.
//
//   curves.rs  — ROC curve export
//                Writes the per-class (FPR, TPR) point sequences
//                computed by the evaluator as CSV rows for the
//                external plotting collaborator.

/// Epoch metrics record and CSV logger
pub mod metrics;

/// CSV sink for ROC curve points
pub mod curves;
