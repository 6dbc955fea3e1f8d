// ============================================================
// Layer 3 — ROC Curve Domain Types
// ============================================================
// The evaluator reduces each class to a one-vs-rest binary
// problem and sweeps the decision threshold from high to low;
// every distinct predicted score contributes one
// (false-positive-rate, true-positive-rate) point. These types
// carry that point sequence — plus the area under it — to the
// external plotting collaborator. Rendering is not done here.
//
// Reference: Fawcett (2006) An introduction to ROC analysis

use serde::{Deserialize, Serialize};

/// A single point on a ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// False positive rate at this threshold: FP / (FP + TN)
    pub fpr: f64,

    /// True positive rate at this threshold: TP / (TP + FN)
    pub tpr: f64,
}

/// The full ROC curve for one class, treated one-vs-rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocCurve {
    /// The class this curve belongs to
    pub class: usize,

    /// Ordered points from (0, 0) to (1, 1), threshold high → low
    pub points: Vec<RocPoint>,

    /// Area under the curve, computed by the trapezoidal rule
    /// over `points`. 0.5 is chance level, 1.0 perfect separation.
    pub auc: f64,
}
