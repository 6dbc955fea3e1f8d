// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores the trained classifier on the held-out test set:
//
//   1. Batched predictions over every test example
//   2. argmax decoding of truth and prediction rows
//   3. Classification report — per-class precision, recall,
//      F1 and support, plus accuracy and macro/weighted averages
//   4. Per-class one-vs-rest ROC curve and AUC, sweeping the
//      decision threshold from high to low over the distinct
//      predicted scores for that class
//
// A class with no positive (or no negative) examples in the test
// truth makes its ROC undefined; that is surfaced as a
// DegenerateClass error, never as a quiet NaN.
//
// Reference: Fawcett (2006) An introduction to ROC analysis

use anyhow::Result;
use burn::prelude::*;
use std::cmp::Ordering;
use std::fmt;

use crate::data::dataset::SentimentSample;
use crate::domain::error::PipelineError;
use crate::domain::roc::{RocCurve, RocPoint};
use crate::ml::model::SentimentNet;

/// Index of the maximum entry of a row, ties broken by lowest
/// index (the standard argmax convention).
pub fn argmax(row: &[f32]) -> usize {
    let mut best = 0usize;
    for (i, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = i;
        }
    }
    best
}

// ─── Classification Report ────────────────────────────────────────────────────

/// Precision/recall/F1 for one class (or one averaging mode).
#[derive(Debug, Clone, Copy)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall:    f64,
    pub f1:        f64,
    /// Number of true examples this row is computed over
    pub support:   usize,
}

/// The full multiclass report computed from index-valued labels.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub per_class:    Vec<ClassMetrics>,
    pub accuracy:     f64,
    pub macro_avg:    ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

/// Compute the classification report from decoded class indices.
pub fn classification_report(
    y_true:      &[usize],
    y_pred:      &[usize],
    num_classes: usize,
) -> ClassificationReport {
    let total = y_true.len();

    let mut per_class = Vec::with_capacity(num_classes);
    for class in 0..num_classes {
        let tp = y_true.iter().zip(y_pred)
            .filter(|(&t, &p)| t == class && p == class)
            .count();
        let predicted = y_pred.iter().filter(|&&p| p == class).count();
        let support   = y_true.iter().filter(|&&t| t == class).count();

        let precision = if predicted > 0 { tp as f64 / predicted as f64 } else { 0.0 };
        let recall    = if support   > 0 { tp as f64 / support   as f64 } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else { 0.0 };

        per_class.push(ClassMetrics { precision, recall, f1, support });
    }

    let correct = y_true.iter().zip(y_pred).filter(|(&t, &p)| t == p).count();
    let accuracy = if total > 0 { correct as f64 / total as f64 } else { 0.0 };

    // Macro: every class weighs the same. Weighted: by support.
    let classes = num_classes.max(1) as f64;
    let macro_avg = ClassMetrics {
        precision: per_class.iter().map(|m| m.precision).sum::<f64>() / classes,
        recall:    per_class.iter().map(|m| m.recall).sum::<f64>()    / classes,
        f1:        per_class.iter().map(|m| m.f1).sum::<f64>()        / classes,
        support:   total,
    };
    let weight = |f: fn(&ClassMetrics) -> f64| {
        if total == 0 { return 0.0; }
        per_class.iter().map(|m| f(m) * m.support as f64).sum::<f64>() / total as f64
    };
    let weighted_avg = ClassMetrics {
        precision: weight(|m| m.precision),
        recall:    weight(|m| m.recall),
        f1:        weight(|m| m.f1),
        support:   total,
    };

    ClassificationReport { per_class, accuracy, macro_avg, weighted_avg }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>10} {:>10} {:>10} {:>10}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for (class, m) in self.per_class.iter().enumerate() {
            writeln!(
                f,
                "{:>12} {:>10.4} {:>10.4} {:>10.4} {:>10}",
                class, m.precision, m.recall, m.f1, m.support,
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.4} {:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support,
        )?;
        for (label, m) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>12} {:>10.4} {:>10.4} {:>10.4} {:>10}",
                label, m.precision, m.recall, m.f1, m.support,
            )?;
        }
        Ok(())
    }
}

// ─── ROC / AUC ────────────────────────────────────────────────────────────────

/// One-vs-rest ROC curve for a single class.
///
/// `truth` marks which examples really belong to the class;
/// `scores` is the predicted probability column for it. The
/// threshold sweeps from high to low: each distinct score value
/// contributes one (FPR, TPR) point, starting from (0, 0).
pub fn roc_curve(truth: &[bool], scores: &[f32], class: usize) -> Result<RocCurve, PipelineError> {
    let positives = truth.iter().filter(|&&t| t).count();
    let negatives = truth.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(PipelineError::DegenerateClass { class });
    }

    // Examples ordered by descending score; NaN cannot occur in
    // softmax output, so the total order is well defined.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal)
    });

    let mut points = vec![RocPoint { fpr: 0.0, tpr: 0.0 }];
    let mut tp = 0usize;
    let mut fp = 0usize;

    let mut i = 0;
    while i < order.len() {
        // Consume the whole tie group at this threshold at once —
        // equal scores cannot be separated by any cutoff.
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if truth[order[i]] { tp += 1; } else { fp += 1; }
            i += 1;
        }
        points.push(RocPoint {
            fpr: fp as f64 / negatives as f64,
            tpr: tp as f64 / positives as f64,
        });
    }

    let auc = trapezoid_area(&points);
    Ok(RocCurve { class, points, auc })
}

/// Area under an ordered point sequence by the trapezoidal rule.
fn trapezoid_area(points: &[RocPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].fpr - w[0].fpr) * (w[0].tpr + w[1].tpr) / 2.0)
        .sum()
}

// ─── Evaluator ────────────────────────────────────────────────────────────────

/// Everything the evaluation run produces.
pub struct Evaluation {
    pub report: ClassificationReport,
    pub curves: Vec<RocCurve>,
}

/// Scores a trained model over a held-out sample set.
pub struct Evaluator {
    batch_size:  usize,
    num_classes: usize,
}

impl Evaluator {
    pub fn new(batch_size: usize, num_classes: usize) -> Self {
        Self { batch_size, num_classes }
    }

    /// Predict every sample, decode labels, and compute the report
    /// plus one ROC curve per class.
    pub fn evaluate<B: Backend>(
        &self,
        model:   &SentimentNet<B>,
        samples: &[SentimentSample],
    ) -> Result<Evaluation> {
        let probabilities = self.predict_all(model, samples)?;

        // ── Decode truth and predictions to class indices ─────────────────────
        let y_true: Vec<usize> = samples.iter().map(|s| s.class_index()).collect();
        let y_pred: Vec<usize> = probabilities.iter().map(|row| argmax(row)).collect();

        let report = classification_report(&y_true, &y_pred, self.num_classes);

        // ── One-vs-rest ROC per class ─────────────────────────────────────────
        let mut curves = Vec::with_capacity(self.num_classes);
        for class in 0..self.num_classes {
            let truth:  Vec<bool> = y_true.iter().map(|&t| t == class).collect();
            let scores: Vec<f32>  = probabilities.iter().map(|row| row[class]).collect();
            curves.push(roc_curve(&truth, &scores, class)?);
        }

        Ok(Evaluation { report, curves })
    }

    /// Run the model over the samples in batches and collect one
    /// probability row per sample.
    fn predict_all<B: Backend>(
        &self,
        model:   &SentimentNet<B>,
        samples: &[SentimentSample],
    ) -> Result<Vec<Vec<f32>>> {
        let device = B::Device::default();
        let mut rows = Vec::with_capacity(samples.len());

        for chunk in samples.chunks(self.batch_size.max(1)) {
            let batch_size = chunk.len();
            let seq_len    = chunk[0].input_ids.len();

            let flat: Vec<i32> = chunk
                .iter()
                .flat_map(|s| s.input_ids.iter().map(|&x| x as i32))
                .collect();
            let input = Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &device)
                .reshape([batch_size, seq_len]);

            let probs: Vec<f32> = model
                .predict(input)
                .into_data()
                .to_vec::<f32>()
                .map_err(|e| anyhow::anyhow!("Cannot read prediction tensor: {e:?}"))?;

            for row in probs.chunks(self.num_classes) {
                rows.push(row.to_vec());
            }
        }

        Ok(rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_of_one_hot_returns_the_one() {
        assert_eq!(argmax(&[0.0, 0.0, 1.0]), 2);
        assert_eq!(argmax(&[1.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[0.0, 1.0, 0.0]), 1);
    }

    #[test]
    fn test_argmax_ties_break_to_lowest_index() {
        assert_eq!(argmax(&[0.5, 0.5, 0.0]), 0);
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), 1);
    }

    #[test]
    fn test_report_on_a_known_confusion() {
        // truth:      0 0 0 1 1 2
        // predicted:  0 0 1 1 1 2
        let y_true = vec![0, 0, 0, 1, 1, 2];
        let y_pred = vec![0, 0, 1, 1, 1, 2];
        let report = classification_report(&y_true, &y_pred, 3);

        let c0 = report.per_class[0];
        assert!((c0.precision - 1.0).abs() < 1e-9);
        assert!((c0.recall - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(c0.support, 3);

        let c1 = report.per_class[1];
        assert!((c1.precision - 2.0 / 3.0).abs() < 1e-9);
        assert!((c1.recall - 1.0).abs() < 1e-9);

        assert!((report.accuracy - 5.0 / 6.0).abs() < 1e-9);
        assert_eq!(report.macro_avg.support, 6);
    }

    #[test]
    fn test_absent_predicted_class_gets_zero_precision() {
        // Nothing is ever predicted as class 2
        let y_true = vec![0, 1, 2];
        let y_pred = vec![0, 1, 1];
        let report = classification_report(&y_true, &y_pred, 3);
        assert_eq!(report.per_class[2].precision, 0.0);
        assert_eq!(report.per_class[2].recall, 0.0);
        assert_eq!(report.per_class[2].f1, 0.0);
    }

    #[test]
    fn test_perfect_separation_has_unit_auc() {
        let truth  = vec![true, true, false, false];
        let scores = vec![0.9, 0.8, 0.3, 0.1];
        let curve  = roc_curve(&truth, &scores, 0).unwrap();
        assert!((curve.auc - 1.0).abs() < 1e-9);
        // Sweep starts at (0,0) and ends at (1,1)
        assert_eq!(curve.points.first().unwrap(), &RocPoint { fpr: 0.0, tpr: 0.0 });
        assert_eq!(curve.points.last().unwrap(),  &RocPoint { fpr: 1.0, tpr: 1.0 });
    }

    #[test]
    fn test_inverted_ranking_has_zero_auc() {
        let truth  = vec![false, false, true, true];
        let scores = vec![0.9, 0.8, 0.3, 0.1];
        let curve  = roc_curve(&truth, &scores, 0).unwrap();
        assert!(curve.auc.abs() < 1e-9);
    }

    #[test]
    fn test_tied_scores_form_a_single_point() {
        // All four scores identical: one sweep step from (0,0) to (1,1),
        // AUC collapses to chance level
        let truth  = vec![true, false, true, false];
        let scores = vec![0.5, 0.5, 0.5, 0.5];
        let curve  = roc_curve(&truth, &scores, 0).unwrap();
        assert_eq!(curve.points.len(), 2);
        assert!((curve.auc - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_class_missing_from_truth_is_degenerate() {
        // A test set entirely missing class 2
        let truth  = vec![false, false, false, false];
        let scores = vec![0.1, 0.2, 0.3, 0.4];
        let err = roc_curve(&truth, &scores, 2).unwrap_err();
        assert!(matches!(err, PipelineError::DegenerateClass { class: 2 }));
    }

    #[test]
    fn test_all_positive_truth_is_degenerate_too() {
        let truth  = vec![true, true];
        let scores = vec![0.6, 0.7];
        assert!(roc_curve(&truth, &scores, 1).is_err());
    }

    #[test]
    fn test_report_renders_all_rows() {
        let report = classification_report(&[0, 1, 2], &[0, 1, 2], 3);
        let text   = report.to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("accuracy"));
        assert!(text.contains("macro avg"));
        assert!(text.contains("weighted avg"));
    }
}
