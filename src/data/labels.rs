// ============================================================
// Layer 4 — Label Encoder
// ============================================================
// Turns raw integer sentiment values into one-hot rows over a
// fixed class count. Every raw value is validated against
// [0, num_classes) first — an out-of-range label aborts the run
// before any encoding happens, because a silently clamped or
// wrapped label would poison the training targets.

use crate::domain::error::PipelineError;

/// One-hot encode raw labels over `num_classes` classes.
///
/// Each output row has exactly one entry equal to 1.0 and the
/// rest 0.0. Fails with LabelOutOfRange on the first value
/// outside [0, num_classes).
pub fn one_hot(labels: &[i64], num_classes: usize) -> Result<Vec<Vec<f32>>, PipelineError> {
    let mut rows = Vec::with_capacity(labels.len());

    for &label in labels {
        if label < 0 || label as usize >= num_classes {
            return Err(PipelineError::LabelOutOfRange { label, num_classes });
        }
        let mut row = vec![0.0f32; num_classes];
        row[label as usize] = 1.0;
        rows.push(row);
    }

    Ok(rows)
}
