// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Every failure in this pipeline is terminal: training is not a
// transient operation, so there is no retry or recovery path.
// The caller fixes the input data and re-runs.

use thiserror::Error;

/// The fatal failure modes of the training/evaluation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus produced zero tokens, so no vocabulary can be
    /// built. Raised before any training happens.
    #[error("corpus contains no usable text samples to build a vocabulary from")]
    EmptyCorpus,

    /// A raw sentiment value falls outside [0, num_classes).
    /// Raised before one-hot encoding.
    #[error("label {label} is outside the valid class range [0, {num_classes})")]
    LabelOutOfRange { label: i64, num_classes: usize },

    /// The encoded sequences and the labels disagree on example
    /// count — the two input files are misaligned. Raised before
    /// the train/test split.
    #[error("{sequences} text rows but {labels} label rows; the input files are misaligned")]
    ShapeMismatch { sequences: usize, labels: usize },

    /// A class has no positive (or no negative) examples in the
    /// test split, so its one-vs-rest ROC curve and AUC are
    /// undefined. Surfaced instead of a silently misleading score.
    #[error("class {class} is missing positive or negative examples in the test split; its ROC/AUC is undefined")]
    DegenerateClass { class: usize },
}
