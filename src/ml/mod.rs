// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly, apart from the
// Dataset/Batcher glue in Layer 4.
//
// What's in this layer:
//
//   model.rs     — The classifier architecture:
//                  • Token embedding (padding ID 0 unmasked)
//                  • Two stacked bidirectional LSTM layers
//                  • Dense softmax head over the class count
//
//   trainer.rs   — The training loop
//                  Forward pass, cross-entropy loss, backward
//                  pass, Adam step, and a per-epoch validation
//                  pass over the held-out test set
//
//   evaluator.rs — Held-out evaluation
//                  Batched predictions, classification report
//                  (precision/recall/F1/support), per-class
//                  one-vs-rest ROC curves and AUC

/// Embedding + stacked BiLSTM + softmax head
pub mod model;

/// Full training loop with per-epoch validation
pub mod trainer;

/// Classification report, ROC curves and AUC
pub mod evaluator;
