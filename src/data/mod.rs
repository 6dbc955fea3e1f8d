// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the two raw CSV files to tensor batches.
//
// The pipeline flows in this order:
//
//   summaries CSV + sentiments CSV
//       │
//       ▼
//   CsvReviewSource   → reads both files, pairs rows, validates counts
//       │
//       ▼
//   VocabularyBuilder → assigns IDs to the top-K most frequent tokens
//       │
//       ▼
//   SequenceEncoder   → text → token IDs, padded to a fixed length
//       │
//       ▼
//   one_hot           → raw labels → one-hot rows
//       │
//       ▼
//   split_train_test  → seeded, reproducible train/test partition
//       │
//       ▼
//   SentimentDataset  → implements Burn's Dataset trait
//       │
//       ▼
//   SentimentBatcher  → stacks samples into tensor batches
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.

/// Loads and pairs the two CSV files
pub mod loader;

/// Builds the frequency-ranked token → ID mapping
pub mod vocabulary;

/// Encodes text into fixed-length ID sequences
pub mod encoder;

/// One-hot encodes the sentiment labels
pub mod labels;

/// Seeded shuffle and train/test split
pub mod splitter;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
