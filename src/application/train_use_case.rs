// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full pipeline in order:
//
//   Step 1: Load + pair the two CSV files   (Layer 4 - data)
//   Step 2: Build the vocabulary            (Layer 4 - data)
//   Step 3: Encode + pad sequences          (Layer 4 - data)
//   Step 4: One-hot encode labels           (Layer 4 - data)
//   Step 5: Validate example counts         (Layer 4 - data)
//   Step 6: Seeded train/test split         (Layer 4 - data)
//   Step 7: Run the training loop           (Layer 5 - ml)
//   Step 8: Log epoch metrics               (Layer 6 - infra)
//   Step 9: Evaluate on the test set        (Layer 5 - ml)
//   Step 10: Print report, export curves    (Layer 6 - infra)
//
// Control flow is strictly sequential; no phase overlaps the
// next, and the model parameters are touched only by Step 7.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::{SentimentDataset, SentimentSample},
    encoder::{pad_sequences, SequenceEncoder},
    labels::one_hot,
    loader::CsvReviewSource,
    splitter::split_train_test,
    vocabulary::VocabularyBuilder,
};
use crate::domain::error::PipelineError;
use crate::domain::traits::{CurveSink, ReviewSource};
use crate::infra::{curves::CsvCurveSink, metrics::MetricsLogger};
use crate::ml::{evaluator::Evaluator, trainer::run_training};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Every constant of the run as a named, documented field.
// Serialisable so a run can be described or reproduced from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub summaries_csv:    String,
    pub sentiments_csv:   String,
    pub summary_column:   String,
    pub sentiment_column: String,
    pub out_dir:          String,
    /// Vocabulary size cap K — most frequent tokens win
    pub vocab_size:       usize,
    /// Fixed encoded sequence length L
    pub seq_len:          usize,
    /// Embedding dimension D
    pub embedding_dim:    usize,
    /// LSTM hidden width H per direction
    pub hidden_size:      usize,
    /// Class count C
    pub num_classes:      usize,
    pub epochs:           usize,
    pub batch_size:       usize,
    pub lr:               f64,
    /// Fraction of examples held out for the test split
    pub test_fraction:    f64,
    /// Seed for the split shuffle and batch shuffling
    pub seed:             u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            summaries_csv:    "data/summaries.csv".to_string(),
            sentiments_csv:   "data/sentiments.csv".to_string(),
            summary_column:   "Summary_Tamil".to_string(),
            sentiment_column: "Sentiment_1".to_string(),
            out_dir:          "out".to_string(),
            vocab_size:       5000,
            seq_len:          200,
            embedding_dim:    32,
            hidden_size:      64,
            num_classes:      3,
            epochs:           5,
            batch_size:       64,
            lr:               1e-3,
            test_fraction:    0.2,
            seed:             42,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load and pair the two CSV files ──────────────────────────
        let source = CsvReviewSource::new(
            &cfg.summaries_csv,
            &cfg.sentiments_csv,
            &cfg.summary_column,
            &cfg.sentiment_column,
        );
        let reviews = source.load_all()?;

        let texts:  Vec<String> = reviews.iter().map(|r| r.summary.clone()).collect();
        let labels: Vec<i64>    = reviews.iter().map(|r| r.sentiment).collect();

        // ── Step 2: Build the vocabulary from the full corpus ─────────────────
        let vocab = VocabularyBuilder::new(cfg.vocab_size).build(&texts)?;
        tracing::info!("Vocabulary: {} tokens (cap {})", vocab.len(), cfg.vocab_size);

        // ── Step 3: Encode every summary, then pad to seq_len ─────────────────
        let encoder = SequenceEncoder::new(&vocab);
        let sequences: Vec<Vec<u32>> = texts.iter().map(|t| encoder.encode(t)).collect();
        let sequences = pad_sequences(sequences, cfg.seq_len);

        // ── Step 4: One-hot encode the labels ─────────────────────────────────
        let one_hot_rows = one_hot(&labels, cfg.num_classes)?;

        // ── Step 5: Validate example counts before splitting ──────────────────
        if sequences.len() != one_hot_rows.len() {
            return Err(PipelineError::ShapeMismatch {
                sequences: sequences.len(),
                labels:    one_hot_rows.len(),
            }
            .into());
        }

        // ── Step 6: Seeded train/test split ───────────────────────────────────
        let samples: Vec<SentimentSample> = sequences
            .into_iter()
            .zip(one_hot_rows)
            .map(|(input_ids, one_hot)| SentimentSample { input_ids, one_hot })
            .collect();
        let (train_samples, test_samples) =
            split_train_test(samples, cfg.test_fraction, cfg.seed);
        tracing::info!(
            "Split: {} train, {} test",
            train_samples.len(),
            test_samples.len()
        );

        let train_dataset = SentimentDataset::new(train_samples);
        let test_dataset  = SentimentDataset::new(test_samples.clone());

        // ── Step 7: Run the training loop (Layer 5) ───────────────────────────
        let (model, history) = run_training(cfg, vocab.len(), train_dataset, test_dataset)?;

        // ── Step 8: Log per-epoch metrics ─────────────────────────────────────
        let logger = MetricsLogger::new(&cfg.out_dir)?;
        for m in &history {
            logger.log(m)?;
        }

        // ── Step 9: Evaluate on the held-out test set ─────────────────────────
        let evaluator  = Evaluator::new(cfg.batch_size, cfg.num_classes);
        let evaluation = evaluator.evaluate(&model, &test_samples)?;

        // ── Step 10: Print the report, export the curves ──────────────────────
        println!("\n{}", evaluation.report);
        for curve in &evaluation.curves {
            println!("AUC for class {}: {:.4}", curve.class, curve.auc);
        }

        let sink = CsvCurveSink::new(&cfg.out_dir);
        sink.consume(&evaluation.curves)?;

        Ok(())
    }
}
