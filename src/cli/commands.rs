// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `train` subcommand and all its configurable flags.
// Every pipeline constant is a named, documented option here so a
// run is fully described by its command line; the defaults match
// the reference configuration.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the sentiment classifier and print the evaluation report
    Train(TrainArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// CSV file holding the review summary text column
    #[arg(long, default_value = "data/summaries.csv")]
    pub summaries_csv: String,

    /// CSV file holding the sentiment label column, row-aligned
    /// with the summaries file
    #[arg(long, default_value = "data/sentiments.csv")]
    pub sentiments_csv: String,

    /// Name of the text column in the summaries file
    #[arg(long, default_value = "Summary_Tamil")]
    pub summary_column: String,

    /// Name of the integer label column in the sentiments file
    #[arg(long, default_value = "Sentiment_1")]
    pub sentiment_column: String,

    /// Directory for the epoch metrics CSV and the ROC curve points
    /// handed to the plotting collaborator
    #[arg(long, default_value = "out")]
    pub out_dir: String,

    /// Maximum number of distinct tokens kept in the vocabulary
    /// (the most frequent ones win; ID 0 is reserved for padding)
    #[arg(long, default_value_t = 5000)]
    pub vocab_size: usize,

    /// Fixed length every encoded sequence is padded/truncated to
    #[arg(long, default_value_t = 200)]
    pub seq_len: usize,

    /// Dimension of the dense vector each token ID is embedded into
    #[arg(long, default_value_t = 32)]
    pub embedding_dim: usize,

    /// Hidden width of each LSTM direction (the concatenated
    /// bidirectional output is twice this)
    #[arg(long, default_value_t = 64)]
    pub hidden_size: usize,

    /// Number of sentiment classes; labels must lie in [0, num_classes)
    #[arg(long, default_value_t = 3)]
    pub num_classes: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 5)]
    pub epochs: usize,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Fraction of examples held out for the test split
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Seed for the shuffle that produces the train/test split —
    /// the same seed always yields the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            summaries_csv:    a.summaries_csv,
            sentiments_csv:   a.sentiments_csv,
            summary_column:   a.summary_column,
            sentiment_column: a.sentiment_column,
            out_dir:          a.out_dir,
            vocab_size:       a.vocab_size,
            seq_len:          a.seq_len,
            embedding_dim:    a.embedding_dim,
            hidden_size:      a.hidden_size,
            num_classes:      a.num_classes,
            epochs:           a.epochs,
            batch_size:       a.batch_size,
            lr:               a.lr,
            test_fraction:    a.test_fraction,
            seed:             a.seed,
        }
    }
}
