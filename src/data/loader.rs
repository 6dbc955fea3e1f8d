// ============================================================
// Layer 4 — CSV Review Loader
// ============================================================
// Loads the text corpus and the sentiment labels from two
// separate CSV files and pairs them row by row.
//
// The two files have no shared join key, so positional pairing
// is the only option — but it is validated, not trusted: if the
// files disagree on row count the loader fails with a
// ShapeMismatch error instead of silently mislabelling every
// review after the first gap.
//
// Missing or empty text cells are kept as empty strings rather
// than dropped, so row positions stay aligned; an empty string
// simply encodes to zero tokens downstream.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::error::PipelineError;
use crate::domain::review::LabeledReview;
use crate::domain::traits::ReviewSource;

/// Loads labelled reviews from a pair of row-aligned CSV files.
/// Implements the ReviewSource trait from Layer 3.
pub struct CsvReviewSource {
    /// Path to the CSV holding the summary text column
    summaries_path: String,
    /// Path to the CSV holding the sentiment label column
    sentiments_path: String,
    /// Header name of the text column
    summary_column: String,
    /// Header name of the label column
    sentiment_column: String,
}

impl CsvReviewSource {
    pub fn new(
        summaries_path:   impl Into<String>,
        sentiments_path:  impl Into<String>,
        summary_column:   impl Into<String>,
        sentiment_column: impl Into<String>,
    ) -> Self {
        Self {
            summaries_path:   summaries_path.into(),
            sentiments_path:  sentiments_path.into(),
            summary_column:   summary_column.into(),
            sentiment_column: sentiment_column.into(),
        }
    }
}

impl ReviewSource for CsvReviewSource {
    fn load_all(&self) -> Result<Vec<LabeledReview>> {
        let summaries  = read_text_column(Path::new(&self.summaries_path), &self.summary_column)?;
        let sentiments = read_label_column(Path::new(&self.sentiments_path), &self.sentiment_column)?;

        // The rows of the two files must pair up one-to-one.
        if summaries.len() != sentiments.len() {
            return Err(PipelineError::ShapeMismatch {
                sequences: summaries.len(),
                labels:    sentiments.len(),
            }
            .into());
        }

        tracing::info!(
            "Loaded {} labelled reviews from '{}' + '{}'",
            summaries.len(),
            self.summaries_path,
            self.sentiments_path,
        );

        Ok(summaries
            .into_iter()
            .zip(sentiments)
            .map(|(summary, sentiment)| LabeledReview::new(summary, sentiment))
            .collect())
    }
}

/// Read one named column of a CSV file as text, one entry per row.
/// Cells that are absent from a short row come back as "".
fn read_text_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Cannot open CSV file '{}'", path.display()))?;

    let idx = column_index(&mut reader, column, path)?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Cannot read row {} of '{}'", row + 2, path.display()))?;
        values.push(record.get(idx).unwrap_or("").to_string());
    }
    Ok(values)
}

/// Read one named column of a CSV file as integer labels.
/// Non-numeric cells are a hard error; label range validation
/// against the class count happens later in the label encoder.
fn read_label_column(path: &Path, column: &str) -> Result<Vec<i64>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Cannot open CSV file '{}'", path.display()))?;

    let idx = column_index(&mut reader, column, path)?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Cannot read row {} of '{}'", row + 2, path.display()))?;
        let cell = record.get(idx).unwrap_or("").trim();
        let label: i64 = cell.parse().with_context(|| {
            format!(
                "Row {} of '{}': cannot parse label '{}' as an integer",
                row + 2,
                path.display(),
                cell
            )
        })?;
        values.push(label);
    }
    Ok(values)
}

/// Find the position of a named column in the CSV header row.
fn column_index(
    reader: &mut csv::Reader<std::fs::File>,
    column: &str,
    path:   &Path,
) -> Result<usize> {
    let headers = reader
        .headers()
        .with_context(|| format!("Cannot read header row of '{}'", path.display()))?;
    headers
        .iter()
        .position(|h| h == column)
        .with_context(|| format!("'{}' has no column named '{}'", path.display(), column))
}
