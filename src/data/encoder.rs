// ============================================================
// Layer 4 — Sequence Encoder
// ============================================================
// Maps text samples through the vocabulary into integer ID
// sequences, then normalises every sequence to a fixed length.
//
// The length policy is positional and must be reproduced exactly
// at train and evaluation time, because it changes which tokens
// the recurrent layers see first:
//   - longer than L  → keep the TRAILING L tokens (front truncation)
//   - shorter than L → left-pad with 0 (the reserved padding ID)
//
// Example with L = 5:
//   [7, 3, 9]                → [0, 0, 7, 3, 9]
//   [1, 2, 3, 4, 5, 6, 7]    → [3, 4, 5, 6, 7]
//   [1, 2, 3, 4, 5]          → unchanged
//
// Tokens outside the vocabulary are dropped, not mapped to an
// unknown ID. Everything here is deterministic.

use crate::data::vocabulary::{tokenize, Vocabulary};

/// Encodes text into fixed-length ID sequences using a frozen
/// Vocabulary.
pub struct SequenceEncoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> SequenceEncoder<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Encode one text sample into a variable-length ID sequence.
    /// Unknown tokens are silently dropped.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        tokenize(text)
            .iter()
            .filter_map(|token| self.vocab.id(token))
            .collect()
    }
}

/// Normalise a collection of sequences into an (N, L) rectangle:
/// front-truncate to the trailing `target_len` IDs, or left-pad
/// with 0 up to `target_len`.
pub fn pad_sequences(sequences: Vec<Vec<u32>>, target_len: usize) -> Vec<Vec<u32>> {
    sequences
        .into_iter()
        .map(|seq| pad_one(seq, target_len))
        .collect()
}

fn pad_one(seq: Vec<u32>, target_len: usize) -> Vec<u32> {
    if seq.len() >= target_len {
        // Keep the trailing window
        seq[seq.len() - target_len..].to_vec()
    } else {
        let mut padded = vec![0u32; target_len - seq.len()];
        padded.extend(seq);
        padded
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vocabulary::VocabularyBuilder;

    fn small_vocab() -> Vocabulary {
        let corpus = vec![
            "good product".to_string(),
            "bad product".to_string(),
            "okay product".to_string(),
        ];
        VocabularyBuilder::new(10).build(&corpus).unwrap()
    }

    #[test]
    fn test_unknown_tokens_are_dropped() {
        let vocab = small_vocab();
        let encoder = SequenceEncoder::new(&vocab);
        // "very" never appeared in the corpus
        let ids = encoder.encode("very good product");
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_padded_length_is_exact() {
        for raw_len in [0usize, 1, 4, 5, 6, 50] {
            let seq: Vec<u32> = (1..=raw_len as u32).collect();
            let out = pad_one(seq, 5);
            assert_eq!(out.len(), 5);
        }
    }

    #[test]
    fn test_short_sequences_are_left_padded() {
        let out = pad_one(vec![7, 3, 9], 5);
        assert_eq!(out, vec![0, 0, 7, 3, 9]);
    }

    #[test]
    fn test_long_sequences_keep_the_tail() {
        let out = pad_one(vec![1, 2, 3, 4, 5, 6, 7], 5);
        assert_eq!(out, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_exact_length_passes_through_unchanged() {
        let seq = vec![1, 2, 3, 4, 5];
        assert_eq!(pad_one(seq.clone(), 5), seq);
    }

    #[test]
    fn test_three_review_scenario_encodes_to_length_five() {
        let vocab = small_vocab();
        let encoder = SequenceEncoder::new(&vocab);
        let sequences: Vec<Vec<u32>> = ["good product", "bad product", "okay product"]
            .iter()
            .map(|t| encoder.encode(t))
            .collect();
        let padded = pad_sequences(sequences, 5);

        for row in &padded {
            assert_eq!(row.len(), 5);
            // Two real tokens per review → three leading pad zeros
            assert_eq!(&row[..3], &[0, 0, 0]);
            assert!(row[3] >= 1 && row[4] >= 1);
        }
    }
}
