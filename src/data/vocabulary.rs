// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Scans the full corpus once and assigns integer IDs to the
// top-K most frequent tokens. IDs are handed out in descending
// frequency order starting at 1; ID 0 is reserved for padding
// and is never assigned to a real token. Frequency ties are
// broken by first occurrence in the corpus, so the mapping is
// fully deterministic.
//
// Example with cap = 3:
//   corpus: "the cat sat", "the cat ran", "the dog ran"
//   counts: the=3, cat=2, ran=2, sat=1, dog=1
//   vocab:  the→1, cat→2, ran→3        (sat/dog fall off the cap)
//
// The vocabulary is built once and immutable afterwards — there
// are no online updates during training.

use std::collections::HashMap;

use crate::domain::error::PipelineError;

/// Split one text sample into tokens: lowercase, whitespace
/// separated, with non-alphanumeric punctuation stripped from
/// token edges. Tokens that are pure punctuation vanish.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// The frozen token → ID mapping.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    ids: HashMap<String, u32>,
}

impl Vocabulary {
    /// Look up the ID of a token, or None if the token did not
    /// make the frequency cut.
    pub fn id(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    /// Number of real tokens in the mapping (padding excluded).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Builds a Vocabulary from a corpus, keeping at most `cap` tokens.
pub struct VocabularyBuilder {
    cap: usize,
}

impl VocabularyBuilder {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Count token frequencies across the whole corpus and keep the
    /// `cap` most frequent, assigning IDs 1..=cap in rank order.
    ///
    /// Fails with EmptyCorpus when the corpus yields zero tokens —
    /// there is nothing to train on in that case.
    pub fn build(&self, corpus: &[String]) -> Result<Vocabulary, PipelineError> {
        // ── Step 1: Count frequencies, remembering first occurrence ──────────
        let mut freq:       HashMap<String, usize> = HashMap::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut position = 0usize;

        for text in corpus {
            for token in tokenize(text) {
                first_seen.entry(token.clone()).or_insert(position);
                *freq.entry(token).or_insert(0) += 1;
                position += 1;
            }
        }

        if freq.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }

        // ── Step 2: Rank by frequency desc, ties by first occurrence ─────────
        let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| first_seen[&a.0].cmp(&first_seen[&b.0]))
        });
        ranked.truncate(self.cap);

        // ── Step 3: Assign IDs in rank order, starting at 1 ──────────────────
        // ID 0 stays reserved for the padding value.
        let ids = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (token, _))| (token, rank as u32 + 1))
            .collect();

        let vocab = Vocabulary { ids };
        tracing::debug!("Vocabulary built: {} tokens (cap {})", vocab.len(), self.cap);
        Ok(vocab)
    }
}
