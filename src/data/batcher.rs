// ============================================================
// Layer 4 — Sentiment Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<SentimentSample>
// into tensors the model can consume.
//
// How batching works here:
//   Input:  Vec of N samples, each with sequences of length L
//   Output: SentimentBatch with an ID tensor of shape [N, L]
//           and a class-index target tensor of shape [N]
//
//   We flatten all input_ids into one long Vec, then reshape:
//   [s1_t1, s1_t2, ..., s1_tL, s2_t1, ..., sN_tL] → [N, L]
//
// This is straightforward because every sequence was already
// padded to the same length by the encoder. The cross-entropy
// loss wants class indices rather than one-hot rows, so targets
// are decoded from the one-hot here.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::SentimentSample;

// ─── SentimentBatch ───────────────────────────────────────────────────────────
/// A batch of encoded reviews ready for the model forward pass.
/// All tensors have batch_size as their first dimension.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct SentimentBatch<B: Backend> {
    /// Token ID sequences — shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Ground truth class indices — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── SentimentBatcher ─────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct backend device.
#[derive(Clone, Debug)]
pub struct SentimentBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> SentimentBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes SentimentBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch of samples.
impl<B: Backend> Batcher<SentimentSample, SentimentBatch<B>> for SentimentBatcher<B> {
    fn batch(&self, items: Vec<SentimentSample>) -> SentimentBatch<B> {
        let batch_size = items.len();
        // All sequences have the same length (pre-padded)
        let seq_len = items[0].input_ids.len();

        // Flatten Vec<Vec<u32>> to Vec<i32> (Burn uses i32 for Int tensors)
        let input_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.input_ids.iter().map(|&x| x as i32))
            .collect();

        // Decode one-hot rows into scalar class indices
        let targets: Vec<i32> = items
            .iter()
            .map(|s| s.class_index() as i32)
            .collect();

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets.as_slice(), &self.device
        );

        SentimentBatch { input_ids, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn sample(ids: [u32; 4], class: usize) -> SentimentSample {
        let mut one_hot = vec![0.0f32; 3];
        one_hot[class] = 1.0;
        SentimentSample { input_ids: ids.to_vec(), one_hot }
    }

    #[test]
    fn test_batch_shapes() {
        let device  = Default::default();
        let batcher = SentimentBatcher::<TestBackend>::new(device);

        let batch = batcher.batch(vec![
            sample([0, 0, 1, 2], 0),
            sample([0, 3, 4, 1], 2),
            sample([5, 6, 7, 8], 1),
        ]);

        assert_eq!(batch.input_ids.dims(), [3, 4]);
        assert_eq!(batch.targets.dims(), [3]);
    }

    #[test]
    fn test_targets_match_one_hot_rows() {
        let device  = Default::default();
        let batcher = SentimentBatcher::<TestBackend>::new(device);

        let batch = batcher.batch(vec![sample([1, 2, 3, 4], 2), sample([1, 1, 1, 1], 0)]);
        let first: i64 = batch.targets.clone()
            .slice([0..1]).into_scalar().elem::<i64>();
        let second: i64 = batch.targets
            .slice([1..2]).into_scalar().elem::<i64>();
        assert_eq!(first,  2);
        assert_eq!(second, 0);
    }
}
