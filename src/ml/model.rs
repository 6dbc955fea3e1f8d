use burn::{
    nn::{
        BiLstm, BiLstmConfig,
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::backend::AutodiffBackend,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct SentimentNetConfig {
    /// Number of real token IDs the vocabulary assigned (ID 0,
    /// the padding value, is on top of this)
    pub vocab_size:    usize,
    pub embedding_dim: usize,
    /// Hidden width per LSTM direction
    pub hidden_size:   usize,
    pub num_classes:   usize,
}

impl SentimentNetConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SentimentNet<B> {
        // Row 0 of the embedding table belongs to the padding ID.
        // There is no masking layer: the recurrent layers see the
        // padding embedding as ordinary input.
        let embedding = EmbeddingConfig::new(self.vocab_size + 1, self.embedding_dim)
            .init(device);
        let bilstm1 = BiLstmConfig::new(self.embedding_dim, self.hidden_size, true)
            .init(device);
        // The second layer consumes the concatenated forward+backward
        // output of the first, hence 2 * hidden_size input width.
        let bilstm2 = BiLstmConfig::new(2 * self.hidden_size, self.hidden_size, true)
            .init(device);
        let output = LinearConfig::new(2 * self.hidden_size, self.num_classes)
            .init(device);

        SentimentNet { embedding, bilstm1, bilstm2, output }
    }
}

#[derive(Module, Debug)]
pub struct SentimentNet<B: Backend> {
    pub embedding: Embedding<B>,
    pub bilstm1:   BiLstm<B>,
    pub bilstm2:   BiLstm<B>,
    pub output:    Linear<B>,
}

impl<B: Backend> SentimentNet<B> {
    /// input_ids: [batch, seq_len] → class logits: [batch, num_classes]
    pub fn forward(&self, input_ids: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let embedded = self.embedding.forward(input_ids); // [batch, seq, emb]

        // First BiLSTM returns the full output sequence so the second
        // layer sees one concatenated hidden state per input step.
        let (sequence, _) = self.bilstm1.forward(embedded, None); // [batch, seq, 2*hidden]
        let (sequence, _) = self.bilstm2.forward(sequence, None); // [batch, seq, 2*hidden]

        // Summarise the second layer to its final concatenated hidden
        // state: the forward direction finishes at the LAST step, the
        // backward direction at the FIRST.
        let [batch_size, seq_len, width] = sequence.dims();
        let hidden = width / 2;
        let forward_last = sequence.clone()
            .slice([0..batch_size, (seq_len - 1)..seq_len, 0..hidden])
            .reshape([batch_size, hidden]);
        let backward_last = sequence
            .slice([0..batch_size, 0..1, hidden..width])
            .reshape([batch_size, hidden]);
        let summary = Tensor::cat(vec![forward_last, backward_last], 1); // [batch, 2*hidden]

        self.output.forward(summary)
    }

    /// input_ids: [batch, seq_len] → class probabilities: [batch, num_classes].
    /// Every row is a softmax distribution: non-negative, summing to 1.
    pub fn predict(&self, input_ids: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        burn::tensor::activation::softmax(self.forward(input_ids), 1)
    }

    /// Forward pass plus categorical cross-entropy against class
    /// index targets. Used by the training loop only.
    pub fn forward_loss(
        &self,
        input_ids: Tensor<B, 2, Int>,
        targets:   Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>)
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(input_ids);
        let ce = burn::nn::loss::CrossEntropyLossConfig::new()
            .init(&logits.device());
        let loss = ce.forward(logits.clone(), targets);
        (loss, logits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn tiny_model(device: &<TestBackend as Backend>::Device) -> SentimentNet<TestBackend> {
        SentimentNetConfig::new(10, 4, 3, 3).init(device)
    }

    #[test]
    fn test_logit_shape() {
        let device = Default::default();
        let model  = tiny_model(&device);

        let input = Tensor::<TestBackend, 1, Int>::from_ints(
            [0, 0, 1, 2, 3, 0, 4, 5, 6, 7, 8, 9].as_slice(),
            &device,
        )
        .reshape([2, 6]);

        assert_eq!(model.forward(input).dims(), [2, 3]);
    }

    #[test]
    fn test_prediction_rows_are_distributions() {
        let device = Default::default();
        let model  = tiny_model(&device);

        let input = Tensor::<TestBackend, 1, Int>::from_ints(
            [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1].as_slice(),
            &device,
        )
        .reshape([3, 4]);

        let probs: Vec<f32> = model
            .predict(input)
            .into_data()
            .to_vec::<f32>()
            .unwrap();

        for row in probs.chunks(3) {
            let sum: f32 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "row sums to {sum}");
            for &p in row {
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
