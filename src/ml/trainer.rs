// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full train + validation loop using Burn's DataLoader and Adam.
//
// Training runs on Autodiff<NdArray> for gradients; after each
// epoch, model.valid() strips the autodiff graph and the test
// set is scored on the plain NdArray backend. Test data is used
// for monitoring only — no gradient ever flows from it.
//
// There is no early stopping, checkpointing or learning-rate
// scheduling: the loop always runs the configured epoch count,
// and a count of zero returns the freshly initialised model.
//
// Reference: Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::SentimentBatcher, dataset::SentimentDataset};
use crate::infra::metrics::EpochMetrics;
use crate::ml::model::{SentimentNet, SentimentNetConfig};

pub type MyBackend      = burn::backend::Autodiff<burn::backend::NdArray>;
pub type MyInnerBackend = burn::backend::NdArray;

/// Train the classifier and return it on the inner (inference)
/// backend together with one metrics record per epoch.
///
/// `vocab_size` is the number of real token IDs the vocabulary
/// actually assigned — it may be below the configured cap when
/// the corpus has fewer distinct tokens.
pub fn run_training(
    cfg:           &TrainConfig,
    vocab_size:    usize,
    train_dataset: SentimentDataset,
    test_dataset:  SentimentDataset,
) -> Result<(SentimentNet<MyInnerBackend>, Vec<EpochMetrics>)> {
    let device = burn::backend::ndarray::NdArrayDevice::default();

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = SentimentNetConfig::new(
        vocab_size,
        cfg.embedding_dim,
        cfg.hidden_size,
        cfg.num_classes,
    );
    let mut model: SentimentNet<MyBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: embedding {}x{}, 2 BiLSTM layers of width {} per direction, {} classes",
        vocab_size + 1,
        cfg.embedding_dim,
        cfg.hidden_size,
        cfg.num_classes,
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let train_batcher = SentimentBatcher::<MyBackend>::new(device.clone());
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    // ── Validation data loader (InnerBackend — no autodiff overhead) ──────────
    let test_batcher = SentimentBatcher::<MyInnerBackend>::new(device.clone());
    let test_loader  = DataLoaderBuilder::new(test_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(test_dataset);

    let mut history = Vec::with_capacity(cfg.epochs);

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {

        // ── Training phase ────────────────────────────────────────────────────
        let mut train_loss_sum = 0.0f64;
        let mut train_batches  = 0usize;

        for batch in train_loader.iter() {
            let (loss, _) = model.forward_loss(batch.input_ids, batch.targets);

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            train_loss_sum += loss_val;
            train_batches  += 1;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_train_loss = if train_batches > 0 {
            train_loss_sum / train_batches as f64
        } else { f64::NAN };

        // ── Validation phase ──────────────────────────────────────────────────
        // model.valid() → SentimentNet<MyInnerBackend>
        let model_valid = model.valid();

        let mut val_loss_sum  = 0.0f64;
        let mut val_batches   = 0usize;
        let mut correct       = 0usize;
        let mut total_samples = 0usize;

        for batch in test_loader.iter() {
            let logits = model_valid.forward(batch.input_ids);

            let ce = burn::nn::loss::CrossEntropyLossConfig::new()
                .init(&logits.device());
            let batch_loss: f64 = ce
                .forward(logits.clone(), batch.targets.clone())
                .into_scalar()
                .elem::<f64>();
            val_loss_sum += batch_loss;
            val_batches  += 1;

            // argmax(1) returns shape [batch, 1] — squeeze to [batch]
            // before comparing with the targets which are [batch]
            let predicted = logits.argmax(1).flatten::<1>(0, 1);

            total_samples += batch.targets.dims()[0];
            let batch_correct: i64 = predicted
                .equal(batch.targets)
                .int().sum().into_scalar().elem::<i64>();
            correct += batch_correct as usize;
        }

        let avg_val_loss = if val_batches   > 0 { val_loss_sum / val_batches as f64 } else { f64::NAN };
        let val_acc      = if total_samples > 0 { correct as f64 / total_samples as f64 } else { 0.0 };

        println!(
            "Epoch {:>3}/{} | train_loss={:.4} | val_loss={:.4} | val_acc={:.1}%",
            epoch, cfg.epochs, avg_train_loss, avg_val_loss, val_acc * 100.0,
        );

        history.push(EpochMetrics::new(epoch, avg_train_loss, avg_val_loss, val_acc));
    }

    tracing::info!("Training complete after {} epochs", cfg.epochs);
    Ok((model.valid(), history))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::SentimentSample;

    fn tiny_samples() -> Vec<SentimentSample> {
        // Six samples, two per class, sequence length 6
        (0..6)
            .map(|i| {
                let class = i % 3;
                let mut one_hot = vec![0.0f32; 3];
                one_hot[class] = 1.0;
                SentimentSample {
                    input_ids: vec![0, 0, (class + 1) as u32, (class + 4) as u32, 1, 2],
                    one_hot,
                }
            })
            .collect()
    }

    fn tiny_config(epochs: usize) -> TrainConfig {
        TrainConfig {
            epochs,
            batch_size: 2,
            vocab_size: 10,
            seq_len: 6,
            embedding_dim: 4,
            hidden_size: 3,
            num_classes: 3,
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_zero_epochs_returns_initialised_model() {
        let cfg = tiny_config(0);
        let train = SentimentDataset::new(tiny_samples());
        let test  = SentimentDataset::new(tiny_samples());

        let (model, history) = run_training(&cfg, 10, train, test).unwrap();
        assert!(history.is_empty());

        // The untouched model still produces valid distributions
        let device = Default::default();
        let input = Tensor::<MyInnerBackend, 1, Int>::from_ints(
            [0, 0, 1, 2, 3, 4].as_slice(), &device,
        ).reshape([1, 6]);
        let probs: Vec<f32> = model.predict(input).into_data().to_vec::<f32>().unwrap();
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_single_epoch_produces_finite_metrics() {
        let cfg = tiny_config(1);
        let train = SentimentDataset::new(tiny_samples());
        let test  = SentimentDataset::new(tiny_samples());

        let (_, history) = run_training(&cfg, 10, train, test).unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].train_loss.is_finite());
        assert!(history[0].val_loss.is_finite());
        assert!((0.0..=1.0).contains(&history[0].val_acc));
    }
}
