// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles samples with a SEEDED generator and splits them into
// two sets:
//   - Training set: used to update model weights
//   - Test set:     held out for validation and final evaluation
//
// The seed makes the partition reproducible: the same inputs,
// fraction and seed always yield the identical split, so metric
// numbers can be compared across runs.
//
// Test size = round(N * test_fraction); train gets the rest.
// The two sets are disjoint and together cover every sample.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom with a
// StdRng seeded from the configured value.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `samples` with the given seed and split into
/// (train, test).
///
/// # Arguments
/// * `samples`       - All available samples (consumed)
/// * `test_fraction` - Proportion held out, e.g. 0.2 = 20%
/// * `seed`          - Seed for the shuffle
///
/// # Returns
/// A tuple (train_samples, test_samples)
pub fn split_train_test<T>(
    mut samples:   Vec<T>,
    test_fraction: f64,
    seed:          u64,
) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);

    // Fisher-Yates shuffle — every permutation is equally likely
    samples.shuffle(&mut rng);

    let total     = samples.len();
    let test_size = ((total as f64) * test_fraction).round() as usize;
    let test_size = test_size.min(total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    let test = samples.split_off(total - test_size);

    tracing::debug!(
        "Dataset split: {} train, {} test (fraction {:.2}, seed {})",
        samples.len(),
        test.len(),
        test_fraction,
        seed,
    );

    (samples, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_train_test(items, 0.2, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_disjoint_and_exhaustive() {
        let items: Vec<usize> = (0..57).collect();
        let (train, test)     = split_train_test(items, 0.2, 7);

        let train_set: HashSet<usize> = train.iter().copied().collect();
        let test_set:  HashSet<usize> = test.iter().copied().collect();

        assert!(train_set.is_disjoint(&test_set));
        assert_eq!(train_set.len() + test_set.len(), 57);
    }

    #[test]
    fn test_same_seed_gives_identical_split() {
        // 100 examples across 3 classes, seed 42, fraction 0.2:
        // the held-out 20 indices must be identical on every run
        let items: Vec<usize> = (0..100).collect();
        let (train_a, test_a) = split_train_test(items.clone(), 0.2, 42);
        let (train_b, test_b) = split_train_test(items, 0.2, 42);

        assert_eq!(test_a.len(), 20);
        assert_eq!(test_a, test_b);
        assert_eq!(train_a, train_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let items: Vec<usize> = (0..100).collect();
        let (_, test_a) = split_train_test(items.clone(), 0.2, 1);
        let (_, test_b) = split_train_test(items, 0.2, 2);
        assert_ne!(test_a, test_b);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test)     = split_train_test(items, 0.2, 42);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_zero_fraction_keeps_everything_in_train() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_train_test(items, 0.0, 42);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }
}
