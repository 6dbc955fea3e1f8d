use burn::data::dataset::Dataset;

/// One fully encoded training example: a fixed-length ID sequence
/// paired with its one-hot sentiment row.
#[derive(Debug, Clone)]
pub struct SentimentSample {
    pub input_ids: Vec<u32>,
    pub one_hot:   Vec<f32>,
}

impl SentimentSample {
    /// The class index encoded by the one-hot row
    /// (index of the maximum entry, ties broken by lowest index).
    pub fn class_index(&self) -> usize {
        let mut best = 0usize;
        for (i, &v) in self.one_hot.iter().enumerate() {
            if v > self.one_hot[best] {
                best = i;
            }
        }
        best
    }
}

pub struct SentimentDataset {
    samples: Vec<SentimentSample>,
}

impl SentimentDataset {
    pub fn new(samples: Vec<SentimentSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<SentimentSample> for SentimentDataset {
    fn get(&self, index: usize) -> Option<SentimentSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_reads_the_one_hot() {
        let sample = SentimentSample {
            input_ids: vec![0, 0, 3],
            one_hot:   vec![0.0, 0.0, 1.0],
        };
        assert_eq!(sample.class_index(), 2);
    }

    #[test]
    fn test_dataset_get_and_len() {
        let ds = SentimentDataset::new(vec![
            SentimentSample { input_ids: vec![1], one_hot: vec![1.0, 0.0, 0.0] },
            SentimentSample { input_ids: vec![2], one_hot: vec![0.0, 1.0, 0.0] },
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(1).unwrap().class_index(), 1);
        assert!(ds.get(2).is_none());
    }
}
