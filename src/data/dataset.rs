use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::topic::Topic;

/// One cleaned, label-encoded example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSample {
    pub text:    String,
    /// Zero-based class index
    pub label:   usize,
    pub one_hot: Vec<f32>,
}

impl NewsSample {
    pub fn topic(&self) -> Option<Topic> {
        Topic::from_index(self.label)
    }
}

#[derive(Debug)]
pub struct NewsDataset {
    samples: Vec<NewsSample>,
}

impl NewsDataset {
    pub fn new(samples: Vec<NewsSample>) -> Self { Self { samples } }

    pub fn into_samples(self) -> Vec<NewsSample> { self.samples }

    pub fn class_counts(&self) -> [usize; Topic::COUNT] {
        class_counts(&self.samples)
    }
}

/// Number of samples per class, indexed by `Topic::index()`
pub fn class_counts(samples: &[NewsSample]) -> [usize; Topic::COUNT] {
    let mut counts = [0usize; Topic::COUNT];
    for s in samples {
        if let Some(c) = counts.get_mut(s.label) {
            *c += 1;
        }
    }
    counts
}

impl Dataset<NewsSample> for NewsDataset {
    fn get(&self, index: usize) -> Option<NewsSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
