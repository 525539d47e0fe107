// ============================================================
// Layer 4: Label Encoder
// ============================================================
// AG News stores labels as 1..=4. Loss functions and one-hot
// vectors want 0..=3, so every raw label is shifted down by one.
//
//   raw 3 → index 2 → [0.0, 0.0, 1.0, 0.0]
//
// The class count is fixed by the dataset (Topic::COUNT) instead
// of being inferred from the largest label in the file. A test
// file that happens to contain no SciTech rows still produces
// 4-wide one-hot vectors, matching the training split.

use anyhow::{bail, ensure, Result};

use crate::domain::topic::Topic;

/// Maps raw 1-based labels to zero-based class indices.
#[derive(Debug, Clone, Copy)]
pub struct LabelEncoder {
    num_classes: usize,
}

impl LabelEncoder {
    pub fn new() -> Self {
        Self { num_classes: Topic::COUNT }
    }

    /// Shift a raw label into `0..num_classes`.
    pub fn encode(&self, raw: i64) -> Result<usize> {
        if raw < 1 || raw > self.num_classes as i64 {
            bail!(
                "label {raw} is outside the AG News range 1..={}",
                self.num_classes
            );
        }
        Ok((raw - 1) as usize)
    }

    /// Encode and one-hot in one step
    pub fn encode_one_hot(&self, raw: i64) -> Result<(usize, Vec<f32>)> {
        let index = self.encode(raw)?;
        Ok((index, one_hot(index, self.num_classes)?))
    }
}

impl Default for LabelEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// A `num_classes`-wide vector with a single 1.0 at `index`.
pub fn one_hot(index: usize, num_classes: usize) -> Result<Vec<f32>> {
    ensure!(num_classes > 0, "one-hot encoding needs at least one class");
    ensure!(
        index < num_classes,
        "class index {index} out of range for {num_classes} classes"
    );

    let mut v = vec![0.0; num_classes];
    v[index] = 1.0;
    Ok(v)
}
