// ============================================================
// Layer 4: News Batcher
// ============================================================
// Implements burn's Batcher trait to turn a Vec<NewsSample>
// into tensors a classifier can consume.
//
// How batching works here:
//   Input:  N samples of cleaned text with one-hot labels
//   Output: NewsBatch with
//             token_ids       [N, max_seq_len]  Int
//             attention_mask  [N, max_seq_len]  Int
//             one_hot         [N, 4]            Float
//             labels          [N]               Int
//
// Texts have different lengths, so each row is truncated to
// max_seq_len and right-padded with the encoder's pad id:
//
//   "nets get carter"  →  [17, 402, 9, 0, 0, 0]
//                         [ 1,   1, 1, 0, 0, 0]
//
// Batcher::batch cannot fail. A text the encoder rejects becomes an
// all-padding row and is counted in NewsBatch::unencoded; callers
// must check that count before using the batch.
//
// Reference: burn Book §4 (Batcher)

use std::sync::Arc;

use burn::{
    data::dataloader::batcher::Batcher,
    tensor::{backend::Backend, Int, Tensor, TensorData},
};

use crate::data::dataset::NewsSample;
use crate::domain::{topic::Topic, traits::TokenEncoder};

// ─── NewsBatch ────────────────────────────────────────────────────────────────
/// A batch of AG News samples. All tensors share batch_size as
/// their first dimension.
#[derive(Debug, Clone)]
pub struct NewsBatch<B: Backend> {
    /// Padded token id sequences: [batch_size, max_seq_len]
    pub token_ids: Tensor<B, 2, Int>,

    /// 1 = real token, 0 = padding: [batch_size, max_seq_len]
    pub attention_mask: Tensor<B, 2, Int>,

    /// One-hot targets: [batch_size, 4]
    pub one_hot: Tensor<B, 2>,

    /// Class indices: [batch_size]
    pub labels: Tensor<B, 1, Int>,

    /// The cleaned texts the rows were built from
    pub texts: Vec<String>,

    /// Rows whose text could not be tokenised (left as padding)
    pub unencoded: usize,
}

// ─── NewsBatcher ──────────────────────────────────────────────────────────────
#[derive(Clone)]
pub struct NewsBatcher<B: Backend> {
    encoder:     Arc<dyn TokenEncoder>,
    max_seq_len: usize,
    device:      B::Device,
}

impl<B: Backend> NewsBatcher<B> {
    pub fn new(encoder: Arc<dyn TokenEncoder>, max_seq_len: usize, device: B::Device) -> Self {
        Self { encoder, max_seq_len, device }
    }

    /// Token ids and mask for one text, both exactly max_seq_len long.
    /// `None` when the encoder rejects the text.
    fn encode_row(&self, text: &str) -> Option<(Vec<i64>, Vec<i64>)> {
        let mut ids = match self.encoder.encode(text) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Could not tokenise '{}': {}", text, e);
                return None;
            }
        };
        ids.truncate(self.max_seq_len);

        let real = ids.len();
        let pad  = i64::from(self.encoder.pad_id());

        let mut row: Vec<i64> = ids.into_iter().map(i64::from).collect();
        row.resize(self.max_seq_len, pad);

        let mut mask = vec![1i64; real];
        mask.resize(self.max_seq_len, 0);

        Some((row, mask))
    }
}

impl<B: Backend> Batcher<NewsSample, NewsBatch<B>> for NewsBatcher<B> {
    fn batch(&self, items: Vec<NewsSample>) -> NewsBatch<B> {
        let batch_size = items.len();

        let mut ids_flat  = Vec::with_capacity(batch_size * self.max_seq_len);
        let mut mask_flat = Vec::with_capacity(batch_size * self.max_seq_len);
        let mut hot_flat  = Vec::with_capacity(batch_size * Topic::COUNT);
        let mut labels    = Vec::with_capacity(batch_size);
        let mut texts     = Vec::with_capacity(batch_size);
        let mut unencoded = 0usize;

        for item in items {
            match self.encode_row(&item.text) {
                Some((row, mask)) => {
                    ids_flat.extend(row);
                    mask_flat.extend(mask);
                }
                None => {
                    unencoded += 1;
                    let pad = i64::from(self.encoder.pad_id());
                    ids_flat.extend(std::iter::repeat(pad).take(self.max_seq_len));
                    mask_flat.extend(std::iter::repeat(0i64).take(self.max_seq_len));
                }
            }
            hot_flat.extend_from_slice(&item.one_hot);
            labels.push(item.label as i64);
            texts.push(item.text);
        }

        let token_ids = Tensor::<B, 2, Int>::from_data(
            TensorData::new(ids_flat, [batch_size, self.max_seq_len]),
            &self.device,
        );
        let attention_mask = Tensor::<B, 2, Int>::from_data(
            TensorData::new(mask_flat, [batch_size, self.max_seq_len]),
            &self.device,
        );
        let one_hot = Tensor::<B, 2>::from_data(
            TensorData::new(hot_flat, [batch_size, Topic::COUNT]),
            &self.device,
        );
        let labels = Tensor::<B, 1, Int>::from_data(
            TensorData::new(labels, [batch_size]),
            &self.device,
        );

        NewsBatch { token_ids, attention_mask, one_hot, labels, texts, unencoded }
    }
}
