// ============================================================
// Layer 2: PreviewUseCase
// ============================================================
// Feeds a prepared JSONL file through burn's DataLoader exactly
// as a training loop would, and reports what the first batches
// look like. Useful to check padding length and label balance
// before committing to a long run.

use std::sync::Arc;

use anyhow::{anyhow, ensure, Result};
use burn::{
    backend::{ndarray::NdArrayDevice, NdArray},
    data::dataloader::DataLoaderBuilder,
    tensor::{Int, Tensor},
};

use crate::data::{batcher::NewsBatcher, dataset::NewsDataset};
use crate::infra::{artifact_store::ArtifactStore, vocab_store::VocabStore};

type PreviewBackend = NdArray;

#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub out_dir:     String,
    /// Which prepared file to read (`train`, `valid` or `test`)
    pub name:        String,
    pub batch_size:  usize,
    pub max_seq_len: usize,
    pub batches:     usize,
    pub seed:        u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            out_dir:     "prepared".to_string(),
            name:        "train".to_string(),
            batch_size:  8,
            max_seq_len: 64,
            batches:     2,
            seed:        42,
        }
    }
}

/// Summary of one batch produced by the DataLoader
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPreview {
    pub token_shape:   [usize; 2],
    pub one_hot_shape: [usize; 2],
    pub labels:        Vec<i64>,
    /// Share of positions that are padding
    pub padding:       f64,
    pub first_text:    String,
}

pub struct PreviewUseCase {
    config: PreviewConfig,
}

impl PreviewUseCase {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vec<BatchPreview>> {
        let cfg = &self.config;
        ensure!(cfg.batch_size > 0, "batch_size must be positive");
        ensure!(cfg.max_seq_len > 0, "max_seq_len must be positive");

        let store = ArtifactStore::new(&cfg.out_dir)?;
        let prep  = store.load_config()?;
        tracing::info!(
            "Previewing '{}' (stopwords removed: {}, fields: {:?})",
            cfg.name,
            prep.remove_stopwords,
            prep.field_mode
        );

        let samples = store.read_samples(&cfg.name)?;
        let vocab_store = VocabStore::new(&cfg.out_dir);
        let vocab       = vocab_store.load()?;

        let device  = NdArrayDevice::default();
        let batcher = NewsBatcher::<PreviewBackend>::new(Arc::new(vocab), cfg.max_seq_len, device);
        let loader  = DataLoaderBuilder::new(batcher)
            .batch_size(cfg.batch_size)
            .shuffle(cfg.seed)
            .num_workers(1)
            .build(NewsDataset::new(samples));

        let mut previews = Vec::with_capacity(cfg.batches);

        for (i, batch) in loader.iter().take(cfg.batches).enumerate() {
            ensure!(
                batch.unencoded == 0,
                "batch {}: {} of {} texts could not be tokenised with '{}'",
                i + 1,
                batch.unencoded,
                batch.texts.len(),
                vocab_store.path().display()
            );

            let token_shape   = batch.token_ids.dims();
            let one_hot_shape = batch.one_hot.dims();

            let labels: Vec<i64> = batch
                .labels
                .into_data()
                .convert::<i64>()
                .to_vec()
                .map_err(|e| anyhow!("Cannot read labels: {e:?}"))?;

            previews.push(BatchPreview {
                token_shape,
                one_hot_shape,
                labels,
                padding: padding_share(batch.attention_mask)?,
                first_text: batch.texts.first().cloned().unwrap_or_default(),
            });
        }

        Ok(previews)
    }
}

fn padding_share(mask: Tensor<PreviewBackend, 2, Int>) -> Result<f64> {
    let values: Vec<i64> = mask
        .into_data()
        .convert::<i64>()
        .to_vec()
        .map_err(|e| anyhow!("Cannot read attention mask: {e:?}"))?;

    if values.is_empty() {
        return Ok(0.0);
    }
    let real: i64 = values.iter().sum();
    Ok(1.0 - real as f64 / values.len() as f64)
}
