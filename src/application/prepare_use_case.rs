// ============================================================
// Layer 2: PrepareUseCase
// ============================================================
// Orchestrates the full preprocessing run:
//
//   Step 1: Load, clean and encode each split   (Layer 4 - data)
//   Step 2: Carve a validation set from train   (Layer 4 - data)
//   Step 3: Build / load the vocabulary         (Layer 6 - infra)
//   Step 4: Write JSONL files and class report  (Layer 6 - infra)
//   Step 5: Save config                         (Layer 6 - infra)
//
// The vocabulary is always rebuilt from the training texts when
// train is part of the run. A test-only run reuses the
// tokenizer.json of an earlier run so both splits share ids.
//
// Sample files an earlier run left behind are deleted in Step 4.
// prep_config.json only describes the latest run, so a stale
// valid.jsonl would hold samples that are now also in train.jsonl.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    corpus::AgNewsCorpus,
    dataset::{class_counts, NewsSample},
    loader::CsvNewsLoader,
    preprocessor::TextCleaner,
    splitter::split_train_val,
};
use crate::domain::{
    article::FieldMode,
    topic::Split,
    traits::TokenEncoder,
};
use crate::infra::{
    artifact_store::ArtifactStore,
    report::{ClassCounts, ClassReport},
    vocab_store::{VocabStore, Vocabulary, UNK_TOKEN},
};

/// Every sample file name `prepare` can write
const OUTPUT_NAMES: [&str; 3] = ["train", "valid", "test"];

// ─── Prepare Configuration ───────────────────────────────────────────────────
// Saved as prep_config.json next to the outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    pub data_dir:         String,
    pub out_dir:          String,
    pub splits:           Vec<Split>,
    pub remove_stopwords: bool,
    pub field_mode:       FieldMode,
    pub keep_empty:       bool,
    pub val_fraction:     f64,
    pub seed:             u64,
    pub vocab_size:       usize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            data_dir:         "data/ag_news_csv".to_string(),
            out_dir:          "prepared".to_string(),
            splits:           vec![Split::Train, Split::Test],
            remove_stopwords: false,
            field_mode:       FieldMode::Both,
            keep_empty:       false,
            val_fraction:     0.0,
            seed:             42,
            vocab_size:       30_000,
        }
    }
}

impl PrepConfig {
    pub fn cleaner(&self) -> TextCleaner {
        if self.remove_stopwords {
            TextCleaner::with_stopwords()
        } else {
            TextCleaner::new()
        }
    }
}

/// What one written file contains
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSummary {
    pub name:     String,
    pub samples:  usize,
    /// Fraction of tokens that fell outside the vocabulary
    pub unk_rate: f64,
}

#[derive(Debug, Clone)]
pub struct PrepareSummary {
    pub outputs:    Vec<OutputSummary>,
    pub vocab_size: usize,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareSummary> {
        let cfg = &self.config;
        ensure!(!cfg.splits.is_empty(), "no split selected");
        ensure!(
            (0.0..1.0).contains(&cfg.val_fraction),
            "val_fraction must be in [0, 1), got {}",
            cfg.val_fraction
        );
        ensure!(cfg.vocab_size > 2, "vocab_size must leave room for [PAD] and [UNK]");

        // ── Step 1: Load, clean, encode ──────────────────────────────────────
        tracing::info!("Loading AG News from '{}'", cfg.data_dir);
        let corpus = AgNewsCorpus::new(
            CsvNewsLoader::new(&cfg.data_dir),
            cfg.cleaner(),
            cfg.field_mode,
        )
        .with_keep_empty(cfg.keep_empty);

        // (output name, samples) in the order they will be written
        let mut outputs: Vec<(String, Vec<NewsSample>)> = Vec::new();

        for &split in &cfg.splits {
            let samples = corpus.load_dataset(split)?.into_samples();

            // ── Step 2: Validation split (train only) ─────────────────────────
            if split == Split::Train && cfg.val_fraction > 0.0 {
                let (train, valid) = split_train_val(samples, 1.0 - cfg.val_fraction, cfg.seed);
                tracing::info!("Split train: {} train, {} valid", train.len(), valid.len());
                outputs.push(("train".to_string(), train));
                outputs.push(("valid".to_string(), valid));
            } else {
                outputs.push((split.to_string(), samples));
            }
        }

        // ── Step 3: Vocabulary ───────────────────────────────────────────────
        let vocab_store = VocabStore::new(&cfg.out_dir);
        let vocab = match outputs.iter().find(|(name, _)| name == "train") {
            Some((_, train)) => {
                let texts: Vec<String> = train.iter().map(|s| s.text.clone()).collect();
                vocab_store.build_and_save(&texts, cfg.vocab_size)?
            }
            None => {
                if !vocab_store.path().exists() {
                    tracing::warn!(
                        "No training vocabulary in '{}', building one from {}",
                        cfg.out_dir,
                        outputs.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>().join(", ")
                    );
                }
                let texts: Vec<String> = outputs
                    .iter()
                    .flat_map(|(_, s)| s.iter().map(|s| s.text.clone()))
                    .collect();
                vocab_store.load_or_build(&texts, cfg.vocab_size)?
            }
        };

        // ── Step 4: Write samples and class report ───────────────────────────
        let store  = ArtifactStore::new(&cfg.out_dir)?;
        for stale in OUTPUT_NAMES {
            if !outputs.iter().any(|(name, _)| name == stale) {
                store.remove_samples(stale)?;
            }
        }

        let report = ClassReport::create(&cfg.out_dir)?;
        let mut summaries = Vec::with_capacity(outputs.len());

        for (name, samples) in &outputs {
            store.write_samples(name, samples)?;

            report.log(&ClassCounts::new(name.clone(), class_counts(samples)))?;

            summaries.push(OutputSummary {
                name:     name.clone(),
                samples:  samples.len(),
                unk_rate: unk_rate(&vocab, samples)?,
            });
        }

        // ── Step 5: Save config ──────────────────────────────────────────────
        store.save_config(cfg)?;

        Ok(PrepareSummary {
            outputs:    summaries,
            vocab_size: vocab.vocab_size(),
        })
    }
}

/// Share of tokens encoded as [UNK]
fn unk_rate(vocab: &Vocabulary, samples: &[NewsSample]) -> Result<f64> {
    let unk = vocab.id_of(UNK_TOKEN);
    let mut total   = 0usize;
    let mut unknown = 0usize;

    for s in samples {
        let ids = vocab.encode(&s.text)?;
        total   += ids.len();
        unknown += ids.iter().filter(|&&id| Some(id) == unk).count();
    }

    Ok(if total == 0 { 0.0 } else { unknown as f64 / total as f64 })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    const TRAIN_CSV: &str = "\
\"3\",\"Wall St. Bears Claw Back Into the Black (Reuters)\",\"Reuters - Short-sellers, Wall Street's dwindling\\band of ultra-cynics, are seeing green again.\"
\"2\",\"Nets get Carter from Raptors\",\"INDIANAPOLIS -- All-Star Vince Carter was traded by the Toronto Raptors.\"
\"1\",\"Talks resume in Geneva\",\"Diplomats met again on Monday.\"
\"4\",\"New chip unveiled\",\"A faster chip was shown at <b>the</b> fair, see www.example.com\"
";

    const TEST_CSV: &str = "\
\"3\",\"Fears for T N pension after talks\",\"Unions representing workers at Turner   Newall say they are 'disappointed'.\"
";

    fn write_dataset(dir: &Path) {
        fs::write(dir.join("train.csv"), TRAIN_CSV).unwrap();
        fs::write(dir.join("test.csv"), TEST_CSV).unwrap();
    }

    fn config(data: &Path, out: &Path) -> PrepConfig {
        PrepConfig {
            data_dir: data.display().to_string(),
            out_dir:  out.display().to_string(),
            ..PrepConfig::default()
        }
    }

    #[test]
    fn test_writes_train_and_test() {
        let data = tempfile::tempdir().unwrap();
        let out  = tempfile::tempdir().unwrap();
        write_dataset(data.path());

        let summary = PrepareUseCase::new(config(data.path(), out.path())).execute().unwrap();

        let names: Vec<&str> = summary.outputs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["train", "test"]);
        // 4 rows → 4 titles + 4 descriptions
        assert_eq!(summary.outputs[0].samples, 8);
        assert_eq!(summary.outputs[1].samples, 2);
        assert_eq!(summary.outputs[0].unk_rate, 0.0);

        let store = ArtifactStore::new(out.path()).unwrap();
        let train = store.read_samples("train").unwrap();
        assert_eq!(train[0].text, "wall st bears claw back into the black reuters");
        assert_eq!(train[0].label, 2);
        // tags go, the text between them stays
        assert_eq!(train[7].text, "a faster chip was shown at the fair see");

        assert!(out.path().join("tokenizer.json").exists());
        assert!(out.path().join("class_distribution.csv").exists());
        assert!(store.load_config().is_ok());
    }

    #[test]
    fn test_validation_split() {
        let data = tempfile::tempdir().unwrap();
        let out  = tempfile::tempdir().unwrap();
        write_dataset(data.path());

        let cfg = PrepConfig {
            splits:       vec![Split::Train],
            val_fraction: 0.25,
            ..config(data.path(), out.path())
        };
        let summary = PrepareUseCase::new(cfg).execute().unwrap();

        let sizes: Vec<(&str, usize)> = summary
            .outputs
            .iter()
            .map(|o| (o.name.as_str(), o.samples))
            .collect();
        assert_eq!(sizes, [("train", 6), ("valid", 2)]);
    }

    #[test]
    fn test_rerun_without_validation_removes_old_valid_file() {
        let data = tempfile::tempdir().unwrap();
        let out  = tempfile::tempdir().unwrap();
        write_dataset(data.path());

        let with_valid = PrepConfig {
            splits:       vec![Split::Train],
            val_fraction: 0.5,
            ..config(data.path(), out.path())
        };
        PrepareUseCase::new(with_valid).execute().unwrap();
        assert!(out.path().join("valid.jsonl").exists());

        let without_valid = PrepConfig {
            splits: vec![Split::Train],
            ..config(data.path(), out.path())
        };
        let summary = PrepareUseCase::new(without_valid).execute().unwrap();

        assert_eq!(summary.outputs.len(), 1);
        assert_eq!(summary.outputs[0].samples, 8);
        assert!(!out.path().join("valid.jsonl").exists());
        assert!(ArtifactStore::new(out.path()).unwrap().read_samples("valid").is_err());
    }

    #[test]
    fn test_stopwords_option() {
        let data = tempfile::tempdir().unwrap();
        let out  = tempfile::tempdir().unwrap();
        write_dataset(data.path());

        let cfg = PrepConfig {
            splits:           vec![Split::Test],
            remove_stopwords: true,
            ..config(data.path(), out.path())
        };
        PrepareUseCase::new(cfg).execute().unwrap();

        let test = ArtifactStore::new(out.path()).unwrap().read_samples("test").unwrap();
        assert_eq!(test[0].text, "fears n pension talks");
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let out = tempfile::tempdir().unwrap();
        let cfg = config(Path::new("/definitely/not/here"), out.path());
        assert!(PrepareUseCase::new(cfg).execute().is_err());
    }

    #[test]
    fn test_rejects_bad_val_fraction() {
        let cfg = PrepConfig { val_fraction: 1.0, ..PrepConfig::default() };
        assert!(PrepareUseCase::new(cfg).execute().is_err());
    }
}
