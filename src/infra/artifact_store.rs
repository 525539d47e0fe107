// ============================================================
// Layer 6: Artifact Store
// ============================================================
// Writes the prepared dataset to an output directory:
//
//   prepared/
//     prep_config.json        ← the options used for this run
//     train.jsonl             ← one cleaned sample per line
//     valid.jsonl             ← only when --val-fraction > 0
//     test.jsonl
//
// JSON Lines keeps the files streamable and diff-friendly; each
// line looks like
//
//   {"text":"wall st bears claw back","label":2,"topic":"Business","one_hot":[0.0,0.0,1.0,0.0]}
//
// Saving the config next to the data means `preview` and any
// later training run can see exactly how the text was cleaned.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use crate::application::prepare_use_case::PrepConfig;
use crate::data::dataset::NewsSample;

const CONFIG_FILE: &str = "prep_config.json";

#[derive(Serialize)]
struct SampleRecord<'a> {
    text:    &'a str,
    label:   usize,
    topic:   &'static str,
    one_hot: &'a [f32],
}

/// Reads and writes prepared artifacts in one directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create the store, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write `{name}.jsonl` and return its path.
    pub fn write_samples(&self, name: &str, samples: &[NewsSample]) -> Result<PathBuf> {
        let path = self.dir.join(format!("{name}.jsonl"));
        let file = File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        for s in samples {
            let record = SampleRecord {
                text:    &s.text,
                label:   s.label,
                topic:   s.topic().map(|t| t.name()).unwrap_or("unknown"),
                one_hot: &s.one_hot,
            };
            serde_json::to_writer(&mut out, &record)?;
            out.write_all(b"\n")?;
        }
        out.flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Wrote {} samples to '{}'", samples.len(), path.display());
        Ok(path)
    }

    /// Read `{name}.jsonl` back into samples.
    pub fn read_samples(&self, name: &str) -> Result<Vec<NewsSample>> {
        let path = self.dir.join(format!("{name}.jsonl"));
        let file = File::open(&path)
            .with_context(|| format!("Cannot open '{}'", path.display()))?;

        let mut samples = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let sample: NewsSample = serde_json::from_str(&line)
                .with_context(|| format!("Bad JSON on line {} of '{}'", i + 1, path.display()))?;
            samples.push(sample);
        }
        Ok(samples)
    }

    /// Delete `{name}.jsonl` if it exists. Returns whether a file was removed.
    pub fn remove_samples(&self, name: &str) -> Result<bool> {
        let path = self.dir.join(format!("{name}.jsonl"));
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Cannot remove '{}'", path.display()))?;

        tracing::info!("Removed stale '{}'", path.display());
        Ok(true)
    }

    pub fn save_config(&self, cfg: &PrepConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved prep config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<PrepConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Run 'prepare' first.",
                path.display()
            )
        })?;

        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str, label: usize) -> NewsSample {
        let mut one_hot = vec![0.0; 4];
        one_hot[label] = 1.0;
        NewsSample { text: text.to_string(), label, one_hot }
    }

    #[test]
    fn test_jsonl_line_format() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path()).unwrap();
        let path  = store.write_samples("train", &[sample("oil prices rise", 2)]).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "{\"text\":\"oil prices rise\",\"label\":2,\"topic\":\"Business\",\"one_hot\":[0.0,0.0,1.0,0.0]}\n"
        );
    }

    #[test]
    fn test_samples_read_back() {
        let tmp     = tempfile::tempdir().unwrap();
        let store   = ArtifactStore::new(tmp.path()).unwrap();
        let samples = vec![sample("a", 0), sample("b", 3)];
        store.write_samples("test", &samples).unwrap();

        assert_eq!(store.read_samples("test").unwrap(), samples);
    }

    #[test]
    fn test_remove_samples() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path()).unwrap();
        store.write_samples("valid", &[sample("a", 1)]).unwrap();

        assert!(store.remove_samples("valid").unwrap());
        assert!(!tmp.path().join("valid.jsonl").exists());
        assert!(!store.remove_samples("valid").unwrap());
    }

    #[test]
    fn test_config_persists() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path().join("nested/out")).unwrap();

        let cfg = PrepConfig { remove_stopwords: true, ..PrepConfig::default() };
        store.save_config(&cfg).unwrap();

        let loaded = store.load_config().unwrap();
        assert!(loaded.remove_stopwords);
        assert_eq!(loaded.vocab_size, cfg.vocab_size);
    }

    #[test]
    fn test_missing_config_hints_at_prepare() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path()).unwrap();
        let err   = store.load_config().unwrap_err();
        assert!(err.to_string().contains("prepare"));
    }
}
