// ============================================================
// Layer 6: Class Distribution Report
// ============================================================
// Records how many samples of each topic ended up in every
// prepared split.
//
// Output file: {out_dir}/class_distribution.csv
//
//   split,topic,count,fraction
//   train,World,54000,0.250000
//   train,Sports,54000,0.250000
//   ...
//
// AG News is balanced, so a skewed row here usually means the
// wrong file was loaded or rows were dropped during cleaning.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::domain::topic::Topic;

const FILE_NAME: &str = "class_distribution.csv";

/// Class counts for one named split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCounts {
    pub split:  String,
    pub counts: [usize; Topic::COUNT],
}

impl ClassCounts {
    pub fn new(split: impl Into<String>, counts: [usize; Topic::COUNT]) -> Self {
        Self { split: split.into(), counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of `topic` in this split, 0.0 for an empty split
    pub fn fraction(&self, topic: Topic) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.counts[topic.index()] as f64 / total as f64
    }
}

pub struct ClassReport {
    csv_path: PathBuf,
}

impl ClassReport {
    /// Start a fresh report, replacing any previous one.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join(FILE_NAME);
        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "split,topic,count,fraction")?;

        Ok(Self { csv_path })
    }

    /// Append one row per topic for this split.
    pub fn log(&self, c: &ClassCounts) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;

        for topic in Topic::ALL {
            writeln!(
                f,
                "{},{},{},{:.6}",
                c.split,
                topic.name(),
                c.counts[topic.index()],
                c.fraction(topic),
            )?;
        }

        tracing::debug!("Logged class distribution for '{}' ({} samples)", c.split, c.total());
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
