// ============================================================
// Layer 4: CSV Loader
// ============================================================
// Reads `{data_dir}/train.csv` or `{data_dir}/test.csv`.
//
// AG News CSV files have no header and exactly three columns:
//
//   "3","Wall St. Bears Claw Back Into the Black (Reuters)","Reuters - Short-sellers, ..."
//    │   │                                                   │
//    │   title                                               description
//    raw label (1..=4)
//
// Titles and descriptions routinely contain commas and escaped
// quotes, so parsing is left to the csv crate rather than split(',').
//
// Unlike a directory of optional documents, a missing split file
// means the dataset is not where the user said it is. That is an
// error, as is any row that does not have three columns or whose
// label is not an integer.
//
// Reference: csv crate documentation (ReaderBuilder, StringRecord)

use anyhow::{ensure, Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::{article::RawArticle, topic::Split, traits::ArticleSource};

/// Loads AG News split files from a directory.
pub struct CsvNewsLoader {
    dir: PathBuf,
}

impl CsvNewsLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the CSV file for a split
    pub fn split_path(&self, split: Split) -> PathBuf {
        self.dir.join(split.file_name())
    }
}

impl ArticleSource for CsvNewsLoader {
    fn load_split(&self, split: Split) -> Result<Vec<RawArticle>> {
        let path = self.split_path(split);
        ensure!(
            path.is_file(),
            "AG News {} file not found at '{}'",
            split,
            path.display()
        );

        let articles = read_articles(&path)?;
        tracing::info!(
            "Read {} rows from '{}'",
            articles.len(),
            path.display()
        );
        Ok(articles)
    }
}

/// Parse every row of a header-less three-column CSV file.
fn read_articles(path: &Path) -> Result<Vec<RawArticle>> {
    // flexible(true) lets short/long rows reach our own check,
    // which reports the row number in a readable way
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;

    let mut articles = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result
            .with_context(|| format!("Malformed CSV at row {row} of '{}'", path.display()))?;

        ensure!(
            record.len() == 3,
            "Row {row} of '{}' has {} columns, expected 3 (label, title, description)",
            path.display(),
            record.len()
        );

        let label: i64 = record[0]
            .trim()
            .parse()
            .with_context(|| {
                format!(
                    "Row {row} of '{}' has a non-integer label '{}'",
                    path.display(),
                    &record[0]
                )
            })?;

        articles.push(RawArticle::new(label, &record[1], &record[2]));
    }

    Ok(articles)
}
