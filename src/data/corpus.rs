// ============================================================
// Layer 4: AG News Corpus
// ============================================================
// Ties loader, cleaner and label encoder together:
//
//   split.csv ──load──▶ RawArticle ──stack──▶ LabelledText
//                                              │
//                        NewsSample ◀──encode──┴──clean──
//                            │
//                            ▼
//                       NewsDataset
//
// Cleaning can leave nothing behind (a title made only of
// numbers, for instance). Those samples are dropped by default
// because an empty sequence carries no signal for the model;
// `with_keep_empty(true)` keeps every row.

use anyhow::{Context, Result};

use crate::data::{
    dataset::{NewsDataset, NewsSample},
    encoder::LabelEncoder,
    preprocessor::TextCleaner,
};
use crate::domain::{
    article::FieldMode,
    topic::{Split, Topic},
    traits::ArticleSource,
};

/// The AG News dataset behind some `ArticleSource`.
pub struct AgNewsCorpus<S: ArticleSource> {
    source:     S,
    cleaner:    TextCleaner,
    field_mode: FieldMode,
    encoder:    LabelEncoder,
    keep_empty: bool,
}

impl<S: ArticleSource> AgNewsCorpus<S> {
    pub fn new(source: S, cleaner: TextCleaner, field_mode: FieldMode) -> Self {
        Self {
            source,
            cleaner,
            field_mode,
            encoder: LabelEncoder::new(),
            keep_empty: false,
        }
    }

    pub fn with_keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    /// Class names in index order
    pub fn classes() -> [&'static str; Topic::COUNT] {
        Topic::ALL.map(Topic::name)
    }

    /// Load one split as a cleaned, label-encoded dataset.
    pub fn load_dataset(&self, split: Split) -> Result<NewsDataset> {
        let articles = self.source.load_split(split)?;
        let stacked  = self.field_mode.stack(&articles);
        tracing::debug!(
            "{}: {} rows stacked into {} texts ({:?})",
            split,
            articles.len(),
            stacked.len(),
            self.field_mode
        );

        let mut samples = Vec::with_capacity(stacked.len());
        let mut dropped = 0usize;

        for item in &stacked {
            let (label, one_hot) = self
                .encoder
                .encode_one_hot(item.label)
                .with_context(|| format!("{split} row {}: bad label", item.row))?;

            let text = self.cleaner.clean(&item.text);
            if text.is_empty() && !self.keep_empty {
                dropped += 1;
                continue;
            }

            samples.push(NewsSample { text, label, one_hot });
        }

        if dropped > 0 {
            tracing::debug!("{}: dropped {} samples that were empty after cleaning", split, dropped);
        }
        tracing::info!("{}: {} samples ready", split, samples.len());

        Ok(NewsDataset::new(samples))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::RawArticle;
    use burn::data::dataset::Dataset;

    struct InMemorySource(Vec<RawArticle>);

    impl ArticleSource for InMemorySource {
        fn load_split(&self, _split: Split) -> Result<Vec<RawArticle>> {
            Ok(self.0.clone())
        }
    }

    fn corpus(rows: Vec<RawArticle>) -> AgNewsCorpus<InMemorySource> {
        AgNewsCorpus::new(InMemorySource(rows), TextCleaner::new(), FieldMode::Both)
    }

    #[test]
    fn test_titles_then_descriptions_with_shifted_labels() {
        let ds = corpus(vec![
            RawArticle::new(3, "Wall St. Bears", "Short-sellers are back."),
            RawArticle::new(2, "Nets get Carter", "Vince Carter was traded."),
        ])
        .load_dataset(Split::Train)
        .unwrap();

        let texts: Vec<String> = ds.iter().map(|s| s.text).collect();
        assert_eq!(
            texts,
            ["wall st bears", "nets get carter", "shortsellers are back", "vince carter was traded"]
        );

        let labels: Vec<usize> = ds.iter().map(|s| s.label).collect();
        assert_eq!(labels, [2, 1, 2, 1]);
        assert_eq!(ds.get(0).unwrap().one_hot, vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_bad_label_fails_the_load() {
        let err = corpus(vec![RawArticle::new(7, "a", "b")])
            .load_dataset(Split::Test)
            .unwrap_err();
        assert!(format!("{err:#}").contains("outside the AG News range"));
    }

    #[test]
    fn test_bad_label_reports_csv_row() {
        let err = corpus(vec![
            RawArticle::new(1, "fine", "also fine"),
            RawArticle::new(2, "fine", "also fine"),
            RawArticle::new(9, "broken", "row"),
        ])
        .load_dataset(Split::Train)
        .unwrap_err();
        assert_eq!(err.to_string(), "train row 3: bad label");
    }

    #[test]
    fn test_empty_texts_dropped_unless_kept() {
        let rows = vec![RawArticle::new(1, "2004", "real words")];

        let dropped = corpus(rows.clone()).load_dataset(Split::Train).unwrap();
        assert_eq!(dropped.len(), 1);

        let kept = corpus(rows).with_keep_empty(true).load_dataset(Split::Train).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.get(0).unwrap().text, "");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(
            AgNewsCorpus::<InMemorySource>::classes(),
            ["World", "Sports", "Business", "Science/Technology"]
        );
    }
}
