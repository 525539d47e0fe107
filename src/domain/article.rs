// ============================================================
// Layer 3: Article Domain Types
// ============================================================
// A CSV row carries two pieces of text (title and description)
// that share one label. Before cleaning, rows are "stacked" into
// single-text records according to a FieldMode:
//
//   rows:    (3, "Title A", "Desc A"), (1, "Title B", "Desc B")
//
//   Both:    (3, "Title A"), (1, "Title B"), (3, "Desc A"), (1, "Desc B")
//   Combined:(3, "Title A Desc A"), (1, "Title B Desc B")
//
// Both is the default: all titles in file order, then all
// descriptions in file order. Every stacked text remembers the
// 1-based CSV row it came from, so errors can point at the file.

use serde::{Deserialize, Serialize};

/// One row of an AG News CSV file, before any cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    /// Raw 1-based class label as it appears in the file
    pub label: i64,
    pub title: String,
    pub description: String,
}

impl RawArticle {
    pub fn new(label: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label,
            title:       title.into(),
            description: description.into(),
        }
    }
}

/// A single text with the raw label of the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledText {
    /// 1-based row in the source file
    pub row:   usize,
    pub label: i64,
    pub text:  String,
}

impl LabelledText {
    pub fn new(row: usize, label: i64, text: impl Into<String>) -> Self {
        Self { row, label, text: text.into() }
    }
}

/// Which article columns become samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// Titles and descriptions as separate samples
    #[default]
    Both,
    Title,
    Description,
    /// Title and description joined into one sample per row
    Combined,
}

impl FieldMode {
    /// Stack articles into labelled texts.
    pub fn stack(self, articles: &[RawArticle]) -> Vec<LabelledText> {
        let rows = || articles.iter().enumerate().map(|(i, a)| (i + 1, a));
        let titles =
            || rows().map(|(row, a)| LabelledText::new(row, a.label, a.title.clone()));
        let descriptions =
            || rows().map(|(row, a)| LabelledText::new(row, a.label, a.description.clone()));

        match self {
            FieldMode::Both        => titles().chain(descriptions()).collect(),
            FieldMode::Title       => titles().collect(),
            FieldMode::Description => descriptions().collect(),
            FieldMode::Combined    => rows()
                .map(|(row, a)| {
                    LabelledText::new(row, a.label, format!("{} {}", a.title, a.description))
                })
                .collect(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawArticle> {
        vec![
            RawArticle::new(3, "Title A", "Desc A"),
            RawArticle::new(1, "Title B", "Desc B"),
        ]
    }

    #[test]
    fn test_both_puts_all_titles_before_descriptions() {
        let stacked = FieldMode::Both.stack(&rows());
        let texts: Vec<&str> = stacked.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Title A", "Title B", "Desc A", "Desc B"]);

        let labels: Vec<i64> = stacked.iter().map(|t| t.label).collect();
        assert_eq!(labels, [3, 1, 3, 1]);

        let source_rows: Vec<usize> = stacked.iter().map(|t| t.row).collect();
        assert_eq!(source_rows, [1, 2, 1, 2]);
    }

    #[test]
    fn test_single_column_modes() {
        assert_eq!(FieldMode::Title.stack(&rows())[1], LabelledText::new(2, 1, "Title B"));
        assert_eq!(FieldMode::Description.stack(&rows())[0], LabelledText::new(1, 3, "Desc A"));
    }

    #[test]
    fn test_combined_joins_with_space() {
        let stacked = FieldMode::Combined.stack(&rows());
        assert_eq!(stacked.len(), 2);
        assert_eq!(stacked[0].text, "Title A Desc A");
    }

    #[test]
    fn test_empty_input() {
        assert!(FieldMode::Both.stack(&[]).is_empty());
    }
}
