// ============================================================
// Layer 4: Text Cleaner
// ============================================================
// Normalises a headline or description before it is counted
// into the vocabulary and tokenised.
//
// Cleaning steps (applied in order):
//   1. Lowercase
//   2. Remove bracketed spans          [ ... ]
//   3. Remove URLs                     http(s)://...  www....
//   4. Remove HTML-like tags           <b>, </a>, <br>>
//   5. Remove ASCII punctuation        !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
//   6. Remove newline characters
//   7. Remove any word containing a digit  ("2004", "mp3", "b2b")
//   8. Optionally drop English stopwords
//   9. Collapse whitespace and trim
//
// Order matters: URLs must go before punctuation, otherwise
// "http://x.com" would turn into "httpxcom" and survive.
//
// Step 6 deletes '\n' outright, so "line\nbreak" becomes
// "linebreak". AG News rows are single-line, which keeps this
// harmless in practice.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use regex::Regex;
use std::sync::LazyLock;

use crate::data::stopwords;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("bracket pattern is valid"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("url pattern is valid"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>+").expect("tag pattern is valid"));

static WORD_WITH_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w*\d\w*").expect("digit-word pattern is valid"));

/// Cleans raw AG News text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner {
    remove_stopwords: bool,
}

impl TextCleaner {
    /// Cleaner that keeps stopwords
    pub fn new() -> Self {
        Self { remove_stopwords: false }
    }

    /// Cleaner that also drops English stopwords
    pub fn with_stopwords() -> Self {
        Self { remove_stopwords: true }
    }

    /// Clean a raw string, returning an owned String.
    pub fn clean(&self, text: &str) -> String {
        // ── Steps 1-4: lowercase and pattern removal ──────────────────────────
        let text = text.to_lowercase();
        let text = BRACKETED.replace_all(&text, "");
        let text = URL.replace_all(&text, "");
        let text = HTML_TAG.replace_all(&text, "");

        // ── Steps 5-6: punctuation and newlines ───────────────────────────────
        // char::is_ascii_punctuation covers exactly the 32 ASCII
        // punctuation characters listed above
        let text: String = text
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && *c != '\n')
            .collect();

        // ── Step 7: words containing digits ───────────────────────────────────
        let text = WORD_WITH_DIGIT.replace_all(&text, "");

        // ── Steps 8-9: stopwords and whitespace ───────────────────────────────
        let words = text.split_whitespace();
        if self.remove_stopwords {
            words
                .filter(|w| !stopwords::is_stopword(w))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            words.collect::<Vec<_>>().join(" ")
        }
    }
}
