// ============================================================
// Layer 6: Vocabulary Store
// ============================================================
// Builds, saves and loads the word-level vocabulary used to turn
// cleaned text into token ids.
//
// The cleaner has already lowercased everything and removed
// punctuation, so a whitespace split is the whole tokenisation.
// The vocabulary is written as a HuggingFace tokenizer.json with
// a WordLevel model and loaded back through the tokenizers crate,
// which keeps the file usable from other tooling as well.
//
// Id layout:
//   0      [PAD]
//   1      [UNK]
//   2..    words, most frequent first (ties alphabetical)
//
// Reference: tokenizers crate documentation (WordLevel model)

use anyhow::{Context, Result};
use serde_json::json;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tokenizers::Tokenizer;

use crate::domain::traits::TokenEncoder;

pub const PAD_TOKEN: &str = "[PAD]";
pub const UNK_TOKEN: &str = "[UNK]";
const PAD_ID: u32 = 0;
const UNK_ID: u32 = 1;
const RESERVED: usize = 2;

const FILE_NAME: &str = "tokenizer.json";

// ─── Vocabulary ───────────────────────────────────────────────────────────────
/// A loaded word-level tokenizer.
#[derive(Clone)]
pub struct Vocabulary {
    tokenizer: Tokenizer,
}

impl Vocabulary {
    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.tokenizer.token_to_id(token)
    }
}

impl TokenEncoder for Vocabulary {
    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let enc = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;
        Ok(enc.get_ids().to_vec())
    }

    fn pad_id(&self) -> u32 {
        PAD_ID
    }

    fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(false)
    }
}

// ─── VocabStore ───────────────────────────────────────────────────────────────
pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(FILE_NAME)
    }

    /// Load an existing vocabulary, or build one from `texts`
    pub fn load_or_build(&self, texts: &[String], vocab_size: usize) -> Result<Vocabulary> {
        if self.path().exists() {
            tracing::info!("Loading existing vocabulary from '{}'", self.path().display());
            self.load()
        } else {
            tracing::info!("Building new vocabulary (vocab_size={})", vocab_size);
            self.build_and_save(texts, vocab_size)
        }
    }

    pub fn load(&self) -> Result<Vocabulary> {
        load_tokenizer(&self.path())
    }

    /// Count words, keep the `vocab_size - 2` most frequent, write
    /// tokenizer.json and load it back.
    pub fn build_and_save(&self, texts: &[String], vocab_size: usize) -> Result<Vocabulary> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        // ── Step 1: word frequencies ──────────────────────────────────────────
        let mut freq: HashMap<&str, usize> = HashMap::new();
        for text in texts {
            for word in text.split_whitespace() {
                *freq.entry(word).or_insert(0) += 1;
            }
        }

        let mut words: Vec<(&str, usize)> = freq
            .into_iter()
            .filter(|(w, _)| *w != PAD_TOKEN && *w != UNK_TOKEN)
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(vocab_size.saturating_sub(RESERVED));

        // ── Step 2: vocab map ─────────────────────────────────────────────────
        let mut vocab = serde_json::Map::new();
        vocab.insert(PAD_TOKEN.to_string(), json!(PAD_ID));
        vocab.insert(UNK_TOKEN.to_string(), json!(UNK_ID));
        for (i, (word, _)) in words.iter().enumerate() {
            vocab.insert(word.to_string(), json!(RESERVED + i));
        }
        let total = vocab.len();

        // ── Step 3: tokenizer.json in HuggingFace format ──────────────────────
        let tokenizer_json = json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [
                {"id": PAD_ID, "content": PAD_TOKEN, "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": UNK_ID, "content": UNK_TOKEN, "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
            ],
            "normalizer": null,
            "pre_tokenizer": { "type": "WhitespaceSplit" },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": UNK_TOKEN
            }
        });

        let path = self.path();
        fs::write(&path, serde_json::to_string_pretty(&tokenizer_json)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Vocabulary built with {} entries, saved to '{}'", total, path.display());

        load_tokenizer(&path)
    }
}

fn load_tokenizer(path: &Path) -> Result<Vocabulary> {
    let tokenizer = Tokenizer::from_file(path).map_err(|e| {
        anyhow::anyhow!("Cannot load vocabulary from '{}': {}", path.display(), e)
    })?;
    Ok(Vocabulary { tokenizer })
}
