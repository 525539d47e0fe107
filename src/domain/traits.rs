// ============================================================
// Layer 3: Core Traits
// ============================================================
// The corpus and the batcher are written against these traits
// rather than against the CSV loader or the tokenizers crate,
// so tests can hand them in-memory fakes.
//
//   - CsvNewsLoader implements ArticleSource
//   - Vocabulary    implements TokenEncoder
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::{article::RawArticle, topic::Split};

// ─── ArticleSource ────────────────────────────────────────────────────────────
/// Anything that can produce the raw rows of a dataset split.
pub trait ArticleSource {
    fn load_split(&self, split: Split) -> Result<Vec<RawArticle>>;
}

// ─── TokenEncoder ─────────────────────────────────────────────────────────────
/// Turns cleaned text into token ids for the batcher.
///
/// Must be `Send + Sync` because burn's DataLoader may batch
/// on worker threads.
pub trait TokenEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<u32>>;

    /// Id written into padding positions
    fn pad_id(&self) -> u32;

    fn vocab_size(&self) -> usize;
}
