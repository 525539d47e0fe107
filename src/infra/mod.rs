// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Files written next to the prepared data:
//
//   vocab_store.rs    - word-level vocabulary as a HuggingFace
//                       tokenizer.json, loaded with the
//                       tokenizers crate
//
//   artifact_store.rs - JSONL sample files and the JSON prep
//                       config
//
//   report.rs         - per-split class distribution CSV
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Vocabulary building, saving and loading
pub mod vocab_store;

/// Prepared samples and config on disk
pub mod artifact_store;

/// Class distribution CSV
pub mod report;
