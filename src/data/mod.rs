// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between a CSV file on disk and a tensor batch.
//
//   train.csv / test.csv
//       │
//       ▼
//   CsvNewsLoader     → reads rows (label, title, description)
//       │
//       ▼
//   FieldMode::stack  → one (label, text) pair per title/description
//       │
//       ▼
//   TextCleaner       → lowercase, strip URLs/HTML/punctuation/digits
//       │
//       ▼
//   LabelEncoder      → 1..=4 → 0..=3 plus one-hot vector
//       │
//       ▼
//   NewsDataset       → implements burn's Dataset trait
//       │
//       ▼
//   NewsBatcher       → token ids, mask and one-hot tensors
//
// AgNewsCorpus runs the first five steps for one split.

/// Reads AG News CSV split files
pub mod loader;

/// Text normalisation
pub mod preprocessor;

/// English stopword list
pub mod stopwords;

/// Raw label → class index → one-hot
pub mod encoder;

/// burn Dataset over cleaned samples
pub mod dataset;

/// Load + clean + encode for one split
pub mod corpus;

/// burn Batcher producing tensor batches
pub mod batcher;

/// Seeded shuffle and train/validation split
pub mod splitter;
