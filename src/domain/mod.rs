// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust types describing the AG News dataset itself:
// which topics exist, which splits exist, what a CSV row
// looks like and what a single (text, label) pair is.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only structs, enums and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The four news topics and the train/test split selector
pub mod topic;

// A raw CSV row and the stacked (text, label) pair built from it
pub mod article;

// Abstractions implemented by the data and infra layers
pub mod traits;
