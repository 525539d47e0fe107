// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Workflow coordination only: these modules call into the data
// and infra layers in the right order and return plain summary
// structs. Printing is left to the CLI.

// Load → clean → encode → export
pub mod prepare_use_case;

// Run prepared samples through burn's DataLoader
pub mod preview_use_case;

// Clean a single string
pub mod clean_use_case;
