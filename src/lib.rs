//! Load, clean and label-encode the AG News text classification dataset.
//!
//! ```text
//! cli ─▶ application ─▶ data ─▶ domain
//!                   └─▶ infra
//! ```
//!
//! The core entry point is [`data::corpus::AgNewsCorpus::load_dataset`],
//! which turns `train.csv` / `test.csv` into a burn
//! [`Dataset`](burn::data::dataset::Dataset) of cleaned, one-hot encoded
//! samples.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
