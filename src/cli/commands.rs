// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Defines the three subcommands (`prepare`, `preview`, `clean`)
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive documentation

use clap::{Args, Subcommand, ValueEnum};

use crate::application::{preview_use_case::PreviewConfig, prepare_use_case::PrepConfig};
use crate::domain::{article::FieldMode, topic::Split};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean and label-encode AG News CSV files into JSONL plus a vocabulary
    Prepare(PrepareArgs),

    /// Run prepared samples through the DataLoader and show the first batches
    Preview(PreviewArgs),

    /// Clean a single string and print the result
    Clean(CleanArgs),
}

/// `--split` values. `all` prepares train then test.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitArg {
    Train,
    Test,
    All,
}

impl SplitArg {
    pub fn splits(self) -> Vec<Split> {
        match self {
            SplitArg::Train => vec![Split::Train],
            SplitArg::Test  => vec![Split::Test],
            SplitArg::All   => vec![Split::Train, Split::Test],
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldArg {
    /// Titles and descriptions as separate samples
    Both,
    Title,
    Description,
    /// "title description" as one sample
    Combined,
}

impl From<FieldArg> for FieldMode {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Both        => FieldMode::Both,
            FieldArg::Title       => FieldMode::Title,
            FieldArg::Description => FieldMode::Description,
            FieldArg::Combined    => FieldMode::Combined,
        }
    }
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Directory containing train.csv and test.csv
    #[arg(long, default_value = "data/ag_news_csv")]
    pub data_dir: String,

    /// Directory for JSONL files, tokenizer.json and reports
    #[arg(long, default_value = "prepared")]
    pub out_dir: String,

    #[arg(long, value_enum, default_value_t = SplitArg::All)]
    pub split: SplitArg,

    /// Drop English stopwords after cleaning
    #[arg(long)]
    pub remove_stopwords: bool,

    /// Which article columns become samples
    #[arg(long, value_enum, default_value_t = FieldArg::Both)]
    pub fields: FieldArg,

    /// Keep samples whose text is empty after cleaning
    #[arg(long)]
    pub keep_empty: bool,

    /// Fraction of train held out as valid.jsonl (0 disables)
    #[arg(long, default_value_t = 0.0)]
    pub val_fraction: f64,

    /// Seed for the validation shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Vocabulary size including [PAD] and [UNK]
    #[arg(long, default_value_t = 30_000)]
    pub vocab_size: usize,
}

/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepConfig {
            data_dir:         a.data_dir,
            out_dir:          a.out_dir,
            splits:           a.split.splits(),
            remove_stopwords: a.remove_stopwords,
            field_mode:       a.fields.into(),
            keep_empty:       a.keep_empty,
            val_fraction:     a.val_fraction,
            seed:             a.seed,
            vocab_size:       a.vocab_size,
        }
    }
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Directory written by `prepare`
    #[arg(long, default_value = "prepared")]
    pub out_dir: String,

    /// Prepared file to read: train, valid or test
    #[arg(long, default_value = "train")]
    pub name: String,

    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    /// Token sequences are padded or truncated to this length
    #[arg(long, default_value_t = 64)]
    pub max_seq_len: usize,

    /// How many batches to show
    #[arg(long, default_value_t = 2)]
    pub batches: usize,

    /// DataLoader shuffle seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl From<PreviewArgs> for PreviewConfig {
    fn from(a: PreviewArgs) -> Self {
        PreviewConfig {
            out_dir:     a.out_dir,
            name:        a.name,
            batch_size:  a.batch_size,
            max_seq_len: a.max_seq_len,
            batches:     a.batches,
            seed:        a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Text to clean
    pub text: String,

    #[arg(long)]
    pub remove_stopwords: bool,
}
