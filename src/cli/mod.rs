// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
// This is the only layer that prints to stdout.
//
//   1. `prepare` - CSV → cleaned JSONL + vocabulary + reports
//   2. `preview` - prepared JSONL → DataLoader batches
//   3. `clean`   - one string through the cleaner
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CleanArgs, Commands, PrepareArgs, PreviewArgs};

#[derive(Parser, Debug)]
#[command(
    name = "agnews-prep",
    version,
    about = "Clean and label-encode the AG News dataset for training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Preview(args) => run_preview(args),
            Commands::Clean(args)   => run_clean(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let out_dir = args.out_dir.clone();
    let summary = PrepareUseCase::new(args.into()).execute()?;

    println!("Prepared dataset in '{out_dir}' (vocabulary: {} tokens)", summary.vocab_size);
    for o in &summary.outputs {
        println!(
            "  {:<6} {:>7} samples | unk {:>5.1}%",
            o.name,
            o.samples,
            o.unk_rate * 100.0
        );
    }
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    use crate::application::preview_use_case::PreviewUseCase;

    let previews = PreviewUseCase::new(args.into()).execute()?;
    if previews.is_empty() {
        println!("No batches: the prepared file is empty.");
        return Ok(());
    }

    for (i, p) in previews.iter().enumerate() {
        println!(
            "Batch {:>2} | tokens {:?} | one_hot {:?} | padding {:.1}% | labels {:?}",
            i + 1,
            p.token_shape,
            p.one_hot_shape,
            p.padding * 100.0,
            p.labels,
        );
        println!("          first: \"{}\"", p.first_text);
    }
    Ok(())
}

fn run_clean(args: CleanArgs) -> Result<()> {
    use crate::application::clean_use_case::CleanUseCase;

    println!("{}", CleanUseCase::new(args.remove_stopwords).execute(&args.text));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prepare_use_case::PrepConfig;
    use crate::domain::{article::FieldMode, topic::Split};

    #[test]
    fn test_prepare_defaults() {
        let cli = Cli::try_parse_from(["agnews-prep", "prepare"]).unwrap();
        let Commands::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        let cfg: PrepConfig = args.into();
        assert_eq!(cfg.splits, vec![Split::Train, Split::Test]);
        assert_eq!(cfg.field_mode, FieldMode::Both);
        assert!(!cfg.remove_stopwords);
        assert_eq!(cfg.val_fraction, 0.0);
    }

    #[test]
    fn test_prepare_flags() {
        let cli = Cli::try_parse_from([
            "agnews-prep", "prepare",
            "--split", "test",
            "--remove-stopwords",
            "--fields", "combined",
            "--val-fraction", "0.1",
        ])
        .unwrap();
        let Commands::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        let cfg: PrepConfig = args.into();
        assert_eq!(cfg.splits, vec![Split::Test]);
        assert_eq!(cfg.field_mode, FieldMode::Combined);
        assert!(cfg.remove_stopwords);
        assert_eq!(cfg.val_fraction, 0.1);
    }

    #[test]
    fn test_unknown_split_rejected() {
        assert!(Cli::try_parse_from(["agnews-prep", "prepare", "--split", "valid"]).is_err());
    }

    #[test]
    fn test_clean_takes_positional_text() {
        let cli = Cli::try_parse_from(["agnews-prep", "clean", "Hello, World!"]).unwrap();
        assert!(matches!(cli.command, Commands::Clean(ref a) if a.text == "Hello, World!"));
    }
}
