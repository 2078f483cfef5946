use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use ecj_fitness::{
    locator::{self, LogNaming},
    report,
};

use crate::util::Output;

use self::generations::RowCount;

mod generations;

/// Collect per-generation fitness from ECJ seed runs into one CSV table
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Seed run directories, each holding an `ecj<seed>.log`
    dirs: Vec<PathBuf>,

    /// Output CSV file (`-` writes to stdout)
    #[arg(long, default_value = "fitnesses.csv")]
    output: PathBuf,

    /// Number of generation rows to write instead of prompting
    #[arg(long, conflicts_with = "infer_generations")]
    generations: Option<usize>,

    /// Use the first seed's generation count instead of prompting
    #[arg(long)]
    infer_generations: bool,

    /// Log file name prefix
    #[arg(long, default_value = "ecj")]
    log_prefix: String,

    /// Log file name suffix
    #[arg(long, default_value = ".log")]
    log_suffix: String,
}

impl CommandArgs {
    fn row_count(&self) -> RowCount {
        match (self.generations, self.infer_generations) {
            (Some(count), _) => RowCount::Fixed(count),
            (None, true) => RowCount::FirstSeed,
            (None, false) => RowCount::Prompt,
        }
    }

    fn log_naming(&self) -> LogNaming {
        LogNaming {
            prefix: self.log_prefix.clone(),
            suffix: self.log_suffix.clone(),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let runs = locator::locate_seed_runs(&args.dirs, &args.log_naming())
        .context("Failed to collect seed runs")?;

    let generations = args
        .row_count()
        .resolve(&runs, io::stdin().lock(), io::stderr())
        .context("Failed to determine the number of generations")?;

    let mut output = Output::from_output_path(&args.output)?;
    report::write_csv(&mut output, &runs, generations)
        .with_context(|| format!("Failed to write report to {}", output.display_path()))?;

    log::info!(
        "wrote {generations} generations for {} seeds to {}",
        runs.len(),
        output.display_path()
    );

    Ok(())
}
