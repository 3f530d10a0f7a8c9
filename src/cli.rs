use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::samples::{DEFAULT_ROWS, DEFAULT_SEED};

#[derive(Debug, Parser)]
#[command(name = "klara-report", version, about = "IVF cycle prediction report renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the report page and optional side outputs
    Render(RenderArgs),
    /// Print the demonstration sample columns and their distributions
    Columns,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(long, help = "Output directory for report.html and side outputs")]
    pub out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_SEED, help = "Seed for the demonstration samples")]
    pub seed: u64,

    #[arg(long, default_value_t = DEFAULT_ROWS, help = "Number of synthetic sample rows")]
    pub rows: usize,

    #[arg(long, default_value_t = false, help = "Also write report.json")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Also write samples.tsv")]
    pub tsv: bool,
}
