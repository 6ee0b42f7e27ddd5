use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Summary output format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Top-level CLI parser for the `housegen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "housegen",
    version,
    about = "Append synthetic rental listings to the paginated listing store"
)]
pub struct Cli {
    /// Number of listings to generate
    #[arg(
        value_parser = clap::value_parser!(u64).range(1..),
        allow_negative_numbers = true
    )]
    pub count: u64,

    /// Random seed (overrides generation.seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding the landmark corpora (overrides paths.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the slot files (overrides paths.store_dir)
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// Extra TOML config file, layered above ./housegen.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format: json, raw
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
