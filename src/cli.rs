use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "drs-guard")]
#[command(author, version, about = "DRS guard - validate dataset layout against controlled vocabularies")]
#[command(long_about = "Validates that a dataset's directory layout and file naming conform to the \
    DRS template and that path-encoded values match per-file metadata attributes.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Compliance violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a dataset root for DRS compliance
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Dataset root directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Controlled-vocabulary store directory (overrides config)
    #[arg(long)]
    pub vocab_dir: Option<PathBuf>,

    /// Vocabulary authority namespace (overrides config)
    #[arg(long)]
    pub authority: Option<String>,

    /// Literal first segment of the directory template (overrides config)
    #[arg(long)]
    pub mip_era: Option<String>,

    /// Data file extension (overrides config)
    #[arg(long)]
    pub ext: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(default_value = "drs-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
