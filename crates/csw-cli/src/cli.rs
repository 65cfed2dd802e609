//! CLI argument definitions for the code-switching benchmark builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csw-bench",
    version,
    about = "Code-switched benchmark builder",
    long_about = "Build code-switched variants of parallel-language benchmarks.\n\n\
                  Reads a CSV with parallel source/target text columns, replaces\n\
                  selected source spans with target-language text, and writes the\n\
                  table back with one new mixed-language column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a code-switched column by replacing noun tokens.
    NounToken(RunArgs),

    /// Build a code-switched column by replacing a fixed fraction of tokens.
    RatioToken(RatioArgs),

    /// List available switching methods.
    Methods,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the input CSV with parallel text columns.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Name of the source-language text column.
    #[arg(long = "source-column", value_name = "NAME")]
    pub source_column: String,

    /// Name of a parallel target-language text column (repeat for
    /// multi-language switching).
    #[arg(long = "target-column", value_name = "NAME", required = true)]
    pub target_columns: Vec<String>,

    /// Source language tag used in the derived column name.
    #[arg(long = "source-lang", value_name = "TAG", default_value = "en")]
    pub source_lang: String,

    /// Target language tag, one per --target-column, in the same order.
    #[arg(long = "target-lang", value_name = "TAG", required = true)]
    pub target_langs: Vec<String>,

    /// Name for the new column (default: derived from languages and method).
    #[arg(long = "output-column", value_name = "NAME")]
    pub output_column: Option<String>,

    /// Output directory (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process only the first N rows.
    ///
    /// The noun-token method drops duplicate source texts before
    /// truncating; the ratio-token method truncates directly.
    #[arg(long = "sample-size", value_name = "N")]
    pub sample_size: Option<usize>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RatioArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Fraction of tokens to replace (0.0 to 1.0).
    #[arg(long = "ratio", value_name = "R", default_value_t = 0.2)]
    pub ratio: f64,

    /// Seed for reproducible token selection.
    #[arg(long = "seed", value_name = "SEED", default_value_t = 0)]
    pub seed: u64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
