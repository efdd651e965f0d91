//! CLI argument definitions for radprep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "radprep",
    version,
    about = "radprep - Prepare paired clinical and radiomic feature tables for modelling",
    long_about = "Prepare paired clinical and radiomic feature tables for modelling.\n\n\
                  Aligns a clinical table with a per-patient feature table, applies\n\
                  include/exclude criteria, encodes outcome labels, and splits cohorts\n\
                  into predefined groups such as train/test."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Filter a clinical table, align it with its feature table, and encode outcomes.
    Prepare(PrepareArgs),

    /// Partition an aligned clinical/feature pair into predefined groups.
    Split(SplitArgs),

    /// Profile a single table: header row, identifier candidates, column statistics.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Path to the clinical CSV table.
    #[arg(value_name = "CLINICAL")]
    pub clinical: PathBuf,

    /// Path to the radiomic feature CSV table.
    #[arg(value_name = "FEATURES")]
    pub features: PathBuf,

    /// JSON run configuration with filter, split, and outcome sections.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for generated files (default: <CLINICAL dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Patient-identifier column in the clinical table (default: discovered).
    #[arg(long = "clinical-id", value_name = "COLUMN")]
    pub clinical_id: Option<String>,

    /// Patient-identifier column in the feature table (default: discovered).
    #[arg(long = "feature-id", value_name = "COLUMN")]
    pub feature_id: Option<String>,

    /// Zero-based header row of the clinical table (default: detected).
    #[arg(long = "clinical-header-row", value_name = "ROW")]
    pub clinical_header_row: Option<usize>,

    /// Zero-based header row of the feature table (default: detected).
    #[arg(long = "feature-header-row", value_name = "ROW")]
    pub feature_header_row: Option<usize>,

    /// Drop pyradiomics diagnostics columns from the feature output.
    #[arg(long = "features-only")]
    pub features_only: bool,

    /// Report counts without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Path to the clinical CSV table.
    #[arg(value_name = "CLINICAL")]
    pub clinical: PathBuf,

    /// Path to the radiomic feature CSV table.
    #[arg(value_name = "FEATURES")]
    pub features: PathBuf,

    /// JSON run configuration; its split section defines the groups.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Output directory for generated files (default: <CLINICAL dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Patient-identifier column in the clinical table (default: discovered).
    #[arg(long = "clinical-id", value_name = "COLUMN")]
    pub clinical_id: Option<String>,

    /// Patient-identifier column in the feature table (default: discovered).
    #[arg(long = "feature-id", value_name = "COLUMN")]
    pub feature_id: Option<String>,

    /// Zero-based header row of the clinical table (default: detected).
    #[arg(long = "clinical-header-row", value_name = "ROW")]
    pub clinical_header_row: Option<usize>,

    /// Zero-based header row of the feature table (default: detected).
    #[arg(long = "feature-header-row", value_name = "ROW")]
    pub feature_header_row: Option<usize>,

    /// Report group sizes without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV table to profile.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Treat this column as the patient identifier instead of discovering one.
    #[arg(long = "id", value_name = "COLUMN")]
    pub id: Option<String>,

    /// Zero-based header row (default: detected).
    #[arg(long = "header-row", value_name = "ROW")]
    pub header_row: Option<usize>,
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
