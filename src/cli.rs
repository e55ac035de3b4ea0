use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cgpa",
    version,
    about = "CGPA calculator for YGPA-weighted degree programs"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the CGPA from semester SGPAs
    Calculate(CalculateCommand),
    /// Check a single SGPA value
    Validate(ValidateCommand),
    /// List the supported degree programs
    Programs,
}

#[derive(Args)]
pub struct CalculateCommand {
    /// Degree program: 4-year, 3-year, 2-year, 1-year or lateral-entry
    #[arg(short, long)]
    pub program: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// TOML file with `program` and an `sgpa` array
    #[arg(long, conflicts_with = "sgpa")]
    pub file: Option<PathBuf>,

    /// SGPAs in semester order; use "-" or "_" for a semester without a result
    #[arg(allow_hyphen_values = true)]
    pub sgpa: Vec<String>,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
