use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reporate",
    version,
    about = "Rate repository maturity, activity and technical quality from collected metrics"
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
    /// Score one or more repositories from their stats files
    Score(ScoreCommand),
    /// Print the effective thresholds and weights
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Stats files (JSON), one per repository
    #[arg(required = true)]
    pub stats: Vec<PathBuf>,

    /// Configuration file (defaults to ./reporate.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scorecard JSON result replacing the stats file's security section
    #[arg(long)]
    pub scorecard: Option<PathBuf>,

    /// SonarQube api/measures/component response replacing the analysis section
    #[arg(long, requires = "sonar_issues")]
    pub sonar_measures: Option<PathBuf>,

    /// SonarQube api/issues/search response for brain-overload issues
    #[arg(long, requires = "sonar_measures")]
    pub sonar_issues: Option<PathBuf>,

    /// Instant elapsed durations are measured against (RFC 3339, default: now)
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ConfigCommand {
    /// Configuration file (defaults to ./reporate.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
