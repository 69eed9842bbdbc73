mod cli;
mod config;
mod engine;
mod error;
mod ingest;
mod report;
mod types;

use crate::error::RatingError;
use crate::types::report::RepositoryRating;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PARTIAL_FAILURE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, RatingError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let has_imports = cmd.scorecard.is_some() || cmd.sonar_measures.is_some();
            if has_imports && cmd.stats.len() != 1 {
                return Err(RatingError::InvalidArgument(
                    "--scorecard and --sonar-* need exactly one stats file".to_string(),
                ));
            }

            let rating_config = config::load_config(cmd.config.as_deref())?;
            let overrides = ingest::Overrides {
                scorecard: cmd.scorecard,
                sonar: cmd
                    .sonar_measures
                    .zip(cmd.sonar_issues)
                    .map(|(measures, issues)| ingest::SonarFiles { measures, issues }),
            };
            let now = cmd.at.unwrap_or_else(Utc::now);
            info!(at = %now.to_rfc3339(), repositories = cmd.stats.len(), "scoring");

            let mut ratings = Vec::new();
            let mut failures = 0usize;
            for path in &cmd.stats {
                let scored = ingest::load_stats(path, &overrides).and_then(|loaded| {
                    engine::compute_scores(&loaded.stats, &rating_config, now).map(|scores| {
                        RepositoryRating {
                            repository: loaded.repository,
                            scores,
                        }
                    })
                });
                match scored {
                    Ok(rating) => ratings.push(rating),
                    Err(e) => {
                        failures += 1;
                        eprintln!("error: {}: {}", path.display(), e);
                    }
                }
            }

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&ratings, output_format)?;
            println!("{rendered}");

            if failures == 0 {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::PARTIAL_FAILURE)
            }
        }
        cli::Commands::Config(cmd) => {
            let rating_config = config::load_config(cmd.config.as_deref())?;
            print!("{}", config::render_config(&rating_config)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
