mod input;
mod logging;
mod model;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_matrix};
use crate::model::{EstimationError, ExpertCount, PreferenceMatrix};
use crate::report::text::render_report_text;
use crate::report::{ReportError, ReportFormat, write_reports};
use crate::stats::estimator::{ConcordanceEstimator, DEFAULT_ALPHA};

/// Expert-agreement concordance analysis of pairwise preference matrices.
#[derive(Parser, Debug)]
#[command(name = "expert-concordance", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate concordance for a preference matrix file.
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Square matrix of pairwise preference counts (plain text or .gz).
    #[arg(long)]
    input: PathBuf,

    /// Number of experts whose votes were tallied.
    #[arg(long, default_value_t = 3)]
    experts: u32,

    /// Significance level of the agreement test.
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Output directory. The text report goes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Both)]
    format: ReportFormat,

    /// Log intermediate coefficients.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_path: PathBuf,
    experts: u32,
    alpha: f64,
    out_dir: Option<PathBuf>,
    format: ReportFormat,
    verbose: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            input_path: args.input,
            experts: args.experts,
            alpha: args.alpha,
            out_dir: args.out,
            format: args.format,
            verbose: args.verbose,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Estimation(#[from] EstimationError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    let config = RunConfig::from(args);
    logging::init_tracing(config.verbose);

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    let rows = load_matrix(&config.input_path)?;
    let matrix = PreferenceMatrix::new(rows)?;
    let experts = ExpertCount::new(config.experts)?;
    let estimator = ConcordanceEstimator::new(matrix, experts)?.with_significance(config.alpha);
    tracing::info!(
        objects = estimator.matrix().size(),
        experts = config.experts,
        alpha = config.alpha,
        "estimating expert concordance"
    );
    let result = estimator.estimate()?;

    match &config.out_dir {
        Some(dir) => {
            write_reports(&result, dir, config.format)?;
        }
        None => print!("{}", render_report_text(&result)),
    }
    Ok(())
}
