mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{error, info};

use crate::input::{InputError, open_maybe_gz};
use crate::model::profile::ScoringProfile;
use crate::pipeline::AnalysisError;
use crate::pipeline::stage1_ingest::{analyze_control, analyze_genome};
use crate::pipeline::stage5_assemble::analyze_experiment;
use crate::pipeline::stage6_report::{ReportInput, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "tnseq-fitness",
    version,
    about = "Per-gene fitness and essentiality scores from TnSeq read-count tracks"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one or more experiment tracks against a control track.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Gene annotation, one `name start end` per line.
    #[arg(long)]
    genome: PathBuf,
    /// Control read track (plain or .gz).
    #[arg(long)]
    control: PathBuf,
    /// Experiment read track; repeat for several conditions.
    #[arg(long = "experiment", required = true)]
    experiments: Vec<PathBuf>,
    #[arg(long)]
    genome_name: Option<String>,
    #[arg(long)]
    control_name: Option<String>,
    /// Seed for depth-normalization resampling.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("failed to write reports: {0}")]
    Io(#[from] std::io::Error),
    #[error("experiment name {0} is used by more than one track")]
    DuplicateExperiment(String),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    logging::init(args.verbose);
    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    let profile = ScoringProfile::default_v1().with_rounds(args.rounds as usize);

    let genome_name = args
        .genome_name
        .clone()
        .unwrap_or_else(|| dataset_name(&args.genome));
    let genome = analyze_genome(&genome_name, open_maybe_gz(&args.genome)?)?;

    let control_name = args
        .control_name
        .clone()
        .unwrap_or_else(|| dataset_name(&args.control));
    let control = analyze_control(
        &control_name,
        &genome,
        open_maybe_gz(&args.control)?,
        &profile,
    )?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut seen = HashSet::new();
    for path in &args.experiments {
        let name = dataset_name(path);
        if !seen.insert(name.clone()) {
            return Err(AppError::DuplicateExperiment(name));
        }
        let experiment = analyze_experiment(
            &name,
            &genome,
            &control,
            open_maybe_gz(path)?,
            &profile,
            &mut rng,
        )?;

        let out_dir = args.out.join(&name);
        let input = ReportInput {
            control: &control,
            experiment: &experiment,
            n_genes: genome.len(),
            profile: &profile,
            seed: args.seed,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };
        write_reports(&input, &out_dir)?;
        info!(experiment = name.as_str(), out = %out_dir.display(), "wrote reports");
    }

    Ok(())
}

/// File name without directories, a trailing `.gz` and one extension.
fn dataset_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".gz").unwrap_or(&file_name);
    match stem.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base.to_string(),
        _ => stem.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
