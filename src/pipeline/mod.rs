use thiserror::Error;

use crate::input::InputError;
use crate::stats::StatsError;

pub mod stage1_ingest;
pub mod stage2_normalize;
pub mod stage3_features;
pub mod stage4_correct;
pub mod stage5_assemble;
pub mod stage6_report;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("cannot resample a track with {site_hits} site hits and {total_reads} reads")]
    DegenerateDepth { site_hits: u64, total_reads: f64 },
    #[error("resampling needs at least one round")]
    NoRounds,
    #[error("degenerate sampling: every draw of round {round} fell in the miss bucket")]
    DegenerateSampling { round: usize },
    #[error(transparent)]
    Stats(#[from] StatsError),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error("experiment {experiment} targets genome {expected} but control {control} uses {found}")]
    GenomeMismatch {
        experiment: String,
        control: String,
        expected: String,
        found: String,
    },
}
