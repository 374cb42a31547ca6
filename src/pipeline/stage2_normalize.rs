use std::borrow::Cow;

use rand::Rng;
use tracing::{debug, info};

use crate::model::track::{PositionRecord, SequenceMeasurements, TrackStats};
use crate::pipeline::NormalizeError;
use crate::stats::multinomial::MultinomialSampler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedSide {
    Control,
    Experiment,
}

/// Control and experiment records after depth equalization. The side that
/// was not resampled is borrowed untouched.
#[derive(Debug)]
pub struct EqualizedTracks<'a> {
    pub control: Cow<'a, [PositionRecord]>,
    pub experiment: Cow<'a, [PositionRecord]>,
    pub normalized: NormalizedSide,
}

/// The deeper track (by site hits, ties go to the control) is pulled down.
pub fn choose_normalizee(control: &TrackStats, experiment: &TrackStats) -> NormalizedSide {
    if control.site_hits >= experiment.site_hits {
        NormalizedSide::Control
    } else {
        NormalizedSide::Experiment
    }
}

pub fn equalize_depth<'a, R: Rng + ?Sized>(
    control: &'a SequenceMeasurements,
    experiment: &'a SequenceMeasurements,
    rounds: usize,
    rng: &mut R,
) -> Result<EqualizedTracks<'a>, NormalizeError> {
    let side = choose_normalizee(control.stats(), experiment.stats());
    info!(normalized = ?side, rounds, "equalizing sequencing depth");
    let tracks = match side {
        NormalizedSide::Control => EqualizedTracks {
            control: Cow::Owned(normalize_depth(control, experiment, rounds, rng)?),
            experiment: Cow::Borrowed(experiment.raw_data()),
            normalized: side,
        },
        NormalizedSide::Experiment => EqualizedTracks {
            control: Cow::Borrowed(control.raw_data()),
            experiment: Cow::Owned(normalize_depth(experiment, control, rounds, rng)?),
            normalized: side,
        },
    };
    Ok(tracks)
}

/// Per-record hit probabilities scaled by the site-hit proportion, followed
/// by one trailing miss bucket holding `1 - proportion`.
pub fn probability_vector(
    normalizee: &SequenceMeasurements,
    normalizer: &SequenceMeasurements,
) -> Result<Vec<f64>, NormalizeError> {
    let target = normalizee.stats();
    if target.site_hits == 0 || target.total_site_reads <= 0.0 {
        return Err(NormalizeError::DegenerateDepth {
            site_hits: target.site_hits,
            total_reads: target.total_site_reads,
        });
    }
    let proportion = normalizer.stats().site_hits as f64 / target.site_hits as f64;

    let records = normalizee.raw_data();
    let mut probabilities = Vec::with_capacity(records.len() + 1);
    for record in records {
        probabilities.push(proportion * record.reads / target.total_site_reads);
    }
    probabilities.push(1.0 - proportion);
    Ok(probabilities)
}

/// Rescales one round so the draws that hit real records add up to the
/// full draw count.
pub fn correction_factor(
    total_draws: u64,
    sample: &[u64],
    round: usize,
) -> Result<f64, NormalizeError> {
    let missed = sample.last().copied().unwrap_or(0);
    let difference = total_draws.saturating_sub(missed);
    if difference == 0 {
        return Err(NormalizeError::DegenerateSampling { round });
    }
    Ok(total_draws as f64 / difference as f64)
}

/// Monte Carlo depth normalization of `normalizee` towards the depth of
/// `normalizer`. Each round is corrected and folded into the running mean
/// before the next one is drawn.
pub fn normalize_depth<R: Rng + ?Sized>(
    normalizee: &SequenceMeasurements,
    normalizer: &SequenceMeasurements,
    rounds: usize,
    rng: &mut R,
) -> Result<Vec<PositionRecord>, NormalizeError> {
    if rounds == 0 {
        return Err(NormalizeError::NoRounds);
    }
    let sampler = MultinomialSampler::new(&probability_vector(normalizee, normalizer)?)?;
    let total_draws = normalizer.stats().total_site_reads.floor() as u64;
    // the trailing category is the miss bucket
    let n_records = sampler.categories() - 1;

    let mut averaged = vec![0.0f64; n_records];
    for round in 0..rounds {
        let sample = sampler.sample(total_draws, rng);
        let correction = correction_factor(total_draws, &sample, round)?;
        for (acc, &count) in averaged.iter_mut().zip(&sample[..n_records]) {
            *acc += count as f64 * correction / rounds as f64;
        }
    }
    debug!(records = n_records, total_draws, "resampled track");

    Ok(normalizee
        .raw_data()
        .iter()
        .zip(averaged)
        .map(|(record, reads)| record.with_reads(reads))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
