use std::collections::BTreeMap;
use std::io::BufRead;

use rand::Rng;
use tracing::{debug, info};

use crate::model::features::{GeneFeatureBuilder, GeneFeatureMeasurements};
use crate::model::genome::Genome;
use crate::model::profile::ScoringProfile;
use crate::model::results::{Control, Experiment};
use crate::model::track::SequenceMeasurements;
use crate::pipeline::AnalysisError;
use crate::pipeline::stage1_ingest::{check_gene_labels, ingest_track};
use crate::pipeline::stage2_normalize::equalize_depth;
use crate::pipeline::stage3_features::score_genes;
use crate::pipeline::stage4_correct::{apply_bh_correction, apply_fitness_rank};

pub fn freeze(builders: Vec<GeneFeatureBuilder>) -> BTreeMap<String, GeneFeatureMeasurements> {
    builders.into_iter().map(GeneFeatureBuilder::build).collect()
}

/// Equalizes depth, scores every gene and runs both correction passes
/// before any record is frozen.
pub fn derive_features<R: Rng + ?Sized>(
    genome: &Genome,
    control: &Control,
    condition: &str,
    experiment: &SequenceMeasurements,
    profile: &ScoringProfile,
    rng: &mut R,
) -> Result<BTreeMap<String, GeneFeatureMeasurements>, AnalysisError> {
    let mut builders = {
        let tracks = equalize_depth(
            &control.sequence_measurements,
            experiment,
            profile.resampling_rounds,
            rng,
        )?;
        debug!(condition, normalized = ?tracks.normalized, "depth equalized");
        score_genes(genome, condition, &tracks, profile)?
    };
    apply_bh_correction(&mut builders);
    apply_fitness_rank(&mut builders);
    Ok(freeze(builders))
}

pub fn analyze_experiment<B: BufRead, R: Rng + ?Sized>(
    name: &str,
    genome: &Genome,
    control: &Control,
    reader: B,
    profile: &ScoringProfile,
    rng: &mut R,
) -> Result<Experiment, AnalysisError> {
    if control.genome_name != genome.name() {
        return Err(AnalysisError::GenomeMismatch {
            experiment: name.to_string(),
            control: control.name.clone(),
            expected: genome.name().to_string(),
            found: control.genome_name.clone(),
        });
    }
    let sequence_measurements = ingest_track(reader, profile)?;
    check_gene_labels(name, &sequence_measurements, genome);
    let gene_features = derive_features(
        genome,
        control,
        name,
        &sequence_measurements,
        profile,
        rng,
    )?;
    info!(
        experiment = name,
        control = control.name.as_str(),
        genes = gene_features.len(),
        "scored experiment"
    );
    Ok(Experiment {
        name: name.to_string(),
        genome_name: genome.name().to_string(),
        control_name: control.name.clone(),
        sequence_measurements,
        gene_features,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_assemble.rs"]
mod tests;
