use tracing::debug;

use crate::model::features::GeneFeatureBuilder;
use crate::model::genome::Genome;
use crate::model::profile::ScoringProfile;
use crate::model::track::PositionRecord;
use crate::pipeline::stage2_normalize::EqualizedTracks;
use crate::stats::StatsError;
use crate::stats::mann_whitney::mann_whitney_p;

/// Reads per gene, aligned with [`Genome::genes`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedReads {
    pub per_gene: Vec<Vec<f64>>,
    pub total: f64,
}

/// Collects the reads of every record that names a known gene and starts
/// inside that gene's trimmed body. Records naming unknown genes are
/// skipped.
pub fn group_reads_by_gene(
    records: &[PositionRecord],
    genome: &Genome,
    trim_fraction: f64,
) -> GroupedReads {
    let mut per_gene = vec![Vec::new(); genome.len()];
    let mut total = 0.0f64;
    for record in records {
        let Some(name) = record.gene_name.as_deref() else {
            continue;
        };
        let Some(idx) = genome.ordinal(name) else {
            continue;
        };
        let gene = &genome.genes()[idx];
        if gene.trimmed_body_contains(record.start, trim_fraction) {
            per_gene[idx].push(record.reads);
            total += record.reads;
        }
    }
    GroupedReads { per_gene, total }
}

/// Builds one staging record per gene with raw p-values and raw fitness.
pub fn score_genes(
    genome: &Genome,
    condition: &str,
    tracks: &EqualizedTracks<'_>,
    profile: &ScoringProfile,
) -> Result<Vec<GeneFeatureBuilder>, StatsError> {
    let control = group_reads_by_gene(&tracks.control, genome, profile.trim_fraction);
    let experiment = group_reads_by_gene(&tracks.experiment, genome, profile.trim_fraction);
    let min_control_reads = control.total / profile.min_reads_divisor;
    let min_experiment_reads = experiment.total / profile.min_reads_divisor;
    debug!(
        total_control_reads = control.total,
        total_experiment_reads = experiment.total,
        "grouped reads by gene"
    );

    let mut builders = Vec::with_capacity(genome.len());
    for (idx, gene) in genome.genes().iter().enumerate() {
        let control_reads = &control.per_gene[idx];
        let experiment_reads = &experiment.per_gene[idx];

        let p = if control_reads.is_empty() || experiment_reads.is_empty() {
            0.0
        } else {
            mann_whitney_p(control_reads, experiment_reads)?
        };

        let mut builder = GeneFeatureBuilder::new(&gene.name, condition);
        builder.num_ta_sites = control_reads.len();
        builder.num_experiment_sites = experiment_reads.len();
        builder.gene_length = gene.length();
        builder.num_control_reads = control_reads.iter().sum();
        builder.num_experiment_reads = experiment_reads.iter().sum();
        builder.p = p;

        let significant_control = builder.num_control_reads.min(min_control_reads);
        let significant_experiment = builder.num_experiment_reads.min(min_experiment_reads);
        builder.modified_ratio = if significant_control == 0.0 {
            0.0
        } else {
            significant_experiment / significant_control
        };
        builder.essentiality_index = significant_experiment / builder.gene_length as f64;
        builder.fitness = builder.modified_ratio * builder.essentiality_index;
        builders.push(builder);
    }
    Ok(builders)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_features.rs"]
mod tests;
