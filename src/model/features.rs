use serde::Serialize;

/// Frozen per-gene result. `p` is BH-adjusted and `fitness` is the
/// percentile rank across all genes of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneFeatureMeasurements {
    pub condition: String,
    #[serde(rename = "numTASites")]
    pub num_ta_sites: usize,
    /// Experiment-side sites in the trimmed body. With either side at zero
    /// the gene was not tested and `p` holds 0.
    pub num_experiment_sites: usize,
    pub gene_length: u32,
    pub num_control_reads: f64,
    pub num_experiment_reads: f64,
    pub modified_ratio: f64,
    pub p: f64,
    pub essentiality_index: f64,
    pub fitness: f64,
}

/// Mutable staging record. Lives only until the correction passes have run
/// over the whole gene set.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneFeatureBuilder {
    pub gene: String,
    pub condition: String,
    pub num_ta_sites: usize,
    pub num_experiment_sites: usize,
    pub gene_length: u32,
    pub num_control_reads: f64,
    pub num_experiment_reads: f64,
    pub modified_ratio: f64,
    pub p: f64,
    pub essentiality_index: f64,
    pub fitness: f64,
}

impl GeneFeatureBuilder {
    pub fn new(gene: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            condition: condition.into(),
            num_ta_sites: 0,
            num_experiment_sites: 0,
            gene_length: 0,
            num_control_reads: 0.0,
            num_experiment_reads: 0.0,
            modified_ratio: 0.0,
            p: 0.0,
            essentiality_index: 0.0,
            fitness: 0.0,
        }
    }

    pub fn build(self) -> (String, GeneFeatureMeasurements) {
        (
            self.gene,
            GeneFeatureMeasurements {
                condition: self.condition,
                num_ta_sites: self.num_ta_sites,
                num_experiment_sites: self.num_experiment_sites,
                gene_length: self.gene_length,
                num_control_reads: self.num_control_reads,
                num_experiment_reads: self.num_experiment_reads,
                modified_ratio: self.modified_ratio,
                p: self.p,
                essentiality_index: self.essentiality_index,
                fitness: self.fitness,
            },
        )
    }
}

impl GeneFeatureMeasurements {
    /// Both sides had sites, so `p` comes from the rank test.
    pub fn was_tested(&self) -> bool {
        self.num_ta_sites > 0 && self.num_experiment_sites > 0
    }
}
