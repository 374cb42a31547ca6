use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::profile::ScoringProfile;

pub mod json;
pub mod text;

pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackSummary {
    pub name: String,
    pub stats: BTreeMap<&'static str, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub genome: String,
    pub condition: String,
    pub control: TrackSummary,
    pub experiment: TrackSummary,
    pub normalized_side: String,
    pub seed: Option<u64>,
    pub profile: ScoringProfile,

    pub n_genes: usize,
    pub genes_significant: usize,
    pub genes_untested: usize,
    pub genes_without_sites: usize,
    pub modified_ratio_median: f64,
    pub modified_ratio_p90: f64,
    pub essentiality_index_median: f64,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}
