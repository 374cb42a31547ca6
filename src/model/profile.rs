use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoringProfile {
    /// Fraction of gene length dropped at each end before aggregating reads.
    pub trim_fraction: f64,
    /// Global read floor is `total / min_reads_divisor` per track.
    pub min_reads_divisor: f64,
    pub resampling_rounds: usize,
    /// Percentile of per-record reads reported as `redThreshold`.
    pub outlier_percentile: f64,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            trim_fraction: 0.03,
            min_reads_divisor: 10_000.0,
            resampling_rounds: 100,
            outlier_percentile: 0.99999,
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.resampling_rounds = rounds;
        self
    }
}
