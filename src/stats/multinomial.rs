use rand::Rng;
use rand::distr::OpenClosed01;

use crate::stats::StatsError;

/// Categorical sampler over a fixed weight vector. Draws are located on
/// the cumulative sums with a binary search, so one call to [`sample`]
/// costs O(draws * log n).
///
/// [`sample`]: MultinomialSampler::sample
#[derive(Debug, Clone)]
pub struct MultinomialSampler {
    cumulative: Vec<f64>,
}

impl MultinomialSampler {
    pub fn new(probabilities: &[f64]) -> Result<Self, StatsError> {
        if probabilities.is_empty() {
            return Err(StatsError::EmptyDistribution);
        }
        let mut cumulative = Vec::with_capacity(probabilities.len());
        let mut sum = 0.0f64;
        for (idx, &p) in probabilities.iter().enumerate() {
            if !p.is_finite() || p < 0.0 {
                return Err(StatsError::InvalidWeight(idx));
            }
            sum += p;
            cumulative.push(sum);
        }
        Ok(Self { cumulative })
    }

    pub fn categories(&self) -> usize {
        self.cumulative.len()
    }

    /// First category whose cumulative mass is `>= u`, never a leading
    /// zero-mass category. Rounding can leave the last cumulative entry just
    /// under `u`; that draw lands in the last category.
    pub fn locate(&self, u: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c < u || c <= 0.0);
        idx.min(self.cumulative.len() - 1)
    }

    pub fn sample<R: Rng + ?Sized>(&self, draws: u64, rng: &mut R) -> Vec<u64> {
        let mut counts = vec![0u64; self.cumulative.len()];
        for _ in 0..draws {
            // (0, 1]: a draw of exactly 0 would land on a zero-mass first category
            let u: f64 = rng.sample(OpenClosed01);
            counts[self.locate(u)] += 1;
        }
        counts
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/multinomial.rs"]
mod tests;
