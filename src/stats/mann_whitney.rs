use crate::stats::StatsError;

/// Two-sided Mann-Whitney U test p-value via the normal approximation.
/// Ties get average ranks; no tie correction is applied to the variance.
pub fn mann_whitney_p(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    let u_max = mann_whitney_u(x, y)?;
    let n1n2 = x.len() as f64 * y.len() as f64;
    let u_min = n1n2 - u_max;
    Ok(asymptotic_p(u_min, x.len(), y.len()))
}

/// The larger of the two U statistics.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.is_empty() || y.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let mut pooled = Vec::with_capacity(x.len() + y.len());
    pooled.extend_from_slice(x);
    pooled.extend_from_slice(y);
    let ranks = average_ranks(&pooled);

    let n1 = x.len() as f64;
    let rank_sum_x: f64 = ranks[..x.len()].iter().sum();
    let u1 = rank_sum_x - n1 * (n1 + 1.0) / 2.0;
    let u2 = n1 * y.len() as f64 - u1;
    Ok(u1.max(u2))
}

fn asymptotic_p(u_min: f64, n1: usize, n2: usize) -> f64 {
    let n1n2 = n1 as f64 * n2 as f64;
    let mean = n1n2 / 2.0;
    let variance = n1n2 * (n1 as f64 + n2 as f64 + 1.0) / 12.0;
    let z = (u_min - mean) / variance.sqrt();
    (2.0 * standard_normal_cdf(z)).min(1.0)
}

/// 1-based ranks, ties share the mean of the ranks they span.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0usize;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // positions i..j hold ranks i+1..=j
        let rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = rank;
        }
        i = j;
    }
    ranks
}

pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Complementary error function, Chebyshev fit with fractional error
/// below 1.2e-7 everywhere.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let ans = t * poly.exp();
    if x >= 0.0 { ans } else { 2.0 - ans }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/mann_whitney.rs"]
mod tests;
