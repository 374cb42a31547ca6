use crate::model::features::GeneFeatureBuilder;

/// Benjamini-Hochberg step-up adjustment of `p`, in place. Leaves the
/// builders sorted by ascending raw p.
pub fn apply_bh_correction(builders: &mut [GeneFeatureBuilder]) {
    let m = builders.len();
    if m == 0 {
        return;
    }
    builders.sort_by(|a, b| a.p.total_cmp(&b.p));

    let mut min_coeff = builders[m - 1].p;
    for i in (0..m - 1).rev() {
        let coeff = m as f64 * builders[i].p / (i + 1) as f64;
        min_coeff = coeff.min(min_coeff);
        builders[i].p = min_coeff;
    }
}

/// Replaces raw fitness with its zero-based rank divided by the gene count.
/// Leaves the builders sorted by ascending raw fitness.
pub fn apply_fitness_rank(builders: &mut [GeneFeatureBuilder]) {
    let m = builders.len();
    builders.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
    for (rank, builder) in builders.iter_mut().enumerate() {
        builder.fitness = rank as f64 / m as f64;
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_correct.rs"]
mod tests;
