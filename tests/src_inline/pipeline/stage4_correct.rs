use super::*;

fn builders_with(field: fn(&mut GeneFeatureBuilder, f64), values: &[f64]) -> Vec<GeneFeatureBuilder> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let mut b = GeneFeatureBuilder::new(format!("g{i}"), "cond");
            field(&mut b, v);
            b
        })
        .collect()
}

fn set_p(b: &mut GeneFeatureBuilder, v: f64) {
    b.p = v;
}

fn set_fitness(b: &mut GeneFeatureBuilder, v: f64) {
    b.fitness = v;
}

fn value_of(builders: &[GeneFeatureBuilder], gene: &str, field: fn(&GeneFeatureBuilder) -> f64) -> f64 {
    builders
        .iter()
        .find(|b| b.gene == gene)
        .map(field)
        .unwrap()
}

#[test]
fn test_bh_reference_values() {
    let mut builders = builders_with(set_p, &[0.01, 0.04, 0.03, 0.5]);
    apply_bh_correction(&mut builders);

    let p = |gene: &str| value_of(&builders, gene, |b| b.p);
    assert!((p("g0") - 0.04).abs() < 1e-12);
    assert!((p("g1") - 4.0 * 0.04 / 3.0).abs() < 1e-12);
    assert!((p("g2") - 4.0 * 0.04 / 3.0).abs() < 1e-12);
    assert_eq!(p("g3"), 0.5);
}

#[test]
fn test_bh_monotone_and_bounded() {
    let raw = [0.2, 0.001, 0.9, 0.04, 0.04, 0.7, 0.0, 0.33, 1.0, 0.015];
    let mut builders = builders_with(set_p, &raw);
    apply_bh_correction(&mut builders);

    // builders are left in ascending raw-p order
    for pair in builders.windows(2) {
        assert!(pair[0].p <= pair[1].p);
    }
    for b in &builders {
        assert!((0.0..=1.0).contains(&b.p));
    }
    assert_eq!(value_of(&builders, "g8", |b| b.p), 1.0);
    for (i, &r) in raw.iter().enumerate() {
        assert!(value_of(&builders, &format!("g{i}"), |b| b.p) >= r);
    }
}

#[test]
fn test_bh_handles_tiny_sets() {
    let mut empty: Vec<GeneFeatureBuilder> = Vec::new();
    apply_bh_correction(&mut empty);
    assert!(empty.is_empty());

    let mut single = builders_with(set_p, &[0.2]);
    apply_bh_correction(&mut single);
    assert_eq!(single[0].p, 0.2);
}

#[test]
fn test_fitness_rank_is_percentile_permutation() {
    let raw = [0.3, 0.1, 0.2, 5.0, 0.0];
    let m = raw.len() as f64;
    let mut builders = builders_with(set_fitness, &raw);
    apply_fitness_rank(&mut builders);

    let mut ranks: Vec<f64> = builders.iter().map(|b| b.fitness).collect();
    ranks.sort_by(|a, b| a.total_cmp(b));
    let expected: Vec<f64> = (0..raw.len()).map(|i| i as f64 / m).collect();
    assert_eq!(ranks, expected);

    let rank = |gene: &str| value_of(&builders, gene, |b| b.fitness);
    assert_eq!(rank("g4"), 0.0);
    assert_eq!(rank("g1"), 1.0 / m);
    assert_eq!(rank("g3"), 4.0 / m);
}
