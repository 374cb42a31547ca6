use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::*;

/// Source that only ever yields zero bits, the smallest value a uniform draw
/// can be built from.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[test]
fn test_counts_sum_to_draws() {
    let sampler = MultinomialSampler::new(&[0.2, 0.1, 0.0, 0.4, 0.3]).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for draws in [0u64, 1, 17, 5_000] {
        let counts = sampler.sample(draws, &mut rng);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.iter().sum::<u64>(), draws);
    }
}

#[test]
fn test_zero_mass_category_never_drawn() {
    let sampler = MultinomialSampler::new(&[0.5, 0.0, 0.5]).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let counts = sampler.sample(20_000, &mut rng);
    assert_eq!(counts[1], 0);
    assert!(counts[0] > 0 && counts[2] > 0);
}

#[test]
fn test_zero_mass_first_category_never_drawn() {
    let sampler = MultinomialSampler::new(&[0.0, 1.0]).unwrap();
    assert_eq!(sampler.sample(3, &mut ZeroRng), vec![0, 3]);

    let sampler = MultinomialSampler::new(&[0.0, 0.5, 0.5]).unwrap();
    assert_eq!(sampler.locate(0.0), 1);
    let counts = sampler.sample(20_000, &mut StdRng::seed_from_u64(8));
    assert_eq!(counts[0], 0);
    assert_eq!(counts.iter().sum::<u64>(), 20_000);
}

#[test]
fn test_single_category_takes_everything() {
    let sampler = MultinomialSampler::new(&[1.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(sampler.sample(123, &mut rng), vec![123]);
}

#[test]
fn test_locate_ties_go_to_lower_index() {
    let sampler = MultinomialSampler::new(&[0.25, 0.25, 0.0, 0.5]).unwrap();
    assert_eq!(sampler.locate(0.0), 0);
    assert_eq!(sampler.locate(0.25), 0);
    assert_eq!(sampler.locate(0.3), 1);
    assert_eq!(sampler.locate(0.5), 1);
    assert_eq!(sampler.locate(0.51), 3);
}

#[test]
fn test_locate_past_rounded_total_lands_in_last_category() {
    let sampler = MultinomialSampler::new(&[0.3, 0.3]).unwrap();
    assert_eq!(sampler.locate(0.9), 1);
    assert_eq!(sampler.categories(), 2);
}

#[test]
fn test_goodness_of_fit() {
    let probs = [0.1, 0.2, 0.3, 0.4];
    let sampler = MultinomialSampler::new(&probs).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 100_000u64;
    let counts = sampler.sample(draws, &mut rng);

    let chi2: f64 = counts
        .iter()
        .zip(probs)
        .map(|(&obs, p)| {
            let expected = p * draws as f64;
            (obs as f64 - expected).powi(2) / expected
        })
        .sum();
    // df = 3, alpha = 0.001
    assert!(chi2 < 16.266, "chi2 = {chi2}");
}

#[test]
fn test_rejects_bad_distributions() {
    assert_eq!(
        MultinomialSampler::new(&[]).unwrap_err(),
        StatsError::EmptyDistribution
    );
    assert_eq!(
        MultinomialSampler::new(&[0.5, -0.1]).unwrap_err(),
        StatsError::InvalidWeight(1)
    );
    assert_eq!(
        MultinomialSampler::new(&[f64::NAN]).unwrap_err(),
        StatsError::InvalidWeight(0)
    );
}
