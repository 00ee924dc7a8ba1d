//! Distribution checks for the random variate source
//!
//! Sample sizes are chosen so each tolerance sits at well over five
//! standard errors; the seeds are fixed, so these never flake.

use burnout_sim_core::{CompletionModel, RandomSource, RngManager};

fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance)
}

#[test]
fn test_uniform_mean() {
    let mut rng = RngManager::new(11);
    let samples: Vec<f64> = (0..100_000).map(|_| rng.uniform()).collect();
    let (mean, variance) = mean_and_variance(&samples);
    assert!((mean - 0.5).abs() < 0.01, "uniform mean {}", mean);
    assert!((variance - 1.0 / 12.0).abs() < 0.005, "uniform variance {}", variance);
}

#[test]
fn test_poisson_small_mean() {
    let mut rng = RngManager::new(21);
    let samples: Vec<f64> = (0..100_000).map(|_| rng.poisson(0.5) as f64).collect();
    let (mean, variance) = mean_and_variance(&samples);
    assert!((mean - 0.5).abs() < 0.02, "poisson(0.5) mean {}", mean);
    assert!((variance - 0.5).abs() < 0.03, "poisson(0.5) variance {}", variance);
}

#[test]
fn test_poisson_large_mean_uses_slices() {
    let mut rng = RngManager::new(31);
    let samples: Vec<f64> = (0..20_000).map(|_| rng.poisson(50.0) as f64).collect();
    let (mean, variance) = mean_and_variance(&samples);
    assert!((mean - 50.0).abs() < 0.5, "poisson(50) mean {}", mean);
    assert!((variance - 50.0).abs() < 4.0, "poisson(50) variance {}", variance);
}

#[test]
fn test_poisson_zero_mean_draws_nothing() {
    let mut rng = RngManager::new(41);
    let before = rng.get_state();
    assert_eq!(rng.poisson(0.0), 0);
    assert_eq!(rng.get_state(), before, "zero-mean arrivals must not consume the stream");
}

#[test]
fn test_binomial_moments() {
    let mut rng = RngManager::new(51);
    for &(n, p) in &[(100u64, 0.3), (50, 0.9), (1000, 0.1)] {
        let samples: Vec<f64> = (0..20_000).map(|_| rng.binomial(n, p) as f64).collect();
        let (mean, variance) = mean_and_variance(&samples);
        let expected_mean = n as f64 * p;
        let expected_var = n as f64 * p * (1.0 - p);
        assert!(
            (mean - expected_mean).abs() < 0.3,
            "binomial({}, {}) mean {} vs {}",
            n,
            p,
            mean,
            expected_mean
        );
        assert!(
            (variance - expected_var).abs() < expected_var * 0.08,
            "binomial({}, {}) variance {} vs {}",
            n,
            p,
            variance,
            expected_var
        );
    }
}

#[test]
fn test_bernoulli_frequency() {
    let mut rng = RngManager::new(61);
    let hits = (0..100_000).filter(|_| rng.bernoulli(0.25)).count();
    let freq = hits as f64 / 100_000.0;
    assert!((freq - 0.25).abs() < 0.01, "bernoulli frequency {}", freq);
}

#[test]
fn test_completion_models_agree_in_distribution() {
    let mut rng = RngManager::new(71);
    let draws = 20_000;

    let binomial: Vec<f64> = (0..draws)
        .map(|_| CompletionModel::Binomial.completed(&mut rng, 40, 0.45) as f64)
        .collect();
    let per_task: Vec<f64> = (0..draws)
        .map(|_| CompletionModel::PerTask.completed(&mut rng, 40, 0.45) as f64)
        .collect();

    let (mean_b, var_b) = mean_and_variance(&binomial);
    let (mean_t, var_t) = mean_and_variance(&per_task);
    assert!((mean_b - mean_t).abs() < 0.2, "means {} vs {}", mean_b, mean_t);
    assert!((var_b - var_t).abs() < 1.0, "variances {} vs {}", var_b, var_t);
}
