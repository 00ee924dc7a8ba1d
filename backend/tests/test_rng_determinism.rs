//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence,
//! and the same (seed, stream) pair MUST produce the same per-run generator.

use burnout_sim_core::{RandomSource, RngManager};

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        let val1 = rng1.next();
        let val2 = rng2.next();
        assert_eq!(val1, val2, "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = RngManager::new(12345);

    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint_state = rng1.get_state();
    let val1_a = rng1.next();
    let val1_b = rng1.next();

    let mut rng2 = RngManager::new(checkpoint_state);
    assert_eq!(val1_a, rng2.next());
    assert_eq!(val1_b, rng2.next());
}

#[test]
fn test_variates_deterministic() {
    let mut rng1 = RngManager::new(777);
    let mut rng2 = RngManager::new(777);

    for i in 0..500 {
        assert_eq!(rng1.poisson(3.5), rng2.poisson(3.5), "poisson diverged at {}", i);
        assert_eq!(
            rng1.binomial(120, 0.35),
            rng2.binomial(120, 0.35),
            "binomial diverged at {}",
            i
        );
        assert_eq!(rng1.uniform(), rng2.uniform(), "uniform diverged at {}", i);
    }
}

#[test]
fn test_streams_reproducible() {
    for stream in [0u64, 1, 17, 999_999] {
        let mut a = RngManager::for_stream(42, stream);
        let mut b = RngManager::for_stream(42, stream);
        for _ in 0..50 {
            assert_eq!(a.next(), b.next());
        }
    }
}

#[test]
fn test_streams_differ_from_each_other_and_from_master() {
    let mut master = RngManager::new(42);
    let first_values: Vec<u64> = (0..8)
        .map(|stream| RngManager::for_stream(42, stream).next())
        .collect();

    let unique: std::collections::HashSet<_> = first_values.iter().collect();
    assert_eq!(unique.len(), first_values.len());
    assert!(!first_values.contains(&master.next()));
}

#[test]
fn test_streams_depend_on_master_seed() {
    let mut a = RngManager::for_stream(1, 0);
    let mut b = RngManager::for_stream(2, 0);
    assert_ne!(a.next(), b.next());
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = RngManager::new(12345);
    let values: std::collections::HashSet<u64> = (0..100).map(|_| rng.next()).collect();
    assert!(
        values.len() > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        values.len()
    );
}
