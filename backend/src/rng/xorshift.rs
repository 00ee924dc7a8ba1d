//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Same master seed and
//! stream index → same per-run generator, regardless of which worker
//! thread ends up executing the run.

use std::time::{SystemTime, UNIX_EPOCH};

use super::RandomSource;

/// Largest Poisson mean sampled in one Knuth pass. Larger means are split
/// into slices of at most this size and summed.
const POISSON_SLICE: f64 = 16.0;

/// Weyl increment used to spread stream indices across the seed space.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use burnout_sim_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let arrivals = rng.poisson(0.5);
/// let completed = rng.binomial(10, 0.5);
/// assert!(completed <= 10);
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use burnout_sim_core::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// assert_eq!(rng.get_state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Derive the generator for one independent stream of a computation.
    ///
    /// Run `r` of a simulation seeded with `master_seed` always draws from
    /// `for_stream(master_seed, r)`, so results do not depend on how runs
    /// are scheduled across threads.
    ///
    /// # Example
    /// ```
    /// use burnout_sim_core::RngManager;
    ///
    /// let mut a = RngManager::for_stream(42, 0);
    /// let mut b = RngManager::for_stream(42, 0);
    /// let mut c = RngManager::for_stream(42, 1);
    /// let first = a.next();
    /// assert_eq!(first, b.next());
    /// assert_ne!(first, c.next());
    /// ```
    pub fn for_stream(master_seed: u64, stream: u64) -> Self {
        let base = splitmix64(master_seed);
        let seed = splitmix64(base ^ stream.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
        Self::new(seed)
    }

    /// Seed derived from the wall clock, for callers that did not pick one.
    ///
    /// Callers should log the returned value so the computation can be
    /// replayed with an explicit seed.
    pub fn seed_from_clock() -> u64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        splitmix64(nanos)
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replaying a stream from a known point)
    ///
    /// # Example
    /// ```
    /// use burnout_sim_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let state = rng.get_state();
    ///
    /// let mut replay = RngManager::new(state);
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use burnout_sim_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Sample a Poisson count with mean `lambda`.
    ///
    /// Exact for every mean: Knuth's product-of-uniforms method for means up
    /// to 16, and a sum of independent slices (Poisson additivity) above that.
    /// Non-positive or non-finite means yield 0.
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        if !lambda.is_finite() || lambda <= 0.0 {
            return 0;
        }

        let mut remaining = lambda;
        let mut total = 0;
        while remaining > POISSON_SLICE {
            total += self.poisson_knuth(POISSON_SLICE);
            remaining -= POISSON_SLICE;
        }
        total + self.poisson_knuth(remaining)
    }

    /// Sample the number of successes in `n` Bernoulli(`p`) trials.
    ///
    /// Exact inversion of the binomial CDF from a single uniform draw. The
    /// probability mass is carried in log space, so large `n` cannot
    /// underflow the starting term.
    ///
    /// Every call consumes exactly one uniform, degenerate inputs included.
    /// Two streams with the same seed therefore stay aligned even when they
    /// are asked for different `n` or `p`, and the draw is non-decreasing
    /// in both.
    pub fn binomial(&mut self, n: u64, p: f64) -> u64 {
        let u = self.next_f64();
        if n == 0 || p.is_nan() || p <= 0.0 {
            return 0;
        }
        if p >= 1.0 {
            return n;
        }
        binomial_quantile(u, n, p)
    }

    fn poisson_knuth(&mut self, lambda: f64) -> u64 {
        let limit = (-lambda).exp();
        let mut count = 0;
        let mut product = self.next_f64();
        while product > limit {
            count += 1;
            product *= self.next_f64();
        }
        count
    }
}

impl RandomSource for RngManager {
    fn uniform(&mut self) -> f64 {
        self.next_f64()
    }

    fn binomial(&mut self, n: u64, p: f64) -> u64 {
        RngManager::binomial(self, n, p)
    }

    fn poisson(&mut self, lambda: f64) -> u64 {
        RngManager::poisson(self, lambda)
    }
}

/// Smallest `k` with `u < P(X <= k)` for `X ~ Binomial(n, p)`, `0 < p < 1`.
fn binomial_quantile(u: f64, n: u64, p: f64) -> u64 {
    let log_odds = p.ln() - (-p).ln_1p();
    let mut log_mass = n as f64 * (-p).ln_1p();
    let mut cdf = log_mass.exp();

    let mut k = 0;
    while u >= cdf && k < n {
        k += 1;
        log_mass += log_odds + ((n - k + 1) as f64 / k as f64).ln();
        cdf += log_mass.exp();
    }
    k
}

/// SplitMix64 finalizer, used only to derive stream seeds.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_stream_seeds_distinct() {
        let states: std::collections::HashSet<u64> = (0..1000)
            .map(|stream| RngManager::for_stream(7, stream).get_state())
            .collect();
        assert_eq!(states.len(), 1000, "stream seeds collided");
    }

    #[test]
    fn test_poisson_degenerate_means() {
        let mut rng = RngManager::new(1);
        assert_eq!(rng.poisson(0.0), 0);
        assert_eq!(rng.poisson(-3.0), 0);
        assert_eq!(rng.poisson(f64::NAN), 0);
        assert_eq!(rng.poisson(f64::INFINITY), 0);
    }

    #[test]
    fn test_binomial_degenerate_inputs() {
        let mut rng = RngManager::new(1);
        assert_eq!(rng.binomial(0, 0.7), 0);
        assert_eq!(rng.binomial(25, 0.0), 0);
        assert_eq!(rng.binomial(25, 1.0), 25);
        assert_eq!(rng.binomial(25, f64::NAN), 0);
    }

    #[test]
    fn test_binomial_never_exceeds_trials() {
        let mut rng = RngManager::new(99);
        for n in [1u64, 7, 511, 512, 513, 2000] {
            for p in [0.01, 0.3, 0.5, 0.51, 0.99] {
                assert!(rng.binomial(n, p) <= n);
            }
        }
    }

    #[test]
    fn test_binomial_consumes_one_uniform() {
        let mut rng = RngManager::new(5);
        let mut shadow = rng.clone();
        for (n, p) in [(4000, 0.37), (0, 0.5), (12, 0.0), (12, 1.0)] {
            rng.binomial(n, p);
            shadow.next();
            assert_eq!(rng.get_state(), shadow.get_state(), "n={} p={}", n, p);
        }
    }

    #[test]
    fn test_quantile_monotone_in_trials_and_probability() {
        for u in [0.01, 0.25, 0.5, 0.75, 0.99] {
            let mut previous = 0;
            for n in 0..200 {
                let k = binomial_quantile(u, n, 0.3);
                assert!(k >= previous && k <= previous + 1);
                previous = k;
            }
            let low = binomial_quantile(u, 150, 0.2);
            let high = binomial_quantile(u, 150, 0.6);
            assert!(low <= high);
        }
    }

    #[test]
    fn test_quantile_survives_large_trial_counts() {
        // (1 - 0.5)^5000 underflows as a plain product
        let k = binomial_quantile(0.5, 5000, 0.5);
        assert!((2400..=2600).contains(&k), "median draw {} far from 2500", k);
    }
}
