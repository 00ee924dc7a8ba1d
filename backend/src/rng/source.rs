//! Random variate contract consumed by the single-run simulator.

/// Source of the three variates the backlog model needs.
///
/// Implementations must be reproducible for a fixed seed. A source is owned
/// by exactly one run at a time; concurrent runs each hold their own.
pub trait RandomSource {
    /// Uniform draw in `[0.0, 1.0)`.
    fn uniform(&mut self) -> f64;

    /// Number of successes in `n` independent Bernoulli(`p`) trials.
    fn binomial(&mut self, n: u64, p: f64) -> u64;

    /// Non-negative Poisson(`lambda`) count.
    fn poisson(&mut self, lambda: f64) -> u64;

    /// Single Bernoulli(`p`) trial.
    fn bernoulli(&mut self, p: f64) -> bool {
        self.uniform() < p
    }
}
