//! Single-run simulator
//!
//! Advances one worker's backlog through `days` steps:
//!
//! ```text
//! For each day d = 1..days:
//! 1. Arrivals      pending += Poisson(arrival_rate)
//! 2. Feedback      productivity *= 0.98 if yesterday was over threshold, else 1.01 (skipped on day 1)
//! 3. Completion    pending -= Binomial(pending, productivity), floored at 0
//! 4. Risk          logistic (or binary) function of pending - threshold
//! 5. Fatigue       1 - productivity
//! 6. Breach flag   pending > threshold
//! ```

use crate::models::{DayOutcome, DayState, RunTrajectory, SimulationParameters};
use crate::rng::RandomSource;

use super::strategy::ModelOptions;

/// Produces independent trajectories for a fixed parameter set.
///
/// The simulator holds no random state; each call to [`run`](Self::run)
/// consumes the stream it is handed.
///
/// # Example
/// ```
/// use burnout_sim_core::{ModelOptions, RngManager, RunSimulator, SimulationParameters};
///
/// let params = SimulationParameters::new(50, 0.3, 10, 14, 1);
/// let simulator = RunSimulator::new(&params, ModelOptions::default());
/// let trajectory = simulator.run(&mut RngManager::new(7));
/// assert_eq!(trajectory.len(), 14);
/// ```
#[derive(Debug, Clone)]
pub struct RunSimulator<'a> {
    params: &'a SimulationParameters,
    options: ModelOptions,
}

impl<'a> RunSimulator<'a> {
    pub fn new(params: &'a SimulationParameters, options: ModelOptions) -> Self {
        Self { params, options }
    }

    /// Simulate one run to completion.
    ///
    /// Parameters are assumed validated; an `n_tasks` of zero is accepted
    /// and simply starts the run with an empty backlog.
    pub fn run<R: RandomSource>(&self, rng: &mut R) -> RunTrajectory {
        let params = self.params;
        let mut state = DayState::new(params.n_tasks, params.p);
        let mut trajectory = RunTrajectory::with_capacity(params.days);
        let mut was_over_threshold = false;

        for day in 1..=params.days {
            state.add_arrivals(rng.poisson(params.arrival_rate));

            if day > 1 {
                state.apply_feedback(was_over_threshold);
            }

            let completed = self
                .options
                .completion_model
                .completed(rng, state.pending(), state.productivity());
            state.complete(completed);

            let pending = state.pending();
            let over_threshold = pending > params.threshold;
            trajectory.push(DayOutcome {
                pending,
                risk: self.options.risk_model.risk(pending, params.threshold),
                fatigue: state.fatigue(),
                over_threshold,
            });

            was_over_threshold = over_threshold;
        }

        trajectory
    }
}
