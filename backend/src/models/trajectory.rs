//! Per-run state and trajectory types

/// Lower bound on productivity after any adjustment.
pub const MIN_PRODUCTIVITY: f64 = 0.1;

/// Upper bound on productivity after any adjustment.
pub const MAX_PRODUCTIVITY: f64 = 1.0;

/// Productivity multiplier applied after a day over threshold.
pub const FATIGUE_DECAY: f64 = 0.98;

/// Productivity multiplier applied after a day at or under threshold.
pub const RECOVERY_GAIN: f64 = 1.01;

/// Mutable state of one worker within a single run.
///
/// # Invariants
///
/// - `productivity` stays in `[MIN_PRODUCTIVITY, MAX_PRODUCTIVITY]`
/// - `pending` never underflows (completion saturates at zero)
#[derive(Debug, Clone, PartialEq)]
pub struct DayState {
    pending: u64,
    productivity: f64,
}

impl DayState {
    /// Start a run with `n_tasks` outstanding and productivity `p`.
    ///
    /// `p` is clamped into the productivity bounds, so a base probability
    /// of 0 still completes work at the floor rate.
    pub fn new(n_tasks: u64, p: f64) -> Self {
        Self {
            pending: n_tasks,
            productivity: clamp_productivity(p),
        }
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    pub fn productivity(&self) -> f64 {
        self.productivity
    }

    /// Fatigue is the complement of productivity.
    pub fn fatigue(&self) -> f64 {
        1.0 - self.productivity
    }

    pub fn add_arrivals(&mut self, new_tasks: u64) {
        self.pending = self.pending.saturating_add(new_tasks);
    }

    /// Adjust productivity from whether yesterday ended over threshold.
    pub fn apply_feedback(&mut self, was_over_threshold: bool) {
        let factor = if was_over_threshold {
            FATIGUE_DECAY
        } else {
            RECOVERY_GAIN
        };
        self.productivity = clamp_productivity(self.productivity * factor);
    }

    pub fn complete(&mut self, completed: u64) {
        self.pending = self.pending.saturating_sub(completed);
    }
}

fn clamp_productivity(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_PRODUCTIVITY;
    }
    value.clamp(MIN_PRODUCTIVITY, MAX_PRODUCTIVITY)
}

/// End-of-day observation for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayOutcome {
    pub pending: u64,
    pub risk: f64,
    pub fatigue: f64,
    pub over_threshold: bool,
}

/// Ordered per-day outcomes of one run, day 1 first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunTrajectory {
    days: Vec<DayOutcome>,
}

impl RunTrajectory {
    pub fn with_capacity(days: usize) -> Self {
        Self {
            days: Vec::with_capacity(days),
        }
    }

    pub fn push(&mut self, outcome: DayOutcome) {
        self.days.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Outcome for a 1-based day index.
    pub fn day(&self, day: usize) -> Option<&DayOutcome> {
        day.checked_sub(1).and_then(|idx| self.days.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayOutcome> {
        self.days.iter()
    }

    pub fn outcomes(&self) -> &[DayOutcome] {
        &self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_productivity_clamped() {
        assert_eq!(DayState::new(5, 0.0).productivity(), MIN_PRODUCTIVITY);
        assert_eq!(DayState::new(5, 1.0).productivity(), MAX_PRODUCTIVITY);
        assert_eq!(DayState::new(5, 0.4).productivity(), 0.4);
    }

    #[test]
    fn test_feedback_decays_and_recovers() {
        let mut state = DayState::new(5, 0.5);
        state.apply_feedback(true);
        assert!((state.productivity() - 0.49).abs() < 1e-12);
        state.apply_feedback(false);
        assert!((state.productivity() - 0.4949).abs() < 1e-12);
    }

    #[test]
    fn test_feedback_respects_bounds() {
        let mut tired = DayState::new(5, 0.1);
        tired.apply_feedback(true);
        assert_eq!(tired.productivity(), MIN_PRODUCTIVITY);

        let mut fresh = DayState::new(5, 1.0);
        fresh.apply_feedback(false);
        assert_eq!(fresh.productivity(), MAX_PRODUCTIVITY);
    }

    #[test]
    fn test_completion_saturates_at_zero() {
        let mut state = DayState::new(3, 0.5);
        state.complete(10);
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_day_lookup_is_one_based() {
        let mut trajectory = RunTrajectory::with_capacity(2);
        for pending in [4, 2] {
            trajectory.push(DayOutcome {
                pending,
                risk: 0.0,
                fatigue: 0.0,
                over_threshold: false,
            });
        }
        assert!(trajectory.day(0).is_none());
        assert_eq!(trajectory.day(1).map(|d| d.pending), Some(4));
        assert_eq!(trajectory.day(2).map(|d| d.pending), Some(2));
        assert!(trajectory.day(3).is_none());
    }
}
