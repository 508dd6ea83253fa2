//! Monte Carlo shot trials against a fixed make probability.
use serde::{Deserialize, Serialize};

use crate::constants::{CORE_MAX_TRIALS, LOG_TARGET_TRIALS, MAX_PROBABILITY_PCT, MIN_PROBABILITY_PCT};
use crate::error::ShotError;
use crate::numbers::percent_tenth;
use crate::rng::RandomSource;

/// Result of a single simulated attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Made,
    Missed,
}

/// One trial plus the running totals up to and including it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// 1-based trial index.
    pub shot: u32,
    pub outcome: ShotOutcome,
    pub made: u32,
    pub missed: u32,
    /// Running make-percentage, one decimal.
    pub percentage: f64,
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    probability_percent: f64,
    trials: Vec<TrialOutcome>,
    total_made: u32,
    total_missed: u32,
}

impl SimulationResult {
    /// Probability the run was drawn against.
    #[must_use]
    pub const fn probability_percent(&self) -> f64 {
        self.probability_percent
    }

    /// Ordered progression, index 1..=N.
    #[must_use]
    pub fn trials(&self) -> &[TrialOutcome] {
        &self.trials
    }

    #[must_use]
    pub const fn total_made(&self) -> u32 {
        self.total_made
    }

    #[must_use]
    pub const fn total_missed(&self) -> u32 {
        self.total_missed
    }

    #[must_use]
    pub const fn trial_count(&self) -> u32 {
        self.total_made + self.total_missed
    }

    /// Final make-percentage, one decimal.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        percent_tenth(self.total_made, self.trial_count())
    }

    #[must_use]
    pub fn last(&self) -> Option<&TrialOutcome> {
        self.trials.last()
    }
}

/// Run `trial_count` independent attempts at `probability` percent.
///
/// A trial is made when its draw from `[0, 100)` is strictly below the probability.
///
/// # Errors
///
/// Returns [`ShotError::ProbabilityOutOfRange`] when the probability is outside
/// `[1, 95]` and [`ShotError::TrialCountOutOfRange`] when the count is below 1 or
/// above the simulator's ceiling. Neither input is clamped.
pub fn run_trials<S>(
    probability: f64,
    trial_count: i64,
    source: &mut S,
) -> Result<SimulationResult, ShotError>
where
    S: RandomSource + ?Sized,
{
    validate_probability(probability)?;
    let count = validate_trial_count(trial_count)?;

    let mut trials = Vec::with_capacity(count as usize);
    let mut made = 0_u32;
    let mut missed = 0_u32;
    for shot in 1..=count {
        let outcome = if source.draw_percent() < probability {
            made += 1;
            ShotOutcome::Made
        } else {
            missed += 1;
            ShotOutcome::Missed
        };
        trials.push(TrialOutcome {
            shot,
            outcome,
            made,
            missed,
            percentage: percent_tenth(made, shot),
        });
    }

    log::debug!(
        target: LOG_TARGET_TRIALS,
        "simulated {count} shots at {probability:.1}%: {made} made, {missed} missed"
    );
    Ok(SimulationResult {
        probability_percent: probability,
        trials,
        total_made: made,
        total_missed: missed,
    })
}

fn validate_probability(probability: f64) -> Result<(), ShotError> {
    if probability.is_finite() && (MIN_PROBABILITY_PCT..=MAX_PROBABILITY_PCT).contains(&probability)
    {
        Ok(())
    } else {
        Err(ShotError::ProbabilityOutOfRange {
            value: probability,
            min: MIN_PROBABILITY_PCT,
            max: MAX_PROBABILITY_PCT,
        })
    }
}

fn validate_trial_count(trial_count: i64) -> Result<u32, ShotError> {
    u32::try_from(trial_count)
        .ok()
        .filter(|count| (1..=CORE_MAX_TRIALS).contains(count))
        .ok_or(ShotError::TrialCountOutOfRange {
            requested: trial_count,
            min: 1,
            max: CORE_MAX_TRIALS,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedDraws;

    #[test]
    fn scripted_draws_produce_exact_progression() {
        let mut draws = ScriptedDraws::new([10.0, 50.0, 49.999, 99.0]);
        let result = run_trials(50.0, 4, &mut draws).unwrap();
        let outcomes: Vec<ShotOutcome> = result.trials().iter().map(|t| t.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                ShotOutcome::Made,
                ShotOutcome::Missed,
                ShotOutcome::Made,
                ShotOutcome::Missed
            ]
        );
        let percentages: Vec<f64> = result.trials().iter().map(|t| t.percentage).collect();
        assert_eq!(percentages, vec![100.0, 50.0, 66.7, 50.0]);
        assert_eq!(result.total_made(), 2);
        assert_eq!(result.total_missed(), 2);
        assert!((result.accuracy_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn draw_equal_to_probability_is_a_miss() {
        let mut draws = ScriptedDraws::new([63.0]);
        let result = run_trials(63.0, 1, &mut draws).unwrap();
        assert_eq!(result.trials()[0].outcome, ShotOutcome::Missed);
    }

    #[test]
    fn rejects_counts_outside_range() {
        let mut draws = ScriptedDraws::default();
        for bad in [0, -1, -1000, i64::from(CORE_MAX_TRIALS) + 1] {
            let err = run_trials(50.0, bad, &mut draws).unwrap_err();
            assert!(matches!(err, ShotError::TrialCountOutOfRange { requested, .. } if requested == bad));
        }
        assert_eq!(draws.draws(), 0);
    }

    #[test]
    fn rejects_probability_outside_range() {
        let mut draws = ScriptedDraws::default();
        for bad in [0.5, 95.5, f64::NAN, -3.0] {
            let err = run_trials(bad, 10, &mut draws).unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert!(run_trials(1.0, 1, &mut draws).is_ok());
        assert!(run_trials(95.0, 1, &mut draws).is_ok());
    }

    #[test]
    fn running_counts_sum_to_index() {
        let mut draws = ScriptedDraws::new([1.0, 80.0, 20.0, 70.0, 5.0, 90.0, 33.0]);
        let result = run_trials(40.0, 25, &mut draws).unwrap();
        assert_eq!(result.trials().len(), 25);
        let mut prev = (0, 0);
        for trial in result.trials() {
            assert_eq!(trial.made + trial.missed, trial.shot);
            assert!(trial.made >= prev.0 && trial.missed >= prev.1);
            prev = (trial.made, trial.missed);
        }
        let last = result.last().unwrap();
        assert_eq!(last.made, result.total_made());
        assert_eq!(last.missed, result.total_missed());
    }
}
