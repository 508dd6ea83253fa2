//! Named court spots exercised end to end through a fresh session.

use anyhow::{Context, Result, ensure};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use hoopsim_core::numbers::percent_tenth;
use hoopsim_core::{
    BasketSelector, CourtPosition, SessionConfig, ShotSession, SimulationResult, Zone, assess,
    run_trials,
};

const MIRROR_TOLERANCE: f64 = 1e-9;

/// A fixed spot on the court and the zone it must land in.
#[derive(Debug, Clone, Copy)]
pub struct ShotScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub basket: BasketSelector,
    pub expected_zone: Zone,
    pub trials: i64,
}

const CATALOG: &[ShotScenario] = &[
    ShotScenario {
        key: "smoke",
        name: "Layup Smoke Test",
        x: 8.0,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::RestrictedArea,
        trials: 10,
    },
    ShotScenario {
        key: "paint",
        name: "Paint Floater",
        x: 11.25,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::Paint,
        trials: 50,
    },
    ShotScenario {
        key: "behind-backboard",
        name: "Behind the Backboard",
        x: 1.0,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::Paint,
        trials: 50,
    },
    ShotScenario {
        key: "mid-range",
        name: "Straightaway Mid-Range",
        x: 17.25,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::MidRange,
        trials: 100,
    },
    ShotScenario {
        key: "wing-jumper",
        name: "Wing Jumper",
        x: 10.25,
        y: 36.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::MidRange,
        trials: 100,
    },
    ShotScenario {
        key: "long-mid-range",
        name: "Long Two",
        x: 25.25,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::LongMidRange,
        trials: 100,
    },
    ShotScenario {
        key: "corner-three",
        name: "Left Corner Three",
        x: 14.25,
        y: 47.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::CornerThree,
        trials: 250,
    },
    ShotScenario {
        key: "right-corner-three",
        name: "Right Corner Three",
        x: 79.75,
        y: 3.0,
        basket: BasketSelector::Right,
        expected_zone: Zone::CornerThree,
        trials: 250,
    },
    ShotScenario {
        key: "top-of-key",
        name: "Top of the Key Three",
        x: 30.25,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::ThreePoint,
        trials: 250,
    },
    ShotScenario {
        key: "deep-three",
        name: "Logo Range",
        x: 36.25,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::DeepThree,
        trials: 500,
    },
    ShotScenario {
        key: "half-court",
        name: "Half Court Heave",
        x: 47.0,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::HalfCourtRange,
        trials: 1000,
    },
    ShotScenario {
        key: "full-court",
        name: "Full Court Buzzer Beater",
        x: 88.0,
        y: 25.0,
        basket: BasketSelector::Left,
        expected_zone: Zone::FullCourt,
        trials: 1000,
    },
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.name)).collect()
}

pub fn get_scenario(key: &str) -> Option<&'static ShotScenario> {
    let key = key.to_lowercase();
    CATALOG.iter().find(|s| s.key == key)
}

/// Every catalog key, in listing order.
pub fn all_scenario_keys() -> Vec<String> {
    CATALOG.iter().map(|s| s.key.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct ScenarioRunner {
    config: SessionConfig,
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(config: SessionConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &ShotScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} ({} basket, seed {seed})",
                        scenario.name.bright_white(),
                        scenario.basket
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &ShotScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));

            match self.run_iteration(scenario, iteration_seed) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{iterations} passed ({duration:?})",
                            i + 1
                        );
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.as_str().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }

    fn run_iteration(&self, scenario: &ShotScenario, seed: u64) -> Result<()> {
        let config = SessionConfig {
            seed: Some(seed),
            ..self.config.clone()
        };
        let mut session = ShotSession::new(config).context("building session")?;
        session.select_basket(scenario.basket);

        let position = CourtPosition::new(scenario.x, scenario.y)?;
        let assessment = session.place_or_move_shot(position);
        ensure!(
            assessment.zone == scenario.expected_zone,
            "expected {} but assessed {} at {:.1} ft",
            scenario.expected_zone,
            assessment.zone,
            assessment.distance_feet
        );
        ensure!(
            (1.0..=95.0).contains(&assessment.probability_percent),
            "probability {} outside [1, 95]",
            assessment.probability_percent
        );

        let mirrored = assess(position.mirrored(), scenario.basket.opposite());
        ensure!(
            mirrored.zone == assessment.zone
                && (mirrored.distance_feet - assessment.distance_feet).abs() < MIRROR_TOLERANCE,
            "mirrored shot disagrees: {} at {:.1} ft vs {} at {:.1} ft",
            mirrored.zone,
            mirrored.distance_feet,
            assessment.zone,
            assessment.distance_feet
        );

        let result = session
            .request_simulation(Some(scenario.trials))?
            .cloned()
            .context("simulation unavailable after placing a shot")?;
        verify_progression(&result, session.trial_count())?;

        let mut replay_stream = session.streams().stream_for_run(0);
        let replay = run_trials(
            assessment.probability_percent,
            i64::from(session.trial_count()),
            &mut replay_stream,
        )?;
        ensure!(replay == result, "replaying run 0 produced a different progression");
        Ok(())
    }
}

/// Check the per-trial running totals against each other.
pub fn verify_progression(result: &SimulationResult, expected_trials: u32) -> Result<()> {
    ensure!(
        result.trial_count() == expected_trials,
        "expected {expected_trials} trials, got {}",
        result.trial_count()
    );

    let mut made = 0_u32;
    for (trial, expected_shot) in result.trials().iter().zip(1_u32..) {
        ensure!(trial.shot == expected_shot, "trial index {} out of order", trial.shot);
        ensure!(
            trial.made + trial.missed == trial.shot,
            "shot {}: made {} + missed {} != shot",
            trial.shot,
            trial.made,
            trial.missed
        );
        ensure!(
            trial.made == made || trial.made == made + 1,
            "shot {}: made jumped from {made} to {}",
            trial.shot,
            trial.made
        );
        made = trial.made;
        let percentage = percent_tenth(trial.made, trial.shot);
        ensure!(
            (trial.percentage - percentage).abs() < f64::EPSILON,
            "shot {}: percentage {} != {percentage}",
            trial.shot,
            trial.percentage
        );
    }
    ensure!(
        result.total_made() == made && result.total_missed() == expected_trials - made,
        "totals {}/{} disagree with the progression",
        result.total_made(),
        result.total_missed()
    );
    Ok(())
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
