use crate::config::SessionConfig;
use crate::constants::LOG_TARGET_SESSION;
use crate::court::{BasketSelector, CourtPosition, CourtScale};
use crate::error::{ConfigError, ShotError};
use crate::probability::{ShotAssessment, assess};
use crate::rng::{RandomSource, TrialStreams};
use crate::trials::{SimulationResult, run_trials};

/// What a pointer press on the canvas did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// The press landed on the existing marker; subsequent moves drag it.
    DragStarted,
    /// A new shot was placed at the press location.
    Placed(ShotAssessment),
}

/// Interactive state binding a shot, its target basket and the latest simulation.
///
/// Every mutation recomputes the assessment explicitly and drops any
/// simulation tied to the previous inputs.
#[derive(Debug, Clone)]
pub struct ShotSession {
    config: SessionConfig,
    scale: CourtScale,
    streams: TrialStreams,
    basket: BasketSelector,
    shot: Option<CourtPosition>,
    assessment: Option<ShotAssessment>,
    trial_count: u32,
    result: Option<SimulationResult>,
    dragging: bool,
}

impl ShotSession {
    /// Construct an empty session. Without a configured seed the trial streams
    /// are seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration fails validation.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scale = CourtScale::new(config.canvas_scale)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::from_validated(config, scale, seed))
    }

    /// Default configuration with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let config = SessionConfig {
            seed: Some(seed),
            ..SessionConfig::default()
        };
        let scale = CourtScale::new(config.canvas_scale).unwrap_or_default();
        Self::from_validated(config, scale, seed)
    }

    fn from_validated(config: SessionConfig, scale: CourtScale, seed: u64) -> Self {
        Self {
            scale,
            streams: TrialStreams::from_user_seed(seed),
            basket: BasketSelector::default(),
            shot: None,
            assessment: None,
            trial_count: config.default_trials,
            result: None,
            dragging: false,
            config,
        }
    }

    /// Place a new shot or move the existing one.
    pub fn place_or_move_shot(&mut self, position: CourtPosition) -> ShotAssessment {
        self.shot = Some(position);
        self.result = None;
        self.recompute().unwrap_or_else(|| assess(position, self.basket))
    }

    /// Switch the target basket, recomputing the assessment when a shot exists.
    pub fn select_basket(&mut self, selector: BasketSelector) -> Option<ShotAssessment> {
        self.basket = selector;
        self.result = None;
        self.recompute()
    }

    /// Apply the trial-count input policy and return the count that will be used.
    pub fn set_trial_count(&mut self, requested: Option<i64>) -> u32 {
        let count = self.config.clamp_trial_count(requested);
        if count != self.trial_count {
            self.trial_count = count;
            self.result = None;
        }
        count
    }

    /// Run a simulation on the session's next seeded stream.
    ///
    /// Returns `Ok(None)` when no shot has been placed yet.
    ///
    /// # Errors
    ///
    /// Propagates [`ShotError`] from the trial simulator.
    pub fn request_simulation(
        &mut self,
        trial_count: Option<i64>,
    ) -> Result<Option<&SimulationResult>, ShotError> {
        if self.assessment.is_none() {
            return Ok(None);
        }
        self.set_trial_count(trial_count);
        let mut stream = self.streams.next_stream();
        self.simulate(&mut stream)
    }

    /// Run a simulation drawing from a caller-supplied source.
    ///
    /// # Errors
    ///
    /// Propagates [`ShotError`] from the trial simulator.
    pub fn request_simulation_with<S>(
        &mut self,
        trial_count: Option<i64>,
        source: &mut S,
    ) -> Result<Option<&SimulationResult>, ShotError>
    where
        S: RandomSource + ?Sized,
    {
        if self.assessment.is_none() {
            return Ok(None);
        }
        self.set_trial_count(trial_count);
        self.simulate(source)
    }

    fn simulate<S>(&mut self, source: &mut S) -> Result<Option<&SimulationResult>, ShotError>
    where
        S: RandomSource + ?Sized,
    {
        let Some(assessment) = self.assessment else {
            return Ok(None);
        };
        let result = run_trials(
            assessment.probability_percent,
            i64::from(self.trial_count),
            source,
        )?;
        log::debug!(
            target: LOG_TARGET_SESSION,
            "simulation complete: {}/{} made ({:.1}%)",
            result.total_made(),
            result.trial_count(),
            result.accuracy_percent()
        );
        self.result = Some(result);
        Ok(self.result.as_ref())
    }

    /// Interpret a pointer press in canvas pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::NonFinitePosition`] for non-finite pixel input.
    pub fn pointer_down(&mut self, px: f64, py: f64) -> Result<PointerAction, ShotError> {
        let pressed = self.scale.to_court(px, py)?;
        if let Some(current) = self.shot {
            let (cx, cy) = self.scale.to_canvas(current);
            if (px - cx).hypot(py - cy) < self.config.drag_pick_radius_px {
                self.dragging = true;
                return Ok(PointerAction::DragStarted);
            }
        }
        Ok(PointerAction::Placed(self.place_or_move_shot(pressed)))
    }

    /// Move the marker while dragging; the marker stays inside the court.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::NonFinitePosition`] for non-finite pixel input.
    pub fn pointer_move(&mut self, px: f64, py: f64) -> Result<Option<ShotAssessment>, ShotError> {
        if !self.dragging {
            return Ok(None);
        }
        let target = self.scale.to_court(px, py)?.clamped_to_court();
        Ok(Some(self.place_or_move_shot(target)))
    }

    /// End any drag in progress.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Clear the shot, its assessment and any simulation.
    pub fn reset(&mut self) {
        log::debug!(target: LOG_TARGET_SESSION, "session reset");
        self.shot = None;
        self.assessment = None;
        self.result = None;
        self.dragging = false;
    }

    /// Deterministically reseed the trial streams.
    pub fn reseed(&mut self, seed: u64) {
        self.streams = TrialStreams::from_user_seed(seed);
        self.config.seed = Some(seed);
    }

    fn recompute(&mut self) -> Option<ShotAssessment> {
        self.assessment = self.shot.map(|shot| assess(shot, self.basket));
        if let Some(assessment) = &self.assessment {
            log::debug!(
                target: LOG_TARGET_SESSION,
                "assessment: {} {:.1}% at {:.1} ft ({} basket)",
                assessment.zone,
                assessment.probability_percent,
                assessment.distance_feet,
                self.basket
            );
        }
        self.assessment
    }

    #[must_use]
    pub const fn shot(&self) -> Option<CourtPosition> {
        self.shot
    }

    #[must_use]
    pub const fn basket(&self) -> BasketSelector {
        self.basket
    }

    #[must_use]
    pub const fn assessment(&self) -> Option<&ShotAssessment> {
        self.assessment.as_ref()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn trial_count(&self) -> u32 {
        self.trial_count
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn scale(&self) -> CourtScale {
        self.scale
    }

    #[must_use]
    pub const fn streams(&self) -> &TrialStreams {
        &self.streams
    }
}
