//! Hoopsim Shot Engine
//!
//! Platform-agnostic court geometry, shot probability model and Monte Carlo
//! shot trials. Rendering, input capture and charting stay with the host; this
//! crate only computes what they display.

pub mod config;
pub mod constants;
pub mod court;
pub mod error;
pub mod numbers;
pub mod probability;
pub mod rng;
pub mod session;
pub mod trials;

// Re-export commonly used types
pub use config::SessionConfig;
pub use court::{
    BasketOffset, BasketSelector, CourtPosition, CourtScale, distance_and_offset,
    resolve_basket_coordinate,
};
pub use error::{ConfigError, ShotError};
pub use probability::{ShotAssessment, Zone, assess, assess_offset, classify};
pub use rng::{CountingRng, RandomSource, ScriptedDraws, TrialStreams, derive_stream_seed};
pub use session::{PointerAction, ShotSession};
pub use trials::{ShotOutcome, SimulationResult, TrialOutcome, run_trials};

/// Receives the current assessment whenever it is recomputed.
/// Hosts implement this over their rendering surface.
pub trait AssessmentSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Show the latest assessment; `None` means no shot is placed.
    ///
    /// # Errors
    ///
    /// Returns an error if the host surface rejects the update.
    fn show_assessment(&mut self, assessment: Option<&ShotAssessment>) -> Result<(), Self::Error>;
}

/// Receives each completed simulation for progression charting.
pub trait ProgressionSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Plot a finished run.
    ///
    /// # Errors
    ///
    /// Returns an error if the host chart rejects the data.
    fn show_progression(&mut self, result: &SimulationResult) -> Result<(), Self::Error>;

    /// Remove a plotted run after its inputs changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the host chart rejects the update.
    fn clear_progression(&mut self) -> Result<(), Self::Error>;
}

/// Session wired to host collaborators: every input pushes the outputs it invalidates.
pub struct ShotEngine<A, P>
where
    A: AssessmentSink,
    P: ProgressionSink,
{
    session: ShotSession,
    assessments: A,
    progression: P,
}

impl<A, P> ShotEngine<A, P>
where
    A: AssessmentSink,
    P: ProgressionSink,
{
    pub const fn new(session: ShotSession, assessments: A, progression: P) -> Self {
        Self {
            session,
            assessments,
            progression,
        }
    }

    /// Place or move the shot and push the new assessment.
    ///
    /// # Errors
    ///
    /// Returns an error if either collaborator rejects the update.
    pub fn place_or_move_shot(&mut self, position: CourtPosition) -> anyhow::Result<ShotAssessment> {
        let assessment = self.session.place_or_move_shot(position);
        self.push_assessment()?;
        Ok(assessment)
    }

    /// Change the target basket and push the recomputed assessment.
    ///
    /// # Errors
    ///
    /// Returns an error if either collaborator rejects the update.
    pub fn select_basket(&mut self, selector: BasketSelector) -> anyhow::Result<()> {
        self.session.select_basket(selector);
        self.push_assessment()
    }

    /// Run a simulation and push it to the chart. Returns `false` when no shot is placed.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid trial arguments or a rejected chart update.
    pub fn request_simulation(&mut self, trial_count: Option<i64>) -> anyhow::Result<bool> {
        let Some(result) = self.session.request_simulation(trial_count)? else {
            return Ok(false);
        };
        self.progression.show_progression(result)?;
        Ok(true)
    }

    /// Clear the shot and tell both collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if either collaborator rejects the update.
    pub fn reset(&mut self) -> anyhow::Result<()> {
        self.session.reset();
        self.push_assessment()
    }

    fn push_assessment(&mut self) -> anyhow::Result<()> {
        self.assessments.show_assessment(self.session.assessment())?;
        self.progression.clear_progression()?;
        Ok(())
    }

    #[must_use]
    pub const fn session(&self) -> &ShotSession {
        &self.session
    }

    /// Consume the engine, returning the session and both collaborators.
    #[must_use]
    pub fn into_parts(self) -> (ShotSession, A, P) {
        (self.session, self.assessments, self.progression)
    }
}
