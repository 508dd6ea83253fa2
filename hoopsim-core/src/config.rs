//! Session configuration and the trial-count input policy.
use serde::{Deserialize, Serialize};

use crate::constants::{
    CORE_MAX_TRIALS, DEFAULT_CANVAS_SCALE, DEFAULT_DRAG_PICK_RADIUS_PX, DEFAULT_TRIALS,
    UI_MAX_TRIALS, UI_MIN_TRIALS,
};
use crate::court::CourtScale;
use crate::error::ConfigError;
use crate::numbers::clamp_i64_to_u32;

/// Host-facing knobs for a [`crate::ShotSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "SessionConfig::default_trials")]
    pub default_trials: u32,
    #[serde(default = "SessionConfig::default_max_trials")]
    pub max_trials: u32,
    #[serde(default = "SessionConfig::default_canvas_scale")]
    pub canvas_scale: f64,
    #[serde(default = "SessionConfig::default_drag_pick_radius_px")]
    pub drag_pick_radius_px: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionConfig {
    const fn default_trials() -> u32 {
        DEFAULT_TRIALS
    }

    const fn default_max_trials() -> u32 {
        UI_MAX_TRIALS
    }

    const fn default_canvas_scale() -> f64 {
        DEFAULT_CANVAS_SCALE
    }

    const fn default_drag_pick_radius_px() -> f64 {
        DEFAULT_DRAG_PICK_RADIUS_PX
    }

    /// Parse and validate a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(UI_MIN_TRIALS..=CORE_MAX_TRIALS).contains(&self.max_trials) {
            return Err(ConfigError::TrialRange {
                field: "max_trials",
                min: UI_MIN_TRIALS,
                max: CORE_MAX_TRIALS,
                value: self.max_trials,
            });
        }
        if !(UI_MIN_TRIALS..=self.max_trials).contains(&self.default_trials) {
            return Err(ConfigError::TrialRange {
                field: "default_trials",
                min: UI_MIN_TRIALS,
                max: self.max_trials,
                value: self.default_trials,
            });
        }
        CourtScale::new(self.canvas_scale)?;
        if !(self.drag_pick_radius_px.is_finite() && self.drag_pick_radius_px > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "drag_pick_radius_px",
                value: self.drag_pick_radius_px,
            });
        }
        Ok(())
    }

    /// Input policy for the trial-count field: clamp numbers into
    /// `[1, max_trials]`; absent or zero input falls back to the default.
    #[must_use]
    pub fn clamp_trial_count(&self, requested: Option<i64>) -> u32 {
        match requested {
            None | Some(0) => self.default_trials,
            Some(value) => clamp_i64_to_u32(value, UI_MIN_TRIALS, self.max_trials),
        }
    }

    /// Same policy applied to raw text input; unparsable text falls back to the default.
    #[must_use]
    pub fn parse_trial_count(&self, raw: &str) -> u32 {
        self.clamp_trial_count(raw.trim().parse::<i64>().ok())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_trials: Self::default_trials(),
            max_trials: Self::default_max_trials(),
            canvas_scale: Self::default_canvas_scale(),
            drag_pick_radius_px: Self::default_drag_pick_radius_px(),
            seed: None,
        }
    }
}
