//! Centralized court dimensions and shot-model tuning constants.
//!
//! Court measurements follow the NBA full court (94 ft by 50 ft). The shot
//! model thresholds are empirical and must stay literal: the zone table and
//! its tests depend on these exact values.

// Logging targets ----------------------------------------------------------
pub(crate) const LOG_TARGET_ASSESS: &str = "hoopsim::assess";
pub(crate) const LOG_TARGET_TRIALS: &str = "hoopsim::trials";
pub(crate) const LOG_TARGET_SESSION: &str = "hoopsim::session";
pub(crate) const LOG_TARGET_RNG: &str = "hoopsim::rng";

// Court dimensions (feet) --------------------------------------------------
pub const COURT_LENGTH_FT: f64 = 94.0;
pub const COURT_WIDTH_FT: f64 = 50.0;
pub const THREE_POINT_ARC_RADIUS_FT: f64 = 22.0;
pub const CORNER_THREE_DISTANCE_FT: f64 = 23.75;
pub const KEY_WIDTH_FT: f64 = 16.0;
pub const BASKET_OFFSET_FT: f64 = 5.25;

// Court markings (feet) ----------------------------------------------------
pub const KEY_LENGTH_FT: f64 = 19.0;
pub const FREE_THROW_CIRCLE_RADIUS_FT: f64 = 6.0;
pub const CENTER_CIRCLE_RADIUS_FT: f64 = 6.0;
pub const RESTRICTED_ARC_RADIUS_FT: f64 = 4.0;
pub const CORNER_THREE_SIDELINE_OFFSET_FT: f64 = 14.0;

// Rendering scale ----------------------------------------------------------
pub const DEFAULT_CANVAS_SCALE: f64 = 7.0;
pub const DEFAULT_DRAG_PICK_RADIUS_PX: f64 = 15.0;

// Zone bands (feet) --------------------------------------------------------
pub(crate) const RESTRICTED_AREA_MAX_FT: f64 = 3.0;
pub(crate) const PAINT_MAX_FT: f64 = 8.0;
pub(crate) const MID_RANGE_MAX_FT: f64 = 16.0;
pub(crate) const LONG_MID_RANGE_MAX_FT: f64 = CORNER_THREE_DISTANCE_FT;
pub(crate) const THREE_POINT_MAX_FT: f64 = 28.0;
pub(crate) const DEEP_THREE_MAX_FT: f64 = 35.0;
pub(crate) const HALF_COURT_MAX_FT: f64 = 47.0;
pub(crate) const FULL_COURT_LONG_FT: f64 = 70.0;
pub(crate) const CORNER_LATERAL_MIN_FT: f64 = CORNER_THREE_SIDELINE_OFFSET_FT;

// Zone base probabilities (percent) ----------------------------------------
pub(crate) const RESTRICTED_AREA_BASE_PCT: f64 = 63.0;
pub(crate) const PAINT_BASE_PCT: f64 = 42.0;
pub(crate) const MID_RANGE_BASE_PCT: f64 = 40.0;
pub(crate) const LONG_MID_RANGE_BASE_PCT: f64 = 38.0;
pub(crate) const CORNER_THREE_BASE_PCT: f64 = 39.0;
pub(crate) const THREE_POINT_BASE_PCT: f64 = 36.0;
pub(crate) const DEEP_THREE_BASE_PCT: f64 = 25.0;
pub(crate) const HALF_COURT_BASE_PCT: f64 = 15.0;
pub(crate) const FULL_COURT_BASE_PCT: f64 = 5.0;
pub(crate) const FULL_COURT_LONG_BASE_PCT: f64 = 2.0;

// Adjustments --------------------------------------------------------------
pub(crate) const DEEP_FALLOFF_START_FT: f64 = THREE_POINT_MAX_FT;
pub(crate) const DEEP_FALLOFF_PER_FT: f64 = 0.8;
pub(crate) const WING_ANGLE_MIN_RAD: f64 = std::f64::consts::FRAC_PI_4;
pub(crate) const WING_WINDOW_MIN_FT: f64 = 10.0;
pub(crate) const WING_WINDOW_MAX_FT: f64 = 30.0;
pub(crate) const WING_BONUS_PCT: f64 = 2.0;

// Probability and trial bounds ---------------------------------------------
pub const MIN_PROBABILITY_PCT: f64 = 1.0;
pub const MAX_PROBABILITY_PCT: f64 = 95.0;
/// Hard ceiling enforced by the trial simulator itself.
pub const CORE_MAX_TRIALS: u32 = 100_000;
/// Session-level clamp applied before the simulator is invoked.
pub const UI_MAX_TRIALS: u32 = 1_000;
pub const UI_MIN_TRIALS: u32 = 1;
pub const DEFAULT_TRIALS: u32 = 10;
