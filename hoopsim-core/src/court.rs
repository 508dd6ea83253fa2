//! Court coordinate space and basket-relative geometry.
//!
//! Positions are expressed in court feet: `x` runs along the 94 ft length from
//! the left baseline, `y` runs along the 50 ft width from the top sideline.
//! Rendering surfaces work in pixels; [`CourtScale`] strips that factor off
//! before anything reaches the geometry.

use serde::{Deserialize, Serialize};

use crate::constants::{BASKET_OFFSET_FT, COURT_LENGTH_FT, COURT_WIDTH_FT, DEFAULT_CANVAS_SCALE};
use crate::error::{ConfigError, ShotError};

/// Immutable point in court space, guaranteed finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct CourtPosition {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
}

impl CourtPosition {
    /// Build a position from court feet.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::NonFinitePosition`] when either coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self, ShotError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(ShotError::NonFinitePosition { x, y })
        }
    }

    const fn from_parts(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Reflect across the half-court line.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self::from_parts(COURT_LENGTH_FT - self.x, self.y)
    }

    /// Whether the point lies within the painted court rectangle.
    #[must_use]
    pub fn is_on_court(self) -> bool {
        (0.0..=COURT_LENGTH_FT).contains(&self.x) && (0.0..=COURT_WIDTH_FT).contains(&self.y)
    }

    /// Pull the point back inside the court rectangle. Used for dragged markers only.
    #[must_use]
    pub fn clamped_to_court(self) -> Self {
        Self::from_parts(
            self.x.clamp(0.0, COURT_LENGTH_FT),
            self.y.clamp(0.0, COURT_WIDTH_FT),
        )
    }

}

impl TryFrom<RawPosition> for CourtPosition {
    type Error = ShotError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

impl From<CourtPosition> for RawPosition {
    fn from(pos: CourtPosition) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

/// Which basket the shot is aimed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasketSelector {
    #[default]
    Left,
    Right,
}

impl BasketSelector {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl std::fmt::Display for BasketSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

const LEFT_BASKET: CourtPosition =
    CourtPosition::from_parts(BASKET_OFFSET_FT, COURT_WIDTH_FT / 2.0);
const RIGHT_BASKET: CourtPosition =
    CourtPosition::from_parts(COURT_LENGTH_FT - BASKET_OFFSET_FT, COURT_WIDTH_FT / 2.0);

/// Fixed rim location for the selected basket.
#[must_use]
pub const fn resolve_basket_coordinate(selector: BasketSelector) -> CourtPosition {
    match selector {
        BasketSelector::Left => LEFT_BASKET,
        BasketSelector::Right => RIGHT_BASKET,
    }
}

/// Basket-to-shot displacement in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasketOffset {
    pub distance: f64,
    pub dx: f64,
    pub dy: f64,
}

impl BasketOffset {
    /// Absolute angle in radians between the shot and the court's +x axis,
    /// measured at the basket. The same signed axis is used for both baskets.
    #[must_use]
    pub fn angle_from_x_axis(self) -> f64 {
        self.dy.atan2(self.dx).abs()
    }
}

/// Euclidean distance and signed axis offsets from `basket` to `shot`.
#[must_use]
pub fn distance_and_offset(shot: CourtPosition, basket: CourtPosition) -> BasketOffset {
    let dx = shot.x - basket.x;
    let dy = shot.y - basket.y;
    let distance = dx.hypot(dy);
    BasketOffset {
        distance: if distance.is_finite() {
            distance
        } else {
            f64::MAX
        },
        dx,
        dy,
    }
}

/// Pixel-per-foot factor used by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtScale {
    px_per_ft: f64,
}

impl Default for CourtScale {
    fn default() -> Self {
        Self {
            px_per_ft: DEFAULT_CANVAS_SCALE,
        }
    }
}

impl CourtScale {
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] when the factor is not a positive finite number.
    pub fn new(px_per_ft: f64) -> Result<Self, ConfigError> {
        if px_per_ft.is_finite() && px_per_ft > 0.0 {
            Ok(Self { px_per_ft })
        } else {
            Err(ConfigError::NonPositive {
                field: "canvas_scale",
                value: px_per_ft,
            })
        }
    }

    #[must_use]
    pub const fn px_per_ft(self) -> f64 {
        self.px_per_ft
    }

    /// Canvas dimensions `(width, height)` in pixels.
    #[must_use]
    pub fn canvas_size(self) -> (f64, f64) {
        (
            COURT_LENGTH_FT * self.px_per_ft,
            COURT_WIDTH_FT * self.px_per_ft,
        )
    }

    /// Convert a canvas pixel to court feet.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::NonFinitePosition`] for non-finite pixel input.
    pub fn to_court(self, px: f64, py: f64) -> Result<CourtPosition, ShotError> {
        if !(px.is_finite() && py.is_finite()) {
            return Err(ShotError::NonFinitePosition { x: px, y: py });
        }
        CourtPosition::new(px / self.px_per_ft, py / self.px_per_ft)
    }

    /// Convert court feet to canvas pixels.
    #[must_use]
    pub fn to_canvas(self, pos: CourtPosition) -> (f64, f64) {
        (pos.x * self.px_per_ft, pos.y * self.px_per_ft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn baskets_sit_on_the_width_midline() {
        let left = resolve_basket_coordinate(BasketSelector::Left);
        let right = resolve_basket_coordinate(BasketSelector::Right);
        assert!((left.x() - 5.25).abs() < EPS);
        assert!((right.x() - 88.75).abs() < EPS);
        assert!((left.y() - 25.0).abs() < EPS);
        assert_eq!(left.mirrored(), right);
    }

    #[test]
    fn offset_is_signed_from_basket_to_shot() {
        let basket = resolve_basket_coordinate(BasketSelector::Left);
        let shot = CourtPosition::new(8.25, 29.0).unwrap();
        let offset = distance_and_offset(shot, basket);
        assert!((offset.dx - 3.0).abs() < EPS);
        assert!((offset.dy - 4.0).abs() < EPS);
        assert!((offset.distance - 5.0).abs() < EPS);
    }

    #[test]
    fn angle_is_measured_from_the_positive_x_axis_at_both_baskets() {
        let shot = CourtPosition::new(15.25, 25.0).unwrap();
        let left = distance_and_offset(shot, resolve_basket_coordinate(BasketSelector::Left));
        assert!(left.angle_from_x_axis().abs() < EPS);

        // Straight on from half court at the right basket points down -x.
        let mirrored = shot.mirrored();
        let right = distance_and_offset(mirrored, resolve_basket_coordinate(BasketSelector::Right));
        assert!((right.angle_from_x_axis() - std::f64::consts::PI).abs() < EPS);

        let baseline = CourtPosition::new(5.25, 40.0).unwrap();
        let along = distance_and_offset(baseline, resolve_basket_coordinate(BasketSelector::Left));
        assert!((along.angle_from_x_axis() - std::f64::consts::FRAC_PI_2).abs() < EPS);
        let below = distance_and_offset(
            CourtPosition::new(5.25, 10.0).unwrap(),
            resolve_basket_coordinate(BasketSelector::Left),
        );
        assert!((below.angle_from_x_axis() - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn overflowing_distance_saturates() {
        let far = CourtPosition::new(f64::MAX, f64::MAX).unwrap();
        let offset = distance_and_offset(far, resolve_basket_coordinate(BasketSelector::Left));
        assert!(offset.distance.is_finite());
        assert!((offset.distance - f64::MAX).abs() < EPS);
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        assert!(matches!(
            CourtPosition::new(f64::NAN, 1.0),
            Err(ShotError::NonFinitePosition { .. })
        ));
        assert!(CourtPosition::new(1.0, f64::INFINITY).is_err());
        assert!(CourtPosition::new(-300.0, 900.0).is_ok());
    }

    #[test]
    fn clamping_keeps_points_inside_the_court() {
        let outside = CourtPosition::new(-4.0, 61.0).unwrap();
        assert!(!outside.is_on_court());
        let clamped = outside.clamped_to_court();
        assert!(clamped.is_on_court());
        assert!((clamped.x() - 0.0).abs() < EPS);
        assert!((clamped.y() - 50.0).abs() < EPS);
    }

    #[test]
    fn scale_round_trips_pixels() {
        let scale = CourtScale::default();
        let (w, h) = scale.canvas_size();
        assert!((w - 658.0).abs() < EPS);
        assert!((h - 350.0).abs() < EPS);
        let pos = scale.to_court(36.75, 175.0).unwrap();
        assert_eq!(pos, resolve_basket_coordinate(BasketSelector::Left));
        let (px, py) = scale.to_canvas(pos);
        assert!((px - 36.75).abs() < EPS);
        assert!((py - 175.0).abs() < EPS);
        assert!(CourtScale::new(0.0).is_err());
    }

    #[test]
    fn positions_deserialize_through_validation() {
        let pos: CourtPosition = serde_json::from_str(r#"{"x":10.5,"y":3.0}"#).unwrap();
        assert!((pos.x() - 10.5).abs() < EPS);
        let json = serde_json::to_string(&pos).unwrap();
        assert!(json.contains("\"x\":10.5"));
    }
}
