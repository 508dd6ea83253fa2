//! Shot probability model: distance bands, corner split and wing bonus.
use serde::{Deserialize, Serialize};

use crate::constants::{
    CORNER_LATERAL_MIN_FT, CORNER_THREE_BASE_PCT, DEEP_FALLOFF_PER_FT, DEEP_FALLOFF_START_FT,
    DEEP_THREE_BASE_PCT, DEEP_THREE_MAX_FT, FULL_COURT_BASE_PCT, FULL_COURT_LONG_BASE_PCT,
    FULL_COURT_LONG_FT, HALF_COURT_BASE_PCT, HALF_COURT_MAX_FT, LOG_TARGET_ASSESS,
    LONG_MID_RANGE_BASE_PCT, LONG_MID_RANGE_MAX_FT, MAX_PROBABILITY_PCT, MID_RANGE_BASE_PCT,
    MID_RANGE_MAX_FT, MIN_PROBABILITY_PCT, PAINT_BASE_PCT, PAINT_MAX_FT,
    RESTRICTED_AREA_BASE_PCT, RESTRICTED_AREA_MAX_FT, THREE_POINT_BASE_PCT, THREE_POINT_MAX_FT,
    WING_ANGLE_MIN_RAD, WING_BONUS_PCT, WING_WINDOW_MAX_FT, WING_WINDOW_MIN_FT,
};
use crate::court::{
    BasketOffset, BasketSelector, CourtPosition, distance_and_offset, resolve_basket_coordinate,
};
use crate::numbers::round_tenth;

/// Named court region a shot falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "Restricted Area")]
    RestrictedArea,
    #[serde(rename = "Paint")]
    Paint,
    #[serde(rename = "Mid-Range")]
    MidRange,
    #[serde(rename = "Long Mid-Range")]
    LongMidRange,
    #[serde(rename = "Corner Three")]
    CornerThree,
    #[serde(rename = "Three-Point")]
    ThreePoint,
    #[serde(rename = "Deep Three")]
    DeepThree,
    #[serde(rename = "Half Court Range")]
    HalfCourtRange,
    #[serde(rename = "Full Court")]
    FullCourt,
}

impl Zone {
    pub const ALL: [Self; 9] = [
        Self::RestrictedArea,
        Self::Paint,
        Self::MidRange,
        Self::LongMidRange,
        Self::CornerThree,
        Self::ThreePoint,
        Self::DeepThree,
        Self::HalfCourtRange,
        Self::FullCourt,
    ];

    /// Display label shown next to the shot marker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RestrictedArea => "Restricted Area",
            Self::Paint => "Paint",
            Self::MidRange => "Mid-Range",
            Self::LongMidRange => "Long Mid-Range",
            Self::CornerThree => "Corner Three",
            Self::ThreePoint => "Three-Point",
            Self::DeepThree => "Deep Three",
            Self::HalfCourtRange => "Half Court Range",
            Self::FullCourt => "Full Court",
        }
    }

    /// Look a zone up by its display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| zone.label() == label)
    }

    /// Distance band `[min, max)` in feet; `None` means unbounded.
    ///
    /// Corner Three and Three-Point share a band and are split by lateral offset.
    #[must_use]
    pub const fn distance_band(self) -> (f64, Option<f64>) {
        match self {
            Self::RestrictedArea => (0.0, Some(RESTRICTED_AREA_MAX_FT)),
            Self::Paint => (RESTRICTED_AREA_MAX_FT, Some(PAINT_MAX_FT)),
            Self::MidRange => (PAINT_MAX_FT, Some(MID_RANGE_MAX_FT)),
            Self::LongMidRange => (MID_RANGE_MAX_FT, Some(LONG_MID_RANGE_MAX_FT)),
            Self::CornerThree | Self::ThreePoint => {
                (LONG_MID_RANGE_MAX_FT, Some(THREE_POINT_MAX_FT))
            }
            Self::DeepThree => (THREE_POINT_MAX_FT, Some(DEEP_THREE_MAX_FT)),
            Self::HalfCourtRange => (DEEP_THREE_MAX_FT, Some(HALF_COURT_MAX_FT)),
            Self::FullCourt => (HALF_COURT_MAX_FT, None),
        }
    }

    /// Published make-rate summary for the reference panel.
    #[must_use]
    pub const fn reference_rate(self) -> &'static str {
        match self {
            Self::RestrictedArea => "~63%",
            Self::Paint => "~42%",
            Self::MidRange => "~40%",
            Self::LongMidRange => "~38%",
            Self::CornerThree => "~39%",
            Self::ThreePoint => "~36%",
            Self::DeepThree => "~15-25%",
            Self::HalfCourtRange => "~5-15%",
            Self::FullCourt => "~1-5%",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived make-probability for one position and target basket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotAssessment {
    /// Make probability in percent, always within `[1, 95]`.
    pub probability_percent: f64,
    /// Distance to the target rim, rounded to one decimal.
    pub distance_feet: f64,
    pub zone: Zone,
}

impl ShotAssessment {
    #[must_use]
    pub const fn zone_label(&self) -> &'static str {
        self.zone.label()
    }
}

/// Assess a shot from `shot` at the `target` basket.
#[must_use]
pub fn assess(shot: CourtPosition, target: BasketSelector) -> ShotAssessment {
    let offset = distance_and_offset(shot, resolve_basket_coordinate(target));
    let assessment = assess_offset(offset);
    log::trace!(
        target: LOG_TARGET_ASSESS,
        "assessed ({:.2}, {:.2}) at {target} basket: {} {:.1}% @ {:.1} ft",
        shot.x(),
        shot.y(),
        assessment.zone,
        assessment.probability_percent,
        assessment.distance_feet
    );
    assessment
}

/// Assess a precomputed basket-to-shot offset.
#[must_use]
pub fn assess_offset(offset: BasketOffset) -> ShotAssessment {
    let (base, zone) = classify(offset);
    let adjusted = base + wing_bonus(offset);
    ShotAssessment {
        probability_percent: adjusted.clamp(MIN_PROBABILITY_PCT, MAX_PROBABILITY_PCT),
        distance_feet: round_tenth(offset.distance),
        zone,
    }
}

/// Zone and base probability before the wing bonus and clamping.
///
/// May return a negative base for long half-court heaves; the final clamp absorbs it.
#[must_use]
pub fn classify(offset: BasketOffset) -> (f64, Zone) {
    let d = offset.distance;
    if d < RESTRICTED_AREA_MAX_FT {
        (RESTRICTED_AREA_BASE_PCT, Zone::RestrictedArea)
    } else if d < PAINT_MAX_FT {
        (PAINT_BASE_PCT, Zone::Paint)
    } else if d < MID_RANGE_MAX_FT {
        (MID_RANGE_BASE_PCT, Zone::MidRange)
    } else if d < LONG_MID_RANGE_MAX_FT {
        (LONG_MID_RANGE_BASE_PCT, Zone::LongMidRange)
    } else if d < HALF_COURT_MAX_FT {
        classify_beyond_arc(d, offset.dy.abs())
    } else if d > FULL_COURT_LONG_FT {
        (FULL_COURT_LONG_BASE_PCT, Zone::FullCourt)
    } else {
        (FULL_COURT_BASE_PCT, Zone::FullCourt)
    }
}

fn classify_beyond_arc(d: f64, lateral: f64) -> (f64, Zone) {
    let (base, zone) = if lateral > CORNER_LATERAL_MIN_FT && d < THREE_POINT_MAX_FT {
        (CORNER_THREE_BASE_PCT, Zone::CornerThree)
    } else if d < THREE_POINT_MAX_FT {
        (THREE_POINT_BASE_PCT, Zone::ThreePoint)
    } else if d < DEEP_THREE_MAX_FT {
        (DEEP_THREE_BASE_PCT, Zone::DeepThree)
    } else {
        (HALF_COURT_BASE_PCT, Zone::HalfCourtRange)
    };
    let falloff = if d > DEEP_FALLOFF_START_FT {
        (d - DEEP_FALLOFF_START_FT) * DEEP_FALLOFF_PER_FT
    } else {
        0.0
    };
    (base - falloff, zone)
}

fn wing_bonus(offset: BasketOffset) -> f64 {
    let d = offset.distance;
    let in_window = d > WING_WINDOW_MIN_FT && d < WING_WINDOW_MAX_FT;
    if in_window && offset.angle_from_x_axis() > WING_ANGLE_MIN_RAD {
        WING_BONUS_PCT
    } else {
        0.0
    }
}
