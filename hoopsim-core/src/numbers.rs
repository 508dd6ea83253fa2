//! Numeric helpers centralizing rounding and safe numeric casts.

use num_traits::cast::cast;

/// Round to one decimal place. NaN maps to 0.0; values too large to scale
/// are already integral and pass through unchanged.
#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 10.0
}

/// Percentage `part / whole × 100` rounded to one decimal, 0.0 when `whole` is zero.
#[must_use]
pub fn percent_tenth(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_tenth(f64::from(part) / f64::from(whole) * 100.0)
}

/// Clamp an i64 into `[min, max]` and narrow it to u32.
#[must_use]
pub fn clamp_i64_to_u32(value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    cast::<i64, u32>(clamped).unwrap_or(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_tenth_handles_non_finite() {
        assert!((round_tenth(f64::NAN) - 0.0).abs() < f64::EPSILON);
        assert!((round_tenth(12.345) - 12.3).abs() < 1e-9);
        assert!((round_tenth(12.35001) - 12.4).abs() < 1e-9);
    }

    #[test]
    fn round_tenth_keeps_values_too_large_to_scale() {
        for value in [f64::MAX, 1e308, -f64::MAX] {
            let rounded = round_tenth(value);
            assert!(rounded.is_finite());
            assert!((rounded - value).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn percent_tenth_covers_zero_whole() {
        assert!((percent_tenth(3, 0) - 0.0).abs() < f64::EPSILON);
        assert!((percent_tenth(1, 3) - 33.3).abs() < 1e-9);
        assert!((percent_tenth(2, 3) - 66.7).abs() < 1e-9);
    }

    #[test]
    fn clamp_narrows_into_range() {
        assert_eq!(clamp_i64_to_u32(-5, 1, 1000), 1);
        assert_eq!(clamp_i64_to_u32(5000, 1, 1000), 1000);
        assert_eq!(clamp_i64_to_u32(42, 1, 1000), 42);
    }
}
