//! Scalar helpers shared by animation, layout, and input code.
//!
//! None of these functions panic. NaN and infinities flow through following ordinary `f64`
//! arithmetic.

/// Limits `value` to the closed range `[min, max]`.
///
/// Unlike [`f64::clamp`], this does not panic when `min > max`; the lower bound is checked
/// first. A NaN `value` is returned unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Converts degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Maps `value` onto its position within a repeating `period`, as a factor in `[0, 1]`.
///
/// Negative values wrap forward, so `to_factor(-1.0, 4.0)` is `0.75`.
pub fn to_factor(value: f64, period: f64) -> f64 {
    let factor = value.rem_euclid(period) / period;
    // rem_euclid can round up to `period` for tiny negative inputs.
    if factor >= 1.0 {
        0.0
    } else {
        factor
    }
}

/// Same as [`to_factor`] but stretched onto `[-1, 1]`.
pub fn to_signed_factor(value: f64, period: f64) -> f64 {
    to_factor(value, period) * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [-720.5, -90.0, -1.0, -1e-12, 0.0, 0.25, 3.0, 359.9, 1e9];

    #[test]
    fn clamp_stays_in_range_and_keeps_in_range_values() {
        for value in SAMPLES {
            let clamped = clamp(value, -10.0, 10.0);
            assert!((-10.0..=10.0).contains(&clamped), "{value} -> {clamped}");
            if (-10.0..=10.0).contains(&value) {
                assert_eq!(clamped, value);
            }
        }
        assert_eq!(clamp(5.0, 5.0, 5.0), 5.0);
    }

    #[test]
    fn clamp_propagates_nan_and_handles_infinity() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
        assert_eq!(clamp(f64::INFINITY, 0.0, 1.0), 1.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
    }

    #[test]
    fn degree_radian_conversions_are_inverse() {
        for value in SAMPLES {
            let round_trip = to_degrees(to_radians(value));
            assert!((round_trip - value).abs() <= value.abs() * 1e-12 + 1e-12);
        }
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn factors_are_confined_for_positive_periods() {
        for period in [0.5, 1.0, 360.0, 1e6] {
            for value in SAMPLES {
                let factor = to_factor(value, period);
                assert!((0.0..=1.0).contains(&factor), "{value} % {period} -> {factor}");
                let signed = to_signed_factor(value, period);
                assert!((-1.0..=1.0).contains(&signed), "{value} % {period} -> {signed}");
            }
        }
        assert_eq!(to_factor(-1.0, 4.0), 0.75);
        assert_eq!(to_signed_factor(2.0, 4.0), 0.0);
    }

    #[test]
    fn factor_of_nan_is_nan() {
        assert!(to_factor(f64::NAN, 1.0).is_nan());
        assert!(to_signed_factor(f64::INFINITY, 1.0).is_nan());
    }
}
