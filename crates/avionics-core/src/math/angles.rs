//! Degree helpers shared by the angle extractors
//!
//! All public angles in this crate are in degrees; every trigonometric call
//! goes through radians first.

/// Angle in degrees of atan2(y, x)
///
/// atan2(0, 0) is 0 by convention.
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// asin in degrees with the argument clamped to [-1, 1]
///
/// Ratios computed from normalized vectors can overshoot 1 by a few ulps,
/// which would otherwise produce NaN.
pub fn asin_deg_clamped(ratio: f64) -> f64 {
    ratio.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Wrap an azimuth in degrees into [0, 360)
pub fn wrap_azimuth(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
