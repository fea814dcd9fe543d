//! Angle normalization and degree-based trigonometry helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle difference to (−180, 180] degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Sine of an angle in degrees, normalized to [0, 360) first.
#[inline]
pub fn sin_deg(deg: f64) -> f64 {
    normalize_360(deg).to_radians().sin()
}

/// Cosine of an angle in degrees, normalized to [0, 360) first.
#[inline]
pub fn cos_deg(deg: f64) -> f64 {
    normalize_360(deg).to_radians().cos()
}
