//! Ecliptic ↔ equatorial conversion with the mean obliquity of date.

use crate::angle::normalize_360;

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439291;

/// Linear obliquity rate in degrees per Julian year.
const OBLIQUITY_RATE_DEG_PER_YEAR: f64 = 0.000130042;

/// Ecliptic latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoord {
    /// Ecliptic latitude β in degrees, range [−90, 90].
    pub lat_deg: f64,
    /// Ecliptic longitude λ in degrees.
    pub lon_deg: f64,
}

/// Equatorial declination/right ascension in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoord {
    /// Declination δ in degrees, range [−90, 90].
    pub dec_deg: f64,
    /// Right ascension α in degrees, range [0, 360).
    pub ra_deg: f64,
}

/// Mean obliquity of the ecliptic in degrees, `jy` Julian years after J2000.0.
pub fn mean_obliquity_deg(jy: f64) -> f64 {
    OBLIQUITY_J2000_DEG - OBLIQUITY_RATE_DEG_PER_YEAR * jy
}

/// Rotate ecliptic coordinates into the equatorial frame of date.
///
/// Direction cosines of the body in the equatorial frame:
///
/// ```text
/// a = cos β cos λ
/// b = −sin β sin ε + cos β sin λ cos ε
/// c =  sin β cos ε + cos β sin λ sin ε
/// α = atan2(b, a),  δ = asin(c)
/// ```
pub fn ecliptic_to_equatorial(jy: f64, ecl: EclipticCoord) -> EquatorialCoord {
    let eps = mean_obliquity_deg(jy).to_radians();
    let beta = ecl.lat_deg.to_radians();
    let lambda = ecl.lon_deg.to_radians();

    let (sin_e, cos_e) = eps.sin_cos();
    let (sin_b, cos_b) = beta.sin_cos();
    let (sin_l, cos_l) = lambda.sin_cos();

    let a = cos_b * cos_l;
    let b = -sin_b * sin_e + cos_b * sin_l * cos_e;
    let c = sin_b * cos_e + cos_b * sin_l * sin_e;

    EquatorialCoord {
        dec_deg: c.clamp(-1.0, 1.0).asin().to_degrees(),
        ra_deg: normalize_360(b.atan2(a).to_degrees()),
    }
}
