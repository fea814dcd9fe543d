//! Equatorial → horizontal (azimuth/altitude) for a ground observer.
//!
//! Azimuth is measured from north through east, [0, 360). Altitude is
//! signed degrees above the horizon. `H = LST − α` is the hour angle.

use crate::angle::normalize_360;

/// Hour angle H = LST − α in degrees (not normalized).
#[inline]
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    lst_deg - ra_deg
}

/// Azimuth in degrees, [0, 360).
///
/// `A = atan2(−cos δ sin H, sin δ cos φ − cos δ sin φ cos H)`
pub fn azimuth_deg(dec_deg: f64, hour_angle_deg: f64, latitude_deg: f64) -> f64 {
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_h, cos_h) = hour_angle_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude_deg.to_radians().sin_cos();

    let y = -cos_d * sin_h;
    let x = sin_d * cos_p - cos_d * sin_p * cos_h;
    normalize_360(y.atan2(x).to_degrees())
}

/// Geometric (airless) altitude in degrees.
pub fn geometric_altitude_deg(dec_deg: f64, hour_angle_deg: f64, latitude_deg: f64) -> f64 {
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude_deg.to_radians().sin_cos();
    let sin_alt = sin_d * sin_p + cos_d * cos_p * hour_angle_deg.to_radians().cos();
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Radau's refraction polynomial in degrees for a geometric altitude.
///
/// R = (58.76 − (0.406 − 0.0192·tan z)·tan z)·tan z / 3600, z = 90° − alt
pub fn radau_refraction_deg(altitude_deg: f64) -> f64 {
    let tan_z = (90.0 - altitude_deg).to_radians().tan();
    (58.76 - (0.406 - 0.0192 * tan_z) * tan_z) * tan_z / 3600.0
}

/// Altitude in degrees with Radau refraction applied.
pub fn apparent_altitude_deg(dec_deg: f64, hour_angle_deg: f64, latitude_deg: f64) -> f64 {
    let alt = geometric_altitude_deg(dec_deg, hour_angle_deg, latitude_deg);
    alt + radau_refraction_deg(alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKYO_LAT: f64 = 35.6586;

    #[test]
    fn equator_star_rises_due_east() {
        let az = azimuth_deg(0.0, -90.0, TOKYO_LAT);
        assert!((az - 90.0).abs() < 1e-10, "az = {az}");
    }

    #[test]
    fn equator_star_sets_due_west() {
        let az = azimuth_deg(0.0, 90.0, TOKYO_LAT);
        assert!((az - 270.0).abs() < 1e-10, "az = {az}");
    }

    #[test]
    fn transit_south_of_zenith() {
        let az = azimuth_deg(7.0, 0.0, TOKYO_LAT);
        assert!((az - 180.0).abs() < 1e-10, "az = {az}");
    }

    #[test]
    fn transit_north_of_zenith() {
        let az = azimuth_deg(60.0, 0.0, TOKYO_LAT);
        assert!(az.abs() < 1e-10 || (az - 360.0).abs() < 1e-10, "az = {az}");
    }

    #[test]
    fn meridian_altitude() {
        let alt = geometric_altitude_deg(7.0, 0.0, TOKYO_LAT);
        assert!((alt - (90.0 - TOKYO_LAT + 7.0)).abs() < 1e-10, "alt = {alt}");
    }

    #[test]
    fn hour_angle_wraparound_irrelevant() {
        let a = apparent_altitude_deg(10.0, -30.0, TOKYO_LAT);
        let b = apparent_altitude_deg(10.0, 330.0, TOKYO_LAT);
        assert!((a - b).abs() < 1e-10);
        assert!((azimuth_deg(10.0, -30.0, TOKYO_LAT) - azimuth_deg(10.0, 330.0, TOKYO_LAT)).abs() < 1e-9);
    }

    #[test]
    fn refraction_values() {
        assert!(radau_refraction_deg(90.0).abs() < 1e-12);
        // tan z = 1 at 45°
        let r = radau_refraction_deg(45.0);
        assert!((r - 58.3732 / 3600.0).abs() < 1e-9, "r = {r}");
        assert!(radau_refraction_deg(10.0) > radau_refraction_deg(30.0));
    }

    #[test]
    fn apparent_raises_altitude() {
        let geo = geometric_altitude_deg(20.0, 15.0, TOKYO_LAT);
        let app = apparent_altitude_deg(20.0, 15.0, TOKYO_LAT);
        assert!(app > geo);
        assert!(app - geo < 0.02);
    }
}
