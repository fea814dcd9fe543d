//! Local mean sidereal time from the day-progress epoch.
//!
//! LST = 325.4606 + 360.007700536·jy + 0.00000003879·jy² + 360·t + λ
//!
//! `jy` is Julian years of dynamical time from J2000.0, `t` the fraction of
//! the civil day since local midnight and λ the observer east longitude.
//! Result in degrees, [0, 360).

use crate::angle::normalize_360;

/// Local sidereal time in degrees.
pub fn local_sidereal_time_deg(jy: f64, t: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(
        325.4606 + 360.007700536 * jy + 0.00000003879 * jy * jy + 360.0 * t + longitude_east_deg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range() {
        for i in 0..100 {
            let lst = local_sidereal_time_deg(i as f64 * 0.37, i as f64 * 0.01, -120.0);
            assert!((0.0..360.0).contains(&lst), "lst = {lst}");
        }
    }

    #[test]
    fn longitude_shifts_one_for_one() {
        let a = local_sidereal_time_deg(21.27, 0.3, 0.0);
        let b = local_sidereal_time_deg(21.27, 0.3, 15.0);
        assert!((b - a - 15.0).abs() < 1e-9);
    }

    #[test]
    fn sidereal_day_gain() {
        // Over one solar day the sidereal clock gains ≈ 0.9856°.
        let jy0 = 21.0;
        let a = local_sidereal_time_deg(jy0, 0.0, 0.0);
        let b = local_sidereal_time_deg(jy0 + 1.0 / 365.25, 1.0, 0.0);
        let gain = normalize_360(b - a);
        assert!((gain - 0.98565).abs() < 1e-3, "gain = {gain}");
    }
}
