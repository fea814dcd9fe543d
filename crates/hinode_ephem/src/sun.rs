//! Solar ecliptic longitude and Earth–Sun distance.
//!
//! Low-precision trigonometric series in `jy`, Julian years of dynamical
//! time from J2000.0. The Sun's ecliptic latitude is taken as zero.

use hinode_frames::{normalize_360, sin_deg};

use crate::series::{sum_sines, SineTerm};

/// Solar angular semidiameter at 1 au, degrees.
const SEMIDIAMETER_1AU_DEG: f64 = 0.266994;

/// Solar horizontal parallax at 1 au, degrees.
const PARALLAX_1AU_DEG: f64 = 0.0024428;

/// Periodic longitude terms, smallest first. The equation of center has a
/// time-dependent amplitude and is applied separately.
#[rustfmt::skip]
static SUN_LONGITUDE_TERMS: [SineTerm; 18] = [
    SineTerm::new(0.0003,  329.7,   44.43),
    SineTerm::new(0.0003,  352.5, 1079.97),
    SineTerm::new(0.0004,   21.1,  720.02),
    SineTerm::new(0.0004,  157.3,  299.30),
    SineTerm::new(0.0004,  234.9,  315.56),
    SineTerm::new(0.0005,  291.2,   22.81),
    SineTerm::new(0.0005,  207.4,    1.50),
    SineTerm::new(0.0006,   29.8,  337.18),
    SineTerm::new(0.0007,  206.8,   30.35),
    SineTerm::new(0.0007,  153.3,   90.38),
    SineTerm::new(0.0008,  132.5,  659.29),
    SineTerm::new(0.0013,   81.4,  225.18),
    SineTerm::new(0.0015,  343.2,  450.37),
    SineTerm::new(0.0018,  251.3,    0.20),
    SineTerm::new(0.0018,  297.8, 4452.67),
    SineTerm::new(0.0020,  247.1,  329.64),
    SineTerm::new(0.0048, 234.95,  19.341),
    SineTerm::new(0.0200, 355.05, 719.981),
];

/// Periodic terms of log10(distance / au); the dominant term is applied
/// separately.
#[rustfmt::skip]
static SUN_DISTANCE_TERMS: [SineTerm; 5] = [
    SineTerm::new(0.000007, 156.0,   329.6),
    SineTerm::new(0.000007, 254.0,   450.4),
    SineTerm::new(0.000013,  27.8, 4452.67),
    SineTerm::new(0.000030,  90.0,     0.0),
    SineTerm::new(0.000091, 265.1,  719.98),
];

/// Geocentric ecliptic longitude of the Sun in degrees, [0, 360).
pub fn solar_longitude_deg(jy: f64) -> f64 {
    let periodic = sum_sines(&SUN_LONGITUDE_TERMS, jy);
    let center = (1.9146 - 0.00005 * jy) * sin_deg(357.538 + 359.991 * jy);
    let mean = normalize_360(280.4603 + 360.00769 * jy);
    normalize_360(periodic + center + mean)
}

/// Earth–Sun distance in au.
pub fn solar_distance_au(jy: f64) -> f64 {
    let log_r = sum_sines(&SUN_DISTANCE_TERMS, jy)
        + (0.007256 - 0.0000002 * jy) * sin_deg(267.54 + 359.991 * jy);
    10f64.powf(log_r)
}

/// Apparent solar semidiameter in degrees at distance `distance_au`.
pub fn solar_semidiameter_deg(distance_au: f64) -> f64 {
    SEMIDIAMETER_1AU_DEG / distance_au
}

/// Solar horizontal parallax in degrees at distance `distance_au`.
pub fn solar_parallax_deg(distance_au: f64) -> f64 {
    PARALLAX_1AU_DEG / distance_au
}
