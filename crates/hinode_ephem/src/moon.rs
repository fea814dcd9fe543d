//! Lunar ecliptic longitude, latitude and horizontal parallax.
//!
//! Low-precision trigonometric series in `jy`, Julian years of dynamical
//! time from J2000.0. The dominant longitude and latitude terms carry a
//! small perturbation series inside their arguments, so those two terms
//! are applied outside the tables.

use hinode_frames::{normalize_360, sin_deg};

use crate::series::{sum_sines, SineTerm};

/// Perturbation added to the argument of the principal longitude term.
#[rustfmt::skip]
static MOON_LONGITUDE_PERTURBATION: [SineTerm; 4] = [
    SineTerm::new(0.0006,  54.0,  19.3),
    SineTerm::new(0.0006,  71.0,   0.2),
    SineTerm::new(0.0020,  55.0, 19.34),
    SineTerm::new(0.0040, 119.5,  1.33),
];

#[rustfmt::skip]
static MOON_LONGITUDE_TERMS: [SineTerm; 62] = [
    SineTerm::new(0.0003,   280.0,   23221.3),
    SineTerm::new(0.0003,   161.0,      40.7),
    SineTerm::new(0.0003,   311.0,    5492.0),
    SineTerm::new(0.0003,   147.0,   18089.3),
    SineTerm::new(0.0003,    66.0,    3494.7),
    SineTerm::new(0.0003,    83.0,    3814.0),
    SineTerm::new(0.0004,    20.0,     720.0),
    SineTerm::new(0.0004,    71.0,    9584.7),
    SineTerm::new(0.0004,   278.0,     120.1),
    SineTerm::new(0.0004,   313.0,     398.7),
    SineTerm::new(0.0005,   332.0,    5091.3),
    SineTerm::new(0.0005,   114.0,   17450.7),
    SineTerm::new(0.0005,   181.0,   19088.0),
    SineTerm::new(0.0005,   247.0,   22582.7),
    SineTerm::new(0.0006,   128.0,    1118.7),
    SineTerm::new(0.0007,   216.0,     278.6),
    SineTerm::new(0.0007,   275.0,    4853.3),
    SineTerm::new(0.0007,   140.0,    4052.0),
    SineTerm::new(0.0008,   204.0,    7906.7),
    SineTerm::new(0.0008,   188.0,   14037.3),
    SineTerm::new(0.0009,   218.0,    8586.0),
    SineTerm::new(0.0011,   276.5,  19208.02),
    SineTerm::new(0.0012,   339.0,  12678.71),
    SineTerm::new(0.0016,   242.2,  18569.38),
    SineTerm::new(0.0018,     4.1,   4013.29),
    SineTerm::new(0.0020,    55.0,     19.34),
    SineTerm::new(0.0021,   105.6,   3413.37),
    SineTerm::new(0.0021,   175.1,    719.98),
    SineTerm::new(0.0021,    87.5,   9903.97),
    SineTerm::new(0.0022,   240.6,   8185.36),
    SineTerm::new(0.0024,   252.8,   9224.66),
    SineTerm::new(0.0024,   211.9,    988.63),
    SineTerm::new(0.0026,   107.2,  13797.39),
    SineTerm::new(0.0027,   272.5,   9183.99),
    SineTerm::new(0.0037,   349.1,   5410.62),
    SineTerm::new(0.0039,   111.3,  17810.68),
    SineTerm::new(0.0040,   119.5,      1.33),
    SineTerm::new(0.0040,   145.6,  18449.32),
    SineTerm::new(0.0040,    13.2,  13317.34),
    SineTerm::new(0.0048,   235.0,     19.34),
    SineTerm::new(0.0050,   295.4,   4812.66),
    SineTerm::new(0.0052,   197.2,    319.32),
    SineTerm::new(0.0068,    53.2,   9265.33),
    SineTerm::new(0.0079,   278.2,   4493.34),
    SineTerm::new(0.0085,   201.5,   8266.71),
    SineTerm::new(0.0100,   44.89, 14315.966),
    SineTerm::new(0.0107,  336.44, 13038.696),
    SineTerm::new(0.0110,  231.59,  4892.052),
    SineTerm::new(0.0125,  141.51, 14436.029),
    SineTerm::new(0.0153,  130.84,   758.698),
    SineTerm::new(0.0305,  312.49,  5131.979),
    SineTerm::new(0.0348,  117.84,  4452.671),
    SineTerm::new(0.0410,  137.43,  4411.998),
    SineTerm::new(0.0459,  238.18,  8545.352),
    SineTerm::new(0.0533,   10.66, 13677.331),
    SineTerm::new(0.0572,  103.21,  3773.363),
    SineTerm::new(0.0588,  214.22,   638.635),
    SineTerm::new(0.1143,   6.546, 9664.0404),
    SineTerm::new(0.1856, 177.525,  359.9905),
    SineTerm::new(0.2136, 269.926, 9543.9773),
    SineTerm::new(0.6583, 235.700, 8905.3422),
    SineTerm::new(1.2740, 100.738, 4133.3536),
];

/// Perturbation added to the argument of the principal latitude term.
#[rustfmt::skip]
static MOON_LATITUDE_PERTURBATION: [SineTerm; 5] = [
    SineTerm::new(0.0005,  307.0,   19.4),
    SineTerm::new(0.0026,   55.0,  19.34),
    SineTerm::new(0.0040,  119.5,   1.33),
    SineTerm::new(0.0043,  322.1,  19.36),
    SineTerm::new(0.0267, 234.95, 19.341),
];

#[rustfmt::skip]
static MOON_LATITUDE_TERMS: [SineTerm; 46] = [
    SineTerm::new(0.0003,   234.0,   19268.0),
    SineTerm::new(0.0003,   146.0,    3353.3),
    SineTerm::new(0.0003,   107.0,   18149.4),
    SineTerm::new(0.0003,   205.0,   22642.7),
    SineTerm::new(0.0004,   147.0,   14097.4),
    SineTerm::new(0.0004,    13.0,    9325.4),
    SineTerm::new(0.0004,    81.0,   10242.6),
    SineTerm::new(0.0004,   238.0,   23281.3),
    SineTerm::new(0.0004,   311.0,    9483.9),
    SineTerm::new(0.0005,   239.0,    4193.4),
    SineTerm::new(0.0005,   280.0,    8485.3),
    SineTerm::new(0.0006,    52.0,   13617.3),
    SineTerm::new(0.0006,   224.0,    5590.7),
    SineTerm::new(0.0007,   294.0,   13098.7),
    SineTerm::new(0.0008,   326.0,    9724.1),
    SineTerm::new(0.0008,    70.0,   17870.7),
    SineTerm::new(0.0010,    18.0,  12978.66),
    SineTerm::new(0.0011,   138.3,  19147.99),
    SineTerm::new(0.0012,   148.2,   4851.36),
    SineTerm::new(0.0012,    38.4,   4812.68),
    SineTerm::new(0.0013,   155.4,    379.35),
    SineTerm::new(0.0013,    95.8,   4472.03),
    SineTerm::new(0.0014,   219.2,    299.96),
    SineTerm::new(0.0015,    45.8,   9964.00),
    SineTerm::new(0.0015,   211.1,   9284.69),
    SineTerm::new(0.0016,   135.7,    420.02),
    SineTerm::new(0.0017,    99.8,  14496.06),
    SineTerm::new(0.0018,   270.8,   5192.01),
    SineTerm::new(0.0018,   243.3,   8206.68),
    SineTerm::new(0.0019,   230.7,   9244.02),
    SineTerm::new(0.0021,   170.1,   1058.66),
    SineTerm::new(0.0022,   331.4,  13377.37),
    SineTerm::new(0.0025,   196.5,   8605.38),
    SineTerm::new(0.0034,   319.9,   4433.31),
    SineTerm::new(0.0042,   103.9,  18509.35),
    SineTerm::new(0.0043,   307.6,   5470.66),
    SineTerm::new(0.0082,   144.9,   3713.33),
    SineTerm::new(0.0088,   176.7,   4711.96),
    SineTerm::new(0.0093,   277.4,   8845.31),
    SineTerm::new(0.0172,    3.18, 14375.997),
    SineTerm::new(0.0326,  328.96, 13737.362),
    SineTerm::new(0.0463,  172.55,   698.667),
    SineTerm::new(0.0554,  194.01,  8965.374),
    SineTerm::new(0.1732, 142.427, 4073.3220),
    SineTerm::new(0.2777, 138.311,   60.0316),
    SineTerm::new(0.2806, 228.235, 9604.0088),
];

/// Constant 0.9507° term last (rate zero).
#[rustfmt::skip]
static MOON_PARALLAX_TERMS: [SineTerm; 9] = [
    SineTerm::new(0.0003,  227.0,   4412.0),
    SineTerm::new(0.0004,  194.0,   3773.4),
    SineTerm::new(0.0005,  329.0,   8545.4),
    SineTerm::new(0.0009,  100.0,  13677.3),
    SineTerm::new(0.0028,    0.0,  9543.98),
    SineTerm::new(0.0078,  325.7,  8905.34),
    SineTerm::new(0.0095,  190.7,  4133.35),
    SineTerm::new(0.0518, 224.98, 4771.989),
    SineTerm::new(0.9507,   90.0,      0.0),
];

/// Geocentric ecliptic longitude of the Moon in degrees, [0, 360).
pub fn lunar_longitude_deg(jy: f64) -> f64 {
    let am = sum_sines(&MOON_LONGITUDE_PERTURBATION, jy);
    let periodic = sum_sines(&MOON_LONGITUDE_TERMS, jy);
    let principal = 6.2887 * sin_deg(134.961 + 4771.9886 * jy + am);
    let mean = normalize_360(218.3161 + 4812.67881 * jy);
    normalize_360(periodic + principal + mean)
}

/// Geocentric ecliptic latitude of the Moon in degrees.
pub fn lunar_latitude_deg(jy: f64) -> f64 {
    let bm = sum_sines(&MOON_LATITUDE_PERTURBATION, jy);
    sum_sines(&MOON_LATITUDE_TERMS, jy) + 5.1282 * sin_deg(93.273 + 4832.0202 * jy + bm)
}

/// Lunar horizontal parallax in degrees.
pub fn lunar_parallax_deg(jy: f64) -> f64 {
    sum_sines(&MOON_PARALLAX_TERMS, jy)
}
