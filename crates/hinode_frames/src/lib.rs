//! Coordinate helpers for the rise/set engine.
//!
//! Provides angle normalization, the ecliptic → equatorial rotation with
//! mean obliquity of date, local sidereal time, and the equatorial →
//! horizontal (azimuth/altitude) formulas with Radau refraction. All
//! angles are in degrees.

pub mod angle;
pub mod ecliptic;
pub mod horizontal;
pub mod sidereal;

pub use angle::{cos_deg, normalize_180, normalize_360, sin_deg};
pub use ecliptic::{
    ecliptic_to_equatorial, mean_obliquity_deg, EclipticCoord, EquatorialCoord,
    OBLIQUITY_J2000_DEG,
};
pub use horizontal::{
    apparent_altitude_deg, azimuth_deg, geometric_altitude_deg, hour_angle_deg,
    radau_refraction_deg,
};
pub use sidereal::local_sidereal_time_deg;
