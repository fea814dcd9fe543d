//! Low-precision Sun and Moon ephemerides.
//!
//! Every quantity is a trigonometric series in `jy`, Julian years of
//! dynamical time from J2000.0 (see `hinode_time::julian_years`). Accuracy
//! is of the order of 0.01° for the Sun and 0.1° for the Moon, enough
//! for rise/set times to within about a minute.

pub mod moon;
pub mod series;
pub mod sun;

use std::fmt::{Display, Formatter};

use hinode_frames::EclipticCoord;

pub use moon::{lunar_latitude_deg, lunar_longitude_deg, lunar_parallax_deg};
pub use series::{sum_sines, SineTerm};
pub use sun::{solar_distance_au, solar_longitude_deg, solar_parallax_deg, solar_semidiameter_deg};

/// Bodies covered by the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Geocentric ecliptic position at `jy`.
    pub fn ecliptic_position(self, jy: f64) -> EclipticCoord {
        match self {
            Self::Sun => EclipticCoord {
                lat_deg: 0.0,
                lon_deg: solar_longitude_deg(jy),
            },
            Self::Moon => EclipticCoord {
                lat_deg: lunar_latitude_deg(jy),
                lon_deg: lunar_longitude_deg(jy),
            },
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sun => f.write_str("Sun"),
            Self::Moon => f.write_str("Moon"),
        }
    }
}
