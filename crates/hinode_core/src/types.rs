//! Observer location, event kinds and result types.

use std::fmt::{Display, Formatter};

use chrono::FixedOffset;
use hinode_ephem::Body;
use hinode_time::CivilTime;

use crate::error::RiseSetError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above sea level in meters, ≥ 0.
    pub height_m: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Result<Self, RiseSetError> {
        let location = Self {
            latitude_deg,
            longitude_deg,
            height_m,
        };
        location.validate()?;
        Ok(location)
    }

    pub(crate) fn validate(&self) -> Result<(), RiseSetError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(RiseSetError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(RiseSetError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !(self.height_m.is_finite() && self.height_m >= 0.0) {
            return Err(RiseSetError::InvalidLocation(
                "height must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Which crossing to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Upper limb crosses the horizon going up.
    Rise,
    /// Upper limb crosses the horizon going down.
    Set,
    /// Upper meridian crossing.
    Transit,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [Self::Rise, Self::Set, Self::Transit];

    /// Whether the result angle is an azimuth (rise/set) rather than an altitude.
    pub fn reports_azimuth(self) -> bool {
        !matches!(self, Self::Transit)
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rise => f.write_str("rise"),
            Self::Set => f.write_str("set"),
            Self::Transit => f.write_str("transit"),
        }
    }
}

/// Flat event record: instant and angle, with a sentinel for "no event".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventResult {
    pub instant: CivilTime,
    /// Azimuth [0, 360) for rise/set, altitude for transit, −1 for no event.
    pub angle_deg: f64,
}

impl EventResult {
    /// Angle used by the "no event" sentinel.
    pub const NO_EVENT_ANGLE: f64 = -1.0;

    /// The sentinel: epoch-zero instant in `offset`, angle −1.
    pub fn none(offset: FixedOffset) -> Self {
        Self {
            instant: CivilTime::epoch_zero(offset),
            angle_deg: Self::NO_EVENT_ANGLE,
        }
    }

    /// Whether this is the "no event" sentinel.
    pub fn is_none(&self) -> bool {
        self.angle_deg == Self::NO_EVENT_ANGLE && self.instant.to_utc().timestamp() == 0
    }
}

/// Outcome of solving one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// The event occurs at `instant`.
    Event {
        /// Day fraction after local midnight.
        t_days: f64,
        instant: CivilTime,
        /// Azimuth [0, 360) for rise/set, refracted altitude for transit.
        angle_deg: f64,
        iterations: usize,
    },
    /// The iteration converged outside the civil day (Moon only).
    NotWithinDay { t_days: f64 },
    /// The body stays below the horizon altitude all day.
    NeverRises,
    /// The body stays above the horizon altitude all day.
    NeverSets,
}

impl RiseSetResult {
    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event { .. })
    }

    /// Instant and angle of an event, `None` otherwise.
    pub fn event(&self) -> Option<(CivilTime, f64)> {
        match *self {
            Self::Event {
                instant, angle_deg, ..
            } => Some((instant, angle_deg)),
            _ => None,
        }
    }

    /// Flatten into an `EventResult`, using the sentinel for non-events.
    pub fn to_event_result(&self, offset: FixedOffset) -> EventResult {
        match self.event() {
            Some((instant, angle_deg)) => EventResult { instant, angle_deg },
            None => EventResult::none(offset),
        }
    }
}

/// All six events for one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEvents {
    pub sunrise: RiseSetResult,
    pub sunset: RiseSetResult,
    pub sun_transit: RiseSetResult,
    pub moonrise: RiseSetResult,
    pub moonset: RiseSetResult,
    pub moon_transit: RiseSetResult,
}

impl DailyEvents {
    /// Result for one body and event kind.
    pub fn get(&self, body: Body, kind: EventKind) -> &RiseSetResult {
        match (body, kind) {
            (Body::Sun, EventKind::Rise) => &self.sunrise,
            (Body::Sun, EventKind::Set) => &self.sunset,
            (Body::Sun, EventKind::Transit) => &self.sun_transit,
            (Body::Moon, EventKind::Rise) => &self.moonrise,
            (Body::Moon, EventKind::Set) => &self.moonset,
            (Body::Moon, EventKind::Transit) => &self.moon_transit,
        }
    }

    /// `(body, kind, result)` in report order: Sun rise/set/transit, then Moon.
    pub fn iter(&self) -> impl Iterator<Item = (Body, EventKind, &RiseSetResult)> + '_ {
        [Body::Sun, Body::Moon].into_iter().flat_map(move |body| {
            EventKind::ALL
                .into_iter()
                .map(move |kind| (body, kind, self.get(body, kind)))
        })
    }
}
