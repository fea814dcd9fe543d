//! Calculation context for one civil date and observer.
//!
//! The time-scale state (leap seconds, DUT1, ΔT) and the day-progress
//! epoch are computed once in the constructor and reused by every event.

use chrono::FixedOffset;
use hinode_ephem::Body;
use hinode_frames::{
    apparent_altitude_deg, azimuth_deg, ecliptic_to_equatorial, hour_angle_deg,
    local_sidereal_time_deg,
};
use hinode_time::{day_progress, CivilTime, TimeScaleState, TimeTables};

use crate::config::SolverConfig;
use crate::error::RiseSetError;
use crate::solver::{solve, SolveOutcome, SolverContext};
use crate::types::{DailyEvents, EventKind, GeoLocation, RiseSetResult};

/// Rise/set/transit calculator for one civil day at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    midnight: CivilTime,
    location: GeoLocation,
    config: SolverConfig,
    time_scale: TimeScaleState,
    day_progress: f64,
}

impl Calculator {
    /// Create a calculator with the default solver configuration.
    ///
    /// Only the civil date and zone offset of `civil` are used; the
    /// calculation starts from local midnight.
    pub fn new(
        civil: CivilTime,
        location: GeoLocation,
        tables: &TimeTables,
    ) -> Result<Self, RiseSetError> {
        Self::with_config(civil, location, tables, SolverConfig::default())
    }

    /// Create a calculator with an explicit solver configuration.
    pub fn with_config(
        civil: CivilTime,
        location: GeoLocation,
        tables: &TimeTables,
        config: SolverConfig,
    ) -> Result<Self, RiseSetError> {
        location.validate()?;
        config.validate()?;

        let midnight = CivilTime::midnight(civil.date(), civil.offset())?;
        let time_scale = tables.correct(midnight.to_utc());
        let day_progress = day_progress(midnight.date(), midnight.offset_hours());

        log::debug!(
            "calculator for {midnight} at ({}, {}, {} m): day progress {day_progress}, ΔT {:.3} s ({:?})",
            location.latitude_deg,
            location.longitude_deg,
            location.height_m,
            time_scale.delta_t,
            time_scale.source,
        );

        Ok(Self {
            midnight,
            location,
            config,
            time_scale,
            day_progress,
        })
    }

    /// Local midnight the calculation starts from.
    pub fn midnight(&self) -> CivilTime {
        self.midnight
    }

    pub fn offset(&self) -> FixedOffset {
        self.midnight.offset()
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Leap seconds, DUT1 and ΔT in force for this calculation.
    pub fn time_scale(&self) -> &TimeScaleState {
        &self.time_scale
    }

    /// Days from J2000.0 to local midnight.
    pub fn day_progress(&self) -> f64 {
        self.day_progress
    }

    pub fn compute_sun_event(&self, kind: EventKind) -> Result<RiseSetResult, RiseSetError> {
        self.compute_event(Body::Sun, kind)
    }

    pub fn compute_moon_event(&self, kind: EventKind) -> Result<RiseSetResult, RiseSetError> {
        self.compute_event(Body::Moon, kind)
    }

    /// Solve one event and attach its instant and angle.
    ///
    /// A Moon event converging outside [0, 1) day is `NotWithinDay`.
    pub fn compute_event(
        &self,
        body: Body,
        kind: EventKind,
    ) -> Result<RiseSetResult, RiseSetError> {
        let (t_days, iterations) = match solve(body, kind, &self.solver_context(), &self.config)? {
            SolveOutcome::Converged { t_days, iterations } => (t_days, iterations),
            SolveOutcome::NeverRises => return Ok(RiseSetResult::NeverRises),
            SolveOutcome::NeverSets => return Ok(RiseSetResult::NeverSets),
        };

        if body == Body::Moon && !(0.0..1.0).contains(&t_days) {
            log::debug!("{body} {kind} converged outside the day (t = {t_days:.6})");
            return Ok(RiseSetResult::NotWithinDay { t_days });
        }

        let instant = self.midnight.plus_days(t_days)?;
        let angle_deg = self.angle_at(body, kind, t_days);
        log::debug!("{body} {kind}: {instant} ({angle_deg:.3}°, {iterations} iterations)");

        Ok(RiseSetResult::Event {
            t_days,
            instant,
            angle_deg,
            iterations,
        })
    }

    /// Sunrise, sunset, solar transit, moonrise, moonset and lunar transit.
    pub fn compute_all(&self) -> Result<DailyEvents, RiseSetError> {
        Ok(DailyEvents {
            sunrise: self.compute_sun_event(EventKind::Rise)?,
            sunset: self.compute_sun_event(EventKind::Set)?,
            sun_transit: self.compute_sun_event(EventKind::Transit)?,
            moonrise: self.compute_moon_event(EventKind::Rise)?,
            moonset: self.compute_moon_event(EventKind::Set)?,
            moon_transit: self.compute_moon_event(EventKind::Transit)?,
        })
    }

    /// Azimuth of `body` at day fraction `t`, degrees [0, 360).
    pub fn azimuth_at(&self, body: Body, t: f64) -> f64 {
        let (dec, ha) = self.dec_and_hour_angle(body, t);
        azimuth_deg(dec, ha, self.location.latitude_deg)
    }

    /// Refracted altitude of `body` at day fraction `t`, degrees.
    pub fn altitude_at(&self, body: Body, t: f64) -> f64 {
        let (dec, ha) = self.dec_and_hour_angle(body, t);
        apparent_altitude_deg(dec, ha, self.location.latitude_deg)
    }

    fn angle_at(&self, body: Body, kind: EventKind, t: f64) -> f64 {
        if kind.reports_azimuth() {
            self.azimuth_at(body, t)
        } else {
            self.altitude_at(body, t)
        }
    }

    fn dec_and_hour_angle(&self, body: Body, t: f64) -> (f64, f64) {
        let jy = self.solver_context().julian_years(t);
        let eq = ecliptic_to_equatorial(jy, body.ecliptic_position(jy));
        let lst = local_sidereal_time_deg(jy, t, self.location.longitude_deg);
        (eq.dec_deg, hour_angle_deg(lst, eq.ra_deg))
    }

    fn solver_context(&self) -> SolverContext {
        SolverContext {
            day_progress: self.day_progress,
            delta_t_days: self.time_scale.delta_t_days(),
            location: self.location,
        }
    }
}
