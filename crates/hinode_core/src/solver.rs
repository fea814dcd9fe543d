//! Iterative rise/set/transit solver.
//!
//! Starting from local noon (`t = 0.5`), each step evaluates the body's
//! position at `t`, computes the hour angle it must have for the event
//! (0 for transit, ∓acos(...) for rise/set), and moves `t` by the
//! hour-angle error divided by the body's apparent daily rate relative to
//! the local meridian:
//!
//! ```text
//! cos H₀ = (sin h − sin δ sin φ) / (cos δ cos φ)
//! Δ = normalize_180(∓H₀ − θ + α)
//! t ← t + Δ / k,   k = 360 (Sun), 347.8 (Moon)
//! ```
//!
//! Iteration stops once |Δ/k| is within the tolerance.

use hinode_ephem::{
    lunar_parallax_deg, solar_distance_au, solar_parallax_deg, solar_semidiameter_deg, Body,
};
use hinode_frames::{ecliptic_to_equatorial, local_sidereal_time_deg, normalize_180};
use hinode_time::julian_years;

use crate::config::SolverConfig;
use crate::error::RiseSetError;
use crate::types::{EventKind, GeoLocation};

/// Initial guess: local noon.
const INITIAL_T_DAYS: f64 = 0.5;

/// Degrees of hour angle gained per day by a body relative to the meridian.
pub fn meridian_rate_deg_per_day(body: Body) -> f64 {
    match body {
        Body::Sun => 360.0,
        Body::Moon => 347.8,
    }
}

/// Fixed inputs shared by every iteration of one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverContext {
    /// Days from J2000.0 to local midnight of the civil date.
    pub day_progress: f64,
    /// ΔT as a day fraction.
    pub delta_t_days: f64,
    pub location: GeoLocation,
}

impl SolverContext {
    /// Julian years of dynamical time at day fraction `t`.
    pub fn julian_years(&self, t: f64) -> f64 {
        julian_years(self.day_progress, t, self.delta_t_days)
    }
}

/// Result of the raw iteration, before civil-day filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveOutcome {
    Converged { t_days: f64, iterations: usize },
    NeverRises,
    NeverSets,
}

/// Apparent altitude of the body's reference point at the moment of
/// rising or setting, in degrees.
///
/// Sun: upper limb with horizon refraction and dip, corrected for solar
/// parallax. Moon: centre with parallax, refraction and dip.
pub fn visibility_altitude_deg(
    body: Body,
    jy: f64,
    height_m: f64,
    config: &SolverConfig,
) -> f64 {
    let dip = config.dip_deg(height_m);
    match body {
        Body::Sun => {
            let d = solar_distance_au(jy);
            -solar_semidiameter_deg(d) - config.horizon_refraction_deg - dip + solar_parallax_deg(d)
        }
        Body::Moon => lunar_parallax_deg(jy) - dip - config.horizon_refraction_deg,
    }
}

/// Hour angle the body needs for the event, in degrees.
///
/// `Err` carries the circumpolar outcome when no such hour angle exists.
fn target_hour_angle_deg(
    kind: EventKind,
    altitude_deg: f64,
    dec_deg: f64,
    latitude_deg: f64,
) -> Result<f64, SolveOutcome> {
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude_deg.to_radians().sin_cos();
    let cos_h0 = (altitude_deg.to_radians().sin() - sin_d * sin_p) / (cos_d * cos_p);

    if cos_h0 > 1.0 {
        return Err(SolveOutcome::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Err(SolveOutcome::NeverSets);
    }
    let h0 = cos_h0.acos().to_degrees();
    Ok(match kind {
        EventKind::Rise => -h0,
        EventKind::Set => h0,
        EventKind::Transit => 0.0,
    })
}

/// Hour-angle error in degrees at day fraction `t`, normalized to (−180, 180].
///
/// `Err` carries the circumpolar outcome for rise/set.
pub fn hour_angle_error_deg(
    body: Body,
    kind: EventKind,
    ctx: &SolverContext,
    config: &SolverConfig,
    t: f64,
) -> Result<f64, SolveOutcome> {
    let jy = ctx.julian_years(t);
    let eq = ecliptic_to_equatorial(jy, body.ecliptic_position(jy));
    let lst = local_sidereal_time_deg(jy, t, ctx.location.longitude_deg);

    let target = match kind {
        EventKind::Transit => 0.0,
        EventKind::Rise | EventKind::Set => {
            let h = visibility_altitude_deg(body, jy, ctx.location.height_m, config);
            target_hour_angle_deg(kind, h, eq.dec_deg, ctx.location.latitude_deg)?
        }
    };
    Ok(normalize_180(target - lst + eq.ra_deg))
}

/// Iterate to the day fraction of the event.
pub fn solve(
    body: Body,
    kind: EventKind,
    ctx: &SolverContext,
    config: &SolverConfig,
) -> Result<SolveOutcome, RiseSetError> {
    let rate = meridian_rate_deg_per_day(body);
    let mut t = INITIAL_T_DAYS;

    for iteration in 1..=config.max_iterations {
        let error = match hour_angle_error_deg(body, kind, ctx, config, t) {
            Ok(error) => error,
            Err(outcome) => {
                log::debug!("{body} {kind}: {outcome:?} at t = {t:.6} (iteration {iteration})");
                return Ok(outcome);
            }
        };
        let correction = error / rate;
        t += correction;
        log::trace!("{body} {kind} #{iteration}: Δ = {error:.6}°, t = {t:.8}");

        if correction.abs() <= config.tolerance_days {
            return Ok(SolveOutcome::Converged {
                t_days: t,
                iterations: iteration,
            });
        }
    }

    Err(RiseSetError::NoConvergence {
        body,
        kind,
        iterations: config.max_iterations,
    })
}
