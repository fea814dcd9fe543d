//! Sun and Moon rise, set and transit for a ground observer.
//!
//! This crate provides:
//! - `Calculator`, which caches the time-scale state for one civil day
//!   and solves each event
//! - The iterative hour-angle solver with explicit circumpolar outcomes
//! - Azimuth (rise/set) and refracted altitude (transit) at the event
//!
//! Positions come from the low-precision series in `hinode_ephem`; time
//! corrections from `hinode_time`.

pub mod calc;
pub mod config;
pub mod error;
pub mod solver;
pub mod types;

pub use calc::Calculator;
pub use config::SolverConfig;
pub use error::RiseSetError;
pub use hinode_ephem::Body;
pub use solver::{meridian_rate_deg_per_day, solve, SolveOutcome, SolverContext};
pub use types::{DailyEvents, EventKind, EventResult, GeoLocation, RiseSetResult};
