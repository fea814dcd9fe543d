//! Error types for rise/set calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hinode_ephem::Body;
use hinode_time::TimeError;

use crate::types::EventKind;

/// Errors from calculator construction or the rise/set solver.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RiseSetError {
    /// Error from civil-time handling or table loading.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Invalid solver configuration parameter.
    InvalidConfig(&'static str),
    /// The iteration cap was reached before the correction fell below tolerance.
    NoConvergence {
        body: Body,
        kind: EventKind,
        iterations: usize,
    },
}

impl Display for RiseSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid solver config: {msg}"),
            Self::NoConvergence {
                body,
                kind,
                iterations,
            } => write!(
                f,
                "no convergence: {body} {kind} after {iterations} iterations"
            ),
        }
    }
}

impl Error for RiseSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for RiseSetError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
