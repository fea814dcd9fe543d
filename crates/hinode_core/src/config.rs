//! Solver configuration.

use crate::error::RiseSetError;

/// Tunable constants of the rise/set iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Stop when the per-step correction is at most this many days
    /// (5e-5 d ≈ 4.3 s). Default: 5e-5.
    pub tolerance_days: f64,
    /// Iteration cap per event. Default: 300.
    pub max_iterations: usize,
    /// Atmospheric refraction at the horizon in degrees (35′08″).
    /// Default: 0.585556.
    pub horizon_refraction_deg: f64,
    /// Dip of the horizon in degrees per √metre of observer height.
    /// Default: 0.0353333.
    pub dip_coefficient: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance_days: 5.0e-5,
            max_iterations: 300,
            horizon_refraction_deg: 0.585556,
            dip_coefficient: 0.0353333,
        }
    }
}

impl SolverConfig {
    /// Dip of the horizon in degrees for an observer `height_m` above sea level.
    pub fn dip_deg(&self, height_m: f64) -> f64 {
        self.dip_coefficient * height_m.sqrt()
    }

    pub(crate) fn validate(&self) -> Result<(), RiseSetError> {
        if !(self.tolerance_days.is_finite() && self.tolerance_days > 0.0) {
            return Err(RiseSetError::InvalidConfig(
                "tolerance_days must be positive and finite",
            ));
        }
        if self.max_iterations == 0 {
            return Err(RiseSetError::InvalidConfig(
                "max_iterations must be greater than zero",
            ));
        }
        if !self.horizon_refraction_deg.is_finite() || !self.dip_coefficient.is_finite() {
            return Err(RiseSetError::InvalidConfig(
                "refraction and dip coefficients must be finite",
            ));
        }
        Ok(())
    }
}
