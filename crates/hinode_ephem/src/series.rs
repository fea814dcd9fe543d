//! Sum-of-sines evaluator shared by every ephemeris series.

use hinode_frames::sin_deg;

/// One periodic term `amplitude · sin(phase + rate · jy)`, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineTerm {
    pub amplitude: f64,
    /// Phase at J2000.0 in degrees.
    pub phase_deg: f64,
    /// Rate in degrees per Julian year.
    pub rate_deg_per_year: f64,
}

impl SineTerm {
    pub const fn new(amplitude: f64, phase_deg: f64, rate_deg_per_year: f64) -> Self {
        Self {
            amplitude,
            phase_deg,
            rate_deg_per_year,
        }
    }

    /// Argument of the sine in degrees (not normalized).
    #[inline]
    pub fn argument_deg(&self, jy: f64) -> f64 {
        self.phase_deg + self.rate_deg_per_year * jy
    }

    /// Value of this term at `jy` Julian years after J2000.0.
    #[inline]
    pub fn eval(&self, jy: f64) -> f64 {
        self.amplitude * sin_deg(self.argument_deg(jy))
    }
}

/// Σ aᵢ · sin(φᵢ + ωᵢ · jy) over a term table.
pub fn sum_sines(terms: &[SineTerm], jy: f64) -> f64 {
    terms.iter().map(|term| term.eval(jy)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_term() {
        let t = SineTerm::new(2.0, 30.0, 0.0);
        assert!((t.eval(123.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rate_advances_argument() {
        let t = SineTerm::new(1.0, 0.0, 90.0);
        assert!((t.eval(1.0) - 1.0).abs() < 1e-12);
        assert!(t.eval(2.0).abs() < 1e-12);
        assert!((t.eval(-1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_table_is_zero() {
        assert_eq!(sum_sines(&[], 10.0), 0.0);
    }

    #[test]
    fn sums_terms() {
        let terms = [SineTerm::new(1.0, 90.0, 0.0), SineTerm::new(0.5, 270.0, 0.0)];
        assert!((sum_sines(&terms, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn large_arguments_reduced() {
        // Moon rates reach ~23000°/yr; reduction keeps full precision.
        let t = SineTerm::new(1.0, 10.0, 23_281.3);
        let direct = (10.0f64 + 23_281.3 * 40.0).to_radians().sin();
        assert!((t.eval(40.0) - direct).abs() < 1e-9);
    }
}
