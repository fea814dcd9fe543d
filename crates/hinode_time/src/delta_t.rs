//! ΔT = TT − UT1 from the Espenak & Meeus piecewise polynomials.
//!
//! Used for dates the leap-second table does not cover. Each era has its
//! own empirical fit, evaluated at the decimal year `y = year + (month −
//! 0.5) / 12` (the middle of the month).
//!
//! Source: F. Espenak & J. Meeus, "Five Millennium Canon of Solar Eclipses:
//! −1999 to +3000", NASA/TP-2006-214141, section 2.6. Public domain (US
//! Government work product).

/// Calendar era selecting one ΔT polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaTEra {
    /// year < −500
    Before500Bce,
    /// −500 ≤ year < 500
    Bce500To500,
    /// 500 ≤ year < 1600
    From500To1600,
    /// 1600 ≤ year < 1700
    From1600To1700,
    /// 1700 ≤ year < 1800
    From1700To1800,
    /// 1800 ≤ year < 1860
    From1800To1860,
    /// 1860 ≤ year < 1900
    From1860To1900,
    /// 1900 ≤ year < 1920
    From1900To1920,
    /// 1920 ≤ year < 1941
    From1920To1941,
    /// 1941 ≤ year < 1961
    From1941To1961,
    /// 1961 ≤ year < 1986
    From1961To1986,
    /// 1986 ≤ year < 2005
    From1986To2005,
    /// 2005 ≤ year < 2050
    From2005To2050,
    /// 2050 ≤ year ≤ 2150
    From2050To2150,
    /// year > 2150
    After2150,
}

impl DeltaTEra {
    /// All eras in chronological order.
    pub const ALL: [DeltaTEra; 15] = [
        Self::Before500Bce,
        Self::Bce500To500,
        Self::From500To1600,
        Self::From1600To1700,
        Self::From1700To1800,
        Self::From1800To1860,
        Self::From1860To1900,
        Self::From1900To1920,
        Self::From1920To1941,
        Self::From1941To1961,
        Self::From1961To1986,
        Self::From1986To2005,
        Self::From2005To2050,
        Self::From2050To2150,
        Self::After2150,
    ];

    /// Era containing the given (integer) calendar year.
    pub fn for_year(year: i32) -> Self {
        match year {
            ..-500 => Self::Before500Bce,
            -500..500 => Self::Bce500To500,
            500..1600 => Self::From500To1600,
            1600..1700 => Self::From1600To1700,
            1700..1800 => Self::From1700To1800,
            1800..1860 => Self::From1800To1860,
            1860..1900 => Self::From1860To1900,
            1900..1920 => Self::From1900To1920,
            1920..1941 => Self::From1920To1941,
            1941..1961 => Self::From1941To1961,
            1961..1986 => Self::From1961To1986,
            1986..2005 => Self::From1986To2005,
            2005..2050 => Self::From2005To2050,
            2050..=2150 => Self::From2050To2150,
            _ => Self::After2150,
        }
    }

    /// ΔT in seconds at decimal year `y` using this era's polynomial.
    #[rustfmt::skip]
    pub fn delta_t(self, y: f64) -> f64 {
        match self {
            Self::Before500Bce | Self::After2150 => {
                let u = (y - 1820.0) / 100.0;
                -20.0 + 32.0 * u * u
            }
            Self::Bce500To500 => {
                let u = y / 100.0;
                10583.6 - 1014.41 * u + 33.78311 * u.powi(2)
                    - 5.952053 * u.powi(3) - 0.1798452 * u.powi(4)
                    + 0.022174192 * u.powi(5) + 0.0090316521 * u.powi(6)
            }
            Self::From500To1600 => {
                let u = (y - 1000.0) / 100.0;
                1574.2 - 556.01 * u + 71.23472 * u.powi(2)
                    + 0.319781 * u.powi(3) - 0.8503463 * u.powi(4)
                    - 0.005050998 * u.powi(5) + 0.0083572073 * u.powi(6)
            }
            Self::From1600To1700 => {
                let t = y - 1600.0;
                120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0
            }
            Self::From1700To1800 => {
                let t = y - 1700.0;
                8.83 + 0.1603 * t - 0.0059285 * t.powi(2) + 0.00013336 * t.powi(3)
                    - t.powi(4) / 1_174_000.0
            }
            Self::From1800To1860 => {
                let t = y - 1800.0;
                13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
                    - 0.00037436 * t.powi(4) + 0.0000121272 * t.powi(5)
                    - 0.0000001699 * t.powi(6) + 0.000000000875 * t.powi(7)
            }
            Self::From1860To1900 => {
                let t = y - 1860.0;
                7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                    - 0.0004473624 * t.powi(4) + t.powi(5) / 233_174.0
            }
            Self::From1900To1920 => {
                let t = y - 1900.0;
                -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                    - 0.000197 * t.powi(4)
            }
            Self::From1920To1941 => {
                let t = y - 1920.0;
                21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
            }
            Self::From1941To1961 => {
                let t = y - 1950.0;
                29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
            }
            Self::From1961To1986 => {
                let t = y - 1975.0;
                45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
            }
            Self::From1986To2005 => {
                let t = y - 2000.0;
                63.86 + 0.3345 * t - 0.060374 * t.powi(2) + 0.0017275 * t.powi(3)
                    + 0.000651814 * t.powi(4) + 0.00002373599 * t.powi(5)
            }
            Self::From2005To2050 => {
                let t = y - 2000.0;
                62.92 + 0.32217 * t + 0.005589 * t.powi(2)
            }
            Self::From2050To2150 => {
                let u = (y - 1820.0) / 100.0;
                -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
            }
        }
    }
}

/// Decimal year at the middle of the given month.
pub fn mid_month_decimal_year(year: i32, month: u32) -> f64 {
    year as f64 + (month as f64 - 0.5) / 12.0
}

/// ΔT in seconds from the era model for a calendar year and month.
pub fn modeled_delta_t(year: i32, month: u32) -> (DeltaTEra, f64) {
    let era = DeltaTEra::for_year(year);
    (era, era.delta_t(mid_month_decimal_year(year, month)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_boundaries() {
        assert_eq!(DeltaTEra::for_year(-501), DeltaTEra::Before500Bce);
        assert_eq!(DeltaTEra::for_year(-500), DeltaTEra::Bce500To500);
        assert_eq!(DeltaTEra::for_year(499), DeltaTEra::Bce500To500);
        assert_eq!(DeltaTEra::for_year(1600), DeltaTEra::From1600To1700);
        assert_eq!(DeltaTEra::for_year(1941), DeltaTEra::From1941To1961);
        assert_eq!(DeltaTEra::for_year(2049), DeltaTEra::From2005To2050);
        assert_eq!(DeltaTEra::for_year(2050), DeltaTEra::From2050To2150);
        assert_eq!(DeltaTEra::for_year(2150), DeltaTEra::From2050To2150);
        assert_eq!(DeltaTEra::for_year(2151), DeltaTEra::After2150);
    }

    #[test]
    fn every_year_maps_to_listed_era() {
        for year in (-3000..3000).step_by(7) {
            assert!(DeltaTEra::ALL.contains(&DeltaTEra::for_year(year)));
        }
    }

    #[test]
    fn mid_month() {
        assert!((mid_month_decimal_year(2000, 1) - (2000.0 + 0.5 / 12.0)).abs() < 1e-12);
        assert!((mid_month_decimal_year(1950, 6) - 1950.458_333_333).abs() < 1e-9);
    }

    #[test]
    fn year_2000_near_observed() {
        // Observed ΔT at 2000.0 was 63.83 s.
        let dt = DeltaTEra::From1986To2005.delta_t(2000.0);
        assert!((dt - 63.86).abs() < 1e-12, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1950_value() {
        let (era, dt) = modeled_delta_t(1950, 6);
        assert_eq!(era, DeltaTEra::From1941To1961);
        assert!((dt - 29.2557).abs() < 1e-3, "ΔT(1950.46) = {dt}");
    }

    #[test]
    fn year_1900_value() {
        let dt = DeltaTEra::From1900To1920.delta_t(1900.0);
        assert!((dt - (-2.79)).abs() < 1e-12);
    }

    #[test]
    fn ancient_parabola() {
        // At 1820 the long-term parabola bottoms out at −20 s.
        assert!((DeltaTEra::Before500Bce.delta_t(1820.0) - (-20.0)).abs() < 1e-12);
        // Year −1000: u = −28.2 → −20 + 32 × 795.24
        let dt = DeltaTEra::Before500Bce.delta_t(-1000.0);
        assert!((dt - 25_427.68).abs() < 1e-6, "ΔT(−1000) = {dt}");
    }

    #[test]
    fn eras_roughly_continuous() {
        // Adjacent fits agree to within a few seconds at their shared boundary
        // (the published model is continuous to about that level).
        let pairs = [
            (DeltaTEra::From1800To1860, DeltaTEra::From1860To1900, 1860.0),
            (DeltaTEra::From1900To1920, DeltaTEra::From1920To1941, 1920.0),
            (DeltaTEra::From1961To1986, DeltaTEra::From1986To2005, 1986.0),
            (DeltaTEra::From1986To2005, DeltaTEra::From2005To2050, 2005.0),
        ];
        for (a, b, y) in pairs {
            let da = a.delta_t(y);
            let db = b.delta_t(y);
            assert!((da - db).abs() < 2.0, "{a:?}/{b:?} at {y}: {da} vs {db}");
        }
    }

    #[test]
    fn far_future_2050_2150_matches_parabola_at_2150() {
        let near = DeltaTEra::From2050To2150.delta_t(2150.0);
        let far = DeltaTEra::After2150.delta_t(2150.0);
        assert!((near - far).abs() < 1e-9);
    }
}
