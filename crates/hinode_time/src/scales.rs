//! UTC → TAI → TT correction chain and the ΔT branch selection.
//!
//! ΔT = TT − UT1. Inside the leap-second era it is observed:
//!
//! ```text
//! TT − UT1 = (TT − TAI) − (UTC − TAI) − (UT1 − UTC)
//!          = 32.184     − utc_minus_tai − dut1
//! ```
//!
//! Before the first leap-second row the Espenak & Meeus era model is used.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};

use crate::delta_t::{modeled_delta_t, DeltaTEra};
use crate::dut1::Dut1Table;
use crate::error::TimeError;
use crate::leap::LeapSecondTable;

/// TT − TAI in seconds (exact, by definition).
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First year covered by leap-second bookkeeping.
const LEAP_ERA_START_YEAR: i32 = 1972;

/// Which branch produced a ΔT value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTSource {
    /// From the leap-second and DUT1 tables.
    Observed,
    /// From the polynomial fit for the given era.
    Modeled(DeltaTEra),
}

/// Time-scale corrections in force for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScaleState {
    /// Accumulated UTC − TAI in whole seconds (0 when no row applies).
    pub utc_minus_tai: i32,
    /// UT1 − UTC in seconds (0.0 when no row applies).
    pub dut1: f64,
    /// TT − UT1 in seconds.
    pub delta_t: f64,
    /// Branch that produced `delta_t`.
    pub source: DeltaTSource,
}

impl TimeScaleState {
    /// ΔT as a fraction of a day.
    pub fn delta_t_days(&self) -> f64 {
        self.delta_t / SECONDS_PER_DAY
    }
}

/// Paths of the two lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub leap_seconds_path: PathBuf,
    pub dut1_path: PathBuf,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            leap_seconds_path: PathBuf::from("LEAP_SEC.txt"),
            dut1_path: PathBuf::from("DUT1.txt"),
        }
    }
}

impl TableConfig {
    /// Default file names resolved inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = Self::default();
        Self {
            leap_seconds_path: dir.join(defaults.leap_seconds_path),
            dut1_path: dir.join(defaults.dut1_path),
        }
    }
}

/// The leap-second and DUT1 tables, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTables {
    leap: LeapSecondTable,
    dut1: Dut1Table,
}

impl TimeTables {
    /// Bundle already-parsed tables.
    pub fn new(leap: LeapSecondTable, dut1: Dut1Table) -> Self {
        Self { leap, dut1 }
    }

    /// Load both tables from the configured paths.
    pub fn load(config: &TableConfig) -> Result<Self, TimeError> {
        let leap = LeapSecondTable::load(&config.leap_seconds_path)?;
        let dut1 = Dut1Table::load(&config.dut1_path)?;
        Ok(Self::new(leap, dut1))
    }

    pub fn leap_seconds(&self) -> &LeapSecondTable {
        &self.leap
    }

    pub fn dut1_table(&self) -> &Dut1Table {
        &self.dut1
    }

    /// Corrections in force at a UTC instant (looked up by its UTC date).
    pub fn correct(&self, utc: DateTime<Utc>) -> TimeScaleState {
        let date = utc.date_naive();
        let dut1 = self.dut1.dut1(date).unwrap_or(0.0);

        match self.leap.utc_minus_tai(date) {
            Some(utc_minus_tai) => {
                let delta_t = TT_MINUS_TAI_S - utc_minus_tai as f64 - dut1;
                log::debug!(
                    "ΔT {delta_t:.3} s observed for {date} (UTC−TAI {utc_minus_tai} s, DUT1 {dut1} s)"
                );
                TimeScaleState {
                    utc_minus_tai,
                    dut1,
                    delta_t,
                    source: DeltaTSource::Observed,
                }
            }
            None => {
                if date.year() >= LEAP_ERA_START_YEAR {
                    log::warn!(
                        "no leap-second row on or before {date}; using ΔT era model (table truncated?)"
                    );
                }
                let (era, delta_t) = modeled_delta_t(date.year(), date.month());
                log::debug!("ΔT {delta_t:.3} s modeled for {date} ({era:?})");
                TimeScaleState {
                    utc_minus_tai: 0,
                    dut1,
                    delta_t,
                    source: DeltaTSource::Modeled(era),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    fn tables() -> TimeTables {
        let leap = LeapSecondTable::parse("19720101 -10\n20150701 -36\n20170101 -37\n").unwrap();
        let dut1 = Dut1Table::parse("20200101 -0.2\n20210601 -0.1\n").unwrap();
        TimeTables::new(leap, dut1)
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn observed_branch_2021() {
        let s = tables().correct(utc(2021, 4, 8, 15));
        assert_eq!(s.source, DeltaTSource::Observed);
        assert_eq!(s.utc_minus_tai, -37);
        assert_abs_diff_eq!(s.dut1, -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(s.delta_t, 69.384, epsilon = 1e-9);
        assert_abs_diff_eq!(s.delta_t_days(), 69.384 / 86_400.0, epsilon = 1e-15);
    }

    #[test]
    fn modeled_branch_before_table() {
        let s = tables().correct(utc(1950, 6, 15, 0));
        assert_eq!(s.source, DeltaTSource::Modeled(DeltaTEra::From1941To1961));
        assert_eq!(s.utc_minus_tai, 0);
        assert_eq!(s.dut1, 0.0);
        assert_abs_diff_eq!(s.delta_t, 29.2557, epsilon = 1e-3);
    }

    #[test]
    fn branch_follows_row_presence_not_count() {
        // A zero offset row still selects the observed branch.
        let leap = LeapSecondTable::parse("19600101 0\n").unwrap();
        let dut1 = Dut1Table::parse("19600101 0.0\n").unwrap();
        let s = TimeTables::new(leap, dut1).correct(utc(1965, 1, 1, 0));
        assert_eq!(s.source, DeltaTSource::Observed);
        assert_abs_diff_eq!(s.delta_t, TT_MINUS_TAI_S, epsilon = 1e-12);
    }

    #[test]
    fn utc_date_decides_lookup() {
        // 2017-01-01 00:30 JST is still 2016-12-31 in UTC.
        let s = tables().correct(utc(2016, 12, 31, 15));
        assert_eq!(s.utc_minus_tai, -36);
    }

    #[test]
    fn table_config_in_dir() {
        let c = TableConfig::in_dir(Path::new("/data"));
        assert_eq!(c.leap_seconds_path, PathBuf::from("/data/LEAP_SEC.txt"));
        assert_eq!(c.dut1_path, PathBuf::from("/data/DUT1.txt"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let c = TableConfig::in_dir(Path::new("/nonexistent/hinode"));
        assert!(matches!(TimeTables::load(&c), Err(TimeError::Io(_))));
    }
}
