//! Civil time and time-scale corrections for the rise/set engine.
//!
//! This crate provides:
//! - `CivilTime`, a zone-local instant with a fixed UTC offset
//! - Leap-second (UTC − TAI) and DUT1 (UT1 − UTC) table parsing
//! - ΔT = TT − UT1, observed from the tables or from the era model
//! - The day-progress epoch and elapsed Julian years used by the series

pub mod civil;
pub mod delta_t;
pub mod dut1;
pub mod epoch;
pub mod error;
pub mod leap;
mod records;
pub mod scales;

pub use civil::{parse_yyyymmdd, zone_offset, CivilTime, JST_OFFSET_HOURS};
pub use delta_t::{modeled_delta_t, DeltaTEra};
pub use dut1::Dut1Table;
pub use epoch::{day_progress, julian_years, DAYS_PER_JULIAN_YEAR};
pub use error::TimeError;
pub use leap::LeapSecondTable;
pub use scales::{
    DeltaTSource, TableConfig, TimeScaleState, TimeTables, SECONDS_PER_DAY, TT_MINUS_TAI_S,
};
