//! Civil (zone-local) date/time with a fixed UTC offset.
//!
//! Provides `CivilTime`, the instant type used throughout the workspace.
//! Calculations start from local midnight of a civil date; event instants
//! are that midnight plus a fractional day.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::error::TimeError;

/// Japan Standard Time (UTC+9), the default civil zone.
pub const JST_OFFSET_HOURS: f64 = 9.0;

const SECONDS_PER_HOUR: f64 = 3600.0;
const NANOS_PER_DAY: f64 = 86_400.0e9;

/// Parse a fixed-width `YYYYMMDD` date.
pub fn parse_yyyymmdd(s: &str) -> Result<NaiveDate, TimeError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::InvalidDate(format!(
            "'{s}' is not an 8-digit YYYYMMDD date"
        )));
    }
    let year: i32 = s[0..4]
        .parse()
        .map_err(|_| TimeError::InvalidDate(format!("bad year in '{s}'")))?;
    let month: u32 = s[4..6]
        .parse()
        .map_err(|_| TimeError::InvalidDate(format!("bad month in '{s}'")))?;
    let day: u32 = s[6..8]
        .parse()
        .map_err(|_| TimeError::InvalidDate(format!("bad day in '{s}'")))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TimeError::InvalidDate(format!("'{s}' is not a calendar date")))
}

/// Fixed zone offset from hours east of UTC.
pub fn zone_offset(hours: f64) -> Result<FixedOffset, TimeError> {
    if !hours.is_finite() || hours.abs() >= 24.0 {
        return Err(TimeError::InvalidOffset(hours));
    }
    let seconds = (hours * SECONDS_PER_HOUR).round() as i32;
    FixedOffset::east_opt(seconds).ok_or(TimeError::InvalidOffset(hours))
}

/// Zone-local date and time with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    local: DateTime<FixedOffset>,
}

impl CivilTime {
    /// Wrap an existing zoned instant.
    pub fn new(local: DateTime<FixedOffset>) -> Self {
        Self { local }
    }

    /// Local midnight of `date` in the zone `offset`.
    pub fn midnight(date: NaiveDate, offset: FixedOffset) -> Result<Self, TimeError> {
        let naive = date.and_time(NaiveTime::MIN);
        offset
            .from_local_datetime(&naive)
            .single()
            .map(Self::new)
            .ok_or_else(|| TimeError::InvalidDate(format!("{date} has no local midnight")))
    }

    /// Local midnight of a `YYYYMMDD` date in JST.
    pub fn parse_jst(s: &str) -> Result<Self, TimeError> {
        Self::midnight(parse_yyyymmdd(s)?, zone_offset(JST_OFFSET_HOURS)?)
    }

    /// The Unix epoch expressed in `offset`; marks "no event" in flat results.
    pub fn epoch_zero(offset: FixedOffset) -> Self {
        Self::new(DateTime::<Utc>::default().with_timezone(&offset))
    }

    /// The zoned instant.
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.local
    }

    /// The civil calendar date.
    pub fn date(&self) -> NaiveDate {
        self.local.date_naive()
    }

    /// Zone offset.
    pub fn offset(&self) -> FixedOffset {
        *self.local.offset()
    }

    /// Zone offset in hours east of UTC.
    pub fn offset_hours(&self) -> f64 {
        self.offset().local_minus_utc() as f64 / SECONDS_PER_HOUR
    }

    /// The same instant in UTC (local time minus the fixed offset).
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    /// This instant advanced by a (possibly negative) fractional day.
    pub fn plus_days(&self, days: f64) -> Result<Self, TimeError> {
        let nanos = days * NANOS_PER_DAY;
        if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
            return Err(TimeError::InvalidDate(format!("day offset {days} out of range")));
        }
        self.local
            .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
            .map(Self::new)
            .ok_or_else(|| TimeError::InvalidDate(format!("day offset {days} out of range")))
    }

    /// `HH:MM:SS` in the local zone.
    pub fn clock_string(&self) -> String {
        self.local.format("%H:%M:%S").to_string()
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_valid_date() {
        let d = parse_yyyymmdd("20210409").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2021, 4, 9));
    }

    #[test]
    fn parse_rejects_wrong_width() {
        assert!(matches!(parse_yyyymmdd("2021049"), Err(TimeError::InvalidDate(_))));
        assert!(matches!(parse_yyyymmdd("202104091"), Err(TimeError::InvalidDate(_))));
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(parse_yyyymmdd("2021-4-9").is_err());
        assert!(parse_yyyymmdd("+2021049").is_err());
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert!(parse_yyyymmdd("20210230").is_err());
        assert!(parse_yyyymmdd("20211301").is_err());
    }

    #[test]
    fn offset_limits() {
        assert_eq!(zone_offset(9.0).unwrap().local_minus_utc(), 32_400);
        assert_eq!(zone_offset(-3.5).unwrap().local_minus_utc(), -12_600);
        assert_eq!(zone_offset(24.0), Err(TimeError::InvalidOffset(24.0)));
        assert!(zone_offset(f64::NAN).is_err());
    }

    #[test]
    fn jst_midnight_to_utc() {
        let t = CivilTime::parse_jst("20210409").unwrap();
        let utc = t.to_utc();
        assert_eq!((utc.year(), utc.month(), utc.day()), (2021, 4, 8));
        assert_eq!(utc.hour(), 15);
        assert!((t.offset_hours() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn plus_fractional_day() {
        let t = CivilTime::parse_jst("20210409").unwrap();
        let noon = t.plus_days(0.5).unwrap();
        assert_eq!(noon.clock_string(), "12:00:00");
        assert_eq!(noon.date(), t.date());
    }

    #[test]
    fn plus_days_rejects_nan() {
        let t = CivilTime::parse_jst("20210409").unwrap();
        assert!(t.plus_days(f64::NAN).is_err());
    }

    #[test]
    fn display_millis() {
        let t = CivilTime::parse_jst("20210409").unwrap();
        let s = t.plus_days(0.25).unwrap().to_string();
        assert_eq!(s, "2021-04-09 06:00:00.000");
    }

    #[test]
    fn epoch_zero_in_zone() {
        let z = CivilTime::epoch_zero(zone_offset(9.0).unwrap());
        assert_eq!(z.to_utc().timestamp(), 0);
        assert_eq!(z.to_string(), "1970-01-01 09:00:00.000");
    }
}
