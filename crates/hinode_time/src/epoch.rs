//! Day-progress epoch and elapsed Julian years for the series ephemerides.

use chrono::{Datelike, NaiveDate};

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days from 2000-01-01 12:00 (dynamical time) to local midnight of `date`.
///
/// January and February count as months 13 and 14 of the previous year.
/// The `−offset_hours/24` term moves the zone-local midnight to UT. The
/// leap-day term floors because the shifted year is negative before 2000.
/// Exact for 1901-01-01 through 2100-02-28.
pub fn day_progress(date: NaiveDate, offset_hours: f64) -> f64 {
    let mut y = date.year() - 2000;
    let mut m = date.month() as i32;
    let d = date.day() as f64;
    if m < 3 {
        y -= 1;
        m += 12;
    }
    let y = y as f64;
    let m = m as f64;

    365.0 * y + 30.0 * m + d - 33.5 - offset_hours / 24.0
        + (3.0 * (m + 1.0) / 5.0).trunc()
        + (y / 4.0).floor()
}

/// Elapsed Julian years for a fractional day `t` after the day-progress
/// epoch, with ΔT (in days) applied.
pub fn julian_years(day_progress: f64, t: f64, delta_t_days: f64) -> f64 {
    (day_progress + t + delta_t_days) / DAYS_PER_JULIAN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn tokyo_2021_04_09() {
        let dp = day_progress(ymd(2021, 4, 9), 9.0);
        assert!((dp - 7768.125).abs() < 1e-9, "dp = {dp}");
    }

    #[test]
    fn j2000_midnight_utc() {
        // 2000-01-01 00:00 UT is half a day before the epoch.
        let dp = day_progress(ymd(2000, 1, 1), 0.0);
        assert!((dp - (-0.5)).abs() < 1e-9, "dp = {dp}");
    }

    #[test]
    fn consecutive_days_step_by_one() {
        let pairs = [
            (ymd(2021, 2, 28), ymd(2021, 3, 1)),
            (ymd(2020, 2, 28), ymd(2020, 2, 29)),
            (ymd(2020, 2, 29), ymd(2020, 3, 1)),
            (ymd(2021, 12, 31), ymd(2022, 1, 1)),
            (ymd(2024, 7, 31), ymd(2024, 8, 1)),
            (ymd(1999, 12, 31), ymd(2000, 1, 1)),
            (ymd(2000, 1, 31), ymd(2000, 2, 1)),
            (ymd(2000, 2, 28), ymd(2000, 2, 29)),
            (ymd(2000, 2, 29), ymd(2000, 3, 1)),
            (ymd(1996, 2, 28), ymd(1996, 2, 29)),
            (ymd(1996, 2, 29), ymd(1996, 3, 1)),
            (ymd(1997, 2, 28), ymd(1997, 3, 1)),
            (ymd(1971, 12, 31), ymd(1972, 1, 1)),
        ];
        for (a, b) in pairs {
            let step = day_progress(b, 9.0) - day_progress(a, 9.0);
            assert!((step - 1.0).abs() < 1e-9, "{a} -> {b}: {step}");
        }
    }

    #[test]
    fn matches_calendar_day_count() {
        let epoch = ymd(2000, 1, 1);
        let dates = ymd(1901, 1, 1)
            .iter_days()
            .step_by(13)
            .take_while(|d| *d < ymd(2100, 3, 1));
        for date in dates {
            let days = date.signed_duration_since(epoch).num_days() as f64;
            let expected = days - 0.5 - 9.0 / 24.0;
            let dp = day_progress(date, 9.0);
            assert!((dp - expected).abs() < 1e-9, "{date}: {dp}, expected {expected}");
        }
    }

    #[test]
    fn before_2000_known_values() {
        assert!((day_progress(ymd(2000, 2, 29), 9.0) - 58.125).abs() < 1e-9);
        assert!((day_progress(ymd(1999, 6, 1), 9.0) - (-214.875)).abs() < 1e-9);
        assert!((day_progress(ymd(1990, 6, 1), 9.0) - (-3501.875)).abs() < 1e-9);
        assert!((day_progress(ymd(1965, 2, 10), 9.0) - (-12743.875)).abs() < 1e-9);
    }

    #[test]
    fn julian_years_scaling() {
        let jy = julian_years(365.0, 0.25, 0.0);
        assert!((jy - 1.0).abs() < 1e-15);
    }
}
