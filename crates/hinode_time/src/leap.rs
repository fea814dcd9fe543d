//! Leap-second table: accumulated UTC − TAI offsets by effective date.
//!
//! File format, one record per line:
//!
//! ```text
//! 19720101 -10
//! 19720701 -11
//! ...
//! 20170101 -37
//! ```
//!
//! The offset is UTC − TAI in whole seconds (negative since 1972). The
//! offset in force on a date is the one from the last row whose effective
//! date is on or before it.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::TimeError;
use crate::records::{last_on_or_before, parse_records};

const TABLE_NAME: &str = "leap-second";

/// Parsed leap-second table, sorted ascending by effective date.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapSecondTable {
    entries: Vec<(NaiveDate, i32)>,
}

impl LeapSecondTable {
    /// Load a leap-second table from a path.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        log::debug!(
            "loaded {} leap-second records from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a leap-second table from its text content.
    pub fn parse(content: &str) -> Result<Self, TimeError> {
        let entries = parse_records(content, TABLE_NAME)?;
        Ok(Self { entries })
    }

    /// Build a table from already-parsed `(effective date, UTC − TAI)` records.
    pub fn from_records(mut entries: Vec<(NaiveDate, i32)>) -> Result<Self, TimeError> {
        if entries.is_empty() {
            return Err(TimeError::EmptyTable(TABLE_NAME));
        }
        entries.sort_by_key(|(date, _)| *date);
        Ok(Self { entries })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true for a constructed table).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in ascending date order.
    pub fn entries(&self) -> &[(NaiveDate, i32)] {
        &self.entries
    }

    /// First and last effective dates.
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.entries[0].0, self.entries[self.entries.len() - 1].0)
    }

    /// UTC − TAI in force on `date`, or `None` before the first record.
    pub fn utc_minus_tai(&self, date: NaiveDate) -> Option<i32> {
        last_on_or_before(&self.entries, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
19720101 -10
19720701 -11
19730101 -12
20150701 -36
20170101 -37
";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_sample() {
        let table = LeapSecondTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.range(), (ymd(1972, 1, 1), ymd(2017, 1, 1)));
    }

    #[test]
    fn before_first_entry_is_none() {
        let table = LeapSecondTable::parse(SAMPLE).unwrap();
        assert_eq!(table.utc_minus_tai(ymd(1969, 7, 20)), None);
    }

    #[test]
    fn effective_date_inclusive() {
        let table = LeapSecondTable::parse(SAMPLE).unwrap();
        assert_eq!(table.utc_minus_tai(ymd(2016, 12, 31)), Some(-36));
        assert_eq!(table.utc_minus_tai(ymd(2017, 1, 1)), Some(-37));
        assert_eq!(table.utc_minus_tai(ymd(2021, 4, 8)), Some(-37));
    }

    #[test]
    fn from_records_sorts() {
        let table =
            LeapSecondTable::from_records(vec![(ymd(2017, 1, 1), -37), (ymd(1972, 1, 1), -10)])
                .unwrap();
        assert_eq!(table.entries()[0], (ymd(1972, 1, 1), -10));
    }

    #[test]
    fn from_records_rejects_empty() {
        assert_eq!(
            LeapSecondTable::from_records(Vec::new()),
            Err(TimeError::EmptyTable("leap-second"))
        );
    }

    #[test]
    fn float_offset_rejected() {
        assert!(LeapSecondTable::parse("19720101 -10.5\n").is_err());
    }
}
