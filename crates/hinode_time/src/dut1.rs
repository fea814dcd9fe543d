//! DUT1 (UT1 − UTC) table.
//!
//! Same layout as the leap-second table, with a fractional offset in
//! seconds. Published DUT1 values are step changes announced in advance
//! (|DUT1| < 0.9 s), so the value on a date is the last announced step,
//! not an interpolation between neighbours.
//!
//! ```text
//! 20201001 -0.2
//! 20210121 -0.1
//! ```

use std::path::Path;

use chrono::NaiveDate;

use crate::error::TimeError;
use crate::records::{last_on_or_before, parse_records};

const TABLE_NAME: &str = "DUT1";

/// Parsed DUT1 table, sorted ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct Dut1Table {
    entries: Vec<(NaiveDate, f64)>,
}

impl Dut1Table {
    /// Load a DUT1 table from disk.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        log::debug!(
            "loaded {} DUT1 records from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a DUT1 table from string content.
    pub fn parse(content: &str) -> Result<Self, TimeError> {
        let entries = parse_records(content, TABLE_NAME)?;
        Ok(Self { entries })
    }

    /// Build a table from already-parsed `(date, DUT1 seconds)` records.
    pub fn from_records(mut entries: Vec<(NaiveDate, f64)>) -> Result<Self, TimeError> {
        if entries.is_empty() {
            return Err(TimeError::EmptyTable(TABLE_NAME));
        }
        entries.sort_by_key(|(date, _)| *date);
        Ok(Self { entries })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in ascending date order.
    pub fn entries(&self) -> &[(NaiveDate, f64)] {
        &self.entries
    }

    /// Date range covered by the table: (first, last).
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.entries[0].0, self.entries[self.entries.len() - 1].0)
    }

    /// DUT1 in seconds in force on `date`, or `None` before the first entry.
    pub fn dut1(&self, date: NaiveDate) -> Option<f64> {
        last_on_or_before(&self.entries, date)
    }
}
