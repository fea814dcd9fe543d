//! Dated-record parsing shared by the leap-second and DUT1 tables.
//!
//! Both tables use one record per line: an 8-digit `YYYYMMDD` effective
//! date, whitespace, and a numeric offset. Blank lines and `#` comments are
//! ignored.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::civil::parse_yyyymmdd;
use crate::error::TimeError;

/// Parse `YYYYMMDD value` records, returning them sorted by date.
pub(crate) fn parse_records<T>(
    content: &str,
    table: &'static str,
) -> Result<Vec<(NaiveDate, T)>, TimeError>
where
    T: FromStr,
    T::Err: Display,
{
    let mut records = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let data = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let mut fields = data.split_whitespace();
        let Some(date_str) = fields.next() else {
            continue;
        };
        let Some(value_str) = fields.next() else {
            return Err(TimeError::TableParse {
                table,
                line,
                msg: format!("missing offset after '{date_str}'"),
            });
        };
        if let Some(extra) = fields.next() {
            return Err(TimeError::TableParse {
                table,
                line,
                msg: format!("unexpected field '{extra}'"),
            });
        }

        let date = parse_yyyymmdd(date_str).map_err(|e| TimeError::TableParse {
            table,
            line,
            msg: e.to_string(),
        })?;
        let value = value_str.parse::<T>().map_err(|e| TimeError::TableParse {
            table,
            line,
            msg: format!("cannot parse '{value_str}': {e}"),
        })?;

        records.push((date, value));
    }

    if records.is_empty() {
        return Err(TimeError::EmptyTable(table));
    }

    // Stable sort keeps file order for duplicate dates, so the last
    // duplicate still wins the lookup.
    records.sort_by_key(|(date, _)| *date);
    Ok(records)
}

/// Value of the last record whose date is on or before `date`.
pub(crate) fn last_on_or_before<T: Copy>(records: &[(NaiveDate, T)], date: NaiveDate) -> Option<T> {
    let idx = records.partition_point(|(d, _)| *d <= date);
    idx.checked_sub(1).map(|i| records[i].1)
}
