//! Error types for civil-time handling and lookup-table loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from table loading, date parsing, or zone-offset handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A row of a lookup table could not be parsed.
    TableParse {
        table: &'static str,
        line: usize,
        msg: String,
    },
    /// A lookup table contained no records.
    EmptyTable(&'static str),
    /// A civil date string or calendar triple was invalid.
    InvalidDate(String),
    /// A zone offset outside ±24 h (or not representable in seconds).
    InvalidOffset(f64),
    /// I/O error.
    Io(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableParse { table, line, msg } => {
                write!(f, "{table} table parse error at line {line}: {msg}")
            }
            Self::EmptyTable(table) => write!(f, "{table} table has no records"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidOffset(hours) => write!(f, "invalid zone offset: {hours} h"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::io::Error> for TimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_table_parse() {
        let e = TimeError::TableParse {
            table: "leap-second",
            line: 3,
            msg: "missing offset".into(),
        };
        assert_eq!(
            e.to_string(),
            "leap-second table parse error at line 3: missing offset"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "LEAP_SEC.txt");
        let e: TimeError = io.into();
        assert!(matches!(e, TimeError::Io(ref m) if m.contains("LEAP_SEC.txt")));
    }
}
