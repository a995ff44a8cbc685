//! Cell coordinates.
//!
//! A [`Coordinate`] is a (column, row) pair. Columns are single letters `a..z`
//! stored as a 0-based index; rows are 1-based. Input is case-insensitive and
//! the canonical text form is lowercase (`b12`).
//!
//! # Examples
//!
//! ```
//! use cellgrid_engine::engine::Coordinate;
//!
//! let c: Coordinate = "B3".parse().unwrap();
//! assert_eq!(c.column.index(), 1);
//! assert_eq!(c.row, 3);
//! assert_eq!(c.to_string(), "b3");
//! assert_eq!(c.a1(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::error::CoordinateError;

/// Number of letters available as column identifiers.
pub const MAX_COLUMNS: u8 = 26;

/// A column identified by its letter (`a` is index 0).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Column(u8);

impl Column {
    pub fn from_index(index: u8) -> Option<Column> {
        (index < MAX_COLUMNS).then_some(Column(index))
    }

    /// Column for a letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Column> {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Column(lower as u8 - b'a'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase letter used in canonical keys.
    pub fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    /// Uppercase letter shown in column headers.
    pub fn header(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Address of one cell.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub column: Column,
    /// 1-based row number.
    pub row: u32,
}

impl Coordinate {
    pub fn new(column: Column, row: u32) -> Coordinate {
        Coordinate { column, row }
    }

    /// Uppercase spreadsheet notation (`A1`), for display.
    pub fn a1(&self) -> String {
        format!("{}{}", self.column.header(), self.row)
    }

    fn parse_a1(text: &str) -> Option<Coordinate> {
        let caps = coordinate_re().captures(text.trim())?;
        let letter = caps["letter"].chars().next()?;
        let row = caps["row"].parse::<u32>().ok().filter(|row| *row > 0)?;
        Some(Coordinate::new(Column::from_letter(letter)?, row))
    }
}

fn coordinate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Za-z])(?<row>[0-9]+)$").expect("coordinate regex compiles")
    })
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| CoordinateError(s.to_string()))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl Ord for Coordinate {
    /// Row-major: all of row 1, then row 2, and so on.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
