//! Typed calendar periods used to bucket aggregation queries.

use std::{fmt::Display, str::FromStr};

/// The error returned when a month or year string cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("{0} is not a valid calendar period")]
pub struct ParsePeriodError(pub String);

/// A calendar month in the form `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl FromStr for ReportMonth {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParsePeriodError(s.to_owned());

        let (year, month) = s.split_once('-').ok_or_else(error)?;
        let year: i32 = year.parse().map_err(|_| error())?;
        let month: u32 = month.parse().map_err(|_| error())?;

        if !(1..=12).contains(&month) {
            return Err(error());
        }

        Ok(Self { year, month })
    }
}

impl Display for ReportMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches SQLite's strftime('%Y-%m', ...) output.
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A calendar year in the form `YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportYear(i32);

impl FromStr for ReportYear {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Self)
            .map_err(|_| ParsePeriodError(s.to_owned()))
    }
}

impl Display for ReportYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches SQLite's strftime('%Y', ...) output.
        write!(f, "{:04}", self.0)
    }
}

/// The time window an aggregation query is bucketed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// No time filter.
    All,
    /// Entries whose date falls within one calendar month.
    Month(ReportMonth),
    /// Entries whose date falls within one calendar year.
    Year(ReportYear),
}
