//! `DD MON YYYY` dates as they appear on `DATE` lines.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar month, written as its three-letter upper-case abbreviation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Month {
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Parses an exact upper-case abbreviation (`JAN` .. `DEC`).
    #[must_use]
    pub fn from_abbrev(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.abbrev() == token)
    }

    /// Returns the three-letter abbreviation.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Jan => "JAN",
            Self::Feb => "FEB",
            Self::Mar => "MAR",
            Self::Apr => "APR",
            Self::May => "MAY",
            Self::Jun => "JUN",
            Self::Jul => "JUL",
            Self::Aug => "AUG",
            Self::Sep => "SEP",
            Self::Oct => "OCT",
            Self::Nov => "NOV",
            Self::Dec => "DEC",
        }
    }

    /// Returns the month number, 1 for January.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A `DATE` value: integer day, month abbreviation, integer year.
///
/// The day and year are kept as written so the display form round-trips the
/// source text (`01 JAN 2000` stays `01 JAN 2000`). The day is not checked
/// against the month; use [`GedcomDate::to_naive`] to get a real calendar
/// date.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GedcomDate {
    day: String,
    month: Month,
    year: String,
}

impl GedcomDate {
    /// Builds a date from its three argument tokens.
    ///
    /// Returns `None` unless `day` and `year` are non-empty ASCII digit runs
    /// and `month` is one of the twelve abbreviations.
    #[must_use]
    pub fn from_tokens(day: &str, month: &str, year: &str) -> Option<Self> {
        if !is_digits(day) || !is_digits(year) {
            return None;
        }
        let month = Month::from_abbrev(month)?;
        Some(Self {
            day: day.to_string(),
            month,
            year: year.to_string(),
        })
    }

    /// Day of month as written, parsed. `None` if it overflows.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.day.parse().ok()
    }

    /// The month.
    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    /// Year as written, parsed. `None` if it overflows.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.year.parse().ok()
    }

    /// Converts to a calendar date, or `None` for impossible dates such as
    /// `31 FEB 2000`.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year()?, self.month.number(), self.day()?)
    }
}

impl fmt::Display for GedcomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

impl FromStr for GedcomDate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(month), Some(year), None) => {
                Self::from_tokens(day, month, year).ok_or(())
            }
            _ => Err(()),
        }
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
