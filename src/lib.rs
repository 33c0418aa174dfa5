//! Conversion of Western calendar dates to the Myanmar lunisolar calendar.
//!
//! A date goes through a fixed pipeline: Western date, Julian date, Myanmar
//! date, astrological labels, display string. Every stage is a pure function
//! over constant tables.
//!
//! ```
//! use myanmar_calendar::{MyanmarMonth, WesternDate, Weekday, convert};
//!
//! let date: WesternDate = "2022-06-25".parse().unwrap();
//! let result = convert(&date).unwrap();
//!
//! assert_eq!(result.julian_day.get(), 2_459_756.0);
//! assert_eq!(result.myanmar.month, MyanmarMonth::Nayon);
//! assert_eq!(result.myanmar.weekday, Weekday::Saturday);
//! assert_eq!(result.display, "Myanmar Year 1384, Nayon Waning 12, Saturday");
//! ```

mod consts;
mod error;
mod prelude;
mod types;

pub mod astro;
pub mod convert;
pub mod era;
pub mod fmt;
pub mod julian;
pub mod myanmar;

pub use astro::AstrologicalLabels;
pub use consts::*;
pub use convert::{ConversionConfig, ConversionResult, Converter, convert, convert_julian_day};
pub use error::ConversionError;
pub use julian::{CalendarSystem, JulianDay, julian_to_western, western_to_julian};
pub use myanmar::{MoonPhase, MyanmarDate, MyanmarMonth, Weekday, YearType};
pub use types::{Day, LeapRule, Month, TimeOfDay, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A validated date of the Western calendar with a local time of day.
///
/// The day is checked against the Julian leap rule, which admits every leap
/// day any supported calendar has. The calendar used for conversion checks
/// it again under its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WesternDate {
    year: Year,
    month: Month,
    day: Day,
    time: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(
        fmt = "Invalid year: {} (must be {}-{})",
        "_0",
        MIN_WESTERN_YEAR,
        MAX_WESTERN_YEAR
    )]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[display(fmt = "Date {year}-{month:02}-{day:02} was skipped by the calendar reform")]
    NonexistentDate { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid Julian day: {_0}")]
    InvalidJulianDay(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl WesternDate {
    /// Creates a date at noon.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::validate(year, month, day, TimeOfDay::NOON)
    }

    /// Creates a date with a time of day.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn with_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ParseError> {
        Self::validate(year, month, day, TimeOfDay::new(hour, minute, second)?)
    }

    /// Creates a date from components that are already validated
    pub const fn from_parts(year: Year, month: Month, day: Day, time: TimeOfDay) -> Self {
        Self {
            year,
            month,
            day,
            time,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    fn validate(year: i32, month: u8, day: u8, time: TimeOfDay) -> Result<Self, ParseError> {
        let checked_year = Year::new(year)?;
        let checked_month = Month::new(month)?;
        let checked_day = Day::new(day, year, month, LeapRule::Julian)?;
        Ok(Self::from_parts(checked_year, checked_month, checked_day, time))
    }
}

impl FromStr for WesternDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`. A leading `-` marks a
    /// year before year 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (date_part, time_part) = match trimmed.split_once(TIME_DESIGNATOR) {
            Some((date, time)) => (date, Some(time)),
            None => (trimmed, None),
        };

        let (negative, unsigned) = match date_part.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let year: i32 = Self::parse_digits(parts[0])?;
        let year = if negative { -year } else { year };
        let month: u8 = Self::parse_digits(parts[1])?;
        let day: u8 = Self::parse_digits(parts[2])?;

        let time = match time_part {
            Some(t) => Self::parse_time(t)?,
            None => TimeOfDay::NOON,
        };

        Self::validate(year, month, day, time)
    }
}

impl WesternDate {
    /// Parses an unsigned decimal field, rejecting signs and empty input
    fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_time(s: &str) -> Result<TimeOfDay, ParseError> {
        let parts: Vec<&str> = s.split(TIME_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected time as HH{0}MM{0}SS, found {1}",
                TIME_SEPARATOR, s
            )));
        }
        TimeOfDay::new(
            Self::parse_digits(parts[0])?,
            Self::parse_digits(parts[1])?,
            Self::parse_digits(parts[2])?,
        )
    }
}

impl std::fmt::Display for WesternDate {
    /// ISO 8601 with a four-digit year; the time is omitted at noon.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let year = self.year();
        if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(f, "-{:02}-{:02}", self.month(), self.day())?;
        if self.time != TimeOfDay::NOON {
            write!(f, "{}{}", TIME_DESIGNATOR, self.time)?;
        }
        Ok(())
    }
}

impl TryFrom<(i32, u8, u8)> for WesternDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for WesternDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for WesternDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
