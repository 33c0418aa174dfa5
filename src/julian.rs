//! Conversion between Western calendar dates and Julian Day Numbers.

use serde::{Deserialize, Serialize};

use crate::{
    GREGORIAN_REFORM_START, ParseError, SECONDS_PER_DAY, WesternDate,
    consts::BRITISH_GREGORIAN_START,
    prelude::*,
    types::{Day, LeapRule, Month, TimeOfDay, Year},
};

/// JDN of 1 January 4713 BC in the proleptic Julian calendar
const MIN_DAY_NUMBER: i64 = 0;
/// JDN of 31 December 9999 in the Gregorian calendar
const MAX_DAY_NUMBER: i64 = 5_373_484;
/// Seconds from midnight to noon, the epoch of every Julian day
const NOON_SECONDS: i64 = SECONDS_PER_DAY / 2;

/// A continuous day count with the time of day in the fractional part.
///
/// Integral values fall on noon, so a day number `n` covers the half-open
/// interval `[n - 0.5, n + 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "f64", into = "f64")]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidJulianDay` if the value is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, ParseError> {
        if !value.is_finite() {
            return Err(ParseError::InvalidJulianDay(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Builds a Julian date from a day number and a local time of day.
    pub fn from_parts(day_number: i64, time: TimeOfDay) -> Self {
        let offset = (time.seconds_since_midnight() - NOON_SECONDS) as f64;
        Self(day_number as f64 + offset / SECONDS_PER_DAY as f64)
    }

    /// Returns the raw value
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// The integral day number, rounding half days up.
    pub fn day_number(self) -> i64 {
        (self.0 + 0.5).floor() as i64
    }

    /// Splits into the day number and the seconds elapsed since midnight,
    /// rounded to whole seconds.
    pub fn split(self) -> (i64, i64) {
        let shifted = self.0 + 0.5;
        let mut day = shifted.floor() as i64;
        let mut seconds = ((shifted - shifted.floor()) * SECONDS_PER_DAY as f64).round() as i64;
        if seconds >= SECONDS_PER_DAY {
            day += 1;
            seconds -= SECONDS_PER_DAY;
        }
        (day, seconds)
    }
}

impl TryFrom<f64> for JulianDay {
    type Error = ParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.0
    }
}

/// The Western calendar used to read and write dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarSystem {
    /// Julian calendar before `gregorian_start`, Gregorian from it onwards.
    Reformed {
        /// First JDN counted in the Gregorian calendar
        gregorian_start: i64,
    },
    /// Proleptic Gregorian calendar for every date
    Gregorian,
    /// Proleptic Julian calendar for every date
    Julian,
}

impl Default for CalendarSystem {
    fn default() -> Self {
        Self::Reformed {
            gregorian_start: GREGORIAN_REFORM_START,
        }
    }
}

impl CalendarSystem {
    /// Reform as adopted by Britain and its colonies (1752-09-14).
    pub const fn british() -> Self {
        Self::Reformed {
            gregorian_start: BRITISH_GREGORIAN_START,
        }
    }

    /// Leap rule in force for the given month.
    pub fn leap_rule(self, year: i32, month: u8) -> LeapRule {
        match self {
            Self::Gregorian => LeapRule::Gregorian,
            Self::Julian => LeapRule::Julian,
            Self::Reformed { gregorian_start } => {
                // the 28th exists in every month and precedes any leap day
                if day_number(year, month, 28, LeapRule::Gregorian) >= gregorian_start {
                    LeapRule::Gregorian
                } else {
                    LeapRule::Julian
                }
            }
        }
    }

    /// Leap rule used to name the given day number.
    const fn rule_for_day_number(self, jdn: i64) -> LeapRule {
        match self {
            Self::Gregorian => LeapRule::Gregorian,
            Self::Julian => LeapRule::Julian,
            Self::Reformed { gregorian_start } if jdn >= gregorian_start => LeapRule::Gregorian,
            Self::Reformed { .. } => LeapRule::Julian,
        }
    }
}

/// Day number of a calendar date under a fixed leap rule.
fn day_number(year: i32, month: u8, day: u8, rule: LeapRule) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    let base = d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4);
    match rule {
        LeapRule::Gregorian => base - y.div_euclid(100) + y.div_euclid(400) - 32045,
        LeapRule::Julian => base - 32083,
    }
}

/// Calendar date of a day number under a fixed leap rule.
fn civil_from_day_number(jdn: i64, rule: LeapRule) -> (i32, u8, u8) {
    let correction = match rule {
        LeapRule::Gregorian => ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38,
        LeapRule::Julian => 0,
    };
    let f = jdn + 1401 + correction;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    (year as i32, month as u8, day as u8)
}

/// Converts a Western date to a Julian date.
///
/// Dates before the calendar's Gregorian start are read as Julian calendar
/// dates. The time of day is folded into the fractional part, so noon gives an
/// integral value.
///
/// # Errors
/// Returns `ParseError::InvalidDay` if the day does not exist under the leap
/// rule in force, or `ParseError::NonexistentDate` for dates skipped by the
/// calendar reform.
pub fn western_to_julian(
    date: &WesternDate,
    calendar: CalendarSystem,
) -> Result<JulianDay, ParseError> {
    let (year, month, day) = (date.year(), date.month(), date.day());
    let rule = calendar.leap_rule(year, month);
    Day::new(day, year, month, rule)?;

    let jdn = match calendar {
        CalendarSystem::Gregorian => day_number(year, month, day, LeapRule::Gregorian),
        CalendarSystem::Julian => day_number(year, month, day, LeapRule::Julian),
        CalendarSystem::Reformed { gregorian_start } => {
            let gregorian = day_number(year, month, day, LeapRule::Gregorian);
            if gregorian >= gregorian_start {
                gregorian
            } else {
                let julian = day_number(year, month, day, LeapRule::Julian);
                if julian >= gregorian_start {
                    return Err(ParseError::NonexistentDate { year, month, day });
                }
                julian
            }
        }
    };

    Ok(JulianDay::from_parts(jdn, date.time()))
}

/// Converts a Julian date back to a Western date, rounding the time of day to
/// whole seconds.
///
/// # Errors
/// Returns `ParseError::InvalidJulianDay` if the value falls outside the
/// supported Western years.
pub fn julian_to_western(jd: JulianDay, calendar: CalendarSystem) -> Result<WesternDate, ParseError> {
    let (jdn, seconds) = jd.split();
    if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&jdn) {
        return Err(ParseError::InvalidJulianDay(jd.to_string()));
    }

    let rule = calendar.rule_for_day_number(jdn);
    let (y, m, d) = civil_from_day_number(jdn, rule);
    let year = Year::new(y)?;
    let month = Month::new(m)?;
    let day = Day::new(d, y, m, rule)?;
    let time = TimeOfDay::new(
        (seconds / 3600) as u8,
        (seconds % 3600 / 60) as u8,
        (seconds % 60) as u8,
    )?;

    Ok(WesternDate::from_parts(year, month, day, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> WesternDate {
        WesternDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_noon_is_integral() {
        let jd = western_to_julian(&date(2022, 6, 25), CalendarSystem::default()).unwrap();
        assert_eq!(jd.get(), 2_459_756.0);
    }

    #[test]
    fn test_known_day_numbers() {
        let cases = [
            ((2000, 1, 1), 2_451_545),
            ((1970, 1, 1), 2_440_588),
            ((2021, 9, 8), 2_459_466),
            ((1582, 10, 15), 2_299_161),
            ((1582, 10, 4), 2_299_160),
            ((-4712, 1, 1), 0),
            ((638, 3, 22), 1_954_168),
        ];
        for ((y, m, d), expected) in cases {
            let jd = western_to_julian(&date(y, m, d), CalendarSystem::default()).unwrap();
            assert_eq!(jd.day_number(), expected, "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_time_of_day_fraction() {
        let midnight = WesternDate::with_time(2000, 1, 1, 0, 0, 0).unwrap();
        let jd = western_to_julian(&midnight, CalendarSystem::default()).unwrap();
        assert_eq!(jd.get(), 2_451_544.5);
        assert_eq!(jd.day_number(), 2_451_545);

        let evening = WesternDate::with_time(2000, 1, 1, 18, 0, 0).unwrap();
        let jd = western_to_julian(&evening, CalendarSystem::default()).unwrap();
        assert_eq!(jd.get(), 2_451_545.25);
    }

    #[test]
    fn test_cutover_gap_is_rejected() {
        for d in 5..=14 {
            let result = western_to_julian(&date(1582, 10, d), CalendarSystem::default());
            assert!(
                matches!(result, Err(ParseError::NonexistentDate { day, .. }) if day == d),
                "1582-10-{d:02} should not exist"
            );
        }
        assert!(western_to_julian(&date(1582, 10, 10), CalendarSystem::Gregorian).is_ok());
    }

    #[test]
    fn test_british_reform() {
        let british = CalendarSystem::british();
        let jd = western_to_julian(&date(1752, 9, 14), british).unwrap();
        assert_eq!(jd.day_number(), 2_361_222);
        let jd = western_to_julian(&date(1752, 9, 2), british).unwrap();
        assert_eq!(jd.day_number(), 2_361_221);
        assert!(western_to_julian(&date(1752, 9, 3), british).is_err());
        // still Julian in 1700 under the British reform
        assert!(western_to_julian(&date(1700, 2, 29), british).is_ok());
        assert!(western_to_julian(&date(1700, 2, 29), CalendarSystem::default()).is_err());
    }

    #[test]
    fn test_proleptic_calendars_differ() {
        let d = date(1000, 3, 1);
        let julian = western_to_julian(&d, CalendarSystem::Julian).unwrap();
        let gregorian = western_to_julian(&d, CalendarSystem::Gregorian).unwrap();
        assert_eq!(julian.day_number() - gregorian.day_number(), 6);
        assert_eq!(
            julian,
            western_to_julian(&d, CalendarSystem::default()).unwrap()
        );
    }

    #[test]
    fn test_julian_to_western_known_values() {
        let cases = [
            (2_451_545, (2000, 1, 1)),
            (2_299_161, (1582, 10, 15)),
            (2_299_160, (1582, 10, 4)),
            (0, (-4712, 1, 1)),
        ];
        for (jdn, (y, m, d)) in cases {
            let jd = JulianDay::new(jdn as f64).unwrap();
            let w = julian_to_western(jd, CalendarSystem::default()).unwrap();
            assert_eq!((w.year(), w.month(), w.day()), (y, m, d), "jdn {jdn}");
            assert_eq!(w.time(), TimeOfDay::NOON);
        }
    }

    #[test]
    fn test_julian_to_western_time_rounding() {
        let jd = JulianDay::new(2_451_544.5).unwrap();
        let w = julian_to_western(jd, CalendarSystem::default()).unwrap();
        assert_eq!(w.to_string(), "2000-01-01T00:00:00");

        // a hair before midnight rounds into the next day
        let jd = JulianDay::new(2_451_545.499_999_9).unwrap();
        let w = julian_to_western(jd, CalendarSystem::default()).unwrap();
        assert_eq!(w.to_string(), "2000-01-02T00:00:00");
    }

    #[test]
    fn test_round_trip_every_day_across_reform() {
        let start = western_to_julian(&date(1500, 1, 1), CalendarSystem::default())
            .unwrap()
            .day_number();
        let end = western_to_julian(&date(1800, 1, 1), CalendarSystem::default())
            .unwrap()
            .day_number();
        let mut previous: Option<i64> = None;
        for jdn in start..=end {
            let jd = JulianDay::new(jdn as f64).unwrap();
            let w = julian_to_western(jd, CalendarSystem::default()).unwrap();
            let back = western_to_julian(&w, CalendarSystem::default()).unwrap();
            assert_eq!(back, jd, "round trip of {w}");
            if let Some(p) = previous {
                assert_eq!(back.day_number(), p + 1);
            }
            previous = Some(back.day_number());
        }
    }

    #[test]
    fn test_round_trip_with_time() {
        for (h, n, s) in [(0, 0, 0), (6, 30, 15), (12, 0, 1), (23, 59, 59)] {
            let w = WesternDate::with_time(-500, 7, 14, h, n, s).unwrap();
            for calendar in [
                CalendarSystem::default(),
                CalendarSystem::Gregorian,
                CalendarSystem::Julian,
            ] {
                let jd = western_to_julian(&w, calendar).unwrap();
                assert_eq!(julian_to_western(jd, calendar).unwrap(), w, "{calendar:?}");
            }
        }
    }

    #[test]
    fn test_julian_day_rejects_non_finite() {
        assert!(matches!(
            JulianDay::new(f64::NAN),
            Err(ParseError::InvalidJulianDay(_))
        ));
        assert!(JulianDay::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_julian_to_western_out_of_range() {
        let jd = JulianDay::new(-10.0).unwrap();
        assert!(matches!(
            julian_to_western(jd, CalendarSystem::default()),
            Err(ParseError::InvalidJulianDay(_))
        ));
        let jd = JulianDay::new(6_000_000.0).unwrap();
        assert!(julian_to_western(jd, CalendarSystem::default()).is_err());
    }

    #[test]
    fn test_julian_day_serde() {
        let jd = JulianDay::new(2_459_756.0).unwrap();
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2459756.0");
        let parsed: JulianDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, jd);
    }
}
