//! Single entry point from a Western date to a complete Myanmar result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AstrologicalLabels, CalendarSystem, ConversionError, JulianDay, MAX_MYANMAR_YEAR,
    MIN_MYANMAR_YEAR, MyanmarDate, WesternDate,
    astro::Label,
    fmt,
    julian::{julian_to_western, western_to_julian},
    myanmar::{MoonPhase, MyanmarMonth, Weekday, year_of},
};

/// Settings of a [`Converter`].
///
/// # Example
///
/// ```
/// use myanmar_calendar::{CalendarSystem, ConversionConfig};
///
/// let config = ConversionConfig::new()
///     .with_calendar(CalendarSystem::british())
///     .with_supported_years(1100, 1400);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Western calendar used to read and write dates.
    calendar: CalendarSystem,
    /// Earliest Myanmar year accepted.
    min_year: i64,
    /// Latest Myanmar year accepted.
    max_year: i64,
}

impl ConversionConfig {
    /// Creates the default configuration.
    ///
    /// Defaults: the 1582 reform calendar and every modelled Myanmar year.
    pub const fn new() -> Self {
        Self {
            calendar: CalendarSystem::Reformed {
                gregorian_start: crate::GREGORIAN_REFORM_START,
            },
            min_year: MIN_MYANMAR_YEAR,
            max_year: MAX_MYANMAR_YEAR,
        }
    }

    /// Sets the Western calendar.
    pub const fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    /// Restricts conversion to Myanmar years `min..=max`.
    pub const fn with_supported_years(mut self, min: i64, max: i64) -> Self {
        self.min_year = min;
        self.max_year = max;
        self
    }

    /// Returns the Western calendar.
    pub const fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// Returns the earliest accepted Myanmar year.
    pub const fn min_year(&self) -> i64 {
        self.min_year
    }

    /// Returns the latest accepted Myanmar year.
    pub const fn max_year(&self) -> i64 {
        self.max_year
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the year range is empty or reaches outside the
    /// modelled era.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.min_year > self.max_year {
            return Err(ConversionError::InvalidConfig(format!(
                "empty year range {}..={}",
                self.min_year, self.max_year
            )));
        }
        if self.min_year < MIN_MYANMAR_YEAR || self.max_year > MAX_MYANMAR_YEAR {
            return Err(ConversionError::InvalidConfig(format!(
                "year range {}..={} exceeds {MIN_MYANMAR_YEAR}..={MAX_MYANMAR_YEAR}",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything known about one converted date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Western date, normalised through the Julian date
    pub western: WesternDate,
    pub julian_day: JulianDay,
    pub myanmar: MyanmarDate,
    pub labels: AstrologicalLabels,
    /// Canonical display string
    pub display: String,
}

impl ConversionResult {
    /// Integral Julian day number of the date
    pub fn day_number(&self) -> i64 {
        self.julian_day.day_number()
    }

    pub const fn month(&self) -> MyanmarMonth {
        self.myanmar.month
    }

    /// Whether the date falls in the inserted First Waso
    pub const fn is_intercalary(&self) -> bool {
        self.myanmar.month.is_intercalary()
    }

    pub const fn weekday(&self) -> Weekday {
        self.myanmar.weekday
    }

    /// Weekday index, 0 = Saturday
    pub const fn weekday_index(&self) -> u8 {
        self.myanmar.weekday.index()
    }

    pub fn weekday_name(&self) -> &'static str {
        fmt::weekday_name(self.myanmar.weekday)
    }

    pub fn month_name(&self) -> &'static str {
        fmt::month_name(self.myanmar.month, self.myanmar.year_type)
    }

    pub const fn moon_phase(&self) -> MoonPhase {
        self.myanmar.moon_phase()
    }

    /// Labels present on the date, in display order
    pub fn label_list(&self) -> Vec<Label> {
        self.labels.labels()
    }
}

/// Runs the conversion pipeline with a fixed configuration.
///
/// # Example
///
/// ```
/// use myanmar_calendar::{ConversionConfig, Converter, WesternDate};
///
/// let converter = Converter::new(ConversionConfig::new()).unwrap();
/// let date = WesternDate::new(2023, 8, 1).unwrap();
/// let result = converter.convert(&date).unwrap();
///
/// assert_eq!(result.display, "Myanmar Year 1385, Second Waso Full Moon, Tuesday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Creates a converter after validating `config`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: ConversionConfig) -> Result<Self, ConversionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Converts a Western date.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the date does not exist in the
    /// configured calendar, `ConversionError::UnsupportedEra` if it falls
    /// outside the configured years, or `ConversionError::InternalTableMiss`
    /// if a constant table is inconsistent.
    #[tracing::instrument(skip_all, fields(date = %date))]
    pub fn convert(&self, date: &WesternDate) -> Result<ConversionResult, ConversionError> {
        let jd = western_to_julian(date, self.config.calendar)?;
        debug!(julian_day = jd.get(), "western date read");
        self.convert_julian_day(jd)
    }

    /// Converts a Julian date.
    ///
    /// # Errors
    /// Returns `ConversionError::UnsupportedEra` if the day falls outside the
    /// configured years, `ConversionError::InvalidDate` if it lies past
    /// 31 December 9999, otherwise as [`Converter::convert`].
    pub fn convert_julian_day(&self, jd: JulianDay) -> Result<ConversionResult, ConversionError> {
        let jdn = jd.day_number();
        let year = year_of(jdn);
        if !(self.config.min_year..=self.config.max_year).contains(&year) {
            debug!(jdn, year, "outside the configured years");
            return Err(ConversionError::UnsupportedEra {
                year,
                min: self.config.min_year,
                max: self.config.max_year,
            });
        }

        let western = julian_to_western(jd, self.config.calendar)?;
        let myanmar = MyanmarDate::from_day_number(jdn)?;
        debug!(
            year = myanmar.year,
            month = ?myanmar.month,
            day = myanmar.day,
            "myanmar date resolved"
        );
        let labels = AstrologicalLabels::derive(&myanmar)?;
        let display = fmt::display(&myanmar);

        Ok(ConversionResult {
            western,
            julian_day: jd,
            myanmar,
            labels,
            display,
        })
    }
}

/// Converts a Western date with the default configuration.
///
/// # Errors
/// See [`Converter::convert`].
pub fn convert(date: &WesternDate) -> Result<ConversionResult, ConversionError> {
    Converter::default().convert(date)
}

/// Converts a Julian date with the default configuration.
///
/// # Errors
/// See [`Converter::convert_julian_day`].
pub fn convert_julian_day(jd: JulianDay) -> Result<ConversionResult, ConversionError> {
    Converter::default().convert_julian_day(jd)
}
