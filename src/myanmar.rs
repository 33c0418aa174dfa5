//! Myanmar lunisolar calendar: year classification and day mapping.
//!
//! The Myanmar year is solar: it starts on the new year day that closes the
//! Thingyan festival. Months are lunar and are counted from the 1st of
//! Tagu, which falls some days before the solar new year. Days of the year
//! that come after Tabaung but before the next solar new year are named Late
//! Tagu and Late Kason.
//!
//! A watat year inserts a 30-day First Waso before the regular Waso (which is
//! then called Second Waso). A big watat year also adds one day to Nayon.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    COMMON_YEAR_DAYS, ConversionError, DAYS_PER_WEEK, FULL_MOON_DAY, INTERCALARY_MONTH_DAYS,
    JulianDay, LUNAR_MONTH, MAX_MYANMAR_YEAR, MIN_MYANMAR_YEAR, MYANMAR_EPOCH, SOLAR_YEAR,
    consts::{EXCESS_DAY_YEAR_OFFSET, TAGU_BEFORE_WASO_FULL_MOON, WATAT_LOOKBACK, WEEKDAY_OFFSET},
    era::{WatatRule, regime_for},
    prelude::*,
    types::TimeOfDay,
};

/// Classification of a Myanmar year by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearType {
    /// 354 days, twelve months
    Common,
    /// 384 days, First Waso inserted
    LittleWatat,
    /// 385 days, First Waso inserted and Nayon lengthened
    BigWatat,
}

impl YearType {
    pub const fn is_watat(self) -> bool {
        !matches!(self, Self::Common)
    }

    /// Whether the year carries the extra watat day
    pub const fn has_leap_day(self) -> bool {
        matches!(self, Self::BigWatat)
    }

    /// Number of days from the 1st of Tagu to the next 1st of Tagu
    pub const fn length(self) -> i64 {
        COMMON_YEAR_DAYS
            + if self.is_watat() {
                INTERCALARY_MONTH_DAYS
            } else {
                0
            }
            + if self.has_leap_day() { 1 } else { 0 }
    }

    const fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Common),
            1 => Some(Self::LittleWatat),
            2 => Some(Self::BigWatat),
            _ => None,
        }
    }
}

/// Myanmar month, numbered the way the day mapping counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MyanmarMonth {
    /// Intercalary month of watat years
    FirstWaso = 0,
    Tagu = 1,
    Kason = 2,
    Nayon = 3,
    /// Called Second Waso in watat years
    Waso = 4,
    Wagaung = 5,
    Tawthalin = 6,
    Thadingyut = 7,
    Tazaungmon = 8,
    Nadaw = 9,
    Pyatho = 10,
    Tabodwe = 11,
    Tabaung = 12,
    /// Tagu days before the solar new year
    LateTagu = 13,
    /// Kason days before the solar new year
    LateKason = 14,
}

impl MyanmarMonth {
    pub const ALL: [Self; 15] = [
        Self::FirstWaso,
        Self::Tagu,
        Self::Kason,
        Self::Nayon,
        Self::Waso,
        Self::Wagaung,
        Self::Tawthalin,
        Self::Thadingyut,
        Self::Tazaungmon,
        Self::Nadaw,
        Self::Pyatho,
        Self::Tabodwe,
        Self::Tabaung,
        Self::LateTagu,
        Self::LateKason,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Whether this is the inserted month of a watat year
    pub const fn is_intercalary(self) -> bool {
        matches!(self, Self::FirstWaso)
    }

    /// Number of days in this month for a year of the given type.
    pub const fn length(self, year_type: YearType) -> u8 {
        let base = 30 - self.index() % 2;
        if matches!(self, Self::Nayon) && year_type.has_leap_day() {
            base + 1
        } else {
            base
        }
    }
}

/// Day of the week, Saturday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Weekday of a Julian day number.
    pub const fn from_day_number(jdn: i64) -> Self {
        Self::ALL[(jdn + WEEKDAY_OFFSET).rem_euclid(DAYS_PER_WEEK) as usize]
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Phase of the moon on a given day of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MoonPhase {
    #[display(fmt = "Waxing")]
    Waxing,
    #[display(fmt = "Full Moon")]
    FullMoon,
    #[display(fmt = "Waning")]
    Waning,
    #[display(fmt = "New Moon")]
    NewMoon,
}

/// Result of the watat test for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatatYear {
    /// Day number of the full moon of (second) Waso
    pub full_moon: i64,
    pub is_watat: bool,
}

/// Decides whether `year` is a watat year and where its Waso full moon falls.
pub fn watat_year(year: i64) -> WatatYear {
    let regime = regime_for(year);
    let excess_per_month = SOLAR_YEAR / 12.0 - LUNAR_MONTH;
    let adjust_threshold = excess_per_month * (12.0 - regime.threshold_months);

    let mut excess_days = (SOLAR_YEAR * (year as f64 + EXCESS_DAY_YEAR_OFFSET)) % LUNAR_MONTH;
    if excess_days < adjust_threshold {
        excess_days += LUNAR_MONTH;
    }

    let mut full_moon = round_half_up(
        SOLAR_YEAR * year as f64 + MYANMAR_EPOCH - excess_days
            + 4.5 * LUNAR_MONTH
            + regime.waso_offset,
    );

    let mut is_watat = match regime.rule {
        WatatRule::ExcessDays => {
            excess_days >= LUNAR_MONTH - excess_per_month * regime.threshold_months
        }
        WatatRule::Metonic => (year * 7 + 2).rem_euclid(19) >= 12,
    };
    if let Some(recorded) = regime.watat_override(year) {
        is_watat = recorded;
    }
    if is_watat {
        full_moon += regime.full_moon_correction(year).unwrap_or(0);
    }

    WatatYear {
        full_moon,
        is_watat,
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Myanmar year that contains the given day number.
pub fn year_of(jdn: i64) -> i64 {
    ((jdn as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i64
}

/// Day number of the solar new year day of `year`.
pub fn solar_new_year(year: i64) -> i64 {
    let mut jdn = (SOLAR_YEAR * year as f64 + MYANMAR_EPOCH + 0.5).ceil() as i64;
    while year_of(jdn) < year {
        jdn += 1;
    }
    while year_of(jdn - 1) >= year {
        jdn -= 1;
    }
    jdn
}

/// Everything needed to map days of one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearInfo {
    pub year: i64,
    pub year_type: YearType,
    /// Day number of the 1st of Tagu
    pub tagu_start: i64,
    /// Day number of the full moon of (second) Waso
    pub waso_full_moon: i64,
}

impl YearInfo {
    /// Classifies `year` and locates the start of its Tagu.
    ///
    /// # Errors
    /// Returns `ConversionError::InternalTableMiss` if the year is marked watat
    /// but the distance to the previous watat year is not a whole number of
    /// lunar years plus one month.
    pub fn new(year: i64) -> Result<Self, ConversionError> {
        let current = watat_year(year);

        let mut gap = 0;
        let previous = loop {
            gap += 1;
            let candidate = watat_year(year - gap);
            if candidate.is_watat || gap >= WATAT_LOOKBACK {
                break candidate;
            }
        };

        let (year_type, waso_full_moon) = if current.is_watat {
            let days = (current.full_moon - previous.full_moon).rem_euclid(COMMON_YEAR_DAYS);
            if days != 30 && days != 31 {
                error!(year, days, "watat year is not one lunar month off the cycle");
                return Err(ConversionError::InternalTableMiss {
                    table: "watat",
                    key: year,
                });
            }
            let year_type = YearType::from_index(days / 31 + 1)
                .ok_or_else(|| ConversionError::table_miss("year type", year))?;
            (year_type, current.full_moon)
        } else {
            (YearType::Common, previous.full_moon + COMMON_YEAR_DAYS * gap)
        };

        Ok(Self {
            year,
            year_type,
            tagu_start: previous.full_moon + COMMON_YEAR_DAYS * gap - TAGU_BEFORE_WASO_FULL_MOON,
            waso_full_moon,
        })
    }

    /// Days from the 1st of Tagu to the next 1st of Tagu
    pub const fn length(&self) -> i64 {
        self.year_type.length()
    }

    /// Maps a day number onto a month and a day of this year's calendar.
    fn month_day(&self, jdn: i64) -> (i64, i64) {
        let big = i64::from(self.year_type.has_leap_day());
        let common = i64::from(!self.year_type.is_watat());
        let length = self.length();

        let mut dd = jdn - self.tagu_start + 1;
        let late = (dd - 1).div_euclid(length);
        dd -= late * length;
        let a = (dd + 423).div_euclid(512);
        let month = (((dd - big * a + common * a * 30) as f64 + 29.26) / 29.544).floor() as i64;
        let e = (month + 12).div_euclid(16);
        let f = (month + 11).div_euclid(16);
        let day = dd - (29.544 * month as f64 - 29.26).floor() as i64 - big * e + common * f * 30;
        (month + f * 3 - e * 4 + 12 * late, day)
    }

    /// Day number of a month and day of this year's calendar.
    fn day_number(&self, month: MyanmarMonth, day: u8) -> i64 {
        let big = i64::from(self.year_type.has_leap_day());
        let common = i64::from(!self.year_type.is_watat());
        let index = i64::from(month.index());

        let late = index / 13;
        let mut m = index % 13 + late;
        m += 4 - ((m + 15) / 16) * 4 + (m + 12) / 16;
        let dd = i64::from(day) + (29.544 * m as f64 - 29.26).floor() as i64
            - common * ((m + 11) / 16) * 30
            + big * ((m + 12) / 16)
            + late * self.length();
        dd + self.tagu_start - 1
    }
}

/// A date in the Myanmar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MyanmarDate {
    /// Myanmar Era year (epoch 638 CE)
    pub year: i64,
    pub year_type: YearType,
    pub month: MyanmarMonth,
    /// Day of the month, 1-based
    pub day: u8,
    pub weekday: Weekday,
}

impl MyanmarDate {
    /// Converts a Julian date to a Myanmar date.
    ///
    /// # Errors
    /// Returns `ConversionError::UnsupportedEra` outside
    /// `MIN_MYANMAR_YEAR..=MAX_MYANMAR_YEAR`, or
    /// `ConversionError::InternalTableMiss` if the year tables are inconsistent.
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, ConversionError> {
        Self::from_day_number(jd.day_number())
    }

    /// Converts a Julian day number to a Myanmar date.
    ///
    /// The date carries the lunar year the day belongs to. A new year day that
    /// falls before the 1st of Tagu is the last day of the previous year.
    ///
    /// # Errors
    /// See [`MyanmarDate::from_julian_day`].
    pub fn from_day_number(jdn: i64) -> Result<Self, ConversionError> {
        let year = year_of(jdn);
        if !(MIN_MYANMAR_YEAR..=MAX_MYANMAR_YEAR).contains(&year) {
            return Err(ConversionError::UnsupportedEra {
                year,
                min: MIN_MYANMAR_YEAR,
                max: MAX_MYANMAR_YEAR,
            });
        }

        let mut info = YearInfo::new(year)?;
        if jdn < info.tagu_start {
            // new year day before the 1st of Tagu closes the previous lunar year
            info = YearInfo::new(year - 1)?;
        }
        let (month, day) = info.month_day(jdn);
        let month = MyanmarMonth::from_index(month)
            .ok_or_else(|| ConversionError::table_miss("month", month))?;
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (1..=month.length(info.year_type)).contains(d))
            .ok_or_else(|| ConversionError::table_miss("month length", day))?;

        Ok(Self {
            year: info.year,
            year_type: info.year_type,
            month,
            day,
            weekday: Weekday::from_day_number(jdn),
        })
    }

    /// Day number of this date, recomputed from the start of its year.
    ///
    /// # Errors
    /// Returns `ConversionError::InternalTableMiss` if the year tables are inconsistent.
    pub fn to_day_number(&self) -> Result<i64, ConversionError> {
        Ok(YearInfo::new(self.year)?.day_number(self.month, self.day))
    }

    /// Julian date of this day at noon.
    ///
    /// # Errors
    /// See [`MyanmarDate::to_day_number`].
    pub fn to_julian_day(&self) -> Result<JulianDay, ConversionError> {
        Ok(JulianDay::from_parts(self.to_day_number()?, TimeOfDay::NOON))
    }

    pub const fn is_watat(&self) -> bool {
        self.year_type.is_watat()
    }

    pub const fn is_watat_leap_day(&self) -> bool {
        self.year_type.has_leap_day()
    }

    /// Number of days in this date's month
    pub const fn month_length(&self) -> u8 {
        self.month.length(self.year_type)
    }

    pub const fn moon_phase(&self) -> MoonPhase {
        let d = self.day;
        match (d + 1) / 16 + d / 16 + d / self.month_length() {
            0 => MoonPhase::Waxing,
            1 => MoonPhase::FullMoon,
            2 => MoonPhase::Waning,
            _ => MoonPhase::NewMoon,
        }
    }

    /// Day counted within the waxing or waning fortnight (1..=15)
    pub const fn fortnight_day(&self) -> u8 {
        if self.day > FULL_MOON_DAY {
            self.day - FULL_MOON_DAY
        } else {
            self.day
        }
    }
}
