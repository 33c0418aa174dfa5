/// Earliest accepted Western year (4713 BC, astronomical numbering)
pub const MIN_WESTERN_YEAR: i32 = -4712;
/// Latest accepted Western year (inclusive)
pub const MAX_WESTERN_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Largest hour of day
pub const MAX_HOUR: u8 = 23;
/// Largest minute / second value
pub const MAX_MINUTE: u8 = 59;
/// Default hour used when a date carries no time (JDN is integral at noon)
pub const NOON_HOUR: u8 = 12;
/// Seconds in a civil day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// First JDN of the Gregorian calendar in the 1582 reform (1582-10-15)
pub const GREGORIAN_REFORM_START: i64 = 2_299_161;
/// First JDN of the Gregorian calendar in Britain and colonies (1752-09-14)
pub const BRITISH_GREGORIAN_START: i64 = 2_361_222;

/// Length of the solar year in days (365.2587565)
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;
/// Length of the synodic lunar month in days (29.53058795)
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;
/// Julian date of the beginning of Myanmar Era year 0
pub const MYANMAR_EPOCH: f64 = 1_954_168.050_623;
/// Offset added to the Myanmar year in the excess-day formula
pub(crate) const EXCESS_DAY_YEAR_OFFSET: f64 = 3739.0;

/// Earliest Myanmar year the engine models
pub const MIN_MYANMAR_YEAR: i64 = 0;
/// Latest Myanmar year the engine accepts, the one holding 31 December 9999
pub const MAX_MYANMAR_YEAR: i64 = 9361;

/// Days in a common Myanmar lunar year
pub const COMMON_YEAR_DAYS: i64 = 354;
/// Days in the inserted intercalary month
pub const INTERCALARY_MONTH_DAYS: i64 = 30;
/// Days between the full moon of (second) Waso and the first of Tagu
pub(crate) const TAGU_BEFORE_WASO_FULL_MOON: i64 = 102;
/// How many years back to look for the previous watat year
pub(crate) const WATAT_LOOKBACK: i64 = 3;

/// Days of the week
pub const DAYS_PER_WEEK: i64 = 7;
/// JDN offset that maps day numbers onto Saturday-origin weekdays
pub(crate) const WEEKDAY_OFFSET: i64 = 2;

/// Full moon day of every Myanmar month
pub const FULL_MOON_DAY: u8 = 15;
/// Fixed Sabbath days, the last day of the month is added per month
pub const SABBATH_DAYS: [u8; 3] = [8, FULL_MOON_DAY, 23];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and the time of day (ISO 8601 format)
pub const TIME_DESIGNATOR: char = 'T';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
