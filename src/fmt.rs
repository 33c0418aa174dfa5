//! Display names and the canonical date string.

use crate::{
    MyanmarDate,
    myanmar::{MoonPhase, MyanmarMonth, Weekday, YearType},
};

/// Month names, indexed by [`MyanmarMonth::index`].
pub const MONTH_NAMES: [&str; 15] = [
    "First Waso",
    "Tagu",
    "Kason",
    "Nayon",
    "Waso",
    "Wagaung",
    "Tawthalin",
    "Thadingyut",
    "Tazaungmon",
    "Nadaw",
    "Pyatho",
    "Tabodwe",
    "Tabaung",
    "Late Tagu",
    "Late Kason",
];

/// Weekday names, Saturday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Era prefix of the year in the display string.
pub const ERA_LABEL: &str = "Myanmar Year";

/// Name of a month as used in a year of the given type.
///
/// # Example
///
/// ```
/// use myanmar_calendar::fmt;
/// use myanmar_calendar::myanmar::{MyanmarMonth, YearType};
///
/// assert_eq!("Waso", fmt::month_name(MyanmarMonth::Waso, YearType::Common));
/// assert_eq!("Second Waso", fmt::month_name(MyanmarMonth::Waso, YearType::LittleWatat));
/// ```
pub fn month_name(month: MyanmarMonth, year_type: YearType) -> &'static str {
    if month == MyanmarMonth::Waso && year_type.is_watat() {
        "Second Waso"
    } else {
        MONTH_NAMES[usize::from(month.index())]
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[usize::from(weekday.index())]
}

/// Moon phase with the fortnight day where it is meaningful.
///
/// # Example
///
/// ```
/// use myanmar_calendar::fmt;
/// use myanmar_calendar::myanmar::MoonPhase;
///
/// assert_eq!("Waxing 3", fmt::moon_phase_name(MoonPhase::Waxing, 3));
/// assert_eq!("Full Moon", fmt::moon_phase_name(MoonPhase::FullMoon, 15));
/// ```
pub fn moon_phase_name(phase: MoonPhase, fortnight_day: u8) -> String {
    match phase {
        MoonPhase::Waxing | MoonPhase::Waning => format!("{phase} {fortnight_day}"),
        MoonPhase::FullMoon | MoonPhase::NewMoon => phase.to_string(),
    }
}

/// Canonical display string of a Myanmar date.
///
/// # Example
///
/// ```
/// use myanmar_calendar::{MyanmarDate, fmt};
///
/// let date = MyanmarDate::from_day_number(2_459_756).unwrap();
/// assert_eq!("Myanmar Year 1384, Nayon Waning 12, Saturday", fmt::display(&date));
/// ```
pub fn display(date: &MyanmarDate) -> String {
    format!(
        "{ERA_LABEL} {}, {} {}, {}",
        date.year,
        month_name(date.month, date.year_type),
        moon_phase_name(date.moon_phase(), date.fortnight_day()),
        weekday_name(date.weekday)
    )
}
