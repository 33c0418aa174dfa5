//! Traditional astrological attributes of a Myanmar date.
//!
//! Every attribute is a constant-table lookup keyed by the weekday, month,
//! day or year of an already computed [`MyanmarDate`]. An attribute that has
//! no rule for the date is `None`/`false`, which is a normal outcome. The
//! intercalary First Waso takes the rules of Waso, and the late months take
//! the rules of the months they are named after.

use serde::{Deserialize, Serialize};

use crate::{
    ConversionError, DAYS_PER_WEEK, MyanmarDate, SABBATH_DAYS,
    myanmar::{MyanmarMonth, Weekday},
    prelude::*,
};

/// Sabbath status of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Sabbath {
    #[display(fmt = "Sabbath")]
    Sabbath,
    #[display(fmt = "Sabbath Eve")]
    SabbathEve,
}

/// Inauspicious-day classification of a month and weekday pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Pyathada {
    #[display(fmt = "Pyathada")]
    FullDay,
    #[display(fmt = "Afternoon Pyathada")]
    Afternoon,
}

/// Direction of the dragon's head (Nagahle) for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Direction {
    West,
    North,
    East,
    South,
}

/// Mahabote house derived from the year and weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mahabote {
    Binga,
    Atun,
    Yaza,
    Adipati,
    Marana,
    Thike,
    Puti,
}

/// Nakhat class of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Nakhat {
    Ogre,
    Elf,
    Human,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::West,
    Direction::North,
    Direction::East,
    Direction::South,
];

const MAHABOTE: [Mahabote; 7] = [
    Mahabote::Binga,
    Mahabote::Atun,
    Mahabote::Yaza,
    Mahabote::Adipati,
    Mahabote::Marana,
    Mahabote::Thike,
    Mahabote::Puti,
];

const NAKHAT: [Nakhat; 3] = [Nakhat::Ogre, Nakhat::Elf, Nakhat::Human];

/// Month group (month mod 4) in which a weekday is full-day Pyathada,
/// indexed by weekday.
const PYATHADA_GROUP: [u8; 7] = [1, 3, 3, 0, 2, 1, 2];

/// One named attribute, for callers that want a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Label {
    #[display(fmt = "{_0}")]
    Sabbath(Sabbath),
    #[display(fmt = "Yatyaza")]
    Yatyaza,
    #[display(fmt = "{_0}")]
    Pyathada(Pyathada),
    #[display(fmt = "Nagahle {_0}")]
    Nagahle(Direction),
    #[display(fmt = "Mahabote {_0}")]
    Mahabote(Mahabote),
    #[display(fmt = "Nakhat {_0}")]
    Nakhat(Nakhat),
}

/// Astrological attributes of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AstrologicalLabels {
    pub sabbath: Option<Sabbath>,
    pub yatyaza: bool,
    pub pyathada: Option<Pyathada>,
    pub nagahle: Direction,
    pub mahabote: Mahabote,
    pub nakhat: Nakhat,
}

impl AstrologicalLabels {
    /// Derives every attribute of `date`.
    ///
    /// # Errors
    /// Returns `ConversionError::InternalTableMiss` if a lookup table does not
    /// cover an index it should.
    pub fn derive(date: &MyanmarDate) -> Result<Self, ConversionError> {
        Ok(Self {
            sabbath: sabbath(date.day, date.month_length()),
            yatyaza: is_yatyaza(date.month, date.weekday),
            pyathada: pyathada(date.month, date.weekday),
            nagahle: nagahle(date.month)?,
            mahabote: mahabote(date.year, date.weekday)?,
            nakhat: nakhat(date.year)?,
        })
    }

    /// The attributes present on this date, in display order.
    pub fn labels(&self) -> Vec<Label> {
        let mut labels = Vec::with_capacity(6);
        labels.extend(self.sabbath.map(Label::Sabbath));
        if self.yatyaza {
            labels.push(Label::Yatyaza);
        }
        labels.extend(self.pyathada.map(Label::Pyathada));
        labels.push(Label::Nagahle(self.nagahle));
        labels.push(Label::Mahabote(self.mahabote));
        labels.push(Label::Nakhat(self.nakhat));
        labels
    }
}

/// Month index with First Waso folded onto Waso.
const fn rule_month(month: MyanmarMonth) -> u8 {
    if month.is_intercalary() {
        MyanmarMonth::Waso.index()
    } else {
        month.index()
    }
}

pub fn sabbath(day: u8, month_length: u8) -> Option<Sabbath> {
    if SABBATH_DAYS.contains(&day) || day == month_length {
        Some(Sabbath::Sabbath)
    } else if SABBATH_DAYS.contains(&(day + 1)) || day + 1 == month_length {
        Some(Sabbath::SabbathEve)
    } else {
        None
    }
}

pub const fn is_yatyaza(month: MyanmarMonth, weekday: Weekday) -> bool {
    let group = rule_month(month) % 4;
    let first = group / 2 + 4;
    let second = ((1 - group / 2) + group % 2) * (1 + 2 * (group % 2));
    weekday.index() == first || weekday.index() == second
}

pub const fn pyathada(month: MyanmarMonth, weekday: Weekday) -> Option<Pyathada> {
    let group = rule_month(month) % 4;
    if group == PYATHADA_GROUP[weekday.index() as usize] {
        Some(Pyathada::FullDay)
    } else if group == 0 && matches!(weekday, Weekday::Wednesday) {
        Some(Pyathada::Afternoon)
    } else {
        None
    }
}

fn table_lookup<T: Copy>(table: &[T], name: &'static str, key: i64) -> Result<T, ConversionError> {
    usize::try_from(key)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .ok_or_else(|| ConversionError::table_miss(name, key))
}

/// Nagahle direction of a month.
///
/// # Errors
/// Returns `ConversionError::InternalTableMiss` if the direction table is short.
pub fn nagahle(month: MyanmarMonth) -> Result<Direction, ConversionError> {
    let key = i64::from(rule_month(month) % 12 / 3);
    table_lookup(&DIRECTIONS, "nagahle", key)
}

/// Mahabote house for a year and weekday.
///
/// # Errors
/// Returns `ConversionError::InternalTableMiss` if the mahabote table is short.
pub fn mahabote(year: i64, weekday: Weekday) -> Result<Mahabote, ConversionError> {
    let key = (year - i64::from(weekday.index())).rem_euclid(DAYS_PER_WEEK);
    table_lookup(&MAHABOTE, "mahabote", key)
}

/// Nakhat class of a year.
///
/// # Errors
/// Returns `ConversionError::InternalTableMiss` if the nakhat table is short.
pub fn nakhat(year: i64) -> Result<Nakhat, ConversionError> {
    table_lookup(&NAKHAT, "nakhat", year.rem_euclid(3))
}
