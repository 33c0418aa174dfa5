use myanmar_calendar::{
    CalendarSystem, ConversionError, JulianDay, MAX_MYANMAR_YEAR, MIN_MYANMAR_YEAR, MyanmarDate,
    MyanmarMonth, ParseError, WesternDate, Weekday,
    astro::{self, Sabbath},
    convert, convert_julian_day, julian_to_western,
    myanmar::{YearInfo, solar_new_year, watat_year},
    western_to_julian,
};

#[test]
fn test_reference_date() {
    let date: WesternDate = "2022-06-25".parse().unwrap();
    let result = convert(&date).unwrap();
    assert_eq!(result.julian_day.get(), 2_459_756.0);
    assert_eq!(result.weekday(), Weekday::Saturday);
    assert_eq!(result.weekday_name(), "Saturday");
    assert_eq!(result.month(), MyanmarMonth::Nayon);
    assert_eq!(result.myanmar.year, 1384);
}

#[test]
fn test_day_numbers_strictly_increase() {
    let calendar = CalendarSystem::default();
    let mut date = WesternDate::new(1582, 9, 1).unwrap();
    let mut previous = western_to_julian(&date, calendar).unwrap().day_number();
    for _ in 0..120 {
        let next = JulianDay::new((previous + 1) as f64).unwrap();
        let following = julian_to_western(next, calendar).unwrap();
        assert!(following > date, "{following} after {date}");
        let jdn = western_to_julian(&following, calendar).unwrap().day_number();
        assert_eq!(jdn, previous + 1, "{following}");
        previous = jdn;
        date = following;
    }
}

#[test]
fn test_western_round_trip_sampled() {
    for calendar in [
        CalendarSystem::default(),
        CalendarSystem::british(),
        CalendarSystem::Julian,
        CalendarSystem::Gregorian,
    ] {
        for i in 0..1000_i64 {
            // clear of the first Gregorian year, which precedes 4712 BC
            let jdn = 400 + (i * 5387) % 5_373_000;
            let jd = JulianDay::new(jdn as f64).unwrap();
            let date = julian_to_western(jd, calendar).unwrap();
            assert_eq!(western_to_julian(&date, calendar).unwrap(), jd, "{date}");
        }
    }
}

#[test]
fn test_year_lengths() {
    for year in 0..=1500 {
        let next = YearInfo::new(year + 1).unwrap();
        let length = next.tagu_start - YearInfo::new(year).unwrap().tagu_start;
        let watat = watat_year(year).is_watat;
        match length {
            354 => assert!(!watat, "{year} has 354 days but is watat"),
            384 | 385 => assert!(watat, "{year} has {length} days but is common"),
            _ => panic!("{year} has {length} days"),
        }
    }
}

#[test]
fn test_exception_years() {
    for year in [1344, 1263, 1201] {
        assert!(watat_year(year).is_watat, "{year} is a recorded watat year");
    }
    for year in [1345, 1264, 1202] {
        assert!(!watat_year(year).is_watat, "{year} is a recorded common year");
    }
}

#[test]
fn test_sabbath_on_every_month() {
    let start = solar_new_year(1380);
    let end = solar_new_year(1387);
    let mut sabbaths_per_month = std::collections::BTreeMap::new();
    for jdn in start..end {
        let result = convert_julian_day(JulianDay::new(jdn as f64).unwrap()).unwrap();
        let date = result.myanmar;
        let expected = [8, 15, 23, date.month_length()].contains(&date.day);
        assert_eq!(
            result.labels.sabbath == Some(Sabbath::Sabbath),
            expected,
            "{}",
            result.display
        );
        if expected {
            *sabbaths_per_month
                .entry((date.year, date.month.index()))
                .or_insert(0) += 1;
        }
    }
    // months cut by the new year are partial, whole months have four
    let whole = sabbaths_per_month.values().filter(|&&n| n == 4).count();
    assert!(whole >= 77, "only {whole} months with four Sabbath days");
}

#[test]
fn test_mahabote_and_nakhat_periods() {
    for year in 1000..1100 {
        for weekday in Weekday::ALL {
            assert_eq!(
                astro::mahabote(year, weekday).unwrap(),
                astro::mahabote(year + 7, weekday).unwrap()
            );
        }
        assert_eq!(
            astro::nakhat(year).unwrap(),
            astro::nakhat(year + 3).unwrap()
        );
        assert_ne!(
            astro::nakhat(year).unwrap(),
            astro::nakhat(year + 1).unwrap()
        );
    }
}

#[test]
fn test_myanmar_round_trip_every_day() {
    let first = solar_new_year(MIN_MYANMAR_YEAR);
    let end = solar_new_year(MAX_MYANMAR_YEAR + 1);
    let mut previous: Option<MyanmarDate> = None;
    for jdn in first..end {
        let date = MyanmarDate::from_day_number(jdn).unwrap();
        assert_eq!(date.to_day_number().unwrap(), jdn, "{date:?}");
        assert!(
            !date.month.is_intercalary() || date.is_watat(),
            "{date:?} has a First Waso in a common year"
        );
        if let Some(previous) = previous {
            assert!(date.year >= previous.year, "{jdn}: {date:?} after {previous:?}");
        }
        previous = Some(date);
    }
}

#[test]
fn test_unsupported_era() {
    let result = convert(&WesternDate::new(500, 1, 1).unwrap());
    assert!(matches!(
        result,
        Err(ConversionError::UnsupportedEra { year: -139, .. })
    ));
}

#[test]
fn test_invalid_dates() {
    assert!(matches!(
        "2021-02-29".parse::<WesternDate>(),
        Err(ParseError::InvalidDay { .. })
    ));
    assert!(matches!(
        convert(&WesternDate::new(1582, 10, 5).unwrap()),
        Err(ConversionError::InvalidDate(ParseError::NonexistentDate { .. }))
    ));
    let past_last_western_day = JulianDay::new(5_373_485.0).unwrap();
    assert!(matches!(
        convert_julian_day(past_last_western_day),
        Err(ConversionError::InvalidDate(ParseError::InvalidJulianDay(_)))
    ));
    assert!(matches!(
        convert_julian_day(JulianDay::new(-1.0).unwrap()),
        Err(ConversionError::UnsupportedEra { .. })
    ));
}
