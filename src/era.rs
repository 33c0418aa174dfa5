//! Historical calendar regimes used for the watat (intercalary year) rule.
//!
//! Each regime carries the constants of the excess-day computation and two
//! exception lists. Exceptions are historical records and take precedence over
//! the arithmetic. New corrections are added here as table rows, never as
//! conditionals in the calculator.

use serde::Serialize;

/// Revision of the regime table. Bump when a row or exception changes.
pub const TABLE_VERSION: u32 = 1;

/// How the watat status of a year is decided before exceptions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WatatRule {
    /// 19-year Metonic cycle (7 intercalations per cycle)
    Metonic,
    /// Excess days over the lunar year reach the watat threshold
    ExcessDays,
}

/// One row of the regime table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EraRegime {
    /// Short name of the regime
    pub name: &'static str,
    /// First Myanmar year governed by this regime (inclusive)
    pub first_year: i64,
    /// Era identifier, 1.x for the Myanmar kings, 2 colonial, 3 independence
    pub id: f64,
    pub rule: WatatRule,
    /// Offset applied to the full moon day of (second) Waso
    pub waso_offset: f64,
    /// Number of months used to derive the excess-day thresholds
    pub threshold_months: f64,
    /// Full moon day corrections `(year, days)` for watat years, sorted by year
    pub full_moon_exceptions: &'static [(i64, i64)],
    /// Watat overrides `(year, is_watat)`, sorted by year
    pub watat_exceptions: &'static [(i64, bool)],
}

impl EraRegime {
    /// Correction to the second Waso full moon, if the year is listed.
    pub fn full_moon_correction(&self, year: i64) -> Option<i64> {
        lookup(self.full_moon_exceptions, year)
    }

    /// Recorded watat status, if the year is listed.
    pub fn watat_override(&self, year: i64) -> Option<bool> {
        lookup(self.watat_exceptions, year)
    }
}

fn lookup<T: Copy>(table: &[(i64, T)], year: i64) -> Option<T> {
    table
        .binary_search_by_key(&year, |&(y, _)| y)
        .ok()
        .map(|i| table[i].1)
}

/// Regimes ordered by `first_year`, latest first.
pub static ERA_REGIMES: [EraRegime; 5] = [
    EraRegime {
        name: "post-independence",
        first_year: 1312,
        id: 3.0,
        rule: WatatRule::ExcessDays,
        waso_offset: -0.5,
        threshold_months: 8.0,
        full_moon_exceptions: &[(1377, 1)],
        watat_exceptions: &[(1344, true), (1345, false)],
    },
    EraRegime {
        name: "british",
        first_year: 1217,
        id: 2.0,
        rule: WatatRule::ExcessDays,
        waso_offset: -1.0,
        threshold_months: 4.0,
        full_moon_exceptions: &[(1234, 1), (1261, -1)],
        watat_exceptions: &[(1263, true), (1264, false)],
    },
    EraRegime {
        name: "thandeikta",
        first_year: 1100,
        id: 1.3,
        rule: WatatRule::Metonic,
        waso_offset: -0.85,
        threshold_months: -1.0,
        full_moon_exceptions: &[(1120, 1), (1126, -1), (1150, 1), (1172, -1), (1207, 1)],
        watat_exceptions: &[(1201, true), (1202, false)],
    },
    EraRegime {
        name: "makaranta-2",
        first_year: 798,
        id: 1.2,
        rule: WatatRule::Metonic,
        waso_offset: -1.1,
        threshold_months: -1.0,
        full_moon_exceptions: &[
            (813, -1),
            (849, -1),
            (851, -1),
            (854, -1),
            (927, -1),
            (933, -1),
            (936, -1),
            (938, -1),
            (949, -1),
            (952, -1),
            (963, -1),
            (968, -1),
            (1039, -1),
        ],
        watat_exceptions: &[],
    },
    EraRegime {
        name: "makaranta-1",
        first_year: i64::MIN,
        id: 1.1,
        rule: WatatRule::Metonic,
        waso_offset: -1.1,
        threshold_months: -1.0,
        full_moon_exceptions: &[
            (205, 1),
            (246, 1),
            (471, 1),
            (572, -1),
            (651, 1),
            (653, 2),
            (656, 1),
            (672, 1),
            (729, 1),
            (767, -1),
        ],
        watat_exceptions: &[],
    },
];

/// Regime governing the given Myanmar year.
pub fn regime_for(year: i64) -> &'static EraRegime {
    ERA_REGIMES
        .iter()
        .find(|r| year >= r.first_year)
        .unwrap_or(&ERA_REGIMES[ERA_REGIMES.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regimes_sorted_latest_first() {
        for pair in ERA_REGIMES.windows(2) {
            assert!(
                pair[0].first_year > pair[1].first_year,
                "{} must start after {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_exception_lists_sorted() {
        for regime in &ERA_REGIMES {
            assert!(
                regime.full_moon_exceptions.windows(2).all(|w| w[0].0 < w[1].0),
                "{} full moon exceptions unsorted",
                regime.name
            );
            assert!(
                regime.watat_exceptions.windows(2).all(|w| w[0].0 < w[1].0),
                "{} watat exceptions unsorted",
                regime.name
            );
        }
    }

    #[test]
    fn test_exceptions_belong_to_their_regime() {
        for regime in &ERA_REGIMES {
            for &(year, _) in regime.full_moon_exceptions {
                assert_eq!(regime_for(year).name, regime.name, "year {year}");
            }
            for &(year, _) in regime.watat_exceptions {
                assert_eq!(regime_for(year).name, regime.name, "year {year}");
            }
        }
    }

    #[test]
    fn test_regime_boundaries() {
        let cases = [
            (0, "makaranta-1"),
            (797, "makaranta-1"),
            (798, "makaranta-2"),
            (1099, "makaranta-2"),
            (1100, "thandeikta"),
            (1216, "thandeikta"),
            (1217, "british"),
            (1311, "british"),
            (1312, "post-independence"),
            (1384, "post-independence"),
            (-5, "makaranta-1"),
        ];
        for (year, name) in cases {
            assert_eq!(regime_for(year).name, name, "year {year}");
        }
    }

    #[test]
    fn test_lookup() {
        let regime = regime_for(1344);
        assert_eq!(regime.watat_override(1344), Some(true));
        assert_eq!(regime.watat_override(1345), Some(false));
        assert_eq!(regime.watat_override(1346), None);
        assert_eq!(regime.full_moon_correction(1377), Some(1));
        assert_eq!(regime_for(653).full_moon_correction(653), Some(2));
    }

    #[test]
    fn test_rules_match_era_ids() {
        for regime in &ERA_REGIMES {
            let expected = if regime.id >= 2.0 {
                WatatRule::ExcessDays
            } else {
                WatatRule::Metonic
            };
            assert_eq!(regime.rule, expected, "{}", regime.name);
        }
    }
}
