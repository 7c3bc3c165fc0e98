//! Austrian (Styrian) public-holiday table.
//!
//! Eleven fixed-date holidays plus six holidays derived from Easter
//! Sunday.  Built once per target year and read-only afterwards.

use std::collections::BTreeMap;

use wp_core::errors::Result;

use crate::date::Date;
use crate::easter::easter_sunday;

/// Fixed holidays as (month, day, display name).
const FIXED: [(u8, u8, &str); 11] = [
    (1, 1, "Neujahr"),
    (1, 6, "Heilige Drei Könige"),
    (5, 1, "Staatsfeiertag"),
    (8, 15, "Mariä Himmelfahrt"),
    (10, 26, "Nationalfeiertag"),
    (11, 1, "Allerheiligen"),
    (12, 8, "Mariä Empfängnis"),
    (12, 24, "Heiliger Abend"),
    (12, 25, "Christtag"),
    (12, 26, "Stefanitag"),
    (12, 31, "Sylvester"),
];

/// Easter-relative holidays as (day offset from Easter Sunday, name).
const EASTER_RELATIVE: [(i32, &str); 6] = [
    (0, "Ostersonntag"),
    (1, "Ostermontag"),
    (39, "Christi Himmelfahrt"),
    (49, "Pfingstsonntag"),
    (50, "Pfingstmontag"),
    (60, "Fronleichnam"),
];

/// Immutable holiday lookup for one target year.
///
/// When Easter falls on March 23, Ascension (+39) lands on May 1 and the
/// Easter-relative name replaces Staatsfeiertag, same as a dict insert.
#[derive(Debug, Clone)]
pub struct HolidayTable {
    entries: BTreeMap<Date, &'static str>,
}

impl HolidayTable {
    /// Build the table for `year`.
    pub fn for_year(year: u16) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (month, day, name) in FIXED {
            entries.insert(Date::from_ymd(year, month, day)?, name);
        }
        let easter = easter_sunday(year)?;
        for (offset, name) in EASTER_RELATIVE {
            entries.insert(easter.add_days(offset)?, name);
        }
        Ok(HolidayTable { entries })
    }

    /// Return the holiday name for `date`, if any.
    pub fn get(&self, date: Date) -> Option<&'static str> {
        self.entries.get(&date).copied()
    }

    /// Number of holidays in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the table is empty (it never is for a valid year).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (date, name) pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &'static str)> + '_ {
        self.entries.iter().map(|(d, n)| (*d, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn table_2026_has_seventeen_entries() {
        let table = HolidayTable::for_year(2026).unwrap();
        assert_eq!(table.len(), 17);
        assert!(!table.is_empty());
    }

    #[test]
    fn all_entries_within_target_year() {
        for year in [1999, 2024, 2026, 2100] {
            let table = HolidayTable::for_year(year).unwrap();
            for (d, name) in table.iter() {
                assert_eq!(d.year(), year, "{name} at {d} leaked out of {year}");
            }
        }
    }

    #[test]
    fn easter_relative_holidays_2026() {
        let table = HolidayTable::for_year(2026).unwrap();
        assert_eq!(table.get(date(2026, 4, 5)), Some("Ostersonntag"));
        assert_eq!(table.get(date(2026, 4, 6)), Some("Ostermontag"));
        assert_eq!(table.get(date(2026, 5, 14)), Some("Christi Himmelfahrt"));
        assert_eq!(table.get(date(2026, 5, 24)), Some("Pfingstsonntag"));
        assert_eq!(table.get(date(2026, 5, 25)), Some("Pfingstmontag"));
        assert_eq!(table.get(date(2026, 6, 4)), Some("Fronleichnam"));
    }

    #[test]
    fn fixed_holidays_2026() {
        let table = HolidayTable::for_year(2026).unwrap();
        assert_eq!(table.get(date(2026, 1, 1)), Some("Neujahr"));
        assert_eq!(table.get(date(2026, 10, 26)), Some("Nationalfeiertag"));
        assert_eq!(table.get(date(2026, 12, 31)), Some("Sylvester"));
        assert_eq!(table.get(date(2026, 7, 15)), None);
    }

    #[test]
    fn ascension_collides_with_may_day_2008() {
        // Easter 2008 was March 23; +39 days is May 1
        let table = HolidayTable::for_year(2008).unwrap();
        assert_eq!(table.len(), 16);
        assert_eq!(table.get(date(2008, 5, 1)), Some("Christi Himmelfahrt"));
    }
}
