//! Full-year date enumeration.

use wp_core::errors::Result;

use crate::date::Date;

/// Return an iterator over every date of `year`, January 1 through
/// December 31, ascending by exactly one day per step.
///
/// The iterator is `Clone`, so a fresh traversal can be restarted from a
/// kept copy.
pub fn days_of_year(year: u16) -> Result<DaysOfYear> {
    let first = Date::from_ymd(year, 1, 1)?;
    let last = Date::from_ymd(year, 12, 31)?;
    Ok(DaysOfYear {
        next: first.serial(),
        last: last.serial(),
    })
}

/// Iterator over the days of one calendar year.  See [`days_of_year`].
#[derive(Debug, Clone)]
pub struct DaysOfYear {
    next: i32,
    last: i32,
}

impl Iterator for DaysOfYear {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let date = Date::from_serial_unchecked(self.next);
        self.next += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last - self.next + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DaysOfYear {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::is_leap_year;

    #[test]
    fn year_lengths() {
        assert_eq!(days_of_year(2026).unwrap().count(), 365);
        assert_eq!(days_of_year(2024).unwrap().count(), 366); // leap
        assert_eq!(days_of_year(2000).unwrap().count(), 366); // leap century
        assert_eq!(days_of_year(2100).unwrap().count(), 365); // non-leap century
    }

    #[test]
    fn strictly_ascending_by_one_day() {
        for year in [2023, 2024, 2026] {
            let mut days = days_of_year(year).unwrap();
            let mut prev = days.next().unwrap();
            assert_eq!(prev, Date::from_ymd(year, 1, 1).unwrap());
            for day in days {
                assert_eq!(day - prev, 1, "gap before {day}");
                prev = day;
            }
            assert_eq!(prev, Date::from_ymd(year, 12, 31).unwrap());
        }
    }

    #[test]
    fn leap_day_present_only_in_leap_years() {
        let has_feb29 = |year: u16| {
            days_of_year(year)
                .unwrap()
                .any(|d| d.month().number() == 2 && d.day_of_month() == 29)
        };
        assert!(has_feb29(2024));
        assert!(!has_feb29(2026));
        assert_eq!(has_feb29(2000), is_leap_year(2000));
    }

    #[test]
    fn restartable_via_clone() {
        let days = days_of_year(2026).unwrap();
        let again = days.clone();
        assert_eq!(days.count(), again.count());
    }

    #[test]
    fn exact_size() {
        let mut days = days_of_year(2026).unwrap();
        assert_eq!(days.len(), 365);
        days.next();
        assert_eq!(days.len(), 364);
    }
}
