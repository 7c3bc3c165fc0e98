//! Easter-Sunday computation.

use wp_core::ensure;
use wp_core::errors::Result;

use crate::date::Date;

/// Compute the date of Easter Sunday in `year`.
///
/// Uses the anonymous Gregorian ("Gauss") algorithm.  The result always
/// falls between March 22 and April 25 inclusive and is a Sunday.
///
/// # Errors
/// Returns an error if `year` lies outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    ensure!(
        (1900..=2199).contains(&year),
        "year {year} outside supported range [1900, 2199]"
    );
    let y = year as i32;

    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    Date::from_ymd(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_dates() {
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026).unwrap(), date(2026, 4, 5));
        assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(easter_sunday(2016).unwrap(), date(2016, 3, 27));
    }

    #[test]
    fn extreme_easter_dates() {
        // earliest possible (March 22) does not occur in range, but the
        // latest (April 25) does
        assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
        // March 23 years (these collide Ascension with May 1)
        assert_eq!(easter_sunday(2008).unwrap(), date(2008, 3, 23));
    }

    #[test]
    fn always_a_sunday_in_window() {
        for year in 1900..=2199 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(
                easter.weekday(),
                Weekday::Sunday,
                "easter {easter} is not a Sunday"
            );
            let lo = date(year, 3, 22);
            let hi = date(year, 4, 25);
            assert!(
                easter >= lo && easter <= hi,
                "easter {easter} outside [Mar 22, Apr 25]"
            );
        }
    }

    #[test]
    fn out_of_range_year_rejected() {
        assert!(easter_sunday(1815).is_err());
        assert!(easter_sunday(2200).is_err());
    }
}
