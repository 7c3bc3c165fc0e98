//! Display names for months and weekdays.
//!
//! Names come from an injected provider rather than the host locale, so
//! the output language is fixed at startup and independent of the
//! environment.

use wp_time::{Month, Weekday};

/// Maps months and weekdays to display strings for one target language.
pub trait NameProvider {
    /// Full month name shown in week headers and month notes.
    fn month_name(&self, month: Month) -> &str;

    /// Two-letter weekday abbreviation shown next to the day number.
    fn day_abbrev(&self, weekday: Weekday) -> &str;
}

/// Austrian German names (de_AT: "Jänner", not "Januar").
#[derive(Debug, Clone, Copy, Default)]
pub struct AustrianGerman;

const MONTH_NAMES: [&str; 12] = [
    "Jänner",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const DAY_ABBREVS: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

impl NameProvider for AustrianGerman {
    fn month_name(&self, month: Month) -> &str {
        MONTH_NAMES[month.number() as usize - 1]
    }

    fn day_abbrev(&self, weekday: Weekday) -> &str {
        DAY_ABBREVS[weekday.zero_based() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn austrian_month_names() {
        let names = AustrianGerman;
        assert_eq!(names.month_name(Month::January), "Jänner");
        assert_eq!(names.month_name(Month::March), "März");
        assert_eq!(names.month_name(Month::December), "Dezember");
    }

    #[test]
    fn day_abbrevs_are_two_letters() {
        let names = AustrianGerman;
        for n in 1..=7 {
            let wd = Weekday::from_ordinal(n).unwrap();
            assert_eq!(names.day_abbrev(wd).chars().count(), 2);
        }
        assert_eq!(names.day_abbrev(Weekday::Monday), "Mo");
        assert_eq!(names.day_abbrev(Weekday::Sunday), "So");
    }
}
