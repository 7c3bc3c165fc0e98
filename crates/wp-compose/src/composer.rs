//! The page-composition state machine.
//!
//! One pass over the days of the target year decides when a new week
//! page starts, when a mid-week month transition gets an extra in-page
//! header, and what each day column contains.  The decisions are pushed
//! into a [`PageSink`]; the PDF author implements that trait, and tests
//! use a recording sink.

use wp_core::errors::Result;
use wp_time::{days_of_year, Date, HolidayTable, Weekday};

use crate::names::NameProvider;
use crate::special::SpecialDates;

/// Header data of a new week page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekHeader<'a> {
    /// Display name of the month the week's first rendered day falls in.
    pub month_name: &'a str,
    /// Target year.
    pub year: u16,
    /// Week number, starting at 1.
    pub week: u32,
}

/// Everything rendered in a single day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    /// The date itself.
    pub date: Date,
    /// Grid column, 0 = Monday … 6 = Sunday.
    pub column: u8,
    /// Two-letter weekday abbreviation.
    pub day_abbrev: &'a str,
    /// Holiday display name, when the date is a public holiday.
    pub holiday: Option<&'a str>,
    /// Special-date entries, split on `:` with no trimming, untruncated.
    pub entries: Vec<&'a str>,
}

/// Receives composition output, one call per rendered element.
///
/// Implementations render into a page (PDF) or record for inspection.
pub trait PageSink {
    /// Start a new week page and render its header.
    fn begin_week(&mut self, header: &WeekHeader<'_>) -> Result<()>;

    /// Render an extra in-page month name at `column`, marking a
    /// mid-week month transition.
    fn month_note(&mut self, column: u8, month_name: &str) -> Result<()>;

    /// Render one day column on the current page.
    fn day(&mut self, cell: &DayCell<'_>) -> Result<()>;
}

/// Composes the week pages of one year from the holiday table, the
/// special-dates table, and a name provider.
pub struct Composer<'a> {
    holidays: &'a HolidayTable,
    specials: &'a SpecialDates,
    names: &'a dyn NameProvider,
}

impl<'a> Composer<'a> {
    /// Create a composer over read-only lookup tables.
    pub fn new(
        holidays: &'a HolidayTable,
        specials: &'a SpecialDates,
        names: &'a dyn NameProvider,
    ) -> Self {
        Composer {
            holidays,
            specials,
            names,
        }
    }

    /// Run one pass over all days of `year`, pushing pages and day
    /// columns into `sink`.  Returns the number of week pages.
    pub fn compose(&self, year: u16, sink: &mut dyn PageSink) -> Result<u32> {
        let mut week = 0u32;
        let mut previous: Option<Weekday> = None;

        for day in days_of_year(year)? {
            let weekday = day.weekday();

            let starts_week = match previous {
                // first day of the year opens week 1
                None => true,
                Some(prev) => prev == Weekday::Sunday && weekday == Weekday::Monday,
            };
            if starts_week {
                week += 1;
                sink.begin_week(&WeekHeader {
                    month_name: self.names.month_name(day.month()),
                    year,
                    week,
                })?;
            }

            // A month beginning mid-week (Wednesday through Saturday) gets
            // an extra header at its column.  Monday starts a fresh page
            // anyway; Tuesday and Sunday firsts stay unmarked.
            if day.day_of_month() == 1
                && week > 1
                && weekday >= Weekday::Wednesday
                && weekday <= Weekday::Saturday
            {
                sink.month_note(weekday.zero_based(), self.names.month_name(day.month()))?;
            }

            let entries = match self.specials.lookup(day) {
                Some(joined) => joined.split(':').collect(),
                None => Vec::new(),
            };
            sink.day(&DayCell {
                date: day,
                column: weekday.zero_based(),
                day_abbrev: self.names.day_abbrev(weekday),
                holiday: self.holidays.get(day),
                entries,
            })?;

            previous = Some(weekday);
        }
        Ok(week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::AustrianGerman;
    use wp_time::Month;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Week { month: String, week: u32 },
        Note { column: u8, month: String },
        Day { date: Date, column: u8, holiday: Option<String>, entries: Vec<String> },
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl PageSink for Recorder {
        fn begin_week(&mut self, header: &WeekHeader<'_>) -> Result<()> {
            self.events.push(Event::Week {
                month: header.month_name.to_string(),
                week: header.week,
            });
            Ok(())
        }

        fn month_note(&mut self, column: u8, month_name: &str) -> Result<()> {
            self.events.push(Event::Note {
                column,
                month: month_name.to_string(),
            });
            Ok(())
        }

        fn day(&mut self, cell: &DayCell<'_>) -> Result<()> {
            self.events.push(Event::Day {
                date: cell.date,
                column: cell.column,
                holiday: cell.holiday.map(String::from),
                entries: cell.entries.iter().map(|e| e.to_string()).collect(),
            });
            Ok(())
        }
    }

    fn compose_year(year: u16, specials: &SpecialDates) -> (Recorder, u32) {
        let holidays = HolidayTable::for_year(year).unwrap();
        let names = AustrianGerman;
        let composer = Composer::new(&holidays, specials, &names);
        let mut recorder = Recorder::default();
        let weeks = composer.compose(year, &mut recorder).unwrap();
        (recorder, weeks)
    }

    #[test]
    fn year_2026_has_53_week_pages_and_365_days() {
        let (recorder, weeks) = compose_year(2026, &SpecialDates::new());
        assert_eq!(weeks, 53);
        let week_events = recorder
            .events
            .iter()
            .filter(|e| matches!(e, Event::Week { .. }))
            .count();
        let day_events = recorder
            .events
            .iter()
            .filter(|e| matches!(e, Event::Day { .. }))
            .count();
        assert_eq!(week_events, 53);
        assert_eq!(day_events, 365);
    }

    #[test]
    fn first_week_header_is_january_week_one() {
        let (recorder, _) = compose_year(2026, &SpecialDates::new());
        assert_eq!(
            recorder.events[0],
            Event::Week {
                month: "Jänner".to_string(),
                week: 1
            }
        );
    }

    #[test]
    fn new_pages_start_exactly_on_mondays() {
        let (recorder, _) = compose_year(2026, &SpecialDates::new());
        let mut expected_week = 0;
        for (i, event) in recorder.events.iter().enumerate() {
            match event {
                Event::Week { week, .. } => {
                    expected_week += 1;
                    assert_eq!(*week, expected_week, "weeks must increment by one");
                    if i > 0 {
                        // a later page opens only after a completed Sunday
                        assert!(matches!(
                            &recorder.events[i - 1],
                            Event::Day { date, .. } if date.weekday() == Weekday::Sunday
                        ));
                    }
                }
                Event::Day { date, .. } => {
                    if date.weekday() == Weekday::Monday {
                        // every Monday sits right after its page header
                        assert!(matches!(&recorder.events[i - 1], Event::Week { .. }));
                    }
                }
                Event::Note { .. } => {}
            }
        }
        assert_eq!(expected_week, 53);
    }

    #[test]
    fn month_notes_fire_only_for_wednesday_through_saturday_firsts() {
        // 2026 first-of-month weekdays: Apr=Wed, May=Fri, Jul=Wed, Aug=Sat,
        // Oct=Thu are in range; Jun=Mon, Sep=Tue, Dec=Tue, Feb/Mar/Nov=Sun
        // and Jan (week 1) are not.
        let (recorder, _) = compose_year(2026, &SpecialDates::new());
        let names = AustrianGerman;
        let noted: Vec<String> = recorder
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Note { month, .. } => Some(month.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<String> = [Month::April, Month::May, Month::July, Month::August, Month::October]
            .iter()
            .map(|m| names.month_name(*m).to_string())
            .collect();
        assert_eq!(noted, expected);
    }

    #[test]
    fn month_note_lands_in_the_transition_column() {
        let (recorder, _) = compose_year(2026, &SpecialDates::new());
        let first_note = recorder
            .events
            .iter()
            .find_map(|e| match e {
                Event::Note { column, month } => Some((*column, month.clone())),
                _ => None,
            })
            .unwrap();
        // April 1, 2026 is a Wednesday → column 2
        assert_eq!(first_note, (2, "April".to_string()));
    }

    #[test]
    fn holidays_appear_in_their_day_cells() {
        let (recorder, _) = compose_year(2026, &SpecialDates::new());
        let ascension = Date::from_ymd(2026, 5, 14).unwrap();
        let cell = recorder
            .events
            .iter()
            .find_map(|e| match e {
                Event::Day { date, holiday, .. } if *date == ascension => Some(holiday.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(cell.as_deref(), Some("Christi Himmelfahrt"));
    }

    #[test]
    fn special_entries_split_on_colon_without_trimming() {
        let mut specials = SpecialDates::new();
        specials.insert("03-17", "Dentist:Pay Rent");
        specials.insert("06-01", " padded : entry ");
        let (recorder, _) = compose_year(2026, &specials);

        let entries_on = |date: Date| {
            recorder
                .events
                .iter()
                .find_map(|e| match e {
                    Event::Day { date: d, entries, .. } if *d == date => Some(entries.clone()),
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(
            entries_on(Date::from_ymd(2026, 3, 17).unwrap()),
            vec!["Dentist".to_string(), "Pay Rent".to_string()]
        );
        assert_eq!(
            entries_on(Date::from_ymd(2026, 6, 1).unwrap()),
            vec![" padded ".to_string(), " entry ".to_string()]
        );
        assert!(entries_on(Date::from_ymd(2026, 3, 18).unwrap()).is_empty());
    }

    #[test]
    fn day_columns_match_weekdays() {
        let (recorder, _) = compose_year(2026, &SpecialDates::new());
        for event in &recorder.events {
            if let Event::Day { date, column, .. } = event {
                assert_eq!(*column, date.weekday().zero_based());
            }
        }
    }

    #[test]
    fn leap_year_2024_composes_366_days() {
        let (recorder, weeks) = compose_year(2024, &SpecialDates::new());
        let day_events = recorder
            .events
            .iter()
            .filter(|e| matches!(e, Event::Day { .. }))
            .count();
        assert_eq!(day_events, 366);
        // 2024 starts on a Monday; 52 further Mondays follow
        assert_eq!(weeks, 53);
    }
}
