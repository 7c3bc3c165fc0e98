//! # wp-time
//!
//! Calendar arithmetic for the year planner: the `Date` type, weekday and
//! month enums, the Easter-Sunday computation, the Austrian holiday
//! table, and the full-year date iterator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter-Sunday computation.
pub mod easter;

/// Fixed and Easter-relative Austrian holidays.
pub mod holidays;

/// `Month`, the month-of-year enum.
pub mod month;

/// `Weekday`, the day of the week.
pub mod weekday;

/// Full-year date enumeration.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use easter::easter_sunday;
pub use holidays::HolidayTable;
pub use month::Month;
pub use weekday::Weekday;
pub use year::{days_of_year, DaysOfYear};
