//! # wp-compose
//!
//! Turns the enumerated days of a year into page-level render calls:
//! week pages, mid-week month notes, and day columns.  Rendering itself
//! sits behind the [`PageSink`] trait so the composition logic stays
//! free of any PDF concern.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Composer state machine and the `PageSink` seam.
pub mod composer;

/// Display-name provider for months and weekdays.
pub mod names;

/// Special-dates table and its CSV loader.
pub mod special;

pub use composer::{Composer, DayCell, PageSink, WeekHeader};
pub use names::{AustrianGerman, NameProvider};
pub use special::SpecialDates;
