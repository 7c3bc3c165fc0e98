//! Week-grid geometry.
//!
//! One page holds one ISO week: seven columns of fixed width, one per
//! weekday (column 0 = Monday).  Vertical offsets are fixed relative to
//! the top margin.  Text placement has no overflow protection, so the
//! caller must pre-truncate entry text via [`truncate_entry`].

/// Width of one weekday column in millimetres.
pub const COLUMN_WIDTH_MM: f64 = 27.0;

/// Maximum number of characters of a special-date entry that are drawn.
pub const MAX_ENTRY_CHARS: usize = 12;

/// A position on the page, in millimetres from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

/// Font sizes in points for the page elements.
pub mod font {
    /// Week header (month name, year + week number).
    pub const HEADER: f32 = 13.0;
    /// Day-of-month number.
    pub const DAY_NUMBER: f32 = 13.0;
    /// Two-letter day-of-week abbreviation.
    pub const DAY_NAME: f32 = 7.0;
    /// Holiday label under the day number.
    pub const HOLIDAY: f32 = 5.0;
    /// Special-date entry line.
    pub const ENTRY: f32 = 7.0;
}

const BASE_X: f64 = 10.0;
const HEADER_Y: f64 = 20.0;
const DAY_Y: f64 = 30.0;
const DAY_NAME_X_OFFSET: f64 = 10.0;
const HOLIDAY_Y: f64 = 35.0;
const ENTRY_X_OFFSET: f64 = 3.0;
const ENTRY_FIRST_Y: f64 = 45.0;
const ENTRY_STEP_Y: f64 = 7.0;
const WEEK_NUMBER_COLUMN: u8 = 6;

/// Maps semantic page positions (header, day column, entry line) to
/// millimetre coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    column_width: f64,
}

impl Grid {
    /// Create a grid with the given column width in millimetres.
    pub fn new(column_width_mm: f64) -> Self {
        Grid {
            column_width: column_width_mm,
        }
    }

    fn column_x(&self, column: u8) -> f64 {
        BASE_X + f64::from(column) * self.column_width
    }

    /// Month name of the week header.
    pub fn week_title(&self) -> Position {
        Position {
            x: BASE_X,
            y: HEADER_Y,
        }
    }

    /// Year and week number, right of the title in the Sunday column.
    pub fn week_number(&self) -> Position {
        Position {
            x: self.column_x(WEEK_NUMBER_COLUMN),
            y: HEADER_Y,
        }
    }

    /// In-page month name marking a mid-week month transition, placed at
    /// the transition day's column.
    pub fn month_note(&self, column: u8) -> Position {
        Position {
            x: self.column_x(column),
            y: HEADER_Y,
        }
    }

    /// Day-of-month number.
    pub fn day_number(&self, column: u8) -> Position {
        Position {
            x: self.column_x(column),
            y: DAY_Y,
        }
    }

    /// Two-letter weekday abbreviation, right of the day number.
    pub fn day_name(&self, column: u8) -> Position {
        Position {
            x: self.column_x(column) + DAY_NAME_X_OFFSET,
            y: DAY_Y,
        }
    }

    /// Holiday label under the day number.
    pub fn holiday_label(&self, column: u8) -> Position {
        Position {
            x: self.column_x(column),
            y: HOLIDAY_Y,
        }
    }

    /// Special-date entry line `line` (0-based), stacked downwards.
    pub fn entry_line(&self, column: u8, line: usize) -> Position {
        Position {
            x: self.column_x(column) + ENTRY_X_OFFSET,
            y: ENTRY_FIRST_Y + ENTRY_STEP_Y * line as f64,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(COLUMN_WIDTH_MM)
    }
}

/// Truncate a special-date entry to its first [`MAX_ENTRY_CHARS`]
/// characters (not bytes), the planner's only overflow mitigation.
pub fn truncate_entry(entry: &str) -> &str {
    match entry.char_indices().nth(MAX_ENTRY_CHARS) {
        Some((idx, _)) => &entry[..idx],
        None => entry,
    }
}
