//! Cover-page geometry.
//!
//! The cover holds an optional logo, a static title line, and the year
//! in large print.  Coordinates in millimetres from the top-left corner.

use crate::grid::Position;

/// Top-left corner of the logo square.
pub const LOGO: Position = Position { x: 84.0, y: 45.0 };

/// Edge length of the logo square in millimetres.
pub const LOGO_SIZE_MM: f64 = 40.0;

/// Baseline position of the title line.
pub const TITLE: Position = Position { x: 85.0, y: 95.0 };

/// Baseline position of the year.
pub const YEAR: Position = Position { x: 85.0, y: 105.0 };

/// Title font size in points.
pub const TITLE_FONT: f32 = 12.0;

/// Year font size in points.
pub const YEAR_FONT: f32 = 37.0;
