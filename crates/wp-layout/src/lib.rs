//! # wp-layout
//!
//! Pure page geometry: unit conversion, the seven-column week grid, the
//! cover-page layout, and the entry-truncation rule.
//!
//! All positions are expressed in millimetres with the origin at the
//! page's **top-left** corner (the convention of the layout constants);
//! the renderer flips to PDF bottom-left coordinates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Cover-page geometry.
pub mod cover;

/// Week-grid geometry.
pub mod grid;

/// Millimetre/point conversion.
pub mod units;

pub use grid::{truncate_entry, Grid, Position, COLUMN_WIDTH_MM, MAX_ENTRY_CHARS};
pub use units::{mm_to_points, points_to_mm, MM_TO_PT};
