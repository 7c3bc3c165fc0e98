//! # wp-pdf
//!
//! Everything that touches PDF bytes: authoring the primary week-planner
//! document with `printpdf`, and structural work with `lopdf`: reading
//! the page template, stamping it behind the week pages, and deriving
//! the secondary two-up document.

#![forbid(unsafe_code)]

/// Optional asset reading.
pub mod assets;

/// The printpdf-backed `PageSink` implementation.
pub mod author;

/// Error type.
pub mod error;

/// Template stamping and two-up imposition.
pub mod impose;

mod objects;

/// The page template (size reference and week-page background).
pub mod template;

pub use assets::read_asset;
pub use author::DocumentAuthor;
pub use error::{RenderError, Result};
pub use impose::{stamp_template, two_up};
pub use template::Template;
