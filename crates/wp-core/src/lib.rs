//! # wp-core
//!
//! Error type, `Result` alias, and the optional-asset tri-state shared by
//! the wochenplan crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Optional-input handling (`Asset<T>`).
pub mod asset;

/// Error type and convenience macros.
pub mod errors;

pub use asset::Asset;
pub use errors::{Error, Result};
