//! Error types for wochenplan.
//!
//! A single `thiserror`-derived enum covers the pure crates (dates,
//! layout, composition).  Rendering has its own error type in `wp-pdf`
//! because it wraps foreign library errors.

use thiserror::Error;

/// The error type used by the date, layout, and composition crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range year, invalid day of month, …).
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout the workspace libraries.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wp_core::ensure;
/// fn supported_year(year: u16) -> wp_core::Result<u16> {
///     ensure!(year >= 1900, "year {year} not supported");
///     Ok(year)
/// }
/// assert!(supported_year(2026).is_ok());
/// assert!(supported_year(1815).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
