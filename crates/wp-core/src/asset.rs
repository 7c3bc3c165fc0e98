//! Tri-state handling for optional input files.
//!
//! The planner tolerates some missing inputs (logo, font, special-dates
//! file) by degrading output, while others (the page template) abort the
//! run.  Loaders for tolerated inputs return [`Asset<T>`]; the fatal case
//! stays an ordinary `Err`.  This makes "loaded", "absent-tolerated", and
//! "absent-fatal" three distinct shapes at the type level instead of a
//! catch-all.

/// An optional input that may legitimately be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset<T> {
    /// The input was found and read.
    Loaded(T),
    /// The input is missing; the caller continues with degraded output.
    Absent,
}

impl<T> Asset<T> {
    /// Convert into an `Option`, discarding the asset/absence distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Asset::Loaded(v) => Some(v),
            Asset::Absent => None,
        }
    }

    /// Borrowing view of the loaded value.
    pub fn as_ref(&self) -> Asset<&T> {
        match self {
            Asset::Loaded(v) => Asset::Loaded(v),
            Asset::Absent => Asset::Absent,
        }
    }

    /// Return `true` if the input was found.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Asset::Loaded(_))
    }
}
