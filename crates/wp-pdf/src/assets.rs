//! Reading of optional input files (font, logo).
//!
//! Missing optional assets degrade the output instead of failing the
//! run; the caller gets an explicit [`Asset`] rather than an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;
use wp_core::Asset;

/// Read an optional asset file.  On any failure, log a warning naming
/// `what` and return [`Asset::Absent`].
pub fn read_asset(path: &Path, what: &str) -> Asset<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Asset::Loaded(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "could not find {what}, output will be degraded");
            Asset::Absent
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read {what}, output will be degraded");
            Asset::Absent
        }
    }
}
