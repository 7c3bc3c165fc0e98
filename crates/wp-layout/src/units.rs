//! Millimetre/point conversion.

/// Conversion factor from millimetres to PDF points (1/72 inch).
pub const MM_TO_PT: f64 = 2.83465;

/// Convert millimetres to PDF points.
pub fn mm_to_points(mm: f64) -> f64 {
    mm * MM_TO_PT
}

/// Convert PDF points to millimetres.
pub fn points_to_mm(pt: f64) -> f64 {
    pt / MM_TO_PT
}
