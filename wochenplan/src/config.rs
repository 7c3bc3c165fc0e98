//! Run configuration.
//!
//! The planner is a one-shot batch tool without a CLI surface; every
//! knob lives here and is changed by editing the defaults.

use std::path::PathBuf;

/// All inputs and outputs of one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target year of the planner.
    pub year: u16,
    /// Width of one weekday column in millimetres.
    pub column_width_mm: f64,
    /// Template PDF whose first page backs every week page and sets the
    /// page size.
    pub template: PathBuf,
    /// TrueType font for all text; falls back to Helvetica when absent.
    pub font: PathBuf,
    /// PNG logo for the cover; skipped when absent.
    pub logo: PathBuf,
    /// CSV file of special dates; skipped when absent.
    pub special_dates: PathBuf,
    /// Directory the two output documents are written to.
    pub output_dir: PathBuf,
    /// Title line on the cover page.
    pub cover_title: String,
}

impl Config {
    /// Path of the primary (one week per page) output document.
    pub fn primary_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("Mein_Kalender_A5_{}.pdf", self.year))
    }

    /// Path of the secondary (two weeks per page) output document.
    pub fn secondary_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("Mein_Kalender_A4_{}.pdf", self.year))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            year: 2026,
            column_width_mm: wp_layout::COLUMN_WIDTH_MM,
            template: PathBuf::from("template/Template.pdf"),
            font: PathBuf::from("font/Silkscreen-Regular.ttf"),
            logo: PathBuf::from("logo/logo.png"),
            special_dates: PathBuf::from("data/special-dates.csv"),
            output_dir: PathBuf::from("output"),
            cover_title: "MEIN KALENDER".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_carry_the_year() {
        let config = Config {
            year: 2027,
            ..Config::default()
        };
        assert_eq!(
            config.primary_path(),
            PathBuf::from("output/Mein_Kalender_A5_2027.pdf")
        );
        assert_eq!(
            config.secondary_path(),
            PathBuf::from("output/Mein_Kalender_A4_2027.pdf")
        );
    }
}
