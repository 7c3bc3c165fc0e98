//! Special-dates table and CSV loader.
//!
//! The source is a headerless two-column CSV: a year-independent `MM-DD`
//! key and a colon-delimited list of free-text entries.  A missing or
//! unreadable file is tolerated (empty table); malformed rows are
//! skipped with a warning.

use std::collections::HashMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;
use wp_core::Asset;
use wp_time::Date;

/// Immutable mapping from `MM-DD` keys to colon-joined entry strings.
#[derive(Debug, Clone, Default)]
pub struct SpecialDates {
    entries: HashMap<String, String>,
}

impl SpecialDates {
    /// Create an empty table.
    pub fn new() -> Self {
        SpecialDates::default()
    }

    /// Insert the entries for one `MM-DD` key, replacing any previous
    /// value for that key.
    pub fn insert(&mut self, key: impl Into<String>, entries: impl Into<String>) {
        self.entries.insert(key.into(), entries.into());
    }

    /// Return the raw colon-joined entry string recurring on `date`'s
    /// month and day, if any.
    pub fn lookup(&self, date: Date) -> Option<&str> {
        self.entries.get(&date.month_day_key()).map(String::as_str)
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no special dates are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the table from a CSV file.
    ///
    /// A missing or unreadable file yields [`Asset::Absent`] after a
    /// warning; row-level problems (fewer than two fields, key not of the
    /// form `MM-DD`) skip the row with a warning.
    pub fn load_csv(path: &Path) -> Asset<SpecialDates> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "special-dates file not found, continuing without it");
                return Asset::Absent;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read special-dates file, continuing without it");
                return Asset::Absent;
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut table = SpecialDates::new();
        for (index, record) in reader.records().enumerate() {
            let line = index + 1;
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    warn!(line, error = %e, "skipping unreadable special-dates row");
                    continue;
                }
            };
            if record.len() < 2 {
                warn!(line, "skipping special-dates row with fewer than two fields");
                continue;
            }
            let key = &record[0];
            if !is_month_day_key(key) {
                warn!(line, key, "skipping special-dates row with malformed MM-DD key");
                continue;
            }
            table.insert(key, &record[1]);
        }
        Asset::Loaded(table)
    }
}

/// Check that `key` has the form `MM-DD` with a plausible month and day.
fn is_month_day_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'-' {
        return false;
    }
    let (Ok(month), Ok(day)) = (key[0..2].parse::<u8>(), key[3..5].parse::<u8>()) else {
        return false;
    };
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn load_from(content: &str) -> Asset<SpecialDates> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("special-dates.csv");
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        SpecialDates::load_csv(&path)
    }

    #[test]
    fn loads_rows_and_matches_any_year() {
        let Asset::Loaded(table) = load_from("03-17,Dentist:Pay Rent\n12-06,Nikolo\n") else {
            panic!("expected loaded table");
        };
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(date(2026, 3, 17)), Some("Dentist:Pay Rent"));
        assert_eq!(table.lookup(date(1999, 3, 17)), Some("Dentist:Pay Rent"));
        assert_eq!(table.lookup(date(2026, 12, 6)), Some("Nikolo"));
        assert_eq!(table.lookup(date(2026, 3, 18)), None);
    }

    #[test]
    fn missing_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let asset = SpecialDates::load_csv(&dir.path().join("nope.csv"));
        assert!(matches!(asset, Asset::Absent));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let Asset::Loaded(table) =
            load_from("justonefield\n3-17,short key\n13-01,bad month\n03-17,Dentist\n")
        else {
            panic!("expected loaded table");
        };
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(date(2026, 3, 17)), Some("Dentist"));
    }

    #[test]
    fn entries_keep_surrounding_whitespace() {
        // values are split on ':' later with no trimming
        let Asset::Loaded(table) = load_from("05-04,\"May : the fourth\"\n") else {
            panic!("expected loaded table");
        };
        assert_eq!(table.lookup(date(2026, 5, 4)), Some("May : the fourth"));
    }
}
