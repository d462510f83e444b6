use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// InningsRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single century innings, normalized at load time.
///
/// `score` is the raw score with the trailing not-out marker stripped, so
/// non-negativity is carried by the type. `year` is taken from the source's
/// `Year` value when one parses, otherwise derived from `date`; records whose
/// date does not parse keep `year = None` and are excluded from year grouping
/// and year-based filtering only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InningsRecord {
    /// Match format, e.g. `"Test"`, `"ODI"`, `"T20I"`. Open set, taken from
    /// the data rather than a closed enum.
    pub format: String,
    /// Opposing team.
    pub against: String,
    /// Calendar date of the innings, when the source value parses.
    pub date: Option<NaiveDate>,
    /// Calendar year of the innings.
    pub year: Option<i32>,
    /// Runs scored, not-out marker removed.
    pub score: u32,
}

// ---------------------------------------------------------------------------
// CenturyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct values per dimension.
///
/// The distinct-value lists seed the "everything selected" filter defaults:
/// `formats` and `opponents` keep first-appearance order, `years` is
/// ascending with missing years excluded.
#[derive(Debug, Clone)]
pub struct CenturyDataset {
    /// All innings (rows), in source order.
    pub records: Vec<InningsRecord>,
    /// Distinct formats, first-appearance order.
    pub formats: Vec<String>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct opponents, first-appearance order.
    pub opponents: Vec<String>,
}

impl CenturyDataset {
    /// Build the distinct-value index from the loaded records.
    pub fn from_records(records: Vec<InningsRecord>) -> Self {
        let mut formats: Vec<String> = Vec::new();
        let mut opponents: Vec<String> = Vec::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();

        for rec in &records {
            if !formats.contains(&rec.format) {
                formats.push(rec.format.clone());
            }
            if !opponents.contains(&rec.against) {
                opponents.push(rec.against.clone());
            }
            if let Some(year) = rec.year {
                years.insert(year);
            }
        }

        CenturyDataset {
            records,
            formats,
            years: years.into_iter().collect(),
            opponents,
        }
    }

    /// Number of innings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(format: &str, against: &str, year: Option<i32>, score: u32) -> InningsRecord {
        InningsRecord {
            format: format.to_string(),
            against: against.to_string(),
            date: None,
            year,
            score,
        }
    }

    #[test]
    fn test_from_records_distinct_values() {
        let ds = CenturyDataset::from_records(vec![
            record("ODI", "SL", Some(2017), 122),
            record("Test", "AUS", Some(2014), 169),
            record("ODI", "AUS", Some(2016), 117),
        ]);

        assert_eq!(ds.formats, vec!["ODI", "Test"]);
        assert_eq!(ds.opponents, vec!["SL", "AUS"]);
        assert_eq!(ds.years, vec![2014, 2016, 2017]);
    }

    #[test]
    fn test_from_records_skips_missing_years() {
        let ds = CenturyDataset::from_records(vec![
            record("ODI", "SL", None, 107),
            record("ODI", "SL", Some(2012), 133),
        ]);

        assert_eq!(ds.years, vec![2012]);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = CenturyDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.formats.is_empty());
        assert!(ds.years.is_empty());
        assert!(ds.opponents.is_empty());
    }
}
