use std::collections::BTreeSet;

use super::model::{CenturyDataset, InningsRecord};

// ---------------------------------------------------------------------------
// FilterSelection: which values are selected per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state. An empty set means "nothing selected"
/// (hide everything), never "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub formats: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub opponents: BTreeSet<String>,
}

impl FilterSelection {
    /// Initialise a selection with every distinct value selected
    /// (i.e., show everything).
    pub fn all(dataset: &CenturyDataset) -> Self {
        FilterSelection {
            formats: dataset.formats.iter().cloned().collect(),
            years: dataset.years.iter().copied().collect(),
            opponents: dataset.opponents.iter().cloned().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass the current selection.
///
/// A record passes when, for every dimension:
/// * The dimension's set is non-empty (an empty set hides everything)
/// * The record's value is a member of the set
/// * A record without a year is not subject to year filtering and passes
///   the year dimension
pub fn filtered_indices(dataset: &CenturyDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| passes(rec, selection))
        .map(|(i, _)| i)
        .collect()
}

/// Like [`filtered_indices`], but resolving to the records themselves.
pub fn filtered_records<'a>(
    dataset: &'a CenturyDataset,
    selection: &FilterSelection,
) -> Vec<&'a InningsRecord> {
    filtered_indices(dataset, selection)
        .into_iter()
        .map(|i| &dataset.records[i])
        .collect()
}

fn passes(rec: &InningsRecord, selection: &FilterSelection) -> bool {
    if selection.formats.is_empty()
        || selection.years.is_empty()
        || selection.opponents.is_empty()
    {
        // Nothing selected on some dimension → hide everything
        return false;
    }
    if !selection.formats.contains(&rec.format) {
        return false;
    }
    if !selection.opponents.contains(&rec.against) {
        return false;
    }
    match rec.year {
        Some(year) => selection.years.contains(&year),
        // No year → the year filter does not apply
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
