use crate::data::aggregate::{DashboardTables, Summary};
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::{CenturyDataset, InningsRecord};

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// The filterable dimensions of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Format,
    Year,
    Opponent,
}

/// The full dashboard state, independent of rendering.
///
/// The dataset is immutable once set; every selection change recomputes the
/// visible view in full. Interaction state lives here, never in the data
/// layer.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<CenturyDataset>,

    /// Per-dimension filter selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown by the presentation layer.
    pub status_message: Option<String>,
}

impl DashboardState {
    /// Ingest a newly loaded dataset and initialise the all-selected default.
    pub fn set_dataset(&mut self, dataset: CenturyDataset) {
        self.selection = FilterSelection::all(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.selection);
        }
    }

    /// Resolve the cached indices to records.
    pub fn visible_records(&self) -> Vec<&InningsRecord> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .map(|&i| &ds.records[i])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Headline metrics for the current view.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.visible_records())
    }

    /// The six chart tables for the current view.
    pub fn tables(&self) -> DashboardTables {
        DashboardTables::compute(&self.visible_records())
    }

    // ---- Selection mutators ----

    /// Toggle a single format in the selection.
    pub fn toggle_format(&mut self, format: &str) {
        if !self.selection.formats.remove(format) {
            self.selection.formats.insert(format.to_string());
        }
        self.refilter();
    }

    /// Toggle a single year in the selection.
    pub fn toggle_year(&mut self, year: i32) {
        if !self.selection.years.remove(&year) {
            self.selection.years.insert(year);
        }
        self.refilter();
    }

    /// Toggle a single opponent in the selection.
    pub fn toggle_opponent(&mut self, opponent: &str) {
        if !self.selection.opponents.remove(opponent) {
            self.selection.opponents.insert(opponent.to_string());
        }
        self.refilter();
    }

    /// Select every distinct value of a dimension.
    pub fn select_all(&mut self, dimension: Dimension) {
        if let Some(ds) = &self.dataset {
            match dimension {
                Dimension::Format => {
                    self.selection.formats = ds.formats.iter().cloned().collect();
                }
                Dimension::Year => {
                    self.selection.years = ds.years.iter().copied().collect();
                }
                Dimension::Opponent => {
                    self.selection.opponents = ds.opponents.iter().cloned().collect();
                }
            }
        }
        self.refilter();
    }

    /// Deselect every value of a dimension, emptying the view.
    pub fn select_none(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Format => self.selection.formats.clear(),
            Dimension::Year => self.selection.years.clear(),
            Dimension::Opponent => self.selection.opponents.clear(),
        }
        self.refilter();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
