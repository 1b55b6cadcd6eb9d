//! Dashboard session state.
//!
//! Owns the full record set for the session lifetime and the filtered set
//! derived from it. The filtered set is always replaced wholesale, never
//! patched. Passed explicitly to the orchestrator instead of living in
//! ambient globals.

use serde::Serialize;

use crate::filter::{filter_by_facility, filter_records};
use crate::models::{PatientRecord, Selection};
use crate::normalize::normalize_facility;

use super::views::FilterOptions;

/// What the filtered set currently reflects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ActiveView {
    /// Dropdown selection.
    Selection(Selection),
    /// One-shot facility drill-down from a map click. Not persisted: the
    /// next selection change replaces it.
    Facility(String),
}

pub struct DashboardSession {
    records: Vec<PatientRecord>,
    selection: Selection,
    view: ActiveView,
    filtered: Vec<PatientRecord>,
}

impl DashboardSession {
    /// Starts with everything selected.
    pub fn new(records: Vec<PatientRecord>) -> Self {
        let filtered = records.clone();
        Self {
            records,
            selection: Selection::all(),
            view: ActiveView::Selection(Selection::all()),
            filtered,
        }
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[PatientRecord] {
        &self.filtered
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_view(&self) -> &ActiveView {
        &self.view
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }

    /// The view a selection change would produce, without applying it.
    pub fn view_for_selection(selection: &Selection) -> ActiveView {
        ActiveView::Selection(selection.clone())
    }

    /// The view a facility click would produce, without applying it.
    pub fn view_for_facility(facility: &str) -> ActiveView {
        ActiveView::Facility(normalize_facility(facility))
    }

    /// Stores the selection and recomputes the filtered set from it.
    pub fn apply_selection(&mut self, selection: Selection) {
        self.filtered = filter_records(&self.records, &selection);
        self.view = Self::view_for_selection(&selection);
        self.selection = selection;
    }

    /// Narrows the selection's records to one facility, so the row count
    /// matches the count on the clicked marker. The stored selection is
    /// left untouched.
    pub fn focus_facility(&mut self, facility: &str) {
        let selected = filter_records(&self.records, &self.selection);
        self.filtered = filter_by_facility(&selected, facility);
        self.view = Self::view_for_facility(facility);
    }

    pub fn reset(&mut self) {
        self.apply_selection(Selection::all());
    }
}
