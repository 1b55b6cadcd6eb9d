//! Filter engine: narrows the full record set to what every view renders.

use crate::models::{PatientRecord, Selection};
use crate::normalize::normalize_facility;

/// True when the record satisfies both axes of the selection.
pub fn matches(record: &PatientRecord, selection: &Selection) -> bool {
    let gender_ok = selection
        .gender
        .as_deref()
        .map_or(true, |g| record.gender == g);
    let age_ok = selection
        .age_group
        .map_or(true, |a| record.age_group == a);
    gender_ok && age_ok
}

/// Applies a selection, preserving input order. An empty result is valid.
pub fn filter_records(records: &[PatientRecord], selection: &Selection) -> Vec<PatientRecord> {
    if selection.is_all() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches(r, selection))
        .cloned()
        .collect()
}

/// Keeps only the records admitted to `facility`, compared by normalized name.
/// A blank facility matches nothing.
pub fn filter_by_facility(records: &[PatientRecord], facility: &str) -> Vec<PatientRecord> {
    let key = normalize_facility(facility);
    if key.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| normalize_facility(&r.hospital) == key)
        .cloned()
        .collect()
}
