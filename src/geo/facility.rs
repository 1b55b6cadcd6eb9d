use std::collections::HashMap;

use serde::Serialize;

use crate::aggregate::{dominant_category, summarize};
use crate::models::PatientRecord;
use crate::normalize::normalize_facility;

use super::layout::{CoordinateAssigner, GeoPoint};

/// Records sharing one normalized facility name, in input order.
#[derive(Debug, Clone)]
pub struct FacilityGroup<'a> {
    pub name: String,
    pub records: Vec<&'a PatientRecord>,
}

/// Per-facility statistics shown in a map marker tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilitySummary {
    pub name: String,
    pub count: usize,
    /// Mean of present billing amounts; 0 when the facility has none.
    pub mean_billing: f64,
    pub dominant_test_result: Option<String>,
}

/// A facility summary pinned to a display coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityMarker {
    #[serde(flatten)]
    pub summary: FacilitySummary,
    pub position: GeoPoint,
}

impl FacilityGroup<'_> {
    pub fn summarize(&self) -> FacilitySummary {
        FacilitySummary {
            name: self.name.clone(),
            count: self.records.len(),
            mean_billing: summarize(&self.records, |r| r.billing_amount)
                .mean
                .unwrap_or(0.0),
            dominant_test_result: dominant_category(&self.records, |r| r.test_result.clone()),
        }
    }
}

/// Groups records by normalized facility name in first-seen order.
/// Records whose facility is blank after normalization are dropped.
pub fn group_by_facility(records: &[PatientRecord]) -> Vec<FacilityGroup<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<FacilityGroup<'_>> = Vec::new();

    for record in records {
        let name = normalize_facility(&record.hospital);
        if name.is_empty() {
            continue;
        }
        match index.get(&name) {
            Some(&pos) => groups[pos].records.push(record),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(FacilityGroup {
                    name,
                    records: vec![record],
                });
            }
        }
    }

    groups
}

/// Summarizes each group and asks `assigner` for its coordinate, by group index.
pub fn place_facilities(
    groups: &[FacilityGroup<'_>],
    assigner: &mut dyn CoordinateAssigner,
) -> Vec<FacilityMarker> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| FacilityMarker {
            summary: group.summarize(),
            position: assigner.assign(index),
        })
        .collect()
}
