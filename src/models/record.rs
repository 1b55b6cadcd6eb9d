use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::AgeGroup;

/// One imported row: column header → cell text. Consumed by the normalizer, never retained.
pub type RawRecord = HashMap<String, String>;

/// Placeholder for categorical fields missing from the source row.
pub const UNKNOWN: &str = "unknown";

/// A typed, analysis-ready patient admission.
///
/// `gender`, `test_result` and `age_group` are always populated. Numeric and
/// date fields are `None` when the source cell was absent or unparsable, and
/// every aggregation treats `None` as "excluded", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: Option<f64>,
    pub billing_amount: Option<f64>,
    pub admission_date: Option<NaiveDateTime>,
    pub discharge_date: Option<NaiveDateTime>,
    /// Days from admission to discharge. Negative when discharge precedes admission.
    pub length_of_stay: Option<f64>,
    pub gender: String,
    pub test_result: String,
    pub age_group: AgeGroup,
    pub medical_condition: String,
    pub hospital: String,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: None,
            billing_amount: None,
            admission_date: None,
            discharge_date: None,
            length_of_stay: None,
            gender: UNKNOWN.into(),
            test_result: UNKNOWN.into(),
            age_group: AgeGroup::Unknown,
            medical_condition: String::new(),
            hospital: String::new(),
        }
    }
}
