//! Record normalization: raw dataset rows into typed `PatientRecord`s.
//!
//! Every function here is total. An absent or unparsable cell degrades to its
//! documented default (`None`, `"unknown"`, `AgeGroup::Unknown`) instead of
//! failing the row.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{AgeGroup, PatientRecord, RawRecord, UNKNOWN};

/// Source column headers of the admissions dataset.
pub mod columns {
    pub const AGE: &str = "Age";
    pub const GENDER: &str = "Gender";
    pub const MEDICAL_CONDITION: &str = "Medical Condition";
    pub const ADMISSION_DATE: &str = "Date of Admission";
    pub const HOSPITAL: &str = "Hospital";
    pub const BILLING_AMOUNT: &str = "Billing Amount";
    pub const DISCHARGE_DATE: &str = "Discharge Date";
    pub const TEST_RESULTS: &str = "Test Results";
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts one raw row into a `PatientRecord`.
pub fn normalize(raw: &RawRecord) -> PatientRecord {
    let age = field(raw, columns::AGE).and_then(parse_number);
    let billing_amount = field(raw, columns::BILLING_AMOUNT).and_then(parse_number);
    let admission_date = field(raw, columns::ADMISSION_DATE).and_then(parse_date);
    let discharge_date = field(raw, columns::DISCHARGE_DATE).and_then(parse_date);

    let length_of_stay = match (admission_date, discharge_date) {
        (Some(admitted), Some(discharged)) => Some(days_between(admitted, discharged)),
        _ => None,
    };

    PatientRecord {
        age,
        billing_amount,
        admission_date,
        discharge_date,
        length_of_stay,
        gender: categorical(raw, columns::GENDER),
        test_result: categorical(raw, columns::TEST_RESULTS),
        age_group: AgeGroup::from_age(age),
        medical_condition: raw
            .get(columns::MEDICAL_CONDITION)
            .cloned()
            .unwrap_or_default(),
        hospital: raw
            .get(columns::HOSPITAL)
            .map(|h| normalize_facility(h))
            .unwrap_or_default(),
    }
}

pub fn normalize_all<'a>(raws: impl IntoIterator<Item = &'a RawRecord>) -> Vec<PatientRecord> {
    raws.into_iter().map(normalize).collect()
}

/// Trims whitespace and a single trailing comma from a facility name.
///
/// `"City Hospital, "` and `"City Hospital"` normalize to the same key.
pub fn normalize_facility(name: &str) -> String {
    let trimmed = name.trim();
    trimmed
        .strip_suffix(',')
        .unwrap_or(trimmed)
        .trim_end()
        .to_string()
}

fn field<'a>(raw: &'a RawRecord, column: &str) -> Option<&'a str> {
    raw.get(column)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn categorical(raw: &RawRecord, column: &str) -> String {
    field(raw, column)
        .map(str::to_lowercase)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts ISO dates, ISO date-times, RFC 3339 and US `m/d/Y` dates.
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

fn days_between(admitted: NaiveDateTime, discharged: NaiveDateTime) -> f64 {
    (discharged - admitted).num_seconds() as f64 / SECONDS_PER_DAY
}
