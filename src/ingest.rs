//! CSV ingestion: reads the admissions export into `RawRecord`s and hands
//! each row straight to the normalizer.
//!
//! Rows are never retained in raw form by `read_patients`/`load_patients`.
//! Ragged rows are accepted; a missing cell is simply absent from the row.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{PatientRecord, RawRecord};
use crate::normalize::normalize;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Cannot open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn for_each_row<R: Read>(reader: R, mut f: impl FnMut(RawRecord)) -> Result<usize, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut rows = 0;
    for result in rdr.records() {
        let row = result?;
        let raw: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        f(raw);
        rows += 1;
    }
    Ok(rows)
}

/// Parses CSV text (with a header row) into raw rows.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut out = Vec::new();
    for_each_row(reader, |raw| out.push(raw))?;
    Ok(out)
}

/// Parses and normalizes in one pass.
pub fn read_patients<R: Read>(reader: R) -> Result<Vec<PatientRecord>, IngestError> {
    let mut out = Vec::new();
    for_each_row(reader, |raw| out.push(normalize(&raw)))?;
    Ok(out)
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    read_raw_records(open(path)?)
}

/// Loads and normalizes the dataset at `path`.
pub fn load_patients(path: &Path) -> Result<Vec<PatientRecord>, IngestError> {
    let records = read_patients(open(path)?)?;
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "Dataset loaded"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeGroup;
    use std::io::Write;

    const SAMPLE: &str = "\
Name,Age,Gender,Medical Condition,Date of Admission,Hospital,Billing Amount,Discharge Date,Test Results
Ann,30,Female,Asthma,2024-01-01,City Hospital,,2024-01-03,Normal
Bob,70,Male,Diabetes,2024-02-01,\"City Hospital,\",500.5,2024-02-11,Abnormal
";

    #[test]
    fn reads_headers_and_cells() {
        let rows = read_raw_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Name").map(String::as_str), Some("Ann"));
        assert_eq!(rows[1].get("Hospital").map(String::as_str), Some("City Hospital,"));
        assert_eq!(rows[0].get("Billing Amount").map(String::as_str), Some(""));
    }

    #[test]
    fn reads_patients_normalized() {
        let patients = read_patients(SAMPLE.as_bytes()).unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].gender, "female");
        assert_eq!(patients[0].billing_amount, None);
        assert_eq!(patients[1].age_group, AgeGroup::Senior);
        assert_eq!(patients[1].hospital, "City Hospital");
        assert_eq!(patients[1].length_of_stay, Some(10.0));
    }

    #[test]
    fn short_rows_are_accepted() {
        let csv = "Age,Gender,Hospital\n25,Male\n";
        let rows = read_raw_records(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].contains_key("Hospital"));
        let patients = read_patients(csv.as_bytes()).unwrap();
        assert_eq!(patients[0].hospital, "");
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let csv = " Age , Gender \n50,Female\n";
        let patients = read_patients(csv.as_bytes()).unwrap();
        assert_eq!(patients[0].age, Some(50.0));
        assert_eq!(patients[0].gender, "female");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let raws = load_csv(file.path()).unwrap();
        assert_eq!(raws.len(), 2);
        let patients = load_patients(file.path()).unwrap();
        assert_eq!(patients.len(), 2);
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_patients(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
    }
}
