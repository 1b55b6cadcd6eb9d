//! `caredash` command line: load a dataset, apply a selection or facility
//! drill-down, and print the dashboard payload as JSON.
//!
//! Usage:
//!   caredash <dataset.csv> [--gender <g>] [--age-group <a>] [--facility <name>]
//!            [--config <file.json>] [--pretty]

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, DashboardConfig};
use crate::dashboard::{ActiveView, ChartRecorder, Dashboard, FilterOptions, MapRecorder};
use crate::ingest::{load_patients, IngestError};
use crate::models::{InvalidEnum, Selection, ALL};

#[derive(Parser, Debug)]
#[command(name = "caredash")]
#[command(version)]
#[command(about = "Compute patient dashboard aggregates from an admissions CSV", long_about = None)]
pub struct Cli {
    /// Admissions dataset (CSV with a header row)
    pub dataset: PathBuf,

    /// Gender filter, or "all"
    #[arg(short, long, default_value = ALL)]
    pub gender: String,

    /// Age group filter (0-18, 19-40, 41-65, 65+, Unknown), or "all"
    #[arg(short, long, default_value = ALL)]
    pub age_group: String,

    /// Drill down to one facility within the gender/age filters
    #[arg(long)]
    pub facility: Option<String>,

    /// Dashboard config file (defaults to ~/CareDash/dashboard.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Bad selection: {0}")]
    Selection(#[from] InvalidEnum),

    #[error("Cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Output<'a> {
    view: &'a ActiveView,
    options: FilterOptions,
    charts: &'a ChartRecorder,
    map: &'a MapRecorder,
}

/// Runs one dashboard session and returns the rendered payload as JSON.
pub fn execute(cli: &Cli) -> Result<String, AppError> {
    let config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    let selection = Selection::from_labels(&cli.gender, &cli.age_group)?;
    let records = load_patients(&cli.dataset)?;

    let mut charts = ChartRecorder::default();
    let mut map = MapRecorder::default();
    let mut dashboard = Dashboard::new(records, config, &mut charts, &mut map);

    dashboard.refresh(selection);
    if let Some(facility) = &cli.facility {
        dashboard.facility_clicked(facility);
    }

    let view = dashboard.session().active_view().clone();
    let options = dashboard.session().filter_options();
    drop(dashboard);

    let output = Output {
        view: &view,
        options,
        charts: &charts,
        map: &map,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const DATASET: &str = "\
Age,Gender,Medical Condition,Date of Admission,Hospital,Billing Amount,Discharge Date,Test Results
30,Female,Asthma,2024-01-01,North,100,2024-01-03,Normal
70,Male,Diabetes,2024-02-01,South,200,2024-02-05,Abnormal
35,Male,Asthma,2024-03-01,\"North,\",300,2024-03-02,Inconclusive
";

    /// Dataset and config side by side in a temp dir, so no test reads
    /// the user's ~/CareDash/dashboard.json.
    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("admissions.csv"), DATASET).unwrap();
            std::fs::write(
                dir.path().join("dashboard.json"),
                r#"{"billing_bins": 4, "layout": {"policy": "grid"}}"#,
            )
            .unwrap();
            Self { dir }
        }

        fn dataset(&self) -> PathBuf {
            self.dir.path().join("admissions.csv")
        }

        fn cli(&self, dataset: &Path, args: &[&str]) -> Cli {
            let config = self.dir.path().join("dashboard.json");
            let mut argv = vec![
                "caredash".to_string(),
                dataset.display().to_string(),
                "--config".to_string(),
                config.display().to_string(),
            ];
            argv.extend(args.iter().map(|a| a.to_string()));
            Cli::parse_from(argv)
        }

        fn run(&self, args: &[&str]) -> serde_json::Value {
            let out = execute(&self.cli(&self.dataset(), args)).unwrap();
            serde_json::from_str(&out).unwrap()
        }
    }

    #[test]
    fn defaults_select_everything() {
        let fx = Fixture::new();
        let json = fx.run(&[]);
        assert_eq!(json["view"]["kind"], "selection");
        assert_eq!(json["charts"]["summary"]["patients"], 3);
        assert_eq!(json["map"]["markers"].as_array().unwrap().len(), 2);
        assert_eq!(json["options"]["genders"][0], "female");
        assert_eq!(json["charts"]["billing_area"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn explicit_config_drives_layout() {
        let fx = Fixture::new();
        let json = fx.run(&[]);
        let origin = crate::geo::GridLayout::default().coords(0);
        assert_eq!(json["map"]["markers"][0]["position"]["lon"], origin.lon);
        assert_eq!(json["map"]["markers"][0]["position"]["lat"], origin.lat);
    }

    #[test]
    fn gender_filter_applies() {
        let fx = Fixture::new();
        let json = fx.run(&["--gender", "Male", "--pretty"]);
        assert_eq!(json["charts"]["summary"]["patients"], 2);
        assert_eq!(json["view"]["value"]["gender"], "male");
    }

    #[test]
    fn facility_drill_down() {
        let fx = Fixture::new();
        let json = fx.run(&["--gender", "female", "--facility", "North"]);
        assert_eq!(json["view"]["kind"], "facility");
        // Only the female North patient; the male North row stays filtered out.
        assert_eq!(json["charts"]["summary"]["patients"], 1);
        assert_eq!(json["map"]["markers"][0]["count"], 1);
    }

    #[test]
    fn bad_age_group_is_rejected() {
        let fx = Fixture::new();
        let err = execute(&fx.cli(&fx.dataset(), &["--age-group", "ancient"])).unwrap_err();
        assert!(matches!(err, AppError::Selection(_)));
    }

    #[test]
    fn missing_dataset_is_reported() {
        let fx = Fixture::new();
        let absent = fx.dir.path().join("absent.csv");
        let err = execute(&fx.cli(&absent, &[])).unwrap_err();
        assert!(matches!(err, AppError::Ingest(_)));
    }
}
