use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::LayoutPolicy;

/// Application-level constants
pub const APP_NAME: &str = "CareDash";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const CONFIG_FILE_NAME: &str = "dashboard.json";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "caredash=info,caredash_lib=info"
}

/// Get the application data directory
/// ~/CareDash/ on all platforms. `None` when the home directory is unknown.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// Location of the optional dashboard config file.
pub fn default_config_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Chart and map settings. Every field has a default, so a partial JSON
/// file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Bin count for the billing-amount area chart.
    pub billing_bins: usize,
    /// Bin count for the length-of-stay distribution in the summary header.
    pub stay_bins: usize,
    pub layout: LayoutPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            billing_bins: 12,
            stay_bins: 10,
            layout: LayoutPolicy::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "Loaded dashboard config");
        Ok(config)
    }

    /// Explicit path if given, else `~/CareDash/dashboard.json` when present,
    /// else built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No dashboard config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.billing_bins == 0 {
            return Err(invalid("billing_bins", "must be at least 1"));
        }
        if self.stay_bins == 0 {
            return Err(invalid("stay_bins", "must be at least 1"));
        }
        match &self.layout {
            LayoutPolicy::Grid(grid) => {
                if grid.columns == 0 {
                    return Err(invalid("layout.columns", "must be at least 1"));
                }
            }
            LayoutPolicy::WeightedRegions(sampling) => {
                if !(0.0..0.5).contains(&sampling.inset_fraction) {
                    return Err(invalid(
                        "layout.inset_fraction",
                        format!("{} is outside [0, 0.5)", sampling.inset_fraction),
                    ));
                }
                if sampling.regions.is_empty() {
                    return Err(invalid("layout.regions", "region table is empty"));
                }
                if let Some(bad) = sampling
                    .regions
                    .iter()
                    .find(|r| !r.weight.is_finite() || r.weight < 0.0)
                {
                    return Err(invalid(
                        "layout.regions.weight",
                        format!("{} has weight {}", bad.region, bad.weight),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{GridLayout, Region, RegionSampling};

    #[test]
    fn app_data_dir_under_home() {
        if let (Some(dir), Some(home)) = (app_data_dir(), dirs::home_dir()) {
            assert!(dir.starts_with(home));
            assert!(dir.ends_with("CareDash"));
        }
    }

    #[test]
    fn config_path_under_app_data() {
        if let (Some(path), Some(app)) = (default_config_path(), app_data_dir()) {
            assert!(path.starts_with(app));
            assert!(path.ends_with("dashboard.json"));
        }
    }

    #[test]
    fn app_name_is_caredash() {
        assert_eq!(APP_NAME, "CareDash");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.6.0");
    }

    #[test]
    fn defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.billing_bins, 12);
        assert!(matches!(config.layout, LayoutPolicy::WeightedRegions(_)));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = DashboardConfig::from_json(r#"{"billing_bins": 8}"#).unwrap();
        assert_eq!(config.billing_bins, 8);
        assert_eq!(config.stay_bins, 10);
        assert_eq!(config.layout, LayoutPolicy::default());
    }

    #[test]
    fn grid_policy_from_json() {
        let config =
            DashboardConfig::from_json(r#"{"layout": {"policy": "grid", "columns": 5}}"#).unwrap();
        assert_eq!(
            config.layout,
            LayoutPolicy::Grid(GridLayout { columns: 5, ..Default::default() })
        );
    }

    #[test]
    fn rejects_zero_bins() {
        let err = DashboardConfig::from_json(r#"{"billing_bins": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "billing_bins", .. }));
    }

    #[test]
    fn rejects_bad_inset() {
        let config = DashboardConfig {
            layout: LayoutPolicy::WeightedRegions(RegionSampling {
                inset_fraction: 0.5,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_or_negative_regions() {
        let empty = DashboardConfig {
            layout: LayoutPolicy::WeightedRegions(RegionSampling {
                regions: Vec::new(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let negative = DashboardConfig {
            layout: LayoutPolicy::WeightedRegions(RegionSampling {
                regions: vec![Region {
                    region: "r".into(),
                    lon_range: (0.0, 1.0),
                    lat_range: (0.0, 1.0),
                    weight: -1.0,
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{"stay_bins": 3}"#).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap().stay_bins, 3);
        assert_eq!(
            DashboardConfig::load_or_default(Some(&path)).unwrap().stay_bins,
            3
        );

        let missing = dir.path().join("nope.json");
        let err = DashboardConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
