use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a dropdown label or config value does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Age bucket derived from a patient's numeric age. Boundaries are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-18")]
    Child,
    #[serde(rename = "19-40")]
    YoungAdult,
    #[serde(rename = "41-65")]
    MiddleAged,
    #[serde(rename = "65+")]
    Senior,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl AgeGroup {
    /// The four numeric buckets in display order. `Unknown` is not part of the domain.
    pub const BUCKETS: [AgeGroup; 4] = [
        AgeGroup::Child,
        AgeGroup::YoungAdult,
        AgeGroup::MiddleAged,
        AgeGroup::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "0-18",
            Self::YoungAdult => "19-40",
            Self::MiddleAged => "41-65",
            Self::Senior => "65+",
            Self::Unknown => "Unknown",
        }
    }

    /// Buckets an optional age. `None` (unparsable) maps to `Unknown`.
    pub fn from_age(age: Option<f64>) -> Self {
        match age {
            None => Self::Unknown,
            Some(a) if a <= 18.0 => Self::Child,
            Some(a) if a <= 40.0 => Self::YoungAdult,
            Some(a) if a <= 65.0 => Self::MiddleAged,
            Some(_) => Self::Senior,
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = InvalidEnum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-18" => Ok(Self::Child),
            "19-40" => Ok(Self::YoungAdult),
            "41-65" => Ok(Self::MiddleAged),
            "65+" => Ok(Self::Senior),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(InvalidEnum {
                field: "AgeGroup".into(),
                value: s.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn age_group_round_trip() {
        for (variant, s) in [
            (AgeGroup::Child, "0-18"),
            (AgeGroup::YoungAdult, "19-40"),
            (AgeGroup::MiddleAged, "41-65"),
            (AgeGroup::Senior, "65+"),
            (AgeGroup::Unknown, "Unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AgeGroup::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn age_group_rejects_unknown_label() {
        let err = AgeGroup::from_str("teen").unwrap_err();
        assert_eq!(err.field, "AgeGroup");
        assert_eq!(err.value, "teen");
    }

    #[test]
    fn boundaries_are_inclusive() {
        let ages = [18.0, 19.0, 40.0, 41.0, 65.0, 66.0];
        let groups: Vec<AgeGroup> = ages.iter().map(|&a| AgeGroup::from_age(Some(a))).collect();
        assert_eq!(
            groups,
            vec![
                AgeGroup::Child,
                AgeGroup::YoungAdult,
                AgeGroup::YoungAdult,
                AgeGroup::MiddleAged,
                AgeGroup::MiddleAged,
                AgeGroup::Senior,
            ]
        );
    }

    #[test]
    fn missing_age_is_unknown() {
        assert_eq!(AgeGroup::from_age(None), AgeGroup::Unknown);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&AgeGroup::Senior).unwrap();
        assert_eq!(json, "\"65+\"");
        let back: AgeGroup = serde_json::from_str("\"0-18\"").unwrap();
        assert_eq!(back, AgeGroup::Child);
    }
}
