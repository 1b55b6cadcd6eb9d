use serde::{Deserialize, Serialize};

use super::enums::{AgeGroup, InvalidEnum};

/// Dropdown label meaning "no restriction".
pub const ALL: &str = "all";

/// The active dropdown filter. `None` on either axis means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub gender: Option<String>,
    pub age_group: Option<AgeGroup>,
}

impl Selection {
    /// The initial and post-reset state: everything selected.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.gender.is_none() && self.age_group.is_none()
    }

    /// Builds a selection from raw dropdown labels (`"all"` or a value).
    ///
    /// Gender labels are lower-cased to match normalized records.
    pub fn from_labels(gender: &str, age_group: &str) -> Result<Self, InvalidEnum> {
        let gender = gender.trim();
        let gender = if gender.is_empty() || gender.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(gender.to_lowercase())
        };

        let age_group = age_group.trim();
        let age_group = if age_group.is_empty() || age_group.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(age_group.parse::<AgeGroup>()?)
        };

        Ok(Self { gender, age_group })
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_lowercase());
        self
    }

    pub fn with_age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = Some(age_group);
        self
    }
}
