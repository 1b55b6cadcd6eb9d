use serde::Serialize;

use crate::aggregate::{
    count_by_category, cross_tabulate, grouped_by_two_keys, histogram_of, summarize,
    CategoryCount, CrossTab, GroupedCounts, HistogramBin,
};
use crate::config::DashboardConfig;
use crate::geo::{group_by_facility, place_facilities, FacilityMarker};
use crate::models::{AgeGroup, PatientRecord};

use super::sink::{ChartSink, MapSink};

/// KPI header over the current record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub patients: usize,
    pub facilities: usize,
    pub mean_billing: Option<f64>,
    pub mean_length_of_stay: Option<f64>,
    pub length_of_stay_bins: Vec<HistogramBin>,
}

/// Every aggregate the dashboard draws, computed from one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub summary: DashboardSummary,
    pub test_result_donut: Vec<CategoryCount<String>>,
    pub condition_heatmap: CrossTab<String, String>,
    pub billing_area: Vec<HistogramBin>,
    pub age_gender_bars: Vec<GroupedCounts<AgeGroup, String>>,
    pub facilities: Vec<FacilityMarker>,
}

impl DashboardViews {
    pub fn compute(records: &[PatientRecord], config: &DashboardConfig) -> Self {
        let groups = group_by_facility(records);
        let mut assigner = config.layout.assigner();
        let facilities = place_facilities(&groups, assigner.as_mut());

        let summary = DashboardSummary {
            patients: records.len(),
            facilities: groups.len(),
            mean_billing: summarize(records, |r| r.billing_amount).mean,
            mean_length_of_stay: summarize(records, |r| r.length_of_stay).mean,
            length_of_stay_bins: histogram_of(records, |r| r.length_of_stay, config.stay_bins),
        };

        Self {
            summary,
            test_result_donut: count_by_category(records, |r| r.test_result.clone()),
            condition_heatmap: cross_tabulate(
                records,
                |r| r.medical_condition.clone(),
                |r| r.test_result.clone(),
            ),
            billing_area: histogram_of(records, |r| r.billing_amount, config.billing_bins),
            age_gender_bars: grouped_by_two_keys(
                records,
                |r| r.age_group,
                &AgeGroup::BUCKETS,
                |r| r.gender.clone(),
            ),
            facilities,
        }
    }

    /// Forwards each aggregate to its entry point.
    pub fn render(&self, charts: &mut dyn ChartSink, map: &mut dyn MapSink) {
        charts.update_summary(&self.summary);
        charts.update_test_result_donut(&self.test_result_donut);
        charts.update_condition_heatmap(&self.condition_heatmap);
        charts.update_billing_area(&self.billing_area);
        charts.update_age_gender_bars(&self.age_gender_bars);
        map.update_facility_map(&self.facilities);
    }
}

/// Dropdown options derived from the full record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub genders: Vec<String>,
    pub age_groups: Vec<AgeGroup>,
}

impl FilterOptions {
    /// Genders in first-seen order; the four age buckets, plus `Unknown`
    /// when some record has no usable age.
    pub fn from_records(records: &[PatientRecord]) -> Self {
        let genders = count_by_category(records, |r| r.gender.clone())
            .into_iter()
            .map(|c| c.key)
            .collect();

        let mut age_groups = AgeGroup::BUCKETS.to_vec();
        if records.iter().any(|r| r.age_group == AgeGroup::Unknown) {
            age_groups.push(AgeGroup::Unknown);
        }

        Self {
            genders,
            age_groups,
        }
    }
}
