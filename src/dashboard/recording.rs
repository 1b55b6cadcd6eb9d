//! Sinks that keep the last payload of every entry point. Used by the CLI
//! to emit JSON and by tests to observe what the orchestrator pushed.

use serde::Serialize;

use crate::aggregate::{CategoryCount, CrossTab, GroupedCounts, HistogramBin};
use crate::geo::FacilityMarker;
use crate::models::AgeGroup;

use super::sink::{ChartSink, MapSink};
use super::views::DashboardSummary;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartRecorder {
    /// Completed chart refreshes; bumped by the donut, which every refresh updates.
    #[serde(skip)]
    pub renders: usize,
    pub summary: Option<DashboardSummary>,
    pub test_result_donut: Vec<CategoryCount<String>>,
    pub condition_heatmap: Option<CrossTab<String, String>>,
    pub billing_area: Vec<HistogramBin>,
    pub age_gender_bars: Vec<GroupedCounts<AgeGroup, String>>,
}

impl ChartSink for ChartRecorder {
    fn update_test_result_donut(&mut self, counts: &[CategoryCount<String>]) {
        self.renders += 1;
        self.test_result_donut = counts.to_vec();
    }

    fn update_condition_heatmap(&mut self, matrix: &CrossTab<String, String>) {
        self.condition_heatmap = Some(matrix.clone());
    }

    fn update_billing_area(&mut self, bins: &[HistogramBin]) {
        self.billing_area = bins.to_vec();
    }

    fn update_age_gender_bars(&mut self, groups: &[GroupedCounts<AgeGroup, String>]) {
        self.age_gender_bars = groups.to_vec();
    }

    fn update_summary(&mut self, summary: &DashboardSummary) {
        self.summary = Some(summary.clone());
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MapRecorder {
    #[serde(skip)]
    pub renders: usize,
    pub markers: Vec<FacilityMarker>,
}

impl MapSink for MapRecorder {
    fn update_facility_map(&mut self, markers: &[FacilityMarker]) {
        self.renders += 1;
        self.markers = markers.to_vec();
    }
}
