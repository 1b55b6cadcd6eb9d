//! Rendering boundary: the capability interfaces the orchestrator pushes
//! display-ready aggregates into. Implementors own all drawing concerns.

use crate::aggregate::{CategoryCount, CrossTab, GroupedCounts, HistogramBin};
use crate::geo::FacilityMarker;
use crate::models::AgeGroup;

use super::views::DashboardSummary;

/// Chart update entry points, one per chart.
pub trait ChartSink {
    /// Donut: patients per test result.
    fn update_test_result_donut(&mut self, counts: &[CategoryCount<String>]);

    /// Heatmap: medical condition × test result.
    fn update_condition_heatmap(&mut self, matrix: &CrossTab<String, String>);

    /// Area chart: billing amount distribution.
    fn update_billing_area(&mut self, bins: &[HistogramBin]);

    /// Grouped bars: age group × gender.
    fn update_age_gender_bars(&mut self, groups: &[GroupedCounts<AgeGroup, String>]);

    /// KPI header. Optional for sinks that have no header.
    fn update_summary(&mut self, _summary: &DashboardSummary) {}
}

/// Map update entry point.
pub trait MapSink {
    fn update_facility_map(&mut self, markers: &[FacilityMarker]);
}

impl<T: ChartSink + ?Sized> ChartSink for &mut T {
    fn update_test_result_donut(&mut self, counts: &[CategoryCount<String>]) {
        (**self).update_test_result_donut(counts)
    }

    fn update_condition_heatmap(&mut self, matrix: &CrossTab<String, String>) {
        (**self).update_condition_heatmap(matrix)
    }

    fn update_billing_area(&mut self, bins: &[HistogramBin]) {
        (**self).update_billing_area(bins)
    }

    fn update_age_gender_bars(&mut self, groups: &[GroupedCounts<AgeGroup, String>]) {
        (**self).update_age_gender_bars(groups)
    }

    fn update_summary(&mut self, summary: &DashboardSummary) {
        (**self).update_summary(summary)
    }
}

impl<T: MapSink + ?Sized> MapSink for &mut T {
    fn update_facility_map(&mut self, markers: &[FacilityMarker]) {
        (**self).update_facility_map(markers)
    }
}
