//! View refresh orchestrator.
//!
//! Reacts to UI events (selection changed, reset, facility clicked) by
//! recomputing the filtered set and pushing every aggregate to the sinks.
//! Single-threaded and synchronous: each call finishes rendering before it
//! returns.

use crate::config::DashboardConfig;
use crate::models::{PatientRecord, Selection};

use super::session::{ActiveView, DashboardSession};
use super::sink::{ChartSink, MapSink};
use super::views::DashboardViews;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Sinks were updated from `rows` filtered records.
    Rendered { rows: usize },
    /// The requested view is already on screen; nothing was pushed.
    Unchanged,
}

pub struct Dashboard<C: ChartSink, M: MapSink> {
    session: DashboardSession,
    config: DashboardConfig,
    charts: C,
    map: M,
    rendered: Option<ActiveView>,
}

impl<C: ChartSink, M: MapSink> Dashboard<C, M> {
    /// Takes ownership of the loaded record set. Nothing is rendered until
    /// the first refresh.
    pub fn new(records: Vec<PatientRecord>, config: DashboardConfig, charts: C, map: M) -> Self {
        tracing::info!(records = records.len(), "Dashboard session created");
        Self {
            session: DashboardSession::new(records),
            config,
            charts,
            map,
            rendered: None,
        }
    }

    pub fn session(&self) -> &DashboardSession {
        &self.session
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn into_sinks(self) -> (C, M) {
        (self.charts, self.map)
    }

    /// Applies `selection` and renders unconditionally.
    pub fn refresh(&mut self, selection: Selection) -> RefreshOutcome {
        self.session.apply_selection(selection);
        self.render()
    }

    /// Dropdown change. A no-op when the same view is already rendered;
    /// otherwise discards any facility drill-down.
    pub fn selection_changed(&mut self, selection: Selection) -> RefreshOutcome {
        if self.is_rendered(&DashboardSession::view_for_selection(&selection)) {
            tracing::debug!("Selection unchanged, skipping refresh");
            return RefreshOutcome::Unchanged;
        }
        self.refresh(selection)
    }

    /// Back to everything selected. Firing twice renders once.
    pub fn reset(&mut self) -> RefreshOutcome {
        self.selection_changed(Selection::all())
    }

    /// Map click: render only `facility`'s records within the current selection.
    pub fn facility_clicked(&mut self, facility: &str) -> RefreshOutcome {
        if self.is_rendered(&DashboardSession::view_for_facility(facility)) {
            tracing::debug!(facility, "Facility already focused, skipping refresh");
            return RefreshOutcome::Unchanged;
        }
        self.session.focus_facility(facility);
        self.render()
    }

    fn is_rendered(&self, view: &ActiveView) -> bool {
        self.rendered.as_ref() == Some(view)
    }

    fn render(&mut self) -> RefreshOutcome {
        let _span = tracing::info_span!("dashboard_refresh").entered();

        let filtered = self.session.filtered();
        let views = DashboardViews::compute(filtered, &self.config);
        views.render(&mut self.charts, &mut self.map);

        let rows = filtered.len();
        tracing::info!(
            rows,
            facilities = views.facilities.len(),
            view = ?self.session.active_view(),
            "Dashboard refreshed"
        );

        self.rendered = Some(self.session.active_view().clone());
        RefreshOutcome::Rendered { rows }
    }
}
