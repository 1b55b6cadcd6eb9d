//! Dashboard: session state, the refresh orchestrator and the rendering
//! boundary it feeds.
//!
//! Data flow per refresh: full records → filter (selection or facility
//! click) → `DashboardViews::compute` → `ChartSink` / `MapSink`.

mod orchestrator;
mod recording;
mod session;
mod sink;
mod views;

pub use orchestrator::*;
pub use recording::*;
pub use session::*;
pub use sink::*;
pub use views::*;
