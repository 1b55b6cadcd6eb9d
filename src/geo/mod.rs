//! Geo-bucketing: facility grouping, per-facility summaries and the
//! coordinate policies that pin each facility to the map.

mod facility;
mod layout;
mod regions;

pub use facility::*;
pub use layout::*;
pub use regions::*;
