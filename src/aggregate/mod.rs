//! Aggregation library: pure reductions from a record set to the exact
//! shapes each chart consumes.
//!
//! Functions are generic over the item type and take key/value closures, so
//! the same code serves the dashboard's fixed chart bindings and ad-hoc
//! groupings. Nothing here fails: empty input produces empty or zero-valued
//! aggregates, and `None` numeric values are excluded rather than treated as 0.

mod counter;
mod counts;
mod crosstab;
mod grouped;
mod histogram;
mod summary;

pub use counter::*;
pub use counts::*;
pub use crosstab::*;
pub use grouped::*;
pub use histogram::*;
pub use summary::*;
