//! amr-core
//!
//! Pure domain types for the antibiotic stewardship dashboard: raw survey and
//! lab records, aggregated totals, trend series, per-entity indicators and the
//! filter/selection vocabulary shared by every other crate. No HTTP
//! dependency.

pub mod error;
pub mod models;
pub mod period;
