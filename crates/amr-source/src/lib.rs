//! amr-source
//!
//! The boundary to the survey/lab backend: a blocking HTTP/JSON client, the
//! endpoint catalogue, a generation guard that drops responses superseded
//! by a newer filter change, and the dashboard session tying them to the
//! analytics pipeline.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod session;

use amr_core::models::filter::DashboardFilter;
use amr_core::models::record::RawRecord;

use error::SourceError;

/// Anything that can supply lab records for a dashboard filter.
pub trait RecordSource {
    /// Fetch the antibiogram rows matching `filter`.
    fn fetch_antibiogram(&self, filter: &DashboardFilter) -> Result<Vec<RawRecord>, SourceError>;
}
