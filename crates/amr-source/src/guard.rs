//! Stale-response guard.
//!
//! Every fetch gets a ticket carrying a generation number and the filter
//! that triggered it. Only a response whose ticket holds the latest
//! generation is accepted; older in-flight responses are dropped so they
//! cannot overwrite newer state.

use std::sync::atomic::{AtomicU64, Ordering};

use amr_core::models::filter::DashboardFilter;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    filter: DashboardFilter,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn filter(&self) -> &DashboardFilter {
        &self.filter
    }
}

#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: AtomicU64,
    stale_discards: AtomicU64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; any ticket issued earlier becomes stale.
    pub fn begin(&self, filter: DashboardFilter) -> RequestTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation, filter }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.latest.load(Ordering::SeqCst)
    }

    /// Pass `response` through if `ticket` is still current; otherwise drop
    /// it and count the discard.
    pub fn accept<T>(&self, ticket: &RequestTicket, response: T) -> Option<T> {
        if self.is_current(ticket) {
            return Some(response);
        }
        let discards = self.stale_discards.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            generation = ticket.generation,
            latest = self.latest.load(Ordering::SeqCst),
            district = %ticket.filter.district,
            discards,
            "discarding stale response"
        );
        None
    }

    pub fn stale_discards(&self) -> u64 {
        self.stale_discards.load(Ordering::SeqCst)
    }
}
