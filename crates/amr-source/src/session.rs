//! One user's lab dashboard: current filter, last accepted view and the
//! trend-chart selection.

use amr_analytics::dashboard::{AntibiogramOptions, AntibiogramView, prepare_antibiogram};
use amr_analytics::selection::{SelectionEvent, SelectionState};
use amr_core::models::filter::DashboardFilter;
use amr_core::models::record::RawRecord;
use amr_core::models::selection::Selection;
use tracing::info;

use crate::RecordSource;
use crate::error::SourceError;
use crate::guard::{RequestGuard, RequestTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was current and the view was rebuilt.
    Applied,
    /// A newer request was started meanwhile; the response was dropped.
    Stale,
}

pub struct DashboardSession<S> {
    source: S,
    guard: RequestGuard,
    options: AntibiogramOptions,
    filter: Option<DashboardFilter>,
    view: Option<AntibiogramView>,
    selection: SelectionState,
}

impl<S: RecordSource> DashboardSession<S> {
    pub fn new(source: S, options: AntibiogramOptions) -> Self {
        let selection = SelectionState::new(options.selection_count);
        Self {
            source,
            guard: RequestGuard::new(),
            options,
            filter: None,
            view: None,
            selection,
        }
    }

    /// Record a filter change and issue the ticket for its fetch.
    pub fn begin(&mut self, filter: DashboardFilter) -> RequestTicket {
        self.filter = Some(filter.clone());
        self.guard.begin(filter)
    }

    /// Hand in the result of the fetch started by `ticket`.
    ///
    /// Stale results, successful or not, are dropped. A current failure is
    /// returned to the caller and leaves the previous view in place. A
    /// current success rebuilds the view and reseeds the selection.
    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Vec<RawRecord>, SourceError>,
    ) -> Result<RefreshOutcome, SourceError> {
        let Some(result) = self.guard.accept(ticket, result) else {
            return Ok(RefreshOutcome::Stale);
        };
        let records = result?;

        let options = AntibiogramOptions {
            view_mode: ticket.filter().view_mode,
            ..self.options.clone()
        };
        let view = prepare_antibiogram(&records, &options);
        self.selection = self
            .selection
            .apply(SelectionEvent::Reseed(view.top.clone()));
        self.view = Some(view);

        info!(
            generation = ticket.generation(),
            district = %ticket.filter().district,
            "dashboard refreshed"
        );
        Ok(RefreshOutcome::Applied)
    }

    /// Fetch and apply in one step.
    pub fn refresh(&mut self, filter: DashboardFilter) -> Result<RefreshOutcome, SourceError> {
        let ticket = self.begin(filter);
        let result = self.source.fetch_antibiogram(ticket.filter());
        self.complete(&ticket, result)
    }

    pub fn toggle(&mut self, category: &str) {
        self.selection = self
            .selection
            .apply(SelectionEvent::Toggle(category.to_string()));
    }

    pub fn view(&self) -> Option<&AntibiogramView> {
        self.view.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn filter(&self) -> Option<&DashboardFilter> {
        self.filter.as_ref()
    }

    pub fn stale_discards(&self) -> u64 {
        self.guard.stale_discards()
    }
}
