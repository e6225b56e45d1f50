use std::sync::Arc;

use masklist_logging::{mask_info, mask_warn};

use crate::view_model::AppViewModel;
use crate::{FetchState, FetchStatus, PharmacyRecord, SearchSession, FEED_FAILURE_REASON};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    fetch: FetchState,
    fetch_requested: bool,
    search: Option<SearchSession>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// `None` until the feed settles with at least one record, and forever after a failure.
    pub fn search(&self) -> Option<&SearchSession> {
        self.search.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let status = self.fetch.status();
        let (query, rows) = match &self.search {
            Some(search) => (
                Some(search.query().to_owned()),
                search.visible().cloned().collect(),
            ),
            None => (None, Vec::new()),
        };
        AppViewModel {
            status,
            failure_reason: self.fetch.failure_reason().map(ToOwned::to_owned),
            total_records: self.fetch.records().map_or(0, |records| records.len()),
            query,
            rows,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Marks the single feed request as issued. Returns `false` if it already was.
    pub(crate) fn request_fetch(&mut self) -> bool {
        if self.fetch_requested || self.fetch.is_settled() {
            return false;
        }
        self.fetch_requested = true;
        true
    }

    pub(crate) fn apply_feed_loaded(&mut self, records: Vec<PharmacyRecord>) {
        let count = records.len();
        if let Err(err) = self.fetch.succeed(records) {
            mask_warn!("Ignoring feed result: {}", err);
            return;
        }
        mask_info!("Feed loaded with {} records", count);
        if self.fetch.status() == FetchStatus::Ready {
            if let Some(records) = self.fetch.records() {
                self.search = Some(SearchSession::new(Arc::clone(records)));
            }
        }
        self.dirty = true;
    }

    pub(crate) fn apply_feed_failed(&mut self) {
        if let Err(err) = self.fetch.fail(FEED_FAILURE_REASON) {
            mask_warn!("Ignoring feed failure: {}", err);
            return;
        }
        mask_info!("Feed failed");
        self.dirty = true;
    }

    /// Updates the raw query. Returns `true` when a filter pass should be scheduled.
    pub(crate) fn apply_query(&mut self, query: String) -> bool {
        let Some(search) = self.search.as_mut() else {
            return false;
        };
        if !search.set_query(query) {
            return false;
        }
        self.dirty = true;
        true
    }

    pub(crate) fn apply_filter_due(&mut self, query: &str) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        if search.commit(query) {
            self.dirty = true;
        } else {
            mask_warn!("Dropping stale filter pass for {:?}", query);
        }
    }
}
