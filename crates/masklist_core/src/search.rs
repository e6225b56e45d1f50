use std::sync::Arc;

use crate::{matching_indices, PharmacyRecord};

/// Records, the raw query being typed, and the last published view.
///
/// The raw query follows every keystroke; the view only changes on
/// [`SearchSession::commit`], which is driven by the debouncer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    records: Arc<[PharmacyRecord]>,
    query: String,
    committed_query: String,
    visible: Vec<usize>,
}

impl SearchSession {
    /// Starts with the empty query, so the full list is published immediately.
    pub fn new(records: Arc<[PharmacyRecord]>) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            records,
            query: String::new(),
            committed_query: String::new(),
            visible,
        }
    }

    pub fn records(&self) -> &[PharmacyRecord] {
        &self.records
    }

    /// Text currently in the search box.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query the published view was computed from.
    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    /// Replaces the raw query. Returns `false` when the text did not change.
    pub fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        true
    }

    /// Recomputes the view for `query` if it is still the current query.
    ///
    /// A stale query is dropped and the previous view stays published.
    pub fn commit(&mut self, query: &str) -> bool {
        if query != self.query {
            return false;
        }
        self.visible = matching_indices(&self.records, query);
        self.committed_query = query.to_owned();
        true
    }

    pub fn visible(&self) -> impl Iterator<Item = &PharmacyRecord> + '_ {
        self.visible.iter().map(|&idx| &self.records[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }
}
