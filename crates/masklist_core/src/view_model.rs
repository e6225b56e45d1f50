use crate::{FetchStatus, PharmacyRecord};

/// Everything that crosses into the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub status: FetchStatus,
    pub failure_reason: Option<String>,
    pub total_records: usize,
    /// Raw search text; `None` when no search is offered.
    pub query: Option<String>,
    /// Published filtered view, in feed order.
    pub rows: Vec<PharmacyRecord>,
    pub dirty: bool,
}
