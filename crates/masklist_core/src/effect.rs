#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single feed request for this session.
    FetchFeed,
    /// Hand the full query text to the debouncer; it replaces any pending one.
    ScheduleFilter { query: String },
}
