use crate::PharmacyRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Session start; requests the feed exactly once.
    SessionStarted,
    /// Feed decoded successfully. An empty list is a valid outcome.
    FeedLoaded(Vec<PharmacyRecord>),
    /// Transport, status or decode failure. Detail is logged by the engine, not carried here.
    FeedFailed,
    /// User edited the address box. Always the complete current text.
    QueryChanged(String),
    /// The debounce window for `query` elapsed without a newer keystroke.
    FilterDue(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
