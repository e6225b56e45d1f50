//! Masklist core: pure state machine, record model and address filtering.
mod effect;
mod fetch_state;
mod filter;
mod msg;
mod record;
mod search;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use fetch_state::{AlreadySettled, FetchState, FetchStatus, FEED_FAILURE_REASON};
pub use filter::matching_indices;
pub use msg::Msg;
pub use record::{Location, PharmacyRecord, RecordId};
pub use search::SearchSession;
pub use state::AppState;
pub use update::update;
pub use view_model::AppViewModel;
