use masklist_logging::mask_debug;

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            if state.request_fetch() {
                vec![Effect::FetchFeed]
            } else {
                Vec::new()
            }
        }
        Msg::FeedLoaded(records) => {
            state.apply_feed_loaded(records);
            Vec::new()
        }
        Msg::FeedFailed => {
            state.apply_feed_failed();
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            if state.apply_query(query.clone()) {
                mask_debug!("Query changed to {:?}", query);
                vec![Effect::ScheduleFilter { query }]
            } else {
                Vec::new()
            }
        }
        Msg::FilterDue(query) => {
            state.apply_filter_due(&query);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
