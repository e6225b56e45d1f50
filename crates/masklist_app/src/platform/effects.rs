use std::sync::{mpsc, Arc};

use masklist_core::{Effect, Msg};
use masklist_engine::{DebounceSettings, EngineEvent, EngineHandle, EventSink, FeedSettings};
use masklist_logging::{mask_info, mask_warn};

use super::LoopEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(loop_tx: mpsc::Sender<LoopEvent>) -> Self {
        let sink = Arc::new(LoopSink { tx: loop_tx });
        let engine = EngineHandle::new(FeedSettings::default(), DebounceSettings::default(), sink);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchFeed => {
                    mask_info!("FetchFeed");
                    self.engine.fetch_feed();
                }
                Effect::ScheduleFilter { query } => {
                    self.engine.schedule_filter(query);
                }
            }
        }
    }
}

/// Feeds engine events back into the message loop.
struct LoopSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl EventSink for LoopSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(LoopEvent::Core(map_event(event)));
    }
}

/// Collapses every feed failure into `Msg::FeedFailed`; the detail only reaches the log.
fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FeedSettled(Ok(records)) => Msg::FeedLoaded(records),
        EngineEvent::FeedSettled(Err(err)) => {
            mask_warn!("Feed request failed: {}", err);
            Msg::FeedFailed
        }
        EngineEvent::FilterDue(query) => Msg::FilterDue(query),
    }
}
