use std::sync::{mpsc, Arc};
use std::thread;

use masklist_logging::{mask_debug, mask_warn};

use crate::debounce::{DebounceSettings, Debouncer};
use crate::fetch::{FeedSettings, Fetcher, ReqwestFetcher};
use crate::EngineEvent;

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchFeed,
    ScheduleFilter(String),
}

/// Runs feed acquisition and the search debouncer on a background tokio runtime.
///
/// Dropping the handle stops the engine thread and cancels any pending filter window.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: FeedSettings,
        debounce: DebounceSettings,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), debounce, sink)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        debounce: DebounceSettings,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Idle until the core offers search, which only happens after a non-empty feed.
            let filter_sink = Arc::clone(&sink);
            let mut debouncer =
                Debouncer::new(runtime.handle().clone(), debounce, move |query: String| {
                    filter_sink.emit(EngineEvent::FilterDue(query));
                });
            let mut fetch_issued = false;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchFeed => {
                        if fetch_issued {
                            mask_warn!("Feed already requested this session, ignoring");
                            continue;
                        }
                        fetch_issued = true;
                        let fetcher = Arc::clone(&fetcher);
                        let sink = Arc::clone(&sink);
                        runtime.spawn(async move {
                            let result = fetcher.fetch().await;
                            sink.emit(EngineEvent::FeedSettled(result));
                        });
                    }
                    EngineCommand::ScheduleFilter(query) => {
                        mask_debug!("Scheduling filter for {:?}", query);
                        debouncer.schedule(query);
                    }
                }
            }
            debouncer.cancel_pending();
        });

        Self { cmd_tx }
    }

    /// Issue the session's single feed request. Later calls are ignored.
    pub fn fetch_feed(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchFeed);
    }

    /// Restart the filter window with the full current query text.
    pub fn schedule_filter(&self, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleFilter(query.into()));
    }
}
