//! Masklist engine: feed acquisition, decoding and debounce scheduling.
mod debounce;
mod decode;
mod engine;
mod fetch;
mod types;

pub use debounce::{DebounceMode, DebounceSettings, Debouncer, SEARCH_DEBOUNCE};
pub use decode::{decode_feed, DecodeError, RecordLocator};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FeedSettings, Fetcher, ReqwestFetcher, DEFAULT_FEED_URL};
pub use types::{EngineEvent, FailureKind, FeedError};
