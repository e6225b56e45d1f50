use std::sync::{Arc, Mutex};
use std::time::Duration;

use masklist_engine::{DebounceMode, DebounceSettings, Debouncer, SEARCH_DEBOUNCE};
use pretty_assertions::assert_eq;
use tokio::runtime::Handle;
use tokio::time::{sleep, Instant};

const D: Duration = SEARCH_DEBOUNCE;

/// Collects `(elapsed since start, value)` for every callback invocation.
#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<(Duration, String)>>>,
}

impl Recorder {
    fn debouncer(&self, start: Instant, mode: DebounceMode) -> Debouncer<String> {
        let calls = Arc::clone(&self.calls);
        Debouncer::new(
            Handle::current(),
            DebounceSettings { delay: D, mode },
            move |value: String| {
                calls.lock().unwrap().push((start.elapsed(), value));
            },
        )
    }

    fn values(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, v)| v.clone()).collect()
    }

    fn times(&self) -> Vec<Duration> {
        self.calls.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(masklist_logging::initialize_for_tests);
}

#[test]
fn default_settings_are_trailing_800ms() {
    let settings = DebounceSettings::default();
    assert_eq!(settings.delay, Duration::from_millis(800));
    assert_eq!(settings.mode, DebounceMode::Trailing);
}

#[tokio::test(start_paused = true)]
async fn trailing_burst_fires_once_with_last_value() {
    init_logging();
    let start = Instant::now();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(start, DebounceMode::Trailing);

    debouncer.schedule("a".to_string());
    sleep(D / 10).await;
    debouncer.schedule("ab".to_string());
    sleep(D / 10).await;
    debouncer.schedule("abc".to_string());
    assert!(debouncer.has_pending());

    sleep(D * 4).await;

    assert_eq!(recorder.values(), vec!["abc".to_string()]);
    let fired_at = recorder.times()[0];
    assert!(fired_at >= D * 12 / 10, "fired too early at {fired_at:?}");
    assert!(!debouncer.has_pending());
}

#[tokio::test(start_paused = true)]
async fn trailing_does_not_fire_before_quiet_window() {
    init_logging();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(Instant::now(), DebounceMode::Trailing);

    debouncer.schedule("a".to_string());
    sleep(D - Duration::from_millis(1)).await;
    assert!(recorder.values().is_empty());

    sleep(Duration::from_millis(5)).await;
    assert_eq!(recorder.values(), vec!["a".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn trailing_long_burst_never_publishes_intermediates() {
    init_logging();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(Instant::now(), DebounceMode::Trailing);

    let mut query = String::new();
    for ch in "台北市大安區基隆路".chars() {
        query.push(ch);
        debouncer.schedule(query.clone());
        sleep(D / 2).await;
    }
    sleep(D * 2).await;

    assert_eq!(recorder.values(), vec!["台北市大安區基隆路".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn trailing_calls_spaced_beyond_window_fire_independently() {
    init_logging();
    let start = Instant::now();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(start, DebounceMode::Trailing);

    debouncer.schedule("a".to_string());
    sleep(D + D / 4).await;
    debouncer.schedule("b".to_string());
    sleep(D + D / 4).await;

    assert_eq!(recorder.values(), vec!["a".to_string(), "b".to_string()]);
    let times = recorder.times();
    assert!(times[0] >= D);
    assert!(times[1] >= D + D / 4 + D);
}

#[tokio::test(start_paused = true)]
async fn leading_fires_first_value_and_suppresses_burst() {
    init_logging();
    let start = Instant::now();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(start, DebounceMode::Leading);

    debouncer.schedule("a".to_string());
    assert_eq!(recorder.values(), vec!["a".to_string()]);

    sleep(D / 10).await;
    debouncer.schedule("ab".to_string());
    sleep(D / 10).await;
    debouncer.schedule("abc".to_string());
    sleep(D * 2).await;
    assert_eq!(recorder.values(), vec!["a".to_string()]);

    // Window closed; the next call starts a new burst.
    debouncer.schedule("abcd".to_string());
    assert_eq!(recorder.values(), vec!["a".to_string(), "abcd".to_string()]);
    assert_eq!(recorder.times()[0], Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn cancel_pending_drops_the_window() {
    init_logging();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(Instant::now(), DebounceMode::Trailing);

    debouncer.schedule("a".to_string());
    assert!(debouncer.cancel_pending());
    assert!(!debouncer.has_pending());
    assert!(!debouncer.cancel_pending());

    sleep(D * 2).await;
    assert!(recorder.values().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_debouncer_cancels_pending_window() {
    init_logging();
    let recorder = Recorder::default();
    let mut debouncer = recorder.debouncer(Instant::now(), DebounceMode::Trailing);

    debouncer.schedule("a".to_string());
    drop(debouncer);

    sleep(D * 2).await;
    assert!(recorder.values().is_empty());
}
