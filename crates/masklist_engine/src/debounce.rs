use std::sync::Arc;
use std::time::Duration;

use masklist_logging::mask_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Quiet period after the last keystroke before the list is filtered.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceMode {
    /// Fire once with the last value after a full quiet window.
    #[default]
    Trailing,
    /// Fire with the first value of a burst, swallow the rest until the window closes.
    Leading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceSettings {
    pub delay: Duration,
    pub mode: DebounceMode,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            delay: SEARCH_DEBOUNCE,
            mode: DebounceMode::Trailing,
        }
    }
}

struct Pending {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Coalesces rapid calls into at most one callback per quiet window.
///
/// At most one window is pending at a time: every [`Debouncer::schedule`]
/// cancels the previous window before opening a new one. Timers run on the
/// given tokio runtime; the callback runs on a runtime worker in trailing
/// mode and on the caller's thread in leading mode.
pub struct Debouncer<T> {
    runtime: Handle,
    settings: DebounceSettings,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<Pending>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(
        runtime: Handle,
        settings: DebounceSettings,
        callback: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            runtime,
            settings,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    pub fn settings(&self) -> DebounceSettings {
        self.settings
    }

    /// True while a window opened by `schedule` has neither fired nor been cancelled.
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.cancel.is_cancelled() && !pending.task.is_finished())
    }

    /// Restart the window with `value`.
    pub fn schedule(&mut self, value: T) {
        let window_open = self.has_pending();
        if self.cancel_pending() {
            mask_trace!("Debounce window restarted");
        }

        let cancel = CancellationToken::new();
        let delay = self.settings.delay;
        let task = match self.settings.mode {
            DebounceMode::Trailing => {
                let callback = Arc::clone(&self.callback);
                let token = cancel.clone();
                self.runtime.spawn(async move {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {
                            mask_trace!("Debounce window elapsed, firing");
                            callback(value);
                        }
                    }
                })
            }
            DebounceMode::Leading => {
                if window_open {
                    mask_trace!("Debounce call suppressed inside open window");
                } else {
                    (self.callback)(value);
                }
                let token = cancel.clone();
                self.runtime.spawn(async move {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {}
                    }
                })
            }
        };
        self.pending = Some(Pending { cancel, task });
    }

    /// Drop the pending window, if any. Returns whether one was still open.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                let was_open = !pending.task.is_finished();
                pending.cancel.cancel();
                was_open
            }
            None => false,
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }
    }
}
