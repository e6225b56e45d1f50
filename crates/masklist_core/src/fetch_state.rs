use std::sync::Arc;

use crate::PharmacyRecord;

/// Reason shown for every transport or decode failure. The cause is logged, never surfaced.
pub const FEED_FAILURE_REASON: &str = "Something went wrong while loading the pharmacy feed.";

/// Lifecycle of the single feed request.
///
/// Starts as `Loading` and settles exactly once into `Failed` or `Succeeded`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Failed {
        reason: String,
    },
    Succeeded {
        records: Arc<[PharmacyRecord]>,
    },
}

/// What the renderer needs to pick a message. `Empty` and `Failed` never share a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Failed,
    Empty,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("fetch state already settled as {current:?}")]
pub struct AlreadySettled {
    pub current: FetchStatus,
}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Failed { .. } => FetchStatus::Failed,
            FetchState::Succeeded { records } if records.is_empty() => FetchStatus::Empty,
            FetchState::Succeeded { .. } => FetchStatus::Ready,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            FetchState::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn records(&self) -> Option<&Arc<[PharmacyRecord]>> {
        match self {
            FetchState::Succeeded { records } => Some(records),
            _ => None,
        }
    }

    /// `Loading -> Succeeded`. Any other starting state is left untouched.
    pub fn succeed(&mut self, records: Vec<PharmacyRecord>) -> Result<(), AlreadySettled> {
        self.ensure_loading()?;
        *self = FetchState::Succeeded {
            records: records.into(),
        };
        Ok(())
    }

    /// `Loading -> Failed`. Any other starting state is left untouched.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), AlreadySettled> {
        self.ensure_loading()?;
        *self = FetchState::Failed {
            reason: reason.into(),
        };
        Ok(())
    }

    fn ensure_loading(&self) -> Result<(), AlreadySettled> {
        if self.is_settled() {
            return Err(AlreadySettled {
                current: self.status(),
            });
        }
        Ok(())
    }
}
