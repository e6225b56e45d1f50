//! Terminal front end: owns the message loop and stands in for the renderer.
mod app;
mod effects;
mod logging;
mod ui;

use masklist_core::Msg;

pub use app::run_app;

/// Everything the message loop reacts to.
#[derive(Debug)]
pub(crate) enum LoopEvent {
    Core(Msg),
    /// Stdin reached end of file.
    InputClosed,
}
