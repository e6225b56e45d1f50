use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use masklist_core::{update, AppState, FetchStatus, Msg};
use masklist_logging::mask_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::{ui, LoopEvent};

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(loop_tx.clone());
    spawn_input_reader(loop_tx.clone());

    let mut stdout = io::stdout().lock();
    let mut state = AppState::new();
    let mut input_closed = false;
    print_lines(&mut stdout, &ui::render::render(&state.view()))?;

    loop_tx.send(LoopEvent::Core(Msg::SessionStarted))?;
    drop(loop_tx);

    // Every state mutation happens here, one message at a time.
    while let Ok(event) = loop_rx.recv() {
        let msg = match event {
            LoopEvent::Core(msg) => msg,
            LoopEvent::InputClosed => {
                input_closed = true;
                Msg::NoOp
            }
        };

        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            print_lines(&mut stdout, &ui::render::render(&state.view()))?;
        }
        if session_finished(&state, input_closed) {
            break;
        }
    }

    mask_info!("Session ended");
    Ok(())
}

/// Done once nothing can change the view any more.
fn session_finished(state: &AppState, input_closed: bool) -> bool {
    match state.fetch_state().status() {
        FetchStatus::Loading => false,
        FetchStatus::Failed | FetchStatus::Empty => true,
        FetchStatus::Ready => {
            input_closed
                && state
                    .search()
                    .is_some_and(|search| search.committed_query() == search.query())
        }
    }
}

/// Each line on stdin is the full text of the search box.
fn spawn_input_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(LoopEvent::Core(Msg::QueryChanged(line))).is_err() {
                return;
            }
        }
        let _ = tx.send(LoopEvent::InputClosed);
    });
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
