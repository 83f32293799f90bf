/*
[INPUT]:  Task submitter, crossterm key events, submission results
[OUTPUT]: Ratatui-based full-screen task form
[POS]:    TUI module for the tugas-form binary
[UPDATE]: When changing TUI layout, keybindings, or the run loop
*/

mod app;
mod events;
mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use tugas_adapter::TugasError;
use tugas_form::{PendingSubmission, TaskForm, TaskSubmitter};
use uuid::Uuid;

use app::AppState;
use events::{KeyOutcome, handle_key_event};
use terminal::TerminalGuard;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
    Submitted {
        submission_id: Uuid,
        result: Result<(), TugasError>,
    },
    TaskAdded,
}

pub async fn run_tui<S>(submitter: Arc<S>) -> Result<()>
where
    S: TaskSubmitter + 'static,
{
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || {
        pump_input(
            &input_shutdown_clone,
            &input_tx,
            crossterm::event::poll,
            crossterm::event::read,
        );
    });

    let added_tx = event_tx.clone();
    let form = TaskForm::new(move || {
        let _ = added_tx.send(UiEvent::TaskAdded);
    });
    let mut app = AppState::new(form);
    info!("task form opened");

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        tokio::select! {
            _ = tick.tick() => app.on_tick(),
            maybe_event = event_rx.recv() => match maybe_event {
                None => should_quit = true,
                Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(&mut app, key) {
                        KeyOutcome::Continue => {}
                        KeyOutcome::Quit => should_quit = true,
                        KeyOutcome::Submit(pending) => {
                            spawn_submission(submitter.clone(), pending, event_tx.clone());
                        }
                    }
                }
                Some(UiEvent::Input(_)) => {}
                Some(UiEvent::Submitted { submission_id, result }) => {
                    app.apply_result(submission_id, result);
                }
                Some(UiEvent::TaskAdded) => app.record_task_added(),
            },
        }
    }

    input_shutdown.cancel();
    info!(tasks_added = app.tasks_added, "task form closed");
    Ok(())
}

/// Forward terminal input until shutdown or until the UI loop is gone.
///
/// A failing poll backs off for one poll interval before trying again.
fn pump_input<P, R>(
    shutdown: &CancellationToken,
    tx: &mpsc::UnboundedSender<UiEvent>,
    mut poll: P,
    mut read: R,
) where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<CrosstermEvent>,
{
    while !shutdown.is_cancelled() {
        match poll(INPUT_POLL_INTERVAL) {
            Ok(true) => match read() {
                Ok(event) => {
                    if tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
                Err(err) => debug!(error = %err, "failed to read terminal event"),
            },
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "terminal input poll failed");
                std::thread::sleep(INPUT_POLL_INTERVAL);
            }
        }
    }
}

/// Send the request off the UI loop; the result comes back as an event.
fn spawn_submission<S>(
    submitter: Arc<S>,
    pending: PendingSubmission,
    event_tx: mpsc::UnboundedSender<UiEvent>,
) where
    S: TaskSubmitter + 'static,
{
    tokio::spawn(async move {
        let result = submitter.create_task(&pending.request).await;
        let event = UiEvent::Submitted {
            submission_id: pending.id,
            result,
        };
        if event_tx.send(event).is_err() {
            debug!(submission_id = %pending.id, "submission finished after the form closed");
        }
    });
}
