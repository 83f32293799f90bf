/*
[INPUT]:  Crossterm key events
[OUTPUT]: Form edits, focus changes, and submit/quit requests
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tugas_form::PendingSubmission;

use super::app::AppState;

/// What the run loop should do after a key press
#[derive(Debug, PartialEq, Eq)]
pub(super) enum KeyOutcome {
    Continue,
    Quit,
    /// Send this request; the form is already marked as loading
    Submit(PendingSubmission),
}

pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
        KeyCode::F(2) => {
            app.form.toggle_collapse();
            return KeyOutcome::Continue;
        }
        _ => {}
    }

    // Hidden fields take no input
    if app.form.is_collapsed() {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => app.form.pop_char(app.focused),
        KeyCode::Enter => {
            if let Some(pending) = app.form.begin_submit() {
                app.status_message = "Submitting...".to_string();
                return KeyOutcome::Submit(pending);
            }
        }
        KeyCode::Char(ch) if !ctrl => app.form.push_char(app.focused, ch),
        _ => {}
    }
    KeyOutcome::Continue
}
