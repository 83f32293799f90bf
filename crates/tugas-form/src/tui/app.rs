/*
[INPUT]:  TaskForm controller, key-driven focus changes, submission results
[OUTPUT]: AppState consumed by the renderer and key handler
[POS]:    TUI application state
[UPDATE]: When adding UI state beyond the form controller
*/

use tugas_adapter::TugasError;
use uuid::Uuid;
use tugas_form::{SubmitOutcome, TaskField, TaskForm, messages};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub(crate) struct AppState {
    pub(crate) form: TaskForm,
    pub(crate) focused: TaskField,
    pub(crate) status_message: String,
    pub(crate) tasks_added: usize,
    ticks: usize,
}

impl AppState {
    pub(crate) fn new(form: TaskForm) -> Self {
        Self {
            form,
            focused: TaskField::Name,
            status_message: "Ready".to_string(),
            tasks_added: 0,
            ticks: 0,
        }
    }

    pub(crate) fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub(crate) fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub(crate) fn spinner(&self) -> char {
        SPINNER[self.ticks % SPINNER.len()]
    }

    pub(crate) fn apply_result(&mut self, submission_id: Uuid, result: Result<(), TugasError>) {
        match self.form.finish_submit(submission_id, result) {
            SubmitOutcome::Added => self.focused = TaskField::Name,
            SubmitOutcome::Rejected(_) => self.status_message = "Submit failed".to_string(),
            SubmitOutcome::InFlight | SubmitOutcome::Stale => {}
        }
    }

    /// Invoked through the form's task-added notification
    pub(crate) fn record_task_added(&mut self) {
        self.tasks_added += 1;
        self.status_message = format!(
            "{} ({} this session)",
            messages::TASK_ADDED,
            self.tasks_added
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> AppState {
        let mut app = AppState::new(TaskForm::new(|| {}));
        app.form.set_value(TaskField::Name, "UTS SDA");
        app.form.set_value(TaskField::DeadlineDate, "2024-06-01");
        app
    }

    #[test]
    fn test_apply_success_resets_focus() {
        let mut app = filled_state();
        app.focused = TaskField::SubmitLink;
        let pending = app.form.begin_submit().expect("valid draft");

        app.apply_result(pending.id, Ok(()));

        assert_eq!(app.focused, TaskField::Name);
        assert!(app.form.draft().is_empty());
    }

    #[test]
    fn test_apply_failure_keeps_draft() {
        let mut app = filled_state();
        let pending = app.form.begin_submit().expect("valid draft");

        app.apply_result(pending.id, Err(TugasError::Api {
            status: 400,
            message: Some("Duplicate task".to_string()),
        }));

        assert_eq!(app.form.error(), Some("Duplicate task"));
        assert_eq!(app.form.value(TaskField::Name), "UTS SDA");
        assert_eq!(app.status_message, "Submit failed");
    }

    #[test]
    fn test_apply_result_for_other_submission_is_ignored() {
        let mut app = filled_state();
        app.focused = TaskField::SubmitLink;
        assert!(app.form.begin_submit().is_some());

        app.apply_result(Uuid::new_v4(), Ok(()));

        assert!(app.form.is_loading());
        assert_eq!(app.focused, TaskField::SubmitLink);
        assert_eq!(app.form.value(TaskField::Name), "UTS SDA");
    }

    #[test]
    fn test_record_task_added_counts() {
        let mut app = filled_state();
        app.record_task_added();
        app.record_task_added();
        assert_eq!(app.tasks_added, 2);
        assert!(app.status_message.contains("2 this session"));
    }

    #[test]
    fn test_spinner_advances() {
        let mut app = filled_state();
        let first = app.spinner();
        app.on_tick();
        assert_ne!(app.spinner(), first);
    }
}
