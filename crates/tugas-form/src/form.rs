/*
[INPUT]:  Field edits, collapse toggles, submit requests, submission results
[OUTPUT]: Draft state, UI flags (loading/collapsed/error), task-added notifications
[POS]:    Form controller - validation and the single network call
[UPDATE]: When validation rules or the submit flow change
*/

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::{Instrument, debug, info, info_span, warn};
use tugas_adapter::{CreateTaskRequest, TugasError};
use uuid::Uuid;

use crate::draft::{DraftTask, InputKind, TaskField};
use crate::messages;
use crate::submit::TaskSubmitter;

/// Notification fired once per successfully created task
pub type TaskAddedCallback = Box<dyn FnMut() + Send + 'static>;

/// Errors shown in the form banner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Local check failed; nothing was sent
    #[error("{0}")]
    Validation(&'static str),

    /// Transport failure or server rejection
    #[error("{0}")]
    Submission(String),
}

impl FormError {
    /// Banner text for a failed request.
    ///
    /// Server rejections show the server's `message`, or a generic fallback
    /// when it sent none; every other failure shows its own message.
    pub fn from_submission(err: &TugasError) -> Self {
        let message = match err {
            TugasError::Api { message, .. } => message
                .clone()
                .unwrap_or_else(|| messages::SUBMIT_FAILED.to_string()),
            other => other.to_string(),
        };
        FormError::Submission(message)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the task; fields were cleared
    Added,
    /// Validation or submission failed; banner is set, fields kept
    Rejected(FormError),
    /// A request is already in flight
    InFlight,
    /// A result arrived for a request that is not in flight
    Stale,
}

/// A request handed out by [`TaskForm::begin_submit`], tagged with the id
/// its result must be applied under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: Uuid,
    pub request: CreateTaskRequest,
}

/// Task creation form controller
pub struct TaskForm {
    draft: DraftTask,
    is_loading: bool,
    is_collapsed: bool,
    error: Option<String>,
    in_flight: Option<Uuid>,
    on_task_added: TaskAddedCallback,
}

impl fmt::Debug for TaskForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskForm")
            .field("draft", &self.draft)
            .field("is_loading", &self.is_loading)
            .field("is_collapsed", &self.is_collapsed)
            .field("error", &self.error)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl TaskForm {
    pub fn new(on_task_added: impl FnMut() + Send + 'static) -> Self {
        Self {
            draft: DraftTask::new(),
            is_loading: false,
            is_collapsed: false,
            error: None,
            in_flight: None,
            on_task_added: Box::new(on_task_added),
        }
    }

    pub fn draft(&self) -> &DraftTask {
        &self.draft
    }

    pub fn value(&self, field: TaskField) -> &str {
        self.draft.get(field)
    }

    pub fn set_value(&mut self, field: TaskField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: TaskField, ch: char) {
        self.draft.get_mut(field).push(ch);
    }

    pub fn pop_char(&mut self, field: TaskField) {
        self.draft.get_mut(field).pop();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Current banner text
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toggle_collapse(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    /// Check the draft without touching any state.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = TaskField::ALL
            .iter()
            .filter(|field| field.is_required())
            .any(|field| is_blank(*field, self.draft.get(*field)));
        if missing {
            return Err(FormError::Validation(messages::REQUIRED_FIELDS));
        }

        for field in TaskField::ALL {
            let value = self.draft.get(field);
            if !value.is_empty() && !matches_kind(field.input_kind(), value) {
                return Err(FormError::Validation(invalid_message(field)));
            }
        }
        Ok(())
    }

    /// Start a submit attempt.
    ///
    /// Clears the banner, validates, and marks the form as loading. Returns
    /// the request to send, or `None` when validation failed (banner set) or
    /// a request is already in flight (nothing changed).
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.is_loading {
            debug!("submit ignored, request already in flight");
            return None;
        }
        self.error = None;

        if let Err(err) = self.validate() {
            debug!(error = %err, "draft failed validation");
            self.error = Some(err.to_string());
            return None;
        }

        let submission_id = Uuid::new_v4();
        self.is_loading = true;
        self.in_flight = Some(submission_id);
        info!(%submission_id, name = %self.draft.name, "submitting task");
        Some(PendingSubmission {
            id: submission_id,
            request: self.draft.to_request(),
        })
    }

    /// Apply the result of the request started by [`TaskForm::begin_submit`].
    ///
    /// Results whose id is not the one in flight change nothing.
    pub fn finish_submit(
        &mut self,
        submission_id: Uuid,
        result: Result<(), TugasError>,
    ) -> SubmitOutcome {
        if self.in_flight != Some(submission_id) {
            warn!(%submission_id, in_flight = ?self.in_flight, "ignoring result for a request not in flight");
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;
        self.is_loading = false;

        match result {
            Ok(()) => {
                info!(%submission_id, "task added");
                self.draft.clear();
                (self.on_task_added)();
                SubmitOutcome::Added
            }
            Err(err) => {
                warn!(%submission_id, error = %err, "task submission failed");
                let form_error = FormError::from_submission(&err);
                self.error = Some(form_error.to_string());
                SubmitOutcome::Rejected(form_error)
            }
        }
    }

    /// Validate, send, and apply the result in one step.
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome
    where
        S: TaskSubmitter + ?Sized,
    {
        if self.is_loading {
            return SubmitOutcome::InFlight;
        }
        let Some(pending) = self.begin_submit() else {
            return match self.validate() {
                Err(err) => SubmitOutcome::Rejected(err),
                Ok(()) => SubmitOutcome::InFlight,
            };
        };

        let span = info_span!("submit_task", submission_id = %pending.id);
        let result = submitter
            .create_task(&pending.request)
            .instrument(span)
            .await;
        self.finish_submit(pending.id, result)
    }
}

/// Required text must hold more than whitespace; other kinds only need a value
fn is_blank(field: TaskField, value: &str) -> bool {
    match field.input_kind() {
        InputKind::Text => value.trim().is_empty(),
        InputKind::Date | InputKind::Time | InputKind::Url => value.is_empty(),
    }
}

fn matches_kind(kind: InputKind, value: &str) -> bool {
    match kind {
        InputKind::Text => true,
        InputKind::Date => is_date(value),
        InputKind::Time => is_time(value),
        InputKind::Url => is_url(value),
    }
}

fn invalid_message(field: TaskField) -> &'static str {
    match field {
        TaskField::Name => messages::REQUIRED_FIELDS,
        TaskField::DeadlineDate => messages::INVALID_DATE,
        TaskField::DeadlineTime => messages::INVALID_TIME,
        TaskField::AttachmentLink => messages::INVALID_ATTACHMENT_LINK,
        TaskField::SubmitLink => messages::INVALID_SUBMIT_LINK,
    }
}

fn is_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_time(value: &str) -> bool {
    value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
