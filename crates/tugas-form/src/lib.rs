/*
[INPUT]:  Public API exports for tugas-form crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod draft;
pub mod form;
pub mod messages;
pub mod submit;

// Re-export main types for convenience
pub use config::AppConfig;
pub use draft::{DraftTask, InputKind, TaskField};
pub use form::{FormError, PendingSubmission, SubmitOutcome, TaskForm};
pub use submit::TaskSubmitter;
