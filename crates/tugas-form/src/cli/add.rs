/*
[INPUT]:  Field values from command-line flags
[OUTPUT]: One submitted task, or the banner text as an error
[POS]:    CLI one-shot submission
[UPDATE]: When form fields change
*/

use anyhow::{Result, anyhow};
use clap::Args;
use console::style;

use tugas_form::{SubmitOutcome, TaskField, TaskForm, TaskSubmitter, messages};

#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    /// Task name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Deadline date (YYYY-MM-DD)
    #[arg(long = "date", value_name = "YYYY-MM-DD", default_value = "")]
    pub deadline_date: String,
    /// Deadline time (HH:MM)
    #[arg(long = "time", value_name = "HH:MM", default_value = "")]
    pub deadline_time: String,
    /// Link to the assignment material
    #[arg(long = "attachment", value_name = "URL", default_value = "")]
    pub attachment_link: String,
    /// Link where the work is handed in
    #[arg(long = "submit-link", value_name = "URL", default_value = "")]
    pub submit_link: String,
}

impl AddArgs {
    fn fill(self, form: &mut TaskForm) {
        form.set_value(TaskField::Name, self.name);
        form.set_value(TaskField::DeadlineDate, self.deadline_date);
        form.set_value(TaskField::DeadlineTime, self.deadline_time);
        form.set_value(TaskField::AttachmentLink, self.attachment_link);
        form.set_value(TaskField::SubmitLink, self.submit_link);
    }
}

pub async fn run_add<S>(args: AddArgs, submitter: &S) -> Result<()>
where
    S: TaskSubmitter + ?Sized,
{
    let mut form = TaskForm::new(|| {
        println!("{}", style(messages::TASK_ADDED).bold().green());
    });
    args.fill(&mut form);

    match form.submit(submitter).await {
        SubmitOutcome::Added => Ok(()),
        SubmitOutcome::Rejected(err) => Err(anyhow!(err)),
        other => Err(anyhow!("unexpected submit outcome: {other:?}")),
    }
}
