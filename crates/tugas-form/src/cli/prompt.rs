/*
[INPUT]:  Interactive user input via CLI prompts
[OUTPUT]: Submitted tasks, with retry on failure
[POS]:    CLI guided form flow
[UPDATE]: When form fields or prompt flow change
*/

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use tugas_form::{SubmitOutcome, TaskField, TaskForm, TaskSubmitter, messages};

pub async fn run_prompt<S>(submitter: &S) -> Result<()>
where
    S: TaskSubmitter + ?Sized,
{
    let theme = ColorfulTheme::default();
    println!("{}", style(messages::FORM_TITLE).bold().cyan());

    let added = Arc::new(AtomicUsize::new(0));
    let counter = added.clone();
    let mut form = TaskForm::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    loop {
        for field in TaskField::ALL {
            let value: String = Input::with_theme(&theme)
                .with_prompt(format!("{} ({})", field.label(), field.placeholder()))
                .with_initial_text(form.value(field))
                .allow_empty(true)
                .interact_text()?;
            form.set_value(field, value);
        }

        let next_prompt = match form.submit(submitter).await {
            SubmitOutcome::Added => {
                println!("{}", style(messages::TASK_ADDED).bold().green());
                "Tambah tugas lain?"
            }
            SubmitOutcome::Rejected(err) => {
                println!("{}", style(err).red());
                "Coba lagi?"
            }
            SubmitOutcome::InFlight | SubmitOutcome::Stale => break,
        };

        let again = Confirm::with_theme(&theme)
            .with_prompt(next_prompt)
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    println!(
        "{} {}",
        style("Tugas ditambahkan:").dim(),
        style(added.load(Ordering::SeqCst)).bold()
    );
    Ok(())
}
