//! The registration menu loop

use anyhow::Result;

use enroll::presentation::output;
use enroll::{RecordStore, Session};

use super::prompt::{MenuChoice, Prompter};

/// Run menu actions against `session` until the user exits or input ends
pub fn run_menu<S, P>(session: &mut Session<S>, prompter: &mut P) -> Result<()>
where
    S: RecordStore,
    P: Prompter,
{
    loop {
        match prompter.choose()? {
            MenuChoice::Register => {
                if !register(session, prompter)? {
                    break;
                }
            }
            MenuChoice::Show => prompter.say(&output::render_listing(session.records()))?,
            MenuChoice::Save => match session.save() {
                Ok(()) => prompter.say(&output::render_saved(session.path()))?,
                Err(e) => prompter.say(&output::render_save_error(&e))?,
            },
            MenuChoice::Exit => break,
        }
    }

    prompter.say(&format!("{}\n", output::PROGRAM_ENDED))
}

/// Returns false when input ended mid-registration
fn register<S, P>(session: &mut Session<S>, prompter: &mut P) -> Result<bool>
where
    S: RecordStore,
    P: Prompter,
{
    let Some(first_name) = prompter.ask("Enter the student's first name")? else {
        return Ok(false);
    };
    let Some(last_name) = prompter.ask("Enter the student's last name")? else {
        return Ok(false);
    };
    let Some(course_name) = prompter.ask("Please enter the name of the course")? else {
        return Ok(false);
    };

    let message = match session.register(&first_name, &last_name, &course_name) {
        Ok(record) => output::render_registered(record),
        Err(e) => {
            log::debug!("rejected registration: {}", e);
            output::render_error("One of the values was an incorrect type of data!", Some(&e))
        }
    };
    prompter.say(&message)?;
    Ok(true)
}
