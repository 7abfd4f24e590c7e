//! `enroll add` - one-shot registration

use anyhow::{Context, Result};

use enroll::presentation::{open_session, output};
use enroll::Config;

pub fn cmd_add(config: &Config, first_name: &str, last_name: &str, course_name: &str) -> Result<()> {
    let (mut session, notice) = open_session(config);
    super::report_load_notice(notice.as_ref());

    let record = session
        .register(first_name, last_name, course_name)
        .context("One of the values was an incorrect type of data!")?;
    let registered = output::render_registered(record);

    session
        .save()
        .with_context(|| format!("could not save to {}", session.path().display()))?;

    print!("{}", registered.trim_start());
    print!("{}", output::render_saved(session.path()));
    Ok(())
}
