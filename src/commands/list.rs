//! `enroll list` - print current registrations

use anyhow::Result;

use enroll::presentation::{open_session, output};
use enroll::Config;

pub fn cmd_list(config: &Config) -> Result<()> {
    let (session, notice) = open_session(config);
    super::report_load_notice(notice.as_ref());

    print!("{}", output::render_listing(session.records()));
    Ok(())
}
