//! Interactive command module
//!
//! The registration menu: register, show, save, exit.

mod menu;
mod prompt;

use std::io;

use anyhow::Result;
use is_terminal::IsTerminal;

use enroll::presentation::{open_session, output};
use enroll::Config;

use menu::run_menu;
use prompt::{LinePrompter, Prompter, TerminalPrompter};

pub fn cmd_interactive(config: &Config) -> Result<()> {
    if io::stdin().is_terminal() {
        run_interactive(config, &mut TerminalPrompter)
    } else {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        run_interactive(config, &mut prompter)
    }
}

/// Load the enrollment file, show what was loaded, then run the menu
pub fn run_interactive<P: Prompter>(config: &Config, prompter: &mut P) -> Result<()> {
    let (mut session, notice) = open_session(config);

    if let Some(notice) = &notice {
        prompter.say(&output::render_load_notice(notice))?;
    }
    prompter.say(&output::render_records(session.records()))?;

    run_menu(&mut session, prompter)
}
