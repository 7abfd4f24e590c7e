//! Prompters - how the menu talks to a human
//!
//! `TerminalPrompter` uses dialoguer widgets on a TTY; `LinePrompter` reads
//! plain lines, which keeps the menu scriptable through a pipe.

use std::io::{BufRead, Write};

use anyhow::Result;
use dialoguer::{Input, Select};

use enroll::presentation::output;

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
}

impl MenuChoice {
    /// Parse "1" through "4"
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Show),
            "3" => Some(MenuChoice::Save),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => MenuChoice::Register,
            1 => MenuChoice::Show,
            2 => MenuChoice::Save,
            _ => MenuChoice::Exit,
        }
    }
}

pub trait Prompter {
    /// Ask for a menu selection. End of input means `Exit`.
    fn choose(&mut self) -> Result<MenuChoice>;

    /// Ask for one line of text. `None` when input has ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Show text to the user
    fn say(&mut self, text: &str) -> Result<()>;
}

/// Line-oriented prompter over any reader/writer pair
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn choose(&mut self) -> Result<MenuChoice> {
        loop {
            write!(self.output, "{}", output::render_menu())?;
            write!(self.output, "Enter your menu choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(MenuChoice::Exit);
            };
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => write!(
                    self.output,
                    "{}",
                    output::render_error(output::INVALID_CHOICE, None)
                )?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn say(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Interactive prompter for a real terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn choose(&mut self) -> Result<MenuChoice> {
        println!();
        let selection = Select::new()
            .with_prompt(output::MENU_TITLE)
            .items(&output::MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        Ok(selection.map_or(MenuChoice::Exit, MenuChoice::from_index))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        print!("{}", text);
        Ok(())
    }
}
