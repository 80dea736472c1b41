//! User input handling.
//!
//! Questions are answered through an [`InputSource`]: either the real
//! terminal, or a scripted queue of events replayed in order.

use crate::error::{Error, Result};
use console::{style, Key, Term};
use dialoguer::Input;
use std::collections::VecDeque;

/// One discrete piece of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A full line of text (without the trailing newline)
    Line(String),
    Up,
    Down,
    Confirm,
}

impl InputEvent {
    pub fn line<S: Into<String>>(s: S) -> Self {
        InputEvent::Line(s.into())
    }
}

/// Source of answers for the prompt engine.
pub trait InputSource {
    /// Reads the answer to a free text question.
    fn read_line(&mut self, prompt: &str, default: &str) -> Result<InputEvent>;

    /// Reads one navigation event for a choice list whose cursor is at `cursor`.
    fn read_key(&mut self, prompt: &str, choices: &[String], cursor: usize) -> Result<InputEvent>;
}

/// Interactive terminal input.
pub struct TerminalInput {
    term: Term,
    drawn: usize,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self { term: Term::stderr(), drawn: 0 }
    }

    fn draw(&mut self, prompt: &str, choices: &[String], cursor: usize) -> Result<()> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
        }
        self.term.write_line(&format!("{} {}", style("?").green(), style(prompt).bold()))?;
        for (index, choice) in choices.iter().enumerate() {
            if index == cursor {
                self.term.write_line(&format!("{} {}", style(">").cyan(), style(choice).cyan()))?;
            } else {
                self.term.write_line(&format!("  {choice}"))?;
            }
        }
        self.drawn = choices.len() + 1;
        Ok(())
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str, default: &str) -> Result<InputEvent> {
        self.drawn = 0;
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(InputEvent::Line(input))
    }

    fn read_key(&mut self, prompt: &str, choices: &[String], cursor: usize) -> Result<InputEvent> {
        self.draw(prompt, choices, cursor)?;
        loop {
            match self.term.read_key()? {
                Key::ArrowUp | Key::Char('k') => return Ok(InputEvent::Up),
                Key::ArrowDown | Key::Char('j') | Key::Tab => return Ok(InputEvent::Down),
                Key::Enter => {
                    self.drawn = 0;
                    return Ok(InputEvent::Confirm);
                }
                _ => continue,
            }
        }
    }
}

/// Replays a fixed sequence of events, ignoring what is being asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        Self { events: events.into_iter().collect() }
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    fn next(&mut self) -> Result<InputEvent> {
        self.events.pop_front().ok_or(Error::InputExhausted)
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str, _default: &str) -> Result<InputEvent> {
        self.next()
    }

    fn read_key(&mut self, _prompt: &str, _choices: &[String], _cursor: usize) -> Result<InputEvent> {
        self.next()
    }
}
