//! Input/output collaborators for the console game.
//!
//! The controller only talks to a [`Console`]: it asks for lines of text
//! and hands over [`GameEvent`]s to display. [`StdConsole`] drives a real
//! terminal (or any reader/writer pair); [`ScriptedConsole`] replays
//! canned input and records everything it was shown.

use super::orchestrator::GameEvent;
use super::ui;
use derive_more::{Display, Error, From};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Errors raised by a console.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O error: {}", _0)]
    Io(io::Error),

    /// Input ended while a move was still required.
    #[display("Input closed before the game finished")]
    #[from(skip)]
    InputClosed,
}

/// Source of player input and sink for display events.
pub trait Console {
    /// Shows `prompt` and reads one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;

    /// Displays a game event.
    fn emit(&mut self, event: &GameEvent) -> Result<(), ConsoleError>;
}

/// Console over a buffered reader and a writer.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        // Bytes that are not UTF-8 become U+FFFD and fail validation downstream.
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        debug!(%line, "Line read");
        Ok(Some(line))
    }

    fn emit(&mut self, event: &GameEvent) -> Result<(), ConsoleError> {
        if let Some(text) = ui::render_event(event) {
            writeln!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }
}

/// In-memory console fed from a fixed script of input lines.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    events: Vec<GameEvent>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Events emitted so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn emit(&mut self, event: &GameEvent) -> Result<(), ConsoleError> {
        self.events.push(event.clone());
        Ok(())
    }
}
