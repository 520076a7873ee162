// 🖥️ Console - line-oriented prompts over any reader/writer pair
//
// Every interactive operation takes a Console so tests can script input
// with a Cursor and inspect what was printed.

use crate::error::{BankError, BankResult};
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Stdout, StdinLock, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Success,
    Error,
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    /// Colors are enabled only when stdout is a terminal.
    pub fn stdio() -> Self {
        let styled = io::stdout().is_terminal();
        Console::new(io::stdin().lock(), io::stdout()).with_style(styled)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console {
            reader,
            writer,
            styled: false,
        }
    }

    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print `text` (no newline) and read one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", text).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input line")?;

        if read == 0 {
            // Keep the transcript readable when input runs out mid-prompt
            writeln!(self.writer).context("Failed to write newline")?;
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt until the line parses as a finite number.
    ///
    /// Malformed input is reported and the same prompt is repeated.
    /// Returns `None` at end of input.
    pub fn prompt_number(&mut self, text: &str) -> Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };

            match parse_number(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(input = %line, "rejected numeric input");
                    self.error(format!("Error: {}", err))?;
                }
            }
        }
    }

    pub fn say(&mut self, msg: impl Display) -> Result<()> {
        self.emit(msg, Tone::Plain)
    }

    pub fn success(&mut self, msg: impl Display) -> Result<()> {
        self.emit(msg, Tone::Success)
    }

    pub fn error(&mut self, msg: impl Display) -> Result<()> {
        self.emit(msg, Tone::Error)
    }

    fn emit(&mut self, msg: impl Display, tone: Tone) -> Result<()> {
        let text = self.paint(msg.to_string(), tone);
        writeln!(self.writer, "{}", text).context("Failed to write output")
    }

    #[cfg(feature = "tui")]
    fn paint(&self, text: String, tone: Tone) -> String {
        use crossterm::style::Stylize;

        if !self.styled {
            return text;
        }
        match tone {
            Tone::Plain => text,
            Tone::Success => text.green().to_string(),
            Tone::Error => text.red().to_string(),
        }
    }

    #[cfg(not(feature = "tui"))]
    fn paint(&self, text: String, _tone: Tone) -> String {
        text
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Parse a user-entered number, ignoring surrounding whitespace.
///
/// NaN and infinities are rejected even though `f64::from_str` accepts them.
pub fn parse_number(input: &str) -> BankResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(BankError::InvalidAmount(trimmed.to_string())),
    }
}

// ============================================================================
// TESTS
// ============================================================================
