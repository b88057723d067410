//! Console - line-based prompts and narration over any reader/writer

use std::fmt;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Result of asking for a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInput {
    Value(i64),
    /// The line did not parse; it has been discarded
    Malformed(String),
    /// Input is exhausted
    Closed,
}

/// Narration output and prompt input for the game
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            line: String::new(),
        }
    }

    /// Write one message followed by a newline
    pub fn say(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Print `question` and read one line. `None` once input is exhausted.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_string()))
    }

    /// Yes only when the answer starts with `y` or `Y`
    pub fn prompt_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(question)?;
        Ok(matches!(
            answer.as_deref().and_then(|a| a.chars().next()),
            Some('y' | 'Y')
        ))
    }

    /// Read an integer; anything else on the line makes it malformed
    pub fn prompt_number(&mut self, question: &str) -> io::Result<NumberInput> {
        Ok(match self.prompt(question)? {
            None => NumberInput::Closed,
            Some(answer) => match answer.parse::<i64>() {
                Ok(value) => NumberInput::Value(value),
                Err(_) => NumberInput::Malformed(answer),
            },
        })
    }

    /// Flush and wait, for pacing. Zero durations return at once.
    pub fn pause(&mut self, duration: Duration) -> io::Result<()> {
        if duration.is_zero() {
            return Ok(());
        }
        self.output.flush()?;
        thread::sleep(duration);
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
