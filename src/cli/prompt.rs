//! Line-oriented prompting
//!
//! Wraps an input and output stream so the interactive flows can be driven
//! by stdin/stdout in the binary and by in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::{FinlogError, FinlogResult};
use crate::validate;

/// Message shown when a cost does not parse
pub const INVALID_AMOUNT: &str = "Invalid amount. Try again.";

/// Message shown when a date fails the shape check
pub const INVALID_DATE: &str = "Invalid date. Format: YYYY-MM-DD";

/// Prompts on one stream and reads answers from another
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    pub fn say(&mut self, text: &str) -> FinlogResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text without a trailing newline
    pub fn write(&mut self, text: &str) -> FinlogResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one trimmed line
    ///
    /// End of input is an error, so a retry loop cannot spin forever on a
    /// closed stream.
    pub fn ask(&mut self, prompt: &str) -> FinlogResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FinlogError::InputClosed(prompt.trim().to_string()));
        }

        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing `error_message` after
    /// every rejection. There is no retry limit.
    pub fn ask_until<T, F>(&mut self, prompt: &str, error_message: &str, parse: F) -> FinlogResult<T>
    where
        F: Fn(&str) -> FinlogResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => self.say(error_message)?,
            }
        }
    }

    /// Ask for a cost until one parses
    pub fn ask_amount(&mut self, prompt: &str) -> FinlogResult<f64> {
        self.ask_until(prompt, INVALID_AMOUNT, validate::parse_amount)
    }

    /// Ask for a `YYYY-MM-DD` date until one passes the shape check
    pub fn ask_date(&mut self, prompt: &str) -> FinlogResult<String> {
        self.ask_until(prompt, INVALID_DATE, validate::parse_date)
    }
}
