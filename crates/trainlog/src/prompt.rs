//! Interactive prompting for values not given on the command line.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::{Error, Result};

/// Asks for values on an input stream, echoing prompts to an output stream.
///
/// Empty answers are rejected and the question is asked again. End of input
/// aborts with [`Error::PromptAborted`].
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the terminal.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Return `value` if present, otherwise ask for it.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the streams fail.
    pub fn text_or(&mut self, value: Option<String>, label: &str) -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => self.text(label),
        }
    }

    /// Return `value` if present, otherwise ask for an integer.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the streams fail.
    pub fn integer_or(&mut self, value: Option<i64>, label: &str) -> Result<i64> {
        match value {
            Some(v) => Ok(v),
            None => self.integer(label),
        }
    }

    /// Ask for a non-empty line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the streams fail.
    pub fn text(&mut self, label: &str) -> Result<String> {
        loop {
            let answer = self.ask(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask for an integer, repeating the question until one is entered.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the streams fail.
    pub fn integer(&mut self, label: &str) -> Result<i64> {
        loop {
            let answer = self.text(label)?;
            match answer.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    writeln!(self.output, "Error: '{answer}' is not a valid integer.")?;
                }
            }
        }
    }

    /// Consume the prompter and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::prompt_aborted(label));
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        trace!("Prompt {label:?} answered with {answer:?}");
        Ok(answer)
    }
}
