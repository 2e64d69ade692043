//! Line-oriented input for the interactive exercises.
//!
//! Every value is read from a whole line and parsed after trimming. The
//! parsers are free functions so positional CLI arguments go through the
//! same checks as typed input.

use std::io::{BufRead, Write};

use crate::error::{DrillError, Result};

/// Parse a finite floating-point number.
pub fn parse_number(raw: &str) -> Result<f64> {
    let text = raw.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DrillError::parse(text, "a number")),
    }
}

pub fn parse_integer(raw: &str) -> Result<i64> {
    let text = raw.trim();
    text.parse::<i64>()
        .map_err(|_| DrillError::parse(text, "an integer"))
}

/// Parse a matrix dimension or sequence size. Negative values are rejected.
pub fn parse_dimension(raw: &str, name: &str) -> Result<usize> {
    let value = parse_integer(raw)?;
    usize::try_from(value).map_err(|_| {
        DrillError::invalid(format!("{} must not be negative, got {}", name, value))
    })
}

/// Writes prompts to `writer` and reads answers, one per line, from `reader`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    show_prompts: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            show_prompts: true,
        }
    }

    pub fn show_prompts(mut self, show: bool) -> Self {
        self.show_prompts = show;
        self
    }

    pub fn prompt(&mut self, text: &str) -> Result<()> {
        if self.show_prompts {
            writeln!(self.writer, "{}", text)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Read one line without its terminator. `what` names the value in the
    /// end-of-input error.
    pub fn read_line(&mut self, what: &str) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DrillError::EndOfInput(what.to_string()));
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn ask_line(&mut self, prompt: &str, what: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.read_line(what)
    }

    pub fn ask_number(&mut self, prompt: &str, what: &str) -> Result<f64> {
        let line = self.ask_line(prompt, what)?;
        parse_number(&line)
    }

    pub fn ask_dimension(&mut self, prompt: &str, name: &str) -> Result<usize> {
        let line = self.ask_line(prompt, name)?;
        parse_dimension(&line, name)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
