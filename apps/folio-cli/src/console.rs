//! # Input Collector
//!
//! Prompts the operator and turns raw lines into typed values.
//!
//! ## Prompt Cycle
//! ```text
//! prompt ──► read line ──► parse ──ok──► typed value to the command
//!                 │           │
//!                 │           └─err──► "Error: ..." ──► prompt again
//!                 │
//!                 └─ end of input ──► CliError::InputClosed
//! ```
//!
//! Free text is returned trimmed and is never rejected here. Emptiness and
//! length are checked by the domain when the command runs. Bytes that are
//! not valid UTF-8 are decoded lossily (U+FFFD) rather than failing the read.

use std::fmt::Display;
use std::io::{BufRead, Write};

use folio_core::Discount;

use crate::error::{CliError, CliResult};

/// Line-oriented console over any reader/writer pair.
///
/// ## Usage
/// ```rust
/// use std::io::Cursor;
/// use folio_cli_lib::console::Console;
///
/// let mut console = Console::new(Cursor::new("abc\n-1\n3\n"), Vec::new());
/// assert_eq!(console.positive_int("Quantity: ").unwrap(), 3);
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> CliResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Shows `label` and returns the next input line without its line ending.
    pub fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CliError::InputClosed);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Free text, trimmed.
    pub fn text(&mut self, label: &str) -> CliResult<String> {
        Ok(self.prompt(label)?.trim().to_string())
    }

    /// A finite number greater than zero.
    pub fn positive_float(&mut self, label: &str) -> CliResult<f64> {
        self.read_valid(label, |raw| match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
            Ok(_) => Err("Must be a positive number.".to_string()),
            Err(_) => Err(format!("'{}' is not a number.", raw)),
        })
    }

    /// A whole number of at least one.
    pub fn positive_int(&mut self, label: &str) -> CliResult<u32> {
        self.read_valid(label, |raw| match raw.parse::<i64>() {
            Ok(value) if value > 0 => {
                u32::try_from(value).map_err(|_| "Number is too large.".to_string())
            }
            Ok(_) => Err("Must be a positive integer.".to_string()),
            Err(_) => Err(format!("'{}' is not a whole number.", raw)),
        })
    }

    /// A whole number of zero or more.
    pub fn non_negative_int(&mut self, label: &str) -> CliResult<u32> {
        self.read_valid(label, |raw| match raw.parse::<i64>() {
            Ok(value) if value >= 0 => {
                u32::try_from(value).map_err(|_| "Number is too large.".to_string())
            }
            Ok(_) => Err("Must be zero or a positive integer.".to_string()),
            Err(_) => Err(format!("'{}' is not a whole number.", raw)),
        })
    }

    /// A discount percentage; an empty line means no discount.
    pub fn discount(&mut self, label: &str) -> CliResult<Discount> {
        self.read_valid(label, |raw| {
            if raw.is_empty() {
                return Ok(Discount::none());
            }
            let pct = raw
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number.", raw))?;
            Discount::from_percent(pct).map_err(|e| e.to_string())
        })
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_valid<T, F>(&mut self, label: &str, parse: F) -> CliResult<T>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let raw = self.prompt(label)?;
            match parse(raw.trim()) {
                Ok(value) => return Ok(value),
                Err(reason) => self.say(format_args!("Error: {}", reason))?,
            }
        }
    }
}
