//! # Validated Console Input
//!
//! This module is the input-validation helper library the trackers are built on.
//! A [`Console`] wraps any `BufRead` + `Write` pair, so the same code drives a real
//! terminal (`stdin`/`stdout`) and the in-memory buffers used in tests.
//!
//! ## The Validated-Word Loop
//!
//! Every typed answer goes through the same loop:
//!
//! 1. Print the prompt.
//! 2. Read a line, keep only its first word.
//! 3. If the [`Validator`] rejects it, print the error (which doubles as the next prompt) and go to 2.
//!
//! ```rust
//! use record_sample::input::{validate, Console};
//!
//! let mut out = Vec::new();
//! let mut console = Console::new("maybe\nY\n".as_bytes(), &mut out);
//! let answer = console.yes_or_no("Continue? ", "Please enter (y)es or (n)o: ").unwrap();
//! assert!(answer);
//! drop(console);
//! assert_eq!(String::from_utf8(out).unwrap(), "Continue? Please enter (y)es or (n)o: ");
//! ```
//!
//! ## End of Input
//!
//! Running out of input is reported as [`InputError::Closed`] instead of
//! re-prompting forever.

pub mod error;
pub mod validate;

pub use error::*;

use record_list::{caseless, MAX_NAME_CHARS};
use std::io::{BufRead, Write};
use tracing::debug;

/// Affirmative answer to a yes/no prompt.
pub const YES: &str = "y";
/// Negative answer to a yes/no prompt.
pub const NO: &str = "n";
/// Entered at the donation prompt to switch to the report mode.
pub const ADMIN_MODE: &str = "q";

/// Pass/fail check applied to a candidate word.
pub trait Validator {
    fn validate(&self, candidate: &str) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool,
{
    fn validate(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Line-oriented operator console.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Direct access to the output stream, for reports and listings.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Writes `message` followed by a newline.
    pub fn say(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Writes `prompt` without a newline and flushes it.
    pub fn prompt(&mut self, prompt: &str) -> Result<(), InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator, bounded to [`MAX_NAME_CHARS`] characters.
    ///
    /// Whatever follows the bound on the same line is discarded.
    pub fn line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let end = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(end);
        if let Some((cut, _)) = line.char_indices().nth(MAX_NAME_CHARS) {
            line.truncate(cut);
        }
        Ok(line)
    }

    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompt(prompt)?;
        self.line()
    }

    /// Reads one line and keeps everything before the first space.
    pub fn word(&mut self) -> Result<String, InputError> {
        let mut word = self.line()?;
        if let Some(space) = word.find(' ') {
            word.truncate(space);
        }
        Ok(word)
    }

    /// Prompts until a word passes `validator`, printing `error` after every rejection.
    pub fn validated_word<V>(
        &mut self,
        prompt: &str,
        error: &str,
        validator: V,
    ) -> Result<String, InputError>
    where
        V: Validator,
    {
        self.prompt(prompt)?;
        loop {
            let word = self.word()?;
            if validator.validate(&word) {
                return Ok(word);
            }
            debug!(rejected = %word, "Invalid input");
            self.prompt(error)?;
        }
    }

    /// Returns `true` for a (caseless) `y`, `false` for `n`.
    pub fn yes_or_no(&mut self, prompt: &str, error: &str) -> Result<bool, InputError> {
        let answer = self.validated_word(prompt, error, validate::is_yes_no)?;
        Ok(caseless::eq(&answer, YES))
    }

    /// Prompts until the operator enters an integer no smaller than `min`.
    pub fn int_at_least(&mut self, prompt: &str, error: &str, min: i32) -> Result<i32, InputError> {
        let word = self.validated_word(prompt, error, |word: &str| {
            word.parse::<i32>().is_ok_and(|n| n >= min)
        })?;
        Ok(word.parse().unwrap_or(min))
    }

    /// Prompts until the operator enters a finite amount strictly greater than `min`.
    pub fn amount_above(&mut self, prompt: &str, error: &str, min: f64) -> Result<f64, InputError> {
        let word = self.validated_word(prompt, error, |word: &str| {
            validate::parse_amount(word, min).is_some()
        })?;
        Ok(validate::parse_amount(&word, min).unwrap_or(min))
    }

    /// Asks the operator to retype `expected`.
    ///
    /// Allows `max_attempts` tries in total; `0` means unlimited. Returns whether
    /// the credential was matched in time. The comparison is exact.
    pub fn match_credential(
        &mut self,
        expected: &str,
        prompt: &str,
        mismatch: &str,
        max_attempts: u32,
    ) -> Result<bool, InputError> {
        self.prompt(prompt)?;
        let mut attempts = 1;
        loop {
            if self.word()? == expected {
                return Ok(true);
            }
            if max_attempts != 0 && attempts >= max_attempts {
                debug!(attempts, "Credential not matched");
                return Ok(false);
            }
            self.prompt(mismatch)?;
            attempts += 1;
        }
    }
}
