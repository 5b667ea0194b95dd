//! Fatal error reporting for the CLI.
//!
//! Every fatal condition ends up here so that messages share one format:
//! `Error: <message>` on stderr followed by exit code 1.

use std::fmt::Display;
use std::io::{self, Write};

/// Exit code for every fatal condition.
pub const EXIT_FAILURE: i32 = 1;

const DEFAULT_HINT: &str = "Try --help for more details.";

/// Writes fatal errors to stderr and terminates the process.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    hint: String,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            hint: DEFAULT_HINT.to_string(),
        }
    }

    /// The line written for a fatal error.
    pub fn error_message(&self, message: &str) -> String {
        format!("Error: {message}\n")
    }

    /// The line written for unrecognized input, with a pointer to `--help`.
    pub fn unknown_message(&self, message: &str) -> String {
        self.error_message(&format!("{message} {}", self.hint))
    }

    /// Write the formatted error to `out`.
    pub fn write_error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        write_flushed(out, &self.error_message(message))
    }

    /// Write the formatted unknown-input error to `out`.
    pub fn write_unknown<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        write_flushed(out, &self.unknown_message(message))
    }

    /// Return the value of `result`, or report its error and exit.
    ///
    /// Error chains are rendered with their causes, `outer: inner`.
    pub fn check_error<T, E: Display>(&self, result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => self.exit_on_stderr(&format!("{err:#}")),
        }
    }

    /// Write `Error: <message>` to stderr and exit with code 1.
    pub fn exit_on_stderr(&self, message: &str) -> ! {
        let _ = self.write_error(&mut io::stderr().lock(), message);
        std::process::exit(EXIT_FAILURE)
    }

    /// Like [`ConsoleReporter::exit_on_stderr`], pointing the user at `--help`.
    pub fn exit_on_unknown(&self, message: &str) -> ! {
        let _ = self.write_unknown(&mut io::stderr().lock(), message);
        std::process::exit(EXIT_FAILURE)
    }
}

fn write_flushed<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
