//! Per-invocation state handed to every command.

use crate::cli::console::ConsoleReporter;
use crate::cli::display::LabelFormatter;
use crate::infrastructure::config::ConfigResolver;

/// Explicitly owned collaborators for one CLI invocation.
#[derive(Debug)]
pub struct AppContext {
    pub resolver: ConfigResolver,
    pub labels: LabelFormatter,
    pub reporter: ConsoleReporter,
    /// Value of `--config`, empty when not given
    pub override_path: String,
    pub json: bool,
}
