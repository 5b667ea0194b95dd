//! Command-line interface: argument types, commands, and console output.

pub mod commands;
pub mod console;
pub mod context;
pub mod display;
pub mod types;

use clap::error::ErrorKind;

pub use self::console::ConsoleReporter;
pub use self::context::AppContext;
pub use self::types::{Cli, Commands, ConfigCommands};

use crate::domain::models::settings::ColorChoice;

/// Foreground color of labels: a soft sky blue.
pub const LABEL_RGB: (u8, u8, u8) = (95, 175, 215);

/// Turn a clap parse failure into the process exit.
///
/// Explicit help and version requests keep clap's own output and exit 0.
/// A missing subcommand prints the help to stderr, then fails like every
/// other usage error: through `reporter` with the `--help` hint and exit 1.
pub fn handle_parse_error(err: &clap::Error, reporter: &ConsoleReporter) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = err.print();
            reporter.exit_on_unknown(MISSING_COMMAND)
        }
        _ => reporter.exit_on_unknown(&usage_error_message(err)),
    }
}

const MISSING_COMMAND: &str = "A command is required.";

/// First line of clap's message, without styling or its `error: ` prefix.
pub fn usage_error_message(err: &clap::Error) -> String {
    let rendered = ::console::strip_ansi_codes(&err.to_string()).into_owned();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Decide whether labels are colored.
///
/// `--no-color` always wins. In `auto` mode coloring needs a terminal on
/// stdout and an unset or empty `NO_COLOR`.
pub fn color_enabled(choice: ColorChoice, no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
                && ::console::Term::stdout().features().colors_supported()
        }
    }
}
