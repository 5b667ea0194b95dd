//! Markers and headers for CLI output.
//!
//! Every helper takes the same `colored` switch as the label formatter, so
//! one decision made at startup governs all escape codes.

use owo_colors::OwoColorize;

/// Green check for a file that exists, dim cross for one that does not.
pub fn exists_marker(exists: bool, colored: bool) -> String {
    match (exists, colored) {
        (true, true) => "\u{2713}".green().bold().to_string(),
        (true, false) => "\u{2713}".to_string(),
        (false, true) => "\u{2717}".dimmed().to_string(),
        (false, false) => "\u{2717}".to_string(),
    }
}

/// Section header with underline.
pub fn section_header(title: &str, colored: bool) -> String {
    if colored {
        title.bold().underline().to_string()
    } else {
        title.to_string()
    }
}

/// Dimmed text for secondary details such as file paths.
pub fn muted(text: &str, colored: bool) -> String {
    if colored {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
