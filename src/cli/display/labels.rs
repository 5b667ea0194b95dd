//! Field-name to label conversion for console output.
//!
//! `userName` becomes `User Name`, `api_key` becomes `Api Key`, optionally
//! wrapped in a truecolor escape and followed by a colon.

use owo_colors::OwoColorize;
use regex::Regex;
use std::sync::LazyLock;

static UPPERCASE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)").expect("uppercase pattern is valid"));

/// How a label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub add_colon: bool,
    pub colored: bool,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LabelStyle {
    /// A colored style with the given foreground color.
    pub const fn new(add_colon: bool, r: u8, g: u8, b: u8) -> Self {
        Self {
            add_colon,
            colored: true,
            r,
            g,
            b,
        }
    }

    /// A style that never emits escape codes.
    pub const fn plain(add_colon: bool) -> Self {
        Self {
            add_colon,
            colored: false,
            r: 0,
            g: 0,
            b: 0,
        }
    }
}

/// Renders field names with a fixed [`LabelStyle`].
#[derive(Debug, Clone)]
pub struct LabelFormatter {
    style: LabelStyle,
}

impl LabelFormatter {
    pub const fn new(style: LabelStyle) -> Self {
        Self { style }
    }

    pub fn format(&self, name: &str) -> String {
        format_label(name, &self.style)
    }

    /// Turn coloring on or off for subsequent calls.
    pub fn set_colored(&mut self, colored: bool) {
        self.style.colored = colored;
    }

    pub const fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Whether output rendered alongside these labels may use escape codes.
    pub const fn colored(&self) -> bool {
        self.style.colored
    }
}

/// Convert an identifier-style field name into a human-readable label.
///
/// Coloring is applied before underscores become spaces, so the colored span
/// covers the whole label. The colon is never colored.
pub fn format_label(name: &str, style: &LabelStyle) -> String {
    let spaced = UPPERCASE_RUN.replace_all(name, " $1");
    let mut label = title_case(spaced.to_lowercase().trim());

    if style.colored {
        label = label.truecolor(style.r, style.g, style.b).to_string();
    }

    label = label.replace('_', " ");

    if style.add_colon {
        label.push(':');
    }
    label
}

/// Uppercase the first letter of every word.
///
/// A word starts at the beginning of the text or after any character that is
/// neither a letter nor a digit.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    result
}
