//! Display framework for CLI output formatting.
//!
//! Provides shared primitives for labels, colors, and the human/JSON output
//! switch used by every command.

pub mod colors;
pub mod labels;

use serde::Serialize;

pub use colors::*;
pub use labels::{format_label, LabelFormatter, LabelStyle};

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self, labels: &LabelFormatter) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Render output based on JSON mode flag.
pub fn render<T: CommandOutput>(result: &T, labels: &LabelFormatter, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human(labels)
    }
}

/// Print output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, labels: &LabelFormatter, json_mode: bool) {
    println!("{}", render(result, labels, json_mode));
}
