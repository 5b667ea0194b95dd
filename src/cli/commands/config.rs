//! Implementation of the `spaceman config` commands.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::context::AppContext;
use crate::cli::display::{
    exists_marker, muted, output, section_header, CommandOutput, LabelFormatter,
};
use crate::cli::types::ConfigCommands;
use crate::domain::models::config::{ConfigCandidate, ConfigValue, SectionMap};
use crate::infrastructure::config::ConfigLoader;

#[derive(Debug, Serialize)]
pub struct PathOutput {
    pub active: PathBuf,
    pub candidates: Vec<ConfigCandidate>,
}

impl CommandOutput for PathOutput {
    fn to_human(&self, labels: &LabelFormatter) -> String {
        self.candidates
            .iter()
            .map(|candidate| {
                format!(
                    "{} {} {}",
                    labels.format(candidate.role),
                    exists_marker(candidate.exists, labels.colored()),
                    muted(&candidate.path.display().to_string(), labels.colored())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub path: PathBuf,
    pub sections: SectionMap,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self, labels: &LabelFormatter) -> String {
        let mut lines = Vec::new();
        for (name, value) in &self.sections {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(section_header(name, labels.colored()));
            render_value(&mut lines, value, labels, 1);
        }
        lines.join("\n")
    }
}

pub fn execute(command: ConfigCommands, ctx: &mut AppContext) -> Result<()> {
    match command {
        ConfigCommands::Path => output(&path(ctx), &ctx.labels, ctx.json),
        ConfigCommands::Show { sections } => output(&show(ctx, &sections)?, &ctx.labels, ctx.json),
    }
    Ok(())
}

/// Resolve the active file and list every known location.
pub fn path(ctx: &mut AppContext) -> PathOutput {
    let active = ctx.resolver.resolve_active(&ctx.override_path).to_path_buf();
    PathOutput {
        active,
        candidates: ctx.resolver.candidates(),
    }
}

/// Load `sections` from the active file.
pub fn show(ctx: &mut AppContext, sections: &[String]) -> Result<ShowOutput> {
    let sections = ConfigLoader::load_active(&mut ctx.resolver, &ctx.override_path, sections)
        .context("Failed to load configuration")?;

    Ok(ShowOutput {
        path: ctx.resolver.paths().active.clone(),
        sections,
    })
}

fn render_value(lines: &mut Vec<String>, value: &ConfigValue, labels: &LabelFormatter, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        ConfigValue::Mapping(map) => {
            for (key, child) in map {
                if child.is_scalar() {
                    lines.push(format!("{indent}{} {child}", labels.format(key)));
                } else {
                    lines.push(format!("{indent}{}", labels.format(key)));
                    render_value(lines, child, labels, depth + 1);
                }
            }
        }
        ConfigValue::Sequence(items) => {
            for item in items {
                if item.is_scalar() {
                    lines.push(format!("{indent}- {item}"));
                } else {
                    lines.push(format!("{indent}-"));
                    render_value(lines, item, labels, depth + 1);
                }
            }
        }
        scalar => lines.push(format!("{indent}{scalar}")),
    }
}
