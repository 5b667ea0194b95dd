//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spaceman")]
#[command(about = "Spaceman - configuration-aware console client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of ~/.config/spaceman/config.conf
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Never colorize labels
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration files
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show which configuration file is active and which defaults exist
    Path,

    /// Print sections of the active configuration file
    Show {
        /// Top-level section names to print
        #[arg(required = true, value_name = "SECTION")]
        sections: Vec<String>,
    },
}
