//! Spaceman CLI entry point.

use clap::Parser;

use spaceman::cli::{AppContext, Cli, Commands, ConsoleReporter, LABEL_RGB};
use spaceman::infrastructure::config::{ConfigResolver, SettingsLoader};
use spaceman::infrastructure::logging::Logger;
use spaceman::{LabelFormatter, LabelStyle};

fn main() {
    let reporter = ConsoleReporter::new();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => spaceman::cli::handle_parse_error(&err, &reporter),
    };

    let settings = reporter.check_error(SettingsLoader::load());
    reporter.check_error(Logger::init(&settings.log));

    let use_color = spaceman::cli::color_enabled(settings.color, cli.no_color);

    let (r, g, b) = LABEL_RGB;
    let mut labels = LabelFormatter::new(LabelStyle::new(true, r, g, b));
    labels.set_colored(use_color);

    let mut ctx = AppContext {
        resolver: ConfigResolver::new("spaceman"),
        labels,
        reporter,
        override_path: cli.config.unwrap_or_default(),
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Config(command) => spaceman::cli::commands::config::execute(command, &mut ctx),
    };

    ctx.reporter.check_error(result);
}
