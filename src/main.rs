use anyhow::Context;
use clap::Parser;

use countdown_screen::cli::Cli;
use countdown_screen::logging::init_tracing;
use countdown_screen::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    ui::run(&config)
}
