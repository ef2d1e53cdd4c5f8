use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use wager_cost::init_tracing;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    let config_path = args.config.as_deref();

    match args.get_command() {
        cli::Commands::Table { format } => {
            commands::table::execute(config_path, format)?;
        }
        cli::Commands::Estimate {
            users,
            bets,
            participation_rate,
            json,
        } => {
            commands::estimate::execute(config_path, users, bets, participation_rate, json)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(config_path)?,
            cli::ConfigCommands::Validate => commands::config::validate(config_path)?,
        },
        cli::Commands::Version => {
            println!("wager-cost v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
