//! ivp command line entry point.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ivp::cli::{Cli, Commands, ConfigCommands};
use ivp::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so command output stays pipeable.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "ivp=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Checkpoints => {
            let config = Config::load_from(&config_path)?;
            commands::checkpoints::handle_list(&config)?;
        }
        Commands::Simulate { script, window } => {
            let config = Config::load_from(&config_path)?;
            commands::simulate::handle(&config, &script, window)?;
        }
        Commands::Validate { file } => {
            let config = Config::load_from(&config_path)?;
            return commands::validate::handle(&config, &file);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                commands::config::handle_show(&Config::load_from(&config_path)?)?
            }
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force)?,
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }

    Ok(ExitCode::SUCCESS)
}
