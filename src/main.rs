use clap::Parser;
use limitform::cli::{self, Cli, Commands};
use limitform::config::AppConfig;
use limitform::error::{FormError, Result};
use limitform::tui;
use tracing::{info, warn};

mod main_runtime;

use main_runtime::{init_logging, init_logging_simple};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let config = AppConfig::load_from(&cli.config)?;

    if command.is_interactive() {
        if let Some(dir) = init_logging(&config.logging) {
            eprintln!("Logging to: {}", dir.join("limitform.log").display());
        }
    } else {
        init_logging_simple(&config.logging);
    }
    info!(config_dir = %cli.config.display(), "Loaded configuration");

    match command {
        Commands::Tui => {
            if let Err(problems) = config.validate() {
                for problem in &problems {
                    warn!("Config problem: {}", problem);
                }
                return Err(FormError::InvalidConfig(problems.join("; ")));
            }
            tui::run_order_form(&config)?;
        }
        Commands::Simulate { events, json } => {
            if let Err(problems) = config.validate() {
                return Err(FormError::InvalidConfig(problems.join("; ")));
            }
            let report = cli::simulate::run_simulation(&config, &events)?;
            cli::simulate::print_report(&report, cli::output::OutputMode::from_json_flag(json))?;
        }
        Commands::Config { check } => {
            cli::config::show_config(&config, check)?;
        }
    }

    Ok(())
}
