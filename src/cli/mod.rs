//! limitform CLI
//!
//! Commands:
//! - `limitform tui` - Interactive order form (default)
//! - `limitform simulate` - Apply form events headlessly
//! - `limitform config` - Show the effective configuration

pub mod config;
pub mod output;
pub mod simulate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Limit-order entry form
#[derive(Parser, Debug)]
#[command(name = "limitform")]
#[command(author, version, about = "Limit-order entry form with cross-field derivation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration directory
    #[arg(short, long, global = true, default_value = "config")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal form
    Tui,

    /// Apply events to a fresh form and print the result
    ///
    /// Events: price=88000, amount=0.001, total=88, type:price=abc123,
    /// slider=50, side=buy|sell, submit
    Simulate {
        /// Events, applied in order
        #[arg(required = true)]
        events: Vec<String>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Only check the configuration, print problems and exit
        #[arg(long)]
        check: bool,
    },
}

impl Commands {
    /// Whether the command draws on the terminal and must not log to it
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["limitform"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config"));
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "limitform",
            "simulate",
            "price=88000",
            "slider=50",
            "--json",
            "--config",
            "/etc/limitform",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Simulate { events, json }) => {
                assert_eq!(events, vec!["price=88000", "slider=50"]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("/etc/limitform"));
    }

    #[test]
    fn test_simulate_requires_events() {
        assert!(Cli::try_parse_from(["limitform", "simulate"]).is_err());
    }

    #[test]
    fn test_interactive_commands() {
        assert!(Commands::Tui.is_interactive());
        assert!(!Commands::Config { check: false }.is_interactive());
    }
}
