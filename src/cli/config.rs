//! Configuration commands
//!
//! limitform config         - Print the effective configuration
//! limitform config --check - Validate it

use anyhow::{bail, Result};

use crate::cli::output::{print_error, print_warn};
use crate::config::AppConfig;

/// Print `config` as TOML, or only validate it with `check`
pub fn show_config(config: &AppConfig, check: bool) -> Result<()> {
    let problems = config.validate().err().unwrap_or_default();

    if check {
        if problems.is_empty() {
            println!("Configuration OK");
            return Ok(());
        }
        for problem in &problems {
            print_error(&format!("✗ {problem}"));
        }
        bail!("{} configuration problem(s)", problems.len());
    }

    println!("{}", render_toml(config)?);
    for problem in &problems {
        print_warn(&format!("⚠ {problem}"));
    }
    Ok(())
}

/// Effective configuration as TOML
pub fn render_toml(config: &AppConfig) -> crate::error::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_toml_sections() {
        let rendered = render_toml(&AppConfig::default_config()).unwrap();
        assert!(rendered.contains("[market]"));
        assert!(rendered.contains("[account]"));
        assert!(rendered.contains("[limits]"));
        assert!(rendered.contains("[precision]"));
        assert!(rendered.contains("base = \"BTC\""));
    }

    #[test]
    fn test_check_reports_problems() {
        let mut config = AppConfig::default_config();
        assert!(show_config(&config, true).is_ok());

        config.market.quote = "BTC".to_string();
        assert!(show_config(&config, true).is_err());
    }
}
