//! Wires configuration, sources and the order sink into the TUI

use std::sync::Arc;

use tracing::info;

use crate::adapters::LogOrderSink;
use crate::config::AppConfig;
use crate::error::{FormError, Result};
use crate::form::OrderForm;
use crate::tui::app::TuiApp;
use crate::tui::run_tui;

/// Run the interactive order form with config-backed balances and limits.
///
/// Accepted orders go to the log.
pub fn run_order_form(config: &AppConfig) -> Result<()> {
    let form = OrderForm::from_config(config, Arc::new(LogOrderSink));
    info!(symbol = %form.settings().market.symbol(), "Starting order form");

    let mut app = TuiApp::new(form);
    run_tui(&mut app).map_err(|e| FormError::Terminal(e.to_string()))?;

    info!(orders = app.submitted_count, "Order form closed");
    Ok(())
}
