//! Headless form driver
//!
//! Applies textual events to a fresh form backed by the configured balances
//! and limits and reports each step plus the final form.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::adapters::MemoryOrderSink;
use crate::cli::output::{print_json, print_section, OutputMode};
use crate::config::AppConfig;
use crate::domain::{OrderRecord, OrderSide};
use crate::error::Result;
use crate::form::fees::fee_rate_percent;
use crate::form::{EventOutcome, Field, FormEvent, OrderForm};

/// One applied event
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SimulationStep {
    #[tabled(rename = "#")]
    pub index: usize,
    pub event: String,
    pub outcome: String,
}

/// Label/value row of the final form
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FormRow {
    pub field: String,
    pub value: String,
}

/// Order accepted during the run
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct OrderRow {
    pub side: OrderSide,
    pub price: String,
    pub amount: String,
    pub total: String,
    pub receive: String,
}

impl From<&OrderRecord> for OrderRow {
    fn from(order: &OrderRecord) -> Self {
        Self {
            side: order.side,
            price: order.price.normalize().to_string(),
            amount: order.amount.normalize().to_string(),
            total: order.total.normalize().to_string(),
            receive: format!("{} {}", order.receive.normalize(), order.receive_asset),
        }
    }
}

/// Result of a simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub steps: Vec<SimulationStep>,
    pub side: OrderSide,
    pub price: String,
    pub amount: String,
    pub total: String,
    pub slider: u8,
    pub fee: String,
    pub receive: String,
    pub errors: Vec<String>,
    pub valid: bool,
    pub orders: Vec<OrderRecord>,
}

impl SimulationReport {
    fn form_rows(&self) -> Vec<FormRow> {
        let mut rows = vec![
            row("side", self.side.to_string()),
            row("price", &self.price),
            row("amount", &self.amount),
            row("total", &self.total),
            row("slider", format!("{}%", self.slider)),
            row("fee", &self.fee),
            row("you will receive", &self.receive),
            row("submittable", if self.valid { "yes" } else { "no" }),
        ];
        rows.extend(self.errors.iter().map(|e| row("error", e)));
        rows
    }
}

fn row(field: &str, value: impl Into<String>) -> FormRow {
    FormRow {
        field: field.to_string(),
        value: value.into(),
    }
}

fn describe(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::Applied => "applied".to_string(),
        EventOutcome::Rejected => "rejected".to_string(),
        EventOutcome::Submitted(order) => order.acknowledgement(),
        EventOutcome::NotSubmittable => "not submittable".to_string(),
    }
}

/// Parse every event first, then apply them in order.
///
/// A malformed event fails the run before anything is applied.
pub fn run_simulation(config: &AppConfig, raw_events: &[String]) -> Result<SimulationReport> {
    let events = raw_events
        .iter()
        .map(|raw| raw.parse::<FormEvent>())
        .collect::<Result<Vec<_>>>()?;

    let sink = Arc::new(MemoryOrderSink::new());
    let mut form = OrderForm::from_config(config, sink.clone());

    let steps = raw_events
        .iter()
        .zip(events)
        .enumerate()
        .map(|(i, (raw, event))| {
            let outcome = form.apply(event);
            debug!(event = %raw, ?outcome, "Applied event");
            SimulationStep {
                index: i + 1,
                event: raw.clone(),
                outcome: describe(&outcome),
            }
        })
        .collect();

    let settings = form.settings();
    let side = form.side();
    let digits = settings.precision.receive_digits(side);
    let asset = form.receive_asset();
    let quote = form.fee_quote();

    Ok(SimulationReport {
        steps,
        side,
        price: form.text(Field::Price).to_string(),
        amount: form.text(Field::Amount).to_string(),
        total: form.text(Field::Total).to_string(),
        slider: form.state().slider_display(),
        fee: format!(
            "{} {asset} ({}%)",
            quote.fee_display(digits),
            fee_rate_percent(settings.fee_rate)
        ),
        receive: format!("{} {asset}", quote.receive_display(digits)),
        errors: form.validation().iter().map(|(_, e)| e.to_string()).collect(),
        valid: form.is_valid(),
        orders: sink.orders(),
    })
}

/// Print a report in the chosen mode
pub fn print_report(report: &SimulationReport, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => print_json(report)?,
        OutputMode::Table => {
            print_section("Events", &report.steps);
            print_section("Form", &report.form_rows());
            let orders: Vec<OrderRow> = report.orders.iter().map(OrderRow::from).collect();
            print_section("Orders", &orders);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use rust_decimal_macros::dec;

    fn events(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_buy_with_slider_and_submit() {
        let report = run_simulation(
            &AppConfig::default_config(),
            &events(&["price=88000", "slider=50", "submit"]),
        )
        .unwrap();

        assert_eq!(report.total, "50.00");
        assert_eq!(report.amount, "0.000568");
        assert_eq!(report.slider, 50);
        assert!(report.valid);
        assert_eq!(report.steps[2].outcome, "Buy order submitted!");
        assert_eq!(report.orders.len(), 1);
        assert_eq!(report.orders[0].total, dec!(50));
    }

    #[test]
    fn test_rejected_and_unsubmittable_steps() {
        let report = run_simulation(
            &AppConfig::default_config(),
            &events(&["price=abc", "total=150", "submit"]),
        )
        .unwrap();

        assert_eq!(report.steps[0].outcome, "rejected");
        assert_eq!(report.steps[2].outcome, "not submittable");
        assert!(!report.valid);
        assert!(report
            .errors
            .contains(&"Insufficient balance (100 USDT)".to_string()));
        assert!(report.orders.is_empty());
    }

    #[test]
    fn test_sell_fee_lines() {
        let report = run_simulation(
            &AppConfig::default_config(),
            &events(&["side=sell", "price=88000", "amount=0.1"]),
        )
        .unwrap();

        assert_eq!(report.side, OrderSide::Sell);
        assert_eq!(report.total, "8800.00");
        assert_eq!(report.fee, "132.00 USDT (1.5%)");
        assert_eq!(report.receive, "8668.00 USDT");
    }

    #[test]
    fn test_malformed_event_applies_nothing() {
        let err = run_simulation(
            &AppConfig::default_config(),
            &events(&["price=88000", "bogus"]),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::InvalidEvent(_)));
    }

    #[test]
    fn test_form_rows_include_errors() {
        let report = run_simulation(&AppConfig::default_config(), &events(&["price=1000"])).unwrap();
        let rows = report.form_rows();
        assert!(rows
            .iter()
            .any(|r| r.field == "error" && r.value == "Minimum price: 87510.22"));
    }
}
