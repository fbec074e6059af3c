//! Order form engine
//!
//! Owns the form state and applies user events to it. Each operation
//! validates its input, computes the complete next state with the pure rules
//! in `derive`, then runs the slider post-step before swapping the state in.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::adapters::{StaticBalances, StaticLimits};
use crate::config::AppConfig;
use crate::domain::{Market, OrderLimits, OrderRecord, OrderSide, Precision};
use crate::exchange::{BalanceSource, LimitSource, OrderSink};
use crate::form::derive::{apply_slider, derive_on_edit, slider_percentage, switch_side};
use crate::form::event::{EventOutcome, FormEvent};
use crate::form::fees::{quote_fee, FeeQuote};
use crate::form::state::{Field, FormState};
use crate::validation::{is_submittable, validate_decimal_text, validate_order, ValidationReport};

/// Static settings of the market the form trades
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub market: Market,
    pub precision: Precision,
    pub fee_rate: Decimal,
}

impl FormSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            market: config.market(),
            precision: config.precision(),
            fee_rate: config.market.fee_rate,
        }
    }
}

/// A single limit-order form
pub struct OrderForm {
    state: FormState,
    settings: FormSettings,
    balances: Arc<dyn BalanceSource>,
    limits: Arc<dyn LimitSource>,
    sink: Arc<dyn OrderSink>,
}

impl OrderForm {
    /// Create an empty buy form
    pub fn new(
        settings: FormSettings,
        balances: Arc<dyn BalanceSource>,
        limits: Arc<dyn LimitSource>,
        sink: Arc<dyn OrderSink>,
    ) -> Self {
        Self {
            state: FormState::new(OrderSide::Buy),
            settings,
            balances,
            limits,
            sink,
        }
    }

    /// Create a form backed by the configured balances and limits
    pub fn from_config(config: &AppConfig, sink: Arc<dyn OrderSink>) -> Self {
        Self::new(
            FormSettings::from_config(config),
            Arc::new(StaticBalances::from_config(config)),
            Arc::new(StaticLimits::from_config(config)),
            sink,
        )
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn side(&self) -> OrderSide {
        self.state.side
    }

    pub fn text(&self, field: Field) -> &str {
        self.state.text(field)
    }

    pub fn limits(&self) -> OrderLimits {
        self.limits.limits()
    }

    /// Asset the current side spends
    pub fn spend_asset(&self) -> &str {
        self.settings.market.spend_asset(self.state.side)
    }

    /// Available balance of the asset the current side spends
    pub fn spend_balance(&self) -> Decimal {
        self.balances.available(self.spend_asset())
    }

    /// Asset the fee and net receive are denominated in
    pub fn receive_asset(&self) -> &str {
        self.settings.market.receive_asset(self.state.side)
    }

    /// Replace a field's text.
    ///
    /// Returns `false` and leaves the state untouched when the text fails the
    /// keystroke gate.
    pub fn edit_field(&mut self, field: Field, raw: &str) -> bool {
        let decimals = field.decimals(&self.settings.precision);
        if !validate_decimal_text(raw, decimals) {
            debug!(%field, input = raw, decimals, "Rejected input");
            return false;
        }

        let mut next = derive_on_edit(field, raw, &self.state, &self.settings.precision);
        next.slider = slider_percentage(&next, self.spend_balance());

        debug!(
            %field,
            price = %next.price,
            amount = %next.amount,
            total = %next.total,
            slider = %next.slider,
            "Field updated"
        );
        self.state = next;
        true
    }

    /// Type `keys` into a field one character at a time; rejected characters
    /// are skipped. Returns how many characters were accepted.
    pub fn type_text(&mut self, field: Field, keys: &str) -> usize {
        let mut accepted = 0;
        for c in keys.chars() {
            let mut candidate = self.state.text(field).to_string();
            candidate.push(c);
            if self.edit_field(field, &candidate) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Delete the last character of a field
    pub fn backspace(&mut self, field: Field) -> bool {
        let mut text = self.state.text(field).to_string();
        if text.pop().is_none() {
            return false;
        }
        self.edit_field(field, &text)
    }

    /// Set the slider to `percentage` (clamped to 0..=100) and derive fields
    pub fn set_slider(&mut self, percentage: Decimal) {
        self.state = apply_slider(
            &self.state,
            percentage,
            self.spend_balance(),
            &self.settings.precision,
        );
        debug!(
            slider = %self.state.slider,
            amount = %self.state.amount,
            total = %self.state.total,
            "Slider moved"
        );
    }

    /// Move the slider by `delta` whole percent from its displayed position
    pub fn step_slider(&mut self, delta: i32) {
        let current = Decimal::from(self.state.slider_display());
        self.set_slider(current + Decimal::from(delta));
    }

    /// Switch sides, clearing Amount/Total and keeping Price
    pub fn switch_side(&mut self, side: OrderSide) {
        self.state = switch_side(&self.state, side);
        info!(%side, price = %self.state.price, "Switched order side");
    }

    /// Range and balance messages for the current values
    pub fn validation(&self) -> ValidationReport {
        validate_order(
            self.state.side,
            self.state.price_value(),
            self.state.amount_value(),
            self.state.total_value(),
            &self.limits.limits(),
            self.spend_balance(),
            self.spend_asset(),
        )
    }

    pub fn fee_quote(&self) -> FeeQuote {
        quote_fee(
            self.state.side,
            self.state.amount_value(),
            self.state.total_value(),
            self.settings.fee_rate,
        )
    }

    /// Whether the submit control is enabled
    pub fn is_valid(&self) -> bool {
        is_submittable(
            &self.validation(),
            self.state.price_value(),
            self.state.amount_value(),
            self.state.total_value(),
        )
    }

    /// Submit the order if the form is valid.
    ///
    /// Returns `None` without touching the sink when it is not.
    pub fn submit(&self) -> Option<OrderRecord> {
        if !self.is_valid() {
            debug!("Submit ignored: form is not valid");
            return None;
        }

        let quote = self.fee_quote();
        let receive_asset = self.receive_asset().to_string();
        let record = OrderRecord {
            client_order_id: OrderRecord::new_client_order_id(),
            side: self.state.side,
            symbol: self.settings.market.symbol(),
            price: self.state.price_value(),
            amount: self.state.amount_value(),
            total: self.state.total_value(),
            fee: quote.fee,
            fee_asset: receive_asset.clone(),
            receive: quote.receive,
            receive_asset,
            submitted_at: Utc::now(),
        };

        self.sink.submit(&record);
        info!(
            client_order_id = %record.client_order_id,
            side = %record.side,
            price = %record.price,
            amount = %record.amount,
            total = %record.total,
            "Order placed"
        );
        Some(record)
    }

    /// Apply one event
    pub fn apply(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::Edit { field, text } => {
                if self.edit_field(field, &text) {
                    EventOutcome::Applied
                } else {
                    EventOutcome::Rejected
                }
            }
            FormEvent::Type { field, keys } => {
                let accepted = self.type_text(field, &keys);
                if accepted == 0 && !keys.is_empty() {
                    EventOutcome::Rejected
                } else {
                    EventOutcome::Applied
                }
            }
            FormEvent::Slider(pct) => {
                self.set_slider(pct);
                EventOutcome::Applied
            }
            FormEvent::SwitchSide(side) => {
                self.switch_side(side);
                EventOutcome::Applied
            }
            FormEvent::Submit => match self.submit() {
                Some(record) => EventOutcome::Submitted(record),
                None => EventOutcome::NotSubmittable,
            },
        }
    }
}
