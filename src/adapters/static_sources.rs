//! Configuration-backed balance and limit sources

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::AppConfig;
use crate::domain::{OrderLimits, Range};
use crate::exchange::{BalanceSource, LimitSource};

/// Fixed balances keyed by asset symbol
#[derive(Debug, Clone, Default)]
pub struct StaticBalances {
    balances: HashMap<String, Decimal>,
}

impl StaticBalances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, asset: impl Into<String>, quantity: Decimal) -> Self {
        self.balances.insert(asset.into(), quantity);
        self
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_balance(config.market.base.clone(), config.account.base_balance)
            .with_balance(config.market.quote.clone(), config.account.quote_balance)
    }
}

impl BalanceSource for StaticBalances {
    fn available(&self, asset: &str) -> Decimal {
        self.balances.get(asset).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Fixed price/amount limits
#[derive(Debug, Clone, Copy)]
pub struct StaticLimits {
    limits: OrderLimits,
}

impl StaticLimits {
    pub fn new(limits: OrderLimits) -> Self {
        Self { limits }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(OrderLimits {
            price: Range::new(config.limits.price_min, config.limits.price_max),
            amount: Range::new(config.limits.amount_min, config.limits.amount_max),
        })
    }
}

impl LimitSource for StaticLimits {
    fn limits(&self) -> OrderLimits {
        self.limits
    }
}
