use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderSide;

/// Trading pair the form is quoting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Traded asset (e.g. "BTC")
    pub base: String,
    /// Pricing asset (e.g. "USDT")
    pub quote: String,
}

impl Market {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Pair symbol, e.g. "BTC/USDT"
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }

    /// Asset the given side spends (quote for buys, base for sells)
    pub fn spend_asset(&self, side: OrderSide) -> &str {
        match side {
            OrderSide::Buy => &self.quote,
            OrderSide::Sell => &self.base,
        }
    }

    /// Asset the given side receives (base for buys, quote for sells)
    pub fn receive_asset(&self, side: OrderSide) -> &str {
        match side {
            OrderSide::Buy => &self.base,
            OrderSide::Sell => &self.quote,
        }
    }
}

/// Inclusive min/max bounds for a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: Decimal,
    pub max: Decimal,
}

impl Range {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }
}

/// Exchange-side price and amount limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLimits {
    pub price: Range,
    pub amount: Range,
}

/// Allowed fractional digits per field/asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    pub price: u32,
    /// Base-asset digits, used by the Amount field
    pub base: u32,
    /// Quote-asset digits, used by the Total field
    pub quote: u32,
}

impl Precision {
    /// Digits used to display a quantity of the given side's receive asset
    pub fn receive_digits(&self, side: OrderSide) -> u32 {
        match side {
            OrderSide::Buy => self.base,
            OrderSide::Sell => self.quote,
        }
    }
}
