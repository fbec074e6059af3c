use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{Market, OrderSide, Precision};
use crate::form::numeric::parse_number;

/// Editable numeric field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Price,
    Amount,
    Total,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Price, Field::Amount, Field::Total];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Price => "Price",
            Field::Amount => "Amount",
            Field::Total => "Total",
        }
    }

    /// Fractional digits accepted when typing into this field
    pub fn decimals(&self, precision: &Precision) -> u32 {
        match self {
            Field::Price => precision.price,
            Field::Amount => precision.base,
            Field::Total => precision.quote,
        }
    }

    /// Asset the field is denominated in
    pub fn unit<'a>(&self, market: &'a Market) -> &'a str {
        match self {
            Field::Price | Field::Total => &market.quote,
            Field::Amount => &market.base,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_ascii_lowercase())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Field::Price),
            "amount" => Ok(Field::Amount),
            "total" => Ok(Field::Total),
            other => Err(format!("unknown field '{other}'; expected price|amount|total")),
        }
    }
}

/// Complete state of one order form instance.
///
/// Operations never patch this in place from the outside; each one builds
/// the next state and the form swaps it in whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    pub side: OrderSide,
    pub price: String,
    pub amount: String,
    pub total: String,
    /// Percentage of the spendable balance committed, 0..=100
    pub slider: Decimal,
}

impl FormState {
    pub fn new(side: OrderSide) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Price => &self.price,
            Field::Amount => &self.amount,
            Field::Total => &self.total,
        }
    }

    pub fn set_text(&mut self, field: Field, text: String) {
        match field {
            Field::Price => self.price = text,
            Field::Amount => self.amount = text,
            Field::Total => self.total = text,
        }
    }

    pub fn value(&self, field: Field) -> Decimal {
        parse_number(self.text(field))
    }

    pub fn price_value(&self) -> Decimal {
        self.value(Field::Price)
    }

    pub fn amount_value(&self) -> Decimal {
        self.value(Field::Amount)
    }

    pub fn total_value(&self) -> Decimal {
        self.value(Field::Total)
    }

    /// Slider position as a whole percentage, as a range control shows it
    pub fn slider_display(&self) -> u8 {
        use rust_decimal::prelude::ToPrimitive;

        self.slider
            .round()
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(0)
    }
}
