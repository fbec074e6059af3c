//! Fee and net-receive calculation
//!
//! Flat-rate fee on the asset the order receives:
//! - Buy: `fee = amount * rate`, paid in the base asset
//! - Sell: `fee = total * rate`, paid in the quote asset
//!
//! Values are kept at full precision; rounding happens only for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::OrderSide;
use crate::form::numeric::to_fixed;

/// Fee and net quantity for the current form values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub side: OrderSide,
    pub fee: Decimal,
    /// Net quantity after the fee, never negative
    pub receive: Decimal,
}

impl FeeQuote {
    pub fn fee_display(&self, decimals: u32) -> String {
        to_fixed(self.fee, decimals)
    }

    pub fn receive_display(&self, decimals: u32) -> String {
        to_fixed(self.receive, decimals)
    }
}

/// Quote the fee for an order of `amount` base / `total` quote.
pub fn quote_fee(side: OrderSide, amount: Decimal, total: Decimal, fee_rate: Decimal) -> FeeQuote {
    let gross = match side {
        OrderSide::Buy => amount,
        OrderSide::Sell => total,
    };
    let fee = gross.saturating_mul(fee_rate);
    let receive = (gross - fee).max(Decimal::ZERO);

    FeeQuote { side, fee, receive }
}

/// Fee rate as a percentage label, e.g. 0.015 -> "1.5"
pub fn fee_rate_percent(fee_rate: Decimal) -> String {
    (fee_rate * Decimal::ONE_HUNDRED).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_fee_in_base_asset() {
        let quote = quote_fee(OrderSide::Buy, dec!(0.1), dec!(8800), dec!(0.015));
        assert_eq!(quote.fee, dec!(0.0015));
        assert_eq!(quote.receive, dec!(0.0985));
        assert_eq!(quote.fee_display(6), "0.001500");
        assert_eq!(quote.receive_display(6), "0.098500");
    }

    #[test]
    fn test_sell_fee_in_quote_asset() {
        let quote = quote_fee(OrderSide::Sell, dec!(0.1), dec!(8800), dec!(0.015));
        assert_eq!(quote.fee, dec!(132));
        assert_eq!(quote.receive, dec!(8668));
        assert_eq!(quote.fee_display(2), "132.00");
        assert_eq!(quote.receive_display(2), "8668.00");
    }

    #[test]
    fn test_saturated_amount_does_not_overflow() {
        let quote = quote_fee(OrderSide::Buy, Decimal::MAX, Decimal::ZERO, dec!(0.015));
        assert!(quote.fee > Decimal::ZERO);
        assert!(quote.receive < Decimal::MAX);
    }

    #[test]
    fn test_empty_form_quotes_zero() {
        let quote = quote_fee(OrderSide::Buy, Decimal::ZERO, Decimal::ZERO, dec!(0.015));
        assert_eq!(quote.fee_display(6), "0.000000");
        assert_eq!(quote.receive_display(6), "0.000000");
    }

    #[test]
    fn test_receive_never_negative() {
        let quote = quote_fee(OrderSide::Sell, dec!(1), dec!(10), dec!(1.5));
        assert_eq!(quote.receive, Decimal::ZERO);
    }

    #[test]
    fn test_fee_rate_percent() {
        assert_eq!(fee_rate_percent(dec!(0.015)), "1.5");
        assert_eq!(fee_rate_percent(dec!(0.001)), "0.1");
    }
}
