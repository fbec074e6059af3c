//! Cross-field derivation rules
//!
//! Price, Amount and Total are tied by `total = price * amount`. Editing one
//! field re-derives its dependent field from the stored Price; the slider is
//! kept in sync with whichever quantity the current side spends.
//!
//! Every function here is pure: it takes the prior state and returns the
//! next one.

use rust_decimal::Decimal;

use crate::domain::{OrderSide, Precision};
use crate::form::numeric::format_checked;
use crate::form::state::{Field, FormState};

/// Apply an accepted edit and re-derive the dependent field.
///
/// - Price or Amount edited: Total = Price * Amount when both are positive.
/// - Total edited: Amount = Total / Price when both are positive.
///
/// Otherwise the dependent field keeps its prior text.
pub fn derive_on_edit(field: Field, text: &str, prior: &FormState, precision: &Precision) -> FormState {
    let mut next = prior.clone();
    next.set_text(field, text.to_string());

    let price = next.price_value();
    match field {
        Field::Price | Field::Amount => {
            let amount = next.amount_value();
            if price > Decimal::ZERO && amount > Decimal::ZERO {
                next.total = format_checked(price.checked_mul(amount), precision.quote);
            }
        }
        Field::Total => {
            let total = next.total_value();
            if price > Decimal::ZERO && total > Decimal::ZERO {
                next.amount = format_checked(total.checked_div(price), precision.base);
            }
        }
    }

    next
}

/// Percentage of `spend_balance` committed by the state's spend quantity
/// (Total for buys, Amount for sells), clamped to 0..=100.
pub fn slider_percentage(state: &FormState, spend_balance: Decimal) -> Decimal {
    if spend_balance <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let committed = match state.side {
        OrderSide::Buy => state.total_value(),
        OrderSide::Sell => state.amount_value(),
    };

    // Overflow only happens far beyond the balance, i.e. above 100%
    committed
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(spend_balance))
        .map_or(Decimal::ONE_HUNDRED, |pct| {
            pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        })
}

/// Move the slider to `percentage` and derive the fields from it.
///
/// Buy: Total = pct of the quote balance, then Amount = Total / Price.
/// Sell: Amount = pct of the base balance, then Total = Amount * Price.
/// The dependent field is only touched when Price is positive.
pub fn apply_slider(
    state: &FormState,
    percentage: Decimal,
    spend_balance: Decimal,
    precision: &Precision,
) -> FormState {
    let percentage = percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let mut next = state.clone();
    next.slider = percentage;

    let committed = percentage
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|fraction| fraction.checked_mul(spend_balance));
    let price = state.price_value();

    match state.side {
        OrderSide::Buy => {
            next.total = format_checked(committed, precision.quote);
            if price > Decimal::ZERO {
                next.amount = format_checked(
                    committed.and_then(|total| total.checked_div(price)),
                    precision.base,
                );
            }
        }
        OrderSide::Sell => {
            next.amount = format_checked(committed, precision.base);
            if price > Decimal::ZERO {
                next.total = format_checked(
                    committed.and_then(|amount| amount.checked_mul(price)),
                    precision.quote,
                );
            }
        }
    }

    next
}

/// Switch sides: Price survives, Amount/Total are cleared, slider resets.
pub fn switch_side(state: &FormState, side: OrderSide) -> FormState {
    FormState {
        side,
        price: state.price.clone(),
        amount: String::new(),
        total: String::new(),
        slider: Decimal::ZERO,
    }
}
