/// Input validation for the order form
///
/// Two layers:
/// - keystroke gate: `validate_decimal_text` decides whether a new field text
///   may be stored at all
/// - order checks: `validate_order` reports range and balance problems for
///   values that were accepted
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{OrderLimits, OrderSide};
use crate::form::Field;

/// Validate field text typed by the user
///
/// # Arguments
/// * `raw` - Candidate field text
/// * `max_decimals` - Maximum fractional digits for the field
///
/// # Returns
/// * `true` if the text may be stored (empty text clears the field)
/// * `false` if the keystroke must be dropped
pub fn validate_decimal_text(raw: &str, max_decimals: u32) -> bool {
    if raw.is_empty() {
        return true;
    }

    if raw.contains('-') {
        return false;
    }

    let mut parts = raw.splitn(2, '.');
    let int_part = parts.next().unwrap_or_default();
    let frac_part = parts.next();

    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match frac_part {
        None => true,
        Some(frac) => {
            frac.chars().all(|c| c.is_ascii_digit()) && frac.len() <= max_decimals as usize
        }
    }
}

/// Where a validation message is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKey {
    Price,
    Amount,
    Total,
    /// Insufficient balance, shown apart from the field errors
    Balance,
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        match field {
            Field::Price => ErrorKey::Price,
            Field::Amount => ErrorKey::Amount,
            Field::Total => ErrorKey::Total,
        }
    }
}

/// A range or balance problem with the current form values
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldError {
    #[error("Minimum price: {min}")]
    PriceBelowMin { min: Decimal },

    #[error("Maximum price: {max}")]
    PriceAboveMax { max: Decimal },

    #[error("Minimum amount: {min}")]
    AmountBelowMin { min: Decimal },

    #[error("Maximum amount: {max}")]
    AmountAboveMax { max: Decimal },

    #[error("Insufficient balance ({available} {asset})")]
    InsufficientBalance { available: Decimal, asset: String },
}

/// All validation messages for one form snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<ErrorKey, FieldError>,
}

impl ValidationReport {
    /// Record an error; a later error for the same key replaces the earlier one
    fn insert(&mut self, key: ErrorKey, error: FieldError) {
        self.errors.insert(key, error);
    }

    pub fn get(&self, key: ErrorKey) -> Option<&FieldError> {
        self.errors.get(&key)
    }

    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.get(field.into())
    }

    pub fn balance_error(&self) -> Option<&FieldError> {
        self.get(ErrorKey::Balance)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &FieldError)> {
        self.errors.iter()
    }
}

/// Check parsed form values against exchange limits and the spendable balance
///
/// # Arguments
/// * `side` - Buy checks Total against the quote balance, Sell checks Amount
///   against the base balance
/// * `price`, `amount`, `total` - Parsed field values (0 when empty)
/// * `limits` - Price and amount bounds
/// * `spend_balance` - Available quantity of the asset the side spends
/// * `spend_asset` - Symbol of that asset, for the message
///
/// Zero values never produce range errors, so an untouched form is clean.
pub fn validate_order(
    side: OrderSide,
    price: Decimal,
    amount: Decimal,
    total: Decimal,
    limits: &OrderLimits,
    spend_balance: Decimal,
    spend_asset: &str,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if price > Decimal::ZERO {
        if price < limits.price.min {
            report.insert(
                ErrorKey::Price,
                FieldError::PriceBelowMin {
                    min: limits.price.min,
                },
            );
        }
        if price > limits.price.max {
            report.insert(
                ErrorKey::Price,
                FieldError::PriceAboveMax {
                    max: limits.price.max,
                },
            );
        }
    }

    if amount > Decimal::ZERO {
        if amount < limits.amount.min {
            report.insert(
                ErrorKey::Amount,
                FieldError::AmountBelowMin {
                    min: limits.amount.min,
                },
            );
        }
        if amount > limits.amount.max {
            report.insert(
                ErrorKey::Amount,
                FieldError::AmountAboveMax {
                    max: limits.amount.max,
                },
            );
        }
    }

    let committed = match side {
        OrderSide::Buy => total,
        OrderSide::Sell => amount,
    };
    if committed > spend_balance {
        report.insert(
            ErrorKey::Balance,
            FieldError::InsufficientBalance {
                available: spend_balance,
                asset: spend_asset.to_string(),
            },
        );
    }

    report
}

/// Whether an order with these values may be submitted
pub fn is_submittable(report: &ValidationReport, price: Decimal, amount: Decimal, total: Decimal) -> bool {
    report.is_empty() && price > Decimal::ZERO && amount > Decimal::ZERO && total > Decimal::ZERO
}
