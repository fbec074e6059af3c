use rust_decimal::Decimal;

use crate::domain::{OrderLimits, OrderRecord};

/// Read-only view of the account's available balances.
///
/// Backed by static configuration here; a live deployment would query an
/// account service.
pub trait BalanceSource: Send + Sync {
    /// Available quantity of `asset`; unknown assets have zero balance.
    fn available(&self, asset: &str) -> Decimal;
}

/// Read-only exchange rules for order price and amount.
pub trait LimitSource: Send + Sync {
    fn limits(&self) -> OrderLimits;
}

/// Destination for submitted orders.
///
/// Submission cannot fail at this seam; an implementation that talks to a
/// real exchange reports its own failures out of band.
#[cfg_attr(test, mockall::automock)]
pub trait OrderSink: Send + Sync {
    fn submit(&self, order: &OrderRecord);
}
