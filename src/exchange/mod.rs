pub mod traits;

pub use traits::{BalanceSource, LimitSource, OrderSink};

#[cfg(test)]
pub use traits::MockOrderSink;
