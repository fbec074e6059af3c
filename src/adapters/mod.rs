pub mod order_sink;
pub mod static_sources;

pub use order_sink::{LogOrderSink, MemoryOrderSink};
pub use static_sources::{StaticBalances, StaticLimits};
