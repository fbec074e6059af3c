pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod form;
pub mod tui;
pub mod validation;

pub use adapters::{LogOrderSink, MemoryOrderSink, StaticBalances, StaticLimits};
pub use config::AppConfig;
pub use domain::{Market, OrderLimits, OrderRecord, OrderSide, Precision, Range};
pub use error::{FormError, Result};
pub use exchange::{BalanceSource, LimitSource, OrderSink};
pub use form::{EventOutcome, FeeQuote, Field, FormEvent, FormSettings, FormState, OrderForm};
pub use validation::{ErrorKey, FieldError, ValidationReport};
