//! Limit-order form engine
//!
//! `OrderForm` is the stateful entry point; the submodules hold the pure
//! rules it is built from.

pub mod derive;
pub mod engine;
pub mod event;
pub mod fees;
pub mod numeric;
pub mod state;

pub use engine::{FormSettings, OrderForm};
pub use event::{EventOutcome, FormEvent};
pub use fees::{quote_fee, FeeQuote};
pub use numeric::{format_number, parse_number};
pub use state::{Field, FormState};
