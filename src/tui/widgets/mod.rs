//! TUI Widget components
//!
//! One module per section of the order form.

pub mod balance;
pub mod footer;
pub mod inputs;
pub mod order_tabs;
pub mod overlays;
pub mod slider;
pub mod submit;
pub mod summary;

pub use balance::{render_balance, render_balance_error};
pub use footer::render_footer;
pub use inputs::render_input;
pub use order_tabs::render_order_tabs;
pub use overlays::{centered_rect, render_help, render_modal};
pub use slider::render_slider;
pub use submit::render_submit;
pub use summary::render_summary;
