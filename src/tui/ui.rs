//! Main UI rendering logic
//!
//! Orchestrates the layout and renders all widgets.

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::form::Field;
use crate::tui::app::TuiApp;
use crate::tui::widgets;

/// Width of the form column
const FORM_WIDTH: u16 = 52;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &TuiApp) {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(FORM_WIDTH.min(f.area().width)),
        Constraint::Fill(1),
    ])
    .areas(f.area());

    // Main vertical layout
    let chunks = Layout::vertical([
        Constraint::Length(3), // Buy/Sell tabs
        Constraint::Length(1), // Available balance
        Constraint::Length(4), // Price
        Constraint::Length(4), // Amount
        Constraint::Length(4), // Total
        Constraint::Length(4), // Slider
        Constraint::Length(4), // Fee summary
        Constraint::Length(1), // Balance error
        Constraint::Length(3), // Submit button
        Constraint::Min(0),
        Constraint::Length(1), // Footer status bar
    ])
    .split(column);

    widgets::render_order_tabs(f, chunks[0], app);
    widgets::render_balance(f, chunks[1], app);
    for (i, field) in Field::ALL.into_iter().enumerate() {
        widgets::render_input(f, chunks[2 + i], app, field);
    }
    widgets::render_slider(f, chunks[5], app);
    widgets::render_summary(f, chunks[6], app);
    widgets::render_balance_error(f, chunks[7], app);
    widgets::render_submit(f, chunks[8], app);
    widgets::render_footer(f, chunks[10], app);

    if app.show_help {
        widgets::render_help(f, f.area());
    }
    if app.modal.is_some() {
        widgets::render_modal(f, f.area(), app);
    }
}
