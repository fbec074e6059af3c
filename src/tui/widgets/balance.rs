//! Available balance line and the insufficient-balance message

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::TuiApp;
use crate::tui::theme::THEME;

/// Render "Available: 100 USDT" for the asset the current side spends
pub fn render_balance(f: &mut Frame, area: Rect, app: &TuiApp) {
    let line = Line::from(vec![
        Span::styled(" Available: ", THEME.inactive_style()),
        Span::styled(
            format!("{} {}", app.form.spend_balance().normalize(), app.form.spend_asset()),
            THEME.text_style(),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Render the balance error, if any, apart from the field errors
pub fn render_balance_error(f: &mut Frame, area: Rect, app: &TuiApp) {
    let report = app.form.validation();
    if let Some(error) = report.balance_error() {
        let paragraph = Paragraph::new(Span::styled(error.to_string(), THEME.error_style()))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}
