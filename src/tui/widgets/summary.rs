//! Fee and net-receive lines

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::fees::fee_rate_percent;
use crate::tui::app::TuiApp;
use crate::tui::theme::THEME;

/// Render the fee and "You will receive" lines, coloured by side
pub fn render_summary(f: &mut Frame, area: Rect, app: &TuiApp) {
    let settings = app.form.settings();
    let side = app.form.side();
    let quote = app.form.fee_quote();
    let digits = settings.precision.receive_digits(side);
    let asset = app.form.receive_asset();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" Fee ({}%): ", fee_rate_percent(settings.fee_rate)),
                THEME.inactive_style(),
            ),
            Span::styled(format!("{} {asset}", quote.fee_display(digits)), THEME.text_style()),
        ]),
        Line::from(vec![
            Span::styled(" You will receive: ", THEME.inactive_style()),
            Span::styled(
                format!("{} {asset}", quote.receive_display(digits)),
                THEME.side_style(side),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Summary ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style(false));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
