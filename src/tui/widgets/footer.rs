//! Footer status bar widget
//!
//! Key hints for the focused element plus the session order count.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{Focus, TuiApp};
use crate::tui::theme::THEME;

/// Render the footer status bar
pub fn render_footer(f: &mut Frame, area: Rect, app: &TuiApp) {
    let hint = match app.focus {
        Focus::Side => "←/→ b/s switch side",
        Focus::Input(_) => "type digits  ⌫ delete",
        Focus::Slider => "←/→ ±1%  1-5 presets",
        Focus::Submit => "Enter place order",
    };

    let mut spans = vec![
        Span::styled(" Tab", THEME.highlight_style()),
        Span::raw(" next  "),
        Span::styled(hint, THEME.inactive_style()),
        Span::raw("  "),
        Span::styled("F1", THEME.highlight_style()),
        Span::raw(" help  "),
        Span::styled("Esc", THEME.highlight_style()),
        Span::raw(" quit"),
    ];

    if app.submitted_count > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{} placed]", app.submitted_count),
            THEME.border_style(true),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
