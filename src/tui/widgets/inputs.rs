//! Numeric input boxes for Price, Amount and Total

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::Field;
use crate::tui::app::{Focus, TuiApp};
use crate::tui::theme::THEME;

/// Render one input: a bordered box with the unit on the right, and the
/// field's range error on the line below.
pub fn render_input(f: &mut Frame, area: Rect, app: &TuiApp, field: Field) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Input box
        Constraint::Length(1), // Error line
    ])
    .split(area);

    let focused = app.focus == Focus::Input(field);
    let report = app.form.validation();
    let error = report.field_error(field);

    let border_style = if error.is_some() && !focused {
        THEME.error_style()
    } else {
        THEME.border_style(focused)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    let text = app.form.text(field);
    f.render_widget(Paragraph::new(text).style(THEME.text_style()), inner);

    let unit = field.unit(&app.form.settings().market);
    f.render_widget(
        Paragraph::new(Span::styled(unit, THEME.inactive_style())).alignment(Alignment::Right),
        inner,
    );

    if focused {
        let offset = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        f.set_cursor_position((x, inner.y));
    }

    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {error}"), THEME.error_style())),
            chunks[1],
        );
    }
}
