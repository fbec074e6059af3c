//! Place-order button

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{Focus, TuiApp};
use crate::tui::theme::THEME;

pub fn render_submit(f: &mut Frame, area: Rect, app: &TuiApp) {
    let side = app.form.side();
    let enabled = app.form.is_valid();
    let focused = app.focus == Focus::Submit;

    let mut style = THEME.button_style(side, enabled);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let button = Paragraph::new(format!("Place {} order", side.as_str()))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(THEME.border_style(focused)),
        );

    f.render_widget(button, area);
}
