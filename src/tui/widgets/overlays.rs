//! Help overlay and the submission acknowledgement

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::TuiApp;
use crate::tui::theme::THEME;

const HELP_LINES: [(&str, &str); 10] = [
    ("Tab / Shift-Tab", "move focus"),
    ("← / →  b / s", "switch Buy / Sell"),
    ("0-9 .", "edit the focused input"),
    ("Backspace", "delete last character"),
    ("← / → on slider", "step 1%"),
    ("1 .. 5 on slider", "0 / 25 / 50 / 75 / 100%"),
    ("Enter", "place order / next field"),
    ("F1", "toggle this help"),
    ("q", "quit (outside inputs)"),
    ("Esc / Ctrl-C", "quit"),
];

/// Centre a `width` x `height` box inside `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<18}"), THEME.highlight_style()),
                Span::styled(*what, THEME.text_style()),
            ])
        })
        .collect();

    let popup = centered_rect(48, HELP_LINES.len() as u16 + 2, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .title_style(THEME.title_style())
                .borders(Borders::ALL)
                .border_style(THEME.border_style(true)),
        ),
        popup,
    );
}

/// Blocking acknowledgement after a successful submission
pub fn render_modal(f: &mut Frame, area: Rect, app: &TuiApp) {
    let Some(message) = app.modal.as_deref() else {
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        message,
        THEME.side_style(app.form.side()),
    ))];
    if let Some(order) = &app.last_order {
        lines.push(Line::from(Span::styled(
            format!("{} {} @ {}", order.amount.normalize(), order.symbol, order.price.normalize()),
            THEME.text_style(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Enter] OK", THEME.inactive_style())));

    let popup = centered_rect(40, 6, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(THEME.border_style(true)),
            ),
        popup,
    );
}
