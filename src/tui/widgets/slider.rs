//! Percentage-of-balance slider with preset marks

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::app::{Focus, TuiApp, SLIDER_PRESETS};
use crate::tui::theme::THEME;

pub fn render_slider(f: &mut Frame, area: Rect, app: &TuiApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Gauge
        Constraint::Length(1), // Preset marks
    ])
    .split(area);

    let percent = app.form.state().slider_display();
    let focused = app.focus == Focus::Slider;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" % of {} ", app.form.spend_asset()))
                .title_style(THEME.title_style())
                .borders(Borders::ALL)
                .border_style(THEME.border_style(focused)),
        )
        .gauge_style(THEME.gauge_style())
        .ratio(f64::from(percent.min(100)) / 100.0)
        .label(format!("{percent}%"));
    f.render_widget(gauge, chunks[0]);

    let mut marks = Vec::with_capacity(SLIDER_PRESETS.len() * 2);
    for (i, mark) in SLIDER_PRESETS.iter().enumerate() {
        let style = if *mark == percent {
            THEME.highlight_style().add_modifier(Modifier::BOLD)
        } else {
            THEME.inactive_style()
        };
        marks.push(Span::styled(format!("[{}] {mark}%", i + 1), style));
        marks.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(marks)), chunks[1]);
}
