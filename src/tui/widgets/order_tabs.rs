//! Buy/Sell tab bar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::domain::OrderSide;
use crate::tui::app::{Focus, TuiApp};
use crate::tui::theme::THEME;

pub fn render_order_tabs(f: &mut Frame, area: Rect, app: &TuiApp) {
    let side = app.form.side();
    let selected = match side {
        OrderSide::Buy => 0,
        OrderSide::Sell => 1,
    };

    let block = Block::default()
        .title(format!(" {} ", app.form.settings().market.symbol()))
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style(app.focus == Focus::Side));

    let tabs = Tabs::new(vec!["   BUY   ", "   SELL   "])
        .select(selected)
        .style(THEME.inactive_style())
        .highlight_style(
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(THEME.side_color(side))
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(block);

    f.render_widget(tabs, area);
}
