//! Theme and color definitions for the order form
//!
//! Cyan frame, green for buying, red for selling.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::OrderSide;

/// Theme configuration for the order form
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color (cyan)
    pub border: Color,
    /// Border color of the focused element
    pub focus: Color,
    /// Title color
    pub title: Color,
    /// Buy side color (green)
    pub buy: Color,
    /// Sell side color (red)
    pub sell: Color,
    /// Validation message color
    pub error: Color,
    /// Highlight/accent color (yellow)
    pub highlight: Color,
    /// Inactive/dim color
    pub inactive: Color,
    /// Normal text color
    pub text: Color,
    /// Slider filled color
    pub progress_filled: Color,
    /// Slider empty color
    pub progress_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            focus: Color::Yellow,
            title: Color::Cyan,
            buy: Color::Green,
            sell: Color::Red,
            error: Color::LightRed,
            highlight: Color::Yellow,
            inactive: Color::DarkGray,
            text: Color::White,
            progress_filled: Color::Blue,
            progress_empty: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Border style, brighter when the element has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn side_color(&self, side: OrderSide) -> Color {
        match side {
            OrderSide::Buy => self.buy,
            OrderSide::Sell => self.sell,
        }
    }

    pub fn side_style(&self, side: OrderSide) -> Style {
        Style::default().fg(self.side_color(side))
    }

    /// Filled button style for the submit control
    pub fn button_style(&self, side: OrderSide, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(self.side_color(side))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.inactive).add_modifier(Modifier::DIM)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn gauge_style(&self) -> Style {
        Style::default().fg(self.progress_filled).bg(self.progress_empty)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);
