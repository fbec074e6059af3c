//! TUI Application state management
//!
//! Wraps an `OrderForm` with focus, overlays and the submission
//! acknowledgement. Nothing here touches the terminal.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{OrderRecord, OrderSide};
use crate::form::{Field, OrderForm};
use crate::tui::event::KeyAction;

/// Slider presets selectable with keys 1..5
pub const SLIDER_PRESETS: [u8; 5] = [0, 25, 50, 75, 100];

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Side,
    Input(Field),
    Slider,
    Submit,
}

/// Tab order of the form
const FOCUS_ORDER: [Focus; 6] = [
    Focus::Side,
    Focus::Input(Field::Price),
    Focus::Input(Field::Amount),
    Focus::Input(Field::Total),
    Focus::Slider,
    Focus::Submit,
];

/// TUI Application state
pub struct TuiApp {
    /// The order form being edited
    pub form: OrderForm,
    /// Currently focused element
    pub focus: Focus,
    /// Blocking acknowledgement shown after a submission
    pub modal: Option<String>,
    /// Show help overlay
    pub show_help: bool,
    /// Is the app running
    pub running: bool,
    /// Most recent accepted order
    pub last_order: Option<OrderRecord>,
    /// Orders accepted this session
    pub submitted_count: usize,
}

impl TuiApp {
    /// Create a new TUI app with focus on the price input
    pub fn new(form: OrderForm) -> Self {
        Self {
            form,
            focus: Focus::Input(Field::Price),
            modal: None,
            show_help: false,
            running: true,
            last_order: None,
            submitted_count: 0,
        }
    }

    /// Check if app should continue running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    pub fn next_focus(&mut self) {
        let idx = self.focus_index();
        self.focus = FOCUS_ORDER[(idx + 1) % FOCUS_ORDER.len()];
    }

    pub fn prev_focus(&mut self) {
        let idx = self.focus_index();
        self.focus = FOCUS_ORDER[(idx + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    fn focus_index(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    /// Switch tabs; selecting the active tab again is a no-op
    pub fn select_side(&mut self, side: OrderSide) {
        if self.form.side() != side {
            self.form.switch_side(side);
        }
    }

    /// Submit the form and raise the acknowledgement
    pub fn submit(&mut self) {
        match self.form.submit() {
            Some(record) => {
                self.modal = Some(record.acknowledgement());
                self.last_order = Some(record);
                self.submitted_count += 1;
            }
            None => debug!("Submit control is disabled"),
        }
    }

    /// Apply a key action in the context of the current focus
    pub fn handle_action(&mut self, action: KeyAction) {
        // The acknowledgement blocks everything until dismissed
        if self.modal.is_some() {
            match action {
                KeyAction::Confirm | KeyAction::Dismiss => self.dismiss_modal(),
                KeyAction::Quit => self.quit(),
                _ => {}
            }
            return;
        }

        if self.show_help {
            match action {
                KeyAction::Help | KeyAction::Confirm | KeyAction::Dismiss => self.show_help = false,
                KeyAction::Quit => self.quit(),
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::Dismiss => self.quit(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::NextFocus => self.next_focus(),
            KeyAction::PrevFocus => self.prev_focus(),
            KeyAction::Confirm => {
                if self.focus == Focus::Submit {
                    self.submit();
                } else {
                    self.next_focus();
                }
            }
            KeyAction::Left => match self.focus {
                Focus::Side => self.select_side(OrderSide::Buy),
                Focus::Slider => self.form.step_slider(-1),
                _ => {}
            },
            KeyAction::Right => match self.focus {
                Focus::Side => self.select_side(OrderSide::Sell),
                Focus::Slider => self.form.step_slider(1),
                _ => {}
            },
            KeyAction::Backspace => {
                if let Focus::Input(field) = self.focus {
                    self.form.backspace(field);
                }
            }
            KeyAction::Char(c) => self.handle_char(c),
            KeyAction::None => {}
        }
    }

    fn handle_char(&mut self, c: char) {
        match self.focus {
            Focus::Input(field) => {
                let mut buf = [0u8; 4];
                self.form.type_text(field, c.encode_utf8(&mut buf));
            }
            Focus::Side => match c.to_ascii_lowercase() {
                'b' => self.select_side(OrderSide::Buy),
                's' => self.select_side(OrderSide::Sell),
                'q' => self.quit(),
                _ => {}
            },
            Focus::Slider => match c {
                '1'..='5' => {
                    let idx = (c as u8 - b'1') as usize;
                    self.form.set_slider(Decimal::from(SLIDER_PRESETS[idx]));
                }
                'q' => self.quit(),
                _ => {}
            },
            Focus::Submit => {
                if c == 'q' {
                    self.quit();
                }
            }
        }
    }
}
