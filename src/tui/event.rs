//! Keyboard input for the TUI
//!
//! Raw key events are reduced to `KeyAction`s here; what an action means
//! depends on which form element has focus and is decided by `TuiApp`.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key action derived from key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move focus to the next element
    NextFocus,
    /// Move focus to the previous element
    PrevFocus,
    Left,
    Right,
    /// Enter
    Confirm,
    /// Esc
    Dismiss,
    Backspace,
    /// Printable character
    Char(char),
    /// Toggle help
    Help,
    /// No action
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                KeyAction::None
            }
            KeyCode::Char(c) => KeyAction::Char(c),
            KeyCode::Tab | KeyCode::Down => KeyAction::NextFocus,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PrevFocus,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Dismiss,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::F(1) => KeyAction::Help,
            _ => KeyAction::None,
        }
    }
}

/// Wait up to `timeout` for a key press
pub fn next_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from(key(KeyCode::Tab)), KeyAction::NextFocus);
        assert_eq!(KeyAction::from(key(KeyCode::BackTab)), KeyAction::PrevFocus);
        assert_eq!(KeyAction::from(key(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(KeyAction::from(key(KeyCode::Esc)), KeyAction::Dismiss);
        assert_eq!(KeyAction::from(key(KeyCode::F(1))), KeyAction::Help);
        assert_eq!(KeyAction::from(key(KeyCode::Char('7'))), KeyAction::Char('7'));
        assert_eq!(KeyAction::from(key(KeyCode::Home)), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyAction::from(ctrl_c), KeyAction::Quit);

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(KeyAction::from(ctrl_x), KeyAction::None);
    }

    #[test]
    fn test_shifted_char_is_text() {
        let shifted = KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT);
        assert_eq!(KeyAction::from(shifted), KeyAction::Char('B'));
    }
}
