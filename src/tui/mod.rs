//! Terminal User Interface module
//!
//! Interactive order entry form on top of `OrderForm`.

pub mod app;
pub mod event;
pub mod runner;
pub mod theme;
pub mod ui;
pub mod widgets;


pub use app::{Focus, TuiApp};
pub use event::KeyAction;
pub use runner::run_order_form;
pub use theme::Theme;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Poll interval for key events
const TICK: Duration = Duration::from_millis(100);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits.
///
/// The terminal is restored even when drawing or reading keys fails.
pub fn run_tui(app: &mut TuiApp) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, app);
    let restored = restore_terminal();
    result.and(restored)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> io::Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::render(f, app))?;

        if let Some(key) = event::next_key(TICK)? {
            app.handle_action(KeyAction::from(key));
        }
    }
    Ok(())
}
