//! Output formatting for `limitform` commands.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Render Tabled items as a table, or "(none)" when there are none.
pub fn render_table<T: Tabled>(items: &[T]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        Table::new(items).to_string()
    }
}

/// Print a single Serialize item as pretty JSON.
pub fn print_json<T: Serialize>(item: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(item)?;
    println!("{json}");
    Ok(())
}

/// Print a section heading followed by a table.
pub fn print_section<T: Tabled>(title: &str, items: &[T]) {
    println!("{title}");
    println!("{}", render_table(items));
    println!();
}

/// Print a warning message.
pub fn print_warn(msg: &str) {
    println!("\x1b[33m{msg}\x1b[0m");
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("\x1b[31m{msg}\x1b[0m");
}
