// UI and formatting module

pub mod formatters;
pub mod report;
pub mod table;

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use std::io;

// Re-export commonly used items for cleaner imports
pub use formatters::{bar_fill, format_bytes, format_uptime, progress_bar};
pub use table::Table;

/// Clear the terminal and move the cursor to the top-left corner
pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )
}
