//! Document state and logic (UI-agnostic).

mod clipboard;
mod command;
mod ops;
mod selection;
mod state;
mod style;

pub use clipboard::Clipboard;
pub use command::{COMMAND_USAGE, Command};
pub use selection::Selection;
pub use state::Document;
pub use style::{
    Align, CellStyle, DEFAULT_FONT_SIZE, StyleSheet, check_font_size, font_sizes,
};
