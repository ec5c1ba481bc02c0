//! Application state and logic.
//!
//! [`App`] wraps a [`Document`] with everything the terminal front end needs
//! on top of it: cursor, viewport, edit/command buffers and the status line.
//! The cursor row is a position in the *visible* rows, which differ from the
//! grid rows while a filter is active.

use gridpad_core::storage::write_markdown;
use gridpad_core::{Command, Coord, Document, GRID_SIZE};
use std::path::PathBuf;

/// Modal editing state for the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Navigate the grid, select cells, run single-key commands.
    Normal,
    /// Edit the contents of the current cell.
    Edit,
    /// Enter a command line (`:sort 3`).
    Command,
    /// Type a search query; highlights update on every keystroke.
    Search,
}

pub struct App {
    pub doc: Document,
    /// Cursor position as (visible row index, column)
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub viewport_row: usize,
    pub viewport_col: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    pub mode: Mode,
    pub edit_buffer: String,
    /// Cursor position within edit buffer (byte offset)
    pub edit_cursor: usize,
    pub command_buffer: String,
    pub command_cursor: usize,
    pub search_buffer: String,
    pub search_cursor: usize,
    pub status_message: String,
    pub col_width: usize,
    pub help_modal: bool,
}

impl App {
    pub fn new(col_width: usize) -> Self {
        App {
            doc: Document::new(),
            cursor_row: 0,
            cursor_col: 0,
            viewport_row: 0,
            viewport_col: 0,
            visible_rows: 20,
            visible_cols: 8,
            mode: Mode::Normal,
            edit_buffer: String::new(),
            edit_cursor: 0,
            command_buffer: String::new(),
            command_cursor: 0,
            search_buffer: String::new(),
            search_cursor: 0,
            status_message: String::new(),
            col_width,
            help_modal: false,
        }
    }

    /// Grid rows in display order.
    pub fn display_rows(&self) -> Vec<usize> {
        self.doc.visible_rows()
    }

    /// Grid coordinate under a visible position.
    pub fn coord_at(&self, view_row: usize, col: usize) -> Option<Coord> {
        let coord = Coord::new(self.doc.source_row(view_row)?, col);
        coord.in_bounds().then_some(coord)
    }

    /// Grid coordinate under the cursor. None when a filter matched nothing.
    pub fn current_coord(&self) -> Option<Coord> {
        self.coord_at(self.cursor_row, self.cursor_col)
    }

    /// Move cursor by delta, clamping to the visible rows and the grid width.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let max_row = self.display_rows().len().saturating_sub(1) as i32;
        self.cursor_col = (self.cursor_col as i32 + dx).clamp(0, GRID_SIZE as i32 - 1) as usize;
        self.cursor_row = (self.cursor_row as i32 + dy).clamp(0, max_row) as usize;
        self.update_viewport();
    }

    /// Pull the cursor back inside the visible rows after they change.
    pub fn clamp_cursor(&mut self) {
        self.move_cursor(0, 0);
    }

    /// Update viewport to keep cursor visible
    pub fn update_viewport(&mut self) {
        if self.cursor_col < self.viewport_col {
            self.viewport_col = self.cursor_col;
        } else if self.cursor_col >= self.viewport_col + self.visible_cols {
            self.viewport_col = self.cursor_col + 1 - self.visible_cols;
        }

        if self.cursor_row < self.viewport_row {
            self.viewport_row = self.cursor_row;
        } else if self.cursor_row >= self.viewport_row + self.visible_rows {
            self.viewport_row = self.cursor_row + 1 - self.visible_rows;
        }
    }

    pub fn enter_edit_mode(&mut self) {
        let Some(coord) = self.current_coord() else {
            self.status_message = "Error: No row to edit".to_string();
            return;
        };
        self.edit_buffer = self.doc.cell_text(coord).to_string();
        self.edit_cursor = self.edit_buffer.len();
        self.mode = Mode::Edit;
    }

    /// Commit the current edit, the equivalent of the cell losing focus.
    pub fn commit_edit(&mut self) {
        if let Some(coord) = self.current_coord() {
            let text = std::mem::take(&mut self.edit_buffer);
            self.run(Command::SetCell { coord, text });
        }
        self.mode = Mode::Normal;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
    }

    /// Click on the cursor cell.
    pub fn click_current(&mut self, modified: bool) {
        if let Some(coord) = self.current_coord() {
            self.run(Command::Click { coord, modified });
        }
    }

    /// Click on a visible cell, moving the cursor there.
    pub fn click_at(&mut self, view_row: usize, col: usize, modified: bool) {
        if self.coord_at(view_row, col).is_none() {
            return;
        }
        self.cursor_row = view_row;
        self.cursor_col = col;
        self.update_viewport();
        self.click_current(modified);
    }

    /// Execute a document command, reporting the outcome in the status bar.
    pub fn run(&mut self, command: Command) {
        self.status_message = match self.doc.execute(command) {
            Ok(message) => message,
            Err(e) => format!("Error: {}", e),
        };
        self.clamp_cursor();
    }

    pub fn enter_search_mode(&mut self) {
        self.search_buffer = self.doc.search_query.clone();
        self.search_cursor = self.search_buffer.len();
        self.mode = Mode::Search;
    }

    /// Recompute highlights for the query being typed.
    pub fn update_search(&mut self) {
        let n = self.doc.search(&self.search_buffer);
        self.status_message = format!("{} match(es)", n);
    }

    pub fn cancel_search(&mut self) {
        self.doc.clear_search();
        self.search_buffer.clear();
        self.search_cursor = 0;
        self.status_message.clear();
        self.mode = Mode::Normal;
    }

    fn export(&mut self, path: &str) {
        let path = PathBuf::from(path);
        self.status_message = match write_markdown(&path, &self.doc) {
            Ok(()) => {
                self.doc.modified = false;
                format!("Exported to {}", path.display())
            }
            Err(e) => format!("Error: {}", e),
        };
    }

    /// Execute the command line. Returns true if the app should quit.
    pub fn execute_command(&mut self) -> bool {
        let cmd = self.command_buffer.trim().to_string();
        self.command_buffer.clear();
        self.command_cursor = 0;
        self.mode = Mode::Normal;

        let (word, args) = match cmd.split_once(' ') {
            Some((w, a)) => (w, Some(a.trim())),
            None => (cmd.as_str(), None),
        };

        match word {
            "q!" => return true,
            "q" | "quit" => {
                if !self.doc.modified {
                    return true;
                }
                self.status_message =
                    "Error: Unexported changes (:w FILE to export, :q! to discard)".to_string();
            }
            "help" | "h" => self.help_modal = true,
            "w" | "export" => match args {
                Some(path) if !path.is_empty() => self.export(path),
                _ => self.status_message = "Usage: :w <file.md>".to_string(),
            },
            "" => {}
            _ => match cmd.parse::<Command>() {
                Ok(command) => self.run(command),
                Err(e) => self.status_message = format!("Error: {}", e),
            },
        }
        false
    }

    /// Short description of the active filter, for the status bar.
    pub fn filter_summary(&self) -> Option<String> {
        self.doc
            .filter
            .as_ref()
            .map(|v| format!("filter: col {} ~ \"{}\" ({} rows)", v.col, v.needle, v.len()))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(app: &mut App, line: &str) -> bool {
        app.command_buffer = line.to_string();
        app.execute_command()
    }

    #[test]
    fn test_edit_commit_writes_cell() {
        let mut app = App::default();
        app.move_cursor(2, 1);
        app.enter_edit_mode();
        app.edit_buffer.push_str("hi");
        app.commit_edit();
        assert_eq!(app.doc.cell_text(Coord::new(1, 2)), "hi");
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_invalid_sort_reports_error() {
        let mut app = App::default();
        assert!(!command(&mut app, "sort 30"));
        assert!(app.status_message.starts_with("Error:"));
    }

    #[test]
    fn test_quit_command() {
        let mut app = App::default();
        assert!(command(&mut app, "q"));
    }

    #[test]
    fn test_quit_refuses_unexported_changes() {
        let mut app = App::default();
        command(&mut app, "set A0 draft");
        assert!(!command(&mut app, "q"));
        assert!(app.status_message.starts_with("Error:"));
        assert!(command(&mut app, "q!"));

        let path = std::env::temp_dir().join("gridpad_quit_after_export_test.md");
        command(&mut app, &format!("w {}", path.display()));
        assert!(!app.doc.modified);
        assert!(command(&mut app, "quit"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_filter_maps_cursor_to_source_rows() {
        let mut app = App::default();
        app.doc.set_cell(Coord::new(4, 0), "match").unwrap();
        app.doc.set_cell(Coord::new(9, 0), "match too").unwrap();
        app.move_cursor(0, 20);
        command(&mut app, "filter 0 match");

        // Cursor was clamped into the two visible rows.
        assert_eq!(app.cursor_row, 1);
        assert_eq!(app.current_coord(), Some(Coord::new(9, 0)));

        app.click_at(0, 3, false);
        assert_eq!(app.doc.selection.members(), &[Coord::new(4, 3)]);
    }

    #[test]
    fn test_empty_filter_has_no_current_cell() {
        let mut app = App::default();
        command(&mut app, "filter 0 nothing-here");
        assert_eq!(app.current_coord(), None);
        app.enter_edit_mode();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_search_updates_per_keystroke() {
        let mut app = App::default();
        app.doc.set_cell(Coord::new(0, 0), "apple").unwrap();
        app.doc.set_cell(Coord::new(0, 1), "apricot").unwrap();
        app.enter_search_mode();
        app.search_buffer.push('a');
        app.update_search();
        assert_eq!(app.doc.highlights.len(), 2);
        app.search_buffer.push_str("pp");
        app.update_search();
        assert_eq!(app.doc.highlights, vec![Coord::new(0, 0)]);

        app.cancel_search();
        assert!(app.doc.highlights.is_empty());
    }
}
