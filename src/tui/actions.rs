use crossterm::event::{self, KeyCode, KeyModifiers};
use gridpad_core::Command;

use super::app::{App, Mode};
use super::keymap::Action;

/// Handle text editing operations on a buffer with UTF-8 aware cursor movement.
///
/// Returns true if the buffer contents changed.
fn handle_text_input(buffer: &mut String, cursor: &mut usize, key: event::KeyEvent) -> bool {
    match key.code {
        KeyCode::Left => {
            if *cursor > 0 {
                let mut new_pos = *cursor - 1;
                while new_pos > 0 && !buffer.is_char_boundary(new_pos) {
                    new_pos -= 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Right => {
            if *cursor < buffer.len() {
                let mut new_pos = *cursor + 1;
                while new_pos < buffer.len() && !buffer.is_char_boundary(new_pos) {
                    new_pos += 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buffer.len(),
        KeyCode::Backspace => {
            if *cursor > 0 {
                let mut del_start = *cursor - 1;
                while del_start > 0 && !buffer.is_char_boundary(del_start) {
                    del_start -= 1;
                }
                buffer.drain(del_start..*cursor);
                *cursor = del_start;
                return true;
            }
        }
        KeyCode::Delete => {
            if *cursor < buffer.len() {
                let mut del_end = *cursor + 1;
                while del_end < buffer.len() && !buffer.is_char_boundary(del_end) {
                    del_end += 1;
                }
                buffer.drain(*cursor..del_end);
                return true;
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                buffer.insert(*cursor, c);
                *cursor += c.len_utf8();
                return true;
            }
        }
        _ => {}
    }
    false
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Cancel => match app.mode {
            Mode::Edit => {
                app.mode = Mode::Normal;
                app.edit_buffer.clear();
                app.edit_cursor = 0;
            }
            Mode::Command => {
                app.mode = Mode::Normal;
                app.command_buffer.clear();
                app.command_cursor = 0;
            }
            Mode::Search => app.cancel_search(),
            Mode::Normal => app.doc.selection.clear(),
        },

        Action::EnterEdit => app.enter_edit_mode(),
        Action::CommitEdit => app.commit_edit(),
        Action::EnterCommand => {
            app.mode = Mode::Command;
            app.command_buffer.clear();
            app.command_cursor = 0;
        }
        Action::ExecuteCommand => {
            if app.execute_command() {
                return ApplyResult::Quit;
            }
        }
        Action::EnterSearch => app.enter_search_mode(),
        Action::CommitSearch => app.mode = Mode::Normal,
        Action::ShowHelp => app.help_modal = true,

        Action::Select => app.click_current(false),
        Action::ToggleSelect => app.click_current(true),
        Action::Copy => app.run(Command::Copy),
        Action::Cut => app.run(Command::Cut),
        Action::Paste => app.run(Command::Paste),
        Action::ToggleBold => app.run(Command::ToggleBold),
        Action::ToggleItalic => app.run(Command::ToggleItalic),
        Action::ToggleUnderline => app.run(Command::ToggleUnderline),
        Action::ClearFilter => app.run(Command::ClearFilter),

        Action::Move(dx, dy) => app.move_cursor(dx, dy),
        Action::Page(dir) => {
            let delta = app.visible_rows as i32 * dir;
            app.move_cursor(0, delta);
        }
        Action::HomeCol => app.move_cursor(-(app.cursor_col as i32), 0),
        Action::EndCol => app.move_cursor(i32::MAX / 2, 0),
    }
    ApplyResult::Continue
}

pub fn handle_edit_text(app: &mut App, key: event::KeyEvent) {
    handle_text_input(&mut app.edit_buffer, &mut app.edit_cursor, key);
}

pub fn handle_command_text(app: &mut App, key: event::KeyEvent) {
    handle_text_input(&mut app.command_buffer, &mut app.command_cursor, key);
}

/// Edit the search query and refresh highlights if it changed.
pub fn handle_search_text(app: &mut App, key: event::KeyEvent) {
    if handle_text_input(&mut app.search_buffer, &mut app.search_cursor, key) {
        app.update_search();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_text_input_handles_multibyte() {
        let mut buffer = String::new();
        let mut cursor = 0;
        assert!(handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Char('é'))));
        assert!(handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Char('x'))));
        assert!(!handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Left)));
        assert!(handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Backspace)));
        assert_eq!(buffer, "x");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_select_and_toggle_actions() {
        let mut app = App::default();
        apply_action(&mut app, Action::Select);
        apply_action(&mut app, Action::Move(1, 0));
        apply_action(&mut app, Action::ToggleSelect);
        assert_eq!(app.doc.selection.len(), 2);

        apply_action(&mut app, Action::Select);
        assert_eq!(app.doc.selection.len(), 1);

        apply_action(&mut app, Action::Cancel);
        assert!(app.doc.selection.is_empty());
    }

    #[test]
    fn test_search_text_refreshes_highlights() {
        let mut app = App::default();
        app.doc.set_cell(gridpad_core::Coord::new(2, 2), "Zebra").unwrap();
        apply_action(&mut app, Action::EnterSearch);
        handle_search_text(&mut app, key(KeyCode::Char('z')));
        assert_eq!(app.doc.highlights.len(), 1);
        handle_search_text(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.doc.highlights.len(), 26 * 26);
    }
}
