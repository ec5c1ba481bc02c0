//! Key translation layer.
//!
//! Keeps key handling separate from app behavior. Keys that have no binding
//! in Edit, Command or Search mode fall through to text input.

use crate::tui::app::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Cancel,
    EnterEdit,
    CommitEdit,
    EnterCommand,
    ExecuteCommand,
    EnterSearch,
    CommitSearch,
    ShowHelp,
    /// Plain click on the cursor cell.
    Select,
    /// Ctrl-click on the cursor cell.
    ToggleSelect,
    Copy,
    Cut,
    Paste,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ClearFilter,
    Move(i32, i32),
    Page(i32),
    HomeCol,
    EndCol,
}

pub const STATUS_HINT: &str =
    "hjkl:move  i:edit  space:select  m:multi  y/d/p:copy/cut/paste  b/I/u:format  /:search  :cmd  ?:help";

/// Translate a key event to an action for the current mode.
///
/// Returns `None` if the key has no binding in the current context.
pub fn translate(mode: Mode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match mode {
        Mode::Normal => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(0, -1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(0, 1)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(-1, 0)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(1, 0)),
            KeyCode::Tab => Some(Action::Move(1, 0)),
            KeyCode::BackTab => Some(Action::Move(-1, 0)),
            KeyCode::PageUp => Some(Action::Page(-1)),
            KeyCode::PageDown => Some(Action::Page(1)),
            KeyCode::Home => Some(Action::HomeCol),
            KeyCode::End => Some(Action::EndCol),

            KeyCode::Char(' ') if ctrl => Some(Action::ToggleSelect),
            KeyCode::Char(' ') => Some(Action::Select),
            KeyCode::Char('m') => Some(Action::ToggleSelect),
            KeyCode::Enter | KeyCode::Char('i') => Some(Action::EnterEdit),
            KeyCode::Char(':') => Some(Action::EnterCommand),
            KeyCode::Char('/') => Some(Action::EnterSearch),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('c') if ctrl => Some(Action::Copy),
            KeyCode::Char('x') if ctrl => Some(Action::Cut),
            KeyCode::Char('v') if ctrl => Some(Action::Paste),
            KeyCode::Char('y') => Some(Action::Copy),
            KeyCode::Char('d') => Some(Action::Cut),
            KeyCode::Char('p') => Some(Action::Paste),
            KeyCode::Char('b') => Some(Action::ToggleBold),
            KeyCode::Char('I') => Some(Action::ToggleItalic),
            KeyCode::Char('u') => Some(Action::ToggleUnderline),
            KeyCode::Char('F') => Some(Action::ClearFilter),
            _ => None,
        },

        Mode::Edit => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::CommitEdit),
            _ => None,
        },

        Mode::Command => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::ExecuteCommand),
            _ => None,
        },

        Mode::Search => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::CommitSearch),
            _ => None,
        },
    }
}
