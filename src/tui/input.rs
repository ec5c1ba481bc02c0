use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use std::io;

use super::actions::{
    ApplyResult, apply_action, handle_command_text, handle_edit_text, handle_search_text,
};
use super::app::{App, Mode};
use super::keymap::translate;
use super::ui;

fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.help_modal || app.mode != Mode::Normal {
        return;
    }

    let [_formula_area, grid_area, _status_area] = ui::split_main_chunks(terminal_area);
    if let Some((view_row, col)) = ui::grid_cell_at(app, grid_area, mouse.column, mouse.row) {
        let modified = mouse
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        app.click_at(view_row, col, modified);
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.help_modal {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                        app.help_modal = false;
                    }
                    continue;
                }

                if let Some(action) = translate(app.mode, key) {
                    if apply_action(app, action) == ApplyResult::Quit {
                        return Ok(());
                    }
                    continue;
                }

                match app.mode {
                    Mode::Edit => handle_edit_text(app, key),
                    Mode::Command => handle_command_text(app, key),
                    Mode::Search => handle_search_text(app, key),
                    Mode::Normal => {}
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(app, Rect::new(0, 0, size.width, size.height), mouse);
            }
            _ => {}
        }
    }
}
