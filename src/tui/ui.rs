//! UI rendering

use super::app::{App, Mode};
use super::help::help_lines;
use super::keymap::STATUS_HINT;
use gridpad_core::document::CellStyle;
use gridpad_core::{Align, Coord, GRID_SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

pub(crate) const FORMULA_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 10;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const ROW_HEADER_WIDTH: u16 = 3;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORMULA_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Map a mouse position to a (visible row, column) pair.
pub(crate) fn grid_cell_at(
    app: &App,
    grid_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<(usize, usize)> {
    let inner_x = grid_area.x.saturating_add(1);
    let inner_y = grid_area.y.saturating_add(1);
    let inner_right = inner_x.saturating_add(grid_area.width.saturating_sub(2));
    let inner_bottom = inner_y.saturating_add(grid_area.height.saturating_sub(2));

    // First inner line is the column header.
    if mouse_row <= inner_y || mouse_row >= inner_bottom {
        return None;
    }
    if mouse_col < inner_x || mouse_col >= inner_right {
        return None;
    }

    let rel_row = (mouse_row - inner_y - 1) as usize;
    if rel_row >= app.visible_rows {
        return None;
    }
    let view_row = app.viewport_row + rel_row;

    let mut x = inner_x + ROW_HEADER_WIDTH + GRID_COLUMN_SPACING;
    for offset in 0..app.visible_cols {
        let col = app.viewport_col + offset;
        if col >= GRID_SIZE || x >= inner_right {
            break;
        }
        let cell_end = x.saturating_add(app.col_width as u16);
        if mouse_col >= x && mouse_col < cell_end {
            return Some((view_row, col));
        }
        x = cell_end.saturating_add(GRID_COLUMN_SPACING);
    }
    None
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = split_main_chunks(f.area());

    // Update visible dimensions based on actual size
    let grid_area = chunks[1];
    let available_width = grid_area.width.saturating_sub(ROW_HEADER_WIDTH + 2) as usize;
    let available_height = grid_area.height.saturating_sub(3) as usize; // header + borders

    app.visible_cols = (available_width / (app.col_width + 1)).max(1);
    app.visible_rows = available_height.max(1);
    app.update_viewport();

    draw_formula_bar(f, app, chunks[0]);
    draw_grid(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.help_modal {
        draw_help_modal(f);
    }
}

fn describe_style(style: &CellStyle) -> String {
    let mut parts = vec![format!("{}px", style.font_size), style.align.to_string()];
    if style.bold {
        parts.push("bold".to_string());
    }
    if style.italic {
        parts.push("italic".to_string());
    }
    if style.underline {
        parts.push("underline".to_string());
    }
    if let Some(c) = &style.color {
        parts.push(format!("color {}", c));
    }
    if let Some(c) = &style.background {
        parts.push(format!("bg {}", c));
    }
    parts.join(", ")
}

fn draw_formula_bar(f: &mut Frame, app: &App, area: Rect) {
    let coord = app.current_coord();
    let cell_name = coord.map(|c| c.to_string()).unwrap_or_else(|| "--".to_string());

    let content = match app.mode {
        Mode::Edit => {
            let (before, after) = app.edit_buffer.split_at(app.edit_cursor);
            format!("{}: {}│{}", cell_name, before, after)
        }
        Mode::Command => {
            let (before, after) = app.command_buffer.split_at(app.command_cursor);
            format!(":{}│{}", before, after)
        }
        Mode::Search => {
            let (before, after) = app.search_buffer.split_at(app.search_cursor);
            format!("/{}│{}", before, after)
        }
        Mode::Normal => match coord {
            Some(c) => {
                let text = app.doc.cell_text(c);
                let style = describe_style(app.doc.styles.get(c));
                if text.is_empty() {
                    format!("{} [{}]: (empty)", cell_name, style)
                } else {
                    format!("{} [{}]: {}", cell_name, style, text)
                }
            }
            None => "(no rows match the filter)".to_string(),
        },
    };

    let (title, color) = match app.mode {
        Mode::Edit => (" Edit ", Color::Yellow),
        Mode::Command => (" Command ", Color::Cyan),
        Mode::Search => (" Search ", Color::Green),
        Mode::Normal => (" Cell ", Color::White),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color));

    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Terminal style for a cell's own formatting.
fn format_style(style: &CellStyle) -> Style {
    let mut out = Style::default();
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.underline {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    if let Some(fg) = style.color.as_deref().and_then(|c| c.parse::<Color>().ok()) {
        out = out.fg(fg);
    }
    if let Some(bg) = style.background.as_deref().and_then(|c| c.parse::<Color>().ok()) {
        out = out.bg(bg);
    }
    out
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left | Align::Justify => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let last_col = (app.viewport_col + app.visible_cols).min(GRID_SIZE);
    let header_style = Style::default().fg(Color::DarkGray);
    let active_header = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut header_cells = vec![Cell::from(" ")];
    for col in app.viewport_col..last_col {
        let style = if col == app.cursor_col {
            active_header
        } else {
            header_style
        };
        header_cells.push(Cell::from(col.to_string()).style(style));
    }
    let header = Row::new(header_cells).height(1);

    let display_rows = app.display_rows();
    let mut rows = Vec::new();
    for (view_row, &row) in display_rows
        .iter()
        .enumerate()
        .skip(app.viewport_row)
        .take(app.visible_rows)
    {
        let row_style = if view_row == app.cursor_row {
            active_header
        } else {
            header_style
        };
        let mut cells = vec![Cell::from(Coord::row_label(row)).style(row_style)];

        for col in app.viewport_col..last_col {
            let coord = Coord::new(row, col);
            let cell_style = app.doc.styles.get(coord);
            let mut style = format_style(cell_style);

            if app.doc.is_highlighted(coord) {
                style = style.fg(Color::Black).bg(Color::Yellow);
            }
            if app.doc.is_selected(coord) {
                style = style.fg(Color::White).bg(Color::Blue);
            }
            if view_row == app.cursor_row && col == app.cursor_col {
                style = style.fg(Color::Black).bg(Color::Cyan);
            }

            let line = Line::from(app.doc.cell_text(coord).to_string())
                .alignment(alignment(cell_style.align));
            cells.push(Cell::from(line).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    for _ in app.viewport_col..last_col {
        widths.push(Constraint::Length(app.col_width as u16));
    }

    let title = match app.filter_summary() {
        Some(summary) => format!(" Gridpad ({}) ", summary),
        None => " Gridpad ".to_string(),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(GRID_COLUMN_SPACING);

    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.doc.selection.len();
    let mut text = if app.status_message.is_empty() {
        STATUS_HINT.to_string()
    } else {
        app.status_message.clone()
    };
    if selected > 0 {
        text = format!("[{} selected] {}", selected, text);
    }

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help_modal(f: &mut Frame) {
    let area = centered_rect(80, 80, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help (Esc to close) ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let paragraph = Paragraph::new(help_lines().join("\n"))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_style_parses_colors() {
        let style = CellStyle {
            bold: true,
            color: Some("red".to_string()),
            background: Some("#00ff00".to_string()),
            ..CellStyle::default()
        };
        let out = format_style(&style);
        assert_eq!(out.fg, Some(Color::Red));
        assert_eq!(out.bg, Some(Color::Rgb(0, 255, 0)));
        assert!(out.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unknown_color_is_ignored() {
        let style = CellStyle {
            color: Some("not-a-color".to_string()),
            ..CellStyle::default()
        };
        assert_eq!(format_style(&style).fg, None);
    }

    #[test]
    fn test_grid_cell_at_maps_first_data_cell() {
        let app = App::default();
        let area = Rect::new(0, 3, 120, 30);
        // Border (1) + row header (3) + spacing (1).
        let first_x = 1 + ROW_HEADER_WIDTH + GRID_COLUMN_SPACING;
        assert_eq!(grid_cell_at(&app, area, first_x, 3 + 2), Some((0, 0)));
        // Header line is not a cell.
        assert_eq!(grid_cell_at(&app, area, first_x, 3 + 1), None);
        // Row header is not a cell.
        assert_eq!(grid_cell_at(&app, area, 2, 3 + 2), None);
    }
}
