use super::Document;
use super::command::Command;
use crate::error::Result;
use gridpad_engine::engine::{self, Coord};

impl Document {
    /// Commit edited text into a cell.
    pub fn set_cell(&mut self, coord: Coord, text: &str) -> Result<()> {
        self.grid.set_at(coord, text)?;
        self.modified = true;
        Ok(())
    }

    /// Apply a click to the selection.
    pub fn click(&mut self, coord: Coord, modified: bool) -> Result<()> {
        self.selection.handle_click(coord, modified)?;
        Ok(())
    }

    pub fn copy(&mut self) -> Result<usize> {
        Ok(self.clipboard.copy(&self.selection, &self.grid)?)
    }

    pub fn cut(&mut self) -> Result<usize> {
        let n = self.clipboard.cut(&self.selection, &mut self.grid)?;
        if n > 0 {
            self.modified = true;
        }
        Ok(n)
    }

    pub fn paste(&mut self) -> Result<usize> {
        let n = self.clipboard.paste(&self.selection, &mut self.grid)?;
        if n > 0 {
            self.modified = true;
        }
        Ok(n)
    }

    /// Sort all rows by one column.
    ///
    /// Styles move with their rows. The filter view and search highlights
    /// refer to old row positions, so both are dropped.
    pub fn sort_by(&mut self, col: usize) -> Result<()> {
        let order = engine::sort_permutation(&self.grid, col)?;
        let sorted = engine::permute_rows(self.grid.matrix(), &order);
        self.grid.replace_all(sorted)?;
        self.styles.permute_rows(&order);
        self.filter = None;
        self.clear_search();
        self.modified = true;
        Ok(())
    }

    /// Show only rows whose `col` contains `value`. The grid is untouched.
    pub fn filter_by(&mut self, col: usize, value: &str) -> Result<usize> {
        let view = engine::filter(&self.grid, col, value)?;
        let n = view.len();
        self.filter = Some(view);
        Ok(n)
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Recompute the highlight set for `query`, replacing the previous one.
    pub fn search(&mut self, query: &str) -> usize {
        self.search_query = query.to_string();
        self.highlights = engine::search(&self.grid, query);
        self.highlights.len()
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.highlights.clear();
    }

    /// Start over with an empty sheet.
    pub fn new_file(&mut self) {
        self.grid.reset();
        self.selection.clear();
        self.styles.clear();
        self.filter = None;
        self.clear_search();
        self.modified = false;
        log::info!("Started a new sheet");
    }

    /// Apply a command.
    ///
    /// Returns a short status line on success. On error nothing has been
    /// changed.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        log::debug!("Executing {:?}", command);
        let result = self.apply(command);
        if let Err(e) = &result {
            log::warn!("Command rejected: {}", e);
        }
        result
    }

    fn apply(&mut self, command: Command) -> Result<String> {
        let selected = self.selection.len();
        let message = match command {
            Command::SetCell { coord, text } => {
                self.set_cell(coord, &text)?;
                format!("{} = {}", coord, text)
            }
            Command::Click { coord, modified } => {
                self.click(coord, modified)?;
                format!("{} cell(s) selected", self.selection.len())
            }
            Command::ClearSelection => {
                self.selection.clear();
                "Selection cleared".to_string()
            }
            Command::ToggleBold => {
                self.styles.toggle_bold(&self.selection);
                format!("Toggled bold on {} cell(s)", selected)
            }
            Command::ToggleItalic => {
                self.styles.toggle_italic(&self.selection);
                format!("Toggled italic on {} cell(s)", selected)
            }
            Command::ToggleUnderline => {
                self.styles.toggle_underline(&self.selection);
                format!("Toggled underline on {} cell(s)", selected)
            }
            Command::SetColor(color) => {
                self.styles.set_color(&self.selection, &color);
                format!("Color {} on {} cell(s)", color, selected)
            }
            Command::SetBackground(color) => {
                self.styles.set_background(&self.selection, &color);
                format!("Background {} on {} cell(s)", color, selected)
            }
            Command::SetAlign(align) => {
                self.styles.set_align(&self.selection, align);
                format!("Aligned {} cell(s) {}", selected, align)
            }
            Command::SetFontSize(px) => {
                self.styles.set_font_size(&self.selection, px)?;
                format!("Font size {}px on {} cell(s)", px, selected)
            }
            Command::Copy => format!("Copied {} cell(s)", self.copy()?),
            Command::Cut => format!("Cut {} cell(s)", self.cut()?),
            Command::Paste => format!("Pasted into {} cell(s)", self.paste()?),
            Command::SortBy(col) => {
                self.sort_by(col)?;
                format!("Sorted by column {}", col)
            }
            Command::FilterBy { col, value } => {
                let n = self.filter_by(col, &value)?;
                format!("{} row(s) with column {} containing '{}'", n, col, value)
            }
            Command::ClearFilter => {
                self.clear_filter();
                "Filter cleared".to_string()
            }
            Command::Search(query) => {
                let n = self.search(&query);
                format!("{} match(es) for '{}'", n, query)
            }
            Command::NewFile => {
                self.new_file();
                "New sheet".to_string()
            }
        };
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Align;
    use crate::error::GridpadError;
    use gridpad_engine::GridError;
    use gridpad_engine::engine::GRID_SIZE;

    fn run(doc: &mut Document, line: &str) -> String {
        doc.execute(line.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_set_and_read_back() {
        let mut doc = Document::new();
        run(&mut doc, "set B2 hello");
        assert_eq!(doc.cell_text(Coord::new(1, 2)), "hello");
        assert!(doc.modified);
    }

    #[test]
    fn test_sort_reports_invalid_column_without_mutation() {
        let mut doc = Document::new();
        run(&mut doc, "set A0 b");
        run(&mut doc, "set B0 a");
        let before = doc.grid.clone();

        let err = doc.execute(Command::SortBy(30)).unwrap_err();
        assert!(matches!(
            err,
            GridpadError::Grid(GridError::InvalidColumn(_))
        ));
        assert_eq!(doc.grid, before);
    }

    #[test]
    fn test_sort_moves_styles_and_drops_view() {
        let mut doc = Document::new();
        for r in 0..GRID_SIZE {
            doc.set_cell(Coord::new(r, 0), &(100 - r).to_string()).unwrap();
        }
        run(&mut doc, "select A1");
        run(&mut doc, "bold");
        run(&mut doc, "filter 0 9");
        run(&mut doc, "search 99");
        assert!(doc.filter.is_some());
        assert_eq!(doc.highlights.len(), 1);

        run(&mut doc, "sort 0");
        assert_eq!(doc.cell_text(Coord::new(0, 0)), "75");
        assert_eq!(doc.cell_text(Coord::new(25, 0)), "100");
        // Row A (100) went to the bottom, taking its bold cell with it.
        assert!(doc.styles.get(Coord::new(25, 1)).bold);
        assert!(doc.filter.is_none());
        assert!(doc.highlights.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_grid() {
        let mut doc = Document::new();
        run(&mut doc, "set A0 abc");
        run(&mut doc, "set B0 xyz");
        run(&mut doc, "set C0 zab");
        let before = doc.grid.clone();

        run(&mut doc, "filter 0 ab");
        assert_eq!(doc.visible_rows(), vec![0, 2]);
        assert_eq!(doc.grid, before);

        assert_eq!(doc.source_row(1), Some(2));
        assert_eq!(doc.source_row(2), None);

        run(&mut doc, "unfilter");
        assert_eq!(doc.visible_rows().len(), GRID_SIZE);
        assert_eq!(doc.source_row(2), Some(2));
        assert_eq!(doc.source_row(GRID_SIZE), None);
    }

    #[test]
    fn test_search_replaces_highlights() {
        let mut doc = Document::new();
        run(&mut doc, "set A0 Apple");
        run(&mut doc, "set C5 pineapple");
        run(&mut doc, "search APPLE");
        assert!(doc.is_highlighted(Coord::new(0, 0)));
        assert!(doc.is_highlighted(Coord::new(2, 5)));

        run(&mut doc, "search pine");
        assert!(!doc.is_highlighted(Coord::new(0, 0)));
        assert_eq!(doc.highlights, vec![Coord::new(2, 5)]);

        run(&mut doc, "search");
        assert_eq!(doc.highlights.len(), GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn test_clipboard_through_commands() {
        let mut doc = Document::new();
        run(&mut doc, "set A0 one");
        run(&mut doc, "set A1 two");
        run(&mut doc, "select A0");
        run(&mut doc, "toggle A1");
        assert_eq!(run(&mut doc, "cut"), "Cut 2 cell(s)");

        run(&mut doc, "select D4");
        run(&mut doc, "toggle D5");
        run(&mut doc, "paste");
        assert_eq!(doc.cell_text(Coord::new(3, 4)), "one");
        assert_eq!(doc.cell_text(Coord::new(3, 5)), "two");
        assert_eq!(doc.cell_text(Coord::new(0, 0)), "");
        assert_eq!(doc.cell_text(Coord::new(0, 1)), "");
    }

    #[test]
    fn test_formatting_applies_to_selection_only() {
        let mut doc = Document::new();
        run(&mut doc, "select B1");
        run(&mut doc, "toggle B2");
        run(&mut doc, "underline");
        run(&mut doc, "color blue");
        run(&mut doc, "align right");
        run(&mut doc, "size 20");

        for coord in [Coord::new(1, 1), Coord::new(1, 2)] {
            let style = doc.styles.get(coord);
            assert!(style.underline);
            assert_eq!(style.color.as_deref(), Some("blue"));
            assert_eq!(style.font_size, 20);
            assert_eq!(style.align, Align::Right);
        }
        assert!(doc.styles.get(Coord::new(1, 3)).is_default());
    }

    #[test]
    fn test_rejected_font_size_keeps_styles() {
        let mut doc = Document::new();
        run(&mut doc, "select A0");
        assert!(doc.execute(Command::SetFontSize(7)).is_err());
        assert!(doc.styles.is_empty());
    }

    #[test]
    fn test_new_file_resets_everything() {
        let mut doc = Document::new();
        run(&mut doc, "set A0 x");
        run(&mut doc, "select A0");
        run(&mut doc, "italic");
        run(&mut doc, "copy");
        run(&mut doc, "filter 0 x");
        run(&mut doc, "search x");

        run(&mut doc, "new");
        assert!(doc.grid.is_empty());
        assert!(doc.selection.is_empty());
        assert!(doc.styles.is_empty());
        assert!(doc.filter.is_none());
        assert!(doc.highlights.is_empty());
        assert!(!doc.modified);
        // The clipboard survives a new sheet.
        assert_eq!(doc.clipboard.contents(), &["x"]);
    }
}
