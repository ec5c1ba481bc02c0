//! Per-cell presentation attributes.
//!
//! Formatting never touches cell text. Styles are keyed by coordinate and
//! only stored while they differ from [`CellStyle::default`].

use super::selection::Selection;
use crate::error::{GridpadError, Result};
use gridpad_engine::engine::Coord;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_FONT_SIZE: u16 = 16;
pub const MIN_FONT_SIZE: u16 = 8;
pub const MAX_FONT_SIZE: u16 = 64;
pub const FONT_SIZE_STEP: u16 = 4;

/// The font sizes offered to the user: 8, 12, ... 64.
pub fn font_sizes() -> impl Iterator<Item = u16> {
    (MIN_FONT_SIZE..=MAX_FONT_SIZE).step_by(FONT_SIZE_STEP as usize)
}

pub fn check_font_size(px: u16) -> Result<u16> {
    if font_sizes().any(|s| s == px) {
        Ok(px)
    } else {
        Err(GridpadError::InvalidArgument(format!(
            "font size {} (expected {}..={} in steps of {})",
            px, MIN_FONT_SIZE, MAX_FONT_SIZE, FONT_SIZE_STEP
        )))
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }
}

impl FromStr for Align {
    type Err = GridpadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            "justify" => Ok(Align::Justify),
            other => Err(GridpadError::InvalidArgument(format!(
                "alignment '{}' (expected left, center, right or justify)",
                other
            ))),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Text color, as entered (e.g. "red", "#ff0000").
    pub color: Option<String>,
    pub background: Option<String>,
    pub align: Align,
    pub font_size: u16,
}

static DEFAULT_STYLE: CellStyle = CellStyle {
    bold: false,
    italic: false,
    underline: false,
    color: None,
    background: None,
    align: Align::Left,
    font_size: DEFAULT_FONT_SIZE,
};

impl Default for CellStyle {
    fn default() -> Self {
        DEFAULT_STYLE.clone()
    }
}

impl CellStyle {
    pub fn is_default(&self) -> bool {
        *self == DEFAULT_STYLE
    }
}

/// Styles for every cell that has any.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    styles: HashMap<Coord, CellStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coord) -> &CellStyle {
        self.styles.get(&coord).unwrap_or(&DEFAULT_STYLE)
    }

    /// Number of cells carrying a non-default style.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }

    /// Run `f` on the style of every selected cell.
    pub fn update(&mut self, selection: &Selection, mut f: impl FnMut(&mut CellStyle)) {
        for coord in selection.members() {
            let style = self.styles.entry(*coord).or_default();
            f(style);
            if style.is_default() {
                self.styles.remove(coord);
            }
        }
    }

    pub fn toggle_bold(&mut self, selection: &Selection) {
        self.update(selection, |s| s.bold = !s.bold);
    }

    pub fn toggle_italic(&mut self, selection: &Selection) {
        self.update(selection, |s| s.italic = !s.italic);
    }

    pub fn toggle_underline(&mut self, selection: &Selection) {
        self.update(selection, |s| s.underline = !s.underline);
    }

    pub fn set_color(&mut self, selection: &Selection, color: &str) {
        self.update(selection, |s| s.color = Some(color.to_string()));
    }

    pub fn set_background(&mut self, selection: &Selection, color: &str) {
        self.update(selection, |s| s.background = Some(color.to_string()));
    }

    pub fn set_align(&mut self, selection: &Selection, align: Align) {
        self.update(selection, |s| s.align = align);
    }

    pub fn set_font_size(&mut self, selection: &Selection, px: u16) -> Result<()> {
        let px = check_font_size(px)?;
        self.update(selection, |s| s.font_size = px);
        Ok(())
    }

    /// Move styles along with their rows after a sort.
    ///
    /// `order[i]` is the original row that now sits at row `i`.
    pub fn permute_rows(&mut self, order: &[usize]) {
        let mut new_row = vec![0usize; order.len()];
        for (to, &from) in order.iter().enumerate() {
            new_row[from] = to;
        }
        self.styles = self
            .styles
            .drain()
            .map(|(coord, style)| (Coord::new(new_row[coord.row], coord.col), style))
            .collect();
    }
}
