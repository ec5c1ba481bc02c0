//! Commands accepted by a [`Document`](super::Document).
//!
//! Every user action arrives as a fully parsed [`Command`]. The text form
//! (`sort 3`, `filter 0 ab`, `set B2 hello`) is what the command line and the
//! headless `-c` flag accept.

use super::style::{Align, check_font_size};
use crate::error::{GridpadError, Result};
use gridpad_engine::engine::{Coord, parse_column};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Commit edited text into a cell.
    SetCell { coord: Coord, text: String },
    /// A click on a cell; `modified` is true when Ctrl/Cmd is held.
    Click { coord: Coord, modified: bool },
    ClearSelection,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    SetColor(String),
    SetBackground(String),
    SetAlign(Align),
    SetFontSize(u16),
    Copy,
    Cut,
    Paste,
    SortBy(usize),
    FilterBy { col: usize, value: String },
    ClearFilter,
    Search(String),
    NewFile,
}

/// Usage lines for every command, shown by `help` and on parse errors.
pub const COMMAND_USAGE: &[(&str, &str)] = &[
    ("set REF TEXT", "write TEXT into a cell (e.g. set B3 hello)"),
    ("select REF", "select only REF"),
    ("toggle REF", "add REF to, or remove it from, the selection"),
    ("deselect", "clear the selection"),
    ("bold | italic | underline", "toggle formatting on the selection"),
    ("color VALUE", "set text color of the selection"),
    ("bg VALUE", "set background color of the selection"),
    ("align left|center|right|justify", "set alignment of the selection"),
    ("size PX", "set font size (8-64, steps of 4)"),
    ("copy | cut | paste", "clipboard operations on the selection"),
    ("sort COL", "sort rows by column COL (0-25)"),
    ("filter COL VALUE", "show rows whose column COL contains VALUE"),
    ("unfilter", "show all rows again"),
    ("search [QUERY]", "highlight cells containing QUERY"),
    ("new", "start a new, empty sheet"),
];

fn required<'a>(command: &str, args: Option<&'a str>, usage: &str) -> Result<&'a str> {
    match args {
        Some(a) if !a.is_empty() => Ok(a),
        _ => Err(GridpadError::InvalidCommand(format!(
            "{} needs an argument (usage: {})",
            command, usage
        ))),
    }
}

fn parse_coord(text: &str) -> Result<Coord> {
    Coord::parse(text).ok_or_else(|| GridpadError::InvalidCellRef(text.to_string()))
}

fn no_args(command: &str, args: Option<&str>, cmd: Command) -> Result<Command> {
    match args {
        Some(a) if !a.is_empty() => Err(GridpadError::InvalidCommand(format!(
            "{} takes no arguments, got '{}'",
            command, a
        ))),
        _ => Ok(cmd),
    }
}

impl FromStr for Command {
    type Err = GridpadError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((c, rest)) => (c, Some(rest.trim())),
            None => (line, None),
        };
        let command = command.to_ascii_lowercase();

        match command.as_str() {
            "set" => {
                let args = required(&command, args, "set REF TEXT")?;
                let (cell, text) = match args.split_once(char::is_whitespace) {
                    Some((cell, text)) => (cell, text.trim_start()),
                    None => (args, ""),
                };
                Ok(Command::SetCell {
                    coord: parse_coord(cell)?,
                    text: text.to_string(),
                })
            }
            "select" | "toggle" => {
                let cell = required(&command, args, "select REF")?;
                Ok(Command::Click {
                    coord: parse_coord(cell)?,
                    modified: command == "toggle",
                })
            }
            "deselect" => no_args(&command, args, Command::ClearSelection),
            "bold" => no_args(&command, args, Command::ToggleBold),
            "italic" => no_args(&command, args, Command::ToggleItalic),
            "underline" => no_args(&command, args, Command::ToggleUnderline),
            "color" => Ok(Command::SetColor(
                required(&command, args, "color VALUE")?.to_string(),
            )),
            "bg" => Ok(Command::SetBackground(
                required(&command, args, "bg VALUE")?.to_string(),
            )),
            "align" => Ok(Command::SetAlign(
                required(&command, args, "align MODE")?.parse()?,
            )),
            "size" => {
                let raw = required(&command, args, "size PX")?;
                let px = raw
                    .trim_end_matches("px")
                    .parse::<u16>()
                    .map_err(|_| GridpadError::InvalidArgument(format!("font size '{}'", raw)))?;
                Ok(Command::SetFontSize(check_font_size(px)?))
            }
            "copy" => no_args(&command, args, Command::Copy),
            "cut" => no_args(&command, args, Command::Cut),
            "paste" => no_args(&command, args, Command::Paste),
            "sort" => {
                let col = required(&command, args, "sort COL")?;
                Ok(Command::SortBy(parse_column(col)?))
            }
            "filter" => {
                let args = required(&command, args, "filter COL VALUE")?;
                let (col, value) = match args.split_once(char::is_whitespace) {
                    Some((col, value)) => (col, value.trim_start()),
                    None => (args, ""),
                };
                Ok(Command::FilterBy {
                    col: parse_column(col)?,
                    value: value.to_string(),
                })
            }
            "unfilter" => no_args(&command, args, Command::ClearFilter),
            "search" => Ok(Command::Search(args.unwrap_or("").to_string())),
            "new" => no_args(&command, args, Command::NewFile),
            "" => Err(GridpadError::InvalidCommand("empty command".to_string())),
            other => Err(GridpadError::InvalidCommand(format!(
                "unknown command '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpad_engine::GridError;

    fn parse(s: &str) -> Command {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_set_keeps_inner_spaces() {
        assert_eq!(
            parse("set B3 hello  world"),
            Command::SetCell {
                coord: Coord::new(1, 3),
                text: "hello  world".to_string()
            }
        );
        assert_eq!(
            parse("set a0"),
            Command::SetCell {
                coord: Coord::new(0, 0),
                text: String::new()
            }
        );
    }

    #[test]
    fn test_parse_clicks() {
        assert_eq!(
            parse("select C4"),
            Command::Click {
                coord: Coord::new(2, 4),
                modified: false
            }
        );
        assert_eq!(
            parse("TOGGLE c4"),
            Command::Click {
                coord: Coord::new(2, 4),
                modified: true
            }
        );
    }

    #[test]
    fn test_parse_simple_words() {
        assert_eq!(parse("bold"), Command::ToggleBold);
        assert_eq!(parse("italic"), Command::ToggleItalic);
        assert_eq!(parse("underline"), Command::ToggleUnderline);
        assert_eq!(parse("copy"), Command::Copy);
        assert_eq!(parse("cut"), Command::Cut);
        assert_eq!(parse("paste"), Command::Paste);
        assert_eq!(parse("unfilter"), Command::ClearFilter);
        assert_eq!(parse("deselect"), Command::ClearSelection);
        assert_eq!(parse(" new "), Command::NewFile);
    }

    #[test]
    fn test_parse_formatting_values() {
        assert_eq!(parse("color #ff0000"), Command::SetColor("#ff0000".into()));
        assert_eq!(parse("bg yellow"), Command::SetBackground("yellow".into()));
        assert_eq!(parse("align center"), Command::SetAlign(Align::Center));
        assert_eq!(parse("size 24"), Command::SetFontSize(24));
        assert_eq!(parse("size 32px"), Command::SetFontSize(32));
        assert!("size 30".parse::<Command>().is_err());
        assert!("size big".parse::<Command>().is_err());
        assert!("align middle".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_sort_and_filter() {
        assert_eq!(parse("sort 3"), Command::SortBy(3));
        assert_eq!(
            parse("filter 0 ab cd"),
            Command::FilterBy {
                col: 0,
                value: "ab cd".into()
            }
        );
        assert!(matches!(
            "sort 30".parse::<Command>(),
            Err(GridpadError::Grid(GridError::InvalidColumn(_)))
        ));
        assert!(matches!(
            "sort x".parse::<Command>(),
            Err(GridpadError::Grid(GridError::InvalidColumn(_)))
        ));
        assert!(matches!(
            "sort".parse::<Command>(),
            Err(GridpadError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_parse_search_allows_empty_query() {
        assert_eq!(parse("search"), Command::Search(String::new()));
        assert_eq!(parse("search Foo Bar"), Command::Search("Foo Bar".into()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "explode".parse::<Command>(),
            Err(GridpadError::InvalidCommand(_))
        ));
        assert!(matches!(
            "".parse::<Command>(),
            Err(GridpadError::InvalidCommand(_))
        ));
        assert!(matches!(
            "select Q99".parse::<Command>(),
            Err(GridpadError::InvalidCellRef(_))
        ));
        assert!(matches!(
            "copy now".parse::<Command>(),
            Err(GridpadError::InvalidCommand(_))
        ));
    }
}
