use gridpad_core::document::{COMMAND_USAGE, font_sizes};

const KEYS: &[(&str, &str)] = &[
    ("h j k l / arrows", "move the cursor"),
    ("Enter / i", "edit the cell; Enter commits, Esc cancels"),
    ("Space", "select only this cell"),
    ("m / Ctrl-Space", "add or remove this cell from the selection"),
    ("mouse click", "select (hold Ctrl to add/remove)"),
    ("y / d / p", "copy / cut / paste the selection"),
    ("b / I / u", "toggle bold / italic / underline"),
    ("/", "search; highlights update as you type, Esc clears"),
    ("F", "clear the row filter"),
    (":", "command line"),
    ("Esc", "clear the selection"),
];

/// Lines of the help modal.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Keys".to_string(), String::new()];
    for (key, what) in KEYS {
        lines.push(format!("  {:<22} {}", key, what));
    }

    lines.push(String::new());
    lines.push("Commands (after ':')".to_string());
    lines.push(String::new());
    for (usage, what) in COMMAND_USAGE {
        lines.push(format!("  {:<34} {}", usage, what));
    }
    lines.push(format!("  {:<34} {}", "w FILE", "export the current view as markdown"));
    lines.push(format!("  {:<34} {}", "q / q!", "quit (q! discards unexported changes)"));

    let sizes: Vec<String> = font_sizes().map(|s| s.to_string()).collect();
    lines.push(String::new());
    lines.push(format!("Font sizes: {}", sizes.join(", ")));
    lines.push("Cells are named by row letter and column number: A0 .. Z25".to_string());
    lines
}
