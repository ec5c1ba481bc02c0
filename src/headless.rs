//! Non-interactive command mode (`-c`).

use anyhow::{Context, Result};
use gridpad_core::storage::{markdown_content, write_markdown};
use gridpad_core::{Command, Document};
use std::path::Path;

/// Run each command line against `doc`, stopping at the first failure.
pub fn run_commands(doc: &mut Document, commands: &[String]) -> Result<()> {
    for line in commands {
        let command = line
            .parse::<Command>()
            .with_context(|| format!("command '{}'", line))?;
        let message = doc
            .execute(command)
            .with_context(|| format!("command '{}'", line))?;
        log::info!("{}: {}", line, message);
    }
    Ok(())
}

/// Run the commands, then emit the resulting view as markdown.
pub fn run(commands: &[String], output: Option<&Path>) -> Result<()> {
    let mut doc = Document::new();
    run_commands(&mut doc, commands)?;
    match output {
        Some(path) => {
            write_markdown(path, &doc)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Result written to {}", path.display());
        }
        None => print!("{}", markdown_content(&doc)),
    }
    Ok(())
}
