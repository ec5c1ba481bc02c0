//! Export of the current view

mod md;

pub use md::{markdown_content, write_markdown};
