//! gridpad_engine - Grid model and column operations.

pub mod engine;
pub mod error;

pub use error::{GridError, Result};
