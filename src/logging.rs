//! File logging setup.
//!
//! The terminal UI owns stdout/stderr, so log records go to a rotated file in
//! the platform data directory. Headless runs also echo errors to stderr.

use crate::config::{LoggingConfig, project_dirs};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

fn log_dir() -> Option<PathBuf> {
    let dir = project_dirs()?.data_local_dir().join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Start the logger. The returned handle must be kept alive for the
/// lifetime of the program.
pub fn init(config: &LoggingConfig, headless: bool) -> Option<LoggerHandle> {
    let Some(dir) = log_dir() else {
        eprintln!("Warning: failed to create log directory, logging disabled");
        return None;
    };

    let logger = match Logger::try_with_str(&config.level) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Warning: invalid log level '{}': {}", config.level, e);
            Logger::try_with_str("info").ok()?
        }
    };

    let duplicate = if headless {
        Duplicate::Error
    } else {
        Duplicate::None
    };

    match logger
        .log_to_file(
            FileSpec::default()
                .directory(&dir)
                .basename("gridpad")
                .suffix("log")
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(64 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .duplicate_to_stderr(duplicate)
        .start()
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: failed to start logging: {}", e);
            None
        }
    }
}
