//! Gridpad - a small spreadsheet with a terminal UI

mod config;
mod error;
mod headless;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use config::Config;
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: gridpad [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMD>       Run a command without the UI (can be repeated)");
    eprintln!("  -o, --output <FILE>       Write the result of -c commands as markdown");
    eprintln!("  --config <FILE>           Use an alternate config file");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Example: gridpad -c \"set A0 10\" -c \"set B0 2\" -c \"sort 0\"");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut commands: Vec<String> = Vec::new();
    let mut output_file: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a value");
                    std::process::exit(1);
                }
                commands.push(args[i].clone());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg => {
                eprintln!("Error: Unknown argument: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let (config, warnings) = match Config::load(config_file.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    let headless = !commands.is_empty() || output_file.is_some();
    let _logger = logging::init(&config.logging, headless);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    if headless {
        log::info!("Running {} command(s) headless", commands.len());
        if let Err(e) = headless::run(&commands, output_file.as_deref()) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    run_interactive(&config);
}

#[cfg(feature = "tui")]
fn run_interactive(config: &Config) {
    log::info!("Starting terminal UI");
    let mut app = tui::App::new(config.display.col_width);
    if let Err(e) = tui::run(&mut app) {
        log::error!("Terminal UI failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_config: &Config) {
    eprintln!("gridpad was built without the terminal UI; use -c to run commands");
    std::process::exit(2);
}
