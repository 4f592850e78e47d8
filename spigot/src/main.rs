//! spigot CLI entry point.
//!
//! Usage:
//!   spigot            # 1000 digits
//!   spigot 250        # 250 digits

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};

use spigot::cli::{self, Command};
use spigot::config::{self, SpigotConfig};
use spigot::pool::validate_digit_count;
use spigot::{logging, render, Coordinator};

/// Exit status for rejected input.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    if config::json_logs_requested(|key| env::var(key).ok()) {
        logging::init_production();
    } else {
        logging::init_quiet();
    }

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let command = match cli::parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("spigot: {e}\n\n{}", cli::USAGE);
            return Ok(ExitCode::from(USAGE_ERROR));
        }
    };

    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            println!("spigot {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { digits } => run_digits(digits),
    }
}

fn run_digits(requested: u64) -> Result<ExitCode> {
    let total = match validate_digit_count(requested) {
        Ok(total) => total,
        Err(e) => {
            eprintln!("spigot: {e}");
            return Ok(ExitCode::from(USAGE_ERROR));
        }
    };

    let mut config = SpigotConfig::from_env();
    config.total_digits = total as u64;

    println!("Computing to {} digits!", total);
    let coordinator = Coordinator::new(config.clone());
    let report = coordinator
        .run(config.total_digits)
        .context("digit computation failed")?;

    println!("\nRun-Time: {} seconds", report.elapsed.as_secs_f64());
    println!("\n");
    println!("{}", render::render_from_path(&config.template_path, &report.digits));
    Ok(ExitCode::SUCCESS)
}
