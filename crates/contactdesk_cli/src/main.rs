//! `contactdesk` entry point.
//!
//! # Responsibility
//! - Resolve file locations and logging once at startup.
//! - Open the desk and run one command or an interactive shell.
//!
//! Exit codes: `0` success (warnings included), `1` the contact or list
//! file could not be loaded, `2` a contact-manager action was rejected.

mod cli;
mod dispatch;
mod shell;

use clap::Parser;
use cli::{Cli, Command};
use contactdesk_core::{default_log_level, init_logging, Desk, DeskConfig};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    start_logging(&cli, &config);

    let mut desk = match Desk::open(&config) {
        Ok(desk) => desk,
        Err(err) => {
            error!("event=desk_open module=cli status=error error={}", err);
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=desk_open module=cli status=ok data_dir={}",
        config.data_dir().display()
    );

    match cli.command {
        Command::Shell => shell::run(&mut desk),
        Command::Panel(command) => {
            let outcome = dispatch::dispatch(&mut desk, command);
            dispatch::print_response(&outcome.response);
            outcome.exit_code()
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<DeskConfig, contactdesk_core::ConfigError> {
    let mut config = DeskConfig::new(&cli.data_dir)?;
    if let Some(path) = &cli.contacts {
        config = config.with_contacts_path(path);
    }
    if let Some(path) = &cli.lists {
        config = config.with_lists_path(path);
    }
    if let Some(path) = &cli.matrix {
        config = config.with_matrix_path(path);
    }
    if let Some(path) = &cli.document {
        config = config.with_document_path(path);
    }
    Ok(config)
}

/// Logging failures are reported and the run continues without a file log.
fn start_logging(cli: &Cli, config: &DeskConfig) {
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| config.default_log_dir());
    let log_dir = absolute(&log_dir);
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());

    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
