// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! frontier-admin - Frontier access control for your terminal
//!
//! Entry point for the frontier-admin CLI application.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use frontier_admin::cli::{commands, Cli, Commands};
use frontier_admin::config::AppConfig;
use frontier_admin::error::Result;
use frontier_admin::storage::FileStorage;
use frontier_admin::tui;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on every frontier_admin target. `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "frontier_admin=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let home = cli.home.clone().unwrap_or_else(AppConfig::home);
    let config = load_config(&home, &cli)?;
    let storage = FileStorage::new(AppConfig::storage_path(&home));
    tracing::debug!(
        target: "frontier_admin.cli",
        home = %home.display(),
        variant = ?config.variant,
        "configuration loaded"
    );

    let mut stdout = io::stdout().lock();
    match cli.command {
        None | Some(Commands::Form) => {
            tui::run_tui(&config, storage)?;
        }
        Some(Commands::Show) => {
            commands::show(&config, storage, cli.format, &mut stdout)?;
        }
        Some(Commands::Set(args)) => {
            commands::set(&config, storage, &args, &mut stdout)?;
        }
        Some(Commands::Validate) => {
            if !commands::validate(&config, storage, &mut stdout)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Reset) => {
            commands::reset(&config, storage, &mut stdout)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(home: &Path, cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_from(home)?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    Ok(config)
}
