// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! TUI admin form
//!
//! A minimalist terminal rendition of the Frontier admin form.
//! Uses ratatui for rendering and crossterm for input handling.

pub mod app;
pub mod input;
pub mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::AppConfig;
use crate::controller::{ControlBindings, FormState, SettingsController};
use crate::error::{AdminError, Result};
use crate::scheduler::{Scheduler, WallClockScheduler};
use crate::storage::KeyValueStorage;
use app::{App, AppResult};

/// Run the interactive admin form against `storage`
pub fn run_tui<K: KeyValueStorage>(config: &AppConfig, storage: K) -> Result<()> {
    let form = FormState::for_bindings(&ControlBindings::for_variant(config.variant));
    let controller =
        SettingsController::from_config(config, storage, form, WallClockScheduler::new());
    let mut app = App::new(controller);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
fn run_app<B: Backend, K: KeyValueStorage, S: Scheduler>(
    terminal: &mut Terminal<B>,
    app: &mut App<K, S>,
) -> Result<()> {
    loop {
        app.tick();

        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| AdminError::Tui(e.to_string()))?;

        match input::handle_input(app)? {
            AppResult::Continue => {}
            AppResult::Quit => break,
        }
    }

    Ok(())
}
