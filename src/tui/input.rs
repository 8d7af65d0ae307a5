// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input handling for the TUI
//!
//! Handles keyboard input and maps to form actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, AppResult, InputMode};
use crate::error::Result;
use crate::scheduler::Scheduler;
use crate::storage::KeyValueStorage;

/// Handle user input
pub fn handle_input<K: KeyValueStorage, S: Scheduler>(app: &mut App<K, S>) -> Result<AppResult> {
    // Poll for events with a small timeout so deferred work keeps ticking
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            return Ok(handle_key(app, key));
        }
    }

    Ok(AppResult::Continue)
}

/// Apply a single key event
pub fn handle_key<K: KeyValueStorage, S: Scheduler>(app: &mut App<K, S>, key: KeyEvent) -> AppResult {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return AppResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return AppResult::Quit,
            KeyCode::Char('s') => {
                app.save();
                return AppResult::Continue;
            }
            _ => {}
        }
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_input(app, key.code),
        InputMode::Editing => {
            handle_editing_input(app, key.code);
            AppResult::Continue
        }
    }
}

/// Handle input in normal (navigation) mode
fn handle_normal_input<K: KeyValueStorage, S: Scheduler>(
    app: &mut App<K, S>,
    key: KeyCode,
) -> AppResult {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return AppResult::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Tab => app.switch_tab(true),
        KeyCode::BackTab => app.switch_tab(false),

        // Radio selection
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => app.cycle_level(true),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_level(false),

        KeyCode::Enter => app.select(),

        // Form actions
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('c') => app.cancel(),
        KeyCode::Char('v') => app.validate(),

        _ => {}
    }

    AppResult::Continue
}

/// Handle input in editing mode
fn handle_editing_input<K: KeyValueStorage, S: Scheduler>(app: &mut App<K, S>, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            app.confirm_edit();
        }
        KeyCode::Esc => {
            app.cancel_editing();
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}
