// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the TUI
//!
//! Handles layout and rendering of the admin form using ratatui.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use super::app::{App, FocusItem, InputMode};
use crate::config::{AccessLevel, FormVariant, Platform};
use crate::controller::StatusKind;
use crate::scheduler::Scheduler;
use crate::storage::KeyValueStorage;

/// Main draw function
pub fn draw<K: KeyValueStorage, S: Scheduler>(frame: &mut Frame, app: &App<K, S>) {
    let tabbed = app.variant() == FormVariant::Tabbed;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Title
            Constraint::Length(if tabbed { 2 } else { 0 }), // Tabs
            Constraint::Min(0),                             // Content
            Constraint::Length(3),                          // Status/Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    if tabbed {
        draw_tabs(frame, chunks[1], app);
    }
    draw_form(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);

    if app.input_mode == InputMode::Editing {
        draw_input_popup(frame, app);
    }
}

/// Draw the title bar
fn draw_title(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(" Frontier admin control ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title, area);
}

fn draw_tabs<K: KeyValueStorage, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<K, S>) {
    let titles: Vec<String> = Platform::all()
        .iter()
        .map(|p| format!(" {} ", p.label()))
        .collect();
    let selected = app
        .controller
        .active_tab()
        .and_then(|tab| Platform::all().iter().position(|p| *p == tab))
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

fn draw_form<K: KeyValueStorage, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<K, S>) {
    let focused = app.focused();
    let mut lines: Vec<Line> = Vec::new();

    for platform in app.visible_platforms() {
        lines.push(Line::from(Span::styled(
            platform.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        let radio_focused = focused == FocusItem::Access(platform);
        let selected = app.selected_level(platform);
        for level in AccessLevel::all() {
            lines.push(radio_line(app, platform, *level, selected, radio_focused));
        }

        if app.group_list_visible(platform) {
            let prefix = if focused == FocusItem::Groups(platform) {
                "▶ "
            } else {
                "  "
            };
            let text = app.group_text(platform);
            let shown = if text.is_empty() {
                "(enter groups)".to_string()
            } else {
                text
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{}Groups: ", prefix)),
                Span::styled(shown, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::default());
    }

    let button = |item: FocusItem| {
        let style = if focused == item {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!("[ {} ]", item.label()), style)
    };
    lines.push(Line::from(vec![
        button(FocusItem::Save),
        Span::raw("  "),
        button(FocusItem::Cancel),
    ]));

    let form = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(form, centered_rect(80, 90, area));
}

fn radio_line<K: KeyValueStorage, S: Scheduler>(
    app: &App<K, S>,
    platform: Platform,
    level: AccessLevel,
    selected: Option<AccessLevel>,
    group_focused: bool,
) -> Line<'static> {
    let checked = selected == Some(level);
    let marker = if checked { "(•)" } else { "( )" };
    let prefix = if group_focused && checked {
        "▶ "
    } else {
        "  "
    };
    let style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{}{} {:<16}", prefix, marker, level.label()), style),
        Span::styled(
            app.controller.describe(platform, level).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Draw the status bar
fn draw_status<K: KeyValueStorage, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<K, S>) {
    let (text, style) = if let Some(status) = app.controller.surface().status() {
        let color = match status.kind {
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
            StatusKind::Info => Color::Yellow,
        };
        (status.text.clone(), Style::default().fg(color))
    } else {
        let help = match app.input_mode {
            InputMode::Normal if app.variant() == FormVariant::Tabbed => {
                "Tab: Switch tab | ↑↓: Move | ←→/Space: Choose | s: Save | c: Cancel | q: Quit"
            }
            InputMode::Normal => "↑↓: Move | ←→/Space: Choose | s: Save | c: Cancel | q: Quit",
            InputMode::Editing => "Enter: Confirm | Esc: Cancel",
        };
        (help.to_string(), Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(format!(" {} ", text))
        .style(style)
        .block(block);

    frame.render_widget(status, area);
}

/// Draw input popup for group list editing
fn draw_input_popup<K: KeyValueStorage, S: Scheduler>(frame: &mut Frame, app: &App<K, S>) {
    let popup_area = centered_rect(50, 20, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let title = match app.focused() {
        FocusItem::Groups(platform) => format!(" {} groups ", platform.label()),
        _ => " Edit Value ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let input_display = format!("{}_", app.input_buffer);
    let input = Paragraph::new(input_display).style(Style::default().fg(Color::White));

    frame.render_widget(input, inner);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControlBindings, FormState, SettingsController};
    use crate::scheduler::ManualScheduler;
    use crate::storage::MemoryStorage;
    use crate::store::SettingsStore;
    use ratatui::backend::TestBackend;

    fn app(variant: FormVariant) -> App<MemoryStorage, ManualScheduler> {
        let bindings = ControlBindings::for_variant(variant);
        let form = FormState::for_bindings(&bindings);
        let store = SettingsStore::new(MemoryStorage::new(), variant);
        let mut controller =
            SettingsController::new(store, form, bindings, ManualScheduler::new());
        controller.init();
        App::new(controller)
    }

    fn render(app: &App<MemoryStorage, ManualScheduler>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_classic_shows_both_platforms() {
        let app = app(FormVariant::Classic);
        let screen = render(&app, 120, 30);
        assert!(screen.contains("Frontier admin control"));
        assert!(screen.contains("Web Apps"));
        assert!(screen.contains("Office win32"));
        assert!(screen.contains("[ Save ]"));
    }

    #[test]
    fn test_draw_tabbed_shows_only_active_platform_body() {
        let mut app = app(FormVariant::Tabbed);
        app.switch_tab(true);
        let screen = render(&app, 120, 30);
        assert!(screen.contains("users control the toggle"));
    }

    #[test]
    fn test_draw_group_list_when_specific_groups() {
        let mut app = app(FormVariant::Classic);
        app.cycle_level(false);
        let screen = render(&app, 120, 30);
        assert!(screen.contains("Groups:"));
        assert!(screen.contains("(enter groups)"));
    }

    #[test]
    fn test_draw_status_message() {
        let mut app = app(FormVariant::Classic);
        app.save();
        let screen = render(&app, 120, 30);
        assert!(screen.contains("Settings saved successfully!"));
    }

    #[test]
    fn test_draw_editing_popup() {
        let mut app = app(FormVariant::Classic);
        app.cycle_level(false);
        app.move_down();
        app.select();
        app.input_buffer.push_str("ops");
        let screen = render(&app, 120, 30);
        assert!(screen.contains("ops_"));
    }

    #[test]
    fn test_draw_small_terminal() {
        let app = app(FormVariant::Tabbed);
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        assert!(terminal.draw(|f| draw(f, &app)).is_ok());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let inner = centered_rect(50, 50, area);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 50);
    }
}
