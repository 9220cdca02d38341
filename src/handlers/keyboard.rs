//! Keyboard Input Handler
//!
//! Global navigation keys first, then whatever the current page binds.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::logic;
use crate::Page;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Search input swallows everything except its own control keys
    if app.model.is_typing() {
        handle_search_input(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Tab | KeyCode::Right => {
            app.navigate(logic::ui::next_page(app.model.page()));
            return;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.navigate(logic::ui::previous_page(app.model.page()));
            return;
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(page) = logic::ui::page_for_digit(c) {
                app.navigate(page);
            }
            return;
        }
        _ => {}
    }

    match app.model.page() {
        Page::Workouts => handle_workouts_key(app, key),
        Page::Water => handle_water_key(app, key),
        Page::Dashboard | Page::Profile => {}
    }
}

fn handle_workouts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') => {
            if !app.model.workouts.is_loading() {
                app.model.workouts.search_mode = true;
            }
        }
        KeyCode::Esc => {
            // Esc outside the input clears an accepted search
            if !app.model.workouts.search_query.is_empty() {
                app.model.workouts.clear_search();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.model.workouts.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.model.workouts.select_previous(),
        KeyCode::Char('r') => {
            app.reload_workouts();
            app.model.show_toast("Reloading workouts".to_string());
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    let workouts = &mut app.model.workouts;
    match key.code {
        KeyCode::Esc => workouts.clear_search(),
        KeyCode::Enter => workouts.search_mode = false,
        KeyCode::Backspace => workouts.pop_search_char(),
        KeyCode::Down => workouts.select_next(),
        KeyCode::Up => workouts.select_previous(),
        KeyCode::Char(c) => workouts.push_search_char(c),
        _ => {}
    }
}

fn handle_water_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('+') | KeyCode::Enter => {
            if let Err(e) = app.add_glass() {
                tracing::error!(error = %e, "failed to save water log");
                app.model.show_toast(format!("Error: {:#}", e));
            }
        }
        _ => {}
    }
}
