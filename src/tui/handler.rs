//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_mouse) => {
            // Mouse handling can be added later
            Ok(())
        }
        Event::Tick => {
            app.clear_expired_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }

        // Help
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }

        // Add expense
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddExpense);
            return Ok(());
        }

        // View switching
        KeyCode::Char('1') | KeyCode::Char('r') => {
            app.switch_view(ActiveView::Register);
            return Ok(());
        }
        KeyCode::Char('2') | KeyCode::Char('v') => {
            app.switch_view(ActiveView::Chart);
            return Ok(());
        }

        // Dismiss the status line
        KeyCode::Esc => {
            app.clear_status();
            return Ok(());
        }

        _ => {}
    }

    // View-specific keys
    match app.active_view {
        ActiveView::Register => handle_register_view_key(app, key),
        ActiveView::Chart => handle_chart_view_key(app, key),
    }
}

/// Handle keys in the register view
fn handle_register_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let expense_count = app.tracker.len();

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(expense_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Go to top
        KeyCode::Char('g') => {
            app.selected_index = 0;
        }

        // Go to bottom
        KeyCode::Char('G') => {
            if expense_count > 0 {
                app.selected_index = expense_count - 1;
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in the chart view
fn handle_chart_view_key(_app: &mut App, _key: KeyEvent) -> Result<()> {
    // The chart is read-only; everything it needs is covered by global keys
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::AddExpense => {
            // Delegate to expense dialog key handler
            super::dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::tui::app::{StatusLevel, StatusMessage};
    use crossterm::event::KeyModifiers;
    use std::time::{Duration, Instant};

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key_event(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_switching_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert_eq!(app.active_view, ActiveView::Register);

        handle_event(&mut app, key_event(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Chart);

        handle_event(&mut app, key_event(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Register);

        handle_event(&mut app, key_event(KeyCode::Char('v'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Chart);
    }

    #[test]
    fn test_add_key_opens_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key_event(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key_event(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        handle_event(&mut app, key_event(KeyCode::Char('x'))).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_register_navigation() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        for i in 1..=3 {
            app.tracker
                .add(Money::from_cents(i * 100), "food")
                .unwrap();
        }

        handle_event(&mut app, key_event(KeyCode::Char('j'))).unwrap();
        handle_event(&mut app, key_event(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.selected_index, 2);

        // Already at the bottom
        handle_event(&mut app, key_event(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.selected_index, 2);

        handle_event(&mut app, key_event(KeyCode::Char('g'))).unwrap();
        assert_eq!(app.selected_index, 0);

        handle_event(&mut app, key_event(KeyCode::Char('G'))).unwrap();
        assert_eq!(app.selected_index, 2);

        handle_event(&mut app, key_event(KeyCode::Char('k'))).unwrap();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_dialog_swallows_global_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key_event(KeyCode::Char('a'))).unwrap();
        // Typing 'q' inside the form must insert text, not quit
        handle_event(&mut app, key_event(KeyCode::Char('q'))).unwrap();

        assert!(!app.should_quit);
        assert_eq!(app.expense_form.category_input.value(), "q");
    }

    #[test]
    fn test_esc_dismisses_status() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_status(StatusLevel::Info, "hello");

        handle_event(&mut app, key_event(KeyCode::Esc)).unwrap();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_tick_expires_status() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.status_message = Some(StatusMessage {
            text: "old".to_string(),
            level: StatusLevel::Info,
            created_at: Instant::now() - Duration::from_secs(10),
        });
        handle_event(&mut app, Event::Tick).unwrap();
        assert!(app.status_message.is_none());
    }
}
