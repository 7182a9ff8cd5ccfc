//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use crate::config::settings::{DefaultView, Settings};
use crate::tracker::ExpenseTracker;

use super::dialogs::expense::ExpenseFormState;

/// How long a status message stays on screen
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Register,
    Chart,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Help,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message text
    pub text: String,
    /// Severity, which drives the display color
    pub level: StatusLevel,
    /// When the message was set
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message stamped with the current time
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
            created_at: Instant::now(),
        }
    }

    /// Check whether the message has outlived its display window
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= STATUS_MESSAGE_TTL
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The in-memory expense store
    pub tracker: ExpenseTracker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected expense index in the register
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<StatusMessage>,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let active_view = match settings.default_view {
            DefaultView::Register => ActiveView::Register,
            DefaultView::Chart => ActiveView::Chart,
        };

        Self {
            settings,
            tracker: ExpenseTracker::new(),
            should_quit: false,
            active_view,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: Some(StatusMessage::new(StatusLevel::Info, "Press ? for help")),
            expense_form: ExpenseFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(level, message));
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Drop the status message once its display window has passed
    pub fn clear_expired_status(&mut self) {
        if let Some(status) = &self.status_message {
            if status.is_expired() {
                self.status_message = None;
            }
        }
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;

        // Reset selection based on view
        match view {
            ActiveView::Register => {
                self.selected_index = 0;
            }
            ActiveView::Chart => {}
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddExpense {
            // Reset form for a fresh entry
            self.expense_form = ExpenseFormState::new();
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the register
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the register
    pub fn move_down(&mut self, max: usize) {
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }
}
