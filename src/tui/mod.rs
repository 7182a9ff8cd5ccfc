//! Terminal User Interface module
//!
//! This module provides the interactive TUI for the expense tracker using
//! ratatui. The TUI includes a register view listing recorded expenses, a
//! chart view showing the per-category distribution, and a dialog for
//! entering new expenses.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
