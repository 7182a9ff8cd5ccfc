//! Dialog modules for the TUI
//!
//! Contains modal dialogs layered over the active view

pub mod expense;
pub mod help;
