//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;

// Re-export commonly used widgets
pub use input::TextInput;
