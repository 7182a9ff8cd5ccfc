//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Display preferences for the TUI

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{DefaultView, Settings};
