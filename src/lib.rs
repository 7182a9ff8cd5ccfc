//! Expense Tracker - Terminal-based session expense tracker
//!
//! This library provides the core functionality for the expense tracker
//! application. It records expenses (an amount plus a free-form category)
//! for the duration of a session and aggregates them into per-category
//! totals rendered as a bar chart in the TUI.
//!
//! Records live purely in memory: the store starts empty on launch and is
//! discarded on exit. Only display preferences are persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money)
//! - `tracker`: The in-memory expense store and category aggregation
//! - `reports`: Category distribution report built on the tracker
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::Money;
//! use expense_tracker::tracker::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::new();
//! tracker.add(Money::from_cents(1250), "food")?;
//! let totals = tracker.categorize()?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod tracker;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
