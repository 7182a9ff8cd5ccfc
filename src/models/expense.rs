//! Expense record model
//!
//! An expense is a single spending record: an amount and the category it
//! belongs to. Records live only in memory and are never modified after
//! creation; the session starts empty and ends empty.

use crate::models::Money;
use chrono::{DateTime, Local};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The amount spent (always positive once accepted)
    pub amount: Money,
    /// Free-form category label, e.g. "food" or "transport"
    pub category: String,
    /// When the record was entered this session
    pub entered_at: DateTime<Local>,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(amount: Money, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            entered_at: Local::now(),
        }
    }
}
