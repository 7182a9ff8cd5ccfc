//! Core data models for the expense tracker
//!
//! This module contains the data structures the tracking domain is built
//! from: monetary amounts and the expense records that carry them.

pub mod expense;
pub mod money;

pub use expense::Expense;
pub use money::{Money, MoneyParseError};
