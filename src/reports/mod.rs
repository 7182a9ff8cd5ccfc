//! Reports built on top of the expense store
//!
//! Currently a single report: the per-category spending distribution that
//! backs the chart view.

pub mod distribution;

pub use distribution::{CategoryTotal, ExpenseDistribution};
