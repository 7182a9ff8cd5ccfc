//! Expense distribution report
//!
//! Turns the raw per-category totals into an ordered breakdown suitable for
//! chart rendering: one row per category, largest spending first.

use crate::error::TrackerResult;
use crate::models::Money;
use crate::tracker::ExpenseTracker;
use std::collections::HashMap;

/// Total spending for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Summed spending for this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
    /// Percentage of total spending (0-100)
    pub share: f64,
}

/// Per-category spending breakdown
#[derive(Debug, Clone)]
pub struct ExpenseDistribution {
    /// One row per category, sorted by total descending then name ascending
    pub rows: Vec<CategoryTotal>,
    /// Total spending across all categories
    pub grand_total: Money,
    /// Total number of recorded expenses
    pub expense_count: usize,
}

impl ExpenseDistribution {
    /// Generate a distribution from the current records
    ///
    /// Fails with [`TrackerError::EmptyDataset`] when nothing has been
    /// recorded, mirroring the underlying aggregation.
    ///
    /// [`TrackerError::EmptyDataset`]: crate::error::TrackerError::EmptyDataset
    pub fn generate(tracker: &ExpenseTracker) -> TrackerResult<Self> {
        let totals = tracker.categorize()?;
        let grand_total = tracker.total();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for expense in tracker.expenses() {
            *counts.entry(expense.category.as_str()).or_insert(0) += 1;
        }

        let mut rows: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| {
                let share = if grand_total.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / grand_total.cents() as f64) * 100.0
                };
                let count = counts.get(category.as_str()).copied().unwrap_or(0);
                CategoryTotal {
                    category,
                    total,
                    count,
                    share,
                }
            })
            .collect();

        // Largest spending first; ties break alphabetically so the chart
        // order is stable across regenerations
        rows.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(Self {
            rows,
            grand_total,
            expense_count: tracker.len(),
        })
    }

    /// Get the top spending categories
    pub fn top(&self, limit: usize) -> &[CategoryTotal] {
        &self.rows[..limit.min(self.rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    fn sample_tracker() -> ExpenseTracker {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(1000), "food").unwrap();
        tracker.add(Money::from_cents(500), "food").unwrap();
        tracker.add(Money::from_cents(300), "transport").unwrap();
        tracker
    }

    #[test]
    fn test_generate_distribution() {
        let tracker = sample_tracker();
        let distribution = ExpenseDistribution::generate(&tracker).unwrap();

        assert_eq!(distribution.rows.len(), 2);
        assert_eq!(distribution.grand_total.cents(), 1800);
        assert_eq!(distribution.expense_count, 3);

        let food = &distribution.rows[0];
        assert_eq!(food.category, "food");
        assert_eq!(food.total.cents(), 1500);
        assert_eq!(food.count, 2);
        assert!((food.share - 83.333).abs() < 0.01);

        let transport = &distribution.rows[1];
        assert_eq!(transport.category, "transport");
        assert_eq!(transport.total.cents(), 300);
        assert_eq!(transport.count, 1);
    }

    #[test]
    fn test_empty_tracker_propagates_empty_dataset() {
        let tracker = ExpenseTracker::new();

        let result = ExpenseDistribution::generate(&tracker);
        assert!(matches!(result, Err(TrackerError::EmptyDataset)));
    }

    #[test]
    fn test_ties_sort_alphabetically() {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(500), "zoo").unwrap();
        tracker.add(Money::from_cents(500), "art").unwrap();
        tracker.add(Money::from_cents(900), "mid").unwrap();

        let distribution = ExpenseDistribution::generate(&tracker).unwrap();
        let order: Vec<&str> = distribution
            .rows
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(order, vec!["mid", "art", "zoo"]);
    }

    #[test]
    fn test_rows_conserve_grand_total() {
        let tracker = sample_tracker();
        let distribution = ExpenseDistribution::generate(&tracker).unwrap();

        let sum: Money = distribution.rows.iter().map(|r| r.total).sum();
        assert_eq!(sum, distribution.grand_total);
        assert_eq!(sum, tracker.total());

        let share_sum: f64 = distribution.rows.iter().map(|r| r.share).sum();
        assert!((share_sum - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_top() {
        let mut tracker = ExpenseTracker::new();
        for (cents, category) in [(100, "a"), (400, "b"), (200, "c"), (300, "d")] {
            tracker.add(Money::from_cents(cents), category).unwrap();
        }

        let distribution = ExpenseDistribution::generate(&tracker).unwrap();
        let top = distribution.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "b");
        assert_eq!(top[1].category, "d");

        // Limit past the end is clamped
        assert_eq!(distribution.top(10).len(), 4);
    }
}
