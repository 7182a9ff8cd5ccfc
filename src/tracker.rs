//! Expense tracking service
//!
//! Provides the in-memory record store and the per-category aggregation
//! built on top of it. Records are append-only: once an expense is accepted
//! it is never edited or removed, and nothing survives the process.

use std::collections::HashMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

/// In-memory store of expense records
#[derive(Debug, Default)]
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
}

impl ExpenseTracker {
    /// Create a new empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense
    ///
    /// The amount must be strictly positive; zero and negative amounts are
    /// rejected without touching the store.
    pub fn add(&mut self, amount: Money, category: impl Into<String>) -> TrackerResult<()> {
        if !amount.is_positive() {
            return Err(TrackerError::InvalidAmount(amount));
        }

        self.expenses.push(Expense::new(amount, category));
        Ok(())
    }

    /// Sum recorded amounts per category
    ///
    /// Every category that appears in at least one record gets an entry,
    /// including the empty-string category. Fails with
    /// [`TrackerError::EmptyDataset`] when nothing has been recorded yet.
    pub fn categorize(&self) -> TrackerResult<HashMap<String, Money>> {
        if self.expenses.is_empty() {
            return Err(TrackerError::EmptyDataset);
        }

        let mut totals: HashMap<String, Money> = HashMap::new();
        for expense in &self.expenses {
            *totals
                .entry(expense.category.clone())
                .or_insert_with(Money::zero) += expense.amount;
        }

        Ok(totals)
    }

    /// All recorded expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Total of all recorded amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_record() {
        let mut tracker = ExpenseTracker::new();
        assert_eq!(tracker.len(), 0);

        tracker.add(Money::from_cents(1000), "food").unwrap();
        assert_eq!(tracker.len(), 1);

        let expense = &tracker.expenses()[0];
        assert_eq!(expense.amount.cents(), 1000);
        assert_eq!(expense.category, "food");
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut tracker = ExpenseTracker::new();

        let result = tracker.add(Money::from_cents(-500), "food");
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
        assert_eq!(tracker.len(), 0);
    }

    #[test]
    fn test_add_rejects_zero_amount() {
        let mut tracker = ExpenseTracker::new();

        let result = tracker.add(Money::zero(), "food");
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_rejection_leaves_store_unchanged() {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(1000), "food").unwrap();

        let _ = tracker.add(Money::from_cents(-1), "food");
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.total().cents(), 1000);
    }

    #[test]
    fn test_categorize_sums_by_category() {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(1000), "food").unwrap();
        tracker.add(Money::from_cents(500), "food").unwrap();
        tracker.add(Money::from_cents(300), "transport").unwrap();

        let totals = tracker.categorize().unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["food"].cents(), 1500);
        assert_eq!(totals["transport"].cents(), 300);
    }

    #[test]
    fn test_categorize_empty_dataset() {
        let tracker = ExpenseTracker::new();

        let result = tracker.categorize();
        assert!(matches!(result, Err(TrackerError::EmptyDataset)));
    }

    #[test]
    fn test_categorize_conserves_total() {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(1299), "food").unwrap();
        tracker.add(Money::from_cents(50), "snacks").unwrap();
        tracker.add(Money::from_cents(899), "food").unwrap();
        tracker.add(Money::from_cents(4500), "rent").unwrap();

        let totals = tracker.categorize().unwrap();
        let sum: Money = totals.values().copied().sum();
        assert_eq!(sum, tracker.total());
    }

    #[test]
    fn test_empty_category_is_accepted() {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(100), "").unwrap();

        let totals = tracker.categorize().unwrap();
        assert_eq!(totals[""].cents(), 100);
    }

    #[test]
    fn test_expenses_keep_insertion_order() {
        let mut tracker = ExpenseTracker::new();
        tracker.add(Money::from_cents(100), "b").unwrap();
        tracker.add(Money::from_cents(200), "a").unwrap();
        tracker.add(Money::from_cents(300), "c").unwrap();

        let categories: Vec<&str> = tracker
            .expenses()
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(categories, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_total() {
        let mut tracker = ExpenseTracker::new();
        assert_eq!(tracker.total(), Money::zero());

        tracker.add(Money::from_cents(250), "food").unwrap();
        tracker.add(Money::from_cents(750), "transport").unwrap();
        assert_eq!(tracker.total().cents(), 1000);
    }
}
