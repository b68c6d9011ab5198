//! Derived budget figures
//!
//! Everything here is a pure function of the state and is recomputed on
//! every call.

use serde::Serialize;

use crate::models::category::{category_name, category_position};
use crate::models::{Expense, Money};
use crate::store::BudgetState;

/// Sum of all expense amounts
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Budget left after spending; negative when over budget
pub fn remaining(budget: Money, total_spent: Money) -> Money {
    budget - total_spent
}

/// Remaining budget for a state
pub fn remaining_budget(state: &BudgetState) -> Money {
    remaining(state.budget(), total_spent(state.expenses()))
}

/// Expenses matching the active category filter, in insertion order
pub fn visible_expenses(state: &BudgetState) -> Vec<&Expense> {
    match state.category_filter() {
        Some(category) => state
            .expenses()
            .iter()
            .filter(|e| e.category_id == category)
            .collect(),
        None => state.expenses().iter().collect(),
    }
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpending {
    pub category_id: String,
    pub category_name: &'static str,
    pub total: Money,
    pub count: usize,
}

/// Totals per category, in category table order with unknown ids last
pub fn spending_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut totals: Vec<CategorySpending> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|t| t.category_id == expense.category_id)
        {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => totals.push(CategorySpending {
                category_id: expense.category_id.clone(),
                category_name: category_name(&expense.category_id),
                total: expense.amount,
                count: 1,
            }),
        }
    }

    totals.sort_by_key(|t| category_position(&t.category_id).unwrap_or(usize::MAX));
    totals
}

/// Budget overview shown alongside the expense list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percentage_spent: f64,
    pub expense_count: usize,
}

impl BudgetSummary {
    pub fn from_state(state: &BudgetState) -> Self {
        let spent = total_spent(state.expenses());
        Self {
            budget: state.budget(),
            spent,
            remaining: remaining(state.budget(), spent),
            percentage_spent: spent.percent_of(state.budget()),
            expense_count: state.expenses().len(),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use crate::store::{transition, Action};
    use chrono::NaiveDate;

    fn expense(units: i64, category: &str) -> Expense {
        Expense::new(
            "Item",
            Money::from_units(units),
            category,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    fn state(budget: i64, items: &[(i64, &str)]) -> BudgetState {
        let mut state = BudgetState::new(Money::from_units(budget));
        for (units, category) in items {
            state = transition(
                state,
                Action::AddExpense(NewExpense::new(
                    "Item",
                    Money::from_units(*units),
                    *category,
                    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                )),
            );
        }
        state
    }

    #[test]
    fn test_total_spent_empty_is_zero() {
        assert_eq!(total_spent(&[]), Money::zero());
    }

    #[test]
    fn test_total_spent_ignores_order() {
        let forward = vec![expense(10, "food"), expense(25, "home"), expense(7, "misc")];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(total_spent(&forward), Money::from_units(42));
        assert_eq!(total_spent(&forward), total_spent(&backward));
    }

    #[test]
    fn test_remaining_is_not_clamped() {
        assert_eq!(
            remaining(Money::from_units(500), Money::from_units(200)),
            Money::from_units(300)
        );
        assert_eq!(
            remaining(Money::from_units(100), Money::from_units(150)),
            Money::from_units(-50)
        );
    }

    #[test]
    fn test_summary_from_state() {
        let summary = BudgetSummary::from_state(&state(500, &[(200, "home"), (50, "food")]));
        assert_eq!(summary.budget, Money::from_units(500));
        assert_eq!(summary.spent, Money::from_units(250));
        assert_eq!(summary.remaining, Money::from_units(250));
        assert_eq!(summary.percentage_spent, 50.0);
        assert_eq!(summary.expense_count, 2);
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_summary_without_budget() {
        let summary = BudgetSummary::from_state(&BudgetState::default());
        assert_eq!(summary.percentage_spent, 0.0);
        assert_eq!(summary.remaining, Money::zero());
    }

    #[test]
    fn test_filter_limits_list_but_not_totals() {
        let state = state(500, &[(200, "home"), (50, "food"), (20, "food")]);
        let state = transition(state, Action::FilterCategory(Some("food".into())));

        let visible = visible_expenses(&state);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.category_id == "food"));
        assert_eq!(remaining_budget(&state), Money::from_units(230));
    }

    #[test]
    fn test_no_filter_shows_everything() {
        let state = state(500, &[(200, "home"), (50, "food")]);
        assert_eq!(visible_expenses(&state).len(), 2);
    }

    #[test]
    fn test_spending_by_category_order() {
        let expenses = vec![
            expense(5, "travel"),
            expense(20, "health"),
            expense(10, "food"),
            expense(15, "food"),
        ];
        let totals = spending_by_category(&expenses);

        let ids: Vec<_> = totals.iter().map(|t| t.category_id.as_str()).collect();
        assert_eq!(ids, vec!["food", "health", "travel"]);
        assert_eq!(totals[0].total, Money::from_units(25));
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[2].category_name, "Uncategorized");
    }
}
