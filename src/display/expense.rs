//! Expense display formatting
//!
//! Renders the expense list, the budget summary and per-category spending
//! for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::services::summary::{visible_expenses, BudgetSummary, CategorySpending};
use crate::store::BudgetState;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the visible expenses as a table
///
/// The expense being edited is marked with `*`.
pub fn format_expense_table(state: &BudgetState, settings: &Settings) -> String {
    let expenses = visible_expenses(state);

    if expenses.is_empty() {
        return match state.category_filter() {
            Some(category) => format!("No expenses in category '{}'.\n", category),
            None => "No expenses recorded yet.\n".to_string(),
        };
    }

    let rows = expenses.into_iter().map(|expense| ExpenseRow {
        marker: if state.editing_id() == Some(expense.id) {
            "*"
        } else {
            ""
        },
        id: expense.id.short(),
        date: expense.date.format(&settings.date_format).to_string(),
        name: expense.name.clone(),
        category: expense.category_name(),
        amount: settings.format_money(expense.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the budget summary block
pub fn format_summary(summary: &BudgetSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget:    {:>12}\n",
        settings.format_money(summary.budget)
    ));
    output.push_str(&format!(
        "Spent:     {:>12}  ({:.1}%)\n",
        settings.format_money(summary.spent),
        summary.percentage_spent
    ));
    output.push_str(&format!(
        "Remaining: {:>12}\n",
        settings.format_money(summary.remaining)
    ));

    if summary.is_over_budget() {
        output.push_str("Over budget!\n");
    }

    output
}

/// Format spending grouped by category
pub fn format_category_spending(spending: &[CategorySpending], settings: &Settings) -> String {
    if spending.is_empty() {
        return String::new();
    }

    let rows = spending.iter().map(|s| SpendingRow {
        category: s.category_name,
        count: s.count,
        total: settings.format_money(s.total),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense};
    use crate::services::summary::spending_by_category;
    use crate::store::{transition, Action};
    use chrono::NaiveDate;

    fn sample_state() -> BudgetState {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let state = BudgetState::new(Money::from_units(500));
        let state = transition(
            state,
            Action::AddExpense(NewExpense::new("Rent", Money::from_units(200), "home", date)),
        );
        transition(
            state,
            Action::AddExpense(NewExpense::new("Pizza", Money::from_cents(1250), "food", date)),
        )
    }

    #[test]
    fn test_empty_table_message() {
        let output = format_expense_table(&BudgetState::default(), &Settings::default());
        assert_eq!(output, "No expenses recorded yet.\n");
    }

    #[test]
    fn test_table_lists_expenses() {
        let output = format_expense_table(&sample_state(), &Settings::default());
        assert!(output.contains("Rent"));
        assert!(output.contains("Home"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("2024-05-01"));
    }

    #[test]
    fn test_table_respects_filter() {
        let state = transition(sample_state(), Action::FilterCategory(Some("food".into())));
        let output = format_expense_table(&state, &Settings::default());
        assert!(output.contains("Pizza"));
        assert!(!output.contains("Rent"));

        let state = transition(state, Action::FilterCategory(Some("health".into())));
        let output = format_expense_table(&state, &Settings::default());
        assert_eq!(output, "No expenses in category 'health'.\n");
    }

    #[test]
    fn test_summary_block() {
        let summary = BudgetSummary::from_state(&sample_state());
        let output = format_summary(&summary, &Settings::default());
        assert!(output.contains("$500.00"));
        assert!(output.contains("$212.50"));
        assert!(output.contains("$287.50"));
        assert!(!output.contains("Over budget"));
    }

    #[test]
    fn test_spending_table() {
        let state = sample_state();
        let output =
            format_category_spending(&spending_by_category(state.expenses()), &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("$200.00"));
    }
}
