//! Actions accepted by the budget reducer

use std::fmt;

use crate::models::{Expense, ExpenseId, Money, NewExpense};

/// An intent dispatched to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the budget and start over with no expenses
    AddBudget(Money),

    /// Record a new expense under a freshly generated id
    AddExpense(NewExpense),

    /// Delete an expense
    RemoveExpense(ExpenseId),

    /// Start editing an expense
    GetExpenseById(ExpenseId),

    /// Replace an expense and leave editing mode
    UpdateExpense(Expense),

    /// Leave editing mode without changes
    CancelEdit,

    /// Show only expenses of one category, or all with `None`
    FilterCategory(Option<String>),

    /// Clear the budget and all expenses
    RestartApp,
}

impl Action {
    /// Stable kebab-case name, used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddBudget(_) => "add-budget",
            Self::AddExpense(_) => "add-expense",
            Self::RemoveExpense(_) => "remove-expense",
            Self::GetExpenseById(_) => "get-expense-by-id",
            Self::UpdateExpense(_) => "update-expense",
            Self::CancelEdit => "cancel-edit",
            Self::FilterCategory(_) => "filter-category",
            Self::RestartApp => "restart-app",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddBudget(amount) => write!(f, "{} {}", self.name(), amount),
            Self::AddExpense(expense) => {
                write!(f, "{} '{}' {}", self.name(), expense.name, expense.amount)
            }
            Self::RemoveExpense(id) | Self::GetExpenseById(id) => {
                write!(f, "{} {}", self.name(), id)
            }
            Self::UpdateExpense(expense) => write!(f, "{} {}", self.name(), expense.id),
            Self::FilterCategory(Some(category)) => write!(f, "{} {}", self.name(), category),
            Self::CancelEdit | Self::FilterCategory(None) | Self::RestartApp => {
                write!(f, "{}", self.name())
            }
        }
    }
}
