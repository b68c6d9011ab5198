//! Budget state
//!
//! The single value owned by the store. Fields are private so that the only
//! way to change them is through [`super::transition`], which keeps the
//! editing id pointing at a live expense and the expense ids unique.

use serde::Serialize;

use crate::models::{Expense, ExpenseId, Money};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BudgetState {
    pub(super) budget: Money,

    /// Expenses in insertion order
    pub(super) expenses: Vec<Expense>,

    /// Expense currently being edited, if any
    pub(super) editing_id: Option<ExpenseId>,

    /// Category id the expense list is filtered by, if any
    pub(super) category_filter: Option<String>,
}

impl BudgetState {
    /// Create a state with the given budget and no expenses
    pub fn new(budget: Money) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn editing_id(&self) -> Option<ExpenseId> {
        self.editing_id
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    /// Whether a budget has been set
    pub fn has_budget(&self) -> bool {
        self.budget.is_positive()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// The expense being edited
    ///
    /// `None` when idle. Callers should not assume an editing id always
    /// resolves; treat `None` as "nothing to edit".
    pub fn editing_expense(&self) -> Option<&Expense> {
        self.editing_id.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ExpenseId) -> bool {
        self.get(id).is_some()
    }

    /// Find an expense by id (full or short form) or by name
    ///
    /// Name matching is case-insensitive; the first match in insertion order
    /// wins when names repeat.
    pub fn find(&self, identifier: &str) -> Option<&Expense> {
        let identifier = identifier.trim();
        self.expenses
            .iter()
            .find(|e| e.id.matches(identifier))
            .or_else(|| {
                self.expenses
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(identifier))
            })
    }
}
