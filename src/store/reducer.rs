//! The budget reducer
//!
//! Maps `(state, action)` to the next state. Actions that reference an
//! unknown expense degrade to no-ops instead of failing.

use crate::models::ExpenseId;

use super::action::Action;
use super::state::BudgetState;

/// Apply an action to a state, returning the next state
pub fn transition(state: BudgetState, action: Action) -> BudgetState {
    let mut state = state;

    match action {
        Action::AddBudget(budget) => {
            state = BudgetState::new(budget);
        }

        Action::AddExpense(new_expense) => {
            let id = fresh_id(&state);
            state.expenses.push(new_expense.into_expense(id));
        }

        Action::RemoveExpense(id) => {
            state.expenses.retain(|e| e.id != id);
            if state.editing_id == Some(id) {
                state.editing_id = None;
            }
        }

        Action::GetExpenseById(id) => {
            // Unknown ids leave the store idle so the editing id never dangles
            state.editing_id = state.contains(id).then_some(id);
        }

        Action::UpdateExpense(expense) => {
            if let Some(slot) = state.expenses.iter_mut().find(|e| e.id == expense.id) {
                *slot = expense;
            }
            state.editing_id = None;
        }

        Action::CancelEdit => {
            state.editing_id = None;
        }

        Action::FilterCategory(category) => {
            state.category_filter = category.filter(|c| !c.trim().is_empty());
        }

        Action::RestartApp => {
            state = BudgetState::default();
        }
    }

    state
}

fn fresh_id(state: &BudgetState) -> ExpenseId {
    loop {
        let id = ExpenseId::new();
        if !state.contains(id) {
            return id;
        }
    }
}
