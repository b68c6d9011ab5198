//! State store
//!
//! Holds the budget, the expense list and the editing id. All changes go
//! through [`transition`]; [`BudgetStore`] is the handle an application keeps
//! around and dispatches to.

pub mod action;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use reducer::transition;
pub use state::BudgetState;

use tracing::{debug, info};

use crate::models::Money;
use crate::services::summary::BudgetSummary;

/// Owner of the canonical budget state
///
/// Dispatch takes `&mut self`, so transitions are applied one at a time.
#[derive(Debug, Default)]
pub struct BudgetStore {
    state: BudgetState,
}

impl BudgetStore {
    /// Create a store with no budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the given budget
    pub fn with_budget(budget: Money) -> Self {
        Self {
            state: BudgetState::new(budget),
        }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Apply an action and return the new state
    pub fn dispatch(&mut self, action: Action) -> &BudgetState {
        debug!(action = %action, "dispatching");

        match &action {
            Action::AddBudget(budget) => info!(budget = %budget, "budget set"),
            Action::RestartApp => info!("budget cleared"),
            _ => {}
        }

        let current = std::mem::take(&mut self.state);
        self.state = transition(current, action);

        debug!(
            expenses = self.state.expenses().len(),
            editing = self.state.is_editing(),
            "state updated"
        );
        &self.state
    }

    /// Totals derived from the current state
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_state(&self.state)
    }

    /// Take the state out of the store
    pub fn into_state(self) -> BudgetState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    #[test]
    fn test_dispatch_updates_state_and_summary() {
        let mut store = BudgetStore::with_budget(Money::from_units(500));
        store.dispatch(Action::AddExpense(NewExpense::new(
            "Rent",
            Money::from_units(200),
            "home",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )));

        assert_eq!(store.state().expenses().len(), 1);
        let summary = store.summary();
        assert_eq!(summary.spent, Money::from_units(200));
        assert_eq!(summary.remaining, Money::from_units(300));
    }

    #[test]
    fn test_restart_via_store() {
        let mut store = BudgetStore::with_budget(Money::from_units(500));
        let state = store.dispatch(Action::RestartApp);
        assert_eq!(state, &BudgetState::default());
        assert_eq!(store.into_state(), BudgetState::default());
    }
}
