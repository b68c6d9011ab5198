//! Submission validation
//!
//! Decides whether a draft may be dispatched. Nothing here touches the
//! state; the caller dispatches the returned action.

use crate::error::ValidationError;
use crate::models::{DraftExpense, ExpenseField, Money, NewExpense};
use crate::store::{Action, BudgetState};

use super::summary::remaining_budget;

/// Check a draft against the remaining budget
///
/// `previous_amount` is the amount of the expense being replaced when
/// editing, zero otherwise. Only the difference counts against the budget.
pub fn validate_submission(
    draft: &DraftExpense,
    remaining: Money,
    previous_amount: Money,
) -> Result<NewExpense, ValidationError> {
    if let Some(field) = draft.missing_field() {
        return Err(ValidationError::MissingField(field));
    }

    if draft.amount.is_negative() {
        return Err(ValidationError::NegativeAmount);
    }

    let requested = draft.amount - previous_amount;
    if requested > remaining {
        return Err(ValidationError::BudgetExceeded {
            requested,
            remaining,
        });
    }

    let date = draft
        .date
        .ok_or(ValidationError::MissingField(ExpenseField::Date))?;

    Ok(NewExpense::new(
        draft.name.trim(),
        draft.amount,
        draft.category_id.trim(),
        date,
    ))
}

/// Validate a draft against a state and route it to the matching action
///
/// Produces `UpdateExpense` while an expense is being edited and
/// `AddExpense` otherwise.
pub fn prepare_submission(
    state: &BudgetState,
    draft: &DraftExpense,
) -> Result<Action, ValidationError> {
    let remaining = remaining_budget(state);

    match state.editing_expense() {
        Some(editing) => {
            let accepted = validate_submission(draft, remaining, editing.amount)?;
            Ok(Action::UpdateExpense(accepted.into_expense(editing.id)))
        }
        None => {
            let accepted = validate_submission(draft, remaining, Money::zero())?;
            Ok(Action::AddExpense(accepted))
        }
    }
}

/// Budgets must be positive
pub fn validate_budget(amount: Money) -> Result<Money, ValidationError> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidBudget)
    }
}
