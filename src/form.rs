//! Expense entry/edit form
//!
//! Headless form state for adding or editing an expense: the draft being
//! typed, the amount of the expense being replaced, and the last error to
//! show. Rendering is left to whatever front end owns the form.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{DraftExpense, ExpenseId, FieldUpdate, Money};
use crate::services::validation::prepare_submission;
use crate::store::{Action, BudgetState};

/// State for the expense form
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    /// Current field values
    draft: DraftExpense,

    /// Amount of the expense being edited, zero for a new expense
    previous_amount: Money,

    /// Expense the draft was loaded from, if any
    loaded_from: Option<ExpenseId>,

    /// Date a reset draft starts with
    today: NaiveDate,

    /// Error message to display
    error_message: Option<String>,
}

impl ExpenseForm {
    /// Create an empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: DraftExpense::dated(today),
            previous_amount: Money::zero(),
            loaded_from: None,
            today,
            error_message: None,
        }
    }

    pub fn draft(&self) -> &DraftExpense {
        &self.draft
    }

    pub fn previous_amount(&self) -> Money {
        self.previous_amount
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Set a single field
    pub fn update(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
        self.clear_error();
    }

    /// Load the expense being edited into the draft
    ///
    /// Does nothing while idle or when the edited expense was already
    /// loaded, so in-progress changes survive repeated syncs.
    pub fn sync_with(&mut self, state: &BudgetState) {
        match state.editing_expense() {
            Some(expense) if self.loaded_from != Some(expense.id) => {
                self.draft = DraftExpense::from(expense);
                self.previous_amount = expense.amount;
                self.loaded_from = Some(expense.id);
                self.clear_error();
            }
            Some(_) => {}
            None if self.loaded_from.is_some() => self.reset(),
            None => {}
        }
    }

    /// Validate the draft and produce the action to dispatch
    ///
    /// On success the form is reset for the next entry. On failure the draft
    /// is kept and the error message is set.
    pub fn submit(&mut self, state: &BudgetState) -> Result<Action, ValidationError> {
        match prepare_submission(state, &self.draft) {
            Ok(action) => {
                self.reset();
                Ok(action)
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Discard the draft
    pub fn reset(&mut self) {
        self.draft = DraftExpense::dated(self.today);
        self.previous_amount = Money::zero();
        self.loaded_from = None;
        self.clear_error();
    }

    pub fn is_editing(&self, state: &BudgetState) -> bool {
        state.is_editing()
    }

    /// Form heading
    pub fn title(&self, state: &BudgetState) -> &'static str {
        if self.is_editing(state) {
            "Update expense"
        } else {
            "New expense"
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self, state: &BudgetState) -> &'static str {
        if self.is_editing(state) {
            "Update expense"
        } else {
            "Record expense"
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseField, NewExpense};
    use crate::store::transition;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn fill(form: &mut ExpenseForm, name: &str, units: i64, category: &str) {
        form.update(FieldUpdate::Name(name.into()));
        form.update(FieldUpdate::Amount(Money::from_units(units)));
        form.update(FieldUpdate::Category(category.into()));
    }

    fn state_with_rent() -> BudgetState {
        transition(
            BudgetState::new(Money::from_units(1000)),
            Action::AddExpense(NewExpense::new("Rent", Money::from_units(300), "home", today())),
        )
    }

    #[test]
    fn test_new_form_is_dated_today() {
        let form = ExpenseForm::new(today());
        assert_eq!(form.draft().date, Some(today()));
        assert!(form.previous_amount().is_zero());
        assert_eq!(form.title(&BudgetState::default()), "New expense");
        assert_eq!(form.submit_label(&BudgetState::default()), "Record expense");
    }

    #[test]
    fn test_submit_resets_on_success() {
        let state = BudgetState::new(Money::from_units(500));
        let mut form = ExpenseForm::new(today());
        fill(&mut form, "Groceries", 80, "food");

        let action = form.submit(&state).unwrap();
        assert!(matches!(action, Action::AddExpense(_)));
        assert_eq!(form.draft(), &DraftExpense::dated(today()));
        assert!(form.error_message().is_none());
    }

    #[test]
    fn test_submit_keeps_draft_on_rejection() {
        let state = BudgetState::new(Money::from_units(50));
        let mut form = ExpenseForm::new(today());
        fill(&mut form, "Groceries", 80, "food");

        let err = form.submit(&state).unwrap_err();
        assert!(matches!(err, ValidationError::BudgetExceeded { .. }));
        assert_eq!(form.draft().name, "Groceries");
        assert!(form.error_message().unwrap().contains("exceeds the remaining budget"));

        // Editing a field clears the message
        form.update(FieldUpdate::Amount(Money::from_units(40)));
        assert!(form.error_message().is_none());
    }

    #[test]
    fn test_missing_field_message() {
        let mut form = ExpenseForm::new(today());
        form.update(FieldUpdate::Name("Cinema".into()));
        let err = form.submit(&BudgetState::new(Money::from_units(10))).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(ExpenseField::Amount));
        assert!(form.error_message().is_some());
    }

    #[test]
    fn test_sync_loads_edited_expense() {
        let state = state_with_rent();
        let id = state.expenses()[0].id;
        let state = transition(state, Action::GetExpenseById(id));

        let mut form = ExpenseForm::new(today());
        form.sync_with(&state);

        assert_eq!(form.draft().name, "Rent");
        assert_eq!(form.previous_amount(), Money::from_units(300));
        assert_eq!(form.title(&state), "Update expense");
        assert_eq!(form.submit_label(&state), "Update expense");
    }

    #[test]
    fn test_sync_keeps_in_progress_changes() {
        let state = state_with_rent();
        let id = state.expenses()[0].id;
        let state = transition(state, Action::GetExpenseById(id));

        let mut form = ExpenseForm::new(today());
        form.sync_with(&state);
        form.update(FieldUpdate::Amount(Money::from_units(500)));
        form.sync_with(&state);

        assert_eq!(form.draft().amount, Money::from_units(500));
    }

    #[test]
    fn test_sync_resets_after_edit_cancelled() {
        let state = state_with_rent();
        let id = state.expenses()[0].id;
        let editing = transition(state, Action::GetExpenseById(id));

        let mut form = ExpenseForm::new(today());
        form.sync_with(&editing);
        let idle = transition(editing, Action::CancelEdit);
        form.sync_with(&idle);

        assert_eq!(form.draft(), &DraftExpense::dated(today()));
        assert!(form.previous_amount().is_zero());
    }

    #[test]
    fn test_edit_submits_update() {
        let state = state_with_rent();
        let id = state.expenses()[0].id;
        let state = transition(state, Action::GetExpenseById(id));

        let mut form = ExpenseForm::new(today());
        form.sync_with(&state);
        form.update(FieldUpdate::Amount(Money::from_units(500)));

        let action = form.submit(&state).unwrap();
        let state = transition(state, action);
        assert_eq!(state.expenses().len(), 1);
        assert_eq!(state.expenses()[0].id, id);
        assert_eq!(state.expenses()[0].amount, Money::from_units(500));
        assert!(!state.is_editing());
    }
}
