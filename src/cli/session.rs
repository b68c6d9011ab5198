//! Session scripts
//!
//! A session script is a YAML (or JSON) list of steps that is replayed
//! through the expense form, the validator and the store, the same way an
//! interactive front end would drive them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult, ValidationError};
use crate::form::ExpenseForm;
use crate::models::category::resolve_category;
use crate::models::{ExpenseId, FieldUpdate, Money};
use crate::services::summary::{spending_by_category, BudgetSummary, CategorySpending};
use crate::services::validation::validate_budget;
use crate::store::{Action, BudgetState, BudgetStore};

/// An amount as written in a script: `200`, `12.5` or `"$12.50"`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Whole(i64),
    Decimal(f64),
    Text(String),
}

impl AmountInput {
    pub fn to_money(&self) -> PlannerResult<Money> {
        let out_of_range =
            |shown: String| PlannerError::Session(format!("Amount out of range: {}", shown));

        match self {
            Self::Whole(units) => {
                Money::checked_from_units(*units).ok_or_else(|| out_of_range(units.to_string()))
            }
            Self::Decimal(value) => {
                Money::from_decimal(*value).ok_or_else(|| out_of_range(value.to_string()))
            }
            Self::Text(text) => {
                Money::parse(text).map_err(|e| PlannerError::Session(e.to_string()))
            }
        }
    }
}

/// One step of a session
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Fill the form with a new expense and submit it
    Add {
        #[serde(default)]
        name: String,
        #[serde(default)]
        amount: Option<AmountInput>,
        #[serde(default)]
        category: String,
        /// Defaults to the session date
        #[serde(default)]
        date: Option<NaiveDate>,
    },

    /// Edit an existing expense: only the given fields change
    Edit {
        expense: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        amount: Option<AmountInput>,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        date: Option<NaiveDate>,
    },

    /// Delete an expense by name or id
    Remove { expense: String },

    /// Set a new budget, clearing all expenses
    Budget { amount: AmountInput },

    /// Filter the list by category; omit the category to clear
    Filter {
        #[serde(default)]
        category: Option<String>,
    },

    /// Start over with no budget
    Restart,
}

impl Step {
    /// Short label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Remove { .. } => "remove",
            Self::Budget { .. } => "budget",
            Self::Filter { .. } => "filter",
            Self::Restart => "restart",
        }
    }
}

/// A complete session script
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionScript {
    /// Initial budget; falls back to the configured default
    #[serde(default)]
    pub budget: Option<AmountInput>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl SessionScript {
    /// Load a script, choosing the format from the file extension
    pub fn load(path: &Path) -> PlannerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Io(format!("Failed to read session {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Self::from_yaml(&contents)
        }
    }

    pub fn from_yaml(contents: &str) -> PlannerResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

/// Whether a step took effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Applied,
    Rejected,
}

/// Result of replaying one step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// 1-based position in the script
    pub step: usize,
    pub action: &'static str,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Final state of a replayed session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub state: BudgetState,
    pub summary: BudgetSummary,
    pub spending: Vec<CategorySpending>,
    pub steps: Vec<StepOutcome>,
}

impl SessionReport {
    pub fn rejected(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|outcome| outcome.status == StepStatus::Rejected)
    }
}

/// Replays session scripts against a fresh store
pub struct SessionRunner<'a> {
    settings: &'a Settings,
    today: NaiveDate,
    strict: bool,
}

impl<'a> SessionRunner<'a> {
    pub fn new(settings: &'a Settings, today: NaiveDate) -> Self {
        Self {
            settings,
            today,
            strict: false,
        }
    }

    /// Fail on the first rejected step instead of recording it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn run(&self, script: &SessionScript) -> PlannerResult<SessionReport> {
        let mut store = BudgetStore::new();
        let mut form = ExpenseForm::new(self.today);
        let mut outcomes = Vec::with_capacity(script.steps.len());

        let initial_budget = match &script.budget {
            Some(amount) => Some(amount.to_money()?),
            None => self.settings.default_budget,
        };
        if let Some(budget) = initial_budget {
            store.dispatch(Action::AddBudget(validate_budget(budget)?));
        }

        for (index, step) in script.steps.iter().enumerate() {
            let number = index + 1;
            debug!(step = number, action = step.label(), "replaying step");

            let outcome = match self.apply(&mut store, &mut form, step)? {
                Ok(()) => StepOutcome {
                    step: number,
                    action: step.label(),
                    status: StepStatus::Applied,
                    message: None,
                },
                Err(err) => {
                    warn!(step = number, action = step.label(), error = %err, "step rejected");
                    if self.strict {
                        return Err(PlannerError::Session(format!(
                            "step {} ({}) rejected: {}",
                            number,
                            step.label(),
                            err
                        )));
                    }
                    StepOutcome {
                        step: number,
                        action: step.label(),
                        status: StepStatus::Rejected,
                        message: Some(err.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let summary = store.summary();
        let state = store.into_state();
        Ok(SessionReport {
            spending: spending_by_category(state.expenses()),
            summary,
            state,
            steps: outcomes,
        })
    }

    /// Apply one step
    ///
    /// The outer error aborts the session (bad script); the inner one is a
    /// rejected submission that leaves the state unchanged.
    fn apply(
        &self,
        store: &mut BudgetStore,
        form: &mut ExpenseForm,
        step: &Step,
    ) -> PlannerResult<Result<(), ValidationError>> {
        match step {
            Step::Add {
                name,
                amount,
                category,
                date,
            } => {
                form.reset();
                form.update(FieldUpdate::Name(name.clone()));
                if let Some(amount) = amount {
                    form.update(FieldUpdate::Amount(amount.to_money()?));
                }
                form.update(FieldUpdate::Category(category_id(category)?));
                form.update(FieldUpdate::Date(Some(date.unwrap_or(self.today))));
                Ok(self.submit(store, form))
            }

            Step::Edit {
                expense,
                name,
                amount,
                category,
                date,
            } => {
                let id = find_expense(store.state(), expense)?;
                store.dispatch(Action::GetExpenseById(id));
                form.sync_with(store.state());

                if let Some(name) = name {
                    form.update(FieldUpdate::Name(name.clone()));
                }
                if let Some(amount) = amount {
                    form.update(FieldUpdate::Amount(amount.to_money()?));
                }
                if let Some(category) = category {
                    form.update(FieldUpdate::Category(category_id(category)?));
                }
                if let Some(date) = date {
                    form.update(FieldUpdate::Date(Some(*date)));
                }

                let result = self.submit(store, form);
                if result.is_err() {
                    store.dispatch(Action::CancelEdit);
                    form.sync_with(store.state());
                }
                Ok(result)
            }

            Step::Remove { expense } => {
                let id = find_expense(store.state(), expense)?;
                store.dispatch(Action::RemoveExpense(id));
                Ok(Ok(()))
            }

            Step::Budget { amount } => Ok(validate_budget(amount.to_money()?).map(|budget| {
                store.dispatch(Action::AddBudget(budget));
            })),

            Step::Filter { category } => {
                let category = category.as_deref().map(category_id).transpose()?;
                store.dispatch(Action::FilterCategory(category));
                Ok(Ok(()))
            }

            Step::Restart => {
                store.dispatch(Action::RestartApp);
                form.reset();
                Ok(Ok(()))
            }
        }
    }

    fn submit(
        &self,
        store: &mut BudgetStore,
        form: &mut ExpenseForm,
    ) -> Result<(), ValidationError> {
        let action = form.submit(store.state())?;
        store.dispatch(action);
        Ok(())
    }
}

/// Resolve a category id or name; an empty string stays empty so the
/// validator can report it as missing
fn category_id(input: &str) -> PlannerResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    resolve_category(input)
        .map(|category| category.id.to_string())
        .ok_or_else(|| PlannerError::category_not_found(input))
}

fn find_expense(state: &BudgetState, identifier: &str) -> PlannerResult<ExpenseId> {
    state
        .find(identifier)
        .map(|expense| expense.id)
        .ok_or_else(|| PlannerError::expense_not_found(identifier))
}
