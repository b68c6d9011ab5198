//! Service layer
//!
//! Logic that sits on top of the store: derived totals and submission
//! validation.

pub mod summary;
pub mod validation;

pub use summary::{
    remaining, remaining_budget, spending_by_category, total_spent, visible_expenses,
    BudgetSummary, CategorySpending,
};
pub use validation::{prepare_submission, validate_budget, validate_submission};
