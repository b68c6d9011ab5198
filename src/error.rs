//! Custom error types for the expense planner
//!
//! This module defines the error hierarchy using thiserror. Validation
//! failures are kept in their own enum because the form layer shows them to
//! the user, while `PlannerError` covers everything the CLI can run into.

use thiserror::Error;

use crate::models::{ExpenseField, Money};

/// Reasons a submitted expense (or budget) is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty, zero or unset
    #[error("All fields are required ({0} is missing)")]
    MissingField(ExpenseField),

    /// Expense amounts cannot be negative
    #[error("Expense amount cannot be negative")]
    NegativeAmount,

    /// The expense does not fit in what is left of the budget
    #[error("That expense exceeds the remaining budget: need {requested}, have {remaining}")]
    BudgetExceeded { requested: Money, remaining: Money },

    /// Budgets must be positive amounts
    #[error("Budget must be a positive amount")]
    InvalidBudget,
}

/// The main error type for expense planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Session script errors
    #[error("Session error: {0}")]
    Session(String),

    /// Rejected submissions
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl PlannerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlannerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for expense planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
