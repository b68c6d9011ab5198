//! Core data models
//!
//! Expenses, their ids and amounts, and the static category table.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CATEGORIES};
pub use expense::{DraftExpense, Expense, ExpenseField, FieldUpdate, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
