//! Expense Planner - record and edit expenses against a fixed budget
//!
//! The core is a small state store: a [`store::BudgetState`] holding the
//! budget, the expense list and the expense being edited, changed only by
//! [`store::transition`]. Totals are derived on demand by
//! [`services::summary`], and [`services::validation`] decides whether a
//! draft may be submitted.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, ids, money and the category table
//! - `store`: Budget state, actions and the reducer
//! - `services`: Derived totals and submission validation
//! - `form`: Headless expense form state
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and session replay
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_planner::form::ExpenseForm;
//! use expense_planner::models::{FieldUpdate, Money};
//! use expense_planner::store::{Action, BudgetStore};
//!
//! let mut store = BudgetStore::new();
//! store.dispatch(Action::AddBudget(Money::from_units(500)));
//!
//! let mut form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
//! form.update(FieldUpdate::Name("Rent".into()));
//! form.update(FieldUpdate::Amount(Money::from_units(200)));
//! form.update(FieldUpdate::Category("home".into()));
//!
//! let action = form.submit(store.state()).unwrap();
//! store.dispatch(action);
//! assert_eq!(store.summary().remaining, Money::from_units(300));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

pub use error::{PlannerError, PlannerResult, ValidationError};
