//! Expense model
//!
//! Three shapes of the same record: the editable [`DraftExpense`] a form
//! works on, the validated [`NewExpense`] payload used to add an expense, and
//! the stored [`Expense`] carrying its id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::category_name;
use super::ids::ExpenseId;
use super::money::Money;

/// The fields of an expense that a user fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseField {
    Name,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    /// All fields in form order
    pub fn all() -> &'static [Self] {
        &[Self::Name, Self::Amount, Self::Category, Self::Date]
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// A change to a single draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Amount(Money),
    Category(String),
    Date(Option<NaiveDate>),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> ExpenseField {
        match self {
            Self::Name(_) => ExpenseField::Name,
            Self::Amount(_) => ExpenseField::Amount,
            Self::Category(_) => ExpenseField::Category,
            Self::Date(_) => ExpenseField::Date,
        }
    }
}

/// Expense data as entered, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftExpense {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub amount: Money,

    /// Category id; empty until one is chosen
    #[serde(default)]
    pub category_id: String,

    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl DraftExpense {
    /// Create an empty draft dated `date`
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Apply a single field update
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Amount(amount) => self.amount = amount,
            FieldUpdate::Category(category_id) => self.category_id = category_id,
            FieldUpdate::Date(date) => self.date = date,
        }
    }

    /// Builder-style variant of [`DraftExpense::apply`]
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }

    /// The first required field that is empty, zero or unset
    pub fn missing_field(&self) -> Option<ExpenseField> {
        ExpenseField::all()
            .iter()
            .copied()
            .find(|field| match field {
                ExpenseField::Name => self.name.trim().is_empty(),
                ExpenseField::Amount => self.amount.is_zero(),
                ExpenseField::Category => self.category_id.trim().is_empty(),
                ExpenseField::Date => self.date.is_none(),
            })
    }
}

impl From<&Expense> for DraftExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount,
            category_id: expense.category_id.clone(),
            date: Some(expense.date),
        }
    }
}

/// Complete expense data without an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    pub category_id: String,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category_id: category_id.into(),
            date,
        }
    }

    /// Attach an id, producing a stored expense
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            name: self.name,
            amount: self.amount,
            category_id: self.category_id,
            date: self.date,
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub category_id: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense with a fresh id
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        NewExpense::new(name, amount, category_id, date).into_expense(ExpenseId::new())
    }

    /// Display name of the expense's category
    pub fn category_name(&self) -> &'static str {
        category_name(&self.category_id)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}
