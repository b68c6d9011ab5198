//! Display formatting for terminal output

pub mod category;
pub mod expense;

pub use category::format_category_list;
pub use expense::{format_category_spending, format_expense_table, format_summary};
