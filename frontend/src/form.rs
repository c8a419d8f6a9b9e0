use chrono::NaiveDate;
use tracing::{debug, info};

use crate::api::ExpenseApi;
use crate::error::{ApiError, FormError};
use crate::model::{Expense, ExpenseId, NewExpense};

pub const DEFAULT_CATEGORY: &str = "Food";
pub const CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Other",
];

/// Raw text of the expense form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn to_new_expense(&self) -> Result<NewExpense, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::MissingCategory);
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(FormError::MissingDate);
        }

        let raw_amount = self.amount.trim();
        let amount = raw_amount
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| FormError::InvalidAmount(raw_amount.to_string()))?;
        if amount < 0.0 {
            return Err(FormError::NegativeAmount);
        }

        Ok(NewExpense {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted(Vec<Expense>),
}

/// Creates the expense, then reloads the whole list whatever the create
/// reply carried.
pub async fn submit(
    api: &impl ExpenseApi,
    expense: &NewExpense,
) -> Result<Vec<Expense>, ApiError> {
    match api.create(expense).await? {
        Some(created) => info!("created expense {:?}", created.id),
        None => info!("expense \"{}\" accepted", expense.description),
    }
    api.list().await
}

/// Deletes after `confirm` agrees, then reloads the whole list. Nothing is
/// sent when the user declines.
pub async fn delete(
    api: &impl ExpenseApi,
    id: ExpenseId,
    confirm: impl FnOnce() -> bool,
) -> Result<DeleteOutcome, ApiError> {
    if !confirm() {
        debug!("delete of expense {id} cancelled");
        return Ok(DeleteOutcome::Cancelled);
    }
    api.remove(id).await?;
    info!("deleted expense {id}");
    Ok(DeleteOutcome::Deleted(api.list().await?))
}
