use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type ExpenseId = u64;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// Body of `POST /api/expenses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Statistics {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub categories: HashMap<String, f64>,
}

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Maps a filter `<select>` value to a filter.
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => expense.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.select_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expense_without_id_still_parses() {
        let expense: Expense = serde_json::from_value(json!({
            "description": "Tea",
            "amount": 12,
            "category": "Food",
            "date": "2024-03-02"
        }))
        .unwrap();
        assert_eq!(expense.id, None);
        assert_eq!(expense.amount, 12.0);
    }

    #[test]
    fn new_expense_sends_amount_as_number() {
        let body = serde_json::to_value(NewExpense {
            description: "Coffee".to_string(),
            amount: 3.5,
            category: "Food".to_string(),
            date: "2024-01-01".to_string(),
        })
        .unwrap();
        assert_eq!(body["amount"], json!(3.5));
        assert!(body["amount"].is_number());
    }

    #[test]
    fn statistics_tolerates_missing_fields() {
        let stats: Statistics = serde_json::from_value(json!({ "total": 10.5 })).unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn select_value_round_trips_all() {
        assert_eq!(CategoryFilter::from_select_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_select_value("Travel").select_value(),
            "Travel"
        );
    }
}
