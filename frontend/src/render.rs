//! View models for the list, totals and category chart. Components only map
//! these to markup, so everything shown to the user is decided here.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::format::{category_class, format_date, CurrencyFormat};
use crate::model::{Expense, ExpenseId, Statistics};

pub const EMPTY_LIST_MESSAGE: &str = "No expenses found. Start tracking your spending!";
pub const NO_CHART_DATA_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    /// `None` for records the server stored without an id; those get no delete action.
    pub id: Option<ExpenseId>,
    pub category: String,
    pub category_class: String,
    pub description: String,
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty { message: &'static str },
    Rows(Vec<ExpenseRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalsView {
    pub total: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub category: String,
    pub percentage: f64,
    pub amount: String,
}

impl CategoryBar {
    /// CSS width value for the bar.
    pub fn width(&self) -> String {
        format!("{}%", self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    NoData { message: &'static str },
    Bars(Vec<CategoryBar>),
}

pub fn render_list<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    currency: &CurrencyFormat,
) -> ListView {
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|expense| ExpenseRow {
            id: expense.id,
            category: expense.category.clone(),
            category_class: category_class(&expense.category),
            description: expense.description.clone(),
            date: format_date(&expense.date),
            amount: currency.format(expense.amount),
        })
        .collect();

    if rows.is_empty() {
        ListView::Empty {
            message: EMPTY_LIST_MESSAGE,
        }
    } else {
        ListView::Rows(rows)
    }
}

pub fn render_totals(stats: &Statistics, currency: &CurrencyFormat) -> TotalsView {
    TotalsView {
        total: currency.format(stats.total),
        count: stats.count.to_string(),
    }
}

/// One bar per category, largest first, sized relative to the largest amount.
/// Equal amounts are ordered by label.
pub fn render_category_chart(
    categories: &HashMap<String, f64>,
    currency: &CurrencyFormat,
) -> ChartView {
    if categories.is_empty() {
        return ChartView::NoData {
            message: NO_CHART_DATA_MESSAGE,
        };
    }

    let mut sorted: Vec<(&String, f64)> = categories
        .iter()
        .map(|(category, amount)| (category, *amount))
        .collect();
    sorted.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let max = sorted.first().map(|(_, amount)| *amount).unwrap_or(0.0);
    let bars = sorted
        .into_iter()
        .map(|(category, amount)| CategoryBar {
            category: category.clone(),
            percentage: if max > 0.0 { amount / max * 100.0 } else { 0.0 },
            amount: currency.format(amount),
        })
        .collect();
    ChartView::Bars(bars)
}
