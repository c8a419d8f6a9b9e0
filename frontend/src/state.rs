use std::rc::Rc;
use yew::Reducible;

use crate::model::{CategoryFilter, Expense};

/// The session's expense list: the last fetched collection plus the
/// category filter applied to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseListState {
    expenses: Vec<Expense>,
    filter: CategoryFilter,
}

impl ExpenseListState {
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    /// Expenses matching the current filter, in server order.
    pub fn filtered(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses
            .iter()
            .filter(move |expense| self.filter.matches(expense))
    }

    /// Distinct categories in first-seen order. The filtered category stays
    /// listed even when no expense carries it anymore.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for expense in &self.expenses {
            if !categories.contains(&expense.category) {
                categories.push(expense.category.clone());
            }
        }
        if let CategoryFilter::Category(selected) = &self.filter {
            if !categories.contains(selected) {
                categories.push(selected.clone());
            }
        }
        categories
    }
}

pub enum ListAction {
    Loaded(Vec<Expense>),
    SetFilter(CategoryFilter),
}

impl Reducible for ExpenseListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Loaded(expenses) => next.replace_all(expenses),
            ListAction::SetFilter(filter) => next.set_filter(filter),
        }
        Rc::new(next)
    }
}
