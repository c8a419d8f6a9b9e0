use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::form::{ExpenseForm, CATEGORIES};
use crate::model::{CategoryFilter, ExpenseId, ALL_CATEGORIES};
use crate::render::{ChartView, ListView, TotalsView};
use crate::settings::Settings;
use crate::theme::{toggle_label, Theme};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    html! {
        <button id="darkToggle" class="btn theme-toggle" {onclick}>
            { toggle_label(props.theme) }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub form: ExpenseForm,
    pub submitting: bool,
    pub on_input: Callback<ExpenseForm>,
    pub on_submit: Callback<()>,
}

#[function_component(ExpenseFormView)]
pub fn expense_form_view(props: &ExpenseFormProps) -> Html {
    let settings = use_context::<UseStateHandle<Settings>>();
    let currency_symbol = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "₹".to_string());

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let field = |update: fn(&mut ExpenseForm, String)| {
        let form = props.form.clone();
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            update(&mut next, input.value());
            on_input.emit(next);
        })
    };

    let on_category = {
        let form = props.form.clone();
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.category = select.value();
            on_input.emit(next);
        })
    };

    html! {
        <form id="expenseForm" class="card expense-form" {onsubmit}>
            <h2>{"Add New Expense"}</h2>
            <label for="description">{"Description"}</label>
            <input id="description" type="text" placeholder="What did you spend on?"
                value={props.form.description.clone()}
                oninput={field(|form, value| form.description = value)} />
            <label for="amount">{ format!("Amount ({})", currency_symbol) }</label>
            <input id="amount" type="number" step="0.01" min="0" placeholder="0.00"
                value={props.form.amount.clone()}
                oninput={field(|form, value| form.amount = value)} />
            <label for="category">{"Category"}</label>
            <select id="category" onchange={on_category}>
                { for CATEGORIES.iter().map(|category| html! {
                    <option value={*category} selected={props.form.category == *category}>{ *category }</option>
                }) }
            </select>
            <label for="date">{"Date"}</label>
            <input id="date" type="date"
                value={props.form.date.clone()}
                oninput={field(|form, value| form.date = value)} />
            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                { if props.submitting { "Saving..." } else { "Add Expense" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub categories: Vec<String>,
    pub selected: CategoryFilter,
    pub on_change: Callback<CategoryFilter>,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        CategoryFilter::from_select_value(&select.value())
    });
    html! {
        <select id="filterCategory" {onchange}>
            <option value={ALL_CATEGORIES} selected={props.selected == CategoryFilter::All}>{"All Categories"}</option>
            { for props.categories.iter().map(|category| html! {
                <option value={category.clone()} selected={props.selected.select_value() == category.as_str()}>
                    { category.clone() }
                </option>
            }) }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub view: ListView,
    pub on_delete: Callback<ExpenseId>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let rows = match &props.view {
        ListView::Empty { message } => {
            return html! {
                <div id="expensesList">
                    <div class="empty-state">
                        <div class="empty-state-icon">{"📊"}</div>
                        <p>{ *message }</p>
                    </div>
                </div>
            };
        }
        ListView::Rows(rows) => rows,
    };

    html! {
        <div id="expensesList">
            { for rows.iter().enumerate().map(|(idx, row)| {
                let delete = row.id.map(|id| {
                    let onclick = props.on_delete.reform(move |_: MouseEvent| id);
                    html! { <button class="btn btn-danger" {onclick}>{"Delete"}</button> }
                });
                html! {
                    <div key={row.id.map(|id| id.to_string()).unwrap_or_else(|| format!("row-{idx}"))} class="expense-item">
                        <span class={classes!("expense-category", row.category_class.clone())}>{ row.category.clone() }</span>
                        <div class="expense-details">
                            <div class="expense-description">{ row.description.clone() }</div>
                            <div class="expense-date">{ row.date.clone() }</div>
                        </div>
                        <div class="expense-amount">{ row.amount.clone() }</div>
                        { for delete }
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TotalsPanelProps {
    pub totals: Option<TotalsView>,
}

#[function_component(TotalsPanel)]
pub fn totals_panel(props: &TotalsPanelProps) -> Html {
    let (total, count) = match &props.totals {
        Some(totals) => (totals.total.clone(), totals.count.clone()),
        None => ("-".to_string(), "-".to_string()),
    };
    html! {
        <div class="stats">
            <div class="stat-card">
                <span class="stat-label">{"Total Expenses"}</span>
                <span id="totalExpenses" class="stat-value">{ total }</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"Transactions"}</span>
                <span id="totalCount" class="stat-value">{ count }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub chart: Option<ChartView>,
}

#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let body = match &props.chart {
        None => html! { <p class="muted">{"Loading..."}</p> },
        Some(ChartView::NoData { message }) => html! { <p class="muted">{ *message }</p> },
        Some(ChartView::Bars(bars)) => html! {
            <>
                { for bars.iter().map(|bar| html! {
                    <div key={bar.category.clone()} class="category-item">
                        <div class="category-name">{ bar.category.clone() }</div>
                        <div class="category-bar-container">
                            <div class="category-bar" style={format!("width: {}", bar.width())}></div>
                        </div>
                        <div class="category-amount">{ bar.amount.clone() }</div>
                    </div>
                }) }
            </>
        },
    };
    html! {
        <div id="categoryChart" class="card">
            <h2>{"Spending by Category"}</h2>
            { body }
        </div>
    }
}
