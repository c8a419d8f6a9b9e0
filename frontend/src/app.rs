use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ExpenseApi, HttpExpenseApi};
use crate::components::{
    CategoryChart, ExpenseFormView, ExpenseList, FilterSelect, ThemeToggle, TotalsPanel,
};
use crate::dom;
use crate::form::{self, DeleteOutcome, ExpenseForm, SubmitState};
use crate::model::{CategoryFilter, ExpenseId, Statistics};
use crate::render::{render_category_chart, render_list, render_totals};
use crate::settings::Settings;
use crate::state::{ExpenseListState, ListAction};
use crate::storage::LocalStorage;
use crate::theme::{BodyClass, ThemeStore};

pub fn theme_store() -> ThemeStore<LocalStorage, BodyClass> {
    ThemeStore::new(LocalStorage, BodyClass)
}

fn load_expenses(api: HttpExpenseApi, list: UseReducerHandle<ExpenseListState>) {
    spawn_local(async move {
        match api.list().await {
            Ok(expenses) => {
                info!("loaded {} expenses", expenses.len());
                list.dispatch(ListAction::Loaded(expenses));
            }
            Err(err) => dom::alert(&format!("Error loading expenses: {err}")),
        }
    });
}

fn load_stats(api: HttpExpenseApi, stats: UseStateHandle<Option<Statistics>>) {
    spawn_local(async move {
        match api.stats().await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(err) => dom::alert(&format!("Error loading statistics: {err}")),
        }
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(|| Settings::load(&LocalStorage));
    let list = use_reducer(ExpenseListState::default);
    let stats = use_state(|| None::<Statistics>);
    let expense_form = use_state(|| ExpenseForm::new(dom::today()));
    let submit_state = use_state(SubmitState::default);
    let themes = use_memo(|_| theme_store(), ());
    let theme = {
        let themes = themes.clone();
        use_state(move || themes.preference())
    };
    let api = HttpExpenseApi::new(settings.api_base.clone());

    {
        let api = api.clone();
        let list = list.clone();
        let stats = stats.clone();
        use_effect_with_deps(
            move |_| {
                load_expenses(api.clone(), list);
                load_stats(api, stats);
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let api = api.clone();
        let list = list.clone();
        let stats = stats.clone();
        let expense_form = expense_form.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |_: ()| {
            if *submit_state == SubmitState::Submitting {
                return;
            }
            let expense = match expense_form.to_new_expense() {
                Ok(expense) => expense,
                Err(err) => {
                    warn!("invalid expense form: {err}");
                    dom::alert(&err.to_string());
                    return;
                }
            };

            submit_state.set(SubmitState::Submitting);
            let api = api.clone();
            let list = list.clone();
            let stats = stats.clone();
            let expense_form = expense_form.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                match form::submit(&api, &expense).await {
                    Ok(expenses) => {
                        list.dispatch(ListAction::Loaded(expenses));
                        let mut cleared = (*expense_form).clone();
                        cleared.reset(dom::today());
                        expense_form.set(cleared);
                        dom::alert("Expense added successfully!");
                        load_stats(api, stats);
                    }
                    Err(err) => dom::alert(&format!("Error adding expense: {err}")),
                }
                submit_state.set(SubmitState::Idle);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let list = list.clone();
        let stats = stats.clone();
        Callback::from(move |id: ExpenseId| {
            let api = api.clone();
            let list = list.clone();
            let stats = stats.clone();
            spawn_local(async move {
                let confirm = || dom::confirm("Are you sure you want to delete this expense?");
                match form::delete(&api, id, confirm).await {
                    Ok(DeleteOutcome::Deleted(expenses)) => {
                        list.dispatch(ListAction::Loaded(expenses));
                        dom::alert("Expense deleted successfully!");
                        load_stats(api, stats);
                    }
                    Ok(DeleteOutcome::Cancelled) => {}
                    Err(err) => dom::alert(&format!("Error deleting expense: {err}")),
                }
            });
        })
    };

    let on_filter = {
        let list = list.clone();
        Callback::from(move |filter: CategoryFilter| {
            info!("filter changed to {filter}");
            list.dispatch(ListAction::SetFilter(filter));
        })
    };

    let on_input = {
        let expense_form = expense_form.clone();
        Callback::from(move |next: ExpenseForm| expense_form.set(next))
    };

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(themes.toggle()))
    };

    let currency = settings.currency();
    let list_view = render_list(list.filtered(), &currency);
    let totals = (*stats).as_ref().map(|stats| render_totals(stats, &currency));
    let chart = (*stats)
        .as_ref()
        .map(|stats| render_category_chart(&stats.categories, &currency));

    html! {
        <ContextProvider<UseStateHandle<Settings>> context={settings}>
            <div class="container">
                <header class="header">
                    <h1>{"Expense Tracker"}</h1>
                    <ThemeToggle theme={*theme} {on_toggle} />
                </header>
                <TotalsPanel {totals} />
                <div class="grid">
                    <ExpenseFormView
                        form={(*expense_form).clone()}
                        submitting={*submit_state == SubmitState::Submitting}
                        {on_input}
                        {on_submit} />
                    <CategoryChart {chart} />
                </div>
                <section class="card">
                    <div class="list-header">
                        <h2>{"Recent Expenses"}</h2>
                        <FilterSelect
                            categories={list.categories()}
                            selected={list.filter().clone()}
                            on_change={on_filter} />
                    </div>
                    <ExpenseList view={list_view} {on_delete} />
                </section>
            </div>
        </ContextProvider<UseStateHandle<Settings>>>
    }
}
