use crate::dashboards::d100_sales_overview::category_tree::TreeRow;
use crate::dashboards::d100_sales_overview::filter_state::{FilterController, COUNTRIES};
use crate::dashboards::d100_sales_overview::orchestrator::SalesOverviewData;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Левая панель: фильтр страны и навигатор категорий
#[component]
pub fn CategoryPanel(filter: FilterController, data: SalesOverviewData) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="d100-categories">
            <div class="d100-categories__header">
                <span class="d100-categories__title">"Categories"</span>
                <button
                    class="icon-button"
                    title="Hide categories"
                    on:click=move |_| ctx.toggle_categories()
                >
                    {icon("layers")}
                </button>
            </div>

            <CountrySelector filter=filter />

            {move || data.categories.with(|s| s.loading).then(|| view! {
                <div class="d100-loading">"Loading categories..."</div>
            })}

            {move || data.categories.with(|s| s.error.clone()).map(|err| view! {
                <div class="d100-error">{format!("Unable to fetch categories: {}", err)}</div>
            })}

            <div class="d100-tree">
                {move || {
                    data.tree
                        .with(|t| t.visible_rows())
                        .into_iter()
                        .map(|row| view! { <CategoryRow row=row filter=filter data=data /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn CountrySelector(filter: FilterController) -> impl IntoView {
    view! {
        <select
            class="d100-select d100-select--wide"
            on:change=move |ev| filter.set_country(event_target_value(&ev))
        >
            {COUNTRIES.into_iter().map(|country| view! {
                <option
                    value=country
                    selected=move || filter.with(|f| f.country == country)
                >
                    {country}
                </option>
            }).collect_view()}
        </select>
    }
}

/// Строка дерева. Стрелка раскрывает, название выбирает.
#[component]
fn CategoryRow(row: TreeRow, filter: FilterController, data: SalesOverviewData) -> impl IntoView {
    let TreeRow {
        key,
        name,
        depth,
        has_children,
        is_expanded,
    } = row;

    let indent = format!("padding-left: {:.2}rem;", depth as f32 * 1.25);
    let data_key = key.clone();
    let selected_key = key.clone();
    let is_selected =
        move || filter.with(|f| f.category.as_deref() == Some(selected_key.as_str()));

    let toggle_key = key.clone();
    let disclosure = has_children.then(move || {
        let chevron = if is_expanded { "chevron-down" } else { "chevron-right" };
        view! {
            <span
                class="d100-tree__toggle"
                on:click=move |_| data.toggle_category(&toggle_key)
            >
                {icon(chevron)}
            </span>
        }
    });

    view! {
        <div
            class="d100-tree__row"
            class:d100-tree__row--selected=is_selected
            style=indent
            data-key=data_key
        >
            {disclosure}
            <span
                class="d100-tree__label"
                class:d100-tree__label--leaf=!has_children
                on:click=move |_| data.select_category(filter, key.clone(), None)
            >
                {name}
            </span>
        </div>
    }
}
