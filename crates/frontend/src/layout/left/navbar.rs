use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Меню приложения. Обзор продаж пока единственная страница.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let items = vec![("d100_sales_overview", "📊 Dashboard")];

    view! {
        <nav class="main-nav-bar">
            <div class="main-nav-bar__header">
                <span class="main-nav-bar__title">"Menu"</span>
                <button
                    class="icon-button"
                    title="Hide menu"
                    on:click=move |_| ctx.toggle_navigation()
                >
                    {icon("menu")}
                </button>
            </div>
            <ul>
                {items.into_iter().map(|(key, title)| {
                    view! {
                        <li class="main-nav-bar__item main-nav-bar__item--active" data-key=key>
                            <span>{title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
