pub mod global_context;
pub mod left;

use global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Основной каркас приложения.
///
/// ```text
/// +------------+--------------+---------------------------+
/// | Navigation |  Categories  |          Content          |
/// |   (Left)   |    (Left)    |                           |
/// +------------+--------------+---------------------------+
/// ```
///
/// Обе левые зоны можно скрыть, тогда над контентом появляется панель восстановления.
#[component]
pub fn Shell<N, C, M>(navigation: N, categories: C, main: M) -> impl IntoView
where
    N: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    M: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left zone="navigation">
                {navigation()}
            </left::Left>

            <left::Left zone="categories">
                {categories()}
            </left::Left>

            <div class="app-main">
                <RestoreBar />
                {main()}
            </div>
        </div>
    }
}

/// Кнопки возврата скрытых панелей
#[component]
fn RestoreBar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-restore-bar">
            <Show when=move || !ctx.navigation_open.get()>
                <button class="app-restore-bar__menu" on:click=move |_| ctx.toggle_navigation()>
                    {icon("menu")}
                    <span>"Show Menu"</span>
                </button>
            </Show>
            <Show when=move || !ctx.categories_open.get()>
                <button class="app-restore-bar__categories" on:click=move |_| ctx.toggle_categories()>
                    {icon("layers")}
                    <span>"Show Categories"</span>
                </button>
            </Show>
        </div>
    }
}
