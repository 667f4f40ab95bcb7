use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Сворачиваемая левая зона. `zone`: "navigation" или "categories".
#[component]
pub fn Left(zone: &'static str, children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_open = move || match zone {
        "navigation" => ctx.navigation_open.get(),
        _ => ctx.categories_open.get(),
    };

    view! {
        <div data-zone=zone class=format!("left left--{}", zone) class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
