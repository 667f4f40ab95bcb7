use crate::dashboards::SalesOverviewDashboard;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Видимость панелей общая для layout и панелей дашборда
    provide_context(AppGlobalContext::new());

    view! {
        <SalesOverviewDashboard />
    }
}
