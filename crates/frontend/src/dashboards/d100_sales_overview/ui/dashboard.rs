use super::category_panel::CategoryPanel;
use super::data_table::DataTable;
use super::date_selector::DateSelector;
use super::performance_chart::PerformanceChart;
use crate::dashboards::d100_sales_overview::filter_state::{FilterController, FilterState};
use crate::dashboards::d100_sales_overview::orchestrator::SalesOverviewData;
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Дневные продажи, прогноз и выручка по категории за месяц
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let filter = FilterController::new(FilterState::default());
    let data = SalesOverviewData::new();
    data.start(filter);

    let title = move || {
        let category = filter.with(|f| f.category.clone());
        format!(
            "{}: Daily Data",
            category.unwrap_or_else(|| "Overview".to_string())
        )
    };
    let country = move || format!("Country: {}", filter.with(|f| f.country.clone()));

    view! {
        <Shell
            navigation=|| view! { <Navbar /> }.into_any()
            categories=move || view! { <CategoryPanel filter=filter data=data /> }.into_any()
            main=move || view! {
                <div id="d100_sales_overview--dashboard" class="d100-dashboard">
                    <div class="d100-card">
                        <div class="d100-card__header">
                            <h2 class="d100-card__title">{title}</h2>
                            <span class="d100-card__country">{country}</span>
                        </div>

                        <DateSelector filter=filter years=data.years />
                        <DataTable filter=filter sales=data.sales />
                        <PerformanceChart predictions=data.predictions />
                    </div>
                </div>
            }.into_any()
        />
    }
}
