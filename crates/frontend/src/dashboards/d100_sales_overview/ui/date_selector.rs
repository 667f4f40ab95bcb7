use crate::dashboards::d100_sales_overview::filter_state::FilterController;
use crate::dashboards::d100_sales_overview::orchestrator::YearsSlot;
use leptos::prelude::*;

/// Выбор года и месяца
#[component]
pub fn DateSelector(filter: FilterController, years: RwSignal<YearsSlot>) -> impl IntoView {
    // Пока список с сервера не пришёл, доступен только год по умолчанию
    let year_options = move || {
        let current = filter.with(|f| f.year);
        let mut options = years.with(|s| s.data.clone()).unwrap_or_default();
        if !options.contains(&current) {
            options.push(current);
            options.sort_unstable();
        }
        options
    };

    let on_year_change = move |ev: leptos::ev::Event| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            let month = filter.get_untracked().month;
            filter.set_date(year, month);
        }
    };

    let on_month_change = move |ev: leptos::ev::Event| {
        if let Ok(month) = event_target_value(&ev).parse::<u32>() {
            let year = filter.get_untracked().year;
            filter.set_date(year, month);
        }
    };

    view! {
        <div class="d100-date-selector">
            <select class="d100-select" on:change=on_year_change>
                {move || year_options().into_iter().map(|year| view! {
                    <option
                        value=year.to_string()
                        selected=move || filter.with(|f| f.year == year)
                    >
                        {year}
                    </option>
                }).collect_view()}
            </select>

            <select class="d100-select" on:change=on_month_change>
                {(1..=12u32).map(|month| view! {
                    <option
                        value=month.to_string()
                        selected=move || filter.with(|f| f.month == month)
                    >
                        {format!("{:02}", month)}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
