use crate::dashboards::d100_sales_overview::filter_state::FilterController;
use crate::dashboards::d100_sales_overview::orchestrator::SalesSlot;
use crate::dashboards::d100_sales_overview::pivot::pivot;
use crate::shared::date_utils::month_columns;
use leptos::prelude::*;

/// Сводная таблица: строка на метрику, колонка на день выбранного месяца.
///
/// Колонки берутся из выбранных (год, месяц), а не из данных: после
/// неудачной загрузки таблица всё равно показывает текущий календарь.
#[component]
pub fn DataTable(filter: FilterController, sales: RwSignal<SalesSlot>) -> impl IntoView {
    let columns = Memo::new(move |_| filter.with(|f| month_columns(f.year, f.month)));

    let rows = move || {
        sales.with(|s| s.data.clone()).unwrap_or_else(|| {
            let (year, month) = filter.with(|f| (f.year, f.month));
            pivot(&[], year, month)
        })
    };

    view! {
        <div class="d100-table-wrapper">
            {move || sales.with(|s| s.loading).then(|| view! {
                <div class="d100-loading">"Loading sales data..."</div>
            })}

            {move || sales.with(|s| s.error.clone()).map(|err| view! {
                <div class="d100-error">{format!("Unable to fetch sales data: {}", err)}</div>
            })}

            <table class="d100-table">
                <thead>
                    <tr>
                        <th class="d100-table__information">"Information"</th>
                        {move || columns.get().into_iter().map(|day| view! {
                            <th class="d100-table__day">{day}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let days = columns.get();
                        rows().into_iter().map(|row| {
                            let cells = days
                                .iter()
                                .map(|day| view! { <td>{row.cell(day).display()}</td> })
                                .collect_view();
                            view! {
                                <tr data-metric=row.information.field()>
                                    <td class="d100-table__information">{row.information.label()}</td>
                                    {cells}
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
