use crate::dashboards::d100_sales_overview::chart_data::{
    ChartSeries, Series, CHART_HEIGHT, CHART_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT,
    MARGIN_TOP,
};
use crate::dashboards::d100_sales_overview::orchestrator::PredictionsSlot;
use crate::shared::date_utils::format_chart_date;
use crate::shared::table::number_format::format_rounded;
use leptos::prelude::*;

const Y_TICKS: usize = 4;
const MAX_X_TICKS: usize = 8;

/// Продажи против прогноза за выбранный месяц
#[component]
pub fn PerformanceChart(predictions: RwSignal<PredictionsSlot>) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <div class="d100-chart">
            {move || predictions.with(|s| s.loading).then(|| view! {
                <div class="d100-loading">"Loading predictions..."</div>
            })}

            {move || predictions.with(|s| s.error.clone()).map(|err| view! {
                <div class="d100-error">{format!("Unable to fetch prediction data: {}", err)}</div>
            })}

            {move || {
                let series = predictions.with(|s| s.data.clone()).unwrap_or_default();
                if series.is_empty() {
                    view! { <div class="d100-chart__empty">"No prediction data"</div> }.into_any()
                } else {
                    render_chart(series, hovered).into_any()
                }
            }}
        </div>
    }
}

fn render_chart(series: ChartSeries, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let y_max = series.y_max();
    let y_ticks: Vec<(f64, String)> = (0..=Y_TICKS)
        .map(|i| {
            let value = y_max * i as f64 / Y_TICKS as f64;
            (series.y(value), format_rounded(value))
        })
        .collect();

    let x_ticks: Vec<(f64, String)> = series
        .tick_indices(MAX_X_TICKS)
        .into_iter()
        .map(|i| (series.x(i), format_chart_date(&series.points()[i].date)))
        .collect();

    let lines: Vec<(String, &'static str)> = Series::ALL
        .into_iter()
        .map(|s| (series.path(s), s.color()))
        .filter(|(path, _)| !path.is_empty())
        .collect();

    // Невидимые полосы наведения, по одной на точку
    let band_width = (CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / series.points().len() as f64;
    let bands: Vec<f64> = (0..series.points().len())
        .map(|i| series.x(i) - band_width / 2.0)
        .collect();

    let plot_bottom = CHART_HEIGHT - MARGIN_BOTTOM;
    let plot_height = plot_bottom - MARGIN_TOP;
    let tooltip_series = series.clone();

    view! {
        <div class="d100-chart__body">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                class="d100-chart__svg"
                style="width: 100%; height: auto;"
                on:mouseleave=move |_| hovered.set(None)
            >
                {y_ticks.into_iter().map(|(y, label)| view! {
                    <>
                        <line
                            x1=MARGIN_LEFT.to_string()
                            y1=y.to_string()
                            x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                            y2=y.to_string()
                            stroke="#e5e7eb"
                            stroke-dasharray="3 3"
                        />
                        <text
                            x=(MARGIN_LEFT - 8.0).to_string()
                            y=y.to_string()
                            text-anchor="end"
                            dominant-baseline="middle"
                            font-size="12"
                            fill="#6b7280"
                        >
                            {label}
                        </text>
                    </>
                }).collect_view()}

                {x_ticks.into_iter().map(|(x, label)| view! {
                    <text
                        x=x.to_string()
                        y=(plot_bottom + 20.0).to_string()
                        text-anchor="middle"
                        font-size="12"
                        fill="#6b7280"
                    >
                        {label}
                    </text>
                }).collect_view()}

                {lines.into_iter().map(|(d, color)| view! {
                    <path d=d fill="none" stroke=color stroke-width="2" />
                }).collect_view()}

                {bands.into_iter().enumerate().map(|(i, x)| view! {
                    <rect
                        x=x.to_string()
                        y=MARGIN_TOP.to_string()
                        width=band_width.to_string()
                        height=plot_height.to_string()
                        fill="transparent"
                        on:mouseenter=move |_| hovered.set(Some(i))
                    />
                }).collect_view()}
            </svg>

            <div class="d100-chart__tooltip">
                {move || hovered.get().and_then(|i| tooltip_series.points().get(i).cloned()).map(|point| {
                    let values = Series::ALL
                        .into_iter()
                        .map(|s| {
                            let value = s.value_of(&point).map(format_rounded).unwrap_or_else(|| "-".to_string());
                            format!("{}: {}", s.label(), value)
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    view! {
                        <span>{format!("{}: {}", format_chart_date(&point.date), values)}</span>
                    }
                })}
            </div>

            <div class="d100-chart__legend">
                {Series::ALL.into_iter().map(|s| view! {
                    <span class="d100-chart__legend-item">
                        <span class="d100-chart__swatch" style=format!("background: {};", s.color())></span>
                        {s.label()}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}
