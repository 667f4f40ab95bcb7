//! Связывает четыре группы запросов с фильтром.
//!
//! У каждой группы свой сигнал `QuerySlot` и эффект, который повторяет запрос
//! при смене ключа группы. Ответы проходят проверку билета слота, поэтому
//! отображение обновляет только самый свежий запрос группы.

use super::api::{self, LoadError};
use super::category_tree::CategoryTree;
use super::chart_data::ChartSeries;
use super::filter_state::{normalize_years, FilterController};
use super::pivot::{pivot, PivotRow};
use super::query_slot::{Completion, QuerySlot};
use contracts::dashboards::d100_sales_overview::{DailyRecord, SalesQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Debug;
use std::future::Future;

pub type CategoriesSlot = QuerySlot<(), Vec<String>>;
pub type YearsSlot = QuerySlot<(), Vec<i32>>;
pub type SalesSlot = QuerySlot<SalesQuery, Vec<PivotRow>>;
pub type PredictionsSlot = QuerySlot<SalesQuery, ChartSeries>;

/// Данные с бэкенда для отображения, по слоту на группу запросов
#[derive(Clone, Copy)]
pub struct SalesOverviewData {
    pub categories: RwSignal<CategoriesSlot>,
    pub years: RwSignal<YearsSlot>,
    pub sales: RwSignal<SalesSlot>,
    pub predictions: RwSignal<PredictionsSlot>,
    pub tree: RwSignal<CategoryTree>,
}

impl SalesOverviewData {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(QuerySlot::default()),
            years: RwSignal::new(QuerySlot::default()),
            sales: RwSignal::new(QuerySlot::default()),
            predictions: RwSignal::new(QuerySlot::default()),
            tree: RwSignal::new(CategoryTree::default()),
        }
    }

    /// Запускает все группы запросов. Вызывать один раз из компонента-владельца.
    pub fn start(&self, filter: FilterController) {
        let query = sales_key(filter);

        watch(self.categories, "categories", || Some(()), |_| {
            api::fetch_categories()
        });

        watch(self.years, "years", || Some(()), |_| async {
            api::fetch_years().await.map(normalize_years)
        });

        watch(
            self.sales,
            "sales data",
            move || query.get(),
            |q: SalesQuery| async move {
                let (year, month) = (q.year, q.month);
                api::fetch_filtered_sales(q)
                    .await
                    .map(|records| pivot(&records, year, month))
            },
        );

        watch(
            self.predictions,
            "prediction data",
            move || query.get(),
            |q: SalesQuery| async move {
                api::fetch_predictions(q).await.map(ChartSeries::from_points)
            },
        );

        let (categories, tree) = (self.categories, self.tree);
        Effect::new(move |_| {
            if let Some(names) = categories.with(|s| s.data.clone()) {
                tree.update(|t| *t = t.rebuild(&names));
            }
        });

        let years = self.years;
        Effect::new(move |_| {
            if let Some(options) = years.with(|s| s.data.clone()) {
                filter.reconcile_year(&options);
            }
        });
    }

    pub fn toggle_category(&self, key: &str) {
        self.tree.update(|t| {
            t.toggle(key);
        });
    }

    /// Выбор категории. Выбор не раскрывает узел.
    ///
    /// Непустые `prefetched` показываются сразу; обычный запрос продаж
    /// для новой категории всё равно выполняется и заменяет их.
    pub fn select_category(
        &self,
        filter: FilterController,
        key: String,
        prefetched: Option<Vec<DailyRecord>>,
    ) {
        filter.set_category(Some(key));

        if let Some(records) = prefetched.filter(|r| !r.is_empty()) {
            let state = filter.get_untracked();
            self.sales
                .update(|s| s.prime(pivot(&records, state.year, state.month)));
        }
    }
}

impl Default for SalesOverviewData {
    fn default() -> Self {
        Self::new()
    }
}

/// Ключ запросов продаж и прогнозов. Страна в него не входит, поэтому её
/// смена не вызывает повторных запросов.
fn sales_key(filter: FilterController) -> Memo<Option<SalesQuery>> {
    Memo::new(move |_| filter.with(|f| f.sales_query()))
}

/// Повторяет `fetch` при каждой смене `key` и передаёт результат через `slot`.
fn watch<K, T, Fut>(
    slot: RwSignal<QuerySlot<K, T>>,
    label: &'static str,
    key: impl Fn() -> Option<K> + 'static,
    fetch: impl Fn(K) -> Fut + Copy + 'static,
) where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, LoadError>> + 'static,
{
    Effect::new(move |_| {
        let Some(key) = key() else {
            return;
        };
        let Some(ticket) = slot.try_update(|s| s.begin(key.clone())) else {
            return;
        };

        spawn_local(async move {
            let result = fetch(key).await;
            if let Err(err) = &result {
                log::error!("Error fetching {}: {}", label, err);
            }

            let issued_for = ticket.key.clone();
            if slot.try_update(|s| s.complete(ticket, result)) == Some(Completion::Discarded) {
                log::debug!("Discarding stale {} response for {:?}", label, issued_for);
            }
        });
    });
}
