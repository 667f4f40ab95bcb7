use contracts::dashboards::d100_sales_overview::SalesQuery;
use leptos::prelude::*;

pub const COUNTRIES: [&str; 6] = ["All", "India", "Canada", "USA", "UAE", "Italy"];

pub const DEFAULT_COUNTRY: &str = "All";
pub const DEFAULT_CATEGORY: &str = "electronics";
pub const DEFAULT_YEAR: i32 = 2021;
pub const DEFAULT_MONTH: u32 = 1;

/// Четыре измерения фильтра дашборда
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub country: String,
    pub category: Option<String>,
    pub year: i32,
    /// Всегда в 1..=12
    pub month: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            category: Some(DEFAULT_CATEGORY.to_string()),
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
        }
    }
}

impl FilterState {
    pub fn with_country(&self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Option<String>) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    /// Паника, если `month` вне 1..=12.
    pub fn with_date(&self, year: i32, month: u32) -> Self {
        assert!((1..=12).contains(&month), "month out of range: {month}");
        Self {
            year,
            month,
            ..self.clone()
        }
    }

    /// Запрос для продаж и прогноза. `None`, пока категория не выбрана.
    /// Страна в него не входит.
    pub fn sales_query(&self) -> Option<SalesQuery> {
        self.category.as_ref().map(|category| SalesQuery {
            category: category.clone(),
            year: self.year,
            month: self.month,
        })
    }

    /// Год, на который нужно переключиться, чтобы выбор был среди `years`.
    /// `years` отсортированы по возрастанию.
    pub fn reconcile_year(&self, years: &[i32]) -> Option<i32> {
        if years.is_empty() || years.contains(&self.year) {
            return None;
        }
        years.last().copied()
    }
}

/// Отсортированные годы без повторов
pub fn normalize_years(mut years: Vec<i32>) -> Vec<i32> {
    years.sort_unstable();
    years.dedup();
    years
}

/// Единственная точка изменения `FilterState`.
///
/// Каждый сеттер заменяет состояние целиком и уведомляет всех читателей.
#[derive(Clone, Copy)]
pub struct FilterController {
    state: RwSignal<FilterState>,
}

impl FilterController {
    pub fn new(initial: FilterState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn get_untracked(&self) -> FilterState {
        self.state.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&FilterState) -> R) -> R {
        self.state.with(f)
    }

    pub fn set_country(&self, country: impl Into<String>) {
        let next = self.state.with_untracked(|s| s.with_country(country));
        self.state.set(next);
    }

    pub fn set_category(&self, category: Option<String>) {
        let next = self.state.with_untracked(|s| s.with_category(category));
        self.state.set(next);
    }

    pub fn set_date(&self, year: i32, month: u32) {
        let next = self.state.with_untracked(|s| s.with_date(year, month));
        self.state.set(next);
    }

    /// Переход на доступный год, если текущего нет в списке
    pub fn reconcile_year(&self, years: &[i32]) {
        let (current, month, target) = self
            .state
            .with_untracked(|s| (s.year, s.month, s.reconcile_year(years)));
        if let Some(year) = target {
            log::info!("year {} not available, switching to {}", current, year);
            self.set_date(year, month);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: &str, year: i32, month: u32) -> SalesQuery {
        SalesQuery {
            category: category.to_string(),
            year,
            month,
        }
    }

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.country, "All");
        assert_eq!(state.category.as_deref(), Some("electronics"));
        assert_eq!((state.year, state.month), (2021, 1));
    }

    #[test]
    fn test_setters_replace_only_their_fields() {
        let state = FilterState::default();
        let next = state.with_country("India");
        assert_eq!(next.country, "India");
        assert_eq!(next.category, state.category);
        assert_eq!((next.year, next.month), (state.year, state.month));

        let dated = next.with_date(2020, 2);
        assert_eq!(dated.country, "India");
        assert_eq!((dated.year, dated.month), (2020, 2));

        assert_eq!(state, FilterState::default());
    }

    #[test]
    #[should_panic(expected = "month out of range")]
    fn test_month_zero_panics() {
        FilterState::default().with_date(2021, 0);
    }

    #[test]
    #[should_panic(expected = "month out of range")]
    fn test_month_thirteen_panics() {
        FilterState::default().with_date(2021, 13);
    }

    #[test]
    fn test_sales_query_ignores_country() {
        let state = FilterState::default()
            .with_category(Some("electronics".into()))
            .with_date(2021, 1);
        assert_eq!(state.sales_query(), Some(query("electronics", 2021, 1)));
        assert_eq!(
            state.with_country("India").sales_query(),
            state.sales_query()
        );
    }

    #[test]
    fn test_no_query_without_category() {
        assert_eq!(FilterState::default().with_category(None).sales_query(), None);
    }

    #[test]
    fn test_reconcile_year() {
        let state = FilterState::default();
        assert_eq!(state.reconcile_year(&[]), None);
        assert_eq!(state.reconcile_year(&[2020, 2021]), None);
        assert_eq!(state.reconcile_year(&[2022, 2023]), Some(2023));
    }

    #[test]
    fn test_normalize_years() {
        assert_eq!(normalize_years(vec![2022, 2020, 2022, 2021]), vec![2020, 2021, 2022]);
    }

    #[test]
    fn test_controller_setters() {
        let owner = Owner::new();
        owner.with(|| {
            let filter = FilterController::new(FilterState::default());
            filter.set_country("India");
            filter.set_category(Some("furniture".into()));
            filter.set_date(2022, 12);

            let state = filter.get_untracked();
            assert_eq!(state.country, "India");
            assert_eq!(state.sales_query(), Some(query("furniture", 2022, 12)));
        });
    }

    #[test]
    fn test_controller_reconciles_year_keeping_month() {
        let owner = Owner::new();
        owner.with(|| {
            let filter = FilterController::new(FilterState::default().with_date(2021, 7));
            filter.reconcile_year(&[2023, 2024]);
            assert_eq!(filter.with(|s| (s.year, s.month)), (2024, 7));

            filter.reconcile_year(&[2024]);
            assert_eq!(filter.get_untracked().year, 2024);
        });
    }
}
