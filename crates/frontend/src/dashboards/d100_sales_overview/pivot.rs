//! Календарный свод: дневные записи -> строка на метрику, колонка на день
//!
//! Только чистые функции. Набор колонок всегда строится из (год, месяц),
//! а не из самих записей.

use crate::shared::date_utils::month_columns;
use crate::shared::table::number_format::format_metric;
use contracts::dashboards::d100_sales_overview::DailyRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Метрики в строках таблицы, в порядке отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    QuantitySold,
    Forecast,
    Revenue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::QuantitySold, Metric::Forecast, Metric::Revenue];

    pub fn label(self) -> &'static str {
        match self {
            Metric::QuantitySold => "Quantity Sold",
            Metric::Forecast => "Forecast",
            Metric::Revenue => "Revenue",
        }
    }

    /// Имя поля в ответе бэкенда
    pub fn field(self) -> &'static str {
        match self {
            Metric::QuantitySold => "quantity_sold",
            Metric::Forecast => "forecast",
            Metric::Revenue => "revenue",
        }
    }

    pub fn value_of(self, record: &DailyRecord) -> Option<f64> {
        match self {
            Metric::QuantitySold => record.quantity_sold,
            Metric::Forecast => record.forecast,
            Metric::Revenue => record.revenue,
        }
    }
}

/// Ячейка таблицы: число или пусто, если за день данных нет
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cell {
    Value(f64),
    #[default]
    Empty,
}

impl Cell {
    pub fn display(self) -> String {
        match self {
            Cell::Value(v) => format_metric(v),
            Cell::Empty => String::new(),
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Value).unwrap_or_default()
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Value(v) => serializer.serialize_f64(*v),
            Cell::Empty => serializer.serialize_str(""),
        }
    }
}

/// Одна метрика по дням месяца
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub information: Metric,
    pub cells: BTreeMap<String, Cell>,
}

impl PivotRow {
    /// Ячейка для `date`; даты вне месяца пустые
    pub fn cell(&self, date: &str) -> Cell {
        self.cells.get(date).copied().unwrap_or_default()
    }
}

impl Serialize for PivotRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len() + 1))?;
        map.serialize_entry("information", self.information.label())?;
        for (date, cell) in &self.cells {
            map.serialize_entry(date, cell)?;
        }
        map.end()
    }
}

/// Дата -> значение для одной метрики.
///
/// При повторе даты побеждает последняя запись; нет значения -> `Cell::Empty`.
pub fn format_data(records: &[DailyRecord], metric: Metric) -> BTreeMap<String, Cell> {
    records
        .iter()
        .map(|r| (r.date.clone(), Cell::from(metric.value_of(r))))
        .collect()
}

/// Раскладывает `records` по календарю (год, месяц).
///
/// Всегда три строки (Quantity Sold, Forecast, Revenue), в каждой ровно одна
/// ячейка на день месяца. Записи вне месяца отбрасываются.
pub fn pivot(records: &[DailyRecord], year: i32, month: u32) -> Vec<PivotRow> {
    let columns = month_columns(year, month);

    Metric::ALL
        .into_iter()
        .map(|metric| {
            let lookup = format_data(records, metric);
            let cells = columns
                .iter()
                .map(|date| (date.clone(), lookup.get(date).copied().unwrap_or_default()))
                .collect();
            PivotRow {
                information: metric,
                cells,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, quantity: Option<f64>, forecast: Option<f64>, revenue: Option<f64>) -> DailyRecord {
        DailyRecord {
            date: date.to_string(),
            quantity_sold: quantity,
            forecast,
            revenue,
        }
    }

    #[test]
    fn test_format_data_maps_dates_to_values() {
        let records = vec![record("2021-01-01", Some(5.0), None, None)];

        let quantity = format_data(&records, Metric::QuantitySold);
        assert_eq!(quantity.len(), 1);
        assert_eq!(quantity["2021-01-01"], Cell::Value(5.0));

        let forecast = format_data(&records, Metric::Forecast);
        assert_eq!(forecast["2021-01-01"], Cell::Empty);
        assert_eq!(forecast["2021-01-01"].display(), "");
    }

    #[test]
    fn test_pivot_has_three_rows_in_fixed_order() {
        let rows = pivot(&[], 2021, 1);
        let labels: Vec<_> = rows.iter().map(|r| r.information.label()).collect();
        assert_eq!(labels, vec!["Quantity Sold", "Forecast", "Revenue"]);
    }

    #[test]
    fn test_column_count_matches_calendar() {
        for (year, month, days) in [(2021, 2, 28), (2020, 2, 29), (2021, 1, 31), (2021, 4, 30)] {
            let rows = pivot(&[], year, month);
            for row in &rows {
                assert_eq!(row.cells.len(), days, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_record_outside_month_is_dropped() {
        let records = vec![
            record("2021-01-15", Some(3.0), Some(2.5), Some(90.0)),
            record("2021-02-01", Some(99.0), Some(99.0), Some(99.0)),
        ];
        let rows = pivot(&records, 2021, 1);

        assert_eq!(rows[0].cells.len(), 31);
        assert!(!rows[0].cells.contains_key("2021-02-01"));
        assert_eq!(rows[0].cell("2021-01-15"), Cell::Value(3.0));
        assert_eq!(rows[1].cell("2021-01-15"), Cell::Value(2.5));
        assert_eq!(rows[2].cell("2021-01-15"), Cell::Value(90.0));
        assert_eq!(rows[0].cell("2021-01-16"), Cell::Empty);
        assert_eq!(rows[0].cell("2021-02-01"), Cell::Empty);
    }

    #[test]
    fn test_january_columns_are_prefixed() {
        let rows = pivot(&[record("2021-01-01", Some(1.0), None, None)], 2021, 1);
        assert!(rows[0].cells.keys().all(|d| d.starts_with("2021-01-")));
        assert_eq!(rows[0].cells.len(), 31);
    }

    #[test]
    fn test_zero_is_a_value_not_blank() {
        let rows = pivot(&[record("2021-03-01", Some(0.0), None, None)], 2021, 3);
        assert_eq!(rows[0].cell("2021-03-01").display(), "0");
    }

    #[test]
    fn test_pivot_is_deterministic() {
        let records = vec![record("2021-06-10", Some(4.0), Some(4.4), Some(120.0))];
        assert_eq!(pivot(&records, 2021, 6), pivot(&records, 2021, 6));
    }

    #[test]
    fn test_row_serializes_to_flat_object() {
        let rows = pivot(&[record("2021-02-01", Some(5.0), None, None)], 2021, 2);
        let value = serde_json::to_value(&rows[0]).unwrap();

        assert_eq!(value["information"], "Quantity Sold");
        assert_eq!(value["2021-02-01"], 5.0);
        assert_eq!(value["2021-02-02"], "");
        assert_eq!(value.as_object().map(|o| o.len()), Some(29));
    }
}
