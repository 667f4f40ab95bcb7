use serde::{Deserialize, Serialize};

/// Вид списка, который отдаёт `/data/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Category,
    Year,
}

/// Запрос `/data/?type=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataListQuery {
    #[serde(rename = "type")]
    pub kind: DataKind,
}

/// Ответ `/data/?type=category`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Ответ `/data/?type=year`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearsResponse {
    #[serde(default)]
    pub years: Vec<i32>,
}

/// Общий запрос для отфильтрованных продаж и прогноза.
///
/// Он же ключ слота запроса: два запроса равны ровно тогда, когда
/// вернут одни и те же данные.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesQuery {
    pub category: String,
    pub year: i32,
    pub month: u32,
}

/// Один агрегированный день из `/salesdata/filtered_data/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Дата в ISO, "YYYY-MM-DD"
    #[serde(rename = "Date", alias = "date")]
    pub date: String,
    pub quantity_sold: Option<f64>,
    pub forecast: Option<f64>,
    pub revenue: Option<f64>,
}

/// Один день из `/prediction/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Дата в ISO, "YYYY-MM-DD"
    pub date: String,
    pub quantity_sold: Option<f64>,
    pub prediction: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_record_uses_capitalised_date_key() {
        let json = r#"[
            {"Date": "2021-01-01", "quantity_sold": 5, "forecast": 4.5, "revenue": 1200},
            {"Date": "2021-01-02", "quantity_sold": null, "forecast": 3.0}
        ]"#;
        let records: Vec<DailyRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2021-01-01");
        assert_eq!(records[0].quantity_sold, Some(5.0));
        assert_eq!(records[0].revenue, Some(1200.0));
        assert_eq!(records[1].quantity_sold, None);
        assert_eq!(records[1].revenue, None);
    }

    #[test]
    fn test_daily_record_accepts_lowercase_date() {
        let record: DailyRecord =
            serde_json::from_str(r#"{"date": "2020-02-29", "revenue": 10.5}"#).unwrap();
        assert_eq!(record.date, "2020-02-29");
        assert_eq!(record.revenue, Some(10.5));
        assert_eq!(record.forecast, None);
    }

    #[test]
    fn test_option_lists_default_to_empty() {
        let categories: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(categories.categories.is_empty());

        let years: YearsResponse = serde_json::from_str(r#"{"years": [2021, 2020]}"#).unwrap();
        assert_eq!(years.years, vec![2021, 2020]);
    }

    #[test]
    fn test_data_list_query_serializes_type_key() {
        let value = serde_json::to_value(DataListQuery {
            kind: DataKind::Category,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "type": "category" }));
    }

    #[test]
    fn test_chart_point_with_missing_prediction() {
        let point: ChartPoint =
            serde_json::from_str(r#"{"date": "2021-01-03", "quantity_sold": 7}"#).unwrap();
        assert_eq!(point.quantity_sold, Some(7.0));
        assert_eq!(point.prediction, None);
    }
}
