use crate::shared::api_utils::{api_base, join_url};
use contracts::dashboards::d100_sales_overview::{
    CategoriesResponse, ChartPoint, DailyRecord, DataKind, DataListQuery, SalesQuery,
    YearsResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

const DATA_PATH: &str = "data/";
const FILTERED_SALES_PATH: &str = "salesdata/filtered_data/";
const PREDICTION_PATH: &str = "prediction/";

/// Ошибка загрузки одной группы запросов, показывается в её виджете
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Полный URL эндпоинта с параметрами запроса
pub fn endpoint_url<Q: Serialize>(base: &str, path: &str, query: &Q) -> Result<String, LoadError> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| LoadError::Request(e.to_string()))?;
    Ok(format!("{}?{}", join_url(base, path), query_string))
}

async fn get_json<T, Q>(path: &str, query: &Q) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let url = endpoint_url(&api_base(), path, query)?;
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;
    decode(&text)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Названия категорий для навигатора
pub async fn fetch_categories() -> Result<Vec<String>, LoadError> {
    let query = DataListQuery {
        kind: DataKind::Category,
    };
    let data: CategoriesResponse = get_json(DATA_PATH, &query).await?;
    Ok(data.categories)
}

/// Годы, за которые есть продажи
pub async fn fetch_years() -> Result<Vec<i32>, LoadError> {
    let query = DataListQuery {
        kind: DataKind::Year,
    };
    let data: YearsResponse = get_json(DATA_PATH, &query).await?;
    Ok(data.years)
}

/// Дневные агрегаты по категории за месяц
pub async fn fetch_filtered_sales(query: SalesQuery) -> Result<Vec<DailyRecord>, LoadError> {
    get_json(FILTERED_SALES_PATH, &query).await
}

/// Фактические и прогнозные продажи по категории за месяц
pub async fn fetch_predictions(query: SalesQuery) -> Result<Vec<ChartPoint>, LoadError> {
    get_json(PREDICTION_PATH, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_sales_url_carries_three_params() {
        let query = SalesQuery {
            category: "electronics".to_string(),
            year: 2021,
            month: 1,
        };
        let url = endpoint_url("http://localhost:8000/api/", FILTERED_SALES_PATH, &query).unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/api/salesdata/filtered_data/?category=electronics&year=2021&month=1"
        );
    }

    #[test]
    fn test_data_list_url() {
        let query = DataListQuery {
            kind: DataKind::Year,
        };
        let url = endpoint_url("/api/", DATA_PATH, &query).unwrap();
        assert_eq!(url, "/api/data/?type=year");
    }

    #[test]
    fn test_category_is_url_encoded() {
        let query = SalesQuery {
            category: "home & garden".to_string(),
            year: 2022,
            month: 11,
        };
        let url = endpoint_url("/api/", PREDICTION_PATH, &query).unwrap();
        assert!(url.starts_with("/api/prediction/?category="));
        assert!(!url.contains(' '));
        assert!(url.ends_with("&year=2022&month=11"));
    }

    #[test]
    fn test_load_error_messages() {
        assert_eq!(LoadError::Status(500).to_string(), "HTTP error: 500");
        assert_eq!(
            LoadError::Decode("expected value".into()).to_string(),
            "Failed to parse response: expected value"
        );
    }

    #[test]
    fn test_decode_reports_malformed_body() {
        let years: YearsResponse = decode(r#"{"years":[2021,2022]}"#).unwrap();
        assert_eq!(years.years, vec![2021, 2022]);

        let err = decode::<YearsResponse>("<html>").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
