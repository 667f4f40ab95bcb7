//! Готовит точки прогноза для графика.
//!
//! Точки хранятся как пришли; подписи дат формируются только при отрисовке
//! (см. `shared::date_utils::format_chart_date`).

use contracts::dashboards::d100_sales_overview::ChartPoint;

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 400.0;
pub const MARGIN_TOP: f64 = 5.0;
pub const MARGIN_RIGHT: f64 = 30.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const MARGIN_LEFT: f64 = 60.0;

/// Линии графика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    QuantitySold,
    Prediction,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::QuantitySold, Series::Prediction];

    pub fn label(self) -> &'static str {
        match self {
            Series::QuantitySold => "Quantity Sold",
            Series::Prediction => "Prediction",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Series::QuantitySold => "#8884d8",
            Series::Prediction => "#82ca9d",
        }
    }

    pub fn value_of(self, point: &ChartPoint) -> Option<f64> {
        match self {
            Series::QuantitySold => point.quantity_sold,
            Series::Prediction => point.prediction,
        }
    }
}

/// Ответ прогноза, готовый к отрисовке
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_points(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Значения одной серии, по индексам `points()`
    pub fn values(&self, series: Series) -> Vec<Option<f64>> {
        self.points.iter().map(|p| series.value_of(p)).collect()
    }

    /// Верхняя граница оси Y, не меньше 1
    pub fn y_max(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| Series::ALL.into_iter().filter_map(move |s| s.value_of(p)))
            .fold(1.0_f64, f64::max)
    }

    pub fn x(&self, index: usize) -> f64 {
        let inner = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        if self.points.len() <= 1 {
            return MARGIN_LEFT + inner / 2.0;
        }
        MARGIN_LEFT + index as f64 / (self.points.len() - 1) as f64 * inner
    }

    pub fn y(&self, value: f64) -> f64 {
        let inner = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + inner - (value / self.y_max()) * inner
    }

    /// SVG-путь серии. Пропуски разрывают линию.
    pub fn path(&self, series: Series) -> String {
        let mut path = String::new();
        let mut pen_down = false;
        for (i, value) in self.values(series).into_iter().enumerate() {
            match value {
                Some(v) => {
                    let command = if pen_down { 'L' } else { 'M' };
                    if !path.is_empty() {
                        path.push(' ');
                    }
                    path.push_str(&format!("{} {:.1} {:.1}", command, self.x(i), self.y(v)));
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        path
    }

    /// Индексы с подписью на оси X: равномерно, последняя точка всегда
    /// подписана.
    pub fn tick_indices(&self, max_ticks: usize) -> Vec<usize> {
        let len = self.points.len();
        if len == 0 || max_ticks == 0 {
            return Vec::new();
        }
        let step = len.div_ceil(max_ticks).max(1);
        let mut ticks: Vec<usize> = (0..len).rev().step_by(step).collect();
        ticks.reverse();
        ticks
    }
}
