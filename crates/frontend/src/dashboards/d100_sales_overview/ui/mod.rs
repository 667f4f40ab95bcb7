mod category_panel;
mod dashboard;
mod data_table;
mod date_selector;
mod performance_chart;

pub use dashboard::SalesOverviewDashboard;
